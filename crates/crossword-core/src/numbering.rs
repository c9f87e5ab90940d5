use crate::grid::{Grid, Position};
use crate::layout::Placement;
use serde::{Deserialize, Serialize};

/// Clue numbers laid over the grid, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Numbering {
    size: usize,
    numbers: Vec<Option<u32>>,
}

impl Numbering {
    /// Number every cell that starts an across or down run of two or more
    /// letters, counting from 1 in row-major order over the whole grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let mut numbers = vec![None; size * size];
        let mut next = 1;

        for pos in grid.positions() {
            if !grid.is_filled(pos) {
                continue;
            }
            let (row, col) = (pos.row as isize, pos.col as isize);
            let starts_across =
                grid.letter_at(row, col - 1).is_none() && grid.letter_at(row, col + 1).is_some();
            let starts_down =
                grid.letter_at(row - 1, col).is_none() && grid.letter_at(row + 1, col).is_some();

            if starts_across || starts_down {
                numbers[pos.row * size + pos.col] = Some(next);
                next += 1;
            }
        }

        Self { size, numbers }
    }

    pub fn get(&self, pos: Position) -> Option<u32> {
        self.numbers[pos.row * self.size + pos.col]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Highest number assigned, zero for an empty grid
    pub fn count(&self) -> u32 {
        self.numbers.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Copy each placement's number from its start cell
    pub fn apply(&self, placements: &mut [Placement]) {
        for placement in placements {
            placement.number = self.get(placement.start()).unwrap_or(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    #[test]
    fn test_numbers_cross() {
        let grid = Grid::from_rows(5, &[".O...", ".CAT.", ".T..."]).unwrap();
        // OCT runs down from (0,1), CAT runs across from (1,1)
        let numbering = Numbering::from_grid(&grid);
        assert_eq!(numbering.get(Position::new(0, 1)), Some(1));
        assert_eq!(numbering.get(Position::new(1, 1)), Some(2));
        assert_eq!(numbering.get(Position::new(1, 2)), None);
        assert_eq!(numbering.count(), 2);
    }

    #[test]
    fn test_shared_start_gets_one_number() {
        let grid = Grid::from_rows(4, &["CAT.", "A...", "T..."]).unwrap();
        let numbering = Numbering::from_grid(&grid);
        assert_eq!(numbering.get(Position::new(0, 0)), Some(1));
        assert_eq!(numbering.count(), 1);

        let mut placements = vec![
            Placement::new("CAT", "", Position::new(0, 0), Direction::Across),
            Placement::new("CAT", "", Position::new(0, 0), Direction::Down),
        ];
        numbering.apply(&mut placements);
        assert!(placements.iter().all(|p| p.number == 1));
    }

    #[test]
    fn test_single_letters_unnumbered() {
        let grid = Grid::from_rows(3, &["A.B", "...", "C.."]).unwrap();
        assert_eq!(Numbering::from_grid(&grid).count(), 0);
    }

    #[test]
    fn test_edges_count_as_empty() {
        let grid = Grid::from_rows(3, &["...", "...", ".AB"]).unwrap();
        let numbering = Numbering::from_grid(&grid);
        assert_eq!(numbering.get(Position::new(2, 1)), Some(1));
    }
}
