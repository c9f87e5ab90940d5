use crate::generator::GenerationMeta;
use crate::grid::{Direction, Grid, Position};
use crate::layout::Placement;
use crate::numbering::Numbering;
use serde::{Deserialize, Serialize};

/// Tight bounding box of the filled cells, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Bounds {
    /// Bounding box of the filled cells, or the whole grid when nothing is filled
    pub fn of(grid: &Grid) -> Self {
        let mut filled = grid.positions().filter(|&pos| grid.is_filled(pos));
        let Some(first) = filled.next() else {
            let last = grid.size().saturating_sub(1);
            return Self {
                min_row: 0,
                max_row: last,
                min_col: 0,
                max_col: last,
            };
        };

        filled.fold(
            Self {
                min_row: first.row,
                max_row: first.row,
                min_col: first.col,
                max_col: first.col,
            },
            |b, pos| Self {
                min_row: b.min_row.min(pos.row),
                max_row: b.max_row.max(pos.row),
                min_col: b.min_col.min(pos.col),
                max_col: b.max_col.max(pos.col),
            },
        )
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.min_row..=self.max_row).contains(&pos.row) && (self.min_col..=self.max_col).contains(&pos.col)
    }
}

/// A numbered clue, as shown in a clue list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u32,
    pub direction: Direction,
    pub text: String,
    pub answer: String,
    pub start: Position,
}

/// A finished puzzle. Read-only once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResult {
    /// Solution grid
    pub grid: Grid,
    pub placements: Vec<Placement>,
    pub numbering: Numbering,
    pub bounds: Bounds,
    pub meta: GenerationMeta,
}

impl PuzzleResult {
    /// Number the final layout and compute its bounds
    pub fn finalize(grid: Grid, mut placements: Vec<Placement>, meta: GenerationMeta) -> Self {
        let numbering = Numbering::from_grid(&grid);
        numbering.apply(&mut placements);
        let bounds = Bounds::of(&grid);
        Self {
            grid,
            placements,
            numbering,
            bounds,
            meta,
        }
    }

    /// Across clues ordered by number
    pub fn across(&self) -> Vec<Clue> {
        self.clues(Direction::Across)
    }

    /// Down clues ordered by number
    pub fn down(&self) -> Vec<Clue> {
        self.clues(Direction::Down)
    }

    fn clues(&self, direction: Direction) -> Vec<Clue> {
        let mut clues: Vec<Clue> = self
            .placements
            .iter()
            .filter(|p| p.direction == direction)
            .map(|p| Clue {
                number: p.number,
                direction,
                text: p.clue.clone(),
                answer: p.answer.clone(),
                start: p.start(),
            })
            .collect();
        clues.sort_by_key(|c| c.number);
        clues
    }

    /// An empty grid with the solution's dimensions, for player input
    pub fn blank_player_grid(&self) -> Grid {
        self.grid.cleared()
    }

    pub fn is_solved_by(&self, player: &Grid) -> bool {
        is_solved(player, &self.grid)
    }
}

/// True when every filled solution cell holds the same letter in the player
/// grid, ignoring case. Empty solution cells are not checked.
pub fn is_solved(player: &Grid, solution: &Grid) -> bool {
    if player.size() != solution.size() {
        return false;
    }
    solution.positions().all(|pos| match solution.get(pos) {
        None => true,
        Some(expected) => player
            .get(pos)
            .is_some_and(|entered| entered.to_ascii_uppercase() == expected.to_ascii_uppercase()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> GenerationMeta {
        GenerationMeta {
            base_seed: 1,
            trial_seed: 1,
            trials_run: 1,
        }
    }

    fn cat_oat() -> PuzzleResult {
        let grid = Grid::from_rows(5, &["", "..O", ".CAT", "..T"]).unwrap();
        let placements = vec![
            Placement::new("CAT", "Feline", Position::new(2, 1), Direction::Across),
            Placement::new("OAT", "Grain", Position::new(1, 2), Direction::Down),
        ];
        PuzzleResult::finalize(grid, placements, meta())
    }

    #[test]
    fn test_bounds_of_filled_cells() {
        let puzzle = cat_oat();
        assert_eq!(
            puzzle.bounds,
            Bounds {
                min_row: 1,
                max_row: 3,
                min_col: 1,
                max_col: 3
            }
        );
        assert_eq!(puzzle.bounds.width(), 3);
        assert_eq!(puzzle.bounds.height(), 3);
        assert!(puzzle.bounds.contains(Position::new(2, 2)));
        assert!(!puzzle.bounds.contains(Position::new(0, 2)));
    }

    #[test]
    fn test_bounds_default_to_full_grid() {
        let bounds = Bounds::of(&Grid::new(13));
        assert_eq!((bounds.min_row, bounds.max_row, bounds.min_col, bounds.max_col), (0, 12, 0, 12));
    }

    #[test]
    fn test_finalize_numbers_placements() {
        let puzzle = cat_oat();
        assert_eq!(puzzle.down()[0].number, 1);
        assert_eq!(puzzle.across()[0].number, 2);
        assert_eq!(puzzle.across()[0].text, "Feline");
    }

    #[test]
    fn test_is_solved() {
        let puzzle = cat_oat();
        assert!(is_solved(&puzzle.grid.clone(), &puzzle.grid));
        assert!(!puzzle.is_solved_by(&puzzle.blank_player_grid()));

        let lower = Grid::from_rows(5, &["", "..o", ".cat", "..t"]).unwrap();
        assert!(puzzle.is_solved_by(&lower));

        let wrong = Grid::from_rows(5, &["", "..O", ".CAR", "..T"]).unwrap();
        assert!(!puzzle.is_solved_by(&wrong));

        let extra = Grid::from_rows(5, &["ZZZZZ", "..O", ".CAT", "..T"]).unwrap();
        assert!(puzzle.is_solved_by(&extra));

        assert!(!is_solved(&Grid::new(4), &puzzle.grid));
    }

    #[test]
    fn test_empty_solution_is_trivially_solved() {
        assert!(is_solved(&Grid::new(3), &Grid::new(3)));
    }
}
