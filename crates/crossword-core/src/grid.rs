use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction a word runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// (row, col) step along the word
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// (row, col) step to a side neighbour, perpendicular to the word
    pub fn side(self) -> (isize, isize) {
        match self {
            Direction::Across => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// Square letter grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Parse rows of letters; `.`, `_` and spaces are empty cells.
    ///
    /// Short rows are padded with empty cells. Returns `None` if there are
    /// more rows than `size` or a row is longer than `size`.
    pub fn from_rows<S: AsRef<str>>(size: usize, rows: &[S]) -> Option<Self> {
        if rows.len() > size {
            return None;
        }
        let mut grid = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() > size {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                if !matches!(ch, '.' | '_' | ' ') {
                    grid.set(Position::new(row, col), Some(ch));
                }
            }
        }
        Some(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[pos.row * self.size + pos.col]
    }

    pub fn set(&mut self, pos: Position, value: Option<char>) {
        self.cells[pos.row * self.size + pos.col] = value;
    }

    /// Letter at a signed coordinate; anything outside the grid reads as empty
    pub fn letter_at(&self, row: isize, col: isize) -> Option<char> {
        self.position(row, col).and_then(|pos| self.get(pos))
    }

    /// Convert a signed coordinate into a position if it lies on the grid
    pub fn position(&self, row: isize, col: isize) -> Option<Position> {
        let in_bounds = row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size;
        in_bounds.then(|| Position::new(row as usize, col as usize))
    }

    pub fn is_filled(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Positions holding `letter`, in row-major order
    pub fn positions_of(&self, letter: char) -> Vec<Position> {
        self.positions().filter(|&pos| self.get(pos) == Some(letter)).collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// A grid of the same size with every cell empty
    pub fn cleared(&self) -> Self {
        Self::new(self.size)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.get(Position::new(row, col)).unwrap_or('.'))?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(5);
        assert_eq!(grid.size(), 5);
        assert!(grid.is_empty());
        assert_eq!(grid.positions().count(), 25);
    }

    #[test]
    fn test_letter_at_out_of_bounds() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(0, 0), Some('A'));
        assert_eq!(grid.letter_at(0, 0), Some('A'));
        assert_eq!(grid.letter_at(-1, 0), None);
        assert_eq!(grid.letter_at(0, 3), None);
        assert_eq!(grid.position(2, 2), Some(Position::new(2, 2)));
        assert_eq!(grid.position(3, 0), None);
    }

    #[test]
    fn test_positions_of_row_major() {
        let grid = Grid::from_rows(3, &["A.A", "...", "A.."]).unwrap();
        assert_eq!(
            grid.positions_of('A'),
            vec![Position::new(0, 0), Position::new(0, 2), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_from_rows_and_display() {
        let grid = Grid::from_rows(3, &["CAT", "_ .", "T"]).unwrap();
        assert_eq!(grid.to_string(), "CAT\n...\nT..");
        assert_eq!(grid.filled_count(), 4);

        assert!(Grid::from_rows(2, &["ABC"]).is_none());
        assert!(Grid::from_rows(1, &["A", "B"]).is_none());
    }
}
