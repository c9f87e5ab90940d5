//! Placements on a grid, and the bookkeeping shared by pruning and scoring

use crate::grid::{Direction, Grid, Position};
use serde::{Deserialize, Serialize};

/// A word fixed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub answer: String,
    pub clue: String,
    /// Start cell row
    pub row: usize,
    /// Start cell column
    pub col: usize,
    pub direction: Direction,
    /// Clue number, assigned once the layout is final
    pub number: u32,
}

impl Placement {
    pub fn new(answer: &str, clue: &str, start: Position, direction: Direction) -> Self {
        Self {
            answer: answer.to_string(),
            clue: clue.to_string(),
            row: start.row,
            col: start.col,
            direction,
            number: 0,
        }
    }

    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn len(&self) -> usize {
        self.answer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// Covered cells paired with the letter each should hold
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let (dr, dc) = match self.direction {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        };
        self.answer
            .chars()
            .enumerate()
            .map(move |(i, ch)| (Position::new(self.row + dr * i, self.col + dc * i), ch))
    }

    pub fn covers(&self, pos: Position) -> bool {
        self.cells().any(|(p, _)| p == pos)
    }
}

/// One trial's grid plus the words written into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

impl Layout {
    pub fn empty(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            placements: Vec::new(),
        }
    }

    /// Write a placement's letters into the grid and record it.
    /// The caller is responsible for having validated it.
    pub fn place(&mut self, placement: Placement) {
        for (pos, ch) in placement.cells() {
            self.grid.set(pos, Some(ch));
        }
        self.placements.push(placement);
    }

    /// How many placements cover each cell, row-major
    pub fn coverage(&self) -> Vec<u32> {
        let size = self.grid.size();
        let mut counts = vec![0; size * size];
        for placement in &self.placements {
            for (pos, _) in placement.cells() {
                counts[pos.row * size + pos.col] += 1;
            }
        }
        counts
    }

    /// Number of cells shared by more than one placement
    pub fn intersection_count(&self) -> usize {
        self.coverage().iter().filter(|&&c| c > 1).count()
    }

    /// Drop placements that share no cell with another placement.
    ///
    /// Only applies when there is more than one placement. Survivors are
    /// written into a fresh grid. Returns how many placements were removed.
    pub fn prune_isolated(&mut self) -> usize {
        if self.placements.len() <= 1 {
            return 0;
        }

        let size = self.grid.size();
        let coverage = self.coverage();
        let (kept, dropped): (Vec<Placement>, Vec<Placement>) =
            std::mem::take(&mut self.placements)
                .into_iter()
                .partition(|p| p.cells().any(|(pos, _)| coverage[pos.row * size + pos.col] > 1));

        if dropped.is_empty() {
            self.placements = kept;
            return 0;
        }

        for p in &dropped {
            log::debug!("pruned isolated word {} at ({}, {})", p.answer, p.row, p.col);
        }

        let mut rebuilt = Layout::empty(size);
        for placement in kept {
            rebuilt.place(placement);
        }
        *self = rebuilt;
        dropped.len()
    }

    /// Ranking used by the orchestrator: ten points per word plus one per crossing
    pub fn quality(&self) -> usize {
        self.placements.len() * 10 + self.intersection_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn across(answer: &str, row: usize, col: usize) -> Placement {
        Placement::new(answer, "", Position::new(row, col), Direction::Across)
    }

    fn down(answer: &str, row: usize, col: usize) -> Placement {
        Placement::new(answer, "", Position::new(row, col), Direction::Down)
    }

    #[test]
    fn test_cells() {
        let p = down("OAT", 1, 2);
        let cells: Vec<_> = p.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Position::new(1, 2), 'O'),
                (Position::new(2, 2), 'A'),
                (Position::new(3, 2), 'T'),
            ]
        );
        assert!(p.covers(Position::new(3, 2)));
        assert!(!p.covers(Position::new(2, 1)));
    }

    #[test]
    fn test_intersection_count() {
        let mut layout = Layout::empty(5);
        layout.place(across("CAT", 2, 1));
        assert_eq!(layout.intersection_count(), 0);

        layout.place(down("OAT", 1, 2));
        assert_eq!(layout.intersection_count(), 1);
        assert_eq!(layout.quality(), 21);
    }

    #[test]
    fn test_prune_removes_floating_word() {
        let mut layout = Layout::empty(7);
        layout.place(across("CAT", 2, 1));
        layout.place(down("OAT", 1, 2));
        layout.place(across("DOG", 6, 4));

        assert_eq!(layout.prune_isolated(), 1);
        assert_eq!(layout.placements.len(), 2);
        assert_eq!(layout.grid.get(Position::new(6, 4)), None);
        assert_eq!(layout.grid.get(Position::new(2, 2)), Some('A'));
        assert_eq!(layout.grid.filled_count(), 5);
    }

    #[test]
    fn test_prune_noop_when_interlocked() {
        let mut layout = Layout::empty(5);
        layout.place(across("CAT", 2, 1));
        layout.place(down("OAT", 1, 2));
        let before = layout.clone();

        assert_eq!(layout.prune_isolated(), 0);
        assert_eq!(layout, before);
    }

    #[test]
    fn test_prune_keeps_single_word() {
        let mut layout = Layout::empty(5);
        layout.place(across("CAT", 2, 1));
        assert_eq!(layout.prune_isolated(), 0);
        assert_eq!(layout.placements.len(), 1);
    }
}
