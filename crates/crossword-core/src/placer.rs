//! Single placement trial
//!
//! A trial shuffles the candidates with its own seeded stream, anchors the
//! first word across the middle row, then tries to hang every other word off
//! a letter already on the grid. Words that cannot cross anything are dropped.

use crate::bank::WordEntry;
use crate::grid::{Direction, Grid, Position};
use crate::layout::{Layout, Placement};
use crate::rng::Mulberry32;

/// Check whether `word` can be written starting at `(row, col)` running in
/// `direction`.
///
/// The word must fit on the grid, the cells just before its start and just
/// after its end must be empty, and every covered cell must either already
/// hold the matching letter or be empty with both side neighbours empty.
/// Two consecutive covered cells that are both already filled are rejected,
/// since the word would then run along an existing word.
pub fn can_place(grid: &Grid, word: &[char], row: isize, col: isize, direction: Direction) -> bool {
    let len = word.len() as isize;
    if len == 0 {
        return false;
    }
    let (dr, dc) = direction.step();
    let (sr, sc) = direction.side();

    if grid.position(row, col).is_none() || grid.position(row + dr * (len - 1), col + dc * (len - 1)).is_none() {
        return false;
    }

    if grid.letter_at(row - dr, col - dc).is_some() || grid.letter_at(row + dr * len, col + dc * len).is_some() {
        return false;
    }

    let mut previous_filled = false;
    for (i, &letter) in word.iter().enumerate() {
        let r = row + dr * i as isize;
        let c = col + dc * i as isize;
        match grid.letter_at(r, c) {
            Some(existing) => {
                if existing != letter || previous_filled {
                    return false;
                }
                previous_filled = true;
            }
            None => {
                if grid.letter_at(r + sr, c + sc).is_some() || grid.letter_at(r - sr, c - sc).is_some() {
                    return false;
                }
                previous_filled = false;
            }
        }
    }

    true
}

/// Run one trial over `words` with the stream seeded by `seed`.
///
/// Isolated words are pruned before the layout is returned.
pub fn run_trial(words: &[WordEntry], seed: u32, size: usize) -> Layout {
    let mut rng = Mulberry32::new(seed);
    let mut order: Vec<&WordEntry> = words.iter().collect();
    rng.shuffle(&mut order);

    let mut layout = Layout::empty(size);
    let mut remaining = order.into_iter();

    for entry in remaining.by_ref() {
        if place_anchor(&mut layout, entry) {
            break;
        }
        log::debug!("anchor {} does not fit a {}x{} grid", entry.answer, size, size);
    }

    for entry in remaining {
        if !place_crossing(&mut layout, entry, &mut rng) {
            log::trace!("no crossing for {}", entry.answer);
        }
    }

    layout.prune_isolated();
    layout
}

/// Place the first word across the middle row, centred and clamped to the grid
fn place_anchor(layout: &mut Layout, entry: &WordEntry) -> bool {
    let size = layout.grid.size() as isize;
    let letters: Vec<char> = entry.answer.chars().collect();
    let len = letters.len() as isize;
    let mid = size / 2;
    let col = (mid - len / 2).min(size - len).max(0);

    if !can_place(&layout.grid, &letters, mid, col, Direction::Across) {
        return false;
    }
    layout.place(Placement::new(
        &entry.answer,
        &entry.clue,
        Position::new(mid as usize, col as usize),
        Direction::Across,
    ));
    true
}

/// Hang a word off an existing letter, trying across before down at each spot
fn place_crossing(layout: &mut Layout, entry: &WordEntry, rng: &mut Mulberry32) -> bool {
    let letters: Vec<char> = entry.answer.chars().collect();

    let mut distinct: Vec<char> = Vec::with_capacity(letters.len());
    for &ch in &letters {
        if !distinct.contains(&ch) {
            distinct.push(ch);
        }
    }
    rng.shuffle(&mut distinct);

    for letter in distinct {
        for occurrence in layout.grid.positions_of(letter) {
            let mut indices: Vec<usize> = letters
                .iter()
                .enumerate()
                .filter(|&(_, &ch)| ch == letter)
                .map(|(i, _)| i)
                .collect();
            rng.shuffle(&mut indices);

            let row = occurrence.row as isize;
            let col = occurrence.col as isize;
            for index in indices {
                let offset = index as isize;
                let candidates = [
                    (row, col - offset, Direction::Across),
                    (row - offset, col, Direction::Down),
                ];
                for (r, c, direction) in candidates {
                    if can_place(&layout.grid, &letters, r, c, direction) {
                        let start = Position::new(r as usize, c as usize);
                        layout.place(Placement::new(&entry.answer, &entry.clue, start, direction));
                        return true;
                    }
                }
            }
        }
    }

    false
}
