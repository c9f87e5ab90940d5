use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use crossword_core::{Clue, Grid, Position, PuzzleResult};
use std::io::{self, Write};

/// What to print alongside the grid
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Fill in the solution letters
    pub reveal: bool,
}

/// Print the title line, the grid cropped to its bounds, and both clue lists
pub fn render_puzzle<W: Write>(
    out: &mut W,
    puzzle: &PuzzleResult,
    title: &str,
    theme: &Theme,
    options: RenderOptions,
) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(theme.heading),
        Print(title),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(theme.info),
        Print(format!(
            "  ({} words, seed {})\n\n",
            puzzle.placements.len(),
            puzzle.meta.base_seed
        )),
    )?;

    if puzzle.placements.is_empty() {
        queue!(out, SetForegroundColor(theme.info), Print("No words could be placed.\n"), ResetColor)?;
        return out.flush();
    }

    render_grid(out, puzzle, theme, options)?;
    queue!(out, Print("\n"))?;
    render_clues(out, "Across", &puzzle.across(), theme, options)?;
    queue!(out, Print("\n"))?;
    render_clues(out, "Down", &puzzle.down(), theme, options)?;
    queue!(out, ResetColor)?;
    out.flush()
}

// Each cell is drawn as two lines inside a 3-wide box:
// +---+---+
// |1  |###|
// | C |###|
// +---+---+
fn render_grid<W: Write>(out: &mut W, puzzle: &PuzzleResult, theme: &Theme, options: RenderOptions) -> io::Result<()> {
    let bounds = puzzle.bounds;
    let separator = format!("{}+\n", "+---".repeat(bounds.width()));

    for row in bounds.min_row..=bounds.max_row {
        queue!(out, SetForegroundColor(theme.border), Print(&separator))?;

        for line in 0..2 {
            for col in bounds.min_col..=bounds.max_col {
                let pos = Position::new(row, col);
                queue!(out, SetForegroundColor(theme.border), Print("|"))?;
                match puzzle.grid.get(pos) {
                    None => queue!(out, SetForegroundColor(theme.block), Print("###"))?,
                    Some(_) if line == 0 => {
                        let label = puzzle
                            .numbering
                            .get(pos)
                            .map(|n| format!("{:<3}", n))
                            .unwrap_or_else(|| "   ".to_string());
                        queue!(out, SetForegroundColor(theme.number), Print(label))?;
                    }
                    Some(letter) => {
                        let shown = if options.reveal { letter } else { ' ' };
                        queue!(
                            out,
                            SetForegroundColor(theme.letter),
                            SetAttribute(Attribute::Bold),
                            Print(format!(" {} ", shown)),
                            SetAttribute(Attribute::Reset),
                        )?;
                    }
                }
            }
            queue!(out, SetForegroundColor(theme.border), Print("|\n"))?;
        }
    }
    queue!(out, SetForegroundColor(theme.border), Print(&separator))?;
    Ok(())
}

fn render_clues<W: Write>(
    out: &mut W,
    heading: &str,
    clues: &[Clue],
    theme: &Theme,
    options: RenderOptions,
) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(theme.heading),
        Print(format!("{}\n", heading)),
        SetAttribute(Attribute::Reset),
    )?;
    for clue in clues {
        queue!(
            out,
            SetForegroundColor(theme.number),
            Print(format!("{:>4}. ", clue.number)),
            SetForegroundColor(theme.clue),
            Print(format!("{} ({})", clue.text, clue.answer.len())),
        )?;
        if options.reveal {
            queue!(out, SetForegroundColor(theme.letter), Print(format!("  {}", clue.answer)))?;
        }
        queue!(out, Print("\n"))?;
    }
    Ok(())
}

/// Print the outcome of checking a player's grid
pub fn render_check<W: Write>(out: &mut W, player: &Grid, puzzle: &PuzzleResult, theme: &Theme) -> io::Result<bool> {
    let solved = puzzle.is_solved_by(player);
    let (total, correct) = letter_score(player, &puzzle.grid);

    let (color, message) = if solved {
        (theme.success, "Solved!".to_string())
    } else {
        (theme.error, format!("Not solved yet: {} of {} letters correct", correct, total))
    };
    queue!(out, SetForegroundColor(color), Print(message), Print("\n"), ResetColor)?;
    out.flush()?;
    Ok(solved)
}

/// (letters in the solution, letters the player has right)
fn letter_score(player: &Grid, solution: &Grid) -> (usize, usize) {
    solution
        .positions()
        .filter_map(|pos| solution.get(pos).map(|expected| (pos, expected)))
        .fold((0, 0), |(total, correct), (pos, expected)| {
            let right = player
                .get(pos)
                .is_some_and(|c| c.to_ascii_uppercase() == expected);
            (total + 1, correct + usize::from(right))
        })
}

/// Strip styling escapes
#[cfg(test)]
fn plain(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
