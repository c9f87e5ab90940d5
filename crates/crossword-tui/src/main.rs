mod config;
mod date;
mod error;
mod render;
mod theme;

use clap::{Args, Parser, Subcommand};
use config::{load_bank, ConfigFile};
use crossword_core::{generate, generate_with_seed, random_seed, Grid, PuzzleResult};
use date::CivilDate;
use error::AppError;
use render::{render_check, render_puzzle, RenderOptions};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "crossword", version, about = "Daily crossword generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a puzzle with its clues
    Show {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Fill in the answers
        #[arg(long)]
        solution: bool,
        /// Print the puzzle as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Check a file of answers against a puzzle
    Check {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Grid rows, one per line; `.` or space for empty cells
        #[arg(long)]
        answers: PathBuf,
    },
}

#[derive(Debug, Args)]
struct PuzzleArgs {
    /// Puzzle date (YYYY-MM-DD); defaults to today in UTC
    #[arg(long, conflicts_with_all = ["seed", "random"])]
    date: Option<String>,
    /// Explicit base seed
    #[arg(long, conflicts_with = "random")]
    seed: Option<u32>,
    /// Practice puzzle from a random seed
    #[arg(long)]
    random: bool,
    /// Word bank file (TSV `ANSWER<TAB>clue`, or JSON)
    #[arg(long)]
    words: Option<PathBuf>,
    /// Config file (JSON); defaults to crossword/config.json in the config dir
    #[arg(long)]
    config: Option<PathBuf>,
    /// mini, daily or large
    #[arg(long)]
    preset: Option<String>,
    #[arg(long)]
    grid_size: Option<usize>,
    #[arg(long)]
    min_words: Option<usize>,
    #[arg(long)]
    max_salts: Option<u32>,
    /// Stop starting new trials after this many milliseconds
    #[arg(long)]
    time_budget_ms: Option<u64>,
    /// dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,
}

impl PuzzleArgs {
    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            preset: self.preset.clone(),
            grid_size: self.grid_size,
            min_words: self.min_words,
            max_salts: self.max_salts,
            time_budget_ms: self.time_budget_ms,
            words: self.words.clone(),
            theme: self.theme.clone(),
        }
    }
}

/// Where the base seed comes from
enum SeedSource {
    Date(CivilDate),
    Fixed(u32),
}

impl SeedSource {
    fn from_args(args: &PuzzleArgs) -> Result<Self, AppError> {
        if let Some(seed) = args.seed {
            return Ok(Self::Fixed(seed));
        }
        if args.random {
            return Ok(Self::Fixed(random_seed()));
        }
        match &args.date {
            Some(text) => CivilDate::parse(text)
                .map(Self::Date)
                .ok_or_else(|| AppError::InvalidDate(text.clone())),
            None => Ok(Self::Date(CivilDate::today_utc())),
        }
    }

    fn title(&self) -> String {
        match self {
            Self::Date(date) => format!("Crossword for {}", date),
            Self::Fixed(seed) => format!("Practice crossword #{}", seed),
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    date: Option<String>,
    puzzle: &'a PuzzleResult,
}

struct Loaded {
    source: SeedSource,
    puzzle: PuzzleResult,
    theme: theme::Theme,
}

fn load_puzzle(args: &PuzzleArgs) -> Result<Loaded, AppError> {
    let settings = ConfigFile::load(args.config.as_deref())?
        .merge(args.overrides())
        .resolve()?;
    let bank = load_bank(settings.words.as_deref())?;
    let source = SeedSource::from_args(args)?;

    let puzzle = match &source {
        SeedSource::Date(date) => generate(&bank, &date.to_string(), &settings.generator)?,
        SeedSource::Fixed(seed) => generate_with_seed(&bank, *seed, &settings.generator)?,
    };
    log::info!(
        "{}: {} words after {} trials",
        source.title(),
        puzzle.placements.len(),
        puzzle.meta.trials_run
    );

    Ok(Loaded {
        source,
        puzzle,
        theme: settings.theme,
    })
}

fn read_answers(path: &Path, size: usize) -> Result<Grid, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<&str> = text.lines().collect();
    Grid::from_rows(size, &rows).ok_or_else(|| AppError::AnswerShape {
        path: path.to_path_buf(),
        size,
    })
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let mut stdout = io::stdout();

    match cli.command {
        Command::Show { puzzle, solution, json } => {
            let loaded = load_puzzle(&puzzle)?;
            if json {
                let date = match &loaded.source {
                    SeedSource::Date(date) => Some(date.to_string()),
                    SeedSource::Fixed(_) => None,
                };
                let output = JsonOutput {
                    date,
                    puzzle: &loaded.puzzle,
                };
                let text = serde_json::to_string_pretty(&output).map_err(io::Error::from)?;
                println!("{}", text);
            } else {
                let options = RenderOptions { reveal: solution };
                render_puzzle(&mut stdout, &loaded.puzzle, &loaded.source.title(), &loaded.theme, options)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { puzzle, answers } => {
            let loaded = load_puzzle(&puzzle)?;
            let player = read_answers(&answers, loaded.puzzle.grid.size())?;
            let solved = render_check(&mut stdout, &player, &loaded.puzzle, &loaded.theme)?;
            Ok(if solved { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_flags_conflict() {
        assert!(Cli::try_parse_from(["crossword", "show", "--date", "2026-10-15", "--seed", "4"]).is_err());
        assert!(Cli::try_parse_from(["crossword", "show", "--seed", "4", "--random"]).is_err());
    }

    #[test]
    fn test_seed_source() {
        let cli = Cli::try_parse_from(["crossword", "show", "--date", "2026-10-15"]).unwrap();
        let Command::Show { puzzle, .. } = cli.command else {
            panic!("expected show");
        };
        let source = SeedSource::from_args(&puzzle).unwrap();
        assert_eq!(source.title(), "Crossword for 2026-10-15");

        let cli = Cli::try_parse_from(["crossword", "show", "--date", "2026-02-30"]).unwrap();
        let Command::Show { puzzle, .. } = cli.command else {
            panic!("expected show");
        };
        assert!(matches!(SeedSource::from_args(&puzzle), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn test_overrides_map_flags() {
        let cli = Cli::try_parse_from(["crossword", "check", "--answers", "a.txt", "--preset", "mini", "--min-words", "4"])
            .unwrap();
        let Command::Check { puzzle, answers } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(answers, PathBuf::from("a.txt"));
        let settings = puzzle.overrides().resolve().unwrap();
        assert_eq!(settings.generator.grid_size, 9);
        assert_eq!(settings.generator.min_words, 4);
    }
}
