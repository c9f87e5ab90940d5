//! Layered settings: built-in defaults, then a preset, then the config file,
//! then command-line flags.

use crate::error::AppError;
use crate::theme::Theme;
use crossword_core::{GeneratorConfig, WordBank};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Every field optional, so the same shape serves the JSON file and the CLI overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub preset: Option<String>,
    pub grid_size: Option<usize>,
    pub min_words: Option<usize>,
    pub max_salts: Option<u32>,
    pub time_budget_ms: Option<u64>,
    /// Word bank file, TSV or JSON
    pub words: Option<PathBuf>,
    pub theme: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub words: Option<PathBuf>,
    pub theme: Theme,
}

impl ConfigFile {
    /// Default location, e.g. `~/.config/crossword/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crossword").join("config.json"))
    }

    /// Read the config file. An explicit path must exist; a missing file at
    /// the default location just means no overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };
        log::debug!("loading config from {}", path.display());

        let text = fs::read_to_string(&path).map_err(|source| AppError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AppError::Json { path, source })
    }

    /// Fields set in `over` win
    pub fn merge(self, over: ConfigFile) -> ConfigFile {
        ConfigFile {
            preset: over.preset.or(self.preset),
            grid_size: over.grid_size.or(self.grid_size),
            min_words: over.min_words.or(self.min_words),
            max_salts: over.max_salts.or(self.max_salts),
            time_budget_ms: over.time_budget_ms.or(self.time_budget_ms),
            words: over.words.or(self.words),
            theme: over.theme.or(self.theme),
        }
    }

    pub fn resolve(self) -> Result<Settings, AppError> {
        let mut generator = match self.preset.as_deref() {
            Some(name) => GeneratorConfig::preset(name).ok_or_else(|| AppError::UnknownPreset(name.to_string()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(size) = self.grid_size {
            generator.grid_size = size;
        }
        if let Some(min_words) = self.min_words {
            generator.min_words = min_words;
        }
        if let Some(max_salts) = self.max_salts {
            generator.max_salts = max_salts;
        }
        if let Some(ms) = self.time_budget_ms {
            generator.time_budget = Some(Duration::from_millis(ms));
        }

        let theme = match self.theme.as_deref() {
            Some(name) => Theme::by_name(name).ok_or_else(|| AppError::UnknownTheme(name.to_string()))?,
            None => Theme::default(),
        };

        Ok(Settings {
            generator,
            words: self.words,
            theme,
        })
    }
}

/// Load the word bank: the built-in corpus, or a `.json` / TSV file
pub fn load_bank(path: Option<&Path>) -> Result<WordBank, AppError> {
    let Some(path) = path else {
        return Ok(WordBank::builtin());
    };

    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let bank = if is_json {
        let raw: WordBank = serde_json::from_str(&text).map_err(|source| AppError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        raw.validated().map_err(crossword_core::CrosswordError::from)?
    } else {
        WordBank::from_tsv(&text).map_err(crossword_core::CrosswordError::from)?
    };

    log::info!("loaded {} words from {}", bank.len(), path.display());
    Ok(bank)
}
