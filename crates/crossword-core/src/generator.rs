use crate::bank::WordEntry;
use crate::error::ConfigError;
use crate::layout::Layout;
use crate::placer::run_trial;
use crate::puzzle::PuzzleResult;
use crate::rng::Mulberry32;
use crate::selector::select_candidates;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Smallest grid that fits a minimum-length answer
pub const MIN_GRID_SIZE: usize = 3;
/// Largest grid accepted
pub const MAX_GRID_SIZE: usize = 64;

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Placed-word count that ends the search early
    pub min_words: usize,
    /// Number of salted trials to try
    pub max_salts: u32,
    /// Wall-clock limit for the trial loop
    #[serde(with = "millis", skip_serializing_if = "Option::is_none")]
    pub time_budget: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::daily()
    }
}

impl GeneratorConfig {
    pub fn mini() -> Self {
        Self {
            grid_size: 9,
            min_words: 5,
            max_salts: 40,
            time_budget: None,
        }
    }

    pub fn daily() -> Self {
        Self {
            grid_size: 13,
            min_words: 8,
            max_salts: 80,
            time_budget: None,
        }
    }

    pub fn large() -> Self {
        Self {
            grid_size: 15,
            min_words: 10,
            max_salts: 120,
            time_budget: None,
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "mini" => Some(Self::mini()),
            "daily" => Some(Self::daily()),
            "large" => Some(Self::large()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.min_words == 0 {
            return Err(ConfigError::ZeroMinWords);
        }
        Ok(())
    }
}

/// How a puzzle was arrived at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationMeta {
    /// Seed derived from the date (or supplied directly)
    pub base_seed: u32,
    /// Seed of the trial that produced the layout
    pub trial_seed: u32,
    /// Trials run inside the salt loop
    pub trials_run: u32,
}

/// Crossword generator: runs salted placement trials and keeps the best
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator, rejecting an invalid configuration
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Select the day's candidates from `bank` and build the puzzle
    pub fn generate(&self, bank: &[WordEntry], base_seed: u32) -> PuzzleResult {
        let mut rng = Mulberry32::new(base_seed);
        let candidates = select_candidates(bank, &mut rng);
        log::debug!("{} candidates from a bank of {}", candidates.len(), bank.len());
        self.generate_from_candidates(&candidates, base_seed)
    }

    /// Build the puzzle from an already selected candidate list
    pub fn generate_from_candidates(&self, candidates: &[WordEntry], base_seed: u32) -> PuzzleResult {
        let (layout, meta) = self.search(candidates, base_seed);
        PuzzleResult::finalize(layout.grid, layout.placements, meta)
    }

    /// Try salts in order. The first trial that places `min_words` words wins
    /// outright; otherwise the highest-quality trial seen is returned.
    fn search(&self, candidates: &[WordEntry], base_seed: u32) -> (Layout, GenerationMeta) {
        let size = self.config.grid_size;
        let started = Instant::now();
        let mut best: Option<(Layout, u32, usize)> = None;
        let mut trials_run = 0;

        for salt in 0..self.config.max_salts {
            if let Some(budget) = self.config.time_budget {
                if trials_run > 0 && started.elapsed() >= budget {
                    log::warn!("time budget of {:?} spent after {} trials", budget, trials_run);
                    break;
                }
            }

            let trial_seed = base_seed.wrapping_add(salt);
            let layout = run_trial(candidates, trial_seed, size);
            trials_run += 1;

            let placed = layout.placements.len();
            let quality = layout.quality();
            log::debug!(
                "salt {}: {} words, {} crossings, quality {}",
                salt,
                placed,
                layout.intersection_count(),
                quality
            );

            if placed >= self.config.min_words {
                log::info!("salt {} reached {} words", salt, placed);
                let meta = GenerationMeta {
                    base_seed,
                    trial_seed,
                    trials_run,
                };
                return (layout, meta);
            }

            if best.as_ref().map_or(true, |(_, _, q)| quality > *q) {
                best = Some((layout, trial_seed, quality));
            }
        }

        match best {
            Some((layout, trial_seed, quality)) => {
                log::warn!(
                    "no trial reached {} words, using best of {} (quality {})",
                    self.config.min_words,
                    trials_run,
                    quality
                );
                let meta = GenerationMeta {
                    base_seed,
                    trial_seed,
                    trials_run,
                };
                (layout, meta)
            }
            None => {
                // No salts configured: fall back to the base seed regardless of quality
                let layout = run_trial(candidates, base_seed, size);
                let meta = GenerationMeta {
                    base_seed,
                    trial_seed: base_seed,
                    trials_run,
                };
                (layout, meta)
            }
        }
    }
}

/// `Option<Duration>` as whole milliseconds
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&(d.as_millis() as u64)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
