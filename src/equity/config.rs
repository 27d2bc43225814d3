use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::infra::{RngSeed, SystemRng};

use super::errors::{ConfigError, SimulationError};
use super::simulator::{simulate_parallel, simulate_with_rng, EquityResult};

/// Настройки симуляции для API / CLI.
///
/// Пример JSON (все поля необязательны):
/// ```json
/// { "default_trials": 10000, "max_trials": 1000000, "workers": 4, "seed": 42 }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Сколько прогонов делать, если клиент не указал.
    pub default_trials: u32,
    /// Верхняя граница на число прогонов в одном запросе.
    pub max_trials: u32,
    /// 1 = однопоточно, иначе параллельно через rayon.
    pub workers: usize,
    /// Фиксированный seed (для воспроизводимых прогонов).
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_trials: 10_000,
            max_trials: 1_000_000,
            workers: 1,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_trials == 0 {
            return Err(ConfigError::Invalid("default_trials must be positive"));
        }
        if self.max_trials < self.default_trials {
            return Err(ConfigError::Invalid("max_trials must be >= default_trials"));
        }
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be positive"));
        }
        Ok(())
    }

    /// Запустить симуляцию с этими настройками: выбирает однопоточный или
    /// параллельный путь и источник случайности.
    pub fn run(
        &self,
        hole: &[Card; 2],
        community: &[Card],
        num_players: usize,
        trials: u32,
    ) -> Result<EquityResult, SimulationError> {
        match (self.workers, self.seed) {
            (0 | 1, Some(seed)) => simulate_with_rng(
                hole,
                community,
                num_players,
                trials,
                RngSeed::from_u64(seed).to_rng(),
            ),
            (0 | 1, None) => {
                simulate_with_rng(hole, community, num_players, trials, SystemRng::default())
            }
            (workers, seed) => {
                let seed = seed.map_or_else(RngSeed::random, RngSeed::from_u64);
                simulate_parallel(hole, community, num_players, trials, workers, &seed)
            }
        }
    }
}
