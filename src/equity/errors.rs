use thiserror::Error;

/// Ошибки входных данных симулятора. Проверяются ДО первого прогона.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("need at least 2 players for an equity estimate, got {0}")]
    NotEnoughPlayers(usize),

    #[error("too many players ({players}): the deck supports at most {max}")]
    TooManyPlayers { players: usize, max: usize },

    #[error("community must have 0, 3, 4 or 5 cards, got {0}")]
    InvalidCommunity(usize),

    #[error("trial count must be positive")]
    ZeroTrials,

    #[error("worker count must be positive")]
    ZeroWorkers,

    #[error("simulation stopped before any trial was run")]
    NoTrialsRun,
}

/// Ошибки загрузки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
