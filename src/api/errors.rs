use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::CardParseError;
use crate::equity::SimulationError;

/// Ошибки внешнего API (то, что отдаём клиенту).
///
/// Все ошибки терминальны для запроса: ничего не исправляем молча.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Карта не разбирается (формат `HA`, `DT`, `C7`).
    #[error("invalid card: {0}")]
    InvalidCard(String),

    /// Одна и та же карта встречается дважды в запросе.
    #[error("duplicate card error: {0}")]
    DuplicateCard(String),

    /// Неверное число карт в одном из полей запроса.
    #[error("{field} must have {expected} cards, got {got}")]
    InvalidCardCount {
        field: String,
        expected: String,
        got: usize,
    },

    /// Запрошено больше прогонов, чем разрешает конфиг.
    #[error("too many simulations: {requested} (max {max})")]
    TooManyTrials { requested: i64, max: u32 },

    /// Симулятор отверг параметры.
    #[error("simulation error: {0}")]
    Simulation(String),
}

impl From<CardParseError> for ApiError {
    fn from(err: CardParseError) -> Self {
        ApiError::InvalidCard(err.to_string())
    }
}

impl From<SimulationError> for ApiError {
    fn from(err: SimulationError) -> Self {
        ApiError::Simulation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
