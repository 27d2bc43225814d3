use serde::{Deserialize, Serialize};

use crate::equity::EquityResult;
use crate::eval::{HandEvaluation, ShowdownResult};

/// Запрос лучшей руки: 2 карманные + 3..5 общих.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestHandRequest {
    pub hole: Vec<String>,
    pub community: Vec<String>,
}

/// Heads-up сравнение двух рук на общем борде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareRequest {
    pub player1_hole: Vec<String>,
    pub player2_hole: Vec<String>,
    pub community: Vec<String>,
}

/// Запрос вероятности выигрыша.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbabilityRequest {
    pub hole: Vec<String>,
    #[serde(default)]
    pub community: Vec<String>,
    /// Все игроки за столом, включая героя. Отсутствует, 0 или
    /// отрицательное → 2 (heads-up).
    #[serde(default)]
    pub num_players: i64,
    /// `None`, 0 или отрицательное → значение по умолчанию из конфига.
    #[serde(default)]
    pub simulations: Option<i64>,
}

/// DTO оценки руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvalDto {
    pub rank_name: String,
    /// Номер категории: 0 = High Card ... 9 = Royal Flush.
    pub rank: u8,
    pub score: u32,
    pub best_cards: Vec<String>,
}

impl From<&HandEvaluation> for HandEvalDto {
    fn from(eval: &HandEvaluation) -> Self {
        Self {
            rank_name: eval.category.name().to_string(),
            rank: eval.category as u8,
            score: eval.score(),
            best_cards: eval.cards.iter().map(ToString::to_string).collect(),
        }
    }
}

/// DTO результата сравнения. `winner`: 0 = ничья, 1/2 = номер игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareResponseDto {
    pub winner: u8,
    pub player1_eval: HandEvalDto,
    pub player2_eval: HandEvalDto,
}

impl From<&ShowdownResult> for CompareResponseDto {
    fn from(res: &ShowdownResult) -> Self {
        Self {
            winner: res.winner.code(),
            player1_eval: HandEvalDto::from(&res.player1_eval),
            player2_eval: HandEvalDto::from(&res.player2_eval),
        }
    }
}

/// DTO результата симуляции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityDto {
    pub win_probability: f64,
    pub tie_probability: f64,
    pub loss_probability: f64,
    pub trials: u64,
}

impl From<EquityResult> for EquityDto {
    fn from(res: EquityResult) -> Self {
        Self {
            win_probability: res.win_probability,
            tie_probability: res.tie_probability,
            loss_probability: res.loss_probability,
            trials: res.trials,
        }
    }
}
