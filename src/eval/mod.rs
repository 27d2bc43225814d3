//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate_5(&[Card; 5]) -> HandEvaluation`
//!   `evaluate_best(&[Card]) -> HandEvaluation` (5–7 карт)
//!   `compare(hole1, hole2, board) -> ShowdownResult`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod showdown;

pub use evaluator::{evaluate_5, evaluate_best, evaluate_best_hand, FiveCardSubsets};
pub use hand_rank::{HandCategory, HandEvaluation};
pub use showdown::{compare, ShowdownResult};
