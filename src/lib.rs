//! Покерный калькулятор: оценка лучшей 5-карточной руки, сравнение рук
//! и Monte Carlo оценка вероятности выигрыша против N соперников.
//!
//! ```
//! use poker_calc::domain::parse_cards;
//! use poker_calc::eval::{evaluate_best, HandCategory};
//!
//! let cards = parse_cards("HA HK HQ HJ HT H9 S2").unwrap();
//! let eval = evaluate_best(&cards);
//! assert_eq!(eval.category, HandCategory::RoyalFlush);
//! ```

pub mod api;
pub mod domain;
pub mod equity;
pub mod eval;
pub mod infra;

pub use domain::{Card, HandRank, Rank, Suit, Winner};
pub use equity::{simulate, EquityResult, SimulationConfig};
pub use eval::{compare, evaluate_5, evaluate_best, HandCategory, HandEvaluation};
