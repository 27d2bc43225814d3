use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Winner;

use super::evaluator::evaluate_best_hand;
use super::hand_rank::HandEvaluation;

/// Результат heads-up сравнения двух рук на общем борде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownResult {
    pub winner: Winner,
    pub player1_eval: HandEvaluation,
    pub player2_eval: HandEvaluation,
}

/// Сравнить две руки против одних и тех же общих карт.
///
/// Победитель определяется строгим сравнением силы; равная сила = ничья.
pub fn compare(hole1: &[Card], hole2: &[Card], community: &[Card]) -> ShowdownResult {
    let player1_eval = evaluate_best_hand(hole1, community);
    let player2_eval = evaluate_best_hand(hole2, community);

    let winner = match player1_eval.rank.cmp(&player2_eval.rank) {
        std::cmp::Ordering::Greater => Winner::Player1,
        std::cmp::Ordering::Less => Winner::Player2,
        std::cmp::Ordering::Equal => Winner::Tie,
    };

    ShowdownResult {
        winner,
        player1_eval,
        player2_eval,
    }
}
