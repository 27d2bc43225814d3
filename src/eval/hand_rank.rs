use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
///
/// Порядок вариантов важен: любая категория старше любой комбинации
/// кикеров в категории ниже.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Все категории от слабейшей к сильнейшей.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

/// Сдвиг поля категории.
const CATEGORY_SHIFT: u32 = 20;
/// Ширина одного поля тай-брейка.
const TIEBREAK_BITS: u32 = 4;
/// Максимум полей тай-брейка.
pub const MAX_TIEBREAKS: usize = 5;

impl HandRank {
    /// Собрать HandRank из категории и тай-брейков (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][t0:4][t1:4][t2:4][t3:4][t4:4]
    /// Rank: 2..14 (2..A) влазит в 4 бита. Неиспользованные поля = 0.
    pub fn from_category_and_tiebreaks(category: HandCategory, tiebreaks: &[Rank]) -> Self {
        debug_assert!(tiebreaks.len() <= MAX_TIEBREAKS);

        let mut value = (category as u32) << CATEGORY_SHIFT;
        for (i, rank) in tiebreaks.iter().take(MAX_TIEBREAKS).enumerate() {
            let shift = CATEGORY_SHIFT - TIEBREAK_BITS * (i as u32 + 1);
            value |= (rank.value() as u32 & 0x0F) << shift;
        }

        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        let cat_id = ((self.0 >> CATEGORY_SHIFT) & 0x0F) as usize;
        HandCategory::ALL
            .get(cat_id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Достать тай-брейки (от старшего к младшему), без нулевых полей.
    pub fn tiebreaks(&self) -> Vec<Rank> {
        (1..=MAX_TIEBREAKS as u32)
            .map(|i| ((self.0 >> (CATEGORY_SHIFT - TIEBREAK_BITS * i)) & 0x0F) as u8)
            .map_while(Rank::from_value)
            .collect()
    }
}

/// Результат оценки руки: категория, упакованная сила и 5 карт,
/// от самой значимой к наименее значимой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluation {
    pub category: HandCategory,
    pub rank: HandRank,
    pub cards: [Card; 5],
}

impl HandEvaluation {
    pub fn score(&self) -> u32 {
        self.rank.value()
    }
}
