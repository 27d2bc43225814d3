use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
///
/// Порядок вариантов задаёт порядок колоды, на силу руки масть не влияет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Spades,   // ♠
    Clubs,    // ♣
    Diamonds, // ♦
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];

    /// Буква масти во внешнем формате.
    pub fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        }
    }
}

/// Ранг карты. Дискриминант = числовое значение (2..=14, туз = 14).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги от младшего к старшему.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Обратное к `value()`. `None` для чисел вне 2..=14.
    pub fn from_value(v: u8) -> Option<Rank> {
        match v {
            2..=14 => Some(Rank::ALL[(v - 2) as usize]),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            // 2..=9 — одна цифра
            r => (b'0' + r.value()) as char,
        }
    }

    fn from_symbol(ch: char) -> Option<Rank> {
        let rank = match ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// Ошибки разбора текстового представления карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("invalid card length: {0:?}")]
    InvalidLength(String),

    #[error("invalid suit {suit:?} in {text:?}")]
    InvalidSuit { suit: char, text: String },

    #[error("invalid rank {rank:?} in {text:?}")]
    InvalidRank { rank: char, text: String },
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    /// Формат вида `HA`, `DT`, `C7`: сначала масть, потом ранг.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Парсинг строки вида "HA", "DT", "C7".
///
/// Только заглавные буквы: `parse` и `to_string` должны давать ровно
/// исходные два символа.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (s_ch, r_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(CardParseError::InvalidLength(s.to_string())),
        };

        let suit = match s_ch {
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            _ => {
                return Err(CardParseError::InvalidSuit {
                    suit: s_ch,
                    text: s.to_string(),
                })
            }
        };

        let rank = Rank::from_symbol(r_ch).ok_or_else(|| CardParseError::InvalidRank {
            rank: r_ch,
            text: s.to_string(),
        })?;

        Ok(Card { suit, rank })
    }
}

/// Разобрать список карт, разделённых пробелами: `"HA HK HQ"`.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardParseError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Обратное к `parse_cards`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
