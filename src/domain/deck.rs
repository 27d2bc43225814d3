use crate::domain::card::{Card, Rank, Suit};

/// Количество карт в стандартной колоде.
pub const DECK_SIZE: usize = 52;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает симулятор (через RandomSource), НЕ здесь.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Spades 2..A, Clubs 2..A, Diamonds 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Deck { cards }
    }

    /// Стандартная колода без уже известных карт (hole + board).
    pub fn without(excluded: &[Card]) -> Self {
        let mut deck = Self::standard_52();
        deck.remove_cards(excluded);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Убрать из колоды уже использованные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
