use serde::{Deserialize, Serialize};

/// Сила руки, упакованная в u32.
///
/// Раскладка бит и кодирование — в `eval::hand_rank`. Здесь важно одно:
/// обычное сравнение чисел = сравнение рук по правилам покера.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

impl HandRank {
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Итог сравнения двух рук на шоудауне.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    Tie,
    Player1,
    Player2,
}

impl Winner {
    /// Числовой код во внешнем API: 0 = ничья, 1/2 = номер игрока.
    pub fn code(self) -> u8 {
        match self {
            Winner::Tie => 0,
            Winner::Player1 => 1,
            Winner::Player2 => 2,
        }
    }

    /// Тот же результат с точки зрения второго игрока.
    pub fn swapped(self) -> Self {
        match self {
            Winner::Tie => Winner::Tie,
            Winner::Player1 => Winner::Player2,
            Winner::Player2 => Winner::Player1,
        }
    }
}
