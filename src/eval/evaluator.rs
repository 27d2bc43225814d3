use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

use super::hand_rank::{HandCategory, HandEvaluation};
use super::lookup_tables::{detect_straight, mask_from_cards};

/// Лучшая 5-карточная рука из hole + board.
///
/// Ожидается 5–7 карт суммарно (обычно 2 + 5).
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandEvaluation {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    evaluate_best(&all_cards)
}

/// Перебираем все комбинации 5 карт из N (N=5–7) и выбираем лучшую.
///
/// При равной силе остаётся первая найденная комбинация.
/// Меньше 5 или больше 7 карт — ошибка вызывающего кода.
pub fn evaluate_best(cards: &[Card]) -> HandEvaluation {
    assert!(
        (5..=7).contains(&cards.len()),
        "evaluate_best expects 5 to 7 cards, got {}",
        cards.len()
    );

    // Первое подмножество — индексы 0..5, с него и начинаем.
    let mut best = evaluate_5(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for five in FiveCardSubsets::new(cards).skip(1) {
        let eval = evaluate_5(&five);
        if eval.rank > best.rank {
            best = eval;
        }
    }

    best
}

/// Итеративный генератор 5-карточных подмножеств (без повторов,
/// в лексикографическом порядке индексов). Без рекурсии и без аллокаций.
pub struct FiveCardSubsets<'a> {
    cards: &'a [Card],
    idx: [usize; 5],
    done: bool,
}

impl<'a> FiveCardSubsets<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            idx: [0, 1, 2, 3, 4],
            done: cards.len() < 5,
        }
    }
}

impl Iterator for FiveCardSubsets<'_> {
    type Item = [Card; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let cards = self.cards;
        let current = self.idx.map(|i| cards[i]);

        // Сдвигаем самый правый индекс, который ещё можно увеличить.
        let n = cards.len();
        let mut pos = 5;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.idx[pos] < n - 5 + pos {
                self.idx[pos] += 1;
                for j in pos + 1..5 {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// Ранг и сколько раз он встретился.
#[derive(Clone, Copy)]
struct RankCount {
    rank: Rank,
    count: u8,
}

/// Группы одинаковых рангов, отсортированные по (количество desc, ранг desc).
///
/// Например, фулл-хаус KKK22 → [(K,3), (2,2)], две пары → [(Q,2), (5,2), (A,1)].
struct RankGroups {
    items: [RankCount; 5],
    len: usize,
}

impl RankGroups {
    /// `sorted` — карты по убыванию ранга, одинаковые ранги стоят рядом.
    fn from_sorted(sorted: &[Card; 5]) -> Self {
        let mut items = [RankCount {
            rank: sorted[0].rank,
            count: 0,
        }; 5];
        let mut len = 0;

        for card in sorted {
            if len > 0 && items[len - 1].rank == card.rank {
                items[len - 1].count += 1;
            } else {
                items[len] = RankCount {
                    rank: card.rank,
                    count: 1,
                };
                len += 1;
            }
        }

        items[..len].sort_unstable_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| b.rank.cmp(&a.rank))
        });

        Self { items, len }
    }

    fn as_slice(&self) -> &[RankCount] {
        &self.items[..self.len]
    }

    /// Размеры двух крупнейших групп: [4,1] → (4,1), [3,2] → (3,2), ...
    fn top_counts(&self) -> (u8, u8) {
        let first = self.as_slice().first().map_or(0, |g| g.count);
        let second = self.as_slice().get(1).map_or(0, |g| g.count);
        (first, second)
    }

    /// Ранги групп по порядку — это и есть тай-брейки для "парных" категорий.
    fn ranks(&self) -> ([Rank; 5], usize) {
        let mut out = [Rank::Two; 5];
        for (slot, g) in out.iter_mut().zip(self.as_slice()) {
            *slot = g.rank;
        }
        (out, self.len)
    }

    /// Переставить карты: сначала карты первой группы, потом второй и т.д.
    fn arrange(&self, sorted: &[Card; 5]) -> [Card; 5] {
        let mut out = *sorted;
        let mut i = 0;
        for g in self.as_slice() {
            for card in sorted.iter().filter(|c| c.rank == g.rank) {
                out[i] = *card;
                i += 1;
            }
        }
        out
    }
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_5(cards: &[Card; 5]) -> HandEvaluation {
    // Стабильная сортировка: при равных рангах порядок входа сохраняется.
    let mut sorted = *cards;
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));

    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let straight_high = detect_straight(mask_from_cards(&sorted));

    // Straight flush / royal flush.
    if is_flush {
        if let Some(high) = straight_high {
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return finish(category, &[high], straight_order(sorted, high));
        }
    }

    let groups = RankGroups::from_sorted(&sorted);
    let (group_ranks, group_len) = groups.ranks();

    match groups.top_counts() {
        (4, _) => {
            return finish(
                HandCategory::FourOfAKind,
                &group_ranks[..group_len],
                groups.arrange(&sorted),
            )
        }
        (3, 2) => {
            return finish(
                HandCategory::FullHouse,
                &group_ranks[..group_len],
                groups.arrange(&sorted),
            )
        }
        _ => {}
    }

    if is_flush {
        let ranks = sorted.map(|c| c.rank);
        return finish(HandCategory::Flush, &ranks, sorted);
    }

    if let Some(high) = straight_high {
        return finish(HandCategory::Straight, &[high], straight_order(sorted, high));
    }

    let category = match groups.top_counts() {
        (3, _) => HandCategory::ThreeOfAKind,
        (2, 2) => HandCategory::TwoPair,
        (2, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    finish(category, &group_ranks[..group_len], groups.arrange(&sorted))
}

/// Для wheel (A2345) туз уходит в конец: 5 4 3 2 A.
fn straight_order(mut sorted: [Card; 5], high: Rank) -> [Card; 5] {
    if high == Rank::Five && sorted[0].rank == Rank::Ace {
        sorted.rotate_left(1);
    }
    sorted
}

fn finish(category: HandCategory, tiebreaks: &[Rank], cards: [Card; 5]) -> HandEvaluation {
    HandEvaluation {
        category,
        rank: HandRank::from_category_and_tiebreaks(category, tiebreaks),
        cards,
    }
}
