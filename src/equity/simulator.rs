use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::{Deck, DECK_SIZE};
use crate::domain::hand::HandRank;
use crate::eval::evaluate_best;
use crate::infra::{RngSeed, SystemRng};

use super::errors::SimulationError;
use super::RandomSource;

/// Карт на борде к риверу.
pub const BOARD_SIZE: usize = 5;

/// Максимум игроков за столом (включая героя), при котором колоды хватает
/// на полный борд и все руки: 2 * 23 + 5 = 51 <= 52.
pub const MAX_PLAYERS: usize = (DECK_SIZE - BOARD_SIZE) / 2;

/// Исход одного прогона с точки зрения героя.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrialOutcome {
    Win,
    Tie,
    Loss,
}

/// Определить исход прогона по силе героя и соперников.
///
/// Соперники перебираются лениво: первый, кто строго сильнее, сразу даёт
/// Loss, остальных не считаем. Ничья не прерывает перебор — следующий
/// соперник ещё может обыграть обоих. Любой Loss важнее ранее найденной ничьей.
pub fn trial_outcome<I>(hero: HandRank, opponents: I) -> TrialOutcome
where
    I: IntoIterator<Item = HandRank>,
{
    let mut tied = false;
    for villain in opponents {
        if villain > hero {
            return TrialOutcome::Loss;
        }
        if villain == hero {
            tied = true;
        }
    }

    if tied {
        TrialOutcome::Tie
    } else {
        TrialOutcome::Win
    }
}

/// Счётчики исходов. Объединяются простым суммированием, поэтому порядок
/// завершения воркеров на результат не влияет.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeTally {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: TrialOutcome) {
        match outcome {
            TrialOutcome::Win => self.wins += 1,
            TrialOutcome::Tie => self.ties += 1,
            TrialOutcome::Loss => self.losses += 1,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
        }
    }

    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Перевести счётчики в вероятности.
    pub fn to_result(&self) -> Result<EquityResult, SimulationError> {
        let trials = self.trials();
        if trials == 0 {
            return Err(SimulationError::NoTrialsRun);
        }

        let total = trials as f64;
        Ok(EquityResult {
            win_probability: self.wins as f64 / total,
            tie_probability: self.ties as f64 / total,
            loss_probability: self.losses as f64 / total,
            trials,
        })
    }
}

/// Итог симуляции: три вероятности (в сумме 1.0) и число реально
/// сыгранных прогонов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityResult {
    pub win_probability: f64,
    pub tie_probability: f64,
    pub loss_probability: f64,
    pub trials: u64,
}

/// Проверенная позиция для симуляции: рука героя, известный борд,
/// число соперников и оставшаяся колода (считается один раз).
#[derive(Clone, Debug)]
pub struct EquitySpot {
    hole: [Card; 2],
    community: Vec<Card>,
    opponents: usize,
    remaining: Vec<Card>,
}

impl EquitySpot {
    /// `num_players` — все игроки, включая героя.
    ///
    /// Дубликаты карт не проверяются: это делает граница (api::validation).
    pub fn new(
        hole: &[Card; 2],
        community: &[Card],
        num_players: usize,
    ) -> Result<Self, SimulationError> {
        if !matches!(community.len(), 0 | 3 | 4 | 5) {
            return Err(SimulationError::InvalidCommunity(community.len()));
        }
        if num_players < 2 {
            return Err(SimulationError::NotEnoughPlayers(num_players));
        }

        let mut known = Vec::with_capacity(2 + community.len());
        known.extend_from_slice(hole);
        known.extend_from_slice(community);
        let remaining = Deck::without(&known).cards;

        let opponents = num_players - 1;
        let needed = (BOARD_SIZE - community.len()) + 2 * opponents;
        if needed > remaining.len() {
            return Err(SimulationError::TooManyPlayers {
                players: num_players,
                max: MAX_PLAYERS,
            });
        }

        Ok(Self {
            hole: *hole,
            community: community.to_vec(),
            opponents,
            remaining,
        })
    }

    pub fn hole(&self) -> &[Card; 2] {
        &self.hole
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn opponents(&self) -> usize {
        self.opponents
    }

    /// Карты, которые ещё могут прийти.
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    /// Сколько карт вытягивается за прогон: добор борда + руки соперников.
    pub fn cards_per_trial(&self) -> usize {
        (BOARD_SIZE - self.community.len()) + 2 * self.opponents
    }
}

/// Симулятор для одной позиции и одного RNG.
///
/// Буферы выделяются один раз в `new`, прогоны их только перезаписывают.
pub struct EquitySimulator<'a, R: RandomSource> {
    spot: &'a EquitySpot,
    rng: R,
    scratch: Vec<Card>,
    hero: [Card; 7],
    villain: [Card; 7],
}

impl<'a, R: RandomSource> EquitySimulator<'a, R> {
    pub fn new(spot: &'a EquitySpot, rng: R) -> Self {
        // [hole0, hole1, board0..board4]; недостающий борд дописывается в каждом прогоне.
        let mut hero = [spot.hole[0]; 7];
        hero[..2].copy_from_slice(&spot.hole);
        hero[2..2 + spot.community.len()].copy_from_slice(&spot.community);

        let villain = hero;

        Self {
            spot,
            rng,
            scratch: spot.remaining.clone(),
            hero,
            villain,
        }
    }

    /// Один прогон: достроить борд, раздать соперникам, сравнить.
    pub fn play_trial(&mut self) -> TrialOutcome {
        let known = self.spot.community.len();
        let missing = BOARD_SIZE - known;
        let needed = self.spot.cards_per_trial();

        self.scratch.copy_from_slice(&self.spot.remaining);
        self.rng.partial_shuffle(&mut self.scratch, needed);

        let (board_draw, hole_draws) = self.scratch[..needed].split_at(missing);
        for (i, card) in board_draw.iter().enumerate() {
            self.hero[2 + known + i] = *card;
            self.villain[2 + known + i] = *card;
        }

        let hero_rank = evaluate_best(&self.hero).rank;

        let villain = &mut self.villain;
        let opponents = hole_draws.chunks_exact(2).map(|pair| {
            villain[0] = pair[0];
            villain[1] = pair[1];
            evaluate_best(&villain[..]).rank
        });

        trial_outcome(hero_rank, opponents)
    }

    /// Сыграть ровно `trials` прогонов.
    pub fn run(&mut self, trials: u64) -> OutcomeTally {
        let mut tally = OutcomeTally::default();
        for _ in 0..trials {
            tally.record(self.play_trial());
        }
        tally
    }

    /// Как `run`, но флаг `stop` проверяется между прогонами.
    /// Остановка раньше срока — валидный, просто менее точный результат.
    pub fn run_until(&mut self, trials: u64, stop: &AtomicBool) -> OutcomeTally {
        let mut tally = OutcomeTally::default();
        for _ in 0..trials {
            if stop.load(Ordering::Relaxed) {
                log::debug!(
                    "simulation stopped early after {} of {} trials",
                    tally.trials(),
                    trials
                );
                break;
            }
            tally.record(self.play_trial());
        }
        tally
    }
}

/// Оценить эквити руки `hole` против `num_players - 1` соперников.
///
/// RNG свой на каждый вызов, seed из энтропии ОС: два одинаковых вызова
/// дают разные (статистически близкие) результаты.
pub fn simulate(
    hole: &[Card; 2],
    community: &[Card],
    num_players: usize,
    trials: u32,
) -> Result<EquityResult, SimulationError> {
    simulate_with_rng(hole, community, num_players, trials, SystemRng::default())
}

/// То же, что `simulate`, но с заданным RNG.
pub fn simulate_with_rng<R: RandomSource>(
    hole: &[Card; 2],
    community: &[Card],
    num_players: usize,
    trials: u32,
    rng: R,
) -> Result<EquityResult, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::ZeroTrials);
    }
    let spot = EquitySpot::new(hole, community, num_players)?;

    log::debug!(
        "simulating {} trials: {} opponents, {} board cards known",
        trials,
        spot.opponents(),
        spot.community().len()
    );

    let tally = EquitySimulator::new(&spot, rng).run(u64::from(trials));
    log::debug!(
        "simulation done: {} wins, {} ties, {} losses",
        tally.wins,
        tally.ties,
        tally.losses
    );

    tally.to_result()
}

/// Параллельная симуляция на `workers` задачах rayon.
///
/// Каждый воркер получает свой поток RNG `seed.derive(worker)`, счётчики
/// суммируются. При одинаковых seed и `workers` результат воспроизводим.
pub fn simulate_parallel(
    hole: &[Card; 2],
    community: &[Card],
    num_players: usize,
    trials: u32,
    workers: usize,
    seed: &RngSeed,
) -> Result<EquityResult, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::ZeroTrials);
    }
    if workers == 0 {
        return Err(SimulationError::ZeroWorkers);
    }
    let spot = EquitySpot::new(hole, community, num_players)?;

    let trials = u64::from(trials);
    let workers = (workers as u64).min(trials);
    let base = trials / workers;
    let extra = trials % workers;

    log::debug!(
        "simulating {} trials on {} workers: {} opponents",
        trials,
        workers,
        spot.opponents()
    );

    let tally = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let share = base + u64::from(worker < extra);
            EquitySimulator::new(&spot, seed.derive(worker).to_rng()).run(share)
        })
        .reduce(OutcomeTally::default, OutcomeTally::merge);

    tally.to_result()
}
