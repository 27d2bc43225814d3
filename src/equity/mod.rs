//! Monte Carlo оценка эквити: сколько раз рука выигрывает / делит / проигрывает
//! против N-1 случайных рук соперников на случайно достроенном борде.

pub mod config;
pub mod errors;
pub mod simulator;

pub use config::SimulationConfig;
pub use errors::{ConfigError, SimulationError};
pub use simulator::{
    simulate, simulate_parallel, simulate_with_rng, trial_outcome, EquityResult, EquitySimulator,
    EquitySpot, OutcomeTally, TrialOutcome, MAX_PLAYERS,
};

/// Абстракция RNG.
///
/// Реализации: `infra::SystemRng` (энтропия ОС) и `infra::DeterministicRng` (seed).
/// Каждый симулятор владеет своим экземпляром, общего состояния нет.
pub trait RandomSource {
    /// Случайный индекс из `0..upper`. `upper > 0`.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Полное перемешивание (Fisher–Yates).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        self.partial_shuffle(slice, len);
    }

    /// Частичный Fisher–Yates: случайными становятся только первые `amount`
    /// позиций, остаток слайса не трогаем дальше необходимого.
    fn partial_shuffle<T>(&mut self, slice: &mut [T], amount: usize) {
        let len = slice.len();
        for j in 0..amount.min(len) {
            let idx = j + self.gen_index(len - j);
            slice.swap(j, idx);
        }
    }
}
