//! Инфраструктура вокруг симулятора:
//! - RNG-реализации;
//! - seed и разбиение на независимые потоки;
//! - инициализация логирования для бинарников.

pub mod logging;
pub mod rng;
pub mod rng_seed;

pub use logging::init_logging;
pub use rng::*;
pub use rng_seed::RngSeed;
