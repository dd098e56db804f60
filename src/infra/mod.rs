//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка (системный, детерминированный, скриптованный);
//! - seed-деривация для воспроизводимых партий.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
