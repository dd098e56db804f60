//! Доменная модель игры в кости: кости, маска удержания, очки, счёт, конфиг партии.

pub mod config;
pub mod dice;
pub mod points;
pub mod round;
pub mod score;

/// Порядковый номер раунда в партии (с 1).
pub type RoundIndex = u32;

/// Идентификатор партии (для сидов RNG и логов).
pub type GameId = u64;

pub use config::*;
pub use dice::*;
pub use points::*;
pub use round::*;
pub use score::*;
