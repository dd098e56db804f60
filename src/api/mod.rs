//! Внешний API движка игры в кости.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (бросок, переброс, выбор костей, зачёт);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для UI;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - сессия (session.rs) — движок + RNG, применяет команды.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod session;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use session::GameSession;
