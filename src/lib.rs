//! Движок игры в кости "человек против компьютера".
//!
//! Пять костей d6 у каждой стороны, до трёх бросков за ход, перебросы с удержанием,
//! переброс ничьих, накопительный счёт до win_point. Никакого I/O:
//! UI вызывает операции `engine::GameEngine` (или `api::GameSession`) и рисует состояние.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{Command, CommandResponse, GameSession, GameViewDto, Query, QueryResponse};
pub use domain::{DiceSet, GameConfig, KeepMask, Points, ScoreBoard, Side};
pub use engine::{EngineError, GameEngine, RandomSource, TurnPhase, TurnStatus};
