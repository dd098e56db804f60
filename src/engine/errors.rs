use thiserror::Error;

use crate::engine::turn::{EngineAction, TurnPhase};

/// Ошибки движка игры в кости.
///
/// При любой ошибке состояние движка остаётся неизменным.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Действие {action:?} недопустимо в фазе {phase:?}")]
    InvalidStateTransition {
        action: EngineAction,
        phase: TurnPhase,
    },

    #[error("Некорректный конфиг партии: {0}")]
    InvalidConfiguration(String),

    #[error("Индекс кости {0} вне диапазона 0..5")]
    OutOfRangeIndex(usize),

    #[error("Значение кости {0} вне диапазона 1..=6")]
    InvalidDieValue(u8),
}
