use serde::{Deserialize, Serialize};

use crate::engine::turn::{EngineAction, TurnPhase};
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON конфига).
    BadRequest(String),

    /// Команда не может быть выполнена в текущей фазе хода.
    InvalidCommand {
        action: EngineAction,
        phase: TurnPhase,
        message: String,
    },

    /// Индекс кости вне 0..5.
    OutOfRangeIndex(usize),

    /// Внутренняя ошибка (сериализация и т.п.).
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err {
            EngineError::InvalidStateTransition { action, phase } => ApiError::InvalidCommand {
                action,
                phase,
                message,
            },
            EngineError::OutOfRangeIndex(index) => ApiError::OutOfRangeIndex(index),
            EngineError::InvalidConfiguration(_) | EngineError::InvalidDieValue(_) => {
                ApiError::BadRequest(message)
            }
        }
    }
}
