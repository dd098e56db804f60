use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::engine::errors::EngineError;

/// Очки до победы по умолчанию.
pub const DEFAULT_WIN_POINT: u32 = 101;

fn default_win_point() -> i64 {
    DEFAULT_WIN_POINT as i64
}

/// Сырой конфиг в том виде, в каком он приходит снаружи (JSON).
/// Знаковый тип, чтобы отрицательное значение дошло до валидации, а не упало в парсере.
#[derive(Clone, Debug, Deserialize)]
struct RawGameConfig {
    #[serde(default = "default_win_point")]
    win_point: i64,
}

/// Конфиг партии. Фиксируется при старте игры и не меняется до её конца.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    win_point: u32,
}

impl GameConfig {
    /// Создать конфиг. win_point должен быть положительным.
    pub fn new(win_point: i64) -> Result<Self, EngineError> {
        if win_point <= 0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "win_point must be positive, got {win_point}"
            )));
        }
        let win_point = u32::try_from(win_point).map_err(|_| {
            EngineError::InvalidConfiguration(format!("win_point {win_point} is too large"))
        })?;
        Ok(Self { win_point })
    }

    /// Загрузить конфиг из JSON-строки, например `{"win_point": 50}`.
    /// Отсутствующее поле → значение по умолчанию.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let raw: RawGameConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfiguration(e.to_string()))?;
        Self::new(raw.win_point)
    }

    pub fn win_point(&self) -> Points {
        Points(self.win_point)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_point: DEFAULT_WIN_POINT,
        }
    }
}
