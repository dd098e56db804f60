use serde::{Deserialize, Serialize};

use crate::domain::dice::{DiceSet, KeepMask};
use crate::domain::points::Points;
use crate::domain::score::Side;
use crate::domain::RoundIndex;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Новая партия (создание движка или new_game).
    GameStarted { win_point: Points },

    /// Начался новый ход/раунд.
    TurnStarted { round_index: RoundIndex },

    /// Первый бросок обеих сторон.
    FirstRoll {
        player: DiceSet,
        computer: DiceSet,
    },

    /// Человек выбрал/снял кость для удержания.
    KeepToggled { index: usize, kept: bool },

    /// Переброс костей человека.
    PlayerRerolled {
        keep: KeepMask,
        dice: DiceSet,
        roll_count: u8,
    },

    /// Переброс костей компьютера по эвристике.
    ComputerRerolled {
        keep: KeepMask,
        dice: DiceSet,
        roll_count: u8,
    },

    /// Одна итерация переброса при равных суммах.
    TieBreakRolled {
        attempt: u32,
        player: DiceSet,
        computer: DiceSet,
    },

    /// Раунд засчитан.
    RoundScored {
        round_index: RoundIndex,
        winner: Side,
        player_sum: u32,
        computer_sum: u32,
        player_score: Points,
        computer_score: Points,
    },

    /// Кто-то добрал win_point.
    GameOver { winner: Side },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEventKind> {
        self.events.last().map(|e| &e.kind)
    }

    /// Сколько итераций переброса ничьих было за всю партию.
    pub fn tie_break_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, GameEventKind::TieBreakRolled { .. }))
            .count()
    }

    /// Выгрузка в JSON (для реплея/отладки).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
