use serde::{Deserialize, Serialize};

use crate::domain::round::RoundOutcome;

/// Максимум бросков за ход для каждой стороны.
pub const MAX_ROLLS_PER_TURN: u8 = 3;

/// Счётчики бросков текущего хода. Сбрасываются в 0 в начале каждого хода.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnState {
    /// Сколько бросков сделал человек (0..=3).
    pub roll_count: u8,
    /// Сколько бросков сделал компьютер (0..=3), ведётся отдельно.
    pub computer_roll_count: u8,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Ход начат: первый бросок уже был.
    pub fn in_progress(&self) -> bool {
        self.roll_count > 0
    }

    /// Можно ли человеку ещё перебрасывать / выбирать кости.
    pub fn can_reroll(&self) -> bool {
        self.roll_count > 0 && self.roll_count < MAX_ROLLS_PER_TURN
    }

    pub fn computer_can_reroll(&self) -> bool {
        self.computer_roll_count < MAX_ROLLS_PER_TURN
    }
}

/// Фаза хода, из которой UI выводит доступность кнопок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// Ход ещё не начат (0 бросков).
    Idle,
    /// Сделан первый бросок.
    FirstRolled,
    /// Сделан второй бросок.
    ReRolled,
    /// Третий бросок: ход сразу закрывается через finalize_round.
    /// Фаза транзитная: reroll_player засчитывает раунд в том же вызове,
    /// поэтому снаружи её не видно.
    FinalRolled,
    /// Партия окончена, нужен new_game().
    GameOver,
}

impl TurnPhase {
    pub fn from_turn(turn: &TurnState, game_over: bool) -> Self {
        if game_over {
            return TurnPhase::GameOver;
        }
        match turn.roll_count {
            0 => TurnPhase::Idle,
            1 => TurnPhase::FirstRolled,
            2 => TurnPhase::ReRolled,
            _ => TurnPhase::FinalRolled,
        }
    }
}

/// Операции движка (для сообщений об ошибках и проверки допустимости).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EngineAction {
    StartTurn,
    FirstRoll,
    RerollPlayer,
    RerollComputer,
    ToggleKeep,
    FinalizeRound,
}

/// Какие действия сейчас доступны ("throw" / "re-throw" / "score" / выбор костей).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionAvailability {
    pub throw: bool,
    pub rethrow: bool,
    pub score: bool,
    pub toggle_keep: bool,
}

impl ActionAvailability {
    pub fn for_phase(phase: TurnPhase) -> Self {
        match phase {
            TurnPhase::Idle => Self {
                throw: true,
                ..Self::default()
            },
            TurnPhase::FirstRolled | TurnPhase::ReRolled => Self {
                throw: false,
                rethrow: true,
                score: true,
                toggle_keep: true,
            },
            // Транзитная фаза (см. TurnPhase::FinalRolled).
            TurnPhase::FinalRolled => Self {
                score: true,
                ..Self::default()
            },
            TurnPhase::GameOver => Self::default(),
        }
    }
}

/// Статус хода после переброса человека.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// Ход продолжается, можно перебрасывать дальше или засчитать.
    Ongoing,
    /// Третий бросок закрыл раунд принудительно.
    Finished(RoundOutcome),
}
