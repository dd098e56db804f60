use serde::{Deserialize, Serialize};

use crate::domain::dice::DICE_COUNT;
use crate::domain::round::{GameResult, RoundOutcome};
use crate::domain::score::Side;
use crate::domain::RoundIndex;
use crate::engine::turn::{ActionAvailability, TurnPhase};

/// DTO костей одной стороны.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiceViewDto {
    pub values: [u8; DICE_COUNT],
    pub sum: u32,
    /// Сколько бросков сделано в текущем ходу.
    pub roll_count: u8,
}

/// DTO итога раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcomeDto {
    pub round_index: RoundIndex,
    pub player_dice: [u8; DICE_COUNT],
    pub computer_dice: [u8; DICE_COUNT],
    pub player_sum: u32,
    pub computer_sum: u32,
    pub winner: Side,
    pub tie_break_rolls: u32,
}

impl From<&RoundOutcome> for RoundOutcomeDto {
    fn from(o: &RoundOutcome) -> Self {
        Self {
            round_index: o.round_index,
            player_dice: o.player_dice.values(),
            computer_dice: o.computer_dice.values(),
            player_sum: o.player_sum,
            computer_sum: o.computer_sum,
            winner: o.winner,
            tie_break_rolls: o.tie_break_rolls,
        }
    }
}

/// DTO финала партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResultDto {
    pub winner: Side,
    pub player_score: u32,
    pub computer_score: u32,
    pub rounds_played: RoundIndex,
}

impl From<&GameResult> for GameResultDto {
    fn from(r: &GameResult) -> Self {
        Self {
            winner: r.winner,
            player_score: r.player_score.0,
            computer_score: r.computer_score.0,
            rounds_played: r.rounds_played,
        }
    }
}

/// Полный снимок партии для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub win_point: u32,
    pub current_round: RoundIndex,
    pub phase: TurnPhase,
    pub actions: ActionAvailability,
    pub player: DiceViewDto,
    pub computer: DiceViewDto,
    pub keep_mask: [bool; DICE_COUNT],
    pub player_score: u32,
    pub computer_score: u32,
    pub player_wins: u32,
    pub computer_wins: u32,
    pub last_round: Option<RoundOutcomeDto>,
    pub result: Option<GameResultDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Ход продолжается — обновлённое состояние.
    GameState(GameViewDto),

    /// Раунд засчитан (кнопкой "score" или третьим броском).
    RoundFinished {
        game: GameViewDto,
        outcome: RoundOutcomeDto,
    },

    /// Раунд засчитан и партия закончилась.
    GameFinished {
        game: GameViewDto,
        outcome: RoundOutcomeDto,
        result: GameResultDto,
    },

    /// Выбор кости переключён.
    KeepToggled { index: usize, kept: bool },
}
