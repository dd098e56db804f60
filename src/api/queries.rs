use serde::{Deserialize, Serialize};

use crate::engine::{GameEngine, GameHistory};

use super::dto::{DiceViewDto, GameResultDto, GameViewDto, RoundOutcomeDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Текущее состояние партии.
    GetGame,

    /// История событий партии.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Game(GameViewDto),
    History(GameHistory),
}

/// Сформировать DTO партии из движка.
pub fn build_game_view(engine: &GameEngine) -> GameViewDto {
    let turn = engine.turn();
    let scores = engine.scores();

    GameViewDto {
        win_point: engine.config().win_point().0,
        current_round: engine.current_round(),
        phase: engine.phase(),
        actions: engine.available_actions(),
        player: DiceViewDto {
            values: engine.player_dice().values(),
            sum: engine.player_dice().sum(),
            roll_count: turn.roll_count,
        },
        computer: DiceViewDto {
            values: engine.computer_dice().values(),
            sum: engine.computer_dice().sum(),
            roll_count: turn.computer_roll_count,
        },
        keep_mask: engine.keep_mask().bits(),
        player_score: scores.player_score.0,
        computer_score: scores.computer_score.0,
        player_wins: scores.player_wins,
        computer_wins: scores.computer_wins,
        last_round: engine.last_outcome().map(RoundOutcomeDto::from),
        result: engine.result().map(GameResultDto::from),
    }
}
