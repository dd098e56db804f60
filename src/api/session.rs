use crate::domain::config::GameConfig;
use crate::engine::{GameEngine, RandomSource, TurnStatus};

use super::commands::Command;
use super::dto::{CommandResponse, GameResultDto, RoundOutcomeDto};
use super::errors::ApiError;
use super::queries::{build_game_view, Query, QueryResponse};

/// Игровая сессия: движок + RNG.
///
/// UI шлёт сюда `Command` / `Query` и рисует то, что вернулось.
/// Один активный вызывающий за раз, никаких блокировок.
pub struct GameSession<R: RandomSource> {
    engine: GameEngine,
    rng: R,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            engine: GameEngine::new(config),
            rng,
        }
    }

    /// Создать сессию из JSON-конфига (`{"win_point": N}`).
    pub fn from_json_config(json: &str, rng: R) -> Result<Self, ApiError> {
        let config = GameConfig::from_json(json)?;
        Ok(Self::new(config, rng))
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Выполнить команду UI.
    pub fn execute(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::NewGame => {
                self.engine.new_game();
                Ok(self.state_response())
            }
            Command::StartTurn => {
                self.engine.start_turn()?;
                Ok(self.state_response())
            }
            Command::FirstRoll => {
                self.engine.first_roll(&mut self.rng)?;
                Ok(self.state_response())
            }
            Command::RerollPlayer => {
                let status = self.engine.reroll_player(&mut self.rng)?;
                Ok(self.status_response(status))
            }
            Command::RerollComputer => {
                self.engine.reroll_computer(&mut self.rng)?;
                Ok(self.state_response())
            }
            Command::Rethrow => {
                let status = self.engine.rethrow(&mut self.rng)?;
                Ok(self.status_response(status))
            }
            Command::ToggleKeep { index } => {
                let kept = self.engine.toggle_keep(index)?;
                Ok(CommandResponse::KeepToggled { index, kept })
            }
            Command::FinalizeRound => {
                self.engine.finalize_round(&mut self.rng)?;
                Ok(self.round_response())
            }
        }
    }

    /// Ответить на запрос "только чтение".
    pub fn query(&self, query: Query) -> QueryResponse {
        match query {
            Query::GetGame => QueryResponse::Game(build_game_view(&self.engine)),
            Query::GetHistory => QueryResponse::History(self.engine.history().clone()),
        }
    }

    /// История партии в JSON.
    pub fn history_json(&self) -> Result<String, ApiError> {
        self.engine
            .history()
            .to_json()
            .map_err(|e| ApiError::Internal(e.to_string()))
    }

    fn state_response(&self) -> CommandResponse {
        CommandResponse::GameState(build_game_view(&self.engine))
    }

    fn status_response(&self, status: TurnStatus) -> CommandResponse {
        match status {
            TurnStatus::Ongoing => self.state_response(),
            TurnStatus::Finished(_) => self.round_response(),
        }
    }

    /// Ответ после засчитанного раунда (итог берём из last_outcome движка).
    fn round_response(&self) -> CommandResponse {
        let game = build_game_view(&self.engine);
        let outcome = match self.engine.last_outcome() {
            Some(o) => RoundOutcomeDto::from(o),
            None => return CommandResponse::GameState(game),
        };

        match self.engine.result() {
            Some(result) => CommandResponse::GameFinished {
                game,
                outcome,
                result: GameResultDto::from(result),
            },
            None => CommandResponse::RoundFinished { game, outcome },
        }
    }
}
