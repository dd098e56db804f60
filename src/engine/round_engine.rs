use crate::domain::config::GameConfig;
use crate::domain::dice::{DiceSet, KeepMask};
use crate::domain::round::{GameResult, RoundOutcome};
use crate::domain::score::{ScoreBoard, Side};
use crate::domain::RoundIndex;
use crate::engine::errors::EngineError;
use crate::engine::game_history::{GameEventKind, GameHistory};
use crate::engine::reroll_unkept;
use crate::engine::strategy::{self, DecisionContext};
use crate::engine::turn::{
    ActionAvailability, EngineAction, TurnPhase, TurnState, TurnStatus, MAX_ROLLS_PER_TURN,
};
use crate::engine::RandomSource;

/// Состояние одной партии "человек против компьютера".
///
/// Кости, маска и счётчики бросков живут в пределах хода;
/// счёт, конфиг и результат — всю партию.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    player_dice: DiceSet,
    computer_dice: DiceSet,
    keep_mask: KeepMask,
    turn: TurnState,
    scores: ScoreBoard,
    /// Сколько раундов уже засчитано.
    rounds_played: RoundIndex,
    last_outcome: Option<RoundOutcome>,
    result: Option<GameResult>,
    history: GameHistory,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let mut history = GameHistory::new();
        history.push(GameEventKind::GameStarted {
            win_point: config.win_point(),
        });

        Self {
            config,
            player_dice: DiceSet::ones(),
            computer_dice: DiceSet::ones(),
            keep_mask: KeepMask::none(),
            turn: TurnState::new(),
            scores: ScoreBoard::new(),
            rounds_played: 0,
            last_outcome: None,
            result: None,
            history,
        }
    }

    /// Партия до 101 очка.
    pub fn with_default_config() -> Self {
        Self::new(GameConfig::default())
    }

    /// Новая партия с тем же конфигом. Единственный выход из GameOver.
    pub fn new_game(&mut self) {
        *self = Self::new(self.config);
    }

    // ---------------------------------------------------------------------
    // Запросы
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_dice(&self) -> &DiceSet {
        &self.player_dice
    }

    pub fn computer_dice(&self) -> &DiceSet {
        &self.computer_dice
    }

    pub fn dice(&self, side: Side) -> &DiceSet {
        match side {
            Side::Player => &self.player_dice,
            Side::Computer => &self.computer_dice,
        }
    }

    pub fn keep_mask(&self) -> &KeepMask {
        &self.keep_mask
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn rounds_played(&self) -> RoundIndex {
        self.rounds_played
    }

    /// Номер текущего (ещё не засчитанного) раунда.
    pub fn current_round(&self) -> RoundIndex {
        self.rounds_played + 1
    }

    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn phase(&self) -> TurnPhase {
        TurnPhase::from_turn(&self.turn, self.is_game_over())
    }

    pub fn available_actions(&self) -> ActionAvailability {
        ActionAvailability::for_phase(self.phase())
    }

    // ---------------------------------------------------------------------
    // Операции хода
    // ---------------------------------------------------------------------

    /// Начать ход: маска и оба счётчика бросков в ноль.
    /// Только из Idle: брошенный, но не засчитанный ход сбросить нельзя.
    pub fn start_turn(&mut self) -> Result<(), EngineError> {
        self.ensure_not_over(EngineAction::StartTurn)?;
        if self.turn.in_progress() {
            return Err(self.invalid(EngineAction::StartTurn));
        }

        self.keep_mask = KeepMask::none();
        self.turn.reset();
        self.history.push(GameEventKind::TurnStarted {
            round_index: self.current_round(),
        });
        Ok(())
    }

    /// Первый бросок: все пять костей у обеих сторон, маска не учитывается.
    pub fn first_roll<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.ensure_not_over(EngineAction::FirstRoll)?;
        if self.turn.in_progress() {
            return Err(self.invalid(EngineAction::FirstRoll));
        }

        self.player_dice = rng.roll_dice();
        self.computer_dice = rng.roll_dice();
        self.keep_mask = KeepMask::none();
        self.turn.roll_count = 1;
        self.turn.computer_roll_count = 1;

        self.history.push(GameEventKind::FirstRoll {
            player: self.player_dice,
            computer: self.computer_dice,
        });
        Ok(())
    }

    /// Переброс неудержанных костей человека.
    ///
    /// Третий бросок сразу закрывает раунд — тогда возвращается `TurnStatus::Finished`.
    pub fn reroll_player<R: RandomSource>(&mut self, rng: &mut R) -> Result<TurnStatus, EngineError> {
        self.ensure_can_reroll(EngineAction::RerollPlayer)?;

        self.player_dice = reroll_unkept(rng, &self.player_dice, &self.keep_mask);
        self.turn.roll_count += 1;

        self.history.push(GameEventKind::PlayerRerolled {
            keep: self.keep_mask,
            dice: self.player_dice,
            roll_count: self.turn.roll_count,
        });

        if self.turn.roll_count >= MAX_ROLLS_PER_TURN {
            let outcome = self.finalize_round(rng)?;
            return Ok(TurnStatus::Finished(outcome));
        }
        Ok(TurnStatus::Ongoing)
    }

    /// Переброс компьютера по эвристике. После третьего броска компьютера — no-op.
    pub fn reroll_computer<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        self.ensure_not_over(EngineAction::RerollComputer)?;
        if !self.turn.in_progress() {
            return Err(self.invalid(EngineAction::RerollComputer));
        }
        if !self.turn.computer_can_reroll() {
            return Ok(());
        }

        let ctx = self.decision_context();
        if let Some(decision) = strategy::plan(rng, &ctx) {
            self.computer_dice = decision.dice;
            self.turn.computer_roll_count = decision.roll_count;

            self.history.push(GameEventKind::ComputerRerolled {
                keep: decision.keep,
                dice: decision.dice,
                roll_count: decision.roll_count,
            });
        }
        Ok(())
    }

    /// Кнопка "re-throw": сначала компьютер, потом человек.
    pub fn rethrow<R: RandomSource>(&mut self, rng: &mut R) -> Result<TurnStatus, EngineError> {
        // Проверяем заранее, чтобы не перебросить компьютер при недопустимом ходе человека.
        self.ensure_can_reroll(EngineAction::RerollPlayer)?;

        self.reroll_computer(rng)?;
        self.reroll_player(rng)
    }

    /// Переключить удержание кости. Возвращает новое значение бита.
    pub fn toggle_keep(&mut self, index: usize) -> Result<bool, EngineError> {
        self.ensure_can_reroll(EngineAction::ToggleKeep)?;

        let kept = self.keep_mask.toggle(index)?;
        self.history.push(GameEventKind::KeepToggled { index, kept });
        Ok(kept)
    }

    /// Засчитать раунд.
    ///
    /// При равных суммах обе стороны перебрасывают все кости, пока суммы не разойдутся;
    /// в зачёт идут последние кости. Обе стороны получают свою сумму в общий счёт.
    pub fn finalize_round<R: RandomSource>(&mut self, rng: &mut R) -> Result<RoundOutcome, EngineError> {
        self.ensure_not_over(EngineAction::FinalizeRound)?;
        if !self.turn.in_progress() {
            return Err(self.invalid(EngineAction::FinalizeRound));
        }

        let tie_break_rolls = self.resolve_tie(rng);

        let player_sum = self.player_dice.sum();
        let computer_sum = self.computer_dice.sum();
        let winner = if player_sum > computer_sum {
            Side::Player
        } else {
            Side::Computer
        };

        let outcome = RoundOutcome {
            round_index: self.current_round(),
            player_dice: self.player_dice,
            computer_dice: self.computer_dice,
            player_sum,
            computer_sum,
            winner,
            tie_break_rolls,
        };

        self.scores.record_round(&outcome);
        self.rounds_played += 1;
        self.turn.reset();
        self.keep_mask = KeepMask::none();

        self.history.push(GameEventKind::RoundScored {
            round_index: outcome.round_index,
            winner,
            player_sum,
            computer_sum,
            player_score: self.scores.player_score,
            computer_score: self.scores.computer_score,
        });

        if let Some(game_winner) = self.scores.leader_at(self.config.win_point()) {
            self.result = Some(GameResult {
                winner: game_winner,
                player_score: self.scores.player_score,
                computer_score: self.scores.computer_score,
                rounds_played: self.rounds_played,
            });
            self.history.push(GameEventKind::GameOver {
                winner: game_winner,
            });
        }

        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    // ---------------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------------

    /// Цикл, а не рекурсия: число итераций не ограничено сверху.
    fn resolve_tie<R: RandomSource>(&mut self, rng: &mut R) -> u32 {
        let mut attempts = 0u32;
        while self.player_dice.sum() == self.computer_dice.sum() {
            self.player_dice = rng.roll_dice();
            self.computer_dice = rng.roll_dice();
            attempts = attempts.saturating_add(1);

            self.history.push(GameEventKind::TieBreakRolled {
                attempt: attempts,
                player: self.player_dice,
                computer: self.computer_dice,
            });
        }
        attempts
    }

    fn decision_context(&self) -> DecisionContext {
        DecisionContext {
            dice: self.computer_dice,
            computer_score: self.scores.computer_score,
            player_score: self.scores.player_score,
            win_point: self.config.win_point(),
            roll_count: self.turn.computer_roll_count,
        }
    }

    fn invalid(&self, action: EngineAction) -> EngineError {
        EngineError::InvalidStateTransition {
            action,
            phase: self.phase(),
        }
    }

    fn ensure_not_over(&self, action: EngineAction) -> Result<(), EngineError> {
        if self.is_game_over() {
            return Err(self.invalid(action));
        }
        Ok(())
    }

    /// Между первым и третьим броском человека.
    fn ensure_can_reroll(&self, action: EngineAction) -> Result<(), EngineError> {
        self.ensure_not_over(action)?;
        if !self.turn.can_reroll() {
            return Err(self.invalid(action));
        }
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_default_config()
    }
}
