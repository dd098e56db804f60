//! Движок партии: ход из трёх бросков, переброс ничьих, счёт, определение победителя.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `start_turn` / `first_roll` – начать ход и бросить все кости обеих сторон
//!   - `reroll_player` / `reroll_computer` / `rethrow` – перебросы внутри хода
//!   - `toggle_keep` – выбрать кости, которые человек удерживает
//!   - `finalize_round` – засчитать раунд и проверить победу

pub mod errors;
pub mod game_history;
pub mod round_engine;
pub mod strategy;
pub mod turn;

pub use errors::EngineError;
pub use game_history::{GameEvent, GameEventKind, GameHistory};
pub use round_engine::GameEngine;
pub use strategy::{choose_keep_mask, decide, ComputerDecision, DecisionContext};
pub use turn::{
    ActionAvailability, EngineAction, TurnPhase, TurnState, TurnStatus, MAX_ROLLS_PER_TURN,
};

use crate::domain::dice::{DiceSet, KeepMask, DICE_COUNT, DIE_SIDES};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand` и скриптованный RNG для тестов).
pub trait RandomSource {
    /// Равномерное целое в low..=high.
    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Одна кость: 1..=6.
    fn roll_die(&mut self) -> u8 {
        let sides = DIE_SIDES as u32;
        self.gen_range_inclusive(1, sides).clamp(1, sides) as u8
    }

    /// Пять свежих костей, без учёта удержания.
    fn roll_dice(&mut self) -> DiceSet {
        let mut values = [0u8; DICE_COUNT];
        for v in values.iter_mut() {
            *v = self.roll_die();
        }
        DiceSet::from_rolled(values)
    }
}

/// Перебросить всё, что не помечено в маске. Общая логика для человека и компьютера.
pub fn reroll_unkept<R: RandomSource>(rng: &mut R, dice: &DiceSet, keep: &KeepMask) -> DiceSet {
    let mut values = dice.values();
    for (i, value) in values.iter_mut().enumerate() {
        if !keep.is_kept(i) {
            *value = rng.roll_die();
        }
    }
    DiceSet::from_rolled(values)
}
