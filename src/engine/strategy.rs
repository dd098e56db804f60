//! Эвристика компьютера: какие кости оставить перед вторым и третьим броском.
//!
//! Пороговые значения зафиксированы и не подбираются заново.

use serde::{Deserialize, Serialize};

use crate::domain::dice::{DiceSet, KeepMask};
use crate::domain::points::Points;
use crate::engine::turn::MAX_ROLLS_PER_TURN;
use crate::engine::{reroll_unkept, RandomSource};

/// Перед вторым броском: с такой суммой оставляем всё (максимум 5d6 = 30).
pub const SECOND_ROLL_STAND_SUM: u32 = 22;

/// Перед третьим броском: с такой суммой оставляем всё, если не отстаём.
pub const FINAL_ROLL_STAND_SUM: u32 = 18;

/// Отставание, при котором компьютер рискует и держит только высокие кости.
pub const FAR_BEHIND_DIFF: i64 = -20;

/// "Высокая" кость — держим, когда надо рисковать.
pub const HIGH_DIE: u8 = 5;

/// "Средняя" кость — держим в обычной ситуации.
pub const MID_DIE: u8 = 4;

/// Всё, что нужно эвристике для решения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionContext {
    pub dice: DiceSet,
    pub computer_score: Points,
    pub player_score: Points,
    pub win_point: Points,
    /// Сколько бросков компьютер уже сделал в этом ходу.
    pub roll_count: u8,
}

impl DecisionContext {
    fn dice_sum(&self) -> u32 {
        self.dice.sum()
    }

    fn score_diff(&self) -> i64 {
        self.computer_score.signed_diff(self.player_score)
    }

    fn needed_to_win(&self) -> i64 {
        self.win_point.signed_diff(self.computer_score)
    }

    fn wins_with_current_dice(&self) -> bool {
        self.computer_score.0 as u64 + self.dice_sum() as u64 >= self.win_point.0 as u64
    }
}

/// Решение компьютера перед очередным броском.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerDecision {
    pub keep: KeepMask,
    pub dice: DiceSet,
    pub roll_count: u8,
}

/// Чистая часть решения: какие кости оставить.
///
/// `None` — бросать нельзя (roll_count вне {1, 2}).
pub fn choose_keep_mask(ctx: &DecisionContext) -> Option<KeepMask> {
    let sum = ctx.dice_sum();

    match ctx.roll_count {
        1 => {
            if ctx.wins_with_current_dice() || sum >= SECOND_ROLL_STAND_SUM {
                Some(KeepMask::all())
            } else if ctx.score_diff() < FAR_BEHIND_DIFF {
                Some(keep_at_least(&ctx.dice, HIGH_DIE))
            } else {
                Some(keep_at_least(&ctx.dice, MID_DIE))
            }
        }
        2 => {
            if ctx.wins_with_current_dice() {
                Some(KeepMask::all())
            } else if sum >= FINAL_ROLL_STAND_SUM {
                if ctx.score_diff() >= 0 || ctx.needed_to_win() <= sum as i64 {
                    Some(KeepMask::all())
                } else {
                    Some(keep_at_least(&ctx.dice, HIGH_DIE))
                }
            } else {
                Some(keep_at_least(&ctx.dice, MID_DIE))
            }
        }
        _ => None,
    }
}

fn keep_at_least(dice: &DiceSet, threshold: u8) -> KeepMask {
    KeepMask::from_dice(dice, |v| v >= threshold)
}

/// Принять решение и перебросить неудержанные кости.
pub fn plan<R: RandomSource>(rng: &mut R, ctx: &DecisionContext) -> Option<ComputerDecision> {
    if ctx.roll_count >= MAX_ROLLS_PER_TURN {
        return None;
    }
    let keep = choose_keep_mask(ctx)?;
    let dice = reroll_unkept(rng, &ctx.dice, &keep);

    Some(ComputerDecision {
        keep,
        dice,
        roll_count: ctx.roll_count + 1,
    })
}

/// Новые кости компьютера и новый счётчик бросков.
/// Вне допустимых roll_count кости и счётчик возвращаются без изменений.
pub fn decide<R: RandomSource>(rng: &mut R, ctx: &DecisionContext) -> (DiceSet, u8) {
    match plan(rng, ctx) {
        Some(decision) => (decision.dice, decision.roll_count),
        None => (ctx.dice, ctx.roll_count),
    }
}
