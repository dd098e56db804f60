use serde::{Deserialize, Serialize};

use crate::domain::dice::DiceSet;
use crate::domain::points::Points;
use crate::domain::score::Side;
use crate::domain::RoundIndex;

/// Итог одного раунда после разрешения ничьей (если она была).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round_index: RoundIndex,
    /// Кости, которые пошли в зачёт (после переброса ничьей — новые).
    pub player_dice: DiceSet,
    pub computer_dice: DiceSet,
    pub player_sum: u32,
    pub computer_sum: u32,
    pub winner: Side,
    /// Сколько раз перебрасывали обе руки из-за равных сумм (0 — ничьей не было).
    pub tie_break_rolls: u32,
}

impl RoundOutcome {
    pub fn was_tie_break(&self) -> bool {
        self.tie_break_rolls > 0
    }
}

/// Финал партии: кто первым набрал win_point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Side,
    pub player_score: Points,
    pub computer_score: Points,
    /// Сколько раундов было сыграно.
    pub rounds_played: RoundIndex,
}
