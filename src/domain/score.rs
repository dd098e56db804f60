use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::round::RoundOutcome;

/// Сторона за столом: человек или компьютер.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Общий счёт партии.
///
/// Очки накопительные: по итогам раунда ОБЕ стороны получают сумму своих костей,
/// победителю раунда дополнительно засчитывается победа в раунде.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBoard {
    pub player_score: Points,
    pub computer_score: Points,
    pub player_wins: u32,
    pub computer_wins: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, side: Side) -> Points {
        match side {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_wins,
            Side::Computer => self.computer_wins,
        }
    }

    /// Начислить итог раунда: обе суммы в счёт, +1 победа победителю.
    pub fn record_round(&mut self, outcome: &RoundOutcome) {
        self.player_score += Points(outcome.player_sum);
        self.computer_score += Points(outcome.computer_sum);
        match outcome.winner {
            Side::Player => self.player_wins += 1,
            Side::Computer => self.computer_wins += 1,
        }
    }

    /// Кто первым добрал до win_point. Игрок проверяется первым.
    pub fn leader_at(&self, win_point: Points) -> Option<Side> {
        if self.player_score >= win_point {
            Some(Side::Player)
        } else if self.computer_score >= win_point {
            Some(Side::Computer)
        } else {
            None
        }
    }
}
