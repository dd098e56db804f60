use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Очки в общем зачёте партии. Обёртка над u32, чтобы не путать с суммой костей.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(pub u32);

impl Points {
    pub const ZERO: Points = Points(0);

    pub fn new(amount: u32) -> Self {
        Points(amount)
    }

    /// Разница "self - other" со знаком (для эвристики компьютера).
    pub fn signed_diff(self, other: Points) -> i64 {
        self.0 as i64 - other.0 as i64
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Self::Output {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl From<u32> for Points {
    fn from(value: u32) -> Self {
        Points(value)
    }
}
