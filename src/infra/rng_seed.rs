//! RngSeed — доменный seed для RNG партии.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || game_id || round_index)
//!   - создавать DeterministicRng из seed
//!
//! Нужен для воспроизводимых партий в dev-CLI и тестах.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{GameId, RoundIndex};
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с контекстом партии и раунда.
    pub fn derive(&self, game_id: GameId, round_index: RoundIndex) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"DICE_DUEL_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(game_id.to_le_bytes());
        hasher.update(round_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
