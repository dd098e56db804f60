use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread_rng) для живой игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high.max(low))
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же партии при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(bytes: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(bytes),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high.max(low))
    }
}

/// Скриптованный RNG: отдаёт заранее заданные значения по кругу.
///
/// Значение вне запрошенного диапазона заворачивается в него по модулю,
/// так что кости всегда остаются в 1..=6.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    /// Пустой скрипт ведёт себя как последовательность из одних нулей.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            values: values.into_iter().collect(),
            pos: 0,
        }
    }

    /// Удобный конструктор из значений костей.
    pub fn from_faces(faces: &[u8]) -> Self {
        Self::new(faces.iter().map(|&f| f as u32))
    }

    /// Сколько значений уже выдано.
    pub fn draws(&self) -> usize {
        self.pos
    }

    fn next_raw(&mut self) -> u32 {
        if self.values.is_empty() {
            self.pos += 1;
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

impl RandomSource for ScriptedRng {
    fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let high = high.max(low);
        let span = (high - low) as u64 + 1;
        let raw = self.next_raw();
        low + ((raw.wrapping_sub(low) as u64) % span) as u32
    }
}
