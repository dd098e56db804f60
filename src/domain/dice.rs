use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Сколько костей у каждой стороны.
pub const DICE_COUNT: usize = 5;

/// Количество граней у кости.
pub const DIE_SIDES: u8 = 6;

/// Набор из пяти костей одной стороны. Значения всегда в 1..=6,
/// в том числе после десериализации (через `DiceSet::new`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "[u8; DICE_COUNT]")]
pub struct DiceSet([u8; DICE_COUNT]);

impl DiceSet {
    /// Создать набор с проверкой диапазона каждой кости.
    pub fn new(values: [u8; DICE_COUNT]) -> Result<Self, EngineError> {
        if let Some(&bad) = values.iter().find(|&&v| !is_valid_face(v)) {
            return Err(EngineError::InvalidDieValue(bad));
        }
        Ok(DiceSet(values))
    }

    /// Начальное состояние до первого броска: все кости показывают 1.
    pub fn ones() -> Self {
        DiceSet([1; DICE_COUNT])
    }

    pub fn values(&self) -> [u8; DICE_COUNT] {
        self.0
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Сумма очков на всех костях (5..=30).
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&v| v as u32).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Сборка из значений, уже прошедших через RandomSource::roll_die.
    pub(crate) fn from_rolled(values: [u8; DICE_COUNT]) -> Self {
        debug_assert!(values.iter().all(|&v| is_valid_face(v)));
        DiceSet(values)
    }
}

impl TryFrom<[u8; DICE_COUNT]> for DiceSet {
    type Error = EngineError;

    fn try_from(values: [u8; DICE_COUNT]) -> Result<Self, Self::Error> {
        DiceSet::new(values)
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::ones()
    }
}

fn is_valid_face(value: u8) -> bool {
    (1..=DIE_SIDES).contains(&value)
}

/// Какие кости удерживаются на следующем броске (параллельно DiceSet).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct KeepMask([bool; DICE_COUNT]);

impl KeepMask {
    /// Ничего не удерживаем — состояние в начале каждого хода.
    pub fn none() -> Self {
        KeepMask([false; DICE_COUNT])
    }

    /// Удерживаем все пять костей.
    pub fn all() -> Self {
        KeepMask([true; DICE_COUNT])
    }

    pub fn from_array(bits: [bool; DICE_COUNT]) -> Self {
        KeepMask(bits)
    }

    /// Построить маску по предикату над значениями костей.
    pub fn from_dice(dice: &DiceSet, keep: impl Fn(u8) -> bool) -> Self {
        let mut bits = [false; DICE_COUNT];
        for (bit, value) in bits.iter_mut().zip(dice.iter()) {
            *bit = keep(value);
        }
        KeepMask(bits)
    }

    pub fn bits(&self) -> [bool; DICE_COUNT] {
        self.0
    }

    /// Индекс вне 0..5 считается "не удержан".
    pub fn is_kept(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn kept_count(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        self.kept_count() == 0
    }

    /// Переключить бит. Возвращает новое значение бита.
    pub fn toggle(&mut self, index: usize) -> Result<bool, EngineError> {
        let bit = self
            .0
            .get_mut(index)
            .ok_or(EngineError::OutOfRangeIndex(index))?;
        *bit = !*bit;
        Ok(*bit)
    }
}
