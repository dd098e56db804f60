use serde::{Deserialize, Serialize};

/// Команда верхнего уровня — всё, что UI может нажать.
///
/// Каждая команда отображается ровно на одну операцию `GameEngine`
/// (кроме `Rethrow`, которая перебрасывает обе стороны).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую партию с тем же win_point.
    NewGame,

    /// Начать новый ход (сбросить маску и счётчики).
    StartTurn,

    /// Кнопка "throw": первый бросок обеих сторон.
    FirstRoll,

    /// Переброс только костей человека.
    RerollPlayer,

    /// Переброс только костей компьютера.
    RerollComputer,

    /// Кнопка "re-throw": компьютер, затем человек.
    Rethrow,

    /// Выбрать/снять кость для удержания.
    ToggleKeep { index: usize },

    /// Кнопка "score": засчитать раунд.
    FinalizeRound,
}
