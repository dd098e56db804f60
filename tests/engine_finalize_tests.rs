// tests/engine_finalize_tests.rs
//
// Засчёт раунда: накопительный счёт, переброс ничьих, конец партии.

use dice_duel_engine::domain::{DiceSet, GameConfig, Points, Side};
use dice_duel_engine::engine::{
    ActionAvailability, GameEngine, GameEventKind, RandomSource, TurnPhase, TurnStatus,
};
use dice_duel_engine::infra::{DeterministicRng, ScriptedRng};

fn engine_with_win_point(win_point: i64) -> GameEngine {
    GameEngine::new(GameConfig::new(win_point).unwrap())
}

/// Первый бросок из двух наборов по 5 одинаковых костей, дальше — `tail`.
fn faces(player: u8, computer: u8, tail: &[u8]) -> ScriptedRng {
    let mut v = vec![player; 5];
    v.extend(std::iter::repeat(computer).take(5));
    v.extend_from_slice(tail);
    ScriptedRng::from_faces(&v)
}

//
// Обычный раунд
//
#[test]
fn higher_sum_wins_round_and_both_scores_grow() {
    let mut engine = GameEngine::with_default_config();
    let mut rng = faces(5, 4, &[]);

    engine.first_roll(&mut rng).unwrap();
    let outcome = engine.finalize_round(&mut rng).unwrap();

    assert_eq!(outcome.player_sum, 25);
    assert_eq!(outcome.computer_sum, 16);
    assert_eq!(outcome.winner, Side::Player);
    assert!(!outcome.was_tie_break());

    let scores = engine.scores();
    assert_eq!(scores.player_wins, 1);
    assert_eq!(scores.computer_wins, 0);
    assert_eq!(scores.player_score, Points(25));
    assert_eq!(scores.computer_score, Points(16));
    assert_eq!(engine.history().tie_break_count(), 0);
    assert_eq!(rng.draws(), 10);
}

/// Проигравший тоже получает свою сумму.
#[test]
fn loser_still_accumulates_own_sum() {
    let mut engine = GameEngine::with_default_config();
    let mut rng = faces(1, 2, &[]);

    engine.first_roll(&mut rng).unwrap();
    let outcome = engine.finalize_round(&mut rng).unwrap();

    assert_eq!(outcome.winner, Side::Computer);
    assert_eq!(engine.scores().computer_wins, 1);
    assert_eq!(engine.scores().player_score, Points(5));
    assert_eq!(engine.scores().computer_score, Points(10));
}

//
// Ничья
//
#[test]
fn tie_rerolls_both_hands_until_sums_differ() {
    let mut engine = GameEngine::with_default_config();
    let mut tail = vec![2u8; 10]; // первая попытка: снова 10 vs 10
    tail.extend_from_slice(&[6, 6, 6, 6, 6, 1, 1, 1, 1, 1]); // вторая: 30 vs 5
    let mut rng = faces(3, 3, &tail);

    engine.first_roll(&mut rng).unwrap();
    let outcome = engine.finalize_round(&mut rng).unwrap();

    assert_eq!(outcome.tie_break_rolls, 2);
    assert_eq!(outcome.player_sum, 30);
    assert_eq!(outcome.computer_sum, 5);
    assert_eq!(outcome.winner, Side::Player);
    assert_eq!(outcome.player_dice, DiceSet::new([6; 5]).unwrap());

    // Последний переброс заменяет показанные кости.
    assert_eq!(*engine.player_dice(), DiceSet::new([6; 5]).unwrap());
    assert_eq!(*engine.computer_dice(), DiceSet::new([1; 5]).unwrap());

    assert_eq!(engine.scores().player_score, Points(30));
    assert_eq!(engine.scores().computer_score, Points(5));
    assert_eq!(engine.scores().player_wins, 1);
    assert_eq!(engine.history().tie_break_count(), 2);
    assert_eq!(rng.draws(), 30);
}

/// Переброс ничьей игнорирует маску удержания.
#[test]
fn tie_break_ignores_keep_mask() {
    let mut engine = GameEngine::with_default_config();
    let mut rng = faces(3, 3, &[1, 1, 1, 1, 1, 6, 6, 6, 6, 6]);

    engine.first_roll(&mut rng).unwrap();
    for i in 0..5 {
        engine.toggle_keep(i).unwrap();
    }
    let outcome = engine.finalize_round(&mut rng).unwrap();

    assert_eq!(outcome.player_sum, 5);
    assert_eq!(outcome.computer_sum, 30);
    assert_eq!(outcome.winner, Side::Computer);
    assert!(engine.keep_mask().is_empty());
}

//
// Сброс после засчёта
//
#[test]
fn finalize_resets_turn_state() {
    let mut engine = GameEngine::with_default_config();
    let mut rng = faces(5, 4, &[6, 6, 6]);

    engine.first_roll(&mut rng).unwrap();
    engine.toggle_keep(1).unwrap();
    engine.reroll_player(&mut rng).unwrap();
    engine.reroll_computer(&mut rng).unwrap();
    engine.finalize_round(&mut rng).unwrap();

    assert_eq!(engine.turn().roll_count, 0);
    assert_eq!(engine.turn().computer_roll_count, 0);
    assert!(engine.keep_mask().is_empty());
    assert_eq!(engine.phase(), TurnPhase::Idle);
    assert!(engine.available_actions().throw);
    assert!(!engine.available_actions().rethrow);
    assert!(!engine.available_actions().score);
}

//
// Конец партии
//
#[test]
fn player_reaching_win_point_ends_game() {
    let mut engine = engine_with_win_point(20);
    let mut rng = faces(5, 4, &[]);

    engine.first_roll(&mut rng).unwrap();
    engine.finalize_round(&mut rng).unwrap();

    let result = engine.result().copied().expect("game must be over");
    assert_eq!(result.winner, Side::Player);
    assert_eq!(result.player_score, Points(25));
    assert_eq!(result.computer_score, Points(16));
    assert_eq!(result.rounds_played, 1);

    assert!(engine.is_game_over());
    assert_eq!(engine.phase(), TurnPhase::GameOver);
    assert_eq!(engine.available_actions(), ActionAvailability::default());
    assert_eq!(
        engine.history().last(),
        Some(&GameEventKind::GameOver {
            winner: Side::Player
        })
    );
}

#[test]
fn computer_reaching_win_point_ends_game() {
    let mut engine = engine_with_win_point(10);
    let mut rng = faces(1, 2, &[]);

    engine.first_roll(&mut rng).unwrap();
    engine.finalize_round(&mut rng).unwrap();

    assert_eq!(engine.result().map(|r| r.winner), Some(Side::Computer));
}

/// Обе стороны перешли порог одновременно — побеждает игрок.
#[test]
fn simultaneous_cross_goes_to_player() {
    let mut engine = engine_with_win_point(5);
    let mut rng = faces(1, 2, &[]);

    engine.first_roll(&mut rng).unwrap();
    let outcome = engine.finalize_round(&mut rng).unwrap();

    assert_eq!(outcome.winner, Side::Computer, "computer won the round");
    assert_eq!(engine.result().map(|r| r.winner), Some(Side::Player));
}

/// Порог ещё не достигнут — игра продолжается.
#[test]
fn below_win_point_game_continues() {
    let mut engine = engine_with_win_point(26);
    let mut rng = faces(5, 4, &[]);

    engine.first_roll(&mut rng).unwrap();
    engine.finalize_round(&mut rng).unwrap();

    assert!(engine.result().is_none());
    assert_eq!(engine.phase(), TurnPhase::Idle);
}

/// new_game — выход из GameOver с тем же конфигом.
#[test]
fn new_game_resets_everything_but_config() {
    let mut engine = engine_with_win_point(20);
    let mut rng = faces(5, 4, &[]);
    engine.first_roll(&mut rng).unwrap();
    engine.finalize_round(&mut rng).unwrap();
    assert!(engine.is_game_over());

    engine.new_game();

    assert!(engine.result().is_none());
    assert_eq!(engine.phase(), TurnPhase::Idle);
    assert_eq!(engine.scores().player_score, Points::ZERO);
    assert_eq!(engine.scores().computer_wins, 0);
    assert_eq!(engine.rounds_played(), 0);
    assert!(engine.last_outcome().is_none());
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.config().win_point(), Points(20));

    engine.first_roll(&mut rng).unwrap();
    assert_eq!(engine.phase(), TurnPhase::FirstRolled);
}

//
// Свойства на длинной партии
//
#[test]
fn scores_equal_sum_of_round_sums_and_never_decrease() {
    let mut engine = engine_with_win_point(1_000_000);
    let mut rng = DeterministicRng::from_seed(2024);

    let mut player_total = 0u32;
    let mut computer_total = 0u32;
    let mut prev = *engine.scores();

    for round in 0..200u32 {
        engine.start_turn().unwrap();
        engine.first_roll(&mut rng).unwrap();

        let outcome = if round % 3 == 0 {
            match engine.rethrow(&mut rng).unwrap() {
                TurnStatus::Finished(o) => o,
                TurnStatus::Ongoing => engine.finalize_round(&mut rng).unwrap(),
            }
        } else {
            engine.finalize_round(&mut rng).unwrap()
        };

        assert_ne!(outcome.player_sum, outcome.computer_sum);
        let (hi, lo) = match outcome.winner {
            Side::Player => (outcome.player_sum, outcome.computer_sum),
            Side::Computer => (outcome.computer_sum, outcome.player_sum),
        };
        assert!(hi > lo, "winner must have strictly higher sum");
        assert_eq!(outcome.player_dice.sum(), outcome.player_sum);

        player_total += outcome.player_sum;
        computer_total += outcome.computer_sum;

        let now = *engine.scores();
        assert!(now.player_score >= prev.player_score);
        assert!(now.computer_score >= prev.computer_score);
        assert_eq!(now.player_score, Points(player_total));
        assert_eq!(now.computer_score, Points(computer_total));
        assert_eq!(engine.turn().roll_count, 0);
        assert_eq!(engine.turn().computer_roll_count, 0);
        assert!(engine.keep_mask().is_empty());
        prev = now;
    }

    let scores = engine.scores();
    assert_eq!(scores.player_wins + scores.computer_wins, 200);
    assert_eq!(engine.rounds_played(), 200);
}

/// Полная партия до 101 всегда заканчивается, победитель — тот, кто перешёл порог.
#[test]
fn full_game_reaches_game_over() {
    for seed in 0..20u64 {
        let mut engine = GameEngine::with_default_config();
        let mut rng = DeterministicRng::from_seed(seed);

        let mut guard = 0;
        while !engine.is_game_over() {
            engine.start_turn().unwrap();
            engine.first_roll(&mut rng).unwrap();
            if rng.roll_die() > 3 {
                engine.rethrow(&mut rng).unwrap();
            }
            if !engine.turn().in_progress() {
                continue;
            }
            engine.finalize_round(&mut rng).unwrap();
            guard += 1;
            assert!(guard < 100, "game must end well before 100 rounds");
        }

        let result = *engine.result().unwrap();
        let win_point = Points(101);
        match result.winner {
            Side::Player => assert!(result.player_score >= win_point),
            Side::Computer => {
                assert!(result.computer_score >= win_point);
                assert!(result.player_score < win_point);
            }
        }
        assert_eq!(result.player_score, engine.scores().player_score);
    }
}
