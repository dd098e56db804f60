// src/bin/dice_duel_dev_cli.rs
//
// Использование: dice_duel_dev_cli [seed] [win_point]

use dice_duel_engine::domain::{GameConfig, Side};
use dice_duel_engine::engine::{GameEngine, GameEventKind, RandomSource, TurnStatus};
use dice_duel_engine::infra::RngSeed;

/// Автоигрок за человека: держит кости от 4, засчитывает при сумме от 20.
const AUTO_KEEP_FROM: u8 = 4;
const AUTO_SCORE_AT: u32 = 20;

/// Защита от вечной партии в dev-режиме.
const MAX_ROUNDS: u32 = 1_000;

fn main() {
    println!("dice_duel_dev_cli: стартуем dev-CLI…");

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let win_point: i64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(i64::from(dice_duel_engine::domain::DEFAULT_WIN_POINT));

    let config = match GameConfig::new(win_point) {
        Ok(c) => c,
        Err(e) => {
            println!("[CLI] ОШИБКА конфига: {e}");
            return;
        }
    };

    let mut rng = RngSeed::from_u64(seed).derive(1, 0).to_rng();
    let mut engine = GameEngine::new(config);

    println!(
        "[CLI] seed={}, win_point={}",
        seed,
        engine.config().win_point().0
    );

    while !engine.is_game_over() && engine.rounds_played() < MAX_ROUNDS {
        if let Err(e) = play_round(&mut engine, &mut rng) {
            println!("[CLI] ОШИБКА в раунде {}: {e}", engine.current_round());
            return;
        }
    }

    match engine.result() {
        Some(result) => {
            let who = match result.winner {
                Side::Player => "ИГРОК",
                Side::Computer => "КОМПЬЮТЕР",
            };
            println!();
            println!("================ GAME OVER =================");
            println!(
                "[CLI] Победитель: {who}. Счёт {}:{} за {} раундов.",
                result.player_score.0, result.computer_score.0, result.rounds_played
            );
        }
        None => println!("[CLI] Партия не закончилась за {MAX_ROUNDS} раундов."),
    }

    println!(
        "[CLI] Событий в истории: {}, перебросов ничьих: {}",
        engine.history().len(),
        engine.history().tie_break_count()
    );
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Один раунд автоигрока против эвристики компьютера.
fn play_round<R: RandomSource>(
    engine: &mut GameEngine,
    rng: &mut R,
) -> Result<(), dice_duel_engine::EngineError> {
    println!();
    println!("================ ROUND {} =================", engine.current_round());

    engine.start_turn()?;
    engine.first_roll(rng)?;
    debug_print_dice(engine);

    loop {
        if engine.player_dice().sum() >= AUTO_SCORE_AT {
            engine.finalize_round(rng)?;
            break;
        }

        let player = *engine.player_dice();
        for (i, value) in player.iter().enumerate() {
            let want = value >= AUTO_KEEP_FROM;
            if engine.keep_mask().is_kept(i) != want {
                engine.toggle_keep(i)?;
            }
        }

        match engine.rethrow(rng)? {
            TurnStatus::Ongoing => debug_print_dice(engine),
            TurnStatus::Finished(_) => break,
        }
    }

    debug_print_last_events(engine);
    Ok(())
}

fn debug_print_dice(engine: &GameEngine) {
    let turn = engine.turn();
    println!(
        "[CLI] Игрок {:?} (сумма {}, бросок {}) | Компьютер {:?} (сумма {}, бросок {})",
        engine.player_dice().values(),
        engine.player_dice().sum(),
        turn.roll_count,
        engine.computer_dice().values(),
        engine.computer_dice().sum(),
        turn.computer_roll_count,
    );
}

/// Печатаем хвост истории начиная с последнего TurnStarted.
fn debug_print_last_events(engine: &GameEngine) {
    let events = &engine.history().events;
    let start = events
        .iter()
        .rposition(|e| matches!(e.kind, GameEventKind::TurnStarted { .. }))
        .unwrap_or(0);

    for event in &events[start..] {
        match &event.kind {
            GameEventKind::TieBreakRolled {
                attempt,
                player,
                computer,
            } => println!(
                "[CLI]   ничья, переброс #{attempt}: {} vs {}",
                player.sum(),
                computer.sum()
            ),
            GameEventKind::RoundScored {
                winner,
                player_sum,
                computer_sum,
                player_score,
                computer_score,
                ..
            } => println!(
                "[CLI]   раунд: {player_sum} vs {computer_sum}, выиграл {winner:?}. Счёт {}:{}",
                player_score.0, computer_score.0
            ),
            GameEventKind::GameOver { winner } => {
                println!("[CLI]   партия окончена, победитель {winner:?}")
            }
            _ => {}
        }
    }
}
