use std::env;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use liars_chess::engine::playout::random_move;
use liars_chess::{Color, GameController, RulesError};

const DEFAULT_PLIES: usize = 200;
/// Chance that the side on move challenges an open claim
const CALL_CHANCE: f64 = 0.2;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
    let plies = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PLIES);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut controller = GameController::new();
    println!("seed: {seed}");

    for ply in 0..plies {
        let color = controller.game().current_turn();
        if controller.get_status(color).can_call_liar && rng.gen_bool(CALL_CHANCE) {
            if let Ok(outcome) = controller.submit_liar_call(color) {
                println!("{ply:>3} {color}: {outcome}");
            }
        }

        let Some((from, to, claimed)) = random_move(&mut controller, color, &mut rng) else {
            println!("{ply:>3} {color}: no declarable move");
            break;
        };
        match controller.submit_move(from, to, claimed, color) {
            Ok(report) => {
                let lie = controller.game().last_move().is_some_and(|m| m.is_lie());
                println!(
                    "{ply:>3} {color}: {from}{to} as {claimed}{}{}",
                    if lie { " (lie)" } else { "" },
                    if report.gives_check { " +" } else { "" }
                );
            }
            Err(RulesError::TurnSkippedByPenalty { remaining, .. }) => {
                println!("{ply:>3} {color}: skips a turn ({remaining} left)");
            }
            Err(err) => {
                eprintln!("{ply:>3} {color}: unexpected rejection: {err}");
                break;
            }
        }

        if controller.game().is_game_over() {
            break;
        }
    }

    println!("{}", controller.get_visible_board(Color::White));
    match controller.game().winner() {
        Some(winner) => println!("winner: {winner}"),
        None => println!("no result after {} moves", controller.game().board().move_count()),
    }
}
