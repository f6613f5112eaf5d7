/*
 * Driver for the move generator.
 *
 *   chess_tracker perft <depth>
 *   chess_tracker divide <depth>
 *   chess_tracker selfplay [seed] [max plies]
 *
 * Set RUST_LOG=debug to see every applied move.
 */

use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use chess_tracker::game_repr::Position;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("perft");

    let result = match command {
        "perft" => arg(&args, 1, 3).map(perft),
        "divide" => arg(&args, 1, 2).map(divide),
        "selfplay" => arg(&args, 1, 0).and_then(|seed| arg(&args, 2, 200).map(|plies| selfplay(seed, plies))),
        other => Err(format!("unknown command {other:?} (expected perft, divide or selfplay)")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn arg<T: FromStr>(args: &[String], index: usize, default: T) -> Result<T, String> {
    match args.get(index) {
        Some(raw) => raw.parse().map_err(|_| format!("not a valid number: {raw}")),
        None => Ok(default),
    }
}

fn perft(depth: u32) {
    let mut pos = Position::default();

    println!("Running perft depth {} on starting position...", depth);
    let start = Instant::now();
    let result = pos.perft(depth);
    let duration = start.elapsed();

    println!("Result: {} nodes", result);
    println!("Time: {:.2}s", duration.as_secs_f64());
    println!("Nodes/sec: {:.0}", result as f64 / duration.as_secs_f64());
}

fn divide(depth: u32) {
    let mut pos = Position::default();
    let mut total = 0;
    for (mv, count) in pos.divide(depth) {
        println!("{}: {}", mv, count);
        total += count;
    }
    println!("\nTotal: {}", total);
}

fn selfplay(seed: u64, max_plies: u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::default();
    let mut line = Vec::new();

    for _ in 0..max_plies {
        let moves = pos.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        line.push(mv.to_notation());
        if let Err(err) = pos.apply(mv) {
            eprintln!("{err}");
            return;
        }
    }
    // refresh the terminal flags for the final position
    pos.legal_moves();

    println!("{}", line.join(" "));
    println!("{pos}");
    let status = pos.status();
    if status.is_over() {
        println!("{status}");
    } else {
        println!("stopped after {} plies", pos.ply());
    }
}
