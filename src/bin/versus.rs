//! Adaptive play evaluation binary.
//!
//! Trains an equilibrium, then plays it adaptively against each scripted
//! opponent and reports how much the profiler-driven biasing earns over
//! the match.
//!
//! Usage:
//!   cargo run --release --bin versus -- [OPTIONS]
//!
//! Options:
//!   --iterations <N>     Training iterations (default: 100000)
//!   --hands <N>          Hands per opponent matchup (default: 10000)
//!   --seed <N>           Base RNG seed for the matches (default: 42)
//!   --blend <F>          Exploit blend factor in [0, 1] (default: 0.3)
//!   --output <FILE>      Write match reports as JSON (optional)

use std::env;
use std::fs;
use std::time::Instant;

use rayon::prelude::*;

use kuhn_adaptive_solver::adapt::AdaptConfig;
use kuhn_adaptive_solver::cfr::{CfrTrainer, Equilibrium, TrainerConfig};
use kuhn_adaptive_solver::games::kuhn::KuhnPoker;
use kuhn_adaptive_solver::play::{
    AggressiveBot, BalancedBot, MatchReport, MatchRunner, PassiveBot, ScriptedOpponent,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut iterations: u64 = 100_000;
    let mut hands: u64 = 10_000;
    let mut seed: u64 = 42;
    let mut blend: f64 = 0.3;
    let mut output_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-i" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().unwrap_or(100_000);
                }
            }
            "--hands" | "-n" => {
                i += 1;
                if i < args.len() {
                    hands = args[i].parse().unwrap_or(10_000);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(42);
                }
            }
            "--blend" | "-b" => {
                i += 1;
                if i < args.len() {
                    blend = args[i].parse().unwrap_or(0.3);
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Kuhn Poker Adaptive Matches");
    println!("=================================================");
    println!();
    println!("Training iterations: {}", iterations);
    println!("Hands per matchup: {}", hands);
    println!("Seed: {}", seed);
    println!("Exploit blend: {}", blend);
    println!();

    let adapt_config = AdaptConfig::default().with_blend(blend);
    if let Err(e) = adapt_config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return;
    }

    println!("Training equilibrium...");
    let start_time = Instant::now();
    let mut trainer = CfrTrainer::new(KuhnPoker::new(), TrainerConfig::default());
    trainer.train(iterations);
    let equilibrium = Equilibrium::from_store(trainer.store());
    println!(
        "Trained {} iterations in {:.2}s (first-mover EV {:+.6})",
        iterations,
        start_time.elapsed().as_secs_f64(),
        equilibrium.expected_value(trainer.game(), 0)
    );
    println!();

    let runner = MatchRunner::new(KuhnPoker::new(), equilibrium, adapt_config);

    let opponents: Vec<Box<dyn ScriptedOpponent>> =
        vec![Box::new(PassiveBot), Box::new(AggressiveBot), Box::new(BalancedBot)];

    // The matchups are independent; run them in parallel.
    let results: Result<Vec<MatchReport>, _> = opponents
        .par_iter()
        .enumerate()
        .map(|(idx, opponent)| runner.run_match(opponent.as_ref(), hands, seed + idx as u64))
        .collect();

    let reports = match results {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("Match failed: {}", e);
            return;
        }
    };

    println!("=== Match Results ===");
    println!();
    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>10} {:>10}  {:<12} {:>6}",
        "Opponent", "Hands", "Wins", "Losses", "Net", "Avg/hand", "Read", "Conf"
    );
    for report in &reports {
        println!(
            "{:<12} {:>8} {:>8} {:>8} {:>+10.1} {:>+10.4}  {:<12} {:>5.0}%",
            report.opponent,
            report.hands,
            report.wins,
            report.losses,
            report.net_chips,
            report.avg_gain,
            report.classification.to_string(),
            report.confidence * 100.0
        );
    }
    println!();

    if let Some(path) = output_file {
        println!("Exporting reports to {}...", path);
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => match fs::write(&path, json) {
                Ok(_) => println!("Reports saved successfully!"),
                Err(e) => eprintln!("Error writing {}: {}", path, e),
            },
            Err(e) => eprintln!("Error serializing reports: {}", e),
        }
        println!();
    }

    println!("Done!");
}

fn print_help() {
    println!("Kuhn Poker Adaptive Matches");
    println!();
    println!("Usage: versus [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -i, --iterations <N>     Training iterations (default: 100000)");
    println!("  -n, --hands <N>          Hands per opponent matchup (default: 10000)");
    println!("  -s, --seed <N>           Base RNG seed for the matches (default: 42)");
    println!("  -b, --blend <F>          Exploit blend factor in [0, 1] (default: 0.3)");
    println!("  -o, --output <FILE>      Write match reports as JSON");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  # Quick look at adaptation with a lightly trained strategy");
    println!("  versus --iterations 10000 --hands 2000");
    println!();
    println!("  # Pure equilibrium play for comparison");
    println!("  versus --blend 0.0");
}
