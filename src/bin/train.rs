//! Kuhn Poker equilibrium trainer binary.
//!
//! Usage:
//!   cargo run --release --bin train -- [OPTIONS]
//!
//! Options:
//!   --iterations <N>     Training iterations (default: 100000)
//!   --output <FILE>      Equilibrium output file (default: equilibrium.json)
//!   --store <FILE>       Also export the raw regret store (optional)
//!   --trace              Print the average-gain trace after training

use std::env;
use std::fs;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use kuhn_adaptive_solver::cfr::{CfrTrainer, Equilibrium, TrainerConfig};
use kuhn_adaptive_solver::games::kuhn::KuhnPoker;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut iterations: u64 = 100_000;
    let mut output_file = "equilibrium.json".to_string();
    let mut store_file: Option<String> = None;
    let mut show_trace = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-i" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().unwrap_or(100_000);
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = args[i].clone();
                }
            }
            "--store" => {
                i += 1;
                if i < args.len() {
                    store_file = Some(args[i].clone());
                }
            }
            "--trace" => {
                show_trace = true;
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
    println!("  Kuhn Poker CFR Trainer");
    println!("=================================================");
    println!();
    println!("Iterations: {}", iterations);
    println!("Output: {}", output_file);
    println!();

    let game = KuhnPoker::new();
    let mut trainer = CfrTrainer::new(game, TrainerConfig::default());

    println!("Starting training...");
    println!();

    let start_time = Instant::now();

    let bar = ProgressBar::new(iterations);
    bar.set_style(
        ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos:>8}/{len:8} iterations ({per_sec}, eta {eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let report_interval = (iterations / 100).max(1);
    trainer.train_with_callback(iterations, report_interval, |done| {
        bar.set_position(done);
    });
    bar.finish();

    let stats = trainer.stats();
    println!();
    println!("Training complete!");
    println!("Total time: {:.2}s", start_time.elapsed().as_secs_f64());
    println!("Speed: {:.0} iterations/second", stats.iterations_per_second);
    println!("Info sets: {}", trainer.num_info_sets());
    println!();

    if show_trace {
        println!("=== Average Gain Trace ===");
        for point in &stats.gain_trace {
            println!("  iter {:>8} | avg gain {:>9.6}", point.iteration, point.avg_gain);
        }
        println!();
    }

    let equilibrium = Equilibrium::from_store(trainer.store());

    // Kuhn's first mover loses 1/18 of a chip per hand at equilibrium.
    let ev = equilibrium.expected_value(trainer.game(), 0);
    println!("First-mover EV: {:+.6} (equilibrium: {:+.6})", ev, -1.0 / 18.0);
    println!();

    print_strategy_table(&equilibrium, "Player 0 (first to act)", &["", "pb"]);
    print_strategy_table(&equilibrium, "Player 1 (second to act)", &["p", "b"]);

    println!("Exporting equilibrium to {}...", output_file);
    match serde_json::to_string_pretty(&equilibrium) {
        Ok(json) => match fs::write(&output_file, json) {
            Ok(_) => println!("Equilibrium saved successfully!"),
            Err(e) => eprintln!("Error writing {}: {}", output_file, e),
        },
        Err(e) => eprintln!("Error serializing equilibrium: {}", e),
    }

    if let Some(path) = store_file {
        println!("Exporting regret store to {}...", path);
        match serde_json::to_string_pretty(&trainer.export_store()) {
            Ok(json) => match fs::write(&path, json) {
                Ok(_) => println!("Store saved successfully!"),
                Err(e) => eprintln!("Error writing {}: {}", path, e),
            },
            Err(e) => eprintln!("Error serializing store: {}", e),
        }
    }

    println!();
    println!("Done!");
}

/// Print the average strategy at every info set belonging to `histories`.
fn print_strategy_table(equilibrium: &Equilibrium, title: &str, histories: &[&str]) {
    println!("=== {} ===", title);
    println!();

    let mut keys: Vec<&String> = equilibrium
        .iter()
        .map(|(key, _)| key)
        .filter(|key| {
            key.split_once(':')
                .map(|(_, history)| histories.contains(&history))
                .unwrap_or(false)
        })
        .collect();
    keys.sort();

    for key in keys {
        let strategy = equilibrium.action_distribution(key, 2);
        println!(
            "  {:<6} pass: {:>5.1}%  bet: {:>5.1}%",
            key,
            strategy[0] * 100.0,
            strategy[1] * 100.0
        );
    }
    println!();
}

fn print_help() {
    println!("Kuhn Poker CFR Trainer");
    println!();
    println!("Usage: train [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -i, --iterations <N>     Training iterations (default: 100000)");
    println!("  -o, --output <FILE>      Equilibrium output file (default: equilibrium.json)");
    println!("  --store <FILE>           Also export the raw regret store");
    println!("  --trace                  Print the average-gain trace after training");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  # Train 1M iterations and inspect convergence");
    println!("  train --iterations 1000000 --trace");
    println!();
    println!("  # Export both the equilibrium and the resumable store");
    println!("  train -o equilibrium.json --store store.json");
}
