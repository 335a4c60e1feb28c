//! Benchmarks for the CFR trainer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kuhn_adaptive_solver::cfr::{CfrTrainer, TrainerConfig};
use kuhn_adaptive_solver::games::kuhn::KuhnPoker;

fn kuhn_iteration_benchmark(c: &mut Criterion) {
    let game = KuhnPoker::new();
    let mut trainer = CfrTrainer::new(game, TrainerConfig::default());

    c.bench_function("kuhn_single_iteration", |b| {
        b.iter(|| {
            trainer.run_iteration();
            black_box(trainer.iteration())
        })
    });
}

fn kuhn_1000_iterations_benchmark(c: &mut Criterion) {
    c.bench_function("kuhn_1000_iterations", |b| {
        b.iter(|| {
            let game = KuhnPoker::new();
            let mut trainer = CfrTrainer::new(game, TrainerConfig::default());
            trainer.train(black_box(1000));
            black_box(trainer.num_info_sets())
        })
    });
}

criterion_group!(benches, kuhn_iteration_benchmark, kuhn_1000_iterations_benchmark);
criterion_main!(benches);
