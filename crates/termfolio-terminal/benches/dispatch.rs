//! Benchmarks for interpreter dispatch and completion.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use termfolio_terminal::Interpreter;
use termfolio_types::config::TermfolioConfig;

fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");
    let config = TermfolioConfig::default();

    for line in ["help", "cat about.txt", "sudo rm -rf /", "git status", "nope"] {
        group.bench_function(BenchmarkId::new("line", line), |b| {
            let mut interp = Interpreter::from_config(&config);
            b.iter(|| interp.execute(line));
        });
    }

    group.finish();
}

fn bench_complete(c: &mut Criterion) {
    let interp = Interpreter::from_config(&TermfolioConfig::default());
    c.bench_function("complete_command", |b| b.iter(|| interp.complete("neo")));
    c.bench_function("complete_file", |b| b.iter(|| interp.complete("cat ed")));
}

criterion_group!(benches, bench_execute, bench_complete);
criterion_main!(benches);
