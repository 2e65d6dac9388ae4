//! Criterion benchmarks for carbon_simulation.
//!
//! Benchmarks cover:
//! - Raw LCG and shock pair throughput
//! - Monte Carlo runs with varying path counts and cohort sizes
//! - Deterministic portfolio trajectories

use carbon_core::{generate_scenario, CompanyExposure, ScenarioKind};
use carbon_simulation::mc::{MonteCarloConfig, MonteCarloSimulator};
use carbon_simulation::{portfolio_trajectory, CorrelatedShockGenerator, ScenarioRng, ShockPair};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate a synthetic cohort with spread-out intensities.
fn generate_cohort(n_companies: usize) -> Vec<CompanyExposure> {
    (0..n_companies)
        .map(|i| {
            let emissions = 500.0 + ((i * 37) % 100) as f64 * 25.0;
            let intensity = 0.005 + ((i * 13) % 50) as f64 * 0.001;
            CompanyExposure::new(format!("Company {}", i), emissions, intensity)
        })
        .collect()
}

/// Benchmark raw uniform generation.
fn bench_uniform_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_stream");

    for size in [1_000, 16_000] {
        group.bench_with_input(BenchmarkId::new("fill", size), &size, |b, &size| {
            let mut buffer = vec![0.0; size];
            b.iter(|| {
                let mut rng = ScenarioRng::new(42);
                rng.fill_uniform(black_box(&mut buffer));
            });
        });
    }

    group.finish();
}

/// Benchmark correlated shock generation.
fn bench_shock_pairs(c: &mut Criterion) {
    let generator = CorrelatedShockGenerator::default();
    let mut buffer = vec![ShockPair::default(); 8_000];

    c.bench_function("shock_pairs_8000", |b| {
        b.iter(|| {
            let mut rng = ScenarioRng::new(42);
            generator.fill(&mut rng, black_box(&mut buffer));
        });
    });
}

/// Benchmark full Monte Carlo runs.
fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    let scenario = generate_scenario(ScenarioKind::Disorderly);

    for (n_paths, n_companies) in [(500, 10), (500, 100), (5_000, 10)] {
        let label = format!("{}paths_{}companies", n_paths, n_companies);
        let companies = generate_cohort(n_companies);
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .build()
            .expect("valid benchmark configuration");
        let simulator = MonteCarloSimulator::new(config);

        group.bench_with_input(BenchmarkId::new("run", &label), &companies, |b, companies| {
            b.iter(|| simulator.run(black_box(companies), black_box(&scenario)));
        });
    }

    group.finish();
}

/// Benchmark deterministic portfolio trajectories.
fn bench_portfolio_trajectory(c: &mut Criterion) {
    let scenario = generate_scenario(ScenarioKind::Orderly);
    let companies = generate_cohort(1_000);

    c.bench_function("portfolio_trajectory_1000", |b| {
        b.iter(|| portfolio_trajectory(black_box(&companies), black_box(&scenario)));
    });
}

criterion_group!(
    benches,
    bench_uniform_stream,
    bench_shock_pairs,
    bench_monte_carlo,
    bench_portfolio_trajectory,
);
criterion_main!(benches);
