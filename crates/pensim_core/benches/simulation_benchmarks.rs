//! Criterion benchmarks for pensim_core
//!
//! Run with: cargo bench -p pensim_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pensim_core::catalog::StrategyCatalog;
use pensim_core::model::{PayoutType, UserInputs};
use pensim_core::monte_carlo::success_probability;
use pensim_core::scenario::project_scenario;
use pensim_core::simulation::run_simulation_seeded;

fn create_inputs(current_age: u32) -> UserInputs {
    UserInputs {
        current_age,
        retirement_age: 60,
        current_assets: 10_000_000.0,
        monthly_contribution: 1_000_000.0,
        target_retirement_income: 3_000_000.0,
        target_return: 7.0,
        max_drawdown: 25.0,
        payout: PayoutType::Perpetual,
        inflation_adjusted: true,
        post_retirement_strategy_id: None,
        national_pension_amount: 0.0,
    }
}

fn bench_scenario_projection(c: &mut Criterion) {
    let inputs = create_inputs(30);
    c.bench_function("project_scenario_70y", |b| {
        b.iter(|| {
            project_scenario(
                black_box(&inputs),
                5.0,
                5.0,
                inputs.years_to_retirement(),
            )
        })
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let inputs = create_inputs(30);
    let mut group = c.benchmark_group("monte_carlo");
    for runs in [100u32, 500, 2_000] {
        group.bench_with_input(BenchmarkId::from_parameter(runs), &runs, |b, runs| {
            b.iter(|| {
                success_probability(
                    black_box(&inputs),
                    5.0,
                    5.0,
                    12.0,
                    inputs.years_to_retirement(),
                    *runs,
                    42,
                )
            })
        });
    }
    group.finish();
}

fn bench_full_simulation(c: &mut Criterion) {
    let catalog = StrategyCatalog::builtin();
    let strategy = catalog.find("sixty_forty").unwrap().clone();
    let mut group = c.benchmark_group("run_simulation");
    for age in [30u32, 45, 55] {
        let inputs = create_inputs(age);
        group.bench_with_input(BenchmarkId::from_parameter(age), &inputs, |b, inputs| {
            b.iter(|| run_simulation_seeded(black_box(inputs), &strategy, &catalog, 42))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scenario_projection,
    bench_monte_carlo,
    bench_full_simulation
);
criterion_main!(benches);
