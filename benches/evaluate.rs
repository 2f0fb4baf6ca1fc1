use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lab_rules::games::{self, battery, chef, scent};
use lab_rules::{Build, RoundController, RuleEvaluator};
use std::hint::black_box;

// ============================================================================
// Benchmark: Single Evaluations
// ============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let battery_game = battery::definition().unwrap();
    let cell = Build::new()
        .with_pick(battery::CATHODE, "nmc")
        .with_pick(battery::ELECTROLYTE, "liquid")
        .with_pick(battery::ANODE, "silicon");
    for target in battery_game.targets.iter() {
        let eval = RuleEvaluator::new(&battery_game);
        group.bench_with_input(BenchmarkId::new("battery", &target.key), target, |b, target| {
            b.iter(|| black_box(eval.evaluate(black_box(&cell), target)));
        });
    }

    let chef_game = chef::definition().unwrap();
    let (_, yogurt) = chef_game.targets.find("yogurt").unwrap();
    let jar = Build::new()
        .with_pick(chef::SUBSTRATE, "milk")
        .with_pick(chef::MICROBE, "lacto")
        .with_pick(chef::ADDITIVE, "sugar")
        .with_dial(chef::TEMP, 41);
    group.bench_function("chef/yogurt", |b| {
        let eval = RuleEvaluator::new(&chef_game);
        b.iter(|| black_box(eval.evaluate(black_box(&jar), yogurt)));
    });

    let scent_game = scent::definition().unwrap();
    let (_, review) = scent_game.targets.find("review").unwrap();
    let blend = Build::new()
        .with_pick(scent::ESTERS, "isoamyl_acetate")
        .with_pick(scent::ESTERS, "benzyl_acetate")
        .with_pick(scent::ALDEHYDES, "c8_aldehyde")
        .with_pick(scent::TERPENES, "limonene")
        .with_pick(scent::TERPENES, "santalol")
        .with_dial(scent::MARKET, 12);
    group.bench_function("scent/review", |b| {
        let eval = RuleEvaluator::new(&scent_game);
        b.iter(|| black_box(eval.evaluate(black_box(&blend), review)));
    });

    group.finish();
}

// ============================================================================
// Benchmark: Full Sessions
// ============================================================================

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("scent_100_reviews", |b| {
        b.iter(|| {
            let game = games::by_name(scent::NAME).unwrap();
            let mut session = RoundController::new(game, 42).unwrap();
            for _ in 0..100 {
                for id in ["isoamyl_acetate", "benzyl_acetate", "santalol"] {
                    session.select(&id.into()).unwrap();
                }
                black_box(session.submit().unwrap());
            }
            session
        });
    });

    let game = games::by_name(scent::NAME).unwrap();
    let mut session = RoundController::new(game, 42).unwrap();
    for _ in 0..50 {
        for id in ["limonene", "linalool", "vanillin"] {
            session.select(&id.into()).unwrap();
        }
        session.submit().unwrap();
    }
    group.bench_function("snapshot_50_rounds", |b| {
        b.iter(|| black_box(session.snapshot().unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_session);
criterion_main!(benches);
