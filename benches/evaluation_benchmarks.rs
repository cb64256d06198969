//! Performance benchmarks for the Redemption Points Engine.
//!
//! Measures:
//! - Pure evaluation against the storefront tier table
//! - Evaluation scaling with rule count
//! - Rule-set validation
//! - A full `/evaluate` round trip through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use redeem_engine::api::{AppState, create_router};
use redeem_engine::config::{ConfigLoader, default_rules};
use redeem_engine::engine::{RuleSet, evaluate, validate_rule_set};
use redeem_engine::models::RedemptionRule;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a well-formed table of `count` tiers, $10 apart.
fn create_rule_table(count: i64) -> RuleSet {
    RuleSet::new((1..=count).map(|i| {
        RedemptionRule::new(format!("Tier {}", i), Decimal::from(i * 10), i * 5)
    }))
}

/// Benchmark: single evaluation against the five storefront tiers.
fn bench_single_evaluation(c: &mut Criterion) {
    let rules = RuleSet::new(default_rules());
    let total = Decimal::new(25_000, 2);

    c.bench_function("evaluate_storefront", |b| {
        b.iter(|| black_box(evaluate(black_box(total), &rules)))
    });
}

/// Benchmark: 1000 orders spread across every tier.
fn bench_order_batch(c: &mut Criterion) {
    let rules = RuleSet::new(default_rules());
    let totals: Vec<Decimal> = (0..1000).map(|i| Decimal::new(i * 150, 2)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(totals.len() as u64));

    group.bench_function("orders_1000", |b| {
        b.iter(|| {
            let points: u64 = totals
                .iter()
                .map(|t| evaluate(*t, &rules).map(|r| r.points_awarded).unwrap_or(0))
                .sum();
            black_box(points)
        })
    });

    group.finish();
}

/// Benchmark: evaluation cost as the tier table grows.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for count in [5i64, 50, 500, 5000].iter() {
        let rules = create_rule_table(*count);
        let total = Decimal::from(*count * 5);

        group.bench_with_input(BenchmarkId::new("tiers", count), count, |b, _| {
            b.iter(|| black_box(evaluate(black_box(total), &rules)))
        });
    }

    group.finish();
}

/// Benchmark: validating a large tier table.
fn bench_validation(c: &mut Criterion) {
    let rules = create_rule_table(500);

    c.bench_function("validate_500_tiers", |b| {
        b.iter(|| black_box(validate_rule_set(&rules)))
    });
}

/// Benchmark: a full `/evaluate` request through the router.
fn bench_http_evaluate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/grocery").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({ "order_total": "250.00" }).to_string();

    c.bench_function("http_evaluate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/evaluate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_evaluation,
    bench_order_batch,
    bench_scaling,
    bench_validation,
    bench_http_evaluate,
);
criterion_main!(benches);
