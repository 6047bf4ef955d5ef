use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use phrasebook::catalog::IntentCatalog;
use phrasebook::engine::{EngineConfig, IntentEngine};
use phrasebook::matching::FuzzyMatcher;
use phrasebook::util::levenshtein::levenshtein_distance;

fn generate_catalog(intents: usize, examples_per_intent: usize) -> IntentCatalog {
    let mut builder = IntentCatalog::builder();
    for i in 0..intents {
        let examples: Vec<String> = (0..examples_per_intent)
            .map(|j| format!("example phrase number {j} for topic {i}"))
            .collect();
        builder = builder.intent(format!("intent_{i}"), examples, [format!("reply {i}")]);
    }
    builder
        .failure_phrases(["I don't understand"])
        .build()
        .unwrap()
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");
    let matcher = FuzzyMatcher::default();

    group.bench_function("levenshtein", |b| {
        b.iter(|| levenshtein_distance(black_box("what is the weather like"), black_box("whats the weather")))
    });
    group.bench_function("is_matching", |b| {
        b.iter(|| matcher.is_matching(black_box("What's the weather like?"), black_box("whats the weather")))
    });

    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let engine = IntentEngine::new(generate_catalog(20, 10), EngineConfig::default()).unwrap();
    let mut group = c.benchmark_group("resolution");

    group.bench_function("rule_hit", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| engine.respond(black_box("example phrase number 3 for topic 7"), &mut rng).unwrap())
    });
    group.bench_function("classifier_fallback", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| engine.respond(black_box("tell me about topic 12"), &mut rng).unwrap())
    });

    let texts: Vec<String> = (0..256).map(|i| format!("topic {} please", i % 20)).collect();
    group.bench_function("batch_256", |b| b.iter(|| engine.respond_batch(black_box(&texts), 0)));

    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let catalog = generate_catalog(20, 10);
    c.bench_function("train_engine", |b| {
        b.iter(|| IntentEngine::new(black_box(catalog.clone()), EngineConfig::default()).unwrap())
    });
}

criterion_group!(benches, bench_matching, bench_resolution, bench_training);
criterion_main!(benches);
