use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use phrasebook::catalog::IntentCatalog;
use phrasebook::engine::{EngineConfig, IntentEngine, ResolutionSource};
use phrasebook::error::{PhrasebookError, Result};
use phrasebook::matching::{DEFAULT_THRESHOLD, FuzzyMatcher, RuleBasedResolver};
use phrasebook::ml::intent_classifier::{ClassifierConfig, IntentClassifier, train};

fn greeting_farewell() -> Result<IntentCatalog> {
    IntentCatalog::builder()
        .intent("greeting", ["hi", "hello"], ["Hi!"])
        .intent("farewell", ["bye", "goodbye"], ["Bye!"])
        .failure_phrases(["I don't understand"])
        .build()
}

#[test]
fn punctuation_does_not_block_a_rule_match() -> Result<()> {
    let catalog = IntentCatalog::builder()
        .intent("greeting", ["hello", "hi there"], ["Hi!"])
        .build()?;
    let resolver = RuleBasedResolver::new(FuzzyMatcher::default());

    assert_eq!(resolver.resolve_intent("Hello!!!", &catalog), Some("greeting"));
    Ok(())
}

#[test]
fn distant_text_has_no_rule_match() -> Result<()> {
    let catalog = IntentCatalog::builder()
        .intent("greeting", ["hello"], ["Hi!"])
        .build()?;
    let resolver = RuleBasedResolver::new(FuzzyMatcher::default());

    assert_eq!(resolver.resolve_intent("goodbye forever", &catalog), None);
    Ok(())
}

#[test]
fn unmatched_text_falls_back_to_the_classifier() -> Result<()> {
    let engine = IntentEngine::new(greeting_farewell()?, EngineConfig::default())?;
    assert_eq!(engine.config().matcher.threshold, DEFAULT_THRESHOLD);

    let reply = engine.reply("hiya", &mut StdRng::seed_from_u64(42))?;
    assert_eq!(reply.source, ResolutionSource::Classifier);
    match reply.intent.as_deref() {
        Some("greeting") => assert_eq!(reply.text, "Hi!"),
        Some("farewell") => assert_eq!(reply.text, "Bye!"),
        other => panic!("unexpected intent {other:?}"),
    }

    let stats = engine.training_stats().expect("classifier was trained");
    assert_eq!(stats.samples, 4);
    assert_eq!(stats.classes, 2);
    Ok(())
}

#[test]
fn classifier_predicts_training_examples() -> Result<()> {
    let catalog = IntentCatalog::builder()
        .intent(
            "weather",
            ["what is the weather like", "will it rain today", "is it sunny outside"],
            ["Looks fine to me."],
        )
        .intent(
            "music",
            ["play some music", "put on a song", "play my playlist"],
            ["Playing."],
        )
        .build()?;
    let classifier = train(&catalog, &ClassifierConfig::default())?;

    assert_eq!(classifier.predict("will it rain tomorrow")?, "weather");
    assert_eq!(classifier.predict("play a song")?, "music");
    Ok(())
}

#[test]
fn training_fails_fast_on_an_intent_without_examples() -> Result<()> {
    let catalog = IntentCatalog::builder()
        .intent("greeting", ["hi"], ["Hi!"])
        .intent("silent", Vec::<String>::new(), ["..."])
        .build()?;

    let result = train(&catalog, &ClassifierConfig::default());
    match result {
        Err(PhrasebookError::IntentWithoutExamples { intent }) => assert_eq!(intent, "silent"),
        other => panic!("expected IntentWithoutExamples, got {other:?}"),
    }

    let result = IntentEngine::new(catalog, EngineConfig::default());
    assert!(matches!(result, Err(e) if e.is_configuration_error()));
    Ok(())
}

#[test]
fn replies_are_reproducible_under_a_fixed_seed() -> Result<()> {
    let catalog = IntentCatalog::builder()
        .intent(
            "greeting",
            ["hi", "hello"],
            ["Hi!", "Hello there!", "Hey!", "Greetings!"],
        )
        .failure_phrases(["Sorry?", "Come again?", "I don't follow"])
        .build()?;
    let engine = IntentEngine::new(catalog, EngineConfig::default().without_classifier())?;

    let run = |seed: u64| -> Result<Vec<String>> {
        let mut rng = StdRng::seed_from_u64(seed);
        ["hello", "quantum chromodynamics", "hi", "zzz"]
            .iter()
            .map(|text| engine.respond(text, &mut rng))
            .collect()
    };

    let first = run(7)?;
    assert_eq!(first, run(7)?);
    assert!(["Sorry?", "Come again?", "I don't follow"].contains(&first[1].as_str()));
    Ok(())
}

#[test]
fn empty_catalog_is_a_startup_error() {
    let result = IntentEngine::new(IntentCatalog::default(), EngineConfig::default());
    assert!(matches!(result, Err(PhrasebookError::EmptyCatalog)));
}

#[test]
fn engine_is_shared_across_threads() -> Result<()> {
    let engine = Arc::new(IntentEngine::new(greeting_farewell()?, EngineConfig::default())?);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = Arc::clone(&engine);
                scope.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(i);
                    let text = if i % 2 == 0 { "hello" } else { "goodbye" };
                    engine.respond(text, &mut rng)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let reply = handle.join().expect("worker panicked").unwrap();
            let expected = if i % 2 == 0 { "Hi!" } else { "Bye!" };
            assert_eq!(reply, expected);
        }
    });
    Ok(())
}
