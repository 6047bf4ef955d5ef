use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use phrasebook::catalog::IntentCatalog;
use phrasebook::engine::{EngineConfig, IntentEngine};
use phrasebook::error::{PhrasebookError, Result};

const BOT_CONFIG: &str = r#"{
    "intents": {
        "hello": {
            "examples": ["hi", "hello", "hey there"],
            "responses": ["Hi!", "Hello!"]
        },
        "bye": {
            "examples": ["bye", "goodbye", "see you later"],
            "responses": ["Bye!"]
        },
        "thanks": {
            "examples": ["thanks", "thank you"],
            "responses": ["You're welcome."]
        }
    },
    "failure_phrases": ["Sorry, I did not get that."]
}"#;

#[test]
fn load_catalog_from_file_keeps_file_order() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("bot_config.json");
    fs::write(&path, BOT_CONFIG)?;

    let catalog = IntentCatalog::load(&path)?;
    let ids: Vec<&str> = catalog.intent_ids().collect();
    assert_eq!(ids, vec!["hello", "bye", "thanks"]);
    assert_eq!(catalog.failure_phrases(), ["Sorry, I did not get that."]);

    let stats = catalog.stats();
    assert_eq!(stats.intents, 3);
    assert_eq!(stats.examples, 8);
    assert_eq!(stats.responses, 4);
    assert_eq!(stats.failure_phrases, 1);
    Ok(())
}

#[test]
fn loaded_catalog_drives_an_engine() -> Result<()> {
    let dir = TempDir::new()?;
    let catalog_path = dir.path().join("bot_config.json");
    let config_path = dir.path().join("engine.json");
    fs::write(&catalog_path, BOT_CONFIG)?;
    fs::write(&config_path, r#"{"matcher": {"threshold": 0.3}}"#)?;

    let config = EngineConfig::load(&config_path)?;
    assert_eq!(config.matcher.threshold, 0.3);
    assert!(config.classifier.enabled);

    let engine = IntentEngine::new(IntentCatalog::load(&catalog_path)?, config)?;
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(engine.respond("Thank you!", &mut rng)?, "You're welcome.");
    assert_eq!(engine.respond("see you later", &mut rng)?, "Bye!");
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let result = IntentCatalog::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(PhrasebookError::Io(_))));
}

#[test]
fn malformed_json_is_a_configuration_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"intents": ["not", "a", "map"]}"#)?;

    let result = IntentCatalog::load(&path);
    assert!(matches!(result, Err(PhrasebookError::Json(_))));
    Ok(())
}
