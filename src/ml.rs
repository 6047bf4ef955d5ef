//! Statistical models used when rule matching finds nothing.

pub mod intent_classifier;
