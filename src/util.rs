//! Shared utility modules used across Phrasebook components.

pub mod levenshtein;
