//! Command implementations for the Phrasebook CLI.

use std::fs;
use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::IntentCatalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::IntentEngine;
use crate::error::{PhrasebookError, Result};

/// Execute a CLI command.
pub fn execute_command(args: PhrasebookArgs) -> Result<()> {
    match &args.command {
        Command::Chat(chat_args) => chat(chat_args, &args),
        Command::Resolve(resolve_args) => resolve(resolve_args, &args),
        Command::Batch(batch_args) => batch(batch_args, &args),
        Command::Validate(validate_args) => validate(validate_args, &args),
    }
}

/// Load the catalog and build (and train) the engine.
pub fn build_engine(engine_args: &EngineArgs) -> Result<IntentEngine> {
    let config = engine_args.engine_config()?;
    let catalog = IntentCatalog::load(&engine_args.config)?;
    IntentEngine::new(catalog, config)
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Interactive loop over stdin.
fn chat(args: &ChatArgs, cli_args: &PhrasebookArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;
    let mut rng = rng_from_seed(args.seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_chat(&engine, stdin.lock(), stdout.lock(), &mut rng, cli_args)
}

/// Answer every line of `input` on `output` until EOF.
///
/// Lines that are not UTF-8 are reported on stderr and skipped; any other
/// failure ends the loop.
pub fn run_chat<B, W, R>(
    engine: &IntentEngine,
    mut input: B,
    mut output: W,
    rng: &mut R,
    cli_args: &PhrasebookArgs,
) -> Result<()>
where
    B: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }

        let line = trim_line_ending(&buffer);
        let text = match std::str::from_utf8(line) {
            Ok(text) => text,
            Err(e) => {
                let error = PhrasebookError::invalid_input(format!("input must be UTF-8 text: {e}"));
                log::warn!("skipping line: {error}");
                eprintln!("Error: {error}");
                continue;
            }
        };

        let reply = engine.reply(text, rng)?;
        write_reply(&mut output, &reply, cli_args)?;
    }

    Ok(())
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Answer a single utterance.
fn resolve(args: &ResolveArgs, cli_args: &PhrasebookArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;
    let mut rng = rng_from_seed(args.seed);

    let reply = engine.reply(&args.text, &mut rng)?;
    write_reply(&mut io::stdout().lock(), &reply, cli_args)
}

/// Answer every line of a file.
fn batch(args: &BatchArgs, cli_args: &PhrasebookArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;

    let content = fs::read_to_string(&args.input)?;
    let inputs: Vec<&str> = content.lines().collect();
    if cli_args.verbosity() > 1 {
        eprintln!("Resolving {} utterances from {}", inputs.len(), args.input.display());
    }

    let lines: Vec<BatchLine> = engine
        .respond_batch(&inputs, args.seed)
        .into_iter()
        .zip(&inputs)
        .enumerate()
        .map(|(i, (result, input))| {
            let (reply, error) = match result {
                Ok(reply) => (Some(reply), None),
                Err(e) => (None, Some(e.to_string())),
            };
            BatchLine {
                line: i + 1,
                input: input.to_string(),
                reply,
                error,
            }
        })
        .collect();

    write_batch(&mut io::stdout().lock(), &lines, cli_args)
}

/// Load, validate and train, then report.
fn validate(args: &ValidateArgs, cli_args: &PhrasebookArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;

    let report = ValidationReport {
        catalog: engine.catalog().stats(),
        threshold: engine.config().matcher.threshold,
        classifier: engine.training_stats().cloned(),
    };
    write_validation(&mut io::stdout().lock(), &report, cli_args)
}
