//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStats;
use crate::cli::args::{OutputFormat, PhrasebookArgs};
use crate::engine::Reply;
use crate::error::Result;
use crate::ml::intent_classifier::TrainingStats;

/// Result structure for the validate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub catalog: CatalogStats,
    pub threshold: f64,
    pub classifier: Option<TrainingStats>,
}

/// One line of batch output.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchLine {
    pub line: usize,
    pub input: String,
    pub reply: Option<Reply>,
    pub error: Option<String>,
}

/// Write a reply in the selected format.
pub fn write_reply<W: Write>(out: &mut W, reply: &Reply, args: &PhrasebookArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                match &reply.intent {
                    Some(intent) => writeln!(out, "(Intent is {intent}, via {})", reply.source)?,
                    None => writeln!(out, "(No intent)")?,
                }
            }
            writeln!(out, "{}", reply.text)?;
        }
        OutputFormat::Json => write_json(out, reply, args)?,
    }
    out.flush()?;
    Ok(())
}

/// Write batch results in the selected format.
pub fn write_batch<W: Write>(out: &mut W, lines: &[BatchLine], args: &PhrasebookArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for line in lines {
                match (&line.reply, &line.error) {
                    (Some(reply), _) => writeln!(out, "{}", reply.text)?,
                    (None, Some(error)) => writeln!(out, "! line {}: {error}", line.line)?,
                    (None, None) => writeln!(out)?,
                }
            }
        }
        OutputFormat::Json => write_json(out, &lines, args)?,
    }
    Ok(())
}

/// Write the validation report in the selected format.
pub fn write_validation<W: Write>(
    out: &mut W,
    report: &ValidationReport,
    args: &PhrasebookArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                writeln!(out, "Configuration is valid")?;
                writeln!(out)?;
            }
            writeln!(out, "Catalog:")?;
            writeln!(out, "  Intents: {}", report.catalog.intents)?;
            writeln!(out, "  Examples: {}", report.catalog.examples)?;
            writeln!(out, "  Responses: {}", report.catalog.responses)?;
            writeln!(out, "  Failure phrases: {}", report.catalog.failure_phrases)?;
            writeln!(out, "Matcher threshold: {}", report.threshold)?;
            match &report.classifier {
                Some(stats) => {
                    writeln!(out, "Classifier:")?;
                    writeln!(out, "  Vocabulary: {} terms", stats.vocabulary_size)?;
                    writeln!(out, "  Iterations: {}", stats.iterations)?;
                    writeln!(out, "  Final loss: {:.4}", stats.final_loss)?;
                    writeln!(out, "  Converged: {}", stats.converged)?;
                    writeln!(out, "  Training time: {}ms", stats.training_time_ms)?;
                }
                None => writeln!(out, "Classifier: disabled")?,
            }
        }
        OutputFormat::Json => write_json(out, report, args)?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    result: &T,
    args: &PhrasebookArgs,
) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}
