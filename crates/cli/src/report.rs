//! Human-readable status lines for each processed folder.

use performer_import_core::{AutotagStatus, EntryOutcome, ImportSummary, PerformerStatus};
use std::io::{self, Write};

/// Routes per-folder status lines and the final summary.
///
/// In JSON mode `out` carries only the JSON summary; status lines go to `err`.
pub struct Reporter<O, E> {
    json: bool,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(json: bool, out: O, err: E) -> Self {
        Self { json, out, err }
    }

    pub fn outcome(&mut self, outcome: &EntryOutcome) -> io::Result<()> {
        let text = render_outcome(outcome);
        let sink: &mut dyn Write = if self.json {
            &mut self.err
        } else {
            &mut self.out
        };
        sink.write_all(text.as_bytes())?;
        sink.flush()
    }

    pub fn finish(&mut self, summary: &ImportSummary) -> anyhow::Result<()> {
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(summary)?)?;
        } else {
            writeln!(self.out, "{}", render_summary(summary))?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

pub fn render_outcome(outcome: &EntryOutcome) -> String {
    match outcome {
        EntryOutcome::Blacklisted { name } => format!("Skipping: {name}\n"),
        EntryOutcome::Declined { name } => format!("Skipping: {name}\n\n"),
        EntryOutcome::Processed {
            name,
            performer,
            autotag,
        } => {
            let mut out = match performer {
                PerformerStatus::Existing(_) => {
                    format!("Performer: {name}\nError: Already exists.\n")
                }
                PerformerStatus::Created(id) => {
                    format!("Created Performer: {name}\nCreated with ID: {id}\n")
                }
                PerformerStatus::CreateFailed => {
                    format!("Failed to create performer: {name}\n")
                }
            };
            if let Some(status) = autotag {
                let label = match status {
                    AutotagStatus::Started => "started",
                    AutotagStatus::Failed => "failed",
                    AutotagStatus::Skipped => "skipped (no performer id)",
                };
                out.push_str(&format!("Autotagging: {label}\n"));
            }
            out.push('\n');
            out
        }
    }
}

pub fn render_summary(summary: &ImportSummary) -> String {
    format!(
        "import: discovered {}, created {}, existing {}, skipped {}, failed {}",
        summary.discovered,
        summary.created,
        summary.existing,
        summary.blacklisted + summary.declined,
        summary.create_failed
    )
}
