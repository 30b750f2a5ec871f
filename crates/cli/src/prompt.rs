use anyhow::{Context, Result};
use dialoguer::console::Term;
use dialoguer::Input;
use performer_import_core::ConfirmPrompt;
use std::io::{self, BufRead, Write};

pub fn prompt_text(name: &str) -> String {
    format!("Add performer: {name}? (y/n)")
}

/// Only a `y` (any case, surrounding whitespace ignored) counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Asks on the terminal, or reads plain lines from stdin when it is not interactive.
///
/// The question is written to stderr either way, keeping stdout for results.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, name: &str) -> Result<bool> {
        let answer = if Term::stderr().is_term() {
            Input::<String>::new()
                .with_prompt(prompt_text(name))
                .allow_empty(true)
                .interact_text()
                .context("prompt failed")?
        } else {
            read_line(name)?
        };
        Ok(is_affirmative(&answer))
    }
}

fn read_line(name: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}: ", prompt_text(name))?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read answer from stdin")?;
    Ok(line)
}
