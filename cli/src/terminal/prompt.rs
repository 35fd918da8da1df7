//! Line-based operator prompts.
//!
//! Every question loops until the answer parses; a rejected answer is
//! reported as a warning and asked again. End of input aborts the run.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, bail};
use colored::*;
use tracing::warn;

use crate::terminal::colors;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks once and returns the trimmed answer.
    pub fn ask(&mut self, label: &str, default: Option<&str>) -> anyhow::Result<String> {
        let question: String = match default {
            Some(default) => format!("{label} default ({}) > ", default.color(colors::ACCENT)),
            None => format!("{label} > "),
        };
        write!(self.output, "{}", question.color(colors::PRIMARY))?;
        self.output.flush()?;

        let mut line = String::new();
        let read: usize = self
            .input
            .read_line(&mut line)
            .context("failed to read operator input")?;
        if read == 0 {
            bail!("input closed while waiting for: {label}");
        }

        let answer: &str = line.trim();
        Ok(match default {
            Some(default) if answer.is_empty() => default.to_string(),
            _ => answer.to_string(),
        })
    }

    /// Asks until `parse` accepts the answer. The `Err` text is shown to the operator.
    pub fn ask_until<T, F>(&mut self, label: &str, default: Option<&str>, parse: F) -> anyhow::Result<T>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let answer: String = self.ask(label, default)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => warn!("{reason}"),
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
