//! Stdin-backed [`Prompter`] for interactive runs.

use std::io::{self, BufRead, IsTerminal, Write};

use roost_core::prompt::{PromptError, Prompter};

use crate::color;
use crate::commands::helpers::is_confirmation_accepted;

/// Asks on stderr and reads answers from stdin.
///
/// When stdin is closed every question gets the negative answer, which makes
/// piped or scripted runs behave like [`roost_core::DeclineAll`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter {
    /// Answer yes to confirmations without asking.
    pub assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn ask(&self, question: &str) -> Result<Option<String>, PromptError> {
        let mut stderr = io::stderr();
        write!(stderr, "{} ", question)?;
        stderr.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            if io::stdin().is_terminal() {
                writeln!(stderr)?;
            }
            return Ok(None);
        }
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool, PromptError> {
        if self.assume_yes {
            return Ok(true);
        }
        let answer = self.ask(&format!("{} [y/N]", message))?;
        Ok(answer.as_deref().is_some_and(is_confirmation_accepted))
    }

    fn select(&self, message: &str, options: &[String]) -> Result<Option<usize>, PromptError> {
        eprintln!("{}", message);
        for (i, option) in options.iter().enumerate() {
            eprintln!("  {} {}", color::hint(&format!("{})", i + 1)), option);
        }
        let Some(answer) = self.ask("Number (empty for none):")? else {
            return Ok(None);
        };
        Ok(parse_choice(&answer, options.len()))
    }

    fn input(&self, message: &str) -> Result<Option<String>, PromptError> {
        self.ask(message)
    }
}

/// 1-based menu choice to an index. Out of range or non-numeric is "none".
fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}
