//! User prompts for templet.
//!
//! The interactive flow needs a list picker and a free-text prompt. Both sit
//! behind the `Prompter` trait so commands and the resolver can be driven by
//! a scripted implementation in tests instead of a live terminal.
//!
//! Cancellation is expressed as `Ok(None)`: dismissing a prompt (empty line
//! with no default, or end of input) abandons it, and callers treat that as
//! cancelling the whole operation.

use crate::error::{Result, TempletError};
use std::io::{self, BufRead, Write};

/// Interactive prompt seam.
pub trait Prompter {
    /// Present `options` and return the chosen one, or `None` if dismissed.
    fn pick(&mut self, prompt: &str, options: &[String]) -> Result<Option<String>>;

    /// Ask for a line of text. An empty line takes `default` when one is
    /// offered; otherwise it cancels the prompt.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>>;
}

/// Prompter over stdin/stdout: numbered list picker and plain line input.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn pick(&mut self, prompt: &str, options: &[String]) -> Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write_io(writeln!(out, "{}", prompt))?;
            for (i, option) in options.iter().enumerate() {
                write_io(writeln!(out, "  {}) {}", i + 1, option))?;
            }
            write_io(write!(out, "> "))?;
            write_io(out.flush())?;
        }

        let Some(line) = read_line()? else {
            return Ok(None);
        };
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(None);
        }

        // Accept either the option number or the option text itself.
        if let Ok(n) = choice.parse::<usize>()
            && n >= 1
            && n <= options.len()
        {
            return Ok(Some(options[n - 1].clone()));
        }
        Ok(options.iter().find(|o| o.as_str() == choice).cloned())
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            match default {
                Some(d) => write_io(write!(out, "{} [{}]: ", prompt, d))?,
                None => write_io(write!(out, "{}: ", prompt))?,
            }
            write_io(out.flush())?;
        }

        let Some(line) = read_line()? else {
            return Ok(None);
        };
        let value = line.trim();
        if value.is_empty() {
            return Ok(default.map(str::to_string));
        }
        Ok(Some(value.to_string()))
    }
}

/// Read one line from stdin; `None` on end of input.
fn read_line() -> Result<Option<String>> {
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| TempletError::User(format!("failed to read input: {}", e)))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn write_io(result: io::Result<()>) -> Result<()> {
    result.map_err(|e| TempletError::User(format!("failed to write prompt: {}", e)))
}
