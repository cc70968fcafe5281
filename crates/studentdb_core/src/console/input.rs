//! Prompt helpers with retry-on-invalid semantics.

use crate::console::{ConsoleError, ConsoleResult};
use crate::model::person::{MAX_MARK, MIN_MARK};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Token that ends marks collection (case-insensitive).
pub const FINISH_TOKEN: &str = "done";

/// Line-oriented prompt/answer channel.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes one full line.
    pub fn say(&mut self, line: impl Display) -> ConsoleResult<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one answer line.
    ///
    /// The trailing line terminator is stripped; other whitespace is kept.
    /// Bytes that are not valid UTF-8 decode to `U+FFFD` instead of failing.
    pub fn read_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Re-prompts until the answer parses as an integer.
    pub fn read_int(&mut self, prompt: &str) -> ConsoleResult<i32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a valid integer.")?,
            }
        }
    }

    /// Collects at least one mark in `MIN_MARK..=MAX_MARK`.
    ///
    /// The `Mark #<n>` index only advances when a mark is accepted.
    pub fn read_marks(&mut self) -> ConsoleResult<Vec<i32>> {
        self.say(format!(
            "Enter marks ({MIN_MARK}-{MAX_MARK}). Type '{FINISH_TOKEN}' to finish. Minimum 1 mark."
        ))?;

        let mut marks = Vec::new();
        loop {
            let line = self.read_line(&format!("Mark #{}: ", marks.len() + 1))?;
            let answer = line.trim();

            if answer.eq_ignore_ascii_case(FINISH_TOKEN) {
                if marks.is_empty() {
                    self.say("Please enter at least one mark.")?;
                    continue;
                }
                return Ok(marks);
            }

            match answer.parse::<i32>() {
                Ok(mark) if (MIN_MARK..=MAX_MARK).contains(&mark) => marks.push(mark),
                Ok(_) => self.say(format!(
                    "Mark must be between {MIN_MARK} and {MAX_MARK}."
                ))?,
                Err(_) => self.say(format!("Enter a number or '{FINISH_TOKEN}'."))?,
            }
        }
    }
}
