use std::io::{BufRead, Write};

use anyhow::Result;

/// Reads one non-blank line at a time, re-prompting on blank input
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next non-blank, trimmed line, or `None` once input is exhausted
    pub fn request<W: Write>(&mut self, out: &mut W) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                tracing::debug!("Console input closed");
                return Ok(None);
            }

            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }

            writeln!(out, "Invalid input. Please try again.")?;
        }
    }
}
