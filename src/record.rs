//! Raw record reading.
//!
//! A record is one line of input with its line terminator removed. Whitespace inside the line is
//! kept; trimming is the decoder's job.

use std::io::BufRead;

use anyhow::Context;
use tracing::trace;

use crate::error::DriverError;

/// Reads raw records from a buffered source, usually a locked stdin.
pub struct RecordReader<R> {
    input: R,
}

impl<R: BufRead> RecordReader<R> {
    /// Wrap `input`.
    pub fn new(input: R) -> Self {
        RecordReader { input }
    }

    /// Read exactly `count` lines.
    ///
    /// # Errors
    /// [`DriverError::InputTruncated`] when the input ends early, or the underlying I/O error.
    pub fn read_lines(&mut self, count: usize) -> anyhow::Result<Vec<String>> {
        let mut records = Vec::with_capacity(count);
        while records.len() < count {
            let mut line = String::new();
            let n = self
                .input
                .read_line(&mut line)
                .context("could not read from input")?;
            if n == 0 {
                return Err(DriverError::InputTruncated {
                    required: count,
                    available: records.len(),
                }
                .into());
            }
            strip_line_terminator(&mut line);
            trace!(index = records.len(), ?line, "record read");
            records.push(line);
        }
        Ok(records)
    }

    /// Read the remaining input as a single trimmed record.
    ///
    /// Returns `None` when nothing but whitespace is left.
    pub fn read_all(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = String::new();
        self.input
            .read_to_string(&mut buf)
            .context("could not read from input")?;
        let trimmed = buf.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_owned()))
        }
    }
}

fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
