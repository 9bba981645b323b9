//! Answer encoding.
//!
//! Scalars print as a bare integer, sequences as `[a,b,c]` with no spaces and no trailing comma.
//! Whether a newline follows depends on the problem's [`OutputFormat`].

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Context;

use crate::schema::{Int, OutputFormat, Value};

/// Render `value` to a string.
pub fn encode(value: &Value, format: OutputFormat) -> String {
    let mut out = String::new();
    match value {
        Value::Scalar(v) => {
            let _ = write!(out, "{v}");
        }
        Value::Sequence(values) => {
            if format.bracketed {
                out.push('[');
            }
            out.push_str(&join(values));
            if format.bracketed {
                out.push(']');
            }
        }
    }
    if format.newline {
        out.push('\n');
    }
    out
}

/// Render `value` into `output` and flush it.
pub fn write_value(
    output: &mut impl Write,
    value: &Value,
    format: OutputFormat,
) -> anyhow::Result<()> {
    output
        .write_all(encode(value, format).as_bytes())
        .context("could not write answer")?;
    output.flush().context("could not flush output")
}

fn join(values: &[Int]) -> String {
    values
        .iter()
        .map(Int::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
