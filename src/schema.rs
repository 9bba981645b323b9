//! Declarative description of a problem's input records and output shape.
//!
//! A [`Schema`] is fixed when a driver is written. It tells the shared pipeline how many records
//! to read, how to decode each of them, how to render the answer and what to do when decoding
//! fails. Per-problem quirks (strict or lenient segments, trailing newline or not) live here as
//! data instead of being re-implemented in each driver.
//!
//! # Example
//!
//! ```
//! use judge_driver::schema::{BracketPolicy, DecodeFailure, OutputFormat, Schema, SegmentPolicy};
//!
//! // `[2,7,11,15]` on the first line, `9` on the second, answer printed as `[0,1]`.
//! let schema = Schema::lines()
//!     .with_sequence(BracketPolicy::Positional, SegmentPolicy::Lenient)
//!     .with_scalar()
//!     .with_output(OutputFormat::bracketed_inline())
//!     .with_decode_failure(DecodeFailure::Abort);
//! assert_eq!(schema.record_count(), 2);
//! ```

use std::fmt;

/// Native integer every scalar and sequence element decodes to.
pub type Int = i32;

/// A decoded record, or a rendered answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single integer.
    Scalar(Int),
    /// An ordered list of integers, duplicates allowed.
    Sequence(Vec<Int>),
}

impl Value {
    /// Returns the integer when `self` is a scalar.
    pub fn as_scalar(&self) -> Option<Int> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Sequence(_) => None,
        }
    }

    /// Consumes `self` and returns the elements when it is a sequence.
    pub fn into_sequence(self) -> Option<Vec<Int>> {
        match self {
            Value::Sequence(v) => Some(v),
            Value::Scalar(_) => None,
        }
    }
}

impl From<Int> for Value {
    fn from(value: Int) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<Int>> for Value {
    fn from(value: Vec<Int>) -> Self {
        Value::Sequence(value)
    }
}

/// How enclosing brackets are removed from a sequence record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketPolicy {
    /// Strip one `[` and one `]` only when the record is at least two characters long and both
    /// ends carry the matching bracket. Anything else is split as-is.
    Matched,
    /// Strip the first and last character of a record longer than two characters. A record with
    /// a bracket on a single side is rejected.
    Positional,
}

/// How empty comma-delimited segments are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPolicy {
    /// Every segment must be an integer literal, except a single empty segment after a trailing
    /// comma, which is dropped (`1,2,3,` holds three values).
    Strict,
    /// Empty segments are skipped.
    Lenient,
    /// All trailing empty segments are dropped; any other empty segment is an error
    /// (`1,2,,` holds two values, `,1,2` is rejected).
    TrailingDropped,
}

/// Kind of a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A bare integer on its own line.
    Scalar,
    /// A bracket-optional, comma separated list of integers.
    Sequence {
        /// Bracket stripping rule.
        brackets: BracketPolicy,
        /// Empty segment rule.
        segments: SegmentPolicy,
        /// Decode at most this many values; later segments are not parsed.
        limit: Option<usize>,
    },
    /// A JSON array of integers, e.g. `[1, 2]`.
    JsonArray,
}

/// Where the raw records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// One line of standard input per field.
    Lines,
    /// All of standard input, trimmed, as a single record. Empty input is a silent no-op.
    WholeInput,
}

/// Rendering flags of the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    /// Wrap sequences in `[` and `]`.
    pub bracketed: bool,
    /// Terminate the output with `\n`.
    pub newline: bool,
}

impl OutputFormat {
    /// `6\n`
    pub const fn scalar_line() -> Self {
        OutputFormat {
            bracketed: false,
            newline: true,
        }
    }

    /// `[0,1]` with no trailing newline.
    pub const fn bracketed_inline() -> Self {
        OutputFormat {
            bracketed: true,
            newline: false,
        }
    }
}

/// What the driver does when a record cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeFailure {
    /// Propagate the error and exit with a non-zero status.
    #[default]
    Abort,
    /// Print nothing and exit successfully.
    Ignore,
    /// Print `Error: <message>` on stderr and exit successfully.
    Report,
}

/// Ordered, typed description of a problem's input fields and output shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    source: RecordSource,
    fields: Vec<FieldKind>,
    output: OutputFormat,
    on_decode_failure: DecodeFailure,
}

impl Schema {
    /// A schema reading one line per field. Fields are added with the `with_*` methods.
    #[must_use]
    pub fn lines() -> Self {
        Schema {
            source: RecordSource::Lines,
            fields: vec![],
            output: OutputFormat::scalar_line(),
            on_decode_failure: DecodeFailure::Abort,
        }
    }

    /// A schema reading all of standard input as a single field of kind `field`.
    #[must_use]
    pub fn whole_input(field: FieldKind) -> Self {
        Schema {
            source: RecordSource::WholeInput,
            fields: vec![field],
            output: OutputFormat::scalar_line(),
            on_decode_failure: DecodeFailure::Abort,
        }
    }

    /// Append a scalar field.
    #[must_use]
    pub fn with_scalar(self) -> Self {
        self.with_field(FieldKind::Scalar)
    }

    /// Append a sequence field.
    #[must_use]
    pub fn with_sequence(self, brackets: BracketPolicy, segments: SegmentPolicy) -> Self {
        self.with_field(FieldKind::Sequence {
            brackets,
            segments,
            limit: None,
        })
    }

    /// Append a sequence field of which only the first `count` values are decoded.
    #[must_use]
    pub fn with_sequence_prefix(
        self,
        brackets: BracketPolicy,
        segments: SegmentPolicy,
        count: usize,
    ) -> Self {
        self.with_field(FieldKind::Sequence {
            brackets,
            segments,
            limit: Some(count),
        })
    }

    /// Append a field of any kind.
    ///
    /// # Panics
    /// When called on a [`RecordSource::WholeInput`] schema, which holds exactly one field.
    #[must_use]
    pub fn with_field(mut self, field: FieldKind) -> Self {
        assert!(
            self.source == RecordSource::Lines,
            "a whole-input schema holds exactly one field"
        );
        self.fields.push(field);
        self
    }

    /// Set the rendering flags of the answer.
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set the decode failure policy.
    #[must_use]
    pub fn with_decode_failure(mut self, policy: DecodeFailure) -> Self {
        self.on_decode_failure = policy;
        self
    }

    /// Where records are read from.
    pub fn source(&self) -> RecordSource {
        self.source
    }

    /// Fields in parameter order.
    pub fn fields(&self) -> &[FieldKind] {
        &self.fields
    }

    /// Number of records to read.
    pub fn record_count(&self) -> usize {
        self.fields.len()
    }

    /// Rendering flags of the answer.
    pub fn output(&self) -> OutputFormat {
        self.output
    }

    /// Decode failure policy.
    pub fn on_decode_failure(&self) -> DecodeFailure {
        self.on_decode_failure
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .fields
            .iter()
            .map(|field| match field {
                FieldKind::Scalar => "scalar".to_owned(),
                FieldKind::Sequence {
                    brackets,
                    segments,
                    limit: None,
                } => format!("sequence({brackets:?}, {segments:?})"),
                FieldKind::Sequence {
                    brackets,
                    segments,
                    limit: Some(count),
                } => format!("sequence({brackets:?}, {segments:?}, first {count})"),
                FieldKind::JsonArray => "json".to_owned(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{:?}[{fields}]", self.source)
    }
}
