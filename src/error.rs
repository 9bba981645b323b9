//! Error taxonomy of the driver pipeline.
//!
//! Every failure raised while reading or decoding a test case is a [`DriverError`]. Public entry
//! points return [`anyhow::Result`], so callers that need to react to a specific failure can
//! `downcast_ref::<DriverError>()`.

use std::fmt;

/// A failure raised while reading or decoding the input records of a test case.
///
/// `record` fields are zero-based line indices (or `0` for the whole-input record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// Standard input ended before every record required by the schema was read.
    InputTruncated {
        /// Number of records the schema asks for.
        required: usize,
        /// Number of records actually available.
        available: usize,
    },
    /// A scalar line or a sequence segment is not a valid integer literal.
    InvalidInteger {
        /// Index of the offending record.
        record: usize,
        /// The text that failed to parse, already trimmed.
        text: String,
    },
    /// A strictly decoded sequence contains an empty comma-delimited segment.
    EmptySegment {
        /// Index of the offending record.
        record: usize,
        /// Zero-based position of the segment inside the record.
        position: usize,
    },
    /// A positionally stripped sequence has a bracket on one side only.
    UnbalancedBrackets {
        /// Index of the offending record.
        record: usize,
    },
    /// A JSON array record could not be parsed.
    MalformedJson {
        /// Index of the offending record.
        record: usize,
        /// Message reported by the JSON parser.
        message: String,
    },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::InputTruncated {
                required,
                available,
            } => write!(
                f,
                "input truncated: expected {required} line(s), got {available}"
            ),
            DriverError::InvalidInteger { record, text } => {
                write!(f, "record {record}: invalid integer literal '{text}'")
            }
            DriverError::EmptySegment { record, position } => {
                write!(f, "record {record}: empty segment at position {position}")
            }
            DriverError::UnbalancedBrackets { record } => {
                write!(f, "record {record}: unbalanced brackets")
            }
            DriverError::MalformedJson { record, message } => {
                write!(f, "record {record}: malformed JSON array: {message}")
            }
        }
    }
}

impl std::error::Error for DriverError {}
