//! Record decoding.
//!
//! Turns raw records into [`Value`]s following the field kinds of a [`Schema`]. Bracket stripping
//! is positional (first and last character only), never a syntactic parse.

use tracing::debug;

use crate::error::DriverError;
use crate::schema::{BracketPolicy, FieldKind, Int, Schema, SegmentPolicy, Value};

/// Decode every record against the matching field of `schema`.
///
/// `records` must hold one entry per field, in field order.
pub fn decode_records(schema: &Schema, records: &[String]) -> Result<Vec<Value>, DriverError> {
    debug_assert_eq!(schema.record_count(), records.len());
    schema
        .fields()
        .iter()
        .zip(records)
        .enumerate()
        .map(|(index, (field, record))| decode_field(*field, record, index))
        .collect()
}

/// Decode a single record. `index` is only used to locate errors.
pub fn decode_field(field: FieldKind, record: &str, index: usize) -> Result<Value, DriverError> {
    let value = match field {
        FieldKind::Scalar => Value::Scalar(decode_scalar(record, index)?),
        FieldKind::Sequence {
            brackets,
            segments,
            limit,
        } => Value::Sequence(decode_sequence_prefix(
            record, brackets, segments, limit, index,
        )?),
        FieldKind::JsonArray => Value::Sequence(decode_json_array(record, index)?),
    };
    debug!(index, ?value, "record decoded");
    Ok(value)
}

/// Parse the whole trimmed record as a signed integer.
pub fn decode_scalar(record: &str, index: usize) -> Result<Int, DriverError> {
    parse_int(record.trim(), index)
}

/// Decode a bracket-optional, comma separated list of integers.
pub fn decode_sequence(
    record: &str,
    brackets: BracketPolicy,
    segments: SegmentPolicy,
    index: usize,
) -> Result<Vec<Int>, DriverError> {
    decode_sequence_prefix(record, brackets, segments, None, index)
}

/// Like [`decode_sequence`], but stops once `limit` values are decoded. Segments past the limit
/// are never parsed.
pub fn decode_sequence_prefix(
    record: &str,
    brackets: BracketPolicy,
    segments: SegmentPolicy,
    limit: Option<usize>,
    index: usize,
) -> Result<Vec<Int>, DriverError> {
    let inner = strip_brackets(record.trim(), brackets, index)?;
    // An empty body yields no segment at all, whatever the segment policy.
    if inner.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut parts = inner.split(',').collect::<Vec<_>>();
    match segments {
        SegmentPolicy::Strict => {
            if parts.last() == Some(&"") {
                parts.pop();
            }
        }
        SegmentPolicy::TrailingDropped => {
            while parts.last() == Some(&"") {
                parts.pop();
            }
        }
        SegmentPolicy::Lenient => {}
    }

    let limit = limit.unwrap_or(usize::MAX);
    let mut values = vec![];
    for (position, segment) in parts.into_iter().enumerate() {
        if values.len() == limit {
            break;
        }
        let segment = segment.trim();
        if segment.is_empty() {
            if segments == SegmentPolicy::Lenient {
                continue;
            }
            return Err(DriverError::EmptySegment {
                record: index,
                position,
            });
        }
        values.push(parse_int(segment, index)?);
    }
    Ok(values)
}

/// Decode a JSON array of integers such as `[1, 2]`.
pub fn decode_json_array(record: &str, index: usize) -> Result<Vec<Int>, DriverError> {
    serde_json::from_str::<Vec<Int>>(record.trim()).map_err(|e| DriverError::MalformedJson {
        record: index,
        message: e.to_string(),
    })
}

/// Remove the enclosing brackets of an already trimmed record.
pub fn strip_brackets(
    record: &str,
    policy: BracketPolicy,
    index: usize,
) -> Result<&str, DriverError> {
    let opens = record.starts_with('[');
    let closes = record.ends_with(']');
    match policy {
        BracketPolicy::Matched => {
            if record.len() >= 2 && opens && closes {
                Ok(&record[1..record.len() - 1])
            } else {
                Ok(record)
            }
        }
        BracketPolicy::Positional => match (opens, closes) {
            (true, true) if record.len() >= 2 => Ok(&record[1..record.len() - 1]),
            (false, false) => Ok(record),
            _ => Err(DriverError::UnbalancedBrackets { record: index }),
        },
    }
}

fn parse_int(text: &str, index: usize) -> Result<Int, DriverError> {
    text.parse::<Int>().map_err(|_| DriverError::InvalidInteger {
        record: index,
        text: text.to_owned(),
    })
}
