use crate::problem::Problem;
use crate::schema::{BracketPolicy, DecodeFailure, Int, OutputFormat, Schema, SegmentPolicy, Value};

use super::leading;

/// `sumTwoNumbers(a, b) -> int`
///
/// A single `[a,b]` line. Only the first two segments are parsed, trailing empty segments are
/// dropped. Fewer than two values print nothing, and so does any decode failure (including an
/// empty leading or middle segment).
#[derive(Debug, Clone, Copy, Default)]
pub struct SumTwoNumbers;

impl Problem for SumTwoNumbers {
    type Args = (Int, Int);
    type Answer = Int;

    fn name(&self) -> &'static str {
        "sum_two_numbers"
    }

    fn schema(&self) -> Schema {
        Schema::lines()
            .with_sequence_prefix(BracketPolicy::Matched, SegmentPolicy::TrailingDropped, 2)
            .with_output(OutputFormat::scalar_line())
            .with_decode_failure(DecodeFailure::Ignore)
    }

    fn bind(&self, values: Vec<Value>) -> Option<Self::Args> {
        let [a, b] = leading::<2>(values)?;
        Some((a, b))
    }

    fn answer(&self, answer: Int) -> Value {
        Value::Scalar(answer)
    }
}
