use crate::problem::Problem;
use crate::schema::{BracketPolicy, Int, OutputFormat, Schema, SegmentPolicy, Value};

use super::leading;

/// `sumThreeNumbers(a, b, c) -> int`
///
/// A single `[a,b,c]` line, brackets optional. Only the first three values are used, fewer than
/// three print nothing. Every segment must be an integer; a single trailing comma is tolerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOfThreeNumbers;

impl Problem for SumOfThreeNumbers {
    type Args = (Int, Int, Int);
    type Answer = Int;

    fn name(&self) -> &'static str {
        "sum_of_three_numbers"
    }

    fn schema(&self) -> Schema {
        Schema::lines()
            .with_sequence(BracketPolicy::Matched, SegmentPolicy::Strict)
            .with_output(OutputFormat::scalar_line())
    }

    fn bind(&self, values: Vec<Value>) -> Option<Self::Args> {
        let [a, b, c] = leading::<3>(values)?;
        Some((a, b, c))
    }

    fn answer(&self, answer: Int) -> Value {
        Value::Scalar(answer)
    }
}
