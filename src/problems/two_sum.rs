use crate::problem::Problem;
use crate::schema::{BracketPolicy, Int, OutputFormat, Schema, SegmentPolicy, Value};

/// `twoSum(nums, target) -> [i, j]`
///
/// `nums` on the first line (empty segments skipped, so `[]` is an empty list), `target` on the
/// second. The answer is printed as `[i,j]` without a trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSum;

impl Problem for TwoSum {
    type Args = (Vec<Int>, Int);
    type Answer = Vec<Int>;

    fn name(&self) -> &'static str {
        "two_sum"
    }

    fn schema(&self) -> Schema {
        Schema::lines()
            .with_sequence(BracketPolicy::Positional, SegmentPolicy::Lenient)
            .with_scalar()
            .with_output(OutputFormat::bracketed_inline())
    }

    fn bind(&self, values: Vec<Value>) -> Option<Self::Args> {
        let mut values = values.into_iter();
        let nums = values.next()?.into_sequence()?;
        let target = values.next()?.as_scalar()?;
        Some((nums, target))
    }

    fn answer(&self, answer: Vec<Int>) -> Value {
        Value::Sequence(answer)
    }
}
