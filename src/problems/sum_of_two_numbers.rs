use crate::problem::Problem;
use crate::schema::{DecodeFailure, FieldKind, Int, OutputFormat, Schema, Value};

use super::leading;

/// `sumTwoNumbers(a, b) -> int`, JSON flavour
///
/// The whole input is a JSON array such as `[1, 2]`. Empty input prints nothing; malformed JSON
/// is reported on stderr and still exits successfully.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOfTwoNumbers;

impl Problem for SumOfTwoNumbers {
    type Args = (Int, Int);
    type Answer = Int;

    fn name(&self) -> &'static str {
        "sum_of_two_numbers"
    }

    fn schema(&self) -> Schema {
        Schema::whole_input(FieldKind::JsonArray)
            .with_output(OutputFormat::scalar_line())
            .with_decode_failure(DecodeFailure::Report)
    }

    fn bind(&self, values: Vec<Value>) -> Option<Self::Args> {
        let [a, b] = leading::<2>(values)?;
        Some((a, b))
    }

    fn answer(&self, answer: Int) -> Value {
        Value::Scalar(answer)
    }
}
