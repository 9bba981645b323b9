//! Bundled problem signatures.
//!
//! Each problem keeps the exact input/output conventions its judge test cases were written
//! against, even where they disagree with each other:
//!
//! | problem                | input                                   | output        |
//! |------------------------|-----------------------------------------|---------------|
//! | [`SumOfThreeNumbers`]  | `[a,b,c]`, strict segments              | `a+b+c\n`     |
//! | [`TwoSum`]             | `[n1,...,nk]` (lenient) then `target`   | `[i,j]`       |
//! | [`SumTwoNumbers`]      | `[a,b,...]`, first two parsed, errors ignored | `a+b\n` |
//! | [`SumOfTwoNumbers`]    | JSON array on the whole input           | `a+b\n`       |

mod sum_of_three_numbers;
mod sum_of_two_numbers;
mod sum_two_numbers;
mod two_sum;

pub use sum_of_three_numbers::SumOfThreeNumbers;
pub use sum_of_two_numbers::SumOfTwoNumbers;
pub use sum_two_numbers::SumTwoNumbers;
pub use two_sum::TwoSum;

use crate::schema::{Int, Value};

/// First `N` elements of the single sequence in `values`, `None` when there are fewer.
pub(crate) fn leading<const N: usize>(values: Vec<Value>) -> Option<[Int; N]> {
    let sequence = values.into_iter().next()?.into_sequence()?;
    sequence.get(..N)?.try_into().ok()
}
