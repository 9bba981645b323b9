//! Replaced by the submission at judge time.

use judge_driver::prelude::Int;

pub fn sum_two_numbers(a: Int, b: Int) -> Int {
    a + b
}
