//! Replaced by the submission at judge time.

use judge_driver::prelude::Int;

pub fn sum_three_numbers(a: Int, b: Int, c: Int) -> Int {
    a + b + c
}
