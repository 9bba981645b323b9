use std::process::ExitCode;

use judge_driver::prelude::*;

mod solution;

fn main() -> ExitCode {
    drive(SumTwoNumbers, |(a, b): (Int, Int)| solution::sum_two_numbers(a, b))
}
