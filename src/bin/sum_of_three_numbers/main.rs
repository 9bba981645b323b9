use std::process::ExitCode;

use judge_driver::prelude::*;

mod solution;

fn main() -> ExitCode {
    drive(SumOfThreeNumbers, |(a, b, c): (Int, Int, Int)| {
        solution::sum_three_numbers(a, b, c)
    })
}
