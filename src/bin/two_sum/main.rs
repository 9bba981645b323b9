use std::process::ExitCode;

use judge_driver::prelude::*;

mod solution;

fn main() -> ExitCode {
    drive(TwoSum, |(nums, target): (Vec<Int>, Int)| {
        solution::two_sum(nums, target)
    })
}
