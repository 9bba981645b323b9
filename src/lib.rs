//! # Judge Driver
//!
//! Per-problem drivers for an online coding judge.
//!
//! A driver reads one test case from standard input, decodes it into typed arguments, calls the
//! submitted solution and prints the answer in the exact text the grader compares against.
//!
//! It provides:
//! - Raw record reading (`record`)
//! - Declarative per-problem input/output descriptions (`schema`)
//! - A shared decoder and encoder driven by those descriptions (`decode`, `encode`)
//! - The [`Problem`](crate::problem::Problem) and [`Solution`](crate::problem::Solution)
//!   traits binding a signature to the pipeline
//! - The pipeline itself, [`Driver`](crate::driver::Driver)
//! - Bundled problems: `two_sum`, `sum_of_three_numbers`, `sum_two_numbers`, `sum_of_two_numbers`
//!
//! Each process handles a single test case: read → decode → invoke → encode → exit. The judge
//! spawns one process per test case and compares stdout as-is, so nothing but the answer is ever
//! written there.
//!
//! # Documentation Overview
//!
//! - For the wire format of records and answers, see [`schema`] and [`decode`].
//! - For failure handling and exit statuses, see [`driver`] and [`error`].
//! - For runtime flags (logging, truncation handling), see
//!   [`Configuration`](crate::configuration::Configuration).
//!
//! # Example Driver
//!
//! A driver binary pairs a problem with the submitted function:
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! use judge_driver::prelude::*;
//!
//! fn two_sum(nums: Vec<Int>, target: Int) -> Vec<Int> {
//!     for i in 0..nums.len() {
//!         for j in i + 1..nums.len() {
//!             if nums[i] + nums[j] == target {
//!                 return vec![i as Int, j as Int];
//!             }
//!         }
//!     }
//!     vec![]
//! }
//!
//! fn main() -> ExitCode {
//!     drive(TwoSum, |(nums, target): (Vec<Int>, Int)| two_sum(nums, target))
//! }
//! ```
//!
//! With `[2,7,11,15]` and `9` on stdin, this prints `[0,1]` (no trailing newline).
#![warn(missing_docs)]

pub use anyhow;
pub mod configuration;
pub mod decode;
pub mod driver;
pub mod encode;
pub mod error;
mod logger;
pub mod problem;
pub mod problems;
pub mod record;
pub mod schema;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use judge_driver::prelude::*;
/// ```
///
/// Includes:
/// - [`Configuration`](crate::configuration::Configuration)
/// - [`Driver`](crate::driver::Driver), [`Outcome`](crate::driver::Outcome) and [`drive`](crate::driver::drive)
/// - the [`Problem`](crate::problem::Problem) and [`Solution`](crate::problem::Solution) traits
/// - all bundled [`problems`](crate::problems)
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::driver::{drive, Driver, Outcome, Skip};
    pub use crate::error::DriverError;
    pub use crate::problem::{Problem, Solution};
    pub use crate::problems::*;
    pub use crate::schema::{Int, Value};
}
