//! The read → decode → invoke → encode pipeline.
//!
//! This module defines the [`Driver`] type, which runs exactly one test case per process:
//!
//! - Reading the raw records required by the problem's [`Schema`](crate::schema::Schema)
//! - Decoding them into typed arguments
//! - Calling the injected [`Solution`]
//! - Writing the encoded answer to standard output
//!
//! # Behavior & Configuration
//!
//! Nothing is ever caught around the solution call: a panic inside the solution terminates the
//! process. Read and decode failures are handled according to the problem and the
//! [`Configuration`]:
//!
//! - Missing input lines print nothing and succeed, unless `fail_on_truncation` is set.
//! - Decode failures follow the problem's [`DecodeFailure`] policy.
//! - A decoded argument list the problem cannot bind (e.g. too few values) prints nothing and
//!   succeeds.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use judge_driver::prelude::*;
//!
//! let solution = |(a, b, c): (Int, Int, Int)| a + b + c;
//! let mut driver = Driver::new(SumOfThreeNumbers, solution, Configuration::new()).unwrap();
//!
//! let mut output = Vec::new();
//! let outcome = driver
//!     .run(Cursor::new("[1,2,3]\n"), &mut output, &mut std::io::sink())
//!     .unwrap();
//! assert_eq!(outcome, Outcome::Answered);
//! assert_eq!(output, b"6\n");
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::configuration::Configuration;
use crate::decode::decode_records;
use crate::encode::write_value;
use crate::error::DriverError;
use crate::logger::init_logger;
use crate::problem::{Problem, Solution};
use crate::record::RecordReader;
use crate::schema::{DecodeFailure, RecordSource};

/// Why a run ended without printing an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// Fewer input lines than the schema requires.
    Truncated {
        /// Lines required.
        required: usize,
        /// Lines available.
        available: usize,
    },
    /// Whole-input problem received only whitespace.
    EmptyInput,
    /// The decoded values do not hold enough arguments for the solution.
    MissingArguments,
    /// Decoding failed under [`DecodeFailure::Ignore`].
    DecodeIgnored(DriverError),
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The answer was written to the output.
    Answered,
    /// Nothing was written.
    Skipped(Skip),
    /// Decoding failed under [`DecodeFailure::Report`]; the error was written to the error stream.
    Reported(DriverError),
}

/// Runs a single test case of problem `P` against solution `S`.
pub struct Driver<P: Problem, S: Solution<P>> {
    problem: P,
    solution: S,
    config: Configuration,
}

impl<P: Problem, S: Solution<P>> Driver<P, S> {
    /// Create a [`Driver`], installing the tracing subscriber when logging is enabled.
    ///
    /// # Errors
    /// Returned when logging is enabled and the subscriber cannot be installed.
    pub fn new(problem: P, solution: S, config: Configuration) -> anyhow::Result<Self> {
        if config.log {
            init_logger(problem.name(), config.log_dir.as_deref())?;
        }
        trace!(?config, schema = %problem.schema());

        Ok(Driver {
            problem,
            solution,
            config,
        })
    }

    /// Run the pipeline over locked stdin, stdout and stderr.
    pub fn run_stdio(&mut self) -> anyhow::Result<Outcome> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
    }

    /// Run the pipeline: read, decode, invoke, encode.
    ///
    /// `errors` only receives messages of problems using [`DecodeFailure::Report`].
    ///
    /// # Errors
    /// I/O failures, aborting decode failures, and truncation when `fail_on_truncation` is set.
    #[instrument(skip_all, fields(problem = self.problem.name()))]
    pub fn run(
        &mut self,
        input: impl BufRead,
        output: &mut impl Write,
        errors: &mut impl Write,
    ) -> anyhow::Result<Outcome> {
        let schema = self.problem.schema();
        let mut reader = RecordReader::new(input);

        // 1. read
        let records = match schema.source() {
            RecordSource::Lines => match reader.read_lines(schema.record_count()) {
                Ok(records) => records,
                Err(e) => match e.downcast_ref::<DriverError>() {
                    Some(&DriverError::InputTruncated {
                        required,
                        available,
                    }) if !self.config.fail_on_truncation => {
                        warn!(required, available, "input truncated, nothing printed");
                        return Ok(Outcome::Skipped(Skip::Truncated {
                            required,
                            available,
                        }));
                    }
                    _ => return Err(e),
                },
            },
            RecordSource::WholeInput => match reader.read_all()? {
                Some(record) => vec![record],
                None => {
                    warn!("empty input, nothing printed");
                    return Ok(Outcome::Skipped(Skip::EmptyInput));
                }
            },
        };
        debug!(?records);

        // 2. decode
        let values = match decode_records(&schema, &records) {
            Ok(values) => values,
            Err(e) => {
                return match schema.on_decode_failure() {
                    DecodeFailure::Abort => {
                        error!("decode failed: {e}");
                        Err(e.into())
                    }
                    DecodeFailure::Ignore => {
                        warn!("decode failed, ignored: {e}");
                        Ok(Outcome::Skipped(Skip::DecodeIgnored(e)))
                    }
                    DecodeFailure::Report => {
                        warn!("decode failed, reported: {e}");
                        writeln!(errors, "Error: {e}").context("could not report error")?;
                        Ok(Outcome::Reported(e))
                    }
                };
            }
        };

        let Some(args) = self.problem.bind(values) else {
            warn!("not enough arguments, nothing printed");
            return Ok(Outcome::Skipped(Skip::MissingArguments));
        };

        // 3. invoke
        info!("invoking solution");
        let answer = self.solution.solve(args);

        // 4. encode
        let value = self.problem.answer(answer);
        debug!(?value, "answer");
        write_value(output, &value, schema.output())?;
        info!("answer written");
        Ok(Outcome::Answered)
    }
}

/// Entry point of a driver binary.
///
/// Reads the [`Configuration`] from the environment, runs `solution` against `problem` on
/// stdin/stdout and maps the result to an exit status: success for every [`Outcome`], failure
/// for every error (described on stderr unless `DRIVER_VERBOSE_ERRORS` is disabled).
pub fn drive<P: Problem, S: Solution<P>>(problem: P, solution: S) -> ExitCode {
    let config = Configuration::from_env();
    let verbose_errors = config.verbose_errors;

    let result = Driver::new(problem, solution, config).and_then(|mut driver| driver.run_stdio());
    match result {
        Ok(outcome) => {
            trace!(?outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            if verbose_errors {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
