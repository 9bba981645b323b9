use std::io::{self, Cursor};

use judge_driver::prelude::*;
use judge_driver::schema::{BracketPolicy, DecodeFailure, OutputFormat, Schema, SegmentPolicy};

#[allow(dead_code)]
fn init_debug_logger() {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    let subscriber = tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Run `problem` on `input`, returning the outcome, stdout and stderr.
fn run<P: Problem, S: Solution<P>>(
    problem: P,
    solution: S,
    config: Configuration,
    input: &str,
) -> anyhow::Result<(Outcome, String, String)> {
    let mut driver = Driver::new(problem, solution, config)?;
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = driver.run(Cursor::new(input), &mut out, &mut err)?;
    Ok((
        outcome,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    ))
}

fn sum3(input: &str) -> anyhow::Result<(Outcome, String, String)> {
    run(
        SumOfThreeNumbers,
        |(a, b, c): (Int, Int, Int)| a + b + c,
        Configuration::new(),
        input,
    )
}

fn first_pair((nums, target): (Vec<Int>, Int)) -> Vec<Int> {
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] + nums[j] == target {
                return vec![i as Int, j as Int];
            }
        }
    }
    vec![]
}

fn two_sum(input: &str) -> anyhow::Result<(Outcome, String, String)> {
    run(TwoSum, first_pair, Configuration::new(), input)
}

#[test]
fn sum_of_three_numbers_prints_sum_and_newline() {
    let (outcome, out, _) = sum3("[1,2,3]\n").unwrap();
    assert_eq!(outcome, Outcome::Answered);
    assert_eq!(out, "6\n");
}

#[test]
fn sum_of_three_numbers_brackets_are_optional() {
    for (a, b, c) in [(0, 0, 0), (-5, 12, 7), (100, -100, 1), (Int::MAX, 0, Int::MIN)] {
        let expected = format!("{}\n", a + b + c);
        assert_eq!(sum3(&format!("[{a},{b},{c}]")).unwrap().1, expected);
        assert_eq!(sum3(&format!("{a},{b},{c}")).unwrap().1, expected);
    }
}

#[test]
fn sum_of_three_numbers_uses_first_three_values() {
    assert_eq!(sum3("[1,2,3,40]").unwrap().1, "6\n");
}

#[test]
fn sum_of_three_numbers_tolerates_one_trailing_comma() {
    let (outcome, out, _) = sum3("[1,2,3,]\n").unwrap();
    assert_eq!(outcome, Outcome::Answered);
    assert_eq!(out, "6\n");
}

#[test]
fn sum_of_three_numbers_interior_empty_segment_fails() {
    let err = sum3("[1,,2,3]\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<DriverError>(),
        Some(&DriverError::EmptySegment {
            record: 0,
            position: 1
        })
    );
}

#[test]
fn sum_of_three_numbers_rejects_values_wider_than_int() {
    let err = sum3("[3000000000,0,0]\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<DriverError>(),
        Some(&DriverError::InvalidInteger {
            record: 0,
            text: "3000000000".to_owned()
        })
    );
}

#[test]
fn sum_of_three_numbers_with_two_values_prints_nothing() {
    let (outcome, out, _) = sum3("[1,2]\n").unwrap();
    assert_eq!(outcome, Outcome::Skipped(Skip::MissingArguments));
    assert_eq!(out, "");
}

#[test]
fn sum_of_three_numbers_unbalanced_bracket_fails() {
    let err = sum3("[1,2,3\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<DriverError>(),
        Some(&DriverError::InvalidInteger {
            record: 0,
            text: "[1".to_owned()
        })
    );
}

#[test]
fn sum_of_three_numbers_empty_stdin_prints_nothing() {
    let (outcome, out, _) = sum3("").unwrap();
    assert_eq!(
        outcome,
        Outcome::Skipped(Skip::Truncated {
            required: 1,
            available: 0
        })
    );
    assert_eq!(out, "");
}

#[test]
fn truncation_can_be_surfaced() {
    let err = run(
        SumOfThreeNumbers,
        |(a, b, c): (Int, Int, Int)| a + b + c,
        Configuration::new().with_fail_on_truncation(true),
        "",
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DriverError>(),
        Some(DriverError::InputTruncated { .. })
    ));
}

#[test]
fn two_sum_prints_bracketed_pair_without_newline() {
    let (outcome, out, _) = two_sum("[2,7,11,15]\n9\n").unwrap();
    assert_eq!(outcome, Outcome::Answered);
    assert_eq!(out, "[0,1]");
}

#[test]
fn two_sum_accepts_crlf_and_missing_final_newline() {
    assert_eq!(two_sum("[3,2,4]\r\n6").unwrap().1, "[1,2]");
}

#[test]
fn two_sum_empty_list() {
    let mut seen = None;
    let solution = |(nums, target): (Vec<Int>, Int)| {
        seen = Some((nums, target));
        vec![]
    };
    let (_, out, _) = run(TwoSum, solution, Configuration::new(), "[]\n0\n").unwrap();
    assert_eq!(out, "[]");
    assert_eq!(seen, Some((vec![], 0)));
}

#[test]
fn two_sum_missing_target_prints_nothing() {
    let (outcome, out, _) = two_sum("[2,7,11,15]\n").unwrap();
    assert_eq!(
        outcome,
        Outcome::Skipped(Skip::Truncated {
            required: 2,
            available: 1
        })
    );
    assert_eq!(out, "");
}

#[test]
fn two_sum_bad_target_aborts() {
    let err = two_sum("[2,7]\nnine\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<DriverError>(),
        Some(&DriverError::InvalidInteger {
            record: 1,
            text: "nine".to_owned()
        })
    );
}

#[test]
fn two_sum_unbalanced_bracket_aborts() {
    let err = two_sum("[2,7,11\n9\n").unwrap_err();
    assert_eq!(
        err.downcast_ref::<DriverError>(),
        Some(&DriverError::UnbalancedBrackets { record: 0 })
    );
}

#[test]
fn solution_is_not_called_on_decode_failure() {
    let mut called = false;
    let solution = |_: (Vec<Int>, Int)| {
        called = true;
        vec![]
    };
    assert!(run(TwoSum, solution, Configuration::new(), "[1,x]\n2\n").is_err());
    assert!(!called);
}

#[test]
fn sum_two_numbers_swallows_decode_errors() {
    let solution = |(a, b): (Int, Int)| a + b;
    let (outcome, out, err) = run(SumTwoNumbers, solution, Configuration::new(), "[1,a]\n").unwrap();
    assert!(matches!(outcome, Outcome::Skipped(Skip::DecodeIgnored(_))));
    assert_eq!(out, "");
    assert_eq!(err, "");

    let (_, out, _) = run(SumTwoNumbers, solution, Configuration::new(), " [4, 5] \n").unwrap();
    assert_eq!(out, "9\n");
}

#[test]
fn sum_two_numbers_empty_leading_or_middle_segment_prints_nothing() {
    let solution = |(a, b): (Int, Int)| a + b;
    for input in ["[1,,2]\n", "[,1,2]\n"] {
        let (outcome, out, _) = run(SumTwoNumbers, solution, Configuration::new(), input).unwrap();
        assert!(
            matches!(
                outcome,
                Outcome::Skipped(Skip::DecodeIgnored(DriverError::EmptySegment { .. }))
            ),
            "{input:?}: {outcome:?}"
        );
        assert_eq!(out, "", "{input:?}");
    }
}

#[test]
fn sum_two_numbers_parses_only_first_two_segments() {
    let solution = |(a, b): (Int, Int)| a + b;
    for input in ["[1,2,x]\n", "[1,2,,]\n", "1,2,3\n"] {
        let (outcome, out, _) = run(SumTwoNumbers, solution, Configuration::new(), input).unwrap();
        assert_eq!(outcome, Outcome::Answered, "{input:?}");
        assert_eq!(out, "3\n", "{input:?}");
    }
}

#[test]
fn sum_of_two_numbers_reads_json() {
    let solution = |(a, b): (Int, Int)| a + b;
    let (outcome, out, _) =
        run(SumOfTwoNumbers, solution, Configuration::new(), "[1, 2]\n").unwrap();
    assert_eq!(outcome, Outcome::Answered);
    assert_eq!(out, "3\n");

    let (outcome, out, _) = run(SumOfTwoNumbers, solution, Configuration::new(), "\n").unwrap();
    assert_eq!(outcome, Outcome::Skipped(Skip::EmptyInput));
    assert_eq!(out, "");
}

#[test]
fn sum_of_two_numbers_reports_bad_json_on_error_stream() {
    let solution = |(a, b): (Int, Int)| a + b;
    let (outcome, out, err) =
        run(SumOfTwoNumbers, solution, Configuration::new(), "[1, two]").unwrap();
    assert!(matches!(outcome, Outcome::Reported(DriverError::MalformedJson { .. })));
    assert_eq!(out, "");
    assert!(err.starts_with("Error: record 0: malformed JSON array"), "{err}");
}

struct Product;

impl Problem for Product {
    type Args = (Vec<Int>, Vec<Int>);
    type Answer = Vec<Int>;

    fn name(&self) -> &'static str {
        "pairwise_product"
    }

    fn schema(&self) -> Schema {
        Schema::lines()
            .with_sequence(BracketPolicy::Matched, SegmentPolicy::Strict)
            .with_sequence(BracketPolicy::Matched, SegmentPolicy::Strict)
            .with_output(OutputFormat {
                bracketed: true,
                newline: true,
            })
            .with_decode_failure(DecodeFailure::Abort)
    }

    fn bind(&self, values: Vec<Value>) -> Option<Self::Args> {
        let mut values = values.into_iter();
        Some((values.next()?.into_sequence()?, values.next()?.into_sequence()?))
    }

    fn answer(&self, answer: Vec<Int>) -> Value {
        Value::Sequence(answer)
    }
}

#[test]
fn custom_problem_with_two_sequences() {
    let solution = |(a, b): (Vec<Int>, Vec<Int>)| -> Vec<Int> {
        a.iter().zip(&b).map(|(x, y)| x * y).collect()
    };
    let (_, out, _) = run(Product, solution, Configuration::new(), "[1,2,3]\n4,5,6\n").unwrap();
    assert_eq!(out, "[4,10,18]\n");
}

#[test]
fn answer_goes_to_output_only() {
    let mut driver = Driver::new(
        SumOfThreeNumbers,
        |(a, b, c): (Int, Int, Int)| a * b * c,
        Configuration::new(),
    )
    .unwrap();
    let mut out = Vec::new();
    driver
        .run(Cursor::new("2,3,4"), &mut out, &mut io::sink())
        .unwrap();
    assert_eq!(out, b"24\n");
}
