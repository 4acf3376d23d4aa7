use std::io;

use numera::{
    calculator::{
        confirm::parse_confirmation,
        evaluator::evaluate,
        format::format_result,
        number::parse_number,
        operator::{parse_operator, Operator},
    },
    error::ComputationError,
    run_session,
};

fn transcript(input: &str) -> String {
    let mut output = Vec::new();

    if let Err(e) = run_session(input.as_bytes(), &mut output) {
        panic!("Session failed on input {input:?}: {e}");
    }

    String::from_utf8(output).unwrap_or_else(|e| panic!("Session output was not UTF-8: {e}"))
}

fn assert_in_order(haystack: &str, earlier: &str, later: &str) {
    let first = haystack.find(earlier)
                        .unwrap_or_else(|| panic!("Missing {earlier:?} in:\n{haystack}"));
    let second = haystack.find(later)
                         .unwrap_or_else(|| panic!("Missing {later:?} in:\n{haystack}"));

    assert!(first < second, "{earlier:?} did not precede {later:?} in:\n{haystack}");
}

#[test]
fn evaluator_basic_operations() {
    assert_eq!(evaluate(6.0, Operator::Add, 4.0), Ok(10.0));
    assert_eq!(evaluate(6.0, Operator::Sub, 4.0), Ok(2.0));
    assert_eq!(evaluate(6.0, Operator::Mul, 4.0), Ok(24.0));
    assert_eq!(evaluate(6.0, Operator::Div, 4.0), Ok(1.5));
    assert_eq!(evaluate(2.0, Operator::Pow, 3.0), Ok(8.0));
}

#[test]
fn evaluator_division_by_zero_is_exact() {
    assert_eq!(evaluate(6.0, Operator::Div, 0.0), Err(ComputationError::DivisionByZero));
    assert_eq!(evaluate(0.0, Operator::Div, 0.0), Err(ComputationError::DivisionByZero));

    // A merely tiny divisor is fine; only exact zero is rejected.
    assert!(evaluate(6.0, Operator::Div, 1e-300).is_ok());
}

#[test]
fn evaluator_rejects_non_finite_results() {
    let negative_base = evaluate(-8.0, Operator::Pow, 0.5);
    assert!(matches!(negative_base, Err(ComputationError::NotFinite { .. })),
            "expected a non-finite failure, got {negative_base:?}");

    let overflow = evaluate(1e308, Operator::Mul, 10.0);
    assert!(matches!(overflow, Err(ComputationError::NotFinite { .. })),
            "expected a non-finite failure, got {overflow:?}");
}

#[test]
fn operator_parsing_accepts_every_spelling() {
    assert_eq!(parse_operator("+"), Ok(Operator::Add));
    assert_eq!(parse_operator("-"), Ok(Operator::Sub));
    assert_eq!(parse_operator("*"), Ok(Operator::Mul));
    assert_eq!(parse_operator("/"), Ok(Operator::Div));
    assert_eq!(parse_operator("^"), Ok(Operator::Pow));
    assert_eq!(parse_operator("**"), Ok(Operator::Pow));
    assert_eq!(parse_operator("  *  "), Ok(Operator::Mul));
}

#[test]
fn operator_parsing_rejects_everything_else() {
    assert!(parse_operator("%").is_err());
    assert!(parse_operator("").is_err());
    assert!(parse_operator("plus").is_err());
    assert!(parse_operator("+-").is_err());
    assert!(parse_operator("* *").is_err());
    assert!(parse_operator("***").is_err());
}

#[test]
fn number_parsing_accepts_finite_values() {
    assert_eq!(parse_number("12"), Ok(12.0));
    assert_eq!(parse_number("3.5"), Ok(3.5));
    assert_eq!(parse_number("3,5"), Ok(3.5));
    assert_eq!(parse_number(" -7,25 "), Ok(-7.25));
    assert_eq!(parse_number("0"), Ok(0.0));
    assert_eq!(parse_number("2.1e-10"), Ok(2.1e-10));
}

#[test]
fn number_parsing_rejects_malformed_and_non_finite() {
    assert!(parse_number("").is_err());
    assert!(parse_number("twelve").is_err());
    assert!(parse_number("1 2").is_err());
    assert!(parse_number("12abc").is_err());
    assert!(parse_number("inf").is_err());
    assert!(parse_number("-inf").is_err());
    assert!(parse_number("NaN").is_err());
}

#[test]
fn formatter_collapses_near_integers() {
    assert_eq!(format_result(10.0), "10");
    assert_eq!(format_result(10.000_000_000_000_1), "10");
    assert_eq!(format_result(0.0), "0");
    assert_eq!(format_result(-3.0), "-3");
    assert_eq!(format_result(1e12), "1000000000000");
}

#[test]
fn formatter_keeps_ten_significant_digits() {
    assert_eq!(format_result(1.5), "1.5");
    assert_eq!(format_result(-2.5), "-2.5");
    assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
    assert_eq!(format_result(100.0 / 3.0), "33.33333333");
    assert_eq!(format_result(2.0_f64.sqrt()), "1.414213562");
    assert_eq!(format_result(0.0005), "0.0005");
}

#[test]
fn formatter_switches_to_scientific_for_extremes() {
    assert_eq!(format_result(1e-5), "1e-5");
    assert_eq!(format_result(1e300), "1e300");
    assert_eq!(format_result(2.0_f64.powf(100.0)), "1.2676506e30");
}

#[test]
fn confirmation_answers() {
    for yes in ["y", "Y", "yes", "YES", " Yes "] {
        assert_eq!(parse_confirmation(yes), Ok(true), "{yes:?} should mean yes");
    }
    for no in ["n", "N", "no", "NO"] {
        assert_eq!(parse_confirmation(no), Ok(false), "{no:?} should mean no");
    }
    assert!(parse_confirmation("maybe").is_err());
    assert!(parse_confirmation("").is_err());
}

#[test]
fn session_prints_banner_first() {
    let out = transcript("1\n+\n1\nn\n");

    assert!(out.starts_with("=== CLI Calculator ===\n"), "unexpected transcript:\n{out}");
    assert!(out.contains("Tip: '**' is power (e.g., 2 ** 3 = 8)."));
}

#[test]
fn session_reports_division_by_zero_and_exits_cleanly() {
    let out = transcript("10\n/\n0\nn\n");

    assert_in_order(&out, "Error: Division by zero is not allowed.", "Goodbye!");
    assert!(out.ends_with("Goodbye!\n"), "unexpected transcript:\n{out}");
}

#[test]
fn session_maps_double_star_to_power() {
    let out = transcript("2\n**\n10\nn\n");

    assert_in_order(&out, "Result: 1024", "Goodbye!");
}

#[test]
fn session_reprompts_on_every_invalid_line() {
    let out = transcript("abc\n6\n%\n+\nx\n4\nmaybe\nn\n");

    assert!(out.contains("Invalid number. Please enter a valid numeric value (e.g., 12, 3.5)."));
    assert!(out.contains("Invalid operator. Allowed: +  -  *  /  **"));
    assert!(out.contains("Please answer with 'y' or 'n'."));
    assert!(out.contains("Result: 10"), "reprompting lost the valid input:\n{out}");
}

#[test]
fn session_survives_failures_across_iterations() {
    let out = transcript("6\n+\n4\ny\n-8\n^\n0.5\ny\n6\n/\n4\nn\n");

    assert!(out.contains("Result: 10"));
    assert!(out.contains("Unexpected error: '-8 ** 0.5'"));
    assert_in_order(&out, "Unexpected error:", "Result: 1.5");
}

#[test]
fn session_normalizes_comma_decimals() {
    let out = transcript("1,5\n*\n2\nn\n");

    assert!(out.contains("Result: 3"), "unexpected transcript:\n{out}");
}

#[test]
fn session_fails_with_unexpected_eof_when_input_ends() {
    let mut output = Vec::new();
    let error = run_session(&b"2\n+\n"[..], &mut output)
        .expect_err("a session with exhausted input should not succeed");

    assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
}
