use std::fs;

use opcalc::{
    calculate,
    error::{Error, ParseError, RuntimeError},
    interpreter::calculator::Calculator,
};
use walkdir::WalkDir;

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, expression, expected) in extract_cases(&content) {
            count += 1;
            let result = calculate(expression);
            match expected {
                Some(expected) => match result {
                    Ok(value) => assert!(close(value, expected),
                                         "{path:?}:{line_number}: `{expression}` gave {value}, expected {expected}"),
                    Err(e) => panic!("{path:?}:{line_number}: `{expression}` failed: {e}"),
                },
                None => assert!(result.is_err(),
                                "{path:?}:{line_number}: `{expression}` succeeded with {result:?} but was expected to fail"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Yields `(line, expression, expected)` for each case line; `None` means
/// the expression must fail.
fn extract_cases(content: &str) -> Vec<(usize, &str, Option<f64>)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| {
               let trimmed = line.trim();
               !trimmed.is_empty() && !trimmed.starts_with("//")
           })
           .map(|(i, line)| {
               let (expression, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("line {} has no `=>`: {line}", i + 1));
               let expected = match expected.trim() {
                   "error" => None,
                   number => Some(number.parse::<f64>()
                                        .unwrap_or_else(|e| panic!("line {}: bad expected value: {e}", i + 1))),
               };
               (i + 1, expression.trim(), expected)
           })
           .collect()
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert!(close(value, expected), "`{src}` gave {value}, expected {expected}"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match calculate(src) {
        Ok(value) => panic!("`{src}` succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn end_to_end_scenario() {
    assert_value("(3+5)*2-4/2^2+((10-10)*5)", 15.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2^2^3", 256.0);
    assert_value("(2^2)^3", 64.0);
}

#[test]
fn minus_disambiguation() {
    assert_value("-1+7", 6.0);
    assert_value("--3!", 6.0);
    assert_value("2---3!", -4.0);
    assert!(calculate("~--3!").is_err());
    assert!(matches!(assert_failure("~~3"),
                     Error::Parse(ParseError::UnaryMishandle { index: 1 })));
    assert_eq!(assert_failure("2*-"), Error::Parse(ParseError::UnaryMishandle { index: 2 }));
    assert_eq!(assert_failure("--"), Error::Parse(ParseError::UnaryMishandle { index: 1 }));
}

#[test]
fn prefix_negation_then_factorial_groups_left() {
    // `~3!` is `(~3)!`: the postfix operator pops the prefix one.
    assert_eq!(assert_failure("~3!"),
               Error::Runtime(RuntimeError::FactorialDomain { value: -3.0 }));
    assert_value("~(3!)", -6.0);
    assert_value("-3!", -6.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("5/0"), Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(assert_failure("5%0"), Error::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn factorial_domain_is_checked() {
    assert_eq!(assert_failure("(-3)!"),
               Error::Runtime(RuntimeError::FactorialDomain { value: -3.0 }));
    assert_eq!(assert_failure("2.5!"),
               Error::Runtime(RuntimeError::FactorialDomain { value: 2.5 }));
    assert_value("3!", 6.0);
}

#[test]
fn non_finite_results_are_errors() {
    assert_eq!(assert_failure("171!"),
               Error::Runtime(RuntimeError::NotFinite { symbol: "!".to_string() }));
    assert_eq!(assert_failure("10^400"),
               Error::Runtime(RuntimeError::NotFinite { symbol: "^".to_string() }));
}

#[test]
fn empty_and_whitespace_input_is_error() {
    for src in ["", "                  ", " \t   ", "()"] {
        assert_eq!(assert_failure(src), Error::Runtime(RuntimeError::EmptyExpression));
    }
}

#[test]
fn placement_errors() {
    assert_eq!(assert_failure("3^*2"),
               Error::Parse(ParseError::Placement { symbol: "*".to_string(),
                                                    index:  2, }));
    assert_eq!(assert_failure("/2-3#"),
               Error::Parse(ParseError::Placement { symbol: "/".to_string(),
                                                    index:  0, }));
    for src in ["5-*/2", "/23+", "$332*"] {
        assert!(matches!(assert_failure(src), Error::Parse(ParseError::Placement { .. })),
                "`{src}`");
    }
}

#[test]
fn gibberish_is_illegal() {
    assert_eq!(assert_failure("bfhfguyg636g8f8h91&^#&@#*&8"),
               Error::Parse(ParseError::IllegalCharacter { character: 'b',
                                                           index:     0, }));
}

#[test]
fn parentheses_must_balance() {
    assert_eq!(assert_failure("(1+2"), Error::Parse(ParseError::TooManyLeftParentheses));
    assert_eq!(assert_failure("((1)"), Error::Parse(ParseError::TooManyLeftParentheses));
    assert_eq!(assert_failure("1+2)"), Error::Parse(ParseError::TooManyRightParentheses));
    assert_eq!(assert_failure(")("), Error::Parse(ParseError::TooManyRightParentheses));
}

#[test]
fn errors_surface_in_scan_order() {
    // The unmatched `)` is reached before the illegal character.
    assert_eq!(assert_failure("1)+b"), Error::Parse(ParseError::TooManyRightParentheses));
    assert!(matches!(assert_failure("b+1)"),
                     Error::Parse(ParseError::IllegalCharacter { character: 'b', .. })));
}

#[test]
fn operand_count_is_checked() {
    assert_eq!(assert_failure("2+"),
               Error::Runtime(RuntimeError::InsufficientOperands { symbol:   "+".to_string(),
                                                                   expected: 2,
                                                                   found:    1, }));
    assert_eq!(assert_failure("(2)(3)"),
               Error::Runtime(RuntimeError::MalformedExpression { remaining: 2 }));
}

#[test]
fn digit_sum_ignores_decimal_point() {
    assert_value("123.123#", 12.0);
    assert_value("56#", 11.0);
}

#[test]
fn digit_sum_reads_plain_decimal_rendering() {
    // Large and small magnitudes render without an exponent.
    assert_value("99999999999999999999999#", 1.0);
    assert_value("0.0000001#", 1.0);
    assert_value("(0.1+0.2)#", 7.0);
}

#[test]
fn repeated_evaluation_is_identical() {
    let calculator = Calculator::new();
    for src in ["(3+5)*2-4/2^2", "2---3!", "1.5 @ 4.5", "16^0.5"] {
        let first = calculator.calculate(src).unwrap();
        let second = calculator.calculate(src).unwrap();
        assert_eq!(first.to_bits(), second.to_bits(), "`{src}`");
    }
    assert_eq!(calculator.calculate("~~3"), calculator.calculate("~~3"));
}

#[test]
fn calculator_is_shared_across_threads() {
    let calculator = Calculator::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8).map(|n| {
                                         let calculator = &calculator;
                                         scope.spawn(move || calculator.calculate(&format!("{n}!")))
                                     })
                                     .collect();

        let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
        assert_eq!(results, vec![1.0, 2.0, 6.0, 24.0, 120.0, 720.0, 5040.0, 40320.0]);
    });
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(assert_failure("2+x").to_string(),
               "Error at index 2: Illegal character 'x'.");
    assert_eq!(assert_failure("5/0").to_string(), "Error: Division by zero.");
    assert_eq!(assert_failure("1.2.3").to_string(),
               "Error at index 0: Invalid number '1.2.3'.");
}
