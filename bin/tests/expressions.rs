use ast::RpnPrinter;
use itertools::Itertools;
use lazy_regex::regex;
use pretty_assertions::assert_eq;

enum Expectation {
    Rpn(String),
    Error(String),
}

/// Every non-empty line of `suite` is parsed on its own and must carry a
/// trailing `// expect: <rpn>` or `// error: <diagnostics>` annotation.
fn run_suite(suite: &str) {
    let expect_regex = regex!(r"// expect:(.*)$");
    let error_regex = regex!(r"// error: (.*)$");

    for (i, line) in suite.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
        let expectation = if let Some(cap) = expect_regex.captures(line) {
            Expectation::Rpn(cap[1].trim().to_string())
        } else if let Some(cap) = error_regex.captures(line) {
            Expectation::Error(cap[1].to_string())
        } else {
            panic!("line {} has no expectation: {line:?}", i + 1);
        };

        let actual = parser::parse_source(line).map(|expr| RpnPrinter.print(&expr));
        match expectation {
            Expectation::Rpn(expected) => match actual {
                Ok(rpn) => assert_eq!(rpn, expected, "line {}: {line:?}", i + 1),
                Err(e) => panic!("line {}: {line:?} failed to parse:\n{e}", i + 1),
            },
            Expectation::Error(expected) => match actual {
                Ok(rpn) => panic!("line {}: {line:?} unexpectedly parsed as {rpn:?}", i + 1),
                Err(e) => assert_eq!(e.iter().join("\n"), expected, "line {}: {line:?}", i + 1),
            },
        }
    }
}

#[test]
fn precedence() {
    run_suite(include_str!("suite/precedence.lox"));
}

#[test]
fn associativity() {
    run_suite(include_str!("suite/associativity.lox"));
}

#[test]
fn conditional() {
    run_suite(include_str!("suite/conditional.lox"));
}

#[test]
fn comma() {
    run_suite(include_str!("suite/comma.lox"));
}

#[test]
fn literals() {
    run_suite(include_str!("suite/literals.lox"));
}

#[test]
fn comments() {
    run_suite(include_str!("suite/comments.lox"));
}

#[test]
fn errors() {
    run_suite(include_str!("suite/errors.lox"));
}

#[test]
fn multi_line_source_reports_exact_lines() {
    let errors = parser::parse_source("1 +\n\n(2 *\n3").unwrap_err();
    assert_eq!(errors.to_string(), "[line 4] Error at end: Expect ')' after expression.");

    let errors = parser::parse_source("\"one\ntwo\" + #\n").unwrap_err();
    assert_eq!(
        errors.iter().map(|e| e.line.0).collect_vec(),
        vec![2, 3]
    );
}
