use std::fs;

use plotexpr::{
    error::{Error, ParseError, RuntimeError},
    evaluate, evaluate_with,
    interpreter::{
        evaluator::interpret,
        lexer::tokenize,
        parser::{DEFAULT_MAX_DEPTH, ParseOptions, parse},
        symbols::SymbolTable,
        value::{InterpretResult, ResultType},
    },
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let symbols = SymbolTable::extended();
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_plotexpr_blocks(&content).into_iter().enumerate() {
            for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
                count += 1;
                let Some((source, expected)) = line.rsplit_once(" => ") else {
                    panic!("Example {} in {path:?} has no '=>': {line}", i + 1);
                };
                check_example(&symbols, source, expected)
                    .unwrap_or_else(|e| panic!("Example {} in {path:?} failed:\n{line}\n{e}", i + 1));
            }
        }
    }

    assert!(count > 0, "No plotexpr examples found in book/src");
}

fn check_example(symbols: &SymbolTable, source: &str, expected: &str) -> Result<(), String> {
    let result = evaluate(source, symbols);
    match (expected, result) {
        ("error", Err(_)) => Ok(()),
        ("error", Ok(value)) => Err(format!("Expected an error, got {value}")),
        (_, Err(e)) => Err(e.to_string()),
        (_, Ok(value)) => {
            let actual = if expected.ends_with(')') {
                format!("{value} ({})", value.ty)
            } else {
                value.to_string()
            };
            if actual == expected {
                Ok(())
            } else {
                Err(format!("Expected {expected}, got {actual}"))
            }
        },
    }
}

fn extract_plotexpr_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```plotexpr") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> InterpretResult {
    evaluate(src, &SymbolTable::default()).unwrap_or_else(|e| panic!("Expression failed: {src}\n{e}"))
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src, &SymbolTable::default()) {
        Ok(value) => panic!("Expression succeeded with {value} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn literals_round_trip() {
    assert_eq!(eval("42"), InterpretResult::integer(42.0));
    assert_eq!(eval("3.5"), InterpretResult::float(3.5));
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("2+3*4").value, 14.0);
    assert_eq!(eval("(2+3)*4").value, 20.0);
    assert_eq!(eval("2 * (3 + 4) - 5").value, 9.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(eval("2^3^2").value, 512.0);
}

#[test]
fn implicit_multiplication_with_a_constant() {
    let result = eval("2pi");
    assert!((result.value - 6.283_185_3).abs() < 1e-7);
    assert_eq!(result.ty, ResultType::Float);
}

#[test]
fn function_application() {
    assert_eq!(eval("sin(0)").value, 0.0);
    assert_eq!(eval("cos(0)").value, 1.0);
    assert_eq!(eval("tan(0)").value, 0.0);
}

#[test]
fn unary_minus() {
    assert_eq!(eval("-5+3").value, -2.0);
}

#[test]
fn unknown_identifier_is_reported() {
    assert_eq!(assert_failure("foo"),
               Error::Runtime(RuntimeError::UnknownIdentifier { name:   "foo".to_string(),
                                                                line:   1,
                                                                column: 1, }));

    let tree = parse(tokenize("1 + foo")).unwrap();
    assert!(matches!(interpret(&tree, &SymbolTable::default()),
                     Err(RuntimeError::UnknownIdentifier { .. })));
}

#[test]
fn kind_follows_the_computed_value() {
    assert_eq!(eval("4.0/2.0"), InterpretResult::integer(2.0));
    assert_eq!(eval("1/3").ty, ResultType::Float);
}

#[test]
fn tokenizing_is_deterministic() {
    let input = "2pi + |sin(0.5)| * 3\n- e";
    let first: Vec<_> = tokenize(input).collect();
    let second: Vec<_> = tokenize(input).collect();
    assert_eq!(first, second);
}

#[test]
fn trees_are_reusable() {
    let symbols = SymbolTable::default();
    let tree = parse(tokenize("cos(0) + 2pi")).unwrap();
    let first = interpret(&tree, &symbols).unwrap();
    let second = interpret(&tree, &symbols).unwrap();
    assert_eq!(first, second);
}

#[test]
fn independent_symbol_tables() {
    let metric = SymbolTable::builder().constant("g", InterpretResult::float(9.81))
                                       .build();
    let imperial = SymbolTable::builder().constant("g", InterpretResult::float(32.17))
                                         .build();

    assert_eq!(evaluate("2g", &metric).unwrap().value, 19.62);
    assert_eq!(evaluate("2g", &imperial).unwrap().value, 64.34);
    assert!(evaluate("pi", &metric).is_err());
}

#[test]
fn syntax_errors_in_strict_mode() {
    assert!(matches!(assert_failure("(1+2"),
                     Error::Parse(ParseError::UnmatchedDelimiter { delimiter: '(', .. })));
    assert!(matches!(assert_failure("3 * |x"),
                     Error::Parse(ParseError::UnmatchedDelimiter { delimiter: '|', .. })));
    assert!(matches!(assert_failure("2 *"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("2 ) 3"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(assert_failure("^2"), Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn lenient_mode_recovers() {
    let symbols = SymbolTable::default();
    let lenient = ParseOptions::lenient();

    assert_eq!(evaluate_with("2*(1+2", &symbols, lenient).unwrap().value, 6.0);
    assert_eq!(evaluate_with("|-4", &symbols, lenient).unwrap().value, 4.0);
    assert_eq!(evaluate_with("5-", &symbols, lenient).unwrap().value, 5.0);
    assert_eq!(evaluate_with("1 % 2", &symbols, lenient).unwrap().value, 1.0);
}

#[test]
fn evaluation_errors() {
    assert!(matches!(assert_failure("1.2.3"),
                     Error::Runtime(RuntimeError::InvalidLiteral { .. })));
    assert!(matches!(assert_failure("2 + sin"),
                     Error::Runtime(RuntimeError::MissingArgument { .. })));
}

#[test]
fn empty_input_is_zero() {
    assert_eq!(eval(""), InterpretResult::integer(0.0));
    assert_eq!(eval("   "), InterpretResult::integer(0.0));
}

#[test]
fn extreme_inputs_are_reported_not_fatal() {
    let sum = vec!["1"; 200_000].join("+");
    assert!(matches!(assert_failure(&sum),
                     Error::Parse(ParseError::TooDeeplyNested { limit: DEFAULT_MAX_DEPTH, .. })));

    let parens = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert!(matches!(assert_failure(&parens),
                     Error::Parse(ParseError::TooDeeplyNested { limit: DEFAULT_MAX_DEPTH, .. })));

    let lenient = ParseOptions::lenient();
    assert!(evaluate_with(&"(".repeat(200_000), &SymbolTable::default(), lenient).is_err());
}

#[test]
fn expressions_up_to_the_depth_limit_evaluate() {
    let sum = vec!["1"; DEFAULT_MAX_DEPTH].join("+");
    assert_eq!(eval(&sum), InterpretResult::integer(DEFAULT_MAX_DEPTH as f64));

    let nested = format!("{}2{}", "(-".repeat(100), ")".repeat(100));
    assert_eq!(eval(&nested).value, 2.0);
}

#[test]
fn error_messages() {
    assert_eq!(assert_failure("(1+2").to_string(),
               "Error on line 1, column 1: Delimiter '(' is never closed.");
}
