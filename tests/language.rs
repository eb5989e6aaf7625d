use std::{fs, thread};

use glyphic::{
    config::{Config, DEFAULT_MAX_DEPTH},
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::{
            core::Engine,
            function::{core::BUILTIN_FUNCTIONS, output::SharedBuffer},
        },
        lexer::SINGLE_CHAR_FUNCTIONS,
    },
    run_script,
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "apl"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        let buffer = SharedBuffer::default();
        let mut engine = Engine::new().with_output(buffer.clone());
        count += 1;

        if let Err(e) = run_script(&mut engine, &script) {
            panic!("Script {path:?} failed:\n{script}\nError: {e}");
        }
        assert_eq!(buffer.contents(),
                   expected.trim_end(),
                   "Output of {path:?} does not match {expected_path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Evaluates `src` with a fresh engine and returns the formatted result.
fn eval(src: &str) -> String {
    let mut engine = Engine::new();
    let value = engine.eval_string(src)
                      .unwrap_or_else(|e| panic!("Evaluating {src:?} failed: {e}"));
    value.formatted(1)
         .unwrap_or_else(|e| panic!("Formatting the result of {src:?} failed: {e}"))
}

fn eval_error(src: &str) -> Error {
    let mut engine = Engine::new();
    match engine.eval_string(src) {
        Ok(value) => match value.formatted(1) {
            Ok(text) => panic!("{src:?} evaluated to {text:?} but was expected to fail"),
            Err(e) => e.into(),
        },
        Err(e) => e,
    }
}

#[test]
fn scalar_broadcasts_over_vector() {
    assert_eq!(eval("10000 + 1 2 3 4 5"), "10001 10002 10003 10004 10005");
    assert_eq!(eval("1 2 3 + 10"), "11 12 13");
    assert_eq!(eval("10 - 1 2"), "9 8");
}

#[test]
fn parenthesised_vectors_add_elementwise() {
    assert_eq!(eval("(1 2) + (3 4)"), "4 6");
    assert_eq!(eval("1 2 + 3 4"), "4 6");
}

#[test]
fn functions_take_everything_to_their_right() {
    assert_eq!(eval("2 × 3 + 4"), "14");
    assert_eq!(eval("(2 × 3) + 4"), "10");
    assert_eq!(eval("10 - 2 - 3"), "11");
}

#[test]
fn monadic_arithmetic() {
    assert_eq!(eval("- 1 ¯2 3"), "-1 2 -3");
    assert_eq!(eval("+ 5"), "5");
    assert_eq!(eval("× ¯5 0 3"), "-1 0 1");
    assert_eq!(eval("÷ 4"), "0.25");
    assert_eq!(eval("÷ 1"), "1");
}

#[test]
fn division_stays_integral_only_when_exact() {
    assert_eq!(eval("6 ÷ 3"), "2");
    assert_eq!(eval("7 ÷ 2"), "3.5");
    assert_eq!(eval("1 2 3 ÷ 2"), "0.5 1 1.5");
    assert_eq!(eval("(7 ÷ 2) × 2"), "7.0");
}

#[test]
fn iota_and_rho() {
    assert_eq!(eval("⍳ 5"), "0 1 2 3 4");
    assert_eq!(eval("⍳ 0"), "");
    assert_eq!(eval("⍴ ⍳ 7"), "7");
    assert_eq!(eval("2 2 ⍴ 1 2 3 4"), "1 2\n3 4");
    assert_eq!(eval("2 3 ⍴ 1 2"), "1 2 1\n2 1 2");
    assert_eq!(eval("3 ⍴ 9"), "9 9 9");
    assert_eq!(eval("⍴ 2 3 ⍴ 0"), "2 3");
    assert_eq!(eval("(⍳ 0) ⍴ 5"), "5");
    assert_eq!(eval("1 + 2 2 ⍴ ⍳ 4"), "1 2\n3 4");
}

#[test]
fn nested_arrays_are_parenthesised() {
    assert_eq!(eval("1 (2 3)"), "1 (2 3)");
    assert_eq!(eval("(1 2) (3 4) + 10"), "(11 12) (13 14)");
}

#[test]
fn assignment_and_statement_separator() {
    assert_eq!(eval("a ← 1 2 3 ⋄ a × 2"), "2 4 6");
    assert_eq!(eval("a ← 4 ◊ b ← a + 1 ◊ a × b"), "20");
    assert_eq!(eval("(a ← 1 ⋄ a + 1) + 10"), "12");
    assert_eq!(eval("a ← b ← 3 ⋄ a + b"), "6");
    assert_eq!(eval("x ← 5"), "5");
}

#[test]
fn comments_are_ignored() {
    assert_eq!(eval("1 + 2 ⍝ three"), "3");
    assert_success("⍝ only a comment\n\n   \nx ← 1");
}

#[test]
fn variables_persist_across_lines() {
    assert_success("x ← 1 2 3\ny ← x + x\nprint y");
    assert_failure("y ← x + 1\nx ← 1");
}

#[test]
fn print_writes_to_the_output_sink() {
    let buffer = SharedBuffer::default();
    let mut engine = Engine::new().with_output(buffer.clone());

    let value = engine.eval_string("1 + print 2 2 ⍴ ⍳ 4").unwrap();

    assert_eq!(buffer.lines(), vec!["0 1\n2 3".to_string()]);
    assert_eq!(value.formatted(1).unwrap(), "1 2\n3 4");
}

#[test]
fn unbound_variable_names_the_symbol() {
    match eval_error("foo + 1") {
        Error::Runtime(RuntimeError::UnboundVariable { name, line }) => {
            assert_eq!(name, "foo");
            assert_eq!(line, 1);
        },
        other => panic!("Unexpected error {other:?}"),
    }
}

#[test]
fn errors_report_the_failing_line() {
    let mut engine = Engine::new();
    let error = run_script(&mut engine, "a ← 1\n\nb ← a + c").unwrap_err();

    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UnboundVariable { line: 3, .. })));
}

#[test]
fn malformed_literals_fail() {
    assert!(matches!(eval_error("12a"),
                     Error::Parse(ParseError::MalformedNumber { line: 1, .. })));
    assert!(matches!(eval_error("¯ 3"),
                     Error::Parse(ParseError::MalformedNumber { .. })));
    assert!(matches!(eval_error("99999999999999999999"),
                     Error::Parse(ParseError::LiteralTooLarge { .. })));
    assert!(matches!(eval_error("1 $ 2"),
                     Error::Parse(ParseError::UnrecognizedSymbol { symbol: '$', .. })));
    assert!(matches!(eval_error("1 , 2"),
                     Error::Parse(ParseError::UnrecognizedSymbol { symbol: ',', .. })));
    assert!(matches!(eval_error("2²"),
                     Error::Parse(ParseError::UnrecognizedSymbol { symbol: '²', .. })));
}

#[test]
fn decimal_digits_of_any_script_are_numbers() {
    assert_eq!(eval("٣"), "3");
    assert_eq!(eval("١٢ + ¯٣"), "9");
    assert_eq!(eval("⍳ ५"), "0 1 2 3 4");
}

#[test]
fn mismatched_parentheses_fail() {
    assert!(matches!(eval_error("(1 2"),
                     Error::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(eval_error("1 2)"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(eval_error("1 + )"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(eval_error("()"),
                     Error::Parse(ParseError::EmptyStatement { .. })));
    assert!(matches!(eval_error("1 +"),
                     Error::Parse(ParseError::EmptyStatement { .. })));
    assert!(matches!(eval_error("1 ← 2"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn shape_errors() {
    assert!(matches!(eval_error("(1 2) + 1 2 3"),
                     Error::Runtime(RuntimeError::ShapeMismatch { .. })));
    assert!(matches!(eval_error("(1 2) + 2 2 ⍴ 1"),
                     Error::Runtime(RuntimeError::RankMismatch { left: 1,
                                                                 right: 2,
                                                                 .. })));
    assert!(matches!(eval_error("2 2 2 ⍴ 1"),
                     Error::Runtime(RuntimeError::UnsupportedRank { rank: 3, .. })));
    assert!(matches!(eval_error("3 ⍴ ⍳ 0"),
                     Error::Runtime(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(eval_error("1 ÷ 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(eval_error("÷ 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(eval_error("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(eval_error("⍳ ¯1"),
                     Error::Runtime(RuntimeError::InvalidArgument { .. })));
    assert!(matches!(eval_error("⍳ 1 2"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn unsupported_arities_fail() {
    assert!(matches!(eval_error("1 print 2"),
                     Error::Runtime(RuntimeError::UnsupportedArity { arity: 2, .. })));
    assert!(matches!(eval_error("1 ⍳ 2"),
                     Error::Runtime(RuntimeError::UnsupportedArity { arity: 2, .. })));
}

#[test]
fn array_errors_surface_when_elements_are_read() {
    let mut engine = Engine::new();

    let value = engine.eval_string("w ← 1 ÷ 1 0 2").unwrap();

    assert!(matches!(value.formatted(1),
                     Err(RuntimeError::DivisionByZero { line: 1 })));
    assert!(matches!(engine.eval_string("print w"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn deep_nesting_is_rejected() {
    assert_eq!(Config::default().max_depth, DEFAULT_MAX_DEPTH);

    let mut engine = Engine::with_config(Config::new(32, false));
    let source = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert!(matches!(engine.eval_string(&source),
                     Err(Error::Parse(ParseError::NestingTooDeep { max: 32, .. }))));

    let mut engine = Engine::with_config(Config::new(8, false));
    let source = format!("{}1{}", "(".repeat(5), ")".repeat(5));
    assert!(engine.eval_string(&source).is_ok());
    let source = "1 + 1 + 1 + 1 + 1 + 1 + 1 + 1 + 1 + 1";
    assert!(matches!(engine.eval_string(source),
                     Err(Error::Parse(ParseError::NestingTooDeep { max: 8, .. }))));
}

#[test]
fn default_depth_fits_a_small_thread_stack() {
    let depth = DEFAULT_MAX_DEPTH;

    let worker = thread::Builder::new().stack_size(2 * 1024 * 1024)
                                       .spawn(move || {
                                           let groups = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
                                           assert_eq!(eval(&groups), "1");

                                           let sums = format!("{}1", "1 + ".repeat(depth));
                                           assert_eq!(eval(&sums), (depth + 1).to_string());

                                           let vectors = format!("{}1 2", "1 2 + ".repeat(depth));
                                           assert_eq!(eval(&vectors), format!("{} {}", depth + 1, 2 * (depth + 1)));

                                           let too_deep = format!("{}1", "1 + ".repeat(depth + 1));
                                           assert!(matches!(Engine::new().eval_string(&too_deep),
                                                            Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
                                       })
                                       .unwrap();

    worker.join().unwrap();
}

#[test]
fn repeated_assignment_keeps_views_shallow() {
    let mut engine = Engine::with_config(Config::new(4, false));
    engine.eval_string("v ← 1 2").unwrap();

    for _ in 0..10 {
        engine.eval_string("v ← v + 1").unwrap();
    }

    let v = engine.intern_symbol("v");
    let value = engine.lookup_var(&v).unwrap();
    assert!(value.depth() <= 4);
    assert_eq!(value.formatted(1).unwrap(), "11 12");
}

#[test]
fn builtins_are_registered() {
    let mut engine = Engine::new();

    for name in BUILTIN_FUNCTIONS {
        let symbol = engine.intern_symbol(name);
        assert!(engine.function(&symbol).is_some(), "'{name}' is not bound");
    }
    let symbol = engine.intern_symbol("foo");
    assert!(engine.function(&symbol).is_none());

    for glyph in SINGLE_CHAR_FUNCTIONS {
        assert!(BUILTIN_FUNCTIONS.contains(glyph), "'{glyph}' has no built-in function");
    }
}
