use glyphic::{
    error::{ParseError, RuntimeError},
    instruction::Instruction,
    interpreter::evaluator::core::Engine,
};

fn number(value: i64) -> Instruction {
    Instruction::LiteralNumber { value }
}

fn scalar(value: Instruction) -> Instruction {
    Instruction::LiteralScalarValue { value: Box::new(value) }
}

#[test]
fn adjacent_values_form_a_vector() {
    let mut engine = Engine::new();

    assert_eq!(engine.parse_string("7").unwrap(), scalar(number(7)));
    assert_eq!(engine.parse_string("1 ¯2 3").unwrap(),
               Instruction::Literal1DArray { elements: vec![number(1), number(-2), number(3)] });
}

#[test]
fn functions_bind_to_the_right() {
    let mut engine = Engine::new();
    let times = engine.intern_symbol("×");
    let plus = engine.intern_symbol("+");
    let times = engine.function(&times).unwrap();
    let plus = engine.function(&plus).unwrap();

    let tree = engine.parse_string("2 × 3 + 4").unwrap();

    let inner = Instruction::FunctionCall2Arg { function: plus,
                                                left:     Box::new(scalar(number(3))),
                                                right:    Box::new(scalar(number(4))),
                                                line:     1, };
    let expected = Instruction::FunctionCall2Arg { function: times,
                                                   left:     Box::new(scalar(number(2))),
                                                   right:    Box::new(inner),
                                                   line:     1, };
    assert_eq!(tree, expected);
}

#[test]
fn monadic_call_without_left_operand() {
    let mut engine = Engine::new();
    let minus = engine.intern_symbol("-");
    let minus = engine.function(&minus).unwrap();

    let tree = engine.parse_string("- 5").unwrap();

    assert_eq!(tree,
               Instruction::FunctionCall1Arg { function: minus,
                                               right:    Box::new(scalar(number(5))),
                                               line:     1, });
}

#[test]
fn unbound_names_are_variable_references() {
    let mut engine = Engine::new();
    let tree = engine.parse_string("a b").unwrap();
    let a = engine.intern_symbol("a");
    let b = engine.intern_symbol("b");

    assert_eq!(tree,
               Instruction::Literal1DArray { elements: vec![Instruction::VariableRef { symbol: a,
                                                                                       line:   1, },
                                                            Instruction::VariableRef { symbol: b,
                                                                                       line:   1, },] });
}

#[test]
fn assignment_and_statement_lists() {
    let mut engine = Engine::new();
    let tree = engine.parse_string("x ← 1 ⋄ x").unwrap();
    let x = engine.intern_symbol("x");

    let expected =
        Instruction::InstructionList { instructions: vec![Instruction::Assignment { symbol: x.clone(),
                                                                                    value:  Box::new(scalar(number(1))),
                                                                                    line:   1, },
                                                          scalar(Instruction::VariableRef { symbol: x,
                                                                                            line:   1, }),],
                                       line:         1, };
    assert_eq!(tree, expected);
}

#[test]
fn parenthesised_group_nests() {
    let mut engine = Engine::new();
    let tree = engine.parse_string("1 (2 3)").unwrap();

    let group = Instruction::Literal1DArray { elements: vec![number(2), number(3)] };
    assert_eq!(tree,
               Instruction::Literal1DArray { elements: vec![number(1), group] });
}

#[test]
fn registered_functions_are_recognised_while_parsing() {
    let mut engine = Engine::new();

    let before = engine.parse_string("print 1").unwrap();
    assert!(matches!(before, Instruction::FunctionCall1Arg { .. }));

    let tree = engine.parse_string("foo 1").unwrap();
    assert!(matches!(tree, Instruction::Literal1DArray { .. }));
}

#[test]
fn parse_errors_carry_the_line() {
    let mut engine = Engine::new();

    assert!(matches!(engine.parse_line("1 + (2", 4),
                     Err(ParseError::ExpectedClosingParen { line: 4 })));
    assert!(matches!(engine.parse_string(")"),
                     Err(ParseError::UnexpectedToken { line: 1, .. })));
    assert!(matches!(engine.parse_string("1 + )"),
                     Err(ParseError::UnexpectedToken { line: 1, .. })));
    assert!(matches!(engine.parse_string("(1 ⋄ )"),
                     Err(ParseError::EmptyStatement { .. })));
    assert!(matches!(engine.parse_string("(1 +"),
                     Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(engine.parse_string("1 ⋄ ⋄ 2"),
                     Err(ParseError::EmptyStatement { .. })));
    assert!(matches!(engine.parse_string(""),
                     Err(ParseError::EmptyStatement { .. })));
}

#[test]
fn debug_representation_is_stable() {
    let mut engine = Engine::new();
    let tree = engine.parse_string("a ← 1 2 ⋄ 3 + a").unwrap();

    let first = format!("{tree:?}");
    engine.eval(&tree).unwrap();
    engine.eval(&tree).unwrap();
    let second = format!("{tree:?}");

    assert_eq!(first, second);
    assert_eq!(tree, engine.parse_string("a ← 1 2 ⋄ 3 + a").unwrap());
}

#[test]
fn statement_lists_carry_their_line() {
    let mut engine = Engine::new();

    let tree = engine.parse_line("1 ⋄ 2", 5).unwrap();
    assert!(matches!(tree, Instruction::InstructionList { line: 5, .. }));

    let empty = Instruction::InstructionList { instructions: Vec::new(),
                                               line:         3, };
    assert!(matches!(engine.eval(&empty),
                     Err(RuntimeError::InvalidArgument { line: 3, .. })));
}
