use glyphic::{
    error::ParseError,
    interpreter::{
        lexer::{Token, Tokenizer},
        symbol::SymbolTable,
    },
    util::charset::{add_codepoint, digit_value, is_digit, is_letter, is_whitespace},
};

fn tokens(src: &str) -> Vec<Token> {
    let mut symbols = SymbolTable::default();
    let mut tokenizer = Tokenizer::new(src);
    let mut out = Vec::new();

    loop {
        let token = tokenizer.next_token(&mut symbols)
                             .unwrap_or_else(|e| panic!("Tokenizing {src:?} failed: {e}"));
        if token == Token::EndOfFile {
            return out;
        }
        out.push(token);
    }
}

fn first_error(src: &str) -> ParseError {
    let mut symbols = SymbolTable::default();
    let mut tokenizer = Tokenizer::new(src);

    loop {
        match tokenizer.next_token(&mut symbols) {
            Ok(Token::EndOfFile) => panic!("Tokenizing {src:?} was expected to fail"),
            Ok(_) => {},
            Err(e) => return e,
        }
    }
}

#[test]
fn numbers_and_negation() {
    assert_eq!(tokens("42 ¯7 0"),
               vec![Token::ParsedLong(42), Token::ParsedLong(-7), Token::ParsedLong(0)]);
    assert_eq!(tokens("9223372036854775807"),
               vec![Token::ParsedLong(i64::MAX)]);
    assert_eq!(tokens("¯9223372036854775808"),
               vec![Token::ParsedLong(i64::MIN)]);
}

#[test]
fn punctuation() {
    assert_eq!(tokens("( ) ⋄ ◊ ←"),
               vec![Token::OpenParen,
                    Token::CloseParen,
                    Token::StatementSeparator,
                    Token::StatementSeparator,
                    Token::LeftArrow]);
}

#[test]
fn names_and_glyphs_are_interned() {
    let mut symbols = SymbolTable::default();
    let mut tokenizer = Tokenizer::new("abc←abc⍴x_1");

    let Token::Symbol(first) = tokenizer.next_token(&mut symbols).unwrap() else {
        panic!("expected a symbol");
    };
    assert_eq!(tokenizer.next_token(&mut symbols).unwrap(), Token::LeftArrow);
    let Token::Symbol(second) = tokenizer.next_token(&mut symbols).unwrap() else {
        panic!("expected a symbol");
    };
    let Token::Symbol(rho) = tokenizer.next_token(&mut symbols).unwrap() else {
        panic!("expected a symbol");
    };
    let Token::Symbol(last) = tokenizer.next_token(&mut symbols).unwrap() else {
        panic!("expected a symbol");
    };

    assert_eq!(first, second);
    assert_eq!(first.name(), "abc");
    assert_eq!(rho.name(), "⍴");
    assert_eq!(last.name(), "x_1");
    assert_eq!(symbols.len(), 3);
}

#[test]
fn whitespace_is_reported_only_on_request() {
    let mut symbols = SymbolTable::default();
    let mut tokenizer = Tokenizer::new("1  \t 2");

    assert_eq!(tokenizer.next_token_or_space(&mut symbols).unwrap(), Token::ParsedLong(1));
    assert_eq!(tokenizer.next_token_or_space(&mut symbols).unwrap(), Token::Whitespace);
    assert_eq!(tokenizer.next_token_or_space(&mut symbols).unwrap(), Token::ParsedLong(2));
    assert_eq!(tokenizer.next_token_or_space(&mut symbols).unwrap(), Token::EndOfFile);
}

#[test]
fn end_of_file_repeats() {
    let mut symbols = SymbolTable::default();
    let mut tokenizer = Tokenizer::new("");

    for _ in 0..3 {
        assert_eq!(tokenizer.next_token(&mut symbols).unwrap(), Token::EndOfFile);
    }
}

#[test]
fn push_back_is_returned_first() {
    let mut symbols = SymbolTable::default();
    let mut tokenizer = Tokenizer::new("1 2");

    let one = tokenizer.next_token(&mut symbols).unwrap();
    tokenizer.push_back(one.clone());

    assert_eq!(tokenizer.next_token(&mut symbols).unwrap(), one);
    assert_eq!(tokenizer.next_token(&mut symbols).unwrap(), Token::ParsedLong(2));
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(tokens("1 ⍝ ignored ( 2 $\n3"),
               vec![Token::ParsedLong(1), Token::ParsedLong(3)]);
    assert!(tokens("⍝ nothing").is_empty());
}

#[test]
fn newlines_advance_the_line() {
    let mut symbols = SymbolTable::default();
    let mut tokenizer = Tokenizer::new("1\n\n2");

    tokenizer.next_token(&mut symbols).unwrap();
    assert_eq!(tokenizer.line(), 1);
    tokenizer.next_token(&mut symbols).unwrap();
    assert_eq!(tokenizer.line(), 3);

    let tokenizer = Tokenizer::starting_at_line("1", 7);
    assert_eq!(tokenizer.line(), 7);
}

#[test]
fn lexical_errors() {
    assert!(matches!(first_error("12a"), ParseError::MalformedNumber { line: 1, .. }));
    assert!(matches!(first_error("1 ¯"), ParseError::MalformedNumber { .. }));
    assert!(matches!(first_error("¯x"), ParseError::MalformedNumber { .. }));
    assert!(matches!(first_error("18446744073709551616"),
                     ParseError::LiteralTooLarge { .. }));
    assert!(matches!(first_error("1\n$"),
                     ParseError::UnrecognizedSymbol { symbol: '$', line: 2 }));
    assert!(matches!(first_error("⍺"), ParseError::UnrecognizedSymbol { symbol: '⍺', .. }));
    assert!(matches!(first_error("1 , 2"), ParseError::UnrecognizedSymbol { symbol: ',', .. }));
    assert!(matches!(first_error("²"), ParseError::UnrecognizedSymbol { symbol: '²', .. }));
    assert!(matches!(first_error("٣x"), ParseError::MalformedNumber { .. }));
}

#[test]
fn digits_from_any_script_form_numbers() {
    assert_eq!(tokens("٣"), vec![Token::ParsedLong(3)]);
    assert_eq!(tokens("¯١٢ ४२"), vec![Token::ParsedLong(-12), Token::ParsedLong(42)]);
    assert_eq!(tokens("¯9223372036854775808"), vec![Token::ParsedLong(i64::MIN)]);
}

#[test]
fn character_classes_cover_all_of_unicode() {
    assert!(is_letter('a'));
    assert!(is_letter('λ'));
    assert!(is_letter('𝒜'));
    assert!(!is_letter('1'));
    assert!(!is_letter('⍴'));

    assert!(is_digit('7'));
    assert!(is_digit('٣'));
    assert!(is_digit('𝟘'));
    assert!(!is_digit('x'));
    assert!(!is_digit('²'));
    assert!(!is_digit('½'));
    assert!(!is_digit('Ⅻ'));

    assert_eq!(digit_value('٣'), Some(3));
    assert_eq!(digit_value('९'), Some(9));
    assert_eq!(digit_value('𝟘'), Some(0));
    assert_eq!(digit_value('²'), None);

    assert!(is_whitespace(' '));
    assert!(is_whitespace('\u{3000}'));
    assert!(!is_whitespace('_'));

    let mut buffer = String::from("a");
    add_codepoint(&mut buffer, '𝒜');
    assert_eq!(buffer, "a𝒜");
    assert_eq!(buffer.chars().count(), 2);
}
