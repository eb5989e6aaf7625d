use log::trace;
use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        symbol::{Symbol, SymbolTable},
    },
    util::charset::{codepoint_to_string, digit_value, is_letter},
};

/// Glyphs the tokenizer accepts as single-character function names.
///
/// These are the glyphs of the built-in functions. Any other punctuation is an
/// unrecognized symbol.
pub const SINGLE_CHAR_FUNCTIONS: &[&str] = &["+", "-", "×", "÷", "⍳", "⍴"];

/// Represents a lexical token handed to the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of whitespace. Only returned by
    /// [`Tokenizer::next_token_or_space`].
    Whitespace,
    /// End of input; produced repeatedly once the source is exhausted.
    EndOfFile,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `⋄` or `◊`
    StatementSeparator,
    /// `←`
    LeftArrow,
    /// An identifier or function glyph, interned through the engine.
    Symbol(Symbol),
    /// An integer literal such as `42` or `¯7`.
    ParsedLong(i64),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Whitespace => write!(f, "whitespace"),
            Self::EndOfFile => write!(f, "end of input"),
            Self::OpenParen => write!(f, "'('"),
            Self::CloseParen => write!(f, "')'"),
            Self::StatementSeparator => write!(f, "'⋄'"),
            Self::LeftArrow => write!(f, "'←'"),
            Self::Symbol(symbol) => write!(f, "'{symbol}'"),
            Self::ParsedLong(n) => write!(f, "{n}"),
        }
    }
}

/// Failures reported by the raw lexer callbacks.
///
/// `Unrecognized` is what logos produces when no pattern matches at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexicalError {
    /// No token pattern matched.
    #[default]
    Unrecognized,
    /// A digit run was immediately followed by a letter.
    MalformedNumber,
    /// A digit run does not fit in an `i64`.
    LiteralTooLarge,
    /// A punctuation glyph outside [`SINGLE_CHAR_FUNCTIONS`].
    UnregisteredGlyph(char),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexicalError)]
enum RawToken {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("⋄")]
    #[token("◊")]
    StatementSeparator,
    #[token("←")]
    LeftArrow,
    #[regex(r"\p{Nd}+", collect_number)]
    #[regex(r"¯\p{Nd}+", collect_number)]
    Number(i64),
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", |lex| lex.slice().to_owned())]
    Name(String),
    #[regex(r"[^\s\p{L}\p{N}_()¯⋄◊←⍝]", collect_glyph)]
    Glyph(String),
    #[regex(r"⍝[^\n]*", logos::skip)]
    Comment,
    #[regex(r"\s+", count_newlines)]
    Whitespace,
}

/// Parses a possibly negated run of decimal digits from any script,
/// rejecting a letter directly after it.
fn collect_number(lex: &mut logos::Lexer<RawToken>) -> Result<i64, LexicalError> {
    if lex.remainder().chars().next().is_some_and(is_letter) {
        return Err(LexicalError::MalformedNumber);
    }

    let slice = lex.slice();
    let (digits, negative) = match slice.strip_prefix('¯') {
        Some(digits) => (digits, true),
        None => (slice, false),
    };

    // Accumulating towards the sign keeps i64::MIN representable.
    let mut value = 0i64;
    for codepoint in digits.chars() {
        let digit = digit_value(codepoint).map(i64::from)
                                          .ok_or(LexicalError::MalformedNumber)?;
        value = value.checked_mul(10)
                     .and_then(|shifted| {
                         if negative {
                             shifted.checked_sub(digit)
                         } else {
                             shifted.checked_add(digit)
                         }
                     })
                     .ok_or(LexicalError::LiteralTooLarge)?;
    }
    Ok(value)
}

/// Accepts a single glyph only if it names one of the built-in glyph functions.
fn collect_glyph(lex: &mut logos::Lexer<RawToken>) -> Result<String, LexicalError> {
    let Some(codepoint) = lex.slice().chars().next() else {
        return Err(LexicalError::Unrecognized);
    };

    let name = codepoint_to_string(codepoint);
    if SINGLE_CHAR_FUNCTIONS.contains(&name.as_str()) {
        Ok(name)
    } else {
        Err(LexicalError::UnregisteredGlyph(codepoint))
    }
}

fn count_newlines(lex: &mut logos::Lexer<RawToken>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

/// Converts source text into [`Token`]s, one at a time.
///
/// The stream is a single forward pass over the input; build a new
/// `Tokenizer` to scan the same text again. Identifiers and glyphs are
/// interned through the [`SymbolTable`] passed to each call, so the tokenizer
/// never holds a borrow of the engine between tokens.
///
/// # Example
/// ```
/// use glyphic::interpreter::{
///     lexer::{Token, Tokenizer},
///     symbol::SymbolTable,
/// };
///
/// let mut symbols = SymbolTable::default();
/// let mut tokenizer = Tokenizer::new("¯12 + x");
///
/// assert_eq!(tokenizer.next_token(&mut symbols).unwrap(), Token::ParsedLong(-12));
/// let plus = symbols.intern("+");
/// assert_eq!(tokenizer.next_token(&mut symbols).unwrap(), Token::Symbol(plus));
/// let x = symbols.intern("x");
/// assert_eq!(tokenizer.next_token(&mut symbols).unwrap(), Token::Symbol(x));
/// assert_eq!(tokenizer.next_token(&mut symbols).unwrap(), Token::EndOfFile);
/// ```
pub struct Tokenizer<'source> {
    lexer:       logos::Lexer<'source, RawToken>,
    pushed_back: Option<Token>,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer positioned at the start of `source`, line 1.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self::starting_at_line(source, 1)
    }

    /// Creates a tokenizer whose first line is reported as `line`.
    #[must_use]
    pub fn starting_at_line(source: &'source str, line: usize) -> Self {
        Self { lexer:       RawToken::lexer_with_extras(source, LexerExtras { line }),
               pushed_back: None, }
    }

    /// The line the tokenizer is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// Returns `token` from the next call to
    /// [`next_token_or_space`](Self::next_token_or_space).
    ///
    /// The buffer holds a single token, so every push-back must be followed by
    /// a read before the next one.
    pub fn push_back(&mut self, token: Token) {
        debug_assert!(self.pushed_back.is_none(), "push-back buffer already full");
        self.pushed_back = Some(token);
    }

    /// Returns the next token, including [`Token::Whitespace`].
    ///
    /// # Errors
    /// Fails on unrecognized codepoints and malformed numeric literals.
    pub fn next_token_or_space(&mut self, symbols: &mut SymbolTable) -> ParseResult<Token> {
        if let Some(token) = self.pushed_back.take() {
            return Ok(token);
        }

        let Some(raw) = self.lexer.next() else {
            return Ok(Token::EndOfFile);
        };

        let line = self.line();
        let token = match raw {
            Ok(RawToken::OpenParen) => Token::OpenParen,
            Ok(RawToken::CloseParen) => Token::CloseParen,
            Ok(RawToken::StatementSeparator) => Token::StatementSeparator,
            Ok(RawToken::LeftArrow) => Token::LeftArrow,
            Ok(RawToken::Number(n)) => Token::ParsedLong(n),
            Ok(RawToken::Name(name) | RawToken::Glyph(name)) => Token::Symbol(symbols.intern(&name)),
            Ok(RawToken::Whitespace | RawToken::Comment) => Token::Whitespace,
            Err(error) => return Err(self.lexical_error(error, line)),
        };

        trace!("line {line}: {token:?}");
        Ok(token)
    }

    /// Returns the next token, skipping whitespace.
    ///
    /// # Errors
    /// Fails on unrecognized codepoints and malformed numeric literals.
    pub fn next_token(&mut self, symbols: &mut SymbolTable) -> ParseResult<Token> {
        loop {
            let token = self.next_token_or_space(symbols)?;
            if token != Token::Whitespace {
                return Ok(token);
            }
        }
    }

    fn lexical_error(&self, error: LexicalError, line: usize) -> ParseError {
        let slice = self.lexer.slice();

        match error {
            LexicalError::MalformedNumber => {
                ParseError::MalformedNumber { details: format!("'{slice}' is followed by a letter"),
                                              line }
            },
            LexicalError::LiteralTooLarge => ParseError::LiteralTooLarge { line },
            LexicalError::UnregisteredGlyph(symbol) => {
                ParseError::UnrecognizedSymbol { symbol, line }
            },
            LexicalError::Unrecognized => match slice.chars().next() {
                Some('¯') => {
                    ParseError::MalformedNumber { details: "negation sign not followed by a number".to_string(),
                                                  line }
                },
                Some(symbol) => ParseError::UnrecognizedSymbol { symbol, line },
                None => ParseError::UnexpectedToken { token: Token::EndOfFile.to_string(),
                                                      line },
            },
        }
    }
}
