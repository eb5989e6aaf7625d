use crate::{
    error::ParseError,
    instruction::Instruction,
    interpreter::{
        evaluator::core::Engine,
        lexer::{Token, Tokenizer},
        parser::utils::{check_depth, check_terminator, value_list_to_arg},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses statements up to `end_token`.
///
/// This is the entry point for parsing a whole program (`end_token` is
/// [`Token::EndOfFile`]) and for parenthesised groups (`end_token` is
/// [`Token::CloseParen`]). Statements are separated by `⋄`; a single statement
/// is returned as-is, several are wrapped in an
/// [`Instruction::InstructionList`].
///
/// Grammar: `toplevel := value ("⋄" value)* end_token`
///
/// # Parameters
/// - `engine`: Supplies the symbol table and the registered functions.
/// - `tokenizer`: Token source, positioned after any opening parenthesis.
/// - `end_token`: The token that closes this level.
/// - `depth`: Current nesting depth, checked against the engine's limit.
///
/// # Errors
/// - `ExpectedClosingParen` if the input ends inside a parenthesised group.
/// - `UnexpectedToken` if a `)` or end of input appears at the wrong level.
/// - Propagates any errors from tokenizing or from [`parse_value`].
pub fn parse_value_toplevel(engine: &mut Engine,
                            tokenizer: &mut Tokenizer<'_>,
                            end_token: &Token,
                            depth: usize)
                            -> ParseResult<Instruction> {
    check_depth(engine.config().max_depth, depth, tokenizer.line())?;

    let mut statements = Vec::new();

    loop {
        let (instruction, last_token) = parse_value(engine, tokenizer, end_token, depth)?;
        statements.push(instruction);

        // parse_value only returns at a separator or at this level's end token.
        if &last_token == end_token {
            if statements.len() == 1
               && let Some(statement) = statements.pop()
            {
                return Ok(statement);
            }
            return Ok(Instruction::InstructionList { instructions: statements,
                                                     line:         tokenizer.line(), });
        }
    }
}

/// Parses a single value, reading right-to-left by recursion.
///
/// Values and variables are collected left to right. When a symbol bound to
/// a function is reached, the rest of the statement is parsed recursively as
/// its right operand and the call is returned immediately; anything gathered
/// so far becomes the left operand. This is what makes `2 × 3 + 4` evaluate
/// as `2 × (3 + 4)`.
///
/// Grammar (simplified):
/// ```text
///     value := name "←" value
///            | item* function value
///            | item+
///     item  := number | name | "(" toplevel ")"
/// ```
///
/// # Returns
/// The parsed instruction together with the token that terminated it: `⋄`
/// or `end_token`.
///
/// # Errors
/// - `UnexpectedToken` for a `)` outside a group, or any other token the
///   grammar does not allow here.
/// - `ExpectedClosingParen` if the input ends inside a group.
/// - `EmptyStatement` if a statement or function operand has no value.
/// - `NestingTooDeep` when the engine's depth limit is exceeded.
pub fn parse_value(engine: &mut Engine,
                   tokenizer: &mut Tokenizer<'_>,
                   end_token: &Token,
                   depth: usize)
                   -> ParseResult<(Instruction, Token)> {
    let mut left_args = Vec::new();

    loop {
        let token = tokenizer.next_token(engine.symbols_mut())?;
        let line = tokenizer.line();

        match token {
            Token::CloseParen | Token::EndOfFile | Token::StatementSeparator => {
                check_terminator(&token, end_token, line)?;
                return Ok((value_list_to_arg(left_args, line)?, token));
            },
            Token::Symbol(symbol) => {
                if let Some(function) = engine.function(&symbol) {
                    check_depth(engine.config().max_depth, depth + 1, line)?;

                    let (right, last_token) = parse_value(engine, tokenizer, end_token, depth + 1)?;
                    let right = Box::new(right);

                    let call = if left_args.is_empty() {
                        Instruction::FunctionCall1Arg { function,
                                                        right,
                                                        line }
                    } else {
                        Instruction::FunctionCall2Arg { function,
                                                        left: Box::new(value_list_to_arg(left_args,
                                                                                         line)?),
                                                        right,
                                                        line }
                    };
                    return Ok((call, last_token));
                }

                if left_args.is_empty() {
                    let next = tokenizer.next_token(engine.symbols_mut())?;
                    if next == Token::LeftArrow {
                        check_depth(engine.config().max_depth, depth + 1, line)?;

                        let (value, last_token) = parse_value(engine, tokenizer, end_token, depth + 1)?;
                        return Ok((Instruction::Assignment { symbol,
                                                             value: Box::new(value),
                                                             line },
                                   last_token));
                    }
                    tokenizer.push_back(next);
                }

                left_args.push(Instruction::VariableRef { symbol, line });
            },
            Token::OpenParen => {
                let group = parse_value_toplevel(engine, tokenizer, &Token::CloseParen, depth + 1)?;
                left_args.push(group);
            },
            Token::ParsedLong(value) => left_args.push(Instruction::LiteralNumber { value }),
            other => {
                return Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                         line });
            },
        }
    }
}
