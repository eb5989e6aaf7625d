use crate::{
    error::ParseError,
    instruction::Instruction,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Reduces the values collected at one level into a single operand.
///
/// One value is wrapped in [`Instruction::LiteralScalarValue`]; several
/// adjacent values with no function between them form an implicit vector,
/// [`Instruction::Literal1DArray`].
///
/// # Errors
/// Returns `EmptyStatement` when nothing was collected, e.g. for `()` or a
/// function with no right operand.
pub(in crate::interpreter::parser) fn value_list_to_arg(mut args: Vec<Instruction>,
                                                        line: usize)
                                                        -> ParseResult<Instruction> {
    match args.len() {
        0 => Err(ParseError::EmptyStatement { line }),
        1 => {
            let value = args.remove(0);
            Ok(Instruction::LiteralScalarValue { value: Box::new(value) })
        },
        _ => Ok(Instruction::Literal1DArray { elements: args }),
    }
}

/// Fails once the parser recurses deeper than `max_depth`.
pub(in crate::interpreter::parser) const fn check_depth(max_depth: usize,
                                                        depth: usize,
                                                        line: usize)
                                                        -> ParseResult<()> {
    if depth > max_depth {
        return Err(ParseError::NestingTooDeep { max: max_depth,
                                                line });
    }
    Ok(())
}

/// Checks that `token` may end a statement at the level closed by
/// `end_token`.
///
/// # Errors
/// - `ExpectedClosingParen` if the input ends inside a group.
/// - `UnexpectedToken` for a `)` with no open group.
pub(in crate::interpreter::parser) fn check_terminator(token: &Token,
                                                       end_token: &Token,
                                                       line: usize)
                                                       -> ParseResult<()> {
    match token {
        Token::StatementSeparator => Ok(()),
        _ if token == end_token => Ok(()),
        Token::EndOfFile => Err(ParseError::ExpectedClosingParen { line }),
        other => Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                   line }),
    }
}
