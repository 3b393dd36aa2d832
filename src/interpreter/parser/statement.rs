use crate::{
    ast::Statement,
    error::SyntaxError,
    interpreter::{
        keywords::{Construct, RESERVED_WORDS},
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_expression},
            stream::{TokenStream, unexpected},
        },
    },
};

/// Contextual word allowed between the two operands of `file_read` and
/// `file_write`.
const TO: &str = "to";

/// Parses one statement that has no block.
///
/// The stream must be positioned at the statement's first token and
/// `construct` must be what the keyword table classified it as. The
/// terminator (`;` or the end of the line) is left for the caller.
///
/// Constructs that cannot be parsed here are reported as errors:
/// - `Else` without a preceding `if` is [`SyntaxError::ElseWithoutIf`].
/// - `For` is [`SyntaxError::NotImplemented`].
/// - `Unknown` is [`SyntaxError::UnknownIdentifier`] for an identifier and
///   [`SyntaxError::UnexpectedToken`] for anything else.
///
/// # Parameters
/// - `construct`: The classification of the statement.
/// - `tokens`: Token stream positioned at the statement's first token.
///
/// # Returns
/// The parsed [`Statement`].
///
/// # Example
/// ```
/// use keylang::{
///     ast::Statement,
///     interpreter::{
///         keywords::Construct,
///         lexer::tokenize,
///         parser::{statement::parse_statement, stream::TokenStream},
///     },
/// };
///
/// let tokens = tokenize(r#"file_read "notes.txt" to text;"#, "#", 1);
/// let mut stream = TokenStream::new(&tokens);
///
/// let statement = parse_statement(Construct::FileRead, &mut stream).unwrap();
/// assert!(matches!(statement, Statement::FileRead { ref name, .. } if name == "text"));
/// assert!(stream.expect_terminator().is_ok());
/// ```
pub fn parse_statement(construct: Construct,
                       tokens: &mut TokenStream<'_>)
                       -> ParseResult<Statement> {
    let head = tokens.next();
    let line = head.line;

    match construct {
        Construct::Assignment => {
            let name = check_target(head.lexeme.clone(), head.line)?;
            let assign = tokens.next();
            if assign.kind != TokenKind::Assign {
                return Err(unexpected(assign, "'='"));
            }
            let value = parse_expression(tokens)?;
            Ok(Statement::Assignment { name,
                                       value,
                                       line })
        },
        Construct::Print => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Print { expr, line })
        },
        Construct::Input => {
            let name = parse_target(tokens)?;
            Ok(Statement::Input { name, line })
        },
        Construct::FileRead => {
            let filename = parse_expression(tokens)?;
            tokens.skip_identifier(TO);
            let name = parse_target(tokens)?;
            Ok(Statement::FileRead { filename,
                                     name,
                                     line })
        },
        Construct::FileWrite => {
            let filename = parse_expression(tokens)?;
            tokens.skip_identifier(TO);
            let content = parse_expression(tokens)?;
            Ok(Statement::FileWrite { filename,
                                      content,
                                      line })
        },
        Construct::Else => Err(SyntaxError::ElseWithoutIf { line }),
        Construct::For => Err(SyntaxError::NotImplemented { construct: head.lexeme.clone(),
                                                            line }),
        Construct::Unknown if head.kind == TokenKind::Identifier => {
            Err(SyntaxError::UnknownIdentifier { name: head.lexeme.clone(),
                                                 line })
        },
        Construct::If | Construct::While | Construct::Unknown => {
            Err(unexpected(head, "a statement"))
        },
    }
}

/// Parses the name of the variable a statement writes to.
fn parse_target(tokens: &mut TokenStream<'_>) -> ParseResult<String> {
    let token = tokens.expect_identifier("a variable name")?;
    check_target(token.lexeme.clone(), token.line)
}

fn check_target(name: String, line: usize) -> ParseResult<String> {
    if RESERVED_WORDS.contains(&name.as_str()) {
        return Err(SyntaxError::UnexpectedToken { expected: "a variable name".into(),
                                                  found: name,
                                                  line });
    }
    Ok(name)
}
