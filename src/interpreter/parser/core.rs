use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::parser::{binary::parse_logical_or, stream::TokenStream},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Parsing stops at the first token that cannot continue the expression and
/// leaves it unconsumed. That token is usually `;`, `{` or the end of the
/// line, but it may also be the start of a second expression, as in
/// `file_write "out.txt" "hello";`.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use keylang::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         lexer::tokenize,
///         parser::{core::parse_expression, stream::TokenStream},
///     },
/// };
///
/// let tokens = tokenize("1 + 2 * 3 {", "#", 1);
/// let mut stream = TokenStream::new(&tokens);
///
/// let expr = parse_expression(&mut stream).unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// assert!(stream.peek().is_operator("{"));
/// ```
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_logical_or(tokens)
}
