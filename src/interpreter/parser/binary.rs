use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            stream::TokenStream,
            unary::{parse_logical_not, parse_unary},
        },
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for the arithmetic and comparison symbols
/// and for the logical words `and`/`or` and symbols `&&`/`||`.
/// Returns `None` for all other tokens, which is what ends an expression.
///
/// # Example
/// ```
/// use keylang::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let plus = Token::new(TokenKind::Operator, "+", 1);
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
///
/// let word = Token::new(TokenKind::Identifier, "and", 1);
/// assert_eq!(token_to_binary_operator(&word), Some(BinaryOperator::And));
///
/// let brace = Token::new(TokenKind::Operator, "{", 1);
/// assert_eq!(token_to_binary_operator(&brace), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match (token.kind, token.lexeme.as_str()) {
        (TokenKind::Operator, "+") => Some(BinaryOperator::Add),
        (TokenKind::Operator, "-") => Some(BinaryOperator::Sub),
        (TokenKind::Operator, "*") => Some(BinaryOperator::Mul),
        (TokenKind::Operator, "/") => Some(BinaryOperator::Div),
        (TokenKind::Operator, "%") => Some(BinaryOperator::Mod),
        (TokenKind::Operator, "==") => Some(BinaryOperator::Equal),
        (TokenKind::Operator, "!=") => Some(BinaryOperator::NotEqual),
        (TokenKind::Operator, "<") => Some(BinaryOperator::Less),
        (TokenKind::Operator, ">") => Some(BinaryOperator::Greater),
        (TokenKind::Operator, "<=") => Some(BinaryOperator::LessEqual),
        (TokenKind::Operator, ">=") => Some(BinaryOperator::GreaterEqual),
        (TokenKind::Operator, "&&") | (TokenKind::Identifier, "and") => Some(BinaryOperator::And),
        (TokenKind::Operator, "||") | (TokenKind::Identifier, "or") => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Parses one left-associative precedence level.
///
/// Repeatedly consumes an operator accepted by `accepts` followed by an
/// operand parsed with `operand`.
fn parse_left_assoc(tokens: &mut TokenStream<'_>,
                    accepts: fn(BinaryOperator) -> bool,
                    operand: fn(&mut TokenStream<'_>) -> ParseResult<Expr>)
                    -> ParseResult<Expr> {
    let mut left = operand(tokens)?;

    while let Some(op) = token_to_binary_operator(tokens.peek())
          && accepts(op)
    {
        let line = tokens.next().line;
        let right = operand(tokens)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and (("or" | "||") logical_and)*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens, |op| op == BinaryOperator::Or, parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Precedence is higher than OR and lower than `not`.
///
/// Grammar: `logical_and := logical_not (("and" | "&&") logical_not)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens, |op| op == BinaryOperator::And, parse_logical_not)
}

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`. They share one precedence level and
/// associate to the left, so `a < b == c` compares the boolean `a < b` with
/// `c`.
///
/// Grammar: `relational := additive (compare_op additive)*`
pub fn parse_relational(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     |op| {
                         matches!(op,
                                  BinaryOperator::Equal
                                  | BinaryOperator::NotEqual
                                  | BinaryOperator::Less
                                  | BinaryOperator::Greater
                                  | BinaryOperator::LessEqual
                                  | BinaryOperator::GreaterEqual)
                     },
                     parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                     parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     |op| {
                         matches!(op,
                                  BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
                     },
                     parse_unary)
}
