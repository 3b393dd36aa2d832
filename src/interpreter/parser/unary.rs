use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::parse_relational,
            core::{ParseResult, parse_expression},
            stream::{TokenStream, unexpected},
        },
    },
};

/// Parses the word form of logical negation.
///
/// `not` binds looser than comparisons, so `not x > 3` negates `x > 3`.
///
/// Grammar: `logical_not := "not" logical_not | relational`
pub fn parse_logical_not(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if tokens.peek().is_identifier("not") {
        let line = tokens.next().line;
        let expr = parse_logical_not(tokens)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                                  expr: Box::new(expr),
                                  line });
    }

    parse_relational(tokens)
}

/// Parses prefix `-` and `!`.
///
/// Grammar: `unary := ("-" | "!") unary | primary`
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.peek();
    let op = if token.is_operator("-") {
        UnaryOperator::Negate
    } else if token.is_operator("!") {
        UnaryOperator::Not
    } else {
        return parse_primary(tokens);
    };

    let line = tokens.next().line;
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses literals, variables and parenthesized expressions.
///
/// - A number literal becomes a floating-point literal.
/// - A string literal loses its surrounding quotes.
/// - `true` and `false` are boolean literals.
/// - Any other identifier is a variable reference.
///
/// # Errors
/// Returns a [`SyntaxError`] if the next token cannot start an expression or
/// a parenthesis is left open.
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.peek();
    let line = token.line;

    match token.kind {
        TokenKind::Number => {
            tokens.next();
            let value = token.lexeme
                             .parse::<f64>()
                             .map_err(|_| unexpected(token, "a number"))?;
            Ok(Expr::Literal { value: LiteralValue::Number(value),
                               line })
        },
        TokenKind::Str => {
            tokens.next();
            let text = &token.lexeme[1..token.lexeme.len() - 1];
            Ok(Expr::Literal { value: text.into(),
                               line })
        },
        TokenKind::Identifier => match token.lexeme.as_str() {
            "true" | "false" => {
                tokens.next();
                Ok(Expr::Literal { value: LiteralValue::Bool(token.lexeme == "true"),
                                   line })
            },
            "and" | "or" | "not" => Err(unexpected(token, "an expression")),
            name => {
                tokens.next();
                Ok(Expr::Variable { name: name.to_string(),
                                    line })
            },
        },
        TokenKind::Operator if token.lexeme == "(" => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            tokens.expect_operator(")")
                  .map_err(|e| match e {
                      SyntaxError::UnexpectedEndOfInput { line: end, .. } => {
                          SyntaxError::UnexpectedEndOfInput { expected: "')'".to_string(),
                                                              line:     end, }
                      },
                      other => other,
                  })?;
            Ok(expr)
        },
        _ => Err(unexpected(token, "an expression")),
    }
}
