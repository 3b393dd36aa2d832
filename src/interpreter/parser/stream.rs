use crate::{
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind},
};

/// A cursor over a tokenized chunk of source.
///
/// The position is the index of the next unconsumed token. Line breaks are
/// stepped over transparently, and the final end-of-input token is never
/// consumed, so reading past the end keeps returning it.
///
/// The brace interpreter keeps one stream for the whole program and uses
/// [`TokenStream::position`] and [`TokenStream::seek`] to re-enter loop bodies.
/// The indentation interpreter opens a fresh stream per line.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens:   &'a [Token],
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `tokens`.
    ///
    /// `tokens` must end with an end-of-input token, as produced by
    /// [`crate::interpreter::lexer::tokenize`].
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(tokens.last().is_some_and(Token::is_end_of_input),
                      "token stream must end with an end-of-input token");
        Self { tokens,
               position: 0 }
    }

    fn next_significant(&self) -> usize {
        let mut index = self.position;
        while index + 1 < self.tokens.len() && self.tokens[index].kind == TokenKind::Newline {
            index += 1;
        }
        index.min(self.tokens.len() - 1)
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        &self.tokens[self.next_significant()]
    }

    /// Returns the token after the next one without consuming anything.
    #[must_use]
    pub fn peek_second(&self) -> &'a Token {
        let mut lookahead = self.clone();
        lookahead.next();
        lookahead.peek()
    }

    /// Consumes and returns the next token.
    pub fn next(&mut self) -> &'a Token {
        let index = self.next_significant();
        let token = &self.tokens[index];
        self.position = if token.is_end_of_input() { index } else { index + 1 };
        token
    }

    /// Returns `true` once only the end-of-input token is left.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.peek().is_end_of_input()
    }

    /// Returns the current position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor back (or forward) to a position returned by
    /// [`TokenStream::position`].
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.tokens.len() - 1);
    }

    /// Consumes the operator `op` or fails.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] naming `op` when the next token differs.
    pub fn expect_operator(&mut self, op: &str) -> Result<&'a Token, SyntaxError> {
        if self.peek().is_operator(op) {
            Ok(self.next())
        } else {
            Err(unexpected(self.peek(), &format!("'{op}'")))
        }
    }

    /// Consumes an identifier or fails.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] when the next token is not an identifier.
    pub fn expect_identifier(&mut self, expected: &str) -> Result<&'a Token, SyntaxError> {
        if self.peek().kind == TokenKind::Identifier {
            Ok(self.next())
        } else {
            Err(unexpected(self.peek(), expected))
        }
    }

    /// Consumes the statement terminator `;` or fails.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] when the next token is not `;`.
    pub fn expect_terminator(&mut self) -> Result<(), SyntaxError> {
        if self.peek().kind == TokenKind::End {
            self.next();
            Ok(())
        } else {
            Err(unexpected(self.peek(), "';'"))
        }
    }

    /// Fails unless every token has been consumed.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] naming the first leftover token.
    pub fn expect_end_of_input(&self) -> Result<(), SyntaxError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(unexpected(self.peek(), "end of line"))
        }
    }

    /// Consumes the identifier `word` if it comes next.
    pub fn skip_identifier(&mut self, word: &str) -> bool {
        if self.peek().is_identifier(word) {
            self.next();
            true
        } else {
            false
        }
    }
}

/// Builds the error for finding `found` where `expected` was required.
#[must_use]
pub fn unexpected(found: &Token, expected: &str) -> SyntaxError {
    if found.is_end_of_input() {
        SyntaxError::UnexpectedEndOfInput { expected: expected.to_string(),
                                            line:     found.line, }
    } else {
        SyntaxError::UnexpectedToken { expected: expected.to_string(),
                                       found:    found.lexeme.clone(),
                                       line:     found.line, }
    }
}
