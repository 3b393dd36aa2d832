use std::io::{BufRead, Write};

use log::trace;

use crate::{
    error::SyntaxError,
    interpreter::{
        core::{ExecResult, Interpreter},
        keywords::Construct,
        lexer::{reject_unrecognized, tokenize},
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statement,
            stream::TokenStream,
        },
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Runs a program whose blocks are wrapped in `{` and `}`.
    ///
    /// The whole source is tokenized at once and any unrecognized character
    /// is reported before the first statement runs. Statements then execute
    /// one after another from a single token stream.
    pub(crate) fn run_braces(&mut self, source: &str) -> ExecResult<()> {
        let tokens = tokenize(source, &self.config.comment_marker, 1);
        reject_unrecognized(&tokens)?;

        let mut stream = TokenStream::new(&tokens);
        while !stream.at_end() {
            self.execute_braced_statement(&mut stream)?;
        }
        Ok(())
    }

    /// Executes the statement at the stream's position.
    ///
    /// `if` and `while` are handled here together with their blocks. Every
    /// other statement is parsed, checked for its `;`, and only then
    /// executed.
    fn execute_braced_statement(&mut self, stream: &mut TokenStream<'_>) -> ExecResult<()> {
        let head = stream.peek();
        if head.is_end_of_input() {
            return Ok(());
        }

        let construct = self.keywords.classify(head, stream.peek_second());
        trace!("line {}: {construct} statement", head.line);

        match construct {
            Construct::If => self.braced_if(stream),
            Construct::While => self.braced_while(stream),
            _ => {
                let statement = parse_statement(construct, stream)?;
                stream.expect_terminator()?;
                self.execute(&statement)?;
                Ok(())
            },
        }
    }

    /// `if guard { ... } [else { ... }]`
    ///
    /// Exactly one of the two blocks runs; the other is skipped by counting
    /// braces, so the stream always ends up after the last block.
    fn braced_if(&mut self, stream: &mut TokenStream<'_>) -> ExecResult<()> {
        stream.next();
        let guard = parse_expression(stream)?;
        let open = stream.expect_operator("{")?;
        let taken = self.environment.eval(&guard)?.is_truthy();

        if taken {
            self.execute_block(stream, open.line)?;
        } else {
            skip_block(stream, open.line)?;
        }

        if self.keywords.is_keyword(stream.peek(), Construct::Else) {
            stream.next();
            let open = stream.expect_operator("{")?;
            if taken {
                skip_block(stream, open.line)?;
            } else {
                self.execute_block(stream, open.line)?;
            }
        }
        Ok(())
    }

    /// `while guard { ... }`
    ///
    /// The guard is parsed once and evaluated before every pass. Each pass
    /// re-enters the body at its first token. When the guard fails the body
    /// is skipped from the same position, so a guard that is false from the
    /// start runs the body zero times.
    fn braced_while(&mut self, stream: &mut TokenStream<'_>) -> ExecResult<()> {
        stream.next();
        let guard = parse_expression(stream)?;
        let open = stream.expect_operator("{")?;
        let body = stream.position();

        let mut passes = 0_usize;
        while self.environment.eval(&guard)?.is_truthy() {
            stream.seek(body);
            self.execute_block(stream, open.line)?;
            passes += 1;
        }
        trace!("line {}: loop ran {passes} times", open.line);

        stream.seek(body);
        skip_block(stream, open.line)?;
        Ok(())
    }

    /// Executes statements up to and including the `}` that closes the block
    /// opened on line `opened_at`.
    fn execute_block(&mut self, stream: &mut TokenStream<'_>, opened_at: usize) -> ExecResult<()> {
        loop {
            let token = stream.peek();
            if token.is_operator("}") {
                stream.next();
                return Ok(());
            }
            if token.is_end_of_input() {
                return Err(SyntaxError::UnclosedBlock { line: opened_at }.into());
            }
            self.execute_braced_statement(stream)?;
        }
    }
}

/// Moves past the `}` that closes the block opened on line `opened_at`
/// without executing anything.
///
/// Nested blocks are tracked with a depth counter: `{` increments it, `}`
/// decrements it, and skipping stops when it drops back to zero.
fn skip_block(stream: &mut TokenStream<'_>, opened_at: usize) -> ParseResult<()> {
    let mut depth = 1_usize;

    while depth > 0 {
        let token = stream.next();
        if token.is_end_of_input() {
            return Err(SyntaxError::UnclosedBlock { line: opened_at });
        }
        if token.is_operator("{") {
            depth += 1;
        } else if token.is_operator("}") {
            depth -= 1;
        }
    }
    Ok(())
}
