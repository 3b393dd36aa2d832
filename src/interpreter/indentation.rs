use std::io::{BufRead, Write};

use log::trace;

use crate::{
    error::SyntaxError,
    interpreter::{
        core::{ExecResult, Interpreter},
        keywords::Construct,
        lexer::{Token, reject_unrecognized, tokenize},
        parser::{
            core::parse_expression,
            statement::parse_statement,
            stream::TokenStream,
        },
    },
};

/// One non-blank physical line of an indentation-style program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number.
    pub number: usize,
    /// Indentation level (leading width divided by the indent width).
    pub depth:  usize,
    /// The line's tokens, ending with an end-of-input token.
    pub tokens: Vec<Token>,
}

/// Tokenizes a program line by line.
///
/// Blank and comment-only lines are dropped. A tab counts as `indent_width`
/// columns.
///
/// # Errors
/// - [`SyntaxError::UnrecognizedCharacter`] for the first character no token
///   matches, anywhere in the program.
/// - [`SyntaxError::InconsistentIndentation`] for a line whose leading width
///   is not a multiple of `indent_width`.
///
/// # Example
/// ```
/// use keylang::interpreter::indentation::load_lines;
///
/// let lines = load_lines("x = 1\n\n# note\nif x\n    print x\n", "#", 4).unwrap();
///
/// let shape: Vec<_> = lines.iter().map(|l| (l.number, l.depth)).collect();
/// assert_eq!(shape, [(1, 0), (4, 0), (5, 1)]);
///
/// assert!(load_lines("if x\n  print x\n", "#", 4).is_err());
/// ```
pub fn load_lines(source: &str,
                  comment_marker: &str,
                  indent_width: usize)
                  -> Result<Vec<SourceLine>, SyntaxError> {
    let mut lines = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let number = index + 1;
        let tokens = tokenize(text, comment_marker, number);
        reject_unrecognized(&tokens)?;

        if tokens.len() == 1 {
            continue;
        }

        let width = text.chars()
                        .take_while(|c| matches!(c, ' ' | '\t'))
                        .fold(0_usize, |width, c| {
                            width.saturating_add(if c == '\t' { indent_width } else { 1 })
                        });
        if width % indent_width != 0 {
            return Err(SyntaxError::InconsistentIndentation { width,
                                                              unit: indent_width,
                                                              line: number });
        }

        lines.push(SourceLine { number,
                                depth: width / indent_width,
                                tokens });
    }

    Ok(lines)
}

/// The program position of the indentation interpreter: the index of the
/// next line to run.
#[derive(Debug, Clone)]
struct LineCursor<'a> {
    lines: &'a [SourceLine],
    index: usize,
}

impl<'a> LineCursor<'a> {
    const fn new(lines: &'a [SourceLine]) -> Self {
        Self { lines, index: 0 }
    }

    fn current(&self) -> Option<&'a SourceLine> {
        self.lines.get(self.index)
    }

    const fn advance(&mut self) {
        self.index += 1;
    }

    /// Steps over every following line deeper than `depth`.
    fn skip_nested(&mut self, depth: usize) {
        while self.current().is_some_and(|line| line.depth > depth) {
            self.advance();
        }
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Runs a program whose blocks are given by indentation.
    ///
    /// Every line is tokenized and its depth checked before the first
    /// statement runs. Each line then holds exactly one statement or block
    /// header.
    pub(crate) fn run_indentation(&mut self, source: &str) -> ExecResult<()> {
        let lines = load_lines(source, &self.config.comment_marker, self.config.indent_width)?;
        let mut cursor = LineCursor::new(&lines);
        self.execute_region(&mut cursor, 0)
    }

    /// Executes consecutive lines at `depth` until a shallower line or the
    /// end of the program. The shallower line is not consumed.
    fn execute_region(&mut self, cursor: &mut LineCursor<'_>, depth: usize) -> ExecResult<()> {
        while let Some(line) = cursor.current() {
            if line.depth < depth {
                break;
            }
            if line.depth > depth {
                return Err(SyntaxError::UnexpectedIndent { line: line.number }.into());
            }
            self.execute_line(cursor, line)?;
        }
        Ok(())
    }

    /// Executes the line under the cursor, together with its block if it is
    /// a header.
    fn execute_line(&mut self, cursor: &mut LineCursor<'_>, line: &SourceLine) -> ExecResult<()> {
        let mut tokens = TokenStream::new(&line.tokens);
        let construct = self.keywords.classify(tokens.peek(), tokens.peek_second());
        trace!("line {}: {construct} statement", line.number);

        match construct {
            Construct::If => self.indented_if(cursor, line, &mut tokens),
            Construct::While => self.indented_while(cursor, line, &mut tokens),
            _ => {
                let statement = parse_statement(construct, &mut tokens)?;
                tokens.expect_end_of_input()?;
                cursor.advance();
                self.execute(&statement)?;
                Ok(())
            },
        }
    }

    /// `if guard` followed by an indented region, optionally followed by an
    /// `else` line at the same depth and its own region.
    fn indented_if(&mut self,
                   cursor: &mut LineCursor<'_>,
                   line: &SourceLine,
                   tokens: &mut TokenStream<'_>)
                   -> ExecResult<()> {
        let keyword = tokens.next();
        let guard = parse_expression(tokens)?;
        tokens.expect_end_of_input()?;
        cursor.advance();

        let taken = self.environment.eval(&guard)?.is_truthy();
        self.indented_region(cursor, keyword, line.depth, taken)?;

        if let Some(next) = cursor.current()
           && next.depth == line.depth
        {
            let mut else_tokens = TokenStream::new(&next.tokens);
            if self.keywords.is_keyword(else_tokens.peek(), Construct::Else) {
                let keyword = else_tokens.next();
                else_tokens.expect_end_of_input()?;
                cursor.advance();
                self.indented_region(cursor, keyword, line.depth, !taken)?;
            }
        }
        Ok(())
    }

    /// `while guard` followed by an indented region.
    ///
    /// The guard is parsed once. Every pass rewinds the cursor to the first
    /// line of the body; once the guard fails, the body is skipped from
    /// there.
    fn indented_while(&mut self,
                      cursor: &mut LineCursor<'_>,
                      line: &SourceLine,
                      tokens: &mut TokenStream<'_>)
                      -> ExecResult<()> {
        let keyword = tokens.next();
        let guard = parse_expression(tokens)?;
        tokens.expect_end_of_input()?;
        cursor.advance();
        expect_region(cursor, keyword, line.depth)?;

        let body = cursor.index;
        let mut passes = 0_usize;
        while self.environment.eval(&guard)?.is_truthy() {
            cursor.index = body;
            self.execute_region(cursor, line.depth + 1)?;
            passes += 1;
        }
        trace!("line {}: loop ran {passes} times", line.number);

        cursor.index = body;
        cursor.skip_nested(line.depth);
        Ok(())
    }

    /// Runs or skips the region below a block header at `depth`.
    fn indented_region(&mut self,
                       cursor: &mut LineCursor<'_>,
                       header: &Token,
                       depth: usize,
                       run: bool)
                       -> ExecResult<()> {
        expect_region(cursor, header, depth)?;
        if run {
            self.execute_region(cursor, depth + 1)
        } else {
            cursor.skip_nested(depth);
            Ok(())
        }
    }
}

/// Fails unless the line under the cursor is exactly one level deeper than
/// the header.
///
/// The check does not depend on whether the region will run, so a region
/// indented too deeply is rejected on both paths.
fn expect_region(cursor: &LineCursor<'_>, header: &Token, depth: usize) -> Result<(), SyntaxError> {
    match cursor.current() {
        Some(next) if next.depth == depth + 1 => Ok(()),
        Some(next) if next.depth > depth + 1 => {
            Err(SyntaxError::UnexpectedIndent { line: next.number })
        },
        _ => Err(SyntaxError::ExpectedIndentedBlock { construct: header.lexeme.clone(),
                                                      line:      header.line, }),
    }
}
