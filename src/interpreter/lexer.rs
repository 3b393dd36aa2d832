use log::trace;
use logos::Logos;

use crate::error::SyntaxError;

/// The fixed lexical classes of every configured language.
///
/// Keywords are lexed as identifiers; the keyword table claims them later.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Numeric literals such as `3`, `3.` or `3.25`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// `=`
    #[token("=")]
    Assign,
    /// `;`
    #[token(";")]
    End,
    /// Identifier tokens; variables and keywords such as `x` or `print`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// Arithmetic, comparison and grouping symbols.
    #[regex(r"[+\-*/%(){}<>!]")]
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    Operator,
    /// Double-quoted string literals on a single line.
    #[regex(r#""[^"\n]*""#)]
    Str,
    /// `\n`
    #[token("\n")]
    Newline,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
}

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal.
    Number,
    /// The assignment operator `=`.
    Assign,
    /// The statement terminator `;`.
    End,
    /// An identifier or keyword.
    Identifier,
    /// An operator or grouping symbol.
    Operator,
    /// A string literal, including its quotes.
    Str,
    /// A line break.
    Newline,
    /// Text that matched no lexical class.
    Unrecognized,
    /// Marks the end of the tokenized chunk.
    EndOfInput,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number => Self::Number,
            Lexeme::Assign => Self::Assign,
            Lexeme::End => Self::End,
            Lexeme::Identifier => Self::Identifier,
            Lexeme::Operator => Self::Operator,
            Lexeme::Str => Self::Str,
            Lexeme::Newline => Self::Newline,
            // skipped by the lexer, never produced
            Lexeme::Whitespace => Self::Unrecognized,
        }
    }
}

/// Represents a lexical token: its kind, the raw matched text and the source
/// line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical class.
    pub kind:   TokenKind,
    /// The raw source text.
    pub lexeme: String,
    /// The 1-based source line.
    pub line:   usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Returns `true` if this is the operator `op`.
    #[must_use]
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == op
    }

    /// Returns `true` if this is the identifier `word`.
    #[must_use]
    pub fn is_identifier(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme == word
    }

    /// Returns `true` if this token marks the end of the input.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Converts a chunk of source text into tokens.
///
/// Whitespace is discarded. At every token boundary the configured comment
/// marker is checked before any other lexical class; when it is present the
/// rest of the physical line is discarded. Text that matches nothing becomes
/// an [`TokenKind::Unrecognized`] token, so tokenizing never fails.
///
/// The returned list always ends with a single [`TokenKind::EndOfInput`]
/// token.
///
/// # Parameters
/// - `chunk`: The whole program (brace style) or one line (indentation style).
/// - `comment_marker`: Marker that starts a comment.
/// - `first_line`: Line number of the first line of `chunk`.
///
/// # Example
/// ```
/// use keylang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x = 5; # set x", "#", 1);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Number,
///             TokenKind::End,
///             TokenKind::EndOfInput]);
/// ```
#[must_use]
pub fn tokenize(chunk: &str, comment_marker: &str, first_line: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = first_line;
    let mut lexer = Lexeme::lexer(chunk);

    loop {
        skip_comment(&mut lexer, comment_marker);

        let Some(result) = lexer.next() else {
            break;
        };
        let kind = result.map_or(TokenKind::Unrecognized, TokenKind::from);
        tokens.push(Token::new(kind, lexer.slice(), line));

        if kind == TokenKind::Newline {
            line += 1;
        }
    }

    trace!("tokenized {} tokens from lines {first_line}..={line}", tokens.len());
    tokens.push(Token::new(TokenKind::EndOfInput, "", line));
    tokens
}

/// Moves the lexer past a comment that starts at the current boundary.
///
/// The comment ends before the next line break so that line counting and the
/// `Newline` token are unaffected. A marker ending in an identifier character
/// (such as `rem`) only counts when no identifier character follows it, so
/// `remaining` stays an identifier.
fn skip_comment(lexer: &mut logos::Lexer<'_, Lexeme>, comment_marker: &str) {
    let rest = lexer.remainder();
    let trimmed = rest.trim_start_matches([' ', '\t', '\r', '\x0c']);

    if comment_marker.is_empty() || !trimmed.starts_with(comment_marker) {
        return;
    }

    let ends_in_word = comment_marker.chars().next_back().is_some_and(is_identifier_char);
    let word_follows = trimmed[comment_marker.len()..].chars()
                                                      .next()
                                                      .is_some_and(is_identifier_char);

    if !(ends_in_word && word_follows) {
        let leading = rest.len() - trimmed.len();
        let comment = trimmed.find('\n').unwrap_or(trimmed.len());
        lexer.bump(leading + comment);
    }
}

/// Returns the first unrecognized token as a lexical error.
///
/// Both interpreters call this before executing anything, so a program with
/// a lexical error performs no side effects.
///
/// # Errors
/// Returns [`SyntaxError::UnrecognizedCharacter`] for the first
/// [`TokenKind::Unrecognized`] token.
pub fn reject_unrecognized(tokens: &[Token]) -> Result<(), SyntaxError> {
    match tokens.iter().find(|t| t.kind == TokenKind::Unrecognized) {
        Some(token) => Err(SyntaxError::UnrecognizedCharacter { lexeme: token.lexeme.clone(),
                                                                line:   token.line, }),
        None => Ok(()),
    }
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if `word` would be tokenized as exactly one identifier.
#[must_use]
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(is_identifier_char)
}
