#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum SyntaxError {
    /// A character matched none of the lexical patterns.
    UnrecognizedCharacter {
        /// The unmatched source text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Found a token where a specific other token was required.
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of the input (or of the line) while something was
    /// still required.
    UnexpectedEndOfInput {
        /// Description of what the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement starts with an identifier that is neither a keyword nor
    /// the target of an assignment.
    UnknownIdentifier {
        /// The identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `else` appeared without an `if` directly before it.
    ElseWithoutIf {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block opened with `{` was never closed.
    UnclosedBlock {
        /// The line of the construct that opened the block.
        line: usize,
    },
    /// A block header is not followed by a more deeply indented line.
    ExpectedIndentedBlock {
        /// The keyword that introduced the block.
        construct: String,
        /// The line of the block header.
        line:      usize,
    },
    /// A line is indented deeper than its enclosing region allows.
    UnexpectedIndent {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line's indentation is not a whole number of indentation levels.
    InconsistentIndentation {
        /// Leading whitespace width of the line.
        width: usize,
        /// Configured width of one indentation level.
        unit:  usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The construct is reserved by the keyword table but has no behavior.
    NotImplemented {
        /// The keyword as written in the source.
        construct: String,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl SyntaxError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::UnknownIdentifier { line, .. }
            | Self::ElseWithoutIf { line }
            | Self::UnclosedBlock { line }
            | Self::ExpectedIndentedBlock { line, .. }
            | Self::UnexpectedIndent { line }
            | Self::InconsistentIndentation { line, .. }
            | Self::NotImplemented { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { lexeme, line } => {
                write!(f, "Error on line {line}: Unrecognized character '{lexeme}'.")
            },
            Self::UnexpectedToken { expected, found, line } => write!(f,
                                                                      "Error on line {line}: Expected {expected}, found '{found}'."),
            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Expected {expected}, found end of input."),
            Self::UnknownIdentifier { name, line } => {
                write!(f, "Error on line {line}: Unknown identifier '{name}'.")
            },
            Self::ElseWithoutIf { line } => {
                write!(f, "Error on line {line}: Unexpected 'else' without matching 'if'.")
            },
            Self::UnclosedBlock { line } => write!(f,
                                                   "Error on line {line}: Block opened here is never closed with '}}'."),
            Self::ExpectedIndentedBlock { construct, line } => write!(f,
                                                                      "Error on line {line}: Expected an indented block after '{construct}'."),
            Self::UnexpectedIndent { line } => {
                write!(f, "Error on line {line}: Unexpected indent.")
            },
            Self::InconsistentIndentation { width, unit, line } => write!(f,
                                                                          "Error on line {line}: Indentation of {width} columns is not a multiple of {unit}."),
            Self::NotImplemented { construct, line } => write!(f,
                                                               "Error on line {line}: '{construct}' is not implemented."),
        }
    }
}

impl std::error::Error for SyntaxError {}
