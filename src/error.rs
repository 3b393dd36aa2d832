/// Configuration errors.
///
/// Raised while building a language definition: malformed keyword tables,
/// invalid comment markers or extensions, unreadable definition files, and
/// source files with the wrong suffix. None of these can happen once
/// interpretation has started.
pub mod config_error;
/// Runtime errors.
///
/// Contains all errors raised while executing statements: evaluation failures
/// such as type mismatches or division by zero, and failures of the
/// side-effecting statements (file access, standard input and output).
pub mod runtime_error;
/// Lexical and syntax errors.
///
/// Defines every error detected by the tokenizer, the expression parser and
/// the statement dispatchers: unrecognized characters, unexpected tokens,
/// unknown identifiers, unbalanced blocks and indentation mistakes.
pub mod syntax_error;

pub use config_error::ConfigError;
pub use runtime_error::{IoOperation, RuntimeError};
pub use syntax_error::SyntaxError;

/// Any error that can end an interpreter run.
///
/// Each variant wraps the error type of one category. The driver prints the
/// [`Error::label`] in front of the message so the user can tell a broken
/// program apart from a failing file operation.
#[derive(Debug)]
pub enum Error {
    /// The language definition itself is invalid.
    Config(ConfigError),
    /// The program could not be tokenized or parsed.
    Syntax(SyntaxError),
    /// The program failed while executing.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category label printed in front of the error message.
    ///
    /// # Example
    /// ```
    /// use keylang::error::{Error, SyntaxError};
    ///
    /// let error = Error::from(SyntaxError::ElseWithoutIf { line: 3 });
    /// assert_eq!(error.label(), "SyntaxError");
    ///
    /// let error = Error::from(SyntaxError::UnrecognizedCharacter { lexeme: "@".into(),
    ///                                                              line:   1, });
    /// assert_eq!(error.label(), "LexicalError");
    /// ```
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "ConfigError",
            Self::Syntax(SyntaxError::UnrecognizedCharacter { .. }) => "LexicalError",
            Self::Syntax(_) => "SyntaxError",
            Self::Runtime(RuntimeError::Io { .. }) => "IOError",
            Self::Runtime(_) => "Runtime Error",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
