/// The kind of access that failed in a [`RuntimeError::Io`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// Reading a file or standard input.
    Read,
    /// Writing a file or standard output.
    Write,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "reading"),
            Self::Write => write!(f, "writing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and execution.
pub enum RuntimeError {
    /// An operator was applied to values of kinds it does not support.
    TypeMismatch {
        /// The operator, as written in the source.
        operator: String,
        /// Kind of the left operand.
        left:     &'static str,
        /// Kind of the right operand.
        right:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A unary operator was applied to a value it does not support.
    InvalidOperand {
        /// The operator, as written in the source.
        operator: String,
        /// Kind of the operand.
        operand:  &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string was required (for example as a file name).
    ExpectedString {
        /// What the string was needed for.
        purpose: &'static str,
        /// Kind of the value found instead.
        found:   &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A file, standard input or standard output could not be accessed.
    Io {
        /// Whether the failure happened while reading or writing.
        operation: IoOperation,
        /// File name, or `<stdin>`/`<stdout>`.
        target:    String,
        /// The underlying reason reported by the operating system.
        reason:    String,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl RuntimeError {
    /// Builds an [`RuntimeError::Io`] from an `std::io::Error`.
    pub fn io(operation: IoOperation,
              target: impl Into<String>,
              error: &std::io::Error,
              line: usize)
              -> Self {
        Self::Io { operation,
                   target: target.into(),
                   reason: error.to_string(),
                   line }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { operator,
                                 left,
                                 right,
                                 line, } => write!(f,
                                                   "Error on line {line}: Cannot apply '{operator}' to {left} and {right}."),
            Self::InvalidOperand { operator, operand, line } => {
                write!(f, "Error on line {line}: Cannot apply '{operator}' to {operand}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ExpectedString { purpose, found, line } => write!(f,
                                                                    "Error on line {line}: Expected a string as {purpose}, found {found}."),
            Self::Io { operation,
                       target,
                       reason,
                       line, } => {
                write!(f, "Error on line {line}: Error {operation} '{target}': {reason}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
