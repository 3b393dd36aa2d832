use crate::config::MAX_INDENT_WIDTH;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors in a language definition.
pub enum ConfigError {
    /// Two constructs were given the same keyword.
    DuplicateKeyword {
        /// The shared keyword.
        word:   String,
        /// The construct that claimed the word first.
        first:  String,
        /// The construct that tried to claim it again.
        second: String,
    },
    /// A keyword is not a single identifier.
    InvalidKeyword {
        /// The construct the keyword was configured for.
        construct: String,
        /// The rejected keyword.
        word:      String,
    },
    /// A keyword collides with a word the expression language reserves.
    ReservedKeyword {
        /// The construct the keyword was configured for.
        construct: String,
        /// The rejected keyword.
        word:      String,
    },
    /// A `CONSTRUCT=WORD` override names no known construct.
    UnknownConstruct {
        /// The construct name as given.
        name: String,
    },
    /// A keyword override is not of the form `CONSTRUCT=WORD`.
    MalformedOverride {
        /// The override as given.
        raw: String,
    },
    /// The comment marker is empty or contains whitespace.
    InvalidCommentMarker {
        /// The rejected marker.
        marker: String,
    },
    /// The file extension is empty or contains a path separator.
    InvalidExtension {
        /// The rejected extension.
        extension: String,
    },
    /// The indentation width is zero or larger than [`MAX_INDENT_WIDTH`].
    InvalidIndentWidth,
    /// A language definition file could not be read.
    Read {
        /// Path of the file.
        path:   String,
        /// The underlying reason.
        reason: String,
    },
    /// A language definition file is not valid JSON for a language definition.
    Parse {
        /// Path of the file.
        path:   String,
        /// The underlying reason.
        reason: String,
    },
    /// A source file does not carry the configured extension.
    WrongExtension {
        /// The offending file name.
        path:      String,
        /// The configured extension, without the leading dot.
        extension: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKeyword { word, first, second } => write!(f,
                                                                     "Keyword '{word}' is used for both '{first}' and '{second}'."),
            Self::InvalidKeyword { construct, word } => write!(f,
                                                               "Keyword '{word}' for '{construct}' is not a valid identifier."),
            Self::ReservedKeyword { construct, word } => write!(f,
                                                                "Keyword '{word}' for '{construct}' is reserved by the expression language."),
            Self::UnknownConstruct { name } => write!(f, "Unknown construct '{name}'."),
            Self::MalformedOverride { raw } => {
                write!(f, "Keyword override '{raw}' must look like CONSTRUCT=WORD.")
            },
            Self::InvalidCommentMarker { marker } => write!(f,
                                                            "Comment marker '{marker}' must be non-empty and free of whitespace."),
            Self::InvalidExtension { extension } => write!(f,
                                                           "File extension '{extension}' must be non-empty and free of path separators."),
            Self::InvalidIndentWidth => write!(f, "Indentation width must be between 1 and {MAX_INDENT_WIDTH}."),
            Self::Read { path, reason } => {
                write!(f, "Failed to read language definition '{path}': {reason}.")
            },
            Self::Parse { path, reason } => {
                write!(f, "Invalid language definition '{path}': {reason}.")
            },
            Self::WrongExtension { extension, .. } => {
                write!(f, "File must have .{extension} extension")
            },
        }
    }
}

impl std::error::Error for ConfigError {}
