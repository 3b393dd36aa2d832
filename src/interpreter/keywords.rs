use std::collections::HashMap;

use crate::{
    config::Keywords,
    error::ConfigError,
    interpreter::lexer::{Token, TokenKind, is_identifier},
};

/// Words the expression language gives a meaning of its own. No keyword may
/// use them.
pub const RESERVED_WORDS: &[&str] = &["and", "or", "not", "true", "false"];

/// Every kind of statement a dispatcher can route to.
///
/// The first eight variants are reachable through a configured keyword;
/// `Assignment` and `Unknown` are the outcomes for a leading identifier that
/// is not a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    If,
    Else,
    While,
    For,
    Print,
    Input,
    FileRead,
    FileWrite,
    Assignment,
    Unknown,
}

impl Construct {
    /// Looks up a keyword construct by its configuration name, such as
    /// `file_read`.
    #[must_use]
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "while" => Some(Self::While),
            "for" => Some(Self::For),
            "print" => Some(Self::Print),
            "input" => Some(Self::Input),
            "file_read" => Some(Self::FileRead),
            "file_write" => Some(Self::FileWrite),
            _ => None,
        }
    }
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::Print => "print",
            Self::Input => "input",
            Self::FileRead => "file_read",
            Self::FileWrite => "file_write",
            Self::Assignment => "assignment",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Maps configured keyword words to the construct they introduce.
///
/// Built once per interpreter. Construction rejects any table in which two
/// constructs share a word, so lookups are unambiguous.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    constructs: HashMap<String, Construct>,
}

impl KeywordTable {
    /// Builds the table from the configured keywords.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidKeyword`] if a word is not a single identifier.
    /// - [`ConfigError::ReservedKeyword`] if a word is one of
    ///   [`RESERVED_WORDS`].
    /// - [`ConfigError::DuplicateKeyword`] if two constructs share a word.
    ///
    /// # Example
    /// ```
    /// use keylang::{
    ///     config::Keywords,
    ///     interpreter::keywords::{Construct, KeywordTable},
    /// };
    ///
    /// let mut keywords = Keywords::default();
    /// keywords.set(Construct::If, "wenn");
    ///
    /// let table = KeywordTable::new(&keywords).unwrap();
    /// assert_eq!(table.lookup("wenn"), Some(Construct::If));
    /// assert_eq!(table.lookup("if"), None);
    ///
    /// keywords.set(Construct::Else, "wenn");
    /// assert!(KeywordTable::new(&keywords).is_err());
    /// ```
    pub fn new(keywords: &Keywords) -> Result<Self, ConfigError> {
        let mut constructs = HashMap::new();

        for (construct, word) in keywords.entries() {
            if !is_identifier(word) {
                return Err(ConfigError::InvalidKeyword { construct: construct.to_string(),
                                                         word:      word.to_string(), });
            }
            if RESERVED_WORDS.contains(&word) {
                return Err(ConfigError::ReservedKeyword { construct: construct.to_string(),
                                                          word:      word.to_string(), });
            }
            if let Some(first) = constructs.insert(word.to_string(), construct) {
                return Err(ConfigError::DuplicateKeyword { word:   word.to_string(),
                                                           first:  first.to_string(),
                                                           second: construct.to_string(), });
            }
        }

        Ok(Self { constructs })
    }

    /// Returns the construct a word introduces, if it is a keyword.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Construct> {
        self.constructs.get(word).copied()
    }

    /// Returns `true` if `token` is the keyword of `construct`.
    #[must_use]
    pub fn is_keyword(&self, token: &Token, construct: Construct) -> bool {
        token.kind == TokenKind::Identifier && self.lookup(&token.lexeme) == Some(construct)
    }

    /// Decides which construct a statement starting with `head` is.
    ///
    /// Keywords win; otherwise an identifier followed by `=` is an
    /// assignment, and anything else is unknown.
    #[must_use]
    pub fn classify(&self, head: &Token, next: &Token) -> Construct {
        if head.kind != TokenKind::Identifier {
            return Construct::Unknown;
        }
        if let Some(construct) = self.lookup(&head.lexeme) {
            return construct;
        }
        if next.kind == TokenKind::Assign {
            Construct::Assignment
        } else {
            Construct::Unknown
        }
    }
}
