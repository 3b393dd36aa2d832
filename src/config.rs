use std::{fs, path::Path};

use serde::Deserialize;

use crate::{error::ConfigError, interpreter::keywords::Construct};

/// Largest accepted number of columns per indentation level.
pub const MAX_INDENT_WIDTH: usize = 16;

/// How blocks of statements are delimited in the interpreted language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    /// Blocks are wrapped in `{` and `}`, statements end with `;`.
    #[default]
    Braces,
    /// Blocks are the lines indented one level deeper than their header.
    #[serde(alias = "spaces")]
    #[value(alias = "spaces")]
    Indentation,
}

/// The surface words of every keyword construct.
///
/// All words are substituted verbatim into keyword matching, so each one must
/// be a single identifier. Uniqueness is checked when the keyword table is
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Keywords {
    #[serde(rename = "if")]
    pub if_keyword:         String,
    #[serde(rename = "else")]
    pub else_keyword:       String,
    #[serde(rename = "while")]
    pub while_keyword:      String,
    #[serde(rename = "for")]
    pub for_keyword:        String,
    #[serde(rename = "print")]
    pub print_keyword:      String,
    #[serde(rename = "input")]
    pub input_keyword:      String,
    #[serde(rename = "file_read")]
    pub file_read_keyword:  String,
    #[serde(rename = "file_write")]
    pub file_write_keyword: String,
}

impl Default for Keywords {
    fn default() -> Self {
        Self { if_keyword:         "if".into(),
               else_keyword:       "else".into(),
               while_keyword:      "while".into(),
               for_keyword:        "for".into(),
               print_keyword:      "print".into(),
               input_keyword:      "input".into(),
               file_read_keyword:  "file_read".into(),
               file_write_keyword: "file_write".into(), }
    }
}

impl Keywords {
    /// Returns every keyword construct paired with its configured word.
    #[must_use]
    pub fn entries(&self) -> [(Construct, &str); 8] {
        [(Construct::If, self.if_keyword.as_str()),
         (Construct::Else, self.else_keyword.as_str()),
         (Construct::While, self.while_keyword.as_str()),
         (Construct::For, self.for_keyword.as_str()),
         (Construct::Print, self.print_keyword.as_str()),
         (Construct::Input, self.input_keyword.as_str()),
         (Construct::FileRead, self.file_read_keyword.as_str()),
         (Construct::FileWrite, self.file_write_keyword.as_str())]
    }

    /// Replaces the word of one keyword construct.
    ///
    /// Returns `false` for constructs that have no keyword (`Assignment`,
    /// `Unknown`).
    pub fn set(&mut self, construct: Construct, word: impl Into<String>) -> bool {
        let slot = match construct {
            Construct::If => &mut self.if_keyword,
            Construct::Else => &mut self.else_keyword,
            Construct::While => &mut self.while_keyword,
            Construct::For => &mut self.for_keyword,
            Construct::Print => &mut self.print_keyword,
            Construct::Input => &mut self.input_keyword,
            Construct::FileRead => &mut self.file_read_keyword,
            Construct::FileWrite => &mut self.file_write_keyword,
            Construct::Assignment | Construct::Unknown => return false,
        };
        *slot = word.into();
        true
    }

    /// Applies an override of the form `CONSTRUCT=WORD`, e.g. `if=wenn`.
    ///
    /// # Errors
    /// Returns [`ConfigError::MalformedOverride`] when there is no `=`, and
    /// [`ConfigError::UnknownConstruct`] when the left side names no keyword
    /// construct.
    ///
    /// # Example
    /// ```
    /// use keylang::config::Keywords;
    ///
    /// let mut keywords = Keywords::default();
    /// keywords.apply_override("print=zeige").unwrap();
    /// assert_eq!(keywords.print_keyword, "zeige");
    ///
    /// assert!(keywords.apply_override("loop=repeat").is_err());
    /// ```
    pub fn apply_override(&mut self, raw: &str) -> Result<(), ConfigError> {
        let (name, word) =
            raw.split_once('=')
               .ok_or_else(|| ConfigError::MalformedOverride { raw: raw.to_string() })?;

        let name = name.trim();
        let unknown = || ConfigError::UnknownConstruct { name: name.to_string() };

        let construct = Construct::from_config_name(name).ok_or_else(unknown)?;
        if self.set(construct, word.trim()) { Ok(()) } else { Err(unknown()) }
    }
}

/// A complete language definition.
///
/// This is everything the interpreter needs to know about the language it
/// runs: its name, the source file suffix, how blocks are delimited, the
/// comment marker and the keyword words.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageConfig {
    /// Display name of the language.
    pub name:           String,
    /// Required suffix of source files, without the leading dot.
    pub extension:      String,
    /// Block delimiting strategy.
    pub block_style:    BlockStyle,
    /// Marker that starts a comment running to the end of the line.
    pub comment_marker: String,
    /// Columns per indentation level (indentation style only).
    pub indent_width:   usize,
    /// Keyword words.
    pub keywords:       Keywords,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self { name:           "Test".into(),
               extension:      "test-lang".into(),
               block_style:    BlockStyle::Braces,
               comment_marker: "#".into(),
               indent_width:   4,
               keywords:       Keywords::default(), }
    }
}

impl LanguageConfig {
    /// Loads a language definition from a JSON file.
    ///
    /// Missing fields take their default values; unknown fields are rejected.
    /// The result is normalized but not validated.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid definition.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = || path.display().to_string();

        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read { path:   display(),
                                                                             reason: e.to_string(), })?;
        Self::from_json(&text).map_err(|reason| ConfigError::Parse { path: display(),
                                                                      reason })
    }

    /// Parses a language definition from JSON text.
    ///
    /// # Errors
    /// Returns the parser's message if the text is not a valid definition.
    ///
    /// # Example
    /// ```
    /// use keylang::config::{BlockStyle, LanguageConfig};
    ///
    /// let config = LanguageConfig::from_json(r#"{
    ///     "name": "Wenn",
    ///     "extension": ".wenn",
    ///     "block_style": "spaces",
    ///     "keywords": { "if": "wenn", "print": "zeige" }
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.extension, "wenn");
    /// assert_eq!(config.block_style, BlockStyle::Indentation);
    /// assert_eq!(config.keywords.else_keyword, "else");
    /// ```
    pub fn from_json(text: &str) -> Result<Self, String> {
        let mut config: Self = serde_json::from_str(text).map_err(|e| e.to_string())?;
        config.normalize();
        Ok(config)
    }

    /// Strips surrounding whitespace and the extension's leading dot.
    pub fn normalize(&mut self) {
        self.extension = self.extension.trim().trim_start_matches('.').to_string();
        self.comment_marker = self.comment_marker.trim().to_string();
        self.name = self.name.trim().to_string();
    }

    /// Checks the settings that do not involve keywords.
    ///
    /// Keyword checks happen when the keyword table is built, see
    /// [`crate::interpreter::keywords::KeywordTable::new`].
    ///
    /// # Errors
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() || self.extension.contains(['/', '\\']) {
            return Err(ConfigError::InvalidExtension { extension: self.extension.clone() });
        }
        if self.comment_marker.is_empty() || self.comment_marker.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidCommentMarker { marker: self.comment_marker.clone() });
        }
        if !(1..=MAX_INDENT_WIDTH).contains(&self.indent_width) {
            return Err(ConfigError::InvalidIndentWidth);
        }
        Ok(())
    }

    /// Checks that a source file name carries the configured extension.
    ///
    /// # Errors
    /// Returns [`ConfigError::WrongExtension`] otherwise.
    ///
    /// # Example
    /// ```
    /// use std::path::Path;
    ///
    /// use keylang::config::LanguageConfig;
    ///
    /// let config = LanguageConfig::default();
    /// assert!(config.check_extension(Path::new("demo.test-lang")).is_ok());
    /// assert!(config.check_extension(Path::new("demo.txt")).is_err());
    /// ```
    pub fn check_extension(&self, path: &Path) -> Result<(), ConfigError> {
        let suffix = format!(".{}", self.extension);
        let matches = path.file_name()
                          .and_then(|name| name.to_str())
                          .is_some_and(|name| name.len() > suffix.len() && name.ends_with(&suffix));

        if matches {
            Ok(())
        } else {
            Err(ConfigError::WrongExtension { path:      path.display().to_string(),
                                              extension: self.extension.clone(), })
        }
    }
}
