use std::io::{BufRead, Write};

use log::debug;

use crate::{
    ast::Statement,
    config::{BlockStyle, LanguageConfig},
    error::{ConfigError, Error},
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        keywords::KeywordTable,
        value::Value,
    },
};

/// Result type of the statement executors.
///
/// Executing a statement can fail with a syntax error (statements are parsed
/// as they are reached) or with a runtime error.
pub type ExecResult<T> = Result<T, Error>;

/// A configured interpreter.
///
/// Owns the variable environment of one run together with the streams that
/// `input` reads from and `print` writes to. Tests pass byte buffers, the
/// binary passes the locked standard streams.
pub struct Interpreter<R, W> {
    pub(crate) environment: Environment,
    pub(crate) keywords:    KeywordTable,
    pub(crate) config:      LanguageConfig,
    pub(crate) input:       R,
    pub(crate) output:      W,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Builds an interpreter for a language definition.
    ///
    /// The configuration is normalized and validated, and the keyword table
    /// is built, before any source is seen.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the definition is invalid.
    ///
    /// # Example
    /// ```
    /// use keylang::{config::LanguageConfig, interpreter::core::Interpreter};
    ///
    /// let mut output = Vec::new();
    /// let mut interpreter =
    ///     Interpreter::new(LanguageConfig::default(), &b""[..], &mut output).unwrap();
    ///
    /// interpreter.run(r#"x = 5; if (x > 3) { print("big"); } else { print("small"); }"#)
    ///            .unwrap();
    ///
    /// drop(interpreter);
    /// assert_eq!(String::from_utf8(output).unwrap(), "big\n");
    /// ```
    pub fn new(mut config: LanguageConfig, input: R, output: W) -> Result<Self, ConfigError> {
        config.normalize();
        config.validate()?;
        let keywords = KeywordTable::new(&config.keywords)?;

        Ok(Self { environment: Environment::new(),
                  keywords,
                  config,
                  input,
                  output })
    }

    /// Runs a whole program.
    ///
    /// The block style of the configuration decides which executor runs the
    /// source. Variables assigned by earlier runs stay visible.
    ///
    /// # Errors
    /// Returns the first error that ends the run.
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        debug!("running {} program ({} bytes, {:?} blocks)",
               self.config.name,
               source.len(),
               self.config.block_style);

        let result = match self.config.block_style {
            BlockStyle::Braces => self.run_braces(source),
            BlockStyle::Indentation => self.run_indentation(source),
        };

        match &result {
            Ok(()) => debug!("run finished with {} variables", self.environment.len()),
            Err(e) => debug!("run stopped: {e}"),
        }
        result
    }

    /// Returns the variable environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Consumes the interpreter and returns its variable environment.
    #[must_use]
    pub fn into_environment(self) -> Environment {
        self.environment
    }

    /// Returns the language definition in use.
    #[must_use]
    pub const fn config(&self) -> &LanguageConfig {
        &self.config
    }

    /// Executes a statement that has no block.
    pub(crate) fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.environment.eval(value)?;
                self.environment.assign(name, value);
            },
            Statement::Print { expr, line } => {
                let value = self.environment.eval(expr)?;
                self.print_value(&value, *line)?;
            },
            Statement::Input { name, line } => {
                let text = self.read_input(*line)?;
                self.environment.assign(name, Value::Str(text));
            },
            Statement::FileRead { filename, name, line } => {
                let filename = self.environment.eval(filename)?;
                let text = Self::read_file(&filename, *line)?;
                self.environment.assign(name, Value::Str(text));
            },
            Statement::FileWrite { filename,
                                   content,
                                   line, } => {
                let filename = self.environment.eval(filename)?;
                let content = self.environment.eval(content)?;
                Self::write_file(&filename, &content, *line)?;
            },
        }
        Ok(())
    }
}
