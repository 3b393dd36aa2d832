use std::{
    fs,
    io::{self, BufRead, Write},
};

use log::debug;

use crate::{
    error::{IoOperation, RuntimeError},
    interpreter::{core::Interpreter, evaluator::core::EvalResult, value::Value},
};

const STDIN: &str = "<stdin>";
const STDOUT: &str = "<stdout>";

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Writes a value followed by a line break to the output stream.
    ///
    /// The stream is flushed after every line so that prompts appear before
    /// the next `input` blocks.
    pub(crate) fn print_value(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").and_then(|()| self.output.flush())
                                        .map_err(|e| {
                                            RuntimeError::io(IoOperation::Write, STDOUT, &e, line)
                                        })
    }

    /// Reads one line from the input stream, without its line break.
    ///
    /// Running out of input is an error.
    pub(crate) fn read_input(&mut self, line: usize) -> EvalResult<String> {
        let mut text = String::new();
        let read = self.input
                       .read_line(&mut text)
                       .map_err(|e| RuntimeError::io(IoOperation::Read, STDIN, &e, line))?;

        if read == 0 {
            let eof = io::Error::from(io::ErrorKind::UnexpectedEof);
            return Err(RuntimeError::io(IoOperation::Read, STDIN, &eof, line));
        }

        let trimmed = text.trim_end_matches(['\n', '\r']).len();
        text.truncate(trimmed);
        Ok(text)
    }

    /// Reads the whole file named by `filename`.
    pub(crate) fn read_file(filename: &Value, line: usize) -> EvalResult<String> {
        let path = file_name(filename, line)?;
        let text = fs::read_to_string(path).map_err(|e| {
                                               RuntimeError::io(IoOperation::Read, path, &e, line)
                                           })?;

        debug!("read {} bytes from '{path}'", text.len());
        Ok(text)
    }

    /// Creates or truncates the file named by `filename` and writes the text
    /// of `content` to it.
    pub(crate) fn write_file(filename: &Value,
                             content: &Value,
                             line: usize)
                             -> EvalResult<()> {
        let path = file_name(filename, line)?;
        let text = content.to_string();
        fs::write(path, &text).map_err(|e| RuntimeError::io(IoOperation::Write, path, &e, line))?;

        debug!("wrote {} bytes to '{path}'", text.len());
        Ok(())
    }
}

fn file_name(value: &Value, line: usize) -> EvalResult<&str> {
    match value {
        Value::Str(name) => Ok(name),
        other => Err(RuntimeError::ExpectedString { purpose: "a file name",
                                                    found: other.kind_name(),
                                                    line }),
    }
}
