/// The brace-style executor.
///
/// Runs programs whose blocks are wrapped in `{` and `}` and whose statements
/// end with `;`. The whole source is one token stream and a block that is not
/// executed is skipped by counting braces.
pub mod braces;
/// The interpreter itself.
///
/// Declares `Interpreter`, which owns the variable environment, the keyword
/// table and the input and output streams of one run, and executes the
/// statements that need no block.
///
/// # Responsibilities
/// - Validates the language definition and builds the keyword table.
/// - Dispatches a run to the executor of the configured block style.
/// - Executes assignments and the I/O statements.
pub mod core;
/// The variable environment.
///
/// A single global scope mapping names to values. Reading a name that was
/// never assigned yields `0.0`.
pub mod environment;
/// The evaluator module computes the value of expressions.
///
/// The evaluator walks an expression tree against the variable environment,
/// applies arithmetic, comparison and logical operators, and reports runtime
/// errors such as division by zero or mismatched operand kinds.
pub mod evaluator;
/// The indentation-style executor.
///
/// Runs programs whose blocks are the lines indented one level deeper than
/// their header. Each physical line is tokenized on its own.
pub mod indentation;
/// Side-effecting statements.
///
/// Printing, reading standard input and reading or writing files.
pub mod io;
/// The keyword table.
///
/// Maps the configured keyword words to the fixed set of constructs and
/// classifies the first token of every statement.
pub mod keywords;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces tokens for numbers,
/// identifiers, strings, operators and statement terminators, each tagged with
/// its source line. The configurable comment marker is removed here.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   location.
/// - Discards whitespace and comments.
/// - Turns unmatched characters into tokens that later stages reject.
pub mod lexer;
/// The parser module builds expression trees and statements from tokens.
///
/// Expressions are parsed by precedence climbing into [`crate::ast::Expr`]
/// trees. Statements without a block are parsed into
/// [`crate::ast::Statement`] nodes; block statements are handled by the two
/// executors.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, strings and booleans. This module also defines how
/// values print and which values count as true.
pub mod value;
