/// Shared parser entry point and result type.
///
/// Declares `parse_expression`, where every expression parse starts.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// multiplication, plus the token-to-operator mapping that decides where an
/// expression ends.
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles `not`, prefix `-` and `!`, literals, variable references and
/// parenthesized sub-expressions.
pub mod unary;

/// The token cursor.
///
/// Provides `TokenStream`, the program position of the brace interpreter and
/// the per-line cursor of the indentation interpreter, plus the `expect_*`
/// helpers statement handlers use.
pub mod stream;

/// Statement parsing.
///
/// Turns the statements that need no block (assignment, `print`, `input`,
/// `file_read`, `file_write`) into [`crate::ast::Statement`] nodes and
/// reports misplaced `else`, `for` and unknown identifiers.
pub mod statement;
