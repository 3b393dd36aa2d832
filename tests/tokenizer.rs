use keylang::{
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind, is_identifier, reject_unrecognized, tokenize},
};

fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

#[test]
fn two_character_operators_win_over_assignment() {
    let tokens = tokenize("a == b != c <= d >= e", "#", 1);
    assert_eq!(lexemes(&tokens), ["a", "==", "b", "!=", "c", "<=", "d", ">=", "e", ""]);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
}

#[test]
fn comment_marker_inside_string_is_kept() {
    let tokens = tokenize(r#"print "a # b"; # trailing"#, "#", 1);
    assert_eq!(lexemes(&tokens), ["print", r#""a # b""#, ";", ""]);
}

#[test]
fn multi_character_comment_marker_beats_operators() {
    let tokens = tokenize("x = 4 // 2\ny = 1", "//", 1);
    assert_eq!(lexemes(&tokens), ["x", "=", "4", "\n", "y", "=", "1", ""]);
    assert_eq!(tokens[4].line, 2);
}

#[test]
fn unrecognized_characters_become_tokens() {
    let tokens = tokenize("x = 1 @ 2", "#", 7);
    assert_eq!(tokens[3].kind, TokenKind::Unrecognized);
    assert_eq!(tokens[3].lexeme, "@");

    let err = reject_unrecognized(&tokens).unwrap_err();
    assert_eq!(err, SyntaxError::UnrecognizedCharacter { lexeme: "@".into(),
                                                         line:   7, });
}

#[test]
fn unterminated_string_is_unrecognized() {
    let tokens = tokenize("print \"oops", "#", 1);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Unrecognized));
}

#[test]
fn numbers_may_end_with_a_dot() {
    let tokens = tokenize("3. 4.25 7", "#", 1);
    assert_eq!(lexemes(&tokens), ["3.", "4.25", "7", ""]);
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn identifier_shape() {
    assert!(is_identifier("file_read"));
    assert!(is_identifier("_x2"));
    assert!(!is_identifier("2x"));
    assert!(!is_identifier("wenn dann"));
    assert!(!is_identifier(""));
}

#[test]
fn word_comment_marker_leaves_longer_identifiers_alone() {
    let tokens = tokenize("remaining = 3; print remaining; rem a note\nrem\nx = 1", "rem", 1);
    assert_eq!(lexemes(&tokens),
               ["remaining", "=", "3", ";", "print", "remaining", ";", "\n", "\n", "x", "=", "1", ""]);

    let tokens = tokenize("rem_total = 2 rem: note", "rem", 1);
    assert_eq!(lexemes(&tokens), ["rem_total", "=", "2", ""]);
}
