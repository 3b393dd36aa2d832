use std::fs;

use keylang::{
    config::{BlockStyle, LanguageConfig},
    error::{ConfigError, Error, RuntimeError, SyntaxError},
    interpreter::{
        core::Interpreter, environment::Environment, indentation::load_lines, keywords::Construct,
        value::Value,
    },
    run_source,
};
use walkdir::WalkDir;

fn indented() -> LanguageConfig {
    LanguageConfig { block_style: BlockStyle::Indentation,
                     ..LanguageConfig::default() }
}

fn run_with(src: &str, config: LanguageConfig, input: &str) -> (Result<Environment, Error>, String) {
    let mut output = Vec::new();
    let result = run_source(src, config, input.as_bytes(), &mut output);
    (result, String::from_utf8(output).expect("output is UTF-8"))
}

fn assert_output_with(src: &str, config: LanguageConfig, expected: &str) -> Environment {
    match run_with(src, config, "") {
        (Ok(env), output) => {
            assert_eq!(output, expected, "unexpected output for:\n{src}");
            env
        },
        (Err(e), output) => panic!("Script failed: {e}\noutput so far:\n{output}"),
    }
}

fn assert_output(src: &str, expected: &str) -> Environment {
    assert_output_with(src, LanguageConfig::default(), expected)
}

fn assert_failure_with(src: &str, config: LanguageConfig) -> (Error, String) {
    match run_with(src, config, "") {
        (Ok(_), _) => panic!("Script succeeded but was expected to fail:\n{src}"),
        (Err(e), output) => (e, output),
    }
}

fn assert_failure(src: &str) -> Error {
    assert_failure_with(src, LanguageConfig::default()).0
}

#[test]
fn if_else_picks_the_true_branch() {
    assert_output(r#"x = 5; if (x > 3) { print("big"); } else { print("small"); }"#, "big\n");
    assert_output(r#"x = 2; if (x > 3) { print("big"); } else { print("small"); }"#, "small\n");
}

#[test]
fn while_counts_with_float_display() {
    assert_output("i = 0; while (i < 3) { print(i); i = i + 1; }", "0.0\n1.0\n2.0\n");
}

#[test]
fn indentation_two_line_program() {
    assert_output_with("x = 1\nprint(x)\n", indented(), "1.0\n");
}

#[test]
fn file_write_then_file_read() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.txt");
    let path = path.to_str().expect("UTF-8 temp path");

    let src = format!(r#"file_write "{path}" "hello"; file_read "{path}" y; print(y);"#);
    let env = assert_output(&src, "hello\n");

    assert_eq!(fs::read_to_string(path).expect("written file"), "hello");
    assert_eq!(env.lookup("y"), Value::from("hello"));
}

#[test]
fn file_statements_accept_to_in_both_styles() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("notes.txt");
    let path = path.to_str().expect("UTF-8 temp path");

    let braces = format!(r#"file_write "{path}" to 1 + 1; file_read "{path}" to n; print n;"#);
    assert_output(&braces, "2.0\n");

    let lines = format!("name = \"{path}\"\nfile_write name to \"again\"\nfile_read name to n\nprint n\n");
    assert_output_with(&lines, indented(), "again\n");
}

#[test]
fn false_guard_runs_the_body_zero_times() {
    assert_output(r#"while (0) { print("never"); } print("after");"#, "after\n");
    assert_output_with("while 1 < 0\n    print \"never\"\nprint \"after\"\n",
                       indented(),
                       "after\n");
}

#[test]
fn unbound_variables_read_as_zero() {
    let env = assert_output("print(missing); y = missing + 2;", "0.0\n");
    assert_eq!(env.lookup("y"), Value::Number(2.0));
    assert_eq!(env.get("missing"), None);
}

#[test]
fn assignment_binds_the_evaluated_expression() {
    let env = assert_output("x = 2 * (3 + 4) - 1; s = \"ab\" + \"cd\"; b = x >= 13;", "");
    assert_eq!(env.lookup("x"), Value::Number(13.0));
    assert_eq!(env.lookup("s"), Value::from("abcd"));
    assert_eq!(env.lookup("b"), Value::Bool(true));
}

#[test]
fn running_a_pure_program_twice_gives_the_same_environment() {
    let src = "a = 1; i = 0; while (i < 5) { a = a * 2; i = i + 1; } if (a == 32) { ok = 1; }";
    let first = assert_output(src, "");
    let second = assert_output(src, "");
    assert_eq!(first, second);
    assert_eq!(first.lookup("ok"), Value::Number(1.0));
}

#[test]
fn exactly_one_branch_runs_and_execution_resumes_after_the_construct() {
    for guard in ["1", "0"] {
        let src = format!("if ({guard}) {{ a = 1; }} else {{ b = 1; }} after = 1;");
        let env = assert_output(&src, "");

        assert_eq!(env.get("a").is_some(), guard == "1");
        assert_eq!(env.get("b").is_some(), guard == "0");
        assert_eq!(env.lookup("after"), Value::Number(1.0));
    }

    for guard in ["1", "0"] {
        let src = format!("if {guard}\n    a = 1\nelse\n    b = 1\nafter = 1\n");
        let env = assert_output_with(&src, indented(), "");

        assert_eq!(env.get("a").is_some(), guard == "1");
        assert_eq!(env.get("b").is_some(), guard == "0");
        assert_eq!(env.lookup("after"), Value::Number(1.0));
    }
}

#[test]
fn skipped_blocks_are_not_evaluated() {
    assert_output(r#"if (0) { print 1 / 0; if (1) { print "nested"; } } print "b";"#, "b\n");
    assert_output(r#"if (1) { } else { print undefined_thing / 0; } print "done";"#, "done\n");
}

#[test]
fn nested_loops_and_branches() {
    let src = r#"
        i = 0;
        while (i < 3) {
            j = 0;
            while (j < i) {
                j = j + 1;
            }
            if (i % 2 == 0) { print "even " + "row"; } else { print j; }
            i = i + 1;
        }
    "#;
    assert_output(src, "even row\n1.0\neven row\n");

    let src = "i = 0\nwhile i < 3\n    if i == 1\n        print \"one\"\n    else\n        print i\n    i = i + 1\nprint \"end\"\n";
    assert_output_with(src, indented(), "0.0\none\n2.0\nend\n");
}

#[test]
fn logical_operators_short_circuit() {
    let env = assert_output("a = 0 and 1 / 0; b = 1 || 1 / 0; c = not 2 > 3; d = !\"\";", "");
    assert_eq!(env.lookup("a"), Value::Bool(false));
    assert_eq!(env.lookup("b"), Value::Bool(true));
    assert_eq!(env.lookup("c"), Value::Bool(true));
    assert_eq!(env.lookup("d"), Value::Bool(true));
}

#[test]
fn comparisons_across_kinds() {
    let env = assert_output(r#"a = "abc" < "abd"; b = 1 == "1"; c = true != false;"#, "");
    assert_eq!(env.lookup("a"), Value::Bool(true));
    assert_eq!(env.lookup("b"), Value::Bool(false));
    assert_eq!(env.lookup("c"), Value::Bool(true));
    assert_eq!(assert_failure(r#"x = 1 < "2";"#).label(), "Runtime Error");
}

#[test]
fn renamed_keywords_replace_the_defaults() {
    let mut config = LanguageConfig::default();
    config.keywords.set(Construct::If, "wenn");
    config.keywords.set(Construct::Else, "sonst");
    config.keywords.set(Construct::Print, "zeige");

    let src = r#"x = 1; wenn x == 1 { zeige "ja"; } sonst { zeige "nein"; }"#;
    assert_output_with(src, config.clone(), "ja\n");

    let (e, _) = assert_failure_with("if x { }", config);
    assert!(matches!(e, Error::Syntax(SyntaxError::UnknownIdentifier { ref name, .. }) if name == "if"));
}

#[test]
fn colliding_or_reserved_keywords_are_configuration_errors() {
    let mut config = LanguageConfig::default();
    config.keywords.set(Construct::Print, "if");
    let (e, output) = assert_failure_with("print 1;", config);
    assert!(matches!(e, Error::Config(ConfigError::DuplicateKeyword { .. })));
    assert_eq!(e.label(), "ConfigError");
    assert!(output.is_empty());

    let mut config = LanguageConfig::default();
    config.keywords.set(Construct::While, "and");
    let (e, _) = assert_failure_with("", config);
    assert!(matches!(e, Error::Config(ConfigError::ReservedKeyword { .. })));

    let mut config = LanguageConfig::default();
    config.keywords.set(Construct::Input, "read line");
    let (e, _) = assert_failure_with("", config);
    assert!(matches!(e, Error::Config(ConfigError::InvalidKeyword { .. })));
}

#[test]
fn for_is_recognised_but_not_implemented() {
    let e = assert_failure("x = 1; for i { print i; }");
    assert!(matches!(e, Error::Syntax(SyntaxError::NotImplemented { line: 1, .. })));

    let (e, _) = assert_failure_with("for i\n    print i\n", indented());
    assert!(matches!(e, Error::Syntax(SyntaxError::NotImplemented { .. })));
}

#[test]
fn lexical_errors_stop_the_run_before_any_output() {
    let (e, output) = assert_failure_with("print \"a\";\nx = 1 @ 2;", LanguageConfig::default());
    assert_eq!(e.label(), "LexicalError");
    assert!(matches!(e, Error::Syntax(SyntaxError::UnrecognizedCharacter { line: 2, .. })));
    assert!(output.is_empty());

    let (e, output) = assert_failure_with("print \"a\"\nx = $\n", indented());
    assert_eq!(e.label(), "LexicalError");
    assert!(output.is_empty());
}

#[test]
fn input_reads_one_line_per_statement() {
    let src = r#"input first; input second; print first + " & " + second;"#;
    let (result, output) = run_with(src, LanguageConfig::default(), "Ada\r\nGrace\n");
    assert!(result.is_ok());
    assert_eq!(output, "Ada & Grace\n");

    let (result, _) = run_with("input x\nprint x\n", indented(), "");
    let e = result.expect_err("input at end of stdin should fail");
    assert_eq!(e.label(), "IOError");
}

#[test]
fn io_failures_end_the_run_in_both_styles() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.txt");
    let missing = missing.to_str().expect("UTF-8 temp path");

    let src = format!(r#"print "before"; file_read "{missing}" x; print "after";"#);
    let (e, output) = assert_failure_with(&src, LanguageConfig::default());
    assert!(matches!(e, Error::Runtime(RuntimeError::Io { .. })));
    assert_eq!(output, "before\n");

    let src = format!("print \"before\"\nfile_read \"{missing}\" x\nprint \"after\"\n");
    let (e, output) = assert_failure_with(&src, indented());
    assert_eq!(e.label(), "IOError");
    assert_eq!(output, "before\n");

    let e = assert_failure("file_write 42 \"text\";");
    assert!(matches!(e, Error::Runtime(RuntimeError::ExpectedString { .. })));
}

#[test]
fn runtime_errors_carry_the_line() {
    let e = assert_failure("x = 1;\ny = x / 0;");
    assert!(matches!(e, Error::Runtime(RuntimeError::DivisionByZero { line: 2 })));
    assert_eq!(e.to_string(), "Error on line 2: Division by zero.");

    let e = assert_failure("x = -\"text\";");
    assert!(matches!(e, Error::Runtime(RuntimeError::InvalidOperand { .. })));
}

#[test]
fn brace_syntax_errors() {
    assert!(matches!(assert_failure("if (1) { print 1;"),
                     Error::Syntax(SyntaxError::UnclosedBlock { line: 1 })));
    assert!(matches!(assert_failure("else { }"), Error::Syntax(SyntaxError::ElseWithoutIf { .. })));
    assert!(matches!(assert_failure("x = 1"),
                     Error::Syntax(SyntaxError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("print 1 2;"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("hello;"),
                     Error::Syntax(SyntaxError::UnknownIdentifier { .. })));
    assert!(matches!(assert_failure("} x = 1;"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("if (1) print 1;"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("true = 1;"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
}

#[test]
fn indentation_syntax_errors() {
    let fails = |src: &str| assert_failure_with(src, indented()).0;

    assert!(matches!(fails("x = 1\n    y = 2\n"),
                     Error::Syntax(SyntaxError::UnexpectedIndent { line: 2 })));
    assert!(matches!(fails("if 1\nprint 1\n"),
                     Error::Syntax(SyntaxError::ExpectedIndentedBlock { line: 1, .. })));
    assert!(matches!(fails("while 0\n"),
                     Error::Syntax(SyntaxError::ExpectedIndentedBlock { .. })));
    assert!(matches!(fails("if 1\n   print 1\n"),
                     Error::Syntax(SyntaxError::InconsistentIndentation { width: 3, .. })));
    assert!(matches!(fails("print 1;\n"), Error::Syntax(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(fails("if 1\n    print 1\n        print 2\n"),
                     Error::Syntax(SyntaxError::UnexpectedIndent { line: 3 })));
}

#[test]
fn indentation_skips_blank_lines_comments_and_accepts_tabs() {
    let src = "# header\n\nx = 3\nif x > 2\n\t# inside\n\tprint \"tab\"\n\nprint x # trailing\n";
    assert_output_with(src, indented(), "tab\n3.0\n");

    let config = LanguageConfig { indent_width: 2,
                                  ..indented() };
    assert_output_with("if 1\n  if 1\n    print 2\n", config, "2.0\n");
}

#[test]
fn custom_comment_marker() {
    let config = LanguageConfig { comment_marker: "//".into(),
                                  ..LanguageConfig::default() };
    assert_output_with("x = 4; // four\nprint x / 2; // halves\n", config, "2.0\n");
}

#[test]
fn empty_blocks_are_allowed() {
    assert_output("if (1) {} else {} while (0) {} print \"ok\";", "ok\n");
}

#[test]
fn variables_persist_between_runs_of_one_interpreter() {
    let mut output = Vec::new();
    let mut interpreter =
        Interpreter::new(LanguageConfig::default(), &b""[..], &mut output).expect("valid config");

    interpreter.run("x = 41;").expect("first run");
    interpreter.run("x = x + 1; print x;").expect("second run");
    assert_eq!(interpreter.environment().lookup("x"), Value::Number(42.0));

    drop(interpreter);
    assert_eq!(String::from_utf8(output).expect("UTF-8"), "42.0\n");
}

#[test]
fn sample_programs_produce_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/programs").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| {
                                                   e.path()
                                                    .extension()
                                                    .is_some_and(|ext| ext == "test-lang")
                                               })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("expected"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("input")).unwrap_or_default();

        let config = if path.components().any(|c| c.as_os_str() == "indentation") {
            indented()
        } else {
            LanguageConfig::default()
        };

        count += 1;
        match run_with(&source, config, &input) {
            (Ok(_), output) => assert_eq!(output, expected, "wrong output for {path:?}"),
            (Err(e), _) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

#[test]
fn over_deep_regions_fail_whether_or_not_they_run() {
    for guard in ["0", "1"] {
        let src = format!("if {guard}\n        print 1\nprint 2\n");
        let (e, output) = assert_failure_with(&src, indented());
        assert!(matches!(e, Error::Syntax(SyntaxError::UnexpectedIndent { line: 2 })));
        assert!(output.is_empty());
    }

    let (e, _) = assert_failure_with("while 0\n        print 1\n", indented());
    assert!(matches!(e, Error::Syntax(SyntaxError::UnexpectedIndent { line: 2 })));

    let (e, _) = assert_failure_with("if 0\n    x = 1\nelse\n        print 1\n", indented());
    assert!(matches!(e, Error::Syntax(SyntaxError::UnexpectedIndent { line: 4 })));
}

#[test]
fn indent_width_is_bounded() {
    let config = LanguageConfig { indent_width: usize::MAX,
                                  ..indented() };
    let (e, _) = assert_failure_with("x = 1\n", config);
    assert!(matches!(e, Error::Config(ConfigError::InvalidIndentWidth)));

    let lines = load_lines("if 1\n\t\tprint x\n", "#", usize::MAX).expect("no overflow");
    assert_eq!(lines.len(), 2);

    let config = LanguageConfig { indent_width: 16,
                                  ..indented() };
    assert_output_with("if 1\n\tprint 1\n", config, "1.0\n");
}

#[test]
fn number_display_and_nan_truthiness() {
    assert_output("print 10000000000000000; print 0.00001; print 0.5;", "1e16\n1e-5\n0.5\n");

    let huge = "9".repeat(400);
    let src = format!(r#"x = {huge} - {huge}; if (x) {{ print "true"; }} else {{ print "false"; }} print x;"#);
    assert_output(&src, "false\nNaN\n");
}
