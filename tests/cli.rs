use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_keylang"))
}

struct CommandResult {
    status_ok: bool,
    stdout:    String,
    stderr:    String,
}

fn run_cmd(args: &[&str], input: Option<&str>, cwd: &Path) -> CommandResult {
    let mut cmd = Command::new(bin_path());
    cmd.args(args)
       .current_dir(cwd)
       .env_remove("RUST_LOG")
       .stdin(Stdio::piped())
       .stdout(Stdio::piped())
       .stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("spawn keylang");
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.unwrap_or_default().as_bytes())
             .expect("write stdin");
    }

    let output = child.wait_with_output().expect("wait for keylang");
    CommandResult { status_ok: output.status.success(),
                    stdout:    String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr:    String::from_utf8_lossy(&output.stderr).to_string(), }
}

fn write_program(dir: &Path, name: &str, source: &str) {
    fs::write(dir.join(name), source).expect("write program");
}

#[test]
fn runs_a_program_with_the_default_language() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_program(dir.path(),
                  "demo.test-lang",
                  r#"x = 5; if (x > 3) { print("big"); } else { print("small"); }"#);

    let result = run_cmd(&["demo.test-lang"], None, dir.path());
    assert!(result.status_ok, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "big\n");
}

#[test]
fn wrong_extension_is_rejected_before_interpreting() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_program(dir.path(), "demo.txt", r#"file_write "touched.txt" "x";"#);

    let result = run_cmd(&["demo.txt"], None, dir.path());
    assert!(!result.status_ok);
    assert!(result.stderr.contains("File must have .test-lang extension"),
            "stderr: {}",
            result.stderr);
    assert!(result.stdout.is_empty());
    assert!(!dir.path().join("touched.txt").exists());
}

#[test]
fn missing_file_argument_prints_usage() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = run_cmd(&[], None, dir.path());
    assert!(!result.status_ok);
    assert!(result.stderr.contains("Usage"), "stderr: {}", result.stderr);
}

#[test]
fn unreadable_source_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = run_cmd(&["absent.test-lang"], None, dir.path());
    assert!(!result.status_ok);
    assert!(result.stderr.contains("absent.test-lang"), "stderr: {}", result.stderr);
}

#[test]
fn interpreter_errors_are_one_labelled_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_program(dir.path(), "div.test-lang", "print 1;\nprint 1 / 0;\n");
    write_program(dir.path(), "lex.test-lang", "print 1;\nx = 1 @ 2;\n");
    write_program(dir.path(), "io.test-lang", r#"file_read "nope.txt" x;"#);

    let result = run_cmd(&["div.test-lang"], None, dir.path());
    assert!(result.status_ok);
    assert_eq!(result.stdout, "1.0\nRuntime Error: Error on line 2: Division by zero.\n");

    let result = run_cmd(&["lex.test-lang"], None, dir.path());
    assert!(result.status_ok);
    assert_eq!(result.stdout,
               "LexicalError: Error on line 2: Unrecognized character '@'.\n");

    let result = run_cmd(&["io.test-lang"], None, dir.path());
    assert!(result.status_ok);
    assert!(result.stdout.starts_with("IOError: Error on line 1: Error reading 'nope.txt'"),
            "stdout: {}",
            result.stdout);
}

#[test]
fn reads_standard_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_program(dir.path(), "echo.test-lang", r#"input line; print "got " + line;"#);

    let result = run_cmd(&["echo.test-lang"], Some("hello\n"), dir.path());
    assert!(result.status_ok, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "got hello\n");
}

#[test]
fn language_definition_file_and_overrides() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("german.json"),
              r#"{
                  "name": "Deutsch",
                  "extension": ".de",
                  "block_style": "spaces",
                  "comment_marker": "--",
                  "keywords": { "if": "wenn", "else": "sonst", "print": "zeige" }
              }"#).expect("write config");
    write_program(dir.path(),
                  "demo.de",
                  "-- kommentar\nx = 2\nwenn x > 1\n    zeige \"gross\"\nsonst\n    zeige \"klein\"\n");

    let result = run_cmd(&["--config", "german.json", "demo.de"], None, dir.path());
    assert!(result.status_ok, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "gross\n");

    write_program(dir.path(), "loop.de", "i = 0\nwhile i < 2\n    show i\n    i = i + 1\n");
    let result = run_cmd(&["-c", "german.json", "-k", "print=show", "loop.de"],
                         None,
                         dir.path());
    assert!(result.status_ok, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "0.0\n1.0\n");

    write_program(dir.path(), "braces.lang", "print 3;");
    let result = run_cmd(&["--extension", "lang", "--style", "braces", "braces.lang"],
                         None,
                         dir.path());
    assert!(result.status_ok, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "3.0\n");
}

#[test]
fn invalid_language_definitions_fail() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_program(dir.path(), "demo.test-lang", "print 1;");

    let result = run_cmd(&["-k", "print=if", "demo.test-lang"], None, dir.path());
    assert!(!result.status_ok);
    assert!(result.stderr.starts_with("ConfigError:"), "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty());

    let result = run_cmd(&["-k", "loop=repeat", "demo.test-lang"], None, dir.path());
    assert!(!result.status_ok);

    fs::write(dir.path().join("broken.json"), r#"{ "colour": "red" }"#).expect("write config");
    let result = run_cmd(&["--config", "broken.json", "demo.test-lang"], None, dir.path());
    assert!(!result.status_ok);
    assert!(result.stderr.contains("broken.json"), "stderr: {}", result.stderr);
}
