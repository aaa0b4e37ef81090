// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the `lex` and `check` commands.
//!
//! Each test works in its own temporary directory and drives the command
//! handlers with in-memory output streams.

use std::fs;
use std::path::{Path, PathBuf};

use clexc::commands::{check_file, check_source_len, lex_file, read_source};
use clexc::error::MAX_SOURCE_LEN;
use clexc::{CliError, LexOptions, LexSummary};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "#include <iostream>\n\
                       int main() {\n\
                       \tint a = 10; /* ten */\n\
                       \tcout << a;\n\
                       \treturn 0;\n\
                       }\n";

fn options_in(dir: &tempfile::TempDir, source: &str) -> LexOptions {
    let input = dir.path().join("code.txt");
    fs::write(&input, source).unwrap();
    LexOptions {
        input,
        output: dir.path().join("result.txt"),
        echo: true,
    }
}

#[test]
fn lex_writes_table_and_echoes_it() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_in(&dir, PROGRAM);
    let mut out = Vec::new();

    let summary = lex_file(&options, &mut out).unwrap();

    let written = fs::read_to_string(&options.output).unwrap();
    let echoed = String::from_utf8(out).unwrap();
    assert!(echoed.starts_with(&written), "console echo should match file");
    assert!(echoed.ends_with(&format!(
        "Lexical analysis completed. Results have been saved to {}.\n",
        options.output.display()
    )));

    assert_eq!(
        summary,
        LexSummary {
            tokens: 24,
            illegal: 0,
            lines: 7,
        }
    );
    assert!(written.contains("LSHIFT               | <<                   | 4    \n"));
    assert!(written.contains("RETURN               | return               | 5    \n"));
    assert!(written.ends_with("EOF                  |                      | 7    \n"));
}

#[test]
fn lex_row_count_matches_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_in(&dir, PROGRAM);
    let summary = lex_file(&options, &mut Vec::new()).unwrap();

    let written = fs::read_to_string(&options.output).unwrap();
    // header + rule + one row per token
    assert_eq!(written.lines().count(), summary.tokens + 2);
}

#[test]
fn lex_quiet_only_prints_completion() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options_in(&dir, "x");
    options.echo = false;
    let mut out = Vec::new();

    lex_file(&options, &mut out).unwrap();

    let echoed = String::from_utf8(out).unwrap();
    assert!(echoed.starts_with("Lexical analysis completed."));
    assert_eq!(echoed.lines().count(), 1);
    assert!(options.output.exists());
}

#[test]
fn lex_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_in(&dir, "a");
    fs::write(&options.output, "stale contents that should disappear\n".repeat(50)).unwrap();

    lex_file(&options, &mut Vec::new()).unwrap();

    let written = fs::read_to_string(&options.output).unwrap();
    assert!(!written.contains("stale"));
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn lex_reports_illegal_tokens_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_in(&dir, "a@b");
    let summary = lex_file(&options, &mut Vec::new()).unwrap();
    assert_eq!(summary.illegal, 1);

    let written = fs::read_to_string(&options.output).unwrap();
    assert!(written.contains("ILLEGAL              | @                    | 1    \n"));
}

#[test]
fn lex_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let options = LexOptions {
        input: dir.path().join("nope.c"),
        output: dir.path().join("result.txt"),
        echo: true,
    };
    let mut out = Vec::new();

    let err = lex_file(&options, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot find file"));
    assert!(out.is_empty());
    assert!(!options.output.exists());
}

#[test]
fn lex_invalid_utf8_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bin.c");
    fs::write(&input, [0x66_u8, 0xFF, 0xFE]).unwrap();
    let options = LexOptions {
        input,
        output: dir.path().join("result.txt"),
        echo: false,
    };

    let err = lex_file(&options, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().ends_with("contains invalid UTF-8 data"));
}

#[test]
fn lex_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options_in(&dir, "int x;");
    options.output = dir.path().join("missing_dir").join("result.txt");

    let mut out = Vec::new();

    let err = lex_file(&options, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Write { ref path, .. } if *path == options.output));
    assert!(out.is_empty(), "nothing should be echoed when the write fails");
}

#[test]
fn source_length_limit() {
    let path = Path::new("huge.c");
    assert!(check_source_len(path, 0).is_ok());
    assert!(check_source_len(path, MAX_SOURCE_LEN).is_ok());

    let err = check_source_len(path, MAX_SOURCE_LEN + 1).unwrap_err();
    assert!(matches!(err, CliError::TooLarge { len, .. } if len == MAX_SOURCE_LEN + 1));
}

#[test]
fn read_source_accepts_small_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_in(&dir, "int x;");
    assert_eq!(read_source(&options.input).unwrap(), "int x;");
}

#[test]
fn check_clean_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_in(&dir, PROGRAM);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let summary = check_file(&options.input, &mut out, &mut err).unwrap();

    assert_eq!(summary.illegal, 0);
    assert!(err.is_empty());
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        format!("OK: {} (24 tokens)\n", options.input.display())
    );
}

#[test]
fn check_lists_illegal_characters() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_in(&dir, "int a;\na = 1.5 @ 2;\n");
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let summary = check_file(&options.input, &mut out, &mut err).unwrap();

    assert_eq!(summary.illegal, 2);
    assert!(out.is_empty());
    let path = options.input.display();
    assert_eq!(
        String::from_utf8(err).unwrap(),
        format!("{path}:2: illegal character '.'\n{path}:2: illegal character '@'\n")
    );
}

#[test]
fn check_missing_file() {
    let path = PathBuf::from("definitely/not/here.c");
    let err = check_file(&path, &mut Vec::new(), &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "cannot find file 'definitely/not/here.c'");
}
