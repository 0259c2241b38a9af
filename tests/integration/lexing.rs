//! End-to-end lexing through the public API

use rug::frontend::lexer::{tokenize, TokenKind};
use std::io::Write;

#[test]
fn lexes_a_small_program() {
    let src = "\
// sum two numbers
if x == 0x10 ; // hex bound
    y = 12.3e+2i
else
    z = .5
";
    let kinds: Vec<TokenKind> = tokenize(src).map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Newline,
            TokenKind::KwIf,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Imaginary,
            TokenKind::Newline,
            TokenKind::KwElse,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Float,
            TokenKind::Newline,
        ]
    );
}

#[test]
fn literals_survive_the_channel_unchanged() {
    let src = "0x123p-2 0b101 0o17 001 42i";
    let literals: Vec<String> = tokenize(src).map(|t| t.literal).collect();
    assert_eq!(literals, vec!["0x123p-2", "0b101", "0o17", "001", "42i"]);
}

#[test]
fn run_file_dumps_tokens() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "if a == b ; c").expect("write source");

    rug::run_file(file.path()).expect("run_file");
}

#[test]
fn run_file_reports_missing_file() {
    let err = rug::run_file(std::path::Path::new("no/such/file.rug")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
