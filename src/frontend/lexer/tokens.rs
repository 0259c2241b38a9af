//! Token types

use crate::util::span::Span;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Token kind
///
/// Closed set, fixed at compile time. `Eof`, `Comment`, and `Str` are part
/// of the model for symmetry but are never emitted today: end of input is
/// signaled by channel closure, comments are ignored, and string literals
/// are a reserved extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,
    Newline,
    Comment,
    Identifier,
    Int,
    Float,
    Imaginary,
    Str,

    // Operators
    Plus,
    Minus,
    Asterisk,
    Slash,
    Assign,
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Semicolon,

    // Keywords
    KwIf,
    KwElse,
}

impl TokenKind {
    /// Display name of the kind
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Imaginary => "IMAGINARY",
            TokenKind::Str => "STRING",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::KwIf => "IF",
            TokenKind::KwElse => "ELSE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token
///
/// Immutable once emitted. `literal` holds the raw lexeme text, or the
/// rendered diagnostic message for [`TokenKind::Illegal`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    /// Line the lexeme starts on (1-indexed)
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    /// Column the lexeme starts at (1-indexed)
    pub fn column(&self) -> usize {
        self.span.start.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})@{}", self.kind, self.literal, self.span.start)
    }
}

/// Keyword and operator lexemes, exact match only.
///
/// Read-only after first use; no writers exist, so no synchronization is
/// needed beyond the lazy initialization itself.
static LOOKUP: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("if", TokenKind::KwIf),
        ("else", TokenKind::KwElse),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Asterisk),
        ("/", TokenKind::Slash),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
        ("=", TokenKind::Assign),
        ("==", TokenKind::Equal),
        ("!=", TokenKind::NotEqual),
        (">", TokenKind::Greater),
        ("<", TokenKind::Less),
        (">=", TokenKind::GreaterEqual),
        ("<=", TokenKind::LessEqual),
    ])
});

/// Classify a scanned lexeme: keyword/operator kind on an exact table hit,
/// generic identifier otherwise. No prefix or partial matching.
pub fn lookup(lexeme: &str) -> TokenKind {
    LOOKUP.get(lexeme).copied().unwrap_or(TokenKind::Identifier)
}
