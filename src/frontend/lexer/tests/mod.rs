//! Lexer unit tests
//!
//! Organized test modules:
//! - basic: identifiers, whitespace, newlines, dispatch
//! - literals: the numeric literal grammar
//! - comments: line/block comments and error recovery
//! - cursor: backtrackable cursor and rune history
//! - stream: token channel protocol

mod cursor;

use crate::frontend::lexer::{tokenize, Token, TokenKind};

/// Collect the whole stream for a snippet.
pub fn lex(src: &str) -> Vec<Token> {
    tokenize(src).collect()
}

/// Collect only the kinds.
pub fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).map(|t| t.kind).collect()
}
