//! Lexer module
//!
//! A state-machine scanner over a backtrackable rune cursor. The scanner
//! runs on its own thread and hands tokens to the consumer through a
//! bounded channel:
//!
//! - [`cursor`]: rune cursor with an undo history stack
//! - [`tokens`]: token kinds, the token type, keyword/operator lookup
//! - [`state`]: the state functions doing the actual lexical decisions
//! - [`tokenizer`]: the scanner driver owning cursor and channel sender
//! - [`stream`]: the consumer-side lazy token iterator

pub mod cursor;
pub mod state;
pub mod stream;
pub mod tokenizer;
pub mod tokens;

// Re-export types
pub use stream::TokenStream;
pub use tokenizer::tokenize;
pub use tokens::{Token, TokenKind};

/// Lexer error
///
/// Scanning never aborts: every error is delivered in-band as an
/// [`TokenKind::Illegal`] token whose literal is the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("'p' exponent requires hexadecimal mantissa")]
    NonHexMantissa,
    #[error("Unterminated comment")]
    UnterminatedComment,
}

#[cfg(test)]
mod tests;
