//! Scanner driver
//!
//! Owns the cursor and the producing end of the token channel, and runs
//! the state machine to completion on a dedicated thread.

use crossbeam::channel::{self, Sender};
use std::thread;
use tracing::{debug, trace};

use super::cursor::Cursor;
use super::state::State;
use super::stream::TokenStream;
use super::tokens::{Token, TokenKind};
use super::LexError;
use crate::util::span::Span;

/// Token channel capacity. The producer suspends when the consumer falls
/// this many tokens behind; that send is the engine's only blocking point.
pub const TOKEN_BUFFER: usize = 255;

/// The scanner: cursor plus the producing side of the token channel.
pub struct Lexer {
    pub(crate) cursor: Cursor,
    tokens: Sender<Token>,
    disconnected: bool,
}

impl Lexer {
    fn new(source: String, tokens: Sender<Token>) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens,
            disconnected: false,
        }
    }

    /// Publish the pending lexeme as a token of the given kind, then start
    /// a fresh lexeme at the current position.
    pub(crate) fn emit(&mut self, kind: TokenKind) {
        let token = Token {
            kind,
            literal: self.cursor.current().to_owned(),
            span: Span::new(self.cursor.start_position(), self.cursor.position()),
        };
        trace!("emit {token}");
        if self.tokens.send(token).is_err() {
            self.disconnected = true;
        }
        self.cursor.ignore();
    }

    /// Publish an in-band diagnostic as an `Illegal` token at the current
    /// position. The pending lexeme is left untouched; the caller decides
    /// whether to discard it.
    pub(crate) fn error(&mut self, err: LexError) {
        let pos = self.cursor.position();
        let token = Token {
            kind: TokenKind::Illegal,
            literal: err.to_string(),
            span: Span::new(pos, pos),
        };
        trace!("emit {token}");
        if self.tokens.send(token).is_err() {
            self.disconnected = true;
        }
    }

    /// Run states until one halts. A consumer hangup is checked on entry
    /// to each state so an abandoned stream does not keep scanning.
    fn run(mut self) {
        let mut state = Some(State::Text);
        while let Some(s) = state {
            if self.disconnected {
                debug!("consumer hung up, stopping scan");
                break;
            }
            state = s.step(&mut self);
        }
    }
}

/// Tokenize a source buffer.
///
/// The scanner runs concurrently with the caller; the returned stream
/// yields tokens lazily in emission order and ends when the source is
/// exhausted. Errors arrive in-band as [`TokenKind::Illegal`] tokens.
pub fn tokenize(source: impl Into<String>) -> TokenStream {
    let source = source.into();
    debug!("lexing {} bytes of source", source.len());

    let (tx, rx) = channel::bounded(TOKEN_BUFFER);
    let lexer = Lexer::new(source, tx);
    thread::spawn(move || lexer.run());

    TokenStream::new(rx)
}
