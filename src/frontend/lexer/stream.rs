//! Consumer side of the token channel

use crossbeam::channel::Receiver;

use super::tokens::Token;

/// A lazy, finite, forward-only sequence of tokens.
///
/// Tokens arrive in exact emission order with no duplication. `next`
/// blocks while the scanner is still working and the queue is empty, and
/// returns `None` forever once the channel has been closed and drained;
/// the stream cannot be restarted. Dropping the stream early disconnects
/// the channel and the scanner stops at its next dispatch.
pub struct TokenStream {
    rx: Receiver<Token>,
}

impl TokenStream {
    pub(crate) fn new(rx: Receiver<Token>) -> Self {
        Self { rx }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.rx.recv().ok()
    }
}
