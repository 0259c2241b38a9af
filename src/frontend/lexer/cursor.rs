//! Backtrackable rune cursor
//!
//! The cursor owns the source buffer for the duration of one tokenization
//! run and tracks two byte offsets into it: `start` (beginning of the
//! lexeme being built) and `pos` (next rune to decode). Every consumed
//! rune is logged on a history stack so the scanner can rewind to any
//! depth without re-decoding.

use crate::util::span::Position;

/// One history entry: the consumed rune (`None` for the end-of-input
/// sentinel, which has zero width) plus the line/column that were current
/// before it was consumed, so a rewind can restore them exactly.
#[derive(Debug, Clone, Copy)]
struct Consumed {
    rune: Option<char>,
    line: usize,
    column: usize,
}

/// Undo log of consumed runes, most recent on top.
///
/// Only lives for the current lexeme: emitting or ignoring clears it, so
/// the scanner can never rewind past the lexeme start.
#[derive(Debug, Default)]
struct RuneStack {
    entries: Vec<Consumed>,
}

impl RuneStack {
    fn push(&mut self, entry: Consumed) {
        self.entries.push(entry);
    }

    fn pop(&mut self) -> Option<Consumed> {
        self.entries.pop()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Scanning position over an immutable source buffer.
#[derive(Debug)]
pub struct Cursor {
    src: String,
    /// Byte offset of the current lexeme start.
    start: usize,
    /// Byte offset of the next rune to decode. `start <= pos` always.
    pos: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    history: RuneStack,
}

impl Cursor {
    pub fn new(src: String) -> Self {
        Self {
            src,
            start: 0,
            pos: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            history: RuneStack::default(),
        }
    }

    /// Decode and consume the rune at `pos`, or the zero-width end-of-input
    /// sentinel when the buffer is exhausted. Either way the consumption is
    /// recorded on the history stack so it can be undone.
    pub fn next(&mut self) -> Option<char> {
        let rune = self.src[self.pos..].chars().next();
        self.history.push(Consumed {
            rune,
            line: self.line,
            column: self.column,
        });

        if let Some(c) = rune {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        rune
    }

    /// Undo the most recent `next`. Rewinding the end-of-input sentinel or
    /// an empty history is a no-op; `pos` never falls below `start`.
    pub fn rewind(&mut self) {
        if let Some(entry) = self.history.pop() {
            if let Some(c) = entry.rune {
                self.pos = self.pos.saturating_sub(c.len_utf8());
                if self.pos < self.start {
                    self.pos = self.start;
                }
                self.line = entry.line;
                self.column = entry.column;
            }
        }
    }

    /// Inspect the next rune without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let r = self.next();
        self.rewind();
        r
    }

    /// Look ahead `n` runes (1-based: `peek_n(1)` equals `peek`) without
    /// consuming anything. Cursor position, line/column, and history depth
    /// are identical before and after the call.
    pub fn peek_n(&mut self, n: usize) -> Option<char> {
        let mut r = None;
        for _ in 0..n {
            r = self.next();
        }
        for _ in 0..n {
            self.rewind();
        }
        r
    }

    /// Consume one rune only if it is a member of `valid`. End-of-input
    /// never matches.
    pub fn accept(&mut self, valid: &str) -> bool {
        if let Some(c) = self.next() {
            if valid.contains(c) {
                return true;
            }
        }
        self.rewind();
        false
    }

    /// Consume the maximal run of runes from `valid`, leaving the cursor
    /// just past the last member.
    pub fn accept_run(&mut self, valid: &str) {
        while self.accept(valid) {}
    }

    /// The pending lexeme: everything consumed since the last emit/ignore.
    pub fn current(&self) -> &str {
        &self.src[self.start..self.pos]
    }

    /// Discard the pending lexeme: the next one starts at `pos`.
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
        self.start_column = self.column;
        self.history.clear();
    }

    /// Position of the next rune to decode.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.pos)
    }

    /// Position where the pending lexeme begins.
    pub fn start_position(&self) -> Position {
        Position::new(self.start_line, self.start_column, self.start)
    }
}
