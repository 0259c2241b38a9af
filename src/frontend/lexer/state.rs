//! Scanner state machine
//!
//! Each state performs one lexical decision against the cursor, optionally
//! emits a token, and names the state to run next. The machine halts when
//! a state returns `None`, which only happens at true end of input.

use super::tokenizer::Lexer;
use super::tokens::{self, TokenKind};
use super::LexError;

/// Horizontal whitespace skipped between lexemes. Newlines are tokens of
/// their own and are not in this set.
const WHITESPACE: &str = " \t\r";

const DECIMAL: &str = "0123456789";
const HEX: &str = "0123456789abcdefABCDEF";
const OCTAL: &str = "01234567";
const BINARY: &str = "01";

/// Scanner state: a transition value, not persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Dispatch state, re-entered after every emitted token.
    Text,
    Number,
    Comment,
    Identifier,
    // Reserved literal states, see the note at the bottom of this file.
    Str,
    RawStr,
    Char,
    Escape,
}

impl State {
    /// Run this state's transition function.
    pub(crate) fn step(self, l: &mut Lexer) -> Option<State> {
        match self {
            State::Text => lex_text(l),
            State::Number => lex_number(l),
            State::Comment => lex_comment(l),
            State::Identifier => lex_identifier(l),
            State::Str => lex_str(l),
            State::RawStr => lex_raw_str(l),
            State::Char => lex_char(l),
            State::Escape => lex_escape(l),
        }
    }
}

/// Dispatch: skip horizontal whitespace, then route on the next rune.
fn lex_text(l: &mut Lexer) -> Option<State> {
    l.cursor.accept_run(WHITESPACE);
    l.cursor.ignore();

    // End of input is the only halting condition.
    let r = l.cursor.peek()?;

    if r == '\n' {
        l.cursor.next();
        l.emit(TokenKind::Newline);
        return Some(State::Text);
    }

    if r == '/' && matches!(l.cursor.peek_n(2), Some('/' | '*')) {
        return Some(State::Comment);
    }

    // Numeric lead set: digits, a sign, or a dot with a digit behind it.
    if r.is_ascii_digit()
        || r == '+'
        || r == '-'
        || (r == '.' && l.cursor.peek_n(2).is_some_and(|c| c.is_ascii_digit()))
    {
        return Some(State::Number);
    }

    // Quoted literals would be routed here on their opening quote
    // (State::Str / State::RawStr / State::Char) once they are lexed.
    Some(State::Identifier)
}

/// Numeric literals: multi-base integers, fraction/exponent forms, and the
/// imaginary suffix, longest match first.
fn lex_number(l: &mut Lexer) -> Option<State> {
    let mut kind = TokenKind::Int;
    let mut digits = DECIMAL;

    l.cursor.accept("+-");

    // Base prefix probe.
    if l.cursor.accept("0") {
        if l.cursor.accept("xX") {
            digits = HEX;
        } else if l.cursor.accept("bB") {
            digits = BINARY;
        } else if l.cursor.accept("oO") {
            digits = OCTAL;
        } else {
            // Bare leading zero selects legacy octal; hand the zero back
            // so the digit run below picks it up again.
            digits = OCTAL;
            l.cursor.rewind();
        }
    }

    l.cursor.accept_run(digits);

    // Fractional part promotes to float.
    if l.cursor.accept(".") {
        kind = TokenKind::Float;
        l.cursor.accept_run(digits);
    }

    // Exponent. 'e' is a decimal exponent valid anywhere; 'p' is a binary
    // exponent valid only on a hexadecimal mantissa.
    let exponent = l.cursor.peek();
    if l.cursor.accept("eEpP") {
        if matches!(exponent, Some('p' | 'P')) && !l.cursor.current().contains(['x', 'X']) {
            l.error(LexError::NonHexMantissa);
            l.cursor.ignore();
            return Some(State::Text);
        }
        kind = TokenKind::Float;
        l.cursor.accept("+-");
        l.cursor.accept_run(DECIMAL);
    }

    // Imaginary suffix wins over int/float.
    if l.cursor.accept("i") {
        kind = TokenKind::Imaginary;
    }

    l.emit(kind);
    Some(State::Text)
}

/// Comments never produce a token; the whole lexeme is ignored.
fn lex_comment(l: &mut Lexer) -> Option<State> {
    l.cursor.accept("/");

    if l.cursor.accept("/") {
        // Line comment: up to but excluding the terminating newline.
        loop {
            match l.cursor.next() {
                Some('\n') | None => {
                    l.cursor.rewind();
                    break;
                }
                Some(_) => {}
            }
        }
    } else if l.cursor.accept("*") {
        // Block comment: through the closing `*/`. Hitting end of input
        // first is reported but scanning still resumes normally.
        loop {
            match l.cursor.next() {
                Some('*') if l.cursor.peek() == Some('/') => {
                    l.cursor.next();
                    break;
                }
                None => {
                    l.error(LexError::UnterminatedComment);
                    break;
                }
                Some(_) => {}
            }
        }
    }

    l.cursor.ignore();
    Some(State::Text)
}

/// Identifiers and everything else: a maximal run bounded by whitespace,
/// newline, or end of input, classified against the lookup table.
fn lex_identifier(l: &mut Lexer) -> Option<State> {
    loop {
        match l.cursor.next() {
            Some(c) if !WHITESPACE.contains(c) && c != '\n' => {}
            _ => {
                l.cursor.rewind();
                break;
            }
        }
    }

    let kind = tokens::lookup(l.cursor.current());
    l.emit(kind);
    Some(State::Text)
}

// Reserved literal states. Dispatch does not route to these yet; each is a
// no-op handing control back to dispatch, so the literal grammars can land
// without touching the number/comment/identifier states.

fn lex_str(_l: &mut Lexer) -> Option<State> {
    // TODO: quoted string literals ("asd")
    Some(State::Text)
}

fn lex_raw_str(_l: &mut Lexer) -> Option<State> {
    // TODO: raw string literals (`asd`)
    Some(State::Text)
}

fn lex_char(_l: &mut Lexer) -> Option<State> {
    // TODO: character literals ('a')
    Some(State::Text)
}

fn lex_escape(_l: &mut Lexer) -> Option<State> {
    // TODO: escape sequences (\n, \t, \xFF, \u{FFFF})
    Some(State::Text)
}
