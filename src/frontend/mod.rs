//! Rug front end
//!
//! Only the lexical stage exists so far. The parser will consume the
//! token stream produced here.

pub mod lexer;
