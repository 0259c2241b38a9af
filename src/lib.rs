//! Rug Programming Language
//!
//! Front end of the rug toolchain. The crate currently covers lexical
//! analysis: source text goes in, a lazy stream of classified tokens comes
//! out.
//!
//! # Example
//!
//! ```no_run
//! use rug::frontend::lexer::tokenize;
//!
//! for token in tokenize("12.3e+2i //comment") {
//!     println!("{token}");
//! }
//! ```

#![warn(rust_2018_idioms)]
#![allow(dead_code)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

use std::fs;
use std::path::Path;
use tracing::debug;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Rug";

/// Tokenize a source file and print one token per line.
///
/// This is the whole driver: load the file, run the lexer, dump the
/// stream. Anything smarter (parsing, evaluation) sits behind the token
/// stream and does not exist yet.
pub fn run_file(path: &Path) -> Result<()> {
    debug!("tokenizing file: {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;

    for token in frontend::lexer::tokenize(source) {
        println!("{token}");
    }

    Ok(())
}
