//! Rug Programming Language - CLI

use anyhow::Result;
use clap::Parser;
use rug::util::logger;
use rug::{run_file, NAME, VERSION};
use std::path::PathBuf;

/// Token dump driver for the rug front end
#[derive(Parser, Debug)]
#[command(name = "rug")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    /// Source file to tokenize
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        logger::init_debug();
    } else {
        logger::init();
    }

    run_file(&args.file)
}
