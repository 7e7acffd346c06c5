//! Command-line surface: compress or decompress a file, either in one shot
//! or as a sequence of framed blocks.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Read the whole input into memory and run the one-shot codec.
    File,
    /// Chunk the input into fixed-size blocks, each framed independently.
    Stream,
}

#[derive(Debug, Parser)]
#[command(name = "ulz77", version, about = "A sentinel-escaped LZ77 sliding-window codec")]
pub struct Args {
    /// Compress the input.
    #[arg(short = 'c', long, conflicts_with = "decompress")]
    pub compress: bool,

    /// Decompress the input.
    #[arg(short = 'd', long)]
    pub decompress: bool,

    /// Input file path.
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Whether to buffer the whole file or stream it in blocks.
    #[arg(long, value_enum, default_value = "file")]
    pub method: Method,

    /// Block size in bytes, only meaningful with `--method stream`.
    #[arg(long = "bs", default_value_t = crate::stream::DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,
}

impl Args {
    pub fn mode(&self) -> Result<Mode, crate::error::Error> {
        match (self.compress, self.decompress) {
            (true, false) => Ok(Mode::Compress),
            (false, true) => Ok(Mode::Decompress),
            _ => Err(crate::error::Error::InvalidArgs(
                "exactly one of -c/--compress or -d/--decompress must be given".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}
