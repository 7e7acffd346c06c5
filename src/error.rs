use thiserror::Error;

/// Everything that can go wrong compressing or decompressing a stream.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed compressed input: {0}")]
    MalformedToken(&'static str),

    #[error("stream block size must be nonzero and fit in a u32, got {0}")]
    InvalidBlockSize(usize),

    #[error("invalid argument: {0}")]
    InvalidArgs(String),
}
