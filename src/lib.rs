//! A lossless byte-stream codec built around a 4096-byte sliding window, a
//! 3-byte rolling hash over hash-chained candidates, and a token stream
//! that escapes a single reserved sentinel byte instead of carrying a
//! separate framing header.
//!
//! The low-level [`Encoder`]/[`Decoder`] pair is resumable: every call
//! either finishes or reports exactly how much of `src`/`dst` it used, so
//! callers can grow their buffers and continue. [`compress`]/[`decompress`]
//! wrap that into a one-shot API with an internal growth controller, and
//! [`compress_file`]/[`decompress_file`] wrap those again for whole-file
//! use. [`stream`] adds a block-framed stream format on top for data too
//! large to hold twice in memory.

mod api;
pub mod cli;
mod decode;
mod encode;
pub mod error;
mod file;
mod ring;
mod search;
pub mod stream;
mod token;

pub use api::{compress, decompress};
pub use decode::{DecodeOutcome, Decoder};
pub use encode::{EncodeOutcome, Encoder};
pub use error::Error;
pub use file::{compress_file, decompress_file};
