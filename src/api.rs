//! One-shot compress/decompress: drives [`Encoder`]/[`Decoder`] to
//! completion, doubling the destination buffer whenever it signals
//! [`EncodeOutcome::BufferFull`]/[`DecodeOutcome::BufferFull`].

use crate::decode::{DecodeOutcome, Decoder};
use crate::encode::{EncodeOutcome, Encoder};
use crate::error::Error;

/// Minimum destination buffer the growth controller starts with.
const INITIAL_BUFFER_SIZE: usize = 4096;

/// Compress `src` in one call, returning the token stream.
pub fn compress(src: &[u8]) -> Result<Vec<u8>, Error> {
    let mut cap = core::cmp::max(src.len() * 3, INITIAL_BUFFER_SIZE);
    let mut out = vec![0u8; cap];
    let mut encoder = Encoder::new();
    let mut written = 0usize;
    let mut consumed = 0usize;

    loop {
        match encoder.encode(&mut out[written..], &src[consumed..])? {
            EncodeOutcome::Complete { dst_written, .. } => {
                written += dst_written;
                out.truncate(written);
                return Ok(out);
            }
            EncodeOutcome::BufferFull { src_consumed, dst_written } => {
                written += dst_written;
                consumed += src_consumed;
                cap *= 2;
                out.resize(cap, 0);
            }
        }
    }
}

/// Decompress `src` in one call, returning the original bytes.
///
/// `size_hint`, if known, seeds the initial output buffer to avoid
/// growth-controller churn; pass 0 when the decompressed size isn't known
/// up front.
pub fn decompress(src: &[u8], size_hint: usize) -> Result<Vec<u8>, Error> {
    let mut cap = core::cmp::max(size_hint, INITIAL_BUFFER_SIZE);
    let mut out = vec![0u8; cap];
    let mut decoder = Decoder::new();
    let mut written = 0usize;
    let mut consumed = 0usize;

    loop {
        match decoder.decode(&mut out[written..], &src[consumed..])? {
            DecodeOutcome::Complete { dst_written, .. } => {
                written += dst_written;
                out.truncate(written);
                return Ok(out);
            }
            DecodeOutcome::BufferFull { src_consumed, dst_written } => {
                written += dst_written;
                consumed += src_consumed;
                cap *= 2;
                out.resize(cap, 0);
            }
        }
    }
}
