//! The decoder state machine: the mirror image of [`crate::encode`]. Parses
//! a uniform token stream (there is no separate raw-passthrough region;
//! every output byte, including the first and last few, is produced by a
//! literal or match token) and suspends cleanly when the destination
//! buffer runs low.

use crate::error::Error;
use crate::ring::{hash17, Ring};
use crate::token::{self, ParsedToken};

const RESERVED: usize = 10;

pub enum DecodeOutcome {
    Complete { src_consumed: usize, dst_written: usize },
    BufferFull { src_consumed: usize, dst_written: usize },
}

pub struct Decoder {
    ring: Ring,
    last_bytes: u32,
    resume_offset: Option<usize>,
    src_total_len: u64,
    dst_total_len: u64,
}

impl Decoder {
    pub fn new() -> Self {
        Decoder {
            ring: Ring::new(),
            last_bytes: 0,
            resume_offset: None,
            src_total_len: 0,
            dst_total_len: 0,
        }
    }

    pub fn resume_offset(&self) -> Option<usize> {
        self.resume_offset
    }

    pub fn src_total_len(&self) -> u64 {
        self.src_total_len
    }

    pub fn dst_total_len(&self) -> u64 {
        self.dst_total_len
    }

    /// Push `byte` into the window and, once at least three bytes have
    /// ever been produced, index the triple ending at it.
    fn sink(&mut self, byte: u8) {
        self.last_bytes = (self.last_bytes << 8) | byte as u32;
        self.ring.append(byte);
        if self.ring.absolute_pos() >= 3 {
            self.ring.update_index(hash17(self.last_bytes), self.ring.recent_pos(2));
        }
    }

    pub fn decode(&mut self, dst: &mut [u8], src: &[u8]) -> Result<DecodeOutcome, Error> {
        let len = src.len();
        let mut src_p = 0usize;
        let mut dst_p = 0usize;

        while src_p < len {
            if dst_p + RESERVED > dst.len() {
                self.resume_offset = Some(src_p);
                self.src_total_len += src_p as u64;
                self.dst_total_len += dst_p as u64;
                return Ok(DecodeOutcome::BufferFull { src_consumed: src_p, dst_written: dst_p });
            }

            let token_start = src_p;
            match token::read_token(src, &mut src_p)? {
                ParsedToken::Literal(byte) => {
                    dst[dst_p] = byte;
                    self.sink(byte);
                    dst_p += 1;
                }
                ParsedToken::Match { pos, len: n } => {
                    let grow = self.ring.grow();
                    if pos as usize >= grow {
                        return Err(Error::MalformedToken("back-reference points outside the live window"));
                    }
                    if dst_p + n > dst.len() {
                        src_p = token_start;
                        self.resume_offset = Some(src_p);
                        self.src_total_len += src_p as u64;
                        self.dst_total_len += dst_p as u64;
                        return Ok(DecodeOutcome::BufferFull { src_consumed: src_p, dst_written: dst_p });
                    }
                    // distance < n is a self-overlapping copy (the match's
                    // back-reference is shorter than the run it produces,
                    // e.g. single-byte RLE): bytes past the live window at
                    // token start have to come from what this same token
                    // already wrote to `dst`, not from the ring.
                    let distance = grow - pos as usize;
                    for k in 0..n {
                        dst[dst_p + k] = if k < distance {
                            self.ring.get_relative(pos as usize + k)
                        } else {
                            dst[dst_p + k - distance]
                        };
                    }
                    for k in 0..n {
                        self.sink(dst[dst_p + k]);
                    }
                    dst_p += n;
                }
            }
        }

        self.resume_offset = None;
        self.src_total_len += src_p as u64;
        self.dst_total_len += dst_p as u64;
        Ok(DecodeOutcome::Complete { src_consumed: src_p, dst_written: dst_p })
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{EncodeOutcome, Encoder};

    fn round_trip(src: &[u8]) -> Vec<u8> {
        let mut enc = Encoder::new();
        let mut compressed = vec![0u8; src.len() * 3 + 64];
        let n = match enc.encode(&mut compressed, src).unwrap() {
            EncodeOutcome::Complete { dst_written, .. } => dst_written,
            EncodeOutcome::BufferFull { .. } => panic!("buffer too small"),
        };
        compressed.truncate(n);

        let mut dec = Decoder::new();
        let mut out = vec![0u8; src.len() + 64];
        let m = match dec.decode(&mut out, &compressed).unwrap() {
            DecodeOutcome::Complete { dst_written, .. } => dst_written,
            DecodeOutcome::BufferFull { .. } => panic!("buffer too small"),
        };
        out.truncate(m);
        out
    }

    #[test]
    fn round_trips_plain_text() {
        let src = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(round_trip(src), src);
    }

    #[test]
    fn round_trips_repeated_single_byte() {
        let src = vec![b'A'; 10];
        assert_eq!(round_trip(&src), src);
    }

    #[test]
    fn round_trips_overlapping_run() {
        let src = b"ABCDEABCDE";
        assert_eq!(round_trip(src), src);
    }

    #[test]
    fn round_trips_three_and_four_byte_inputs() {
        assert_eq!(round_trip(b"abc"), b"abc");
        assert_eq!(round_trip(b"abcd"), b"abcd");
    }

    #[test]
    fn round_trips_sentinel_heavy_input() {
        let src = vec![255u8; 20];
        assert_eq!(round_trip(&src), src);
    }

    #[test]
    fn round_trips_empty_input() {
        let src: &[u8] = &[];
        assert_eq!(round_trip(src), src);
    }

    #[test]
    fn resuming_with_a_caller_resliced_src_loses_no_bytes() {
        // Drives `decode` directly through several `BufferFull` suspensions
        // with a destination too small to finish in one call, re-slicing
        // `src` by `src_consumed` before each re-entry exactly as the
        // resumption contract requires (see `api::decompress`). A decoder
        // that also seeds its own `src_p` from the saved resume offset
        // would skip that many bytes a second time and corrupt the output.
        let src = b"the quick brown fox jumps over the lazy dog, the quick brown fox".repeat(3);
        let mut enc = Encoder::new();
        let mut compressed = vec![0u8; src.len() * 3 + 64];
        let n = match enc.encode(&mut compressed, &src).unwrap() {
            EncodeOutcome::Complete { dst_written, .. } => dst_written,
            EncodeOutcome::BufferFull { .. } => panic!("buffer too small"),
        };
        compressed.truncate(n);

        let mut dec = Decoder::new();
        let mut out = vec![0u8; src.len() + 64];
        let mut written = 0usize;
        let mut consumed = 0usize;
        loop {
            let mut small = vec![0u8; 16];
            match dec.decode(&mut small, &compressed[consumed..]).unwrap() {
                DecodeOutcome::Complete { src_consumed, dst_written } => {
                    out[written..written + dst_written].copy_from_slice(&small[..dst_written]);
                    written += dst_written;
                    consumed += src_consumed;
                    break;
                }
                DecodeOutcome::BufferFull { src_consumed, dst_written } => {
                    out[written..written + dst_written].copy_from_slice(&small[..dst_written]);
                    written += dst_written;
                    consumed += src_consumed;
                }
            }
        }
        out.truncate(written);
        assert_eq!(out, src);
    }

    #[test]
    fn decodes_a_self_overlapping_back_reference() {
        // pos 0, len 5 against a 1-byte live window (distance 1 < len):
        // classic single-byte-RLE overlap, each output byte copies the one
        // immediately before it.
        let src = [b'A', 255, 0x20, 0x00];
        let mut dec = Decoder::new();
        let mut out = [0u8; 16];
        match dec.decode(&mut out, &src).unwrap() {
            DecodeOutcome::Complete { dst_written, .. } => {
                assert_eq!(&out[..dst_written], b"AAAAAA");
            }
            DecodeOutcome::BufferFull { .. } => panic!("buffer too small"),
        }
    }

    #[test]
    fn rejects_back_reference_outside_window() {
        let src = [255u8, 0x10, 0x00];
        let mut dec = Decoder::new();
        let mut out = [0u8; 16];
        assert!(dec.decode(&mut out, &src).is_err());
    }
}
