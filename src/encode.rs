//! The encoder state machine: turns a byte slice into a token stream,
//! suspending cleanly whenever the destination buffer runs low.

use crate::error::Error;
use crate::ring::{hash17, Ring};
use crate::search;
use crate::token::{self, MATCH_LEN_MIN};

/// Destination headroom the middle loop insists on before starting a new
/// token. Sized for the worst-case match token (sentinel + 2 header bytes
/// + 2 length-extension bytes), with a little slack.
const RESERVED: usize = 10;

pub enum EncodeOutcome {
    Complete { src_consumed: usize, dst_written: usize },
    BufferFull { src_consumed: usize, dst_written: usize },
}

/// Encodes one logical stream. Holds the sliding window and the small
/// amount of state needed to resume after a [`EncodeOutcome::BufferFull`].
pub struct Encoder {
    ring: Ring,
    future_bytes: u32,
    suspended: bool,
    resume_offset: Option<usize>,
    src_total_len: u64,
    dst_total_len: u64,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            ring: Ring::new(),
            future_bytes: 0,
            suspended: false,
            resume_offset: None,
            src_total_len: 0,
            dst_total_len: 0,
        }
    }

    /// Byte offset into the most recent `src` slice passed to [`Self::encode`]
    /// at which encoding was suspended, or `None` if the encoder isn't
    /// mid-call. Callers resuming after [`EncodeOutcome::BufferFull`] should
    /// slice their source with this offset before calling again.
    pub fn resume_offset(&self) -> Option<usize> {
        self.resume_offset
    }

    pub fn src_total_len(&self) -> u64 {
        self.src_total_len
    }

    pub fn dst_total_len(&self) -> u64 {
        self.dst_total_len
    }

    /// Encode as much of `src` as fits in `dst`. On [`EncodeOutcome::BufferFull`]
    /// the caller must grow (or rotate) `dst` and call again with `src`
    /// advanced by `src_consumed` bytes.
    pub fn encode(&mut self, dst: &mut [u8], src: &[u8]) -> Result<EncodeOutcome, Error> {
        let len = src.len();
        let mut src_p = 0usize;
        let mut dst_p = 0usize;

        if !self.suspended {
            let prologue_end = core::cmp::min(len, 3);
            if len >= 2 {
                self.future_bytes = ((src[0] as u32) << 8) | (src[1] as u32);
            }
            while src_p < prologue_end {
                let have_lookahead = src_p + 2 < len;
                if have_lookahead {
                    self.future_bytes = (self.future_bytes << 8) | (src[src_p + 2] as u32);
                }
                self.ring.append(src[src_p]);
                if have_lookahead {
                    self.ring.update_index(hash17(self.future_bytes), self.ring.recent_pos(0));
                }
                token::write_literal(dst, &mut dst_p, src[src_p]);
                src_p += 1;
            }
        }

        if len > 6 {
            let src_end = len - 3;
            while src_p < src_end {
                if dst_p + RESERVED > dst.len() {
                    self.suspended = true;
                    self.resume_offset = Some(src_p);
                    self.src_total_len += src_p as u64;
                    self.dst_total_len += dst_p as u64;
                    return Ok(EncodeOutcome::BufferFull { src_consumed: src_p, dst_written: dst_p });
                }

                let hash = hash17((self.future_bytes << 8) | src[src_p + 2] as u32);
                let (matched_pos, matched_len) = search::find(&self.ring, hash, &src[src_p..src_end]);

                if matched_len >= MATCH_LEN_MIN {
                    let emit_len = matched_len & 0x3FFF;
                    token::write_match(dst, &mut dst_p, matched_pos as u16, emit_len);
                    for i in 0..emit_len {
                        self.future_bytes = (self.future_bytes << 8) | (src[src_p + i + 2] as u32);
                        self.ring.append(src[src_p + i]);
                        self.ring.update_index(hash17(self.future_bytes), self.ring.recent_pos(0));
                    }
                    src_p += emit_len;
                } else {
                    self.future_bytes = (self.future_bytes << 8) | (src[src_p + 2] as u32);
                    self.ring.append(src[src_p]);
                    self.ring.update_index(hash17(self.future_bytes), self.ring.recent_pos(0));
                    token::write_literal(dst, &mut dst_p, src[src_p]);
                    src_p += 1;
                }
            }
        }

        while src_p < len {
            token::write_literal(dst, &mut dst_p, src[src_p]);
            src_p += 1;
        }

        self.suspended = false;
        self.resume_offset = None;
        self.src_total_len += src_p as u64;
        self.dst_total_len += dst_p as u64;
        Ok(EncodeOutcome::Complete { src_consumed: src_p, dst_written: dst_p })
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_all(src: &[u8]) -> Vec<u8> {
        let mut enc = Encoder::new();
        let mut dst = vec![0u8; src.len() * 3 + 64];
        match enc.encode(&mut dst, src).unwrap() {
            EncodeOutcome::Complete { dst_written, .. } => {
                dst.truncate(dst_written);
                dst
            }
            EncodeOutcome::BufferFull { .. } => panic!("buffer should have been large enough"),
        }
    }

    #[test]
    fn two_byte_input_passes_through_untouched() {
        assert_eq!(encode_all(b"AB"), b"AB");
    }

    #[test]
    fn lone_sentinel_byte_escapes() {
        assert_eq!(encode_all(&[255]), vec![255, 0, 0]);
    }

    #[test]
    fn five_sentinel_bytes_all_escape() {
        let src = [255u8; 5];
        let out = encode_all(&src);
        assert_eq!(out, vec![255, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0]);
    }

    #[test]
    fn distinct_bytes_never_trigger_a_match() {
        let out = encode_all(b"abcdefghij");
        assert_eq!(out, b"abcdefghij");
    }

    /// Inputs of exactly 3 or 4 bytes exercise the prologue's look-ahead at
    /// its tightest margin (the third/fourth byte isn't always there to
    /// peek at); these must neither panic nor corrupt the hash index.
    #[test]
    fn three_byte_input_passes_through_untouched() {
        assert_eq!(encode_all(b"abc"), b"abc");
    }

    #[test]
    fn four_byte_input_passes_through_untouched() {
        assert_eq!(encode_all(b"abcd"), b"abcd");
    }

    #[test]
    fn four_byte_repeated_pair_passes_through_untouched() {
        assert_eq!(encode_all(b"abab"), b"abab");
    }
}
