//! Block-framed stream compression: each push writes a u32 little-endian
//! length followed by that many compressed bytes. There is no magic number
//! and no checksum — a stream is just length-prefixed blocks, decoded one
//! at a time by [`StreamReader::pull`].

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::api::{compress, decompress};
use crate::error::Error;

/// Chunk size `compress_to_stream` reads at a time when no caller-chosen
/// size is given.
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;

/// Writes one compressed block per [`StreamWriter::push`] call.
pub struct StreamWriter<W: Write> {
    inner: W,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        StreamWriter { inner }
    }

    /// Compress `data` and append it to the stream as one framed block.
    pub fn push(&mut self, data: &[u8]) -> Result<(), Error> {
        let compressed = compress(data)?;
        let size: u32 = compressed
            .len()
            .try_into()
            .map_err(|_| Error::InvalidBlockSize(compressed.len()))?;
        self.inner.write_u32::<LittleEndian>(size)?;
        self.inner.write_all(&compressed)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Reads one compressed block per [`StreamReader::pull`] call.
pub struct StreamReader<R: Read> {
    inner: R,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        StreamReader { inner }
    }

    /// Read and decompress the next block, or `None` at a clean end of
    /// stream (no bytes left before the length prefix).
    pub fn pull(&mut self) -> Result<Option<Vec<u8>>, Error> {
        let size = match self.inner.read_u32::<LittleEndian>() {
            Ok(size) => size,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut block = vec![0u8; size as usize];
        self.inner.read_exact(&mut block)?;
        let decompressed = decompress(&block, block.len() * 3)?;
        Ok(Some(decompressed))
    }
}

/// Read all of `reader` in `block_size`-sized chunks, compressing each into
/// a framed block written to `writer`.
pub fn compress_to_stream<R: Read, W: Write>(mut reader: R, writer: W, block_size: usize) -> Result<(), Error> {
    if block_size == 0 {
        return Err(Error::InvalidBlockSize(block_size));
    }
    let mut stream = StreamWriter::new(writer);
    let mut buf = vec![0u8; block_size];
    loop {
        let mut filled = 0;
        while filled < buf.len() {
            let n = reader.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled == 0 {
            return Ok(());
        }
        stream.push(&buf[..filled])?;
        if filled < buf.len() {
            return Ok(());
        }
    }
}

/// Pull every block from `reader`, writing the decompressed bytes to
/// `writer` in order.
pub fn decompress_from_stream<R: Read, W: Write>(reader: R, mut writer: W) -> Result<(), Error> {
    let mut stream = StreamReader::new(reader);
    while let Some(block) = stream.pull()? {
        writer.write_all(&block)?;
    }
    Ok(())
}
