//! Whole-file compress/decompress: read a file fully into memory, run the
//! one-shot [`crate::api`] functions, write the result back out.

use std::fs;
use std::path::Path;

use crate::api::{compress, decompress};
use crate::error::Error;

pub fn compress_file(dst_path: impl AsRef<Path>, src_path: impl AsRef<Path>) -> Result<(), Error> {
    let src = fs::read(src_path)?;
    let compressed = compress(&src)?;
    fs::write(dst_path, compressed)?;
    Ok(())
}

pub fn decompress_file(dst_path: impl AsRef<Path>, src_path: impl AsRef<Path>) -> Result<(), Error> {
    let src = fs::read(src_path)?;
    let decompressed = decompress(&src, src.len() * 3)?;
    fs::write(dst_path, decompressed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("input.txt");
        let compressed_path = dir.path().join("input.ulz");
        let output_path = dir.path().join("output.txt");

        let contents = b"round trip through the filesystem, round trip through the filesystem".repeat(20);
        fs::write(&src_path, &contents).unwrap();

        compress_file(&compressed_path, &src_path).unwrap();
        decompress_file(&output_path, &compressed_path).unwrap();

        let roundtripped = fs::read(&output_path).unwrap();
        assert_eq!(roundtripped, contents);
    }

    #[test]
    fn empty_file_round_trips() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("empty.txt");
        let compressed_path = dir.path().join("empty.ulz");
        let output_path = dir.path().join("empty.out");

        fs::write(&src_path, b"").unwrap();
        compress_file(&compressed_path, &src_path).unwrap();
        decompress_file(&output_path, &compressed_path).unwrap();

        assert_eq!(fs::read(&output_path).unwrap(), Vec::<u8>::new());
    }
}
