use std::env;
use ulz77::compress_file;

fn main() -> anyhow::Result<()> {
    let filename_in = env::args().nth(1).unwrap();
    let filename_out = env::args().nth(2).unwrap();
    compress_file(filename_out, filename_in)?;
    Ok(())
}
