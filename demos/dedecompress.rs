use std::env;
use ulz77::decompress_file;

fn main() -> anyhow::Result<()> {
    let filename_in = env::args().nth(1).unwrap();
    let filename_out = env::args().nth(2).unwrap();
    decompress_file(filename_out, filename_in)?;
    Ok(())
}
