use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use culpa::throws;

use ulz77::cli::args::{Args, Mode};
use ulz77::error::Error;
use ulz77::stream::{compress_to_stream, decompress_from_stream};
use ulz77::{compress_file, decompress_file};

#[throws(Error)]
fn run(args: Args) {
    let mode = args.mode()?;
    match (mode, args.method) {
        (Mode::Compress, ulz77::cli::args::Method::File) => {
            compress_file(&args.output, &args.input)?;
        }
        (Mode::Decompress, ulz77::cli::args::Method::File) => {
            decompress_file(&args.output, &args.input)?;
        }
        (Mode::Compress, ulz77::cli::args::Method::Stream) => {
            let input = File::open(&args.input)?;
            let output = BufWriter::new(File::create(&args.output)?);
            compress_to_stream(input, output, args.block_size)?;
        }
        (Mode::Decompress, ulz77::cli::args::Method::Stream) => {
            let input = File::open(&args.input)?;
            let output = BufWriter::new(File::create(&args.output)?);
            decompress_from_stream(input, output)?;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run(args).with_context(|| "ulz77 failed")?;
    Ok(())
}
