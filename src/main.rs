//! `comp2x2 [-c | -d] [FILE]`: compress a PPM image to the codec's
//! binary format, or decompress it back, reading `FILE` or stdin and
//! writing the result to stdout.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Compress or decompress a PPM image.
#[derive(Parser)]
#[command(name = "comp2x2")]
#[command(about = "Compress or decompress a 2x2-block lossy PPM codec stream", long_about = None)]
struct Cli {
    /// Compress the input (default).
    #[arg(short = 'c', conflicts_with = "decompress")]
    compress: bool,

    /// Decompress the input.
    #[arg(short = 'd')]
    decompress: bool,

    /// Input file; reads stdin if omitted.
    file: Option<PathBuf>,
}

fn open_input(path: &Option<PathBuf>) -> io::Result<Box<dyn io::Read>> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(io::stdin())),
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let cli = Cli::parse();

    let input = match open_input(&cli.file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("comp2x2: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let output = BufWriter::new(io::stdout());

    let result = if cli.decompress {
        comp2x2::codec::decompress(input, output)
    } else {
        comp2x2::codec::compress(input, output)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("comp2x2: {}", e);
            ExitCode::FAILURE
        }
    }
}
