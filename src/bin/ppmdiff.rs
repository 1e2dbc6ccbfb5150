//! Standalone image-difference utility: prints the RMS per-channel error
//! between two PPM images over their overlapping region.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use comp2x2::diff;
use comp2x2::ppm::Ppm;

/// Compare two PPM images and print their RMS difference.
#[derive(Parser)]
#[command(name = "ppmdiff")]
#[command(about = "Print the RMS per-channel difference between two PPM images", long_about = None)]
struct Cli {
    /// First image, or `-` to read from stdin.
    first: PathBuf,

    /// Second image, or `-` to read from stdin.
    second: PathBuf,
}

fn open(path: &PathBuf, stdin_already_used: &mut bool) -> io::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        if *stdin_already_used {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "both inputs cannot read from stdin",
            ));
        }
        *stdin_already_used = true;
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let cli = Cli::parse();

    let mut stdin_already_used = false;
    let first = match open(&cli.first, &mut stdin_already_used) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("ppmdiff: {}: {}", cli.first.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let second = match open(&cli.second, &mut stdin_already_used) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("ppmdiff: {}: {}", cli.second.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let image_one = match Ppm::read(first) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("ppmdiff: {}: {}", cli.first.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let image_two = match Ppm::read(second) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("ppmdiff: {}: {}", cli.second.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if !diff::dimensions_are_comparable(&image_one, &image_two) {
        eprintln!("ppmdiff: image dimensions differ by more than 1 pixel");
        println!("1.0");
        return ExitCode::SUCCESS;
    }

    println!("{:.4}", diff::rms_error(&image_one, &image_two));
    ExitCode::SUCCESS
}
