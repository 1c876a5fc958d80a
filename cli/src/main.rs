//! png2kt — batch PNG to Kotlin pixel-array source converter.
//!
//! Each input PNG becomes a `.kt` file declaring an `ImageData` val whose
//! pixels are embedded as packed `0xAABBGGRRu` words. Files are processed
//! independently; one failure never stops the rest of the batch.

mod batch;
mod output;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use png2kt::EmitConfig;

use crate::output::OutputConfig;

#[derive(Parser, Debug)]
#[command(name = "png2kt", version)]
struct Args {
    /// Input PNG files.
    files: Vec<PathBuf>,

    /// Output file, or directory (dir/ with trailing slash).
    #[arg(short, long)]
    output: Option<String>,

    /// Kotlin identifier for the emitted val (single input only;
    /// default: the input path as typed).
    #[arg(long)]
    name: Option<String>,

    /// Packed words per output line.
    #[arg(long, default_value_t = 8)]
    per_line: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.files.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Convert every input, isolating per-file failures. Returns the failure count.
fn run(args: Args) -> anyhow::Result<usize> {
    let output_config = OutputConfig::new(args.output.as_deref(), args.files.len())?;

    if args.name.is_some() && args.files.len() > 1 {
        anyhow::bail!(
            "--name only works for a single input file (got {})",
            args.files.len()
        );
    }

    let per_line =
        NonZeroUsize::new(args.per_line).context("--per-line must be at least 1")?;

    let mut converted = 0usize;
    let mut failed = 0usize;

    for input in &args.files {
        let output_path = output_config.resolve(input);
        let identifier = args
            .name
            .clone()
            .unwrap_or_else(|| input.display().to_string());
        let config = EmitConfig::new(identifier).with_words_per_line(per_line);

        match batch::convert_one(input, &output_path, &config) {
            Ok(info) => {
                eprintln!(
                    "{} -> {} ({}x{}, {})",
                    input.display(),
                    output_path.display(),
                    info.width,
                    info.height,
                    batch::format_size(info.output_size),
                );
                converted += 1;
            }
            Err(e) => {
                eprintln!("error: {}: {e:#}", input.display());
                failed += 1;
            }
        }
    }

    if args.files.len() > 1 {
        eprintln!("{converted} converted, {failed} failed");
    }

    Ok(failed)
}

fn print_usage() {
    eprintln!(
        "\
png2kt {} — embed PNG images as Kotlin pixel-array source

USAGE:
    png2kt [OPTIONS] <FILES>...

OPTIONS:
    -o, --output <PATH>    Output file, or directory (dir/ with trailing slash)
        --name <IDENT>     Kotlin identifier for the emitted val (single input only)
        --per-line <N>     Packed words per output line (default: 8)

Each input must be an 8-bit RGBA PNG and produces <input>.kt next to it
unless -o is given. Inputs are converted independently; a failing file is
reported and the batch continues.

EXAMPLES:
    png2kt icon.png                   Write icon.png.kt
    png2kt sprites/a.png -o gen/      Write gen/a.png.kt
    png2kt icon.png --name appIcon    Emit `val appIcon = ImageData(...)`",
        env!("CARGO_PKG_VERSION")
    );
}
