//! Per-file conversion and batch reporting helpers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use png2kt::EmitConfig;

use crate::output::OutputConfig;

/// What a successful conversion produced.
pub struct Converted {
    pub width: u32,
    pub height: u32,
    pub output_size: u64,
}

/// Convert one PNG into one Kotlin source file.
///
/// Decode runs (and the color-layout gate fires) before the output file is
/// created, so a rejected input never leaves an empty or partial `.kt`
/// behind. A write failure mid-emission does leave partial output; the
/// artifact is regenerable, so there is no rollback.
pub fn convert_one(
    input: &Path,
    output: &Path,
    config: &EmitConfig,
) -> anyhow::Result<Converted> {
    let image =
        png2kt::decode_file(input).with_context(|| format!("reading {}", input.display()))?;

    OutputConfig::ensure_parent(output)?;
    let file =
        File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let mut sink = BufWriter::new(file);

    png2kt::emit(&image.view(), config, &mut sink)
        .and_then(|()| sink.flush())
        .with_context(|| format!("writing {}", output.display()))?;

    let output_size = output.metadata().map(|m| m.len()).unwrap_or(0);
    Ok(Converted {
        width: image.width(),
        height: image.height(),
        output_size,
    })
}

/// Format a byte size into a human-readable string.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
