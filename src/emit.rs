//! Streaming emission of the Kotlin pixel-array literal.

use std::io::{self, Write};
use std::num::NonZeroUsize;

use rgb::Rgba;

use crate::image::PixelView;

/// Formatting configuration for one emitted literal.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// Name of the emitted Kotlin `val` (backtick-quoted, so any string works).
    pub identifier: String,
    /// Packed words per output line.
    pub words_per_line: NonZeroUsize,
}

impl EmitConfig {
    /// Config with the default line width of 8 words.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            words_per_line: NonZeroUsize::new(8).unwrap(),
        }
    }

    pub fn with_words_per_line(mut self, words_per_line: NonZeroUsize) -> Self {
        self.words_per_line = words_per_line;
        self
    }
}

/// Pack one pixel into the output word: alpha in the highest byte, then
/// blue, green, red. Downstream consumers of the literal depend on this
/// exact byte order.
pub fn pack_abgr(px: Rgba<u8>) -> u32 {
    (px.a as u32) << 24 | (px.b as u32) << 16 | (px.g as u32) << 8 | px.r as u32
}

/// Write the complete Kotlin declaration for `view` to `sink`.
///
/// Pixels are emitted in row-major order, top row first, as comma-separated
/// `0xAABBGGRRu` words wrapped every `words_per_line` words. Each formatted
/// chunk goes straight to the sink; nothing is buffered, so output size is
/// bounded only by the sink. A write failure aborts emission and leaves
/// whatever was already written in place.
pub fn emit<W: Write>(view: &PixelView<'_>, config: &EmitConfig, sink: &mut W) -> io::Result<()> {
    writeln!(sink, "import kotlinx.cinterop.cValuesOf")?;
    writeln!(sink, "import libui.ktx.draw.ImageData")?;
    writeln!(sink)?;
    write!(
        sink,
        "val `{}` = ImageData(width={}, height={}, stride={}, pixels=cValuesOf(",
        config.identifier,
        view.width(),
        view.height(),
        view.stride()
    )?;

    let total = view.width() as u64 * view.height() as u64;
    let per_line = config.words_per_line.get() as u64;
    for (i, px) in view.pixels().enumerate() {
        let i = i as u64;
        if i % per_line == 0 {
            write!(sink, "\n    ")?;
        }
        write!(sink, "0x{:08X}u", pack_abgr(px))?;
        if i + 1 < total {
            sink.write_all(b",")?;
        }
    }

    write!(sink, "\n))\n")?;
    Ok(())
}
