//! PNG decode adapter over the `png` crate.
//!
//! Validates the color layout from the header before any pixel data is
//! allocated or read, then decodes one frame into a [`DecodedImage`].
//! Interlaced (Adam7) images are de-interlaced by the decoder.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use crate::error::DecodeError;
use crate::image::DecodedImage;

/// Decode an 8-bit RGBA PNG from any reader.
///
/// Any other color type or bit depth fails with
/// [`DecodeError::Unsupported`] straight from the header.
pub fn decode<R: BufRead + Seek>(reader: R) -> Result<DecodedImage, DecodeError> {
    let decoder = png::Decoder::new(reader);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if color_type != png::ColorType::Rgba || bit_depth != png::BitDepth::Eight {
        return Err(DecodeError::Unsupported {
            color_type,
            bit_depth,
        });
    }

    let buffer_size = reader.output_buffer_size().ok_or(DecodeError::TooLarge)?;
    let mut pixels = vec![0u8; buffer_size];

    let frame = reader.next_frame(&mut pixels)?;
    pixels.truncate(frame.buffer_size());

    // The png crate emits tightly packed rows.
    Ok(DecodedImage::new(width, height, width as usize * 4, pixels))
}

/// Decode an 8-bit RGBA PNG from a file path.
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}
