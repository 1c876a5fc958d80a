//! # png2kt
//!
//! Converts decoded PNG images into Kotlin source files embedding the pixels
//! as a statically-initializable `ImageData` literal of packed `0xAABBGGRRu`
//! words, so small bitmap assets (icons, sprites) compile directly into the
//! host program with no runtime image loading.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use png2kt::{decode_file, emit, EmitConfig};
//!
//! let image = decode_file("icon.png")?;
//! let mut out = std::fs::File::create("icon.png.kt")?;
//! emit(&image.view(), &EmitConfig::new("icon.png"), &mut out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Decoding accepts only 8-bit RGBA PNGs; anything else is rejected before
//! any pixel data is read. Emission streams directly to the sink, so
//! multi-megapixel images never buffer their full literal text in memory.

#![forbid(unsafe_code)]

pub mod decode;
pub mod emit;
pub mod error;
pub mod image;

pub use decode::{decode, decode_file};
pub use emit::{emit, pack_abgr, EmitConfig};
pub use error::DecodeError;
pub use image::{DecodedImage, PixelView};

/// Pixel type used throughout: 8-bit RGBA in source channel order.
pub use rgb::Rgba;
