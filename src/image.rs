//! Decoded pixel storage and stride-aware read access.

use rgb::Rgba;

/// An owned, fully decoded 8-bit RGBA image.
///
/// Rows are laid out top-to-bottom, each starting at a multiple of `stride`
/// bytes. `stride` may exceed `width * 4` when the producer pads rows; the
/// padding bytes are never read.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Take ownership of a decoded buffer.
    ///
    /// Panics if the dimensions are zero, `stride < width * 4`, or the
    /// buffer is too short to address every row. These are producer bugs,
    /// not recoverable conditions.
    pub fn new(width: u32, height: u32, stride: usize, pixels: Vec<u8>) -> Self {
        assert!(width > 0 && height > 0, "empty image: {width}x{height}");
        let row_bytes = (width as usize)
            .checked_mul(4)
            .expect("row byte count overflows usize");
        assert!(
            stride >= row_bytes,
            "stride {stride} smaller than row byte count {row_bytes}"
        );
        let needed = (height as usize)
            .checked_mul(stride)
            .expect("buffer byte count overflows usize");
        assert!(
            pixels.len() >= needed,
            "pixel buffer holds {} bytes, needs {needed}",
            pixels.len()
        );
        Self {
            width,
            height,
            stride,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte distance between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Borrow a read-only, stride-aware view of the pixels.
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            width: self.width,
            height: self.height,
            stride: self.stride,
            pixels: &self.pixels,
        }
    }
}

/// Read-only accessor over a decoded buffer, honoring row stride.
///
/// Purely a view: borrows the buffer, never copies or mutates it.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    width: u32,
    height: u32,
    stride: usize,
    pixels: &'a [u8],
}

impl PixelView<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The 4 channel bytes at (row, col), in source order R,G,B,A.
    ///
    /// Panics when (row, col) is out of range; never reads past the
    /// backing buffer.
    pub fn pixel(&self, row: u32, col: u32) -> Rgba<u8> {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of range for {}x{} image",
            self.width,
            self.height
        );
        let offset = row as usize * self.stride + col as usize * 4;
        Rgba {
            r: self.pixels[offset],
            g: self.pixels[offset + 1],
            b: self.pixels[offset + 2],
            a: self.pixels[offset + 3],
        }
    }

    /// One row's `width` pixels, excluding any stride padding.
    pub fn row(&self, row: u32) -> &[Rgba<u8>] {
        assert!(
            row < self.height,
            "row {row} out of range for height {}",
            self.height
        );
        let start = row as usize * self.stride;
        bytemuck::cast_slice(&self.pixels[start..start + self.width as usize * 4])
    }

    /// All pixels in row-major order, top row first.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba<u8>> + '_ {
        (0..self.height).flat_map(move |row| self.row(row).iter().copied())
    }
}
