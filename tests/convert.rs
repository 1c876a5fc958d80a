//! End-to-end decode → emit against real PNG streams.

use std::io::Cursor;

use png2kt::{decode, emit, DecodeError, EmitConfig};

fn encode_rgba8(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    drop(writer);
    out
}

#[test]
fn png_to_kotlin_golden() {
    let png_bytes = encode_rgba8(2, 1, &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
    let image = decode(Cursor::new(png_bytes)).unwrap();

    let mut out = Vec::new();
    emit(&image.view(), &EmitConfig::new("icon.png"), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "import kotlinx.cinterop.cValuesOf\n\
         import libui.ktx.draw.ImageData\n\
         \n\
         val `icon.png` = ImageData(width=2, height=1, stride=8, pixels=cValuesOf(\n    \
         0x44332211u,0x88776655u\n\
         ))\n"
    );
}

#[test]
fn larger_image_wraps_and_terminates() {
    // 6x3 = 18 pixels: lines of 8, 8, 2.
    let data: Vec<u8> = (0..18u8).flat_map(|i| [i, 0, 0, 0xFF]).collect();
    let png_bytes = encode_rgba8(6, 3, &data);
    let image = decode(Cursor::new(png_bytes)).unwrap();

    let mut out = Vec::new();
    emit(&image.view(), &EmitConfig::new("grid"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("0xFF").count(), 18);
    assert_eq!(text.matches(',').count(), 17);
    assert!(text.contains("0xFF000000u")); // pixel 0, red 0
    assert!(text.contains("0xFF000011u")); // pixel 17, red 17
    assert!(text.ends_with("0xFF000011u\n))\n"));
}

#[test]
fn non_rgba_png_is_rejected_before_emission() {
    let mut png_bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut png_bytes, 1, 1);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&[10, 20, 30]).unwrap();
    drop(writer);

    assert!(matches!(
        decode(Cursor::new(png_bytes)).unwrap_err(),
        DecodeError::Unsupported { .. }
    ));
}
