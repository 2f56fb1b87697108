//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::canvas::Canvas;
use crate::color::PackedColor;
use crate::error::Result;
use crate::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for canvases and circle pixel buffers.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(BufWriter::new(file), canvas.width(), canvas.height(), canvas.pixels())
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(&mut buffer, canvas.width(), canvas.height(), canvas.pixels())?;
        Ok(buffer)
    }

    /// Encode a circle's packed pixel buffer to PNG bytes.
    ///
    /// Unset pixels come out fully transparent.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn buffer_to_bytes(buf: &PixelBuffer) -> Result<Vec<u8>> {
        let rgba: Vec<u8> = buf
            .pixels()
            .iter()
            .flat_map(|&p| PackedColor::from_bits(p).unpack_native().to_array())
            .collect();

        let mut buffer = Vec::new();
        Self::encode(&mut buffer, buf.width(), buf.height(), &rgba)?;
        Ok(buffer)
    }

    fn encode<W: Write>(writer: W, width: u32, height: u32, rgba: &[u8]) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba)?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_png_to_bytes() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.clear(Rgba::RED);

        let bytes = PngEncoder::to_bytes(&canvas).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_png_roundtrip_pixels() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.clear(Rgba::BLACK);
        canvas.set_pixel(2, 1, Rgba::new(10, 20, 30, 255));

        let bytes = PngEncoder::to_bytes(&canvas).unwrap();
        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut out = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut out).unwrap();

        assert_eq!((info.width, info.height), (4, 3));
        assert_eq!(&out[..info.buffer_size()], canvas.pixels());
    }

    #[test]
    fn test_buffer_to_bytes() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set(1, 0, PackedColor::native(Rgba::GREEN));

        let bytes = PngEncoder::buffer_to_bytes(&buf).unwrap();
        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut out = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut out).unwrap();

        assert_eq!(&out[0..4], &[0, 0, 0, 0]);
        assert_eq!(&out[4..8], &Rgba::GREEN.to_array());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let canvas = Canvas::new(8, 8).unwrap();

        PngEncoder::write_to_file(&canvas, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }
}
