//! Image output for composited frames and circle buffers.

mod png_encoder;

pub use png_encoder::PngEncoder;
