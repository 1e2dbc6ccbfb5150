//! A lossy 3:1 codec for 24-bit RGB PPM images: per-2x2-block luma DCT,
//! chroma averaging, and fixed-width bitfield quantization into a
//! 32-bit code word.

pub mod array2d;
pub mod bitpack;
pub mod block;
pub mod codec;
pub mod colorspace;
pub mod container;
pub mod diff;
pub mod error;
pub mod ppm;
pub mod quant;
