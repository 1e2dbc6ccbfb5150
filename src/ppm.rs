//! Minimal PPM (P6, binary raw RGB) reader/writer.
//!
//! The format is plain NetPBM: an ASCII header (`P6`, width, height,
//! max sample value, each separated by whitespace, `#`-comments allowed
//! between tokens) followed directly by `width * height * 3` raw bytes.

use std::io::prelude::*;

use byteorder::ReadBytesExt;

use crate::array2d::Array2D;
use crate::error::PpmError;

/// One RGB pixel at 8 bits per channel, as stored on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub struct RgbPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A decoded PPM image: its pixel grid plus the header's denominator
/// (the maximum sample value each channel is scaled against).
pub struct Ppm {
    pub pixels: Array2D<RgbPixel>,
    pub denominator: u32,
}

fn skip_whitespace_and_comments<R: Read>(r: &mut R) -> Result<u8, PpmError> {
    loop {
        let byte = r.read_u8()?;
        if byte == b'#' {
            while r.read_u8()? != b'\n' {}
            continue;
        }
        if byte.is_ascii_whitespace() {
            continue;
        }
        return Ok(byte);
    }
}

fn read_token<R: Read>(r: &mut R) -> Result<(u8, Vec<u8>), PpmError> {
    let first = skip_whitespace_and_comments(r)?;
    let mut token = vec![first];
    loop {
        let byte = r.read_u8()?;
        if byte.is_ascii_whitespace() {
            return Ok((byte, token));
        }
        token.push(byte);
    }
}

fn read_decimal_token<R: Read>(r: &mut R, what: &'static str) -> Result<u32, PpmError> {
    let (_, token) = read_token(r)?;
    std::str::from_utf8(&token)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or(PpmError::BadHeader(what))
}

impl Ppm {
    /// Read a P6 image from `r`.
    pub fn read<R: Read>(mut r: R) -> Result<Self, PpmError> {
        let mut magic = [0u8; 2];
        r.read_exact(&mut magic)?;
        if &magic != b"P6" {
            return Err(PpmError::BadMagic);
        }

        let width = read_decimal_token(&mut r, "width")?;
        let height = read_decimal_token(&mut r, "height")?;
        let denominator = read_decimal_token(&mut r, "max sample value")?;

        if width == 0 || height == 0 {
            return Err(PpmError::EmptyImage);
        }

        let num_pixels = (width as usize)
            .checked_mul(height as usize)
            .expect("image dimensions overflow");
        let mut bytes = vec![0u8; num_pixels * 3];
        r.read_exact(&mut bytes)
            .map_err(|_| PpmError::TruncatedPixels)?;

        let mut pixels = Array2D::zeroed(height as usize, width as usize);
        pixels.fill_with(|row, col| {
            let offset = (row * width as usize + col) * 3;
            RgbPixel {
                r: bytes[offset],
                g: bytes[offset + 1],
                b: bytes[offset + 2],
            }
        });

        Ok(Ppm { pixels, denominator })
    }

    /// Write this image to `w` as P6.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), PpmError> {
        let width = self.pixels.cols();
        let height = self.pixels.rows();
        write!(w, "P6\n{} {}\n{}\n", width, height, self.denominator)?;
        for row in 0..height {
            let line = &self.pixels[row];
            let mut bytes = Vec::with_capacity(width * 3);
            for pixel in line {
                bytes.push(pixel.r);
                bytes.push(pixel.g);
                bytes.push(pixel.b);
            }
            w.write_all(&bytes)?;
        }
        Ok(())
    }
}
