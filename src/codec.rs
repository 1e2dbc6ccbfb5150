//! Top-level compress/decompress pipeline: read -> trim -> color
//! transform -> block transform/quantize -> container write, and back.
//!
//! Each stage below owns its input grid, consumes it, and produces the
//! next grid; nothing is retained past the point it is handed off.

use std::io::prelude::*;

use log::debug;

use crate::array2d::Array2D;
use crate::block;
use crate::colorspace::{Rgb, Yuv};
use crate::container;
use crate::error::CodecError;
use crate::ppm::{Ppm, RgbPixel};
use crate::quant::{self, BlockCoeffs};

const DENOMINATOR: u32 = 255;

/// Crop `image` to even width and height, dropping a trailing row and/or
/// column as needed. Upper-left-aligned: the kept pixels keep their
/// original coordinates.
fn trim_to_even(image: Ppm) -> Ppm {
    let trimmed_rows = image.pixels.rows() - (image.pixels.rows() % 2);
    let trimmed_cols = image.pixels.cols() - (image.pixels.cols() % 2);

    if trimmed_rows == image.pixels.rows() && trimmed_cols == image.pixels.cols() {
        return image;
    }

    let pixels = Array2D::new_with(trimmed_rows, trimmed_cols, |row, col| {
        image.pixels[row][col]
    });
    Ppm {
        pixels,
        denominator: image.denominator,
    }
}

fn rgb_to_yuv_grid(image: &Ppm) -> Array2D<Yuv> {
    let denominator = image.denominator as f32;
    Array2D::new_with(image.pixels.rows(), image.pixels.cols(), |row, col| {
        let pixel = image.pixels[row][col];
        Rgb {
            r: pixel.r as f32 / denominator,
            g: pixel.g as f32 / denominator,
            b: pixel.b as f32 / denominator,
        }
        .to_yuv()
    })
}

fn yuv_grid_to_ppm(yuv: &Array2D<Yuv>) -> Ppm {
    let pixels = Array2D::new_with(yuv.rows(), yuv.cols(), |row, col| {
        let rgb = yuv[row][col].to_rgb();
        RgbPixel {
            r: (rgb.r * DENOMINATOR as f32).round() as u8,
            g: (rgb.g * DENOMINATOR as f32).round() as u8,
            b: (rgb.b * DENOMINATOR as f32).round() as u8,
        }
    });
    Ppm {
        pixels,
        denominator: DENOMINATOR,
    }
}

fn encode_blocks(yuv: &Array2D<Yuv>) -> Result<Array2D<u32>, CodecError> {
    let block_rows = yuv.rows() / 2;
    let block_cols = yuv.cols() / 2;
    let mut words = Array2D::zeroed(block_rows, block_cols);
    for block_row in 0..block_rows {
        for block_col in 0..block_cols {
            let (r0, r1) = (2 * block_row, 2 * block_row + 1);
            let (c0, c1) = (2 * block_col, 2 * block_col + 1);
            let p1 = yuv[r0][c0];
            let p2 = yuv[r0][c1];
            let p3 = yuv[r1][c0];
            let p4 = yuv[r1][c1];

            let (a, b, c, d) = block::forward_dct(p1.y, p2.y, p3.y, p4.y);
            let pbavg = block::average_chroma(p1.pb, p2.pb, p3.pb, p4.pb);
            let pravg = block::average_chroma(p1.pr, p2.pr, p3.pr, p4.pr);

            words[block_row][block_col] = quant::encode_block(BlockCoeffs {
                a,
                b,
                c,
                d,
                pbavg,
                pravg,
            })?;
        }
    }
    Ok(words)
}

fn decode_blocks(words: &Array2D<u32>) -> Array2D<Yuv> {
    let mut yuv = Array2D::zeroed(words.rows() * 2, words.cols() * 2);
    for block_row in 0..words.rows() {
        for block_col in 0..words.cols() {
            let coeffs = quant::decode_block(words[block_row][block_col]);
            let (y1, y2, y3, y4) = block::inverse_dct(coeffs.a, coeffs.b, coeffs.c, coeffs.d);

            let (r0, r1) = (2 * block_row, 2 * block_row + 1);
            let (c0, c1) = (2 * block_col, 2 * block_col + 1);
            yuv[r0][c0] = Yuv { y: y1, pb: coeffs.pbavg, pr: coeffs.pravg };
            yuv[r0][c1] = Yuv { y: y2, pb: coeffs.pbavg, pr: coeffs.pravg };
            yuv[r1][c0] = Yuv { y: y3, pb: coeffs.pbavg, pr: coeffs.pravg };
            yuv[r1][c1] = Yuv { y: y4, pb: coeffs.pbavg, pr: coeffs.pravg };
        }
    }
    yuv
}

/// Read a PPM image from `input` and write its compressed form to `output`.
pub fn compress<R: Read, W: Write>(input: R, output: W) -> Result<(), CodecError> {
    let image = Ppm::read(input)?;
    debug!(
        "read {}x{} PPM, denominator {}",
        image.pixels.cols(),
        image.pixels.rows(),
        image.denominator
    );

    let image = trim_to_even(image);
    debug!("trimmed to {}x{}", image.pixels.cols(), image.pixels.rows());

    let yuv = rgb_to_yuv_grid(&image);
    let words = encode_blocks(&yuv)?;
    debug!("encoded {} blocks", words.rows() * words.cols());

    container::write(output, &words)?;
    Ok(())
}

/// Read a compressed image from `input` and write its decompressed PPM
/// form to `output`.
pub fn decompress<R: Read, W: Write>(input: R, output: W) -> Result<(), CodecError> {
    let words = container::read(input)?;
    debug!("read {} blocks", words.rows() * words.cols());

    let yuv = decode_blocks(&words);
    let image = yuv_grid_to_ppm(&yuv);
    debug!(
        "decoded to {}x{} PPM",
        image.pixels.cols(),
        image.pixels.rows()
    );

    image.write(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ppm_bytes(width: u32, height: u32, denominator: u32, pixels: &[u8]) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n{}\n", width, height, denominator).into_bytes();
        out.extend_from_slice(pixels);
        out
    }

    #[test]
    fn compresses_uniform_gray_block_to_expected_code_word() {
        let input = ppm_bytes(2, 2, 255, &[128; 12]);
        let mut compressed = Vec::new();
        compress(&input[..], &mut compressed).unwrap();

        let header = b"COMP40 Compressed image format 2\n2 2\n";
        assert_eq!(&compressed[..header.len()], header);
        assert_eq!(compressed.len(), header.len() + 4);
    }

    #[test]
    fn round_trips_all_black_block() {
        let input = ppm_bytes(2, 2, 255, &[0; 12]);
        let mut compressed = Vec::new();
        compress(&input[..], &mut compressed).unwrap();

        let mut decompressed = Vec::new();
        decompress(&compressed[..], &mut decompressed).unwrap();

        let out = Ppm::read(&decompressed[..]).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(out.pixels[row][col], RgbPixel { r: 0, g: 0, b: 0 });
            }
        }
    }

    #[test]
    fn round_trips_all_white_block() {
        let input = ppm_bytes(2, 2, 255, &[255; 12]);
        let mut compressed = Vec::new();
        compress(&input[..], &mut compressed).unwrap();

        let mut decompressed = Vec::new();
        decompress(&compressed[..], &mut decompressed).unwrap();

        let out = Ppm::read(&decompressed[..]).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(out.pixels[row][col], RgbPixel { r: 255, g: 255, b: 255 });
            }
        }
    }

    #[test]
    fn trims_odd_dimensions_before_encoding() {
        // 3x3 input trims down to a single 2x2 block.
        let input = ppm_bytes(3, 3, 255, &[200; 27]);
        let mut compressed = Vec::new();
        compress(&input[..], &mut compressed).unwrap();
        let header = b"COMP40 Compressed image format 2\n2 2\n";
        assert_eq!(&compressed[..header.len()], header);
    }

    #[test]
    fn decompress_reports_truncated_payload() {
        let words: Array2D<u32> = Array2D::zeroed(1, 1);
        let mut compressed = Vec::new();
        container::write(&mut compressed, &words).unwrap();
        compressed.truncate(compressed.len() - 1);

        let mut out = Vec::new();
        let result = decompress(&compressed[..], &mut out);
        assert!(matches!(result, Err(CodecError::Container(_))));
    }
}
