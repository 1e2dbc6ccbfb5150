//! The `COMP40 Compressed image format 2` container: an ASCII header
//! naming the (even) pixel width/height, followed by one big-endian
//! `u32` code word per 2x2 block in row-major order.

use std::io::prelude::*;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::array2d::Array2D;
use crate::error::ContainerError;

const HEADER_PREFIX: &str = "COMP40 Compressed image format 2\n";

fn is_even_and_at_least_two(n: u32) -> bool {
    n >= 2 && n % 2 == 0
}

/// Write `words` (one per 2x2 block, `cols` wide and `rows` tall) as a
/// compressed container to `w`. `width`/`height` are the *pixel*
/// dimensions (`2 * words.cols()`, `2 * words.rows()`).
pub fn write<W: Write>(mut w: W, words: &Array2D<u32>) -> Result<(), ContainerError> {
    let width = words.cols() as u32 * 2;
    let height = words.rows() as u32 * 2;
    write!(w, "{}{} {}\n", HEADER_PREFIX, width, height)?;
    for row in 0..words.rows() {
        for &word in &words[row] {
            w.write_u32::<BigEndian>(word)?;
        }
    }
    Ok(())
}

fn expect_byte<R: Read>(r: &mut R, expected: u8) -> Result<(), ContainerError> {
    let byte = r.read_u8().map_err(|_| ContainerError::BadHeader)?;
    if byte == expected {
        Ok(())
    } else {
        Err(ContainerError::BadHeader)
    }
}

fn read_decimal<R: Read>(r: &mut R) -> Result<(u32, u8), ContainerError> {
    let mut value: u32 = 0;
    let mut saw_digit = false;
    loop {
        let byte = r.read_u8().map_err(|_| ContainerError::BadHeader)?;
        match byte {
            b'0'..=b'9' => {
                saw_digit = true;
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add((byte - b'0') as u32))
                    .ok_or(ContainerError::BadHeader)?;
            }
            _ if saw_digit => return Ok((byte, value)),
            _ => return Err(ContainerError::BadHeader),
        }
    }
}

/// Read a compressed container from `r`, returning its code words in a
/// grid indexed by block row/column (so `cols() == width/2`,
/// `rows() == height/2`).
pub fn read<R: Read>(mut r: R) -> Result<Array2D<u32>, ContainerError> {
    for expected in HEADER_PREFIX.bytes() {
        expect_byte(&mut r, expected)?;
    }

    let (sep, width) = read_decimal(&mut r)?;
    if sep != b' ' {
        return Err(ContainerError::BadHeader);
    }
    let (sep, height) = read_decimal(&mut r)?;
    if sep != b'\n' {
        return Err(ContainerError::BadHeader);
    }

    if !is_even_and_at_least_two(width) || !is_even_and_at_least_two(height) {
        return Err(ContainerError::BadDimensions { width, height });
    }

    let block_cols = (width / 2) as usize;
    let block_rows = (height / 2) as usize;
    let expected_bytes = block_cols * block_rows * 4;

    let mut payload = vec![0u8; expected_bytes];
    let mut cursor = 0;
    loop {
        match r.read(&mut payload[cursor..]) {
            Ok(0) => break,
            Ok(n) => cursor += n,
            Err(e) => return Err(ContainerError::Io(e)),
        }
        if cursor == expected_bytes {
            break;
        }
    }
    if cursor != expected_bytes {
        return Err(ContainerError::TruncatedPayload {
            expected: expected_bytes,
            actual: cursor,
        });
    }

    let mut payload = &payload[..];
    let mut words = Array2D::zeroed(block_rows, block_cols);
    words.fill_with(|_, _| payload.read_u32::<BigEndian>().expect("exact-length payload"));
    Ok(words)
}
