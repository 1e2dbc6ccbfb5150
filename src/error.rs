//! Error taxonomy for the codec.
//!
//! Each fallible subsystem gets its own enum; `CodecError` composes them
//! via `#[from]` so that the pipeline in `codec.rs` can propagate a single
//! error type with `?`. Contract violations (bad field widths, null grids)
//! are programmer errors and stay as `assert!`/`panic!`, never a variant
//! here.

use thiserror::Error;

/// Errors from the bitfield packing primitives.
#[derive(Debug, Error)]
pub enum BitpackError {
    /// `value` does not fit in `width` bits.
    #[error("value {value} does not fit in {width} bits")]
    Overflow {
        /// The value that was rejected.
        value: i64,
        /// The field width it was rejected against.
        width: u32,
    },
}

/// Errors parsing or writing a PPM (P6) image.
#[derive(Debug, Error)]
pub enum PpmError {
    /// The file did not start with the `P6` magic number.
    #[error("not a P6 PPM file")]
    BadMagic,

    /// The header was missing a required field or had malformed syntax.
    #[error("malformed PPM header: {0}")]
    BadHeader(&'static str),

    /// Declared width or height was zero.
    #[error("PPM image has zero width or height")]
    EmptyImage,

    /// Fewer pixel bytes were available than the header promised.
    #[error("unexpected end of file while reading PPM pixel data")]
    TruncatedPixels,

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors parsing or writing the `COMP40` compressed container.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The input did not start with the expected header literal.
    #[error("missing or malformed compressed-image header")]
    BadHeader,

    /// The header's width/height were not both even and >= 2.
    #[error("compressed image dimensions {width}x{height} must be even and >= 2")]
    BadDimensions {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },

    /// Fewer code-word bytes were available than the header promised.
    #[error("truncated compressed payload: expected {expected} bytes, got {actual}")]
    TruncatedPayload {
        /// Expected payload length in bytes.
        expected: usize,
        /// Bytes actually read before EOF.
        actual: usize,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Top-level error returned by [`crate::codec::compress`] and
/// [`crate::codec::decompress`].
#[derive(Debug, Error)]
pub enum CodecError {
    /// Failure reading or writing the PPM image.
    #[error(transparent)]
    Ppm(#[from] PpmError),

    /// Failure reading or writing the compressed container.
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// A quantized field did not fit in its code-word slot. Should not
    /// happen for any input produced by this crate's own quantizer; kept
    /// so a corrupt internal invariant surfaces instead of panicking.
    #[error(transparent)]
    Bitpack(#[from] BitpackError),
}
