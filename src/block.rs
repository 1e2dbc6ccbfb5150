//! Forward/inverse 2x2 DCT on luma, and chroma mean/broadcast.
//!
//! `a` is mean brightness; `b`, `c`, `d` are the three differential
//! coefficients (top-to-bottom, left-to-right, and diagonal respectively).
//! Pixels are indexed `y1` top-left, `y2` top-right, `y3` bottom-left,
//! `y4` bottom-right.

/// Forward 4-point transform: four luma samples -> (a, b, c, d).
pub fn forward_dct(y1: f32, y2: f32, y3: f32, y4: f32) -> (f32, f32, f32, f32) {
    let a = (y4 + y3 + y2 + y1) / 4.0;
    let b = (y4 + y3 - y2 - y1) / 4.0;
    let c = (y4 - y3 + y2 - y1) / 4.0;
    let d = (y4 - y3 - y2 + y1) / 4.0;
    (a, b, c, d)
}

/// Inverse 4-point transform: (a, b, c, d) -> four luma samples.
pub fn inverse_dct(a: f32, b: f32, c: f32, d: f32) -> (f32, f32, f32, f32) {
    let y1 = a - b - c + d;
    let y2 = a - b + c - d;
    let y3 = a + b - c - d;
    let y4 = a + b + c + d;
    (y1, y2, y3, y4)
}

/// Arithmetic mean of the four chroma samples in a 2x2 block.
pub fn average_chroma(p1: f32, p2: f32, p3: f32, p4: f32) -> f32 {
    (p1 + p2 + p3 + p4) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_exact() {
        // Dyadic (exactly representable) values so the round trip is
        // bit-exact rather than merely close.
        let (y1, y2, y3, y4) = (0.125_f32, 0.875, 0.375, 0.625);
        let (a, b, c, d) = forward_dct(y1, y2, y3, y4);
        let (r1, r2, r3, r4) = inverse_dct(a, b, c, d);
        assert_eq!((r1, r2, r3, r4), (y1, y2, y3, y4));
    }

    #[test]
    fn uniform_block_has_only_mean() {
        let (a, b, c, d) = forward_dct(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a, 0.5);
        assert_eq!((b, c, d), (0.0, 0.0, 0.0));
    }

    #[test]
    fn chroma_average_matches_mean() {
        assert_eq!(average_chroma(0.1, 0.2, 0.3, 0.4), 0.25);
    }
}
