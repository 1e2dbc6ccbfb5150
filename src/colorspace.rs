//! Per-pixel RGB <-> component-video (Y/Pb/Pr) color transform.
//!
//! Forward and inverse coefficients match the ITU-R BT.601-ish matrix used
//! by the original `rgbcomponent.c`. The forward transform does not clamp;
//! the inverse clamps each channel to `[0, 1]` before scaling.

/// A normalized RGB pixel, each channel in `[0, 1]` nominally (the forward
/// transform does not enforce this range).
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Zeroable)]
#[repr(C)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// A component-video pixel: luma `y` and two chroma differences `pb`/`pr`.
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Zeroable)]
#[repr(C)]
pub struct Yuv {
    pub y: f32,
    pub pb: f32,
    pub pr: f32,
}

impl Rgb {
    pub fn to_yuv(self) -> Yuv {
        let Rgb { r, g, b } = self;
        Yuv {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            pb: -0.168736 * r - 0.331264 * g + 0.5 * b,
            pr: 0.5 * r - 0.418688 * g - 0.081312 * b,
        }
    }
}

impl Yuv {
    pub fn to_rgb(self) -> Rgb {
        let Yuv { y, pb, pr } = self;
        let r = y + 1.402 * pr;
        let g = y - 0.344136 * pb - 0.714136 * pr;
        let b = y + 1.772 * pb;
        Rgb {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn round_trip_is_near_exact() {
        let rgb = Rgb {
            r: 0.37,
            g: 0.81,
            b: 0.12,
        };
        let back = rgb.to_yuv().to_rgb();
        assert!(close(back.r, rgb.r));
        assert!(close(back.g, rgb.g));
        assert!(close(back.b, rgb.b));
    }

    #[test]
    fn black_and_white_corners() {
        let black = Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        }
        .to_yuv();
        assert_eq!(black, Yuv { y: 0.0, pb: 0.0, pr: 0.0 });

        let white = Rgb {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
        .to_yuv();
        assert!(close(white.y, 1.0));
        assert!(close(white.pb, 0.0));
        assert!(close(white.pr, 0.0));
    }

    #[test]
    fn inverse_clamps_out_of_range() {
        let yuv = Yuv {
            y: 2.0,
            pb: 0.0,
            pr: 0.0,
        };
        let rgb = yuv.to_rgb();
        assert_eq!(rgb.r, 1.0);
        assert_eq!(rgb.g, 1.0);
        assert_eq!(rgb.b, 1.0);
    }
}
