//! Mask tinting
//!
//! Themed button icons ship as grayscale-as-alpha masks: the shape lives in
//! the alpha channel and the RGB content is irrelevant. [`colorize`] turns a
//! mask into a concrete icon by writing the target color into every pixel's
//! RGB and passing the mask's alpha through unchanged, a fixed affine
//! transform over the four channels with no error paths.

use image::{Rgba, RgbaImage};
use veneer_core::Color;

/// Tint a mask with a target color.
///
/// Output RGB is `color` everywhere, including fully transparent pixels;
/// output alpha is the source alpha. A zero-sized mask yields a zero-sized
/// image.
pub fn colorize(mask: &RgbaImage, color: Color) -> RgbaImage {
    let mut out = RgbaImage::new(mask.width(), mask.height());
    for (src, dst) in mask.pixels().zip(out.pixels_mut()) {
        *dst = Rgba([color.r, color.g, color.b, src.0[3]]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_2x2(alpha: [u8; 4]) -> RgbaImage {
        let mut mask = RgbaImage::new(2, 2);
        for (pixel, a) in mask.pixels_mut().zip(alpha) {
            // Arbitrary RGB garbage; only alpha carries the shape.
            *pixel = Rgba([77, 13, 200, a]);
        }
        mask
    }

    #[test]
    fn tint_writes_target_rgb_and_preserves_alpha() {
        let mask = mask_2x2([255, 0, 0, 255]);
        let out = colorize(&mask, Color::rgb(10, 20, 30));

        let alphas: Vec<u8> = out.pixels().map(|p| p.0[3]).collect();
        assert_eq!(alphas, vec![255, 0, 0, 255]);

        for pixel in out.pixels().filter(|p| p.0[3] == 255) {
            assert_eq!(&pixel.0[..3], &[10, 20, 30]);
        }
    }

    #[test]
    fn retint_round_trips_opaque_pixels() {
        let mask = mask_2x2([255, 255, 255, 255]);
        let target = Color::rgb(248, 231, 28);
        let out = colorize(&mask, target);
        for pixel in out.pixels() {
            assert_eq!(&pixel.0[..3], &[target.r, target.g, target.b]);
            assert_eq!(pixel.0[3], 255);
        }
    }

    #[test]
    fn zero_sized_mask_yields_zero_sized_icon() {
        let out = colorize(&RgbaImage::new(0, 0), Color::WHITE);
        assert_eq!((out.width(), out.height()), (0, 0));
    }

    #[test]
    fn dimensions_are_preserved() {
        let out = colorize(&RgbaImage::new(24, 16), Color::BLACK);
        assert_eq!((out.width(), out.height()), (24, 16));
    }
}
