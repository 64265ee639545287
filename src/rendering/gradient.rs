/// Vertical two-color background fill

use image::{Rgb, RgbImage};

use crate::catalog::Color;

/// Color of row `y` in a gradient of `height` rows.
///
/// Channels are interpolated linearly in the row index and truncated, so row
/// 0 is exactly `top` and the last row stops one step short of `bottom`.
pub fn row_color(top: Color, bottom: Color, y: u32, height: u32) -> Color {
    let t = y as f64 / height.max(1) as f64;
    Rgb(std::array::from_fn(|i| {
        let from = top[i] as f64;
        (from + (bottom[i] as f64 - from) * t) as u8
    }))
}

pub fn vertical_gradient(width: u32, height: u32, top: Color, bottom: Color) -> RgbImage {
    let rows: Vec<Color> = (0..height)
        .map(|y| row_color(top, bottom, y, height))
        .collect();
    RgbImage::from_fn(width, height, |_, y| rows[y as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: Color = Rgb([15, 23, 42]);
    const BOTTOM: Color = Rgb([30, 58, 138]);

    #[test]
    fn first_row_is_top_color() {
        let img = vertical_gradient(4, 100, TOP, BOTTOM);
        assert_eq!(*img.get_pixel(0, 0), TOP);
        assert_eq!(*img.get_pixel(3, 0), TOP);
    }

    #[test]
    fn last_row_approximates_bottom_color() {
        let img = vertical_gradient(4, 100, TOP, BOTTOM);
        let last = img.get_pixel(0, 99);
        for c in 0..3 {
            let diff = (BOTTOM[c] as i32 - last[c] as i32).abs();
            assert!(diff <= 2, "channel {c}: {} vs {}", last[c], BOTTOM[c]);
        }
    }

    #[test]
    fn descending_channels_truncate_toward_zero() {
        // 180 -> 234 rises while 83 -> 9 falls within the same gradient
        let c = row_color(Rgb([180, 83, 9]), Rgb([234, 9, 30]), 1, 3);
        assert_eq!(c, Rgb([198, 58, 16]));
    }

    #[test]
    fn rows_are_uniform() {
        let img = vertical_gradient(16, 8, TOP, BOTTOM);
        for y in 0..8 {
            let first = *img.get_pixel(0, y);
            assert!((0..16).all(|x| *img.get_pixel(x, y) == first));
        }
    }
}
