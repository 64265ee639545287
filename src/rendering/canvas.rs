//! Drawing surface over an `RgbImage`
//!
//! Shape coordinates follow the inclusive-box convention: `(x0, y0, x1, y1)`
//! covers both corner pixels, so a box from 0 to 9 is ten pixels wide.
//! Shapes that fall partly outside the image are clipped; degenerate boxes
//! (`x1 < x0` or `y1 < y0`) draw nothing.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Ellipse, PrimitiveStyle, Rectangle, RoundedRectangle};
use image::{Rgb, RgbImage};

use crate::catalog::Color;

pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub fn new(img: RgbImage) -> Self {
        Self { img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.contains(x, y)
            .then(|| *self.img.get_pixel(x as u32, y as u32))
    }

    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if let Some(r) = inclusive_rect(x0, y0, x1, y1) {
            draw(&r.into_styled(fill(color)), self);
        }
    }

    pub fn rounded_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32, color: Color) {
        if let Some(r) = inclusive_rect(x0, y0, x1, y1) {
            let max = r.size.width.min(r.size.height) / 2;
            let radius = (radius.max(0) as u32).min(max);
            let shape = RoundedRectangle::with_equal_corners(r, Size::new(radius, radius));
            draw(&shape.into_styled(fill(color)), self);
        }
    }

    /// Filled ellipse inscribed in the inclusive box.
    pub fn ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if let Some(r) = inclusive_rect(x0, y0, x1, y1) {
            draw(&Ellipse::new(r.top_left, r.size).into_styled(fill(color)), self);
        }
    }

    /// Mix `color` into the pixel at `(x, y)` by `coverage` in `0.0..=1.0`.
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if !self.contains(x, y) {
            return;
        }
        let a = coverage.clamp(0.0, 1.0);
        let px = self.img.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let under = px[c] as f32;
            px[c] = (under + (color[c] as f32 - under) * a).round() as u8;
        }
    }

    /// Fill a `size`×`size` square whose top-left corner is `(x, y)`.
    pub fn block(&mut self, x: i32, y: i32, size: u32, color: Color) {
        let size = size as i32;
        self.rect(x, y, x + size - 1, y + size - 1, color);
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.img.width(), self.img.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if self.contains(p.x, p.y) {
                self.img
                    .put_pixel(p.x as u32, p.y as u32, Rgb([c.r(), c.g(), c.b()]));
            }
        }
        Ok(())
    }
}

pub(crate) fn to_rgb888(c: Color) -> Rgb888 {
    Rgb888::new(c[0], c[1], c[2])
}

/// Draw onto a target that cannot fail.
pub(crate) fn draw<D, T>(drawable: &D, target: &mut T)
where
    D: Drawable<Color = Rgb888>,
    T: DrawTarget<Color = Rgb888, Error = Infallible>,
{
    match drawable.draw(target) {
        Ok(_) => {}
        Err(never) => match never {},
    }
}

fn fill(color: Color) -> PrimitiveStyle<Rgb888> {
    PrimitiveStyle::with_fill(to_rgb888(color))
}

fn inclusive_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Rectangle> {
    if x1 < x0 || y1 < y0 {
        return None;
    }
    Some(Rectangle::new(
        Point::new(x0, y0),
        Size::new((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32),
    ))
}
