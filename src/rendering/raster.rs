/// Composes a full screenshot and encodes it as PNG

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::catalog::{Color, DeviceTarget, ScreenDescriptor};
use crate::rendering::canvas::Canvas;
use crate::rendering::gradient::vertical_gradient;
use crate::rendering::layout::{FrameLayout, TypeScale};
use crate::rendering::mockup::draw_mockup;
use crate::rendering::text::{Font, FontBook};
use crate::rendering::Screenshot;
use crate::Result;

const CAPTION: Color = Rgb([255, 255, 255]);
const CAPTION_SHADOW: Color = Rgb([0, 0, 0]);
const SUBTITLE: Color = Rgb([220, 220, 240]);
const SHADOW_OFFSET: i32 = 1;

/// Draw `screen` at `device` resolution into a fresh pixel buffer.
pub fn render(device: &DeviceTarget, screen: &ScreenDescriptor, fonts: &FontBook) -> RgbImage {
    let img = vertical_gradient(device.width, device.height, screen.top, screen.bottom);
    let mut canvas = Canvas::new(img);
    draw_captions(&mut canvas, device, screen, fonts);
    draw_mockup(&mut canvas, &FrameLayout::for_device(device), screen.mockup);
    canvas.into_image()
}

/// Render and encode in one step.
pub fn rasterize(device: &DeviceTarget, screen: &ScreenDescriptor, fonts: &FontBook) -> Result<Screenshot> {
    let image = render(device, screen, fonts);
    let png_data = encode_png(&image)?;
    Ok(Screenshot {
        width: image.width(),
        height: image.height(),
        image,
        png_data,
    })
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Centered caption lines with a drop shadow, then the subtitle beneath.
fn draw_captions(canvas: &mut Canvas, device: &DeviceTarget, screen: &ScreenDescriptor, fonts: &FontBook) {
    let scale = TypeScale::for_device(device);
    let caption = Font::new(&fonts.bold, scale.caption_size);
    let width = canvas.width();

    let mut lines = 0;
    for (i, line) in screen.caption_lines().enumerate() {
        let x = caption.centered_x(width, line);
        let y = scale.line_top(i);
        caption.draw(canvas, x + SHADOW_OFFSET, y + SHADOW_OFFSET, line, CAPTION_SHADOW);
        caption.draw(canvas, x, y, line, CAPTION);
        lines += 1;
    }

    let subtitle = Font::new(&fonts.regular, scale.subtitle_size);
    let x = subtitle.centered_x(width, screen.subtitle);
    subtitle.draw(canvas, x, scale.subtitle_top(lines), screen.subtitle, SUBTITLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DeviceClass, SCREENS};

    fn small_phone() -> DeviceTarget {
        DeviceTarget::new("small", 360, 780, DeviceClass::Phone)
    }

    #[test]
    fn rasterize_matches_device_size() {
        let fonts = FontBook::builtin();
        let s = rasterize(&small_phone(), &SCREENS[0], &fonts).unwrap();
        assert_eq!((s.width, s.height), (360, 780));
        assert_eq!(&s.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn top_left_pixel_is_gradient_top() {
        let fonts = FontBook::builtin();
        for screen in SCREENS.iter() {
            let img = render(&small_phone(), screen, &fonts);
            assert_eq!(*img.get_pixel(0, 0), screen.top);
        }
    }

    #[test]
    fn caption_is_horizontally_centered() {
        let fonts = FontBook::builtin();
        let device = small_phone();
        let screen = &SCREENS[4];
        let img = render(&device, screen, &fonts);

        // Scan only the caption band for pure white ink
        let scale = TypeScale::for_device(&device);
        let top = scale.caption_top as u32;
        let bottom = scale.line_top(2) as u32;
        let xs: Vec<u32> = (top..bottom)
            .flat_map(|y| (0..device.width).map(move |x| (x, y)))
            .filter(|&(x, y)| *img.get_pixel(x, y) == CAPTION)
            .map(|(x, _)| x)
            .collect();
        let left = *xs.iter().min().unwrap() as i32;
        let right = device.width as i32 - 1 - *xs.iter().max().unwrap() as i32;
        assert!((left - right).abs() <= 6, "left {left} right {right}");
    }

    #[test]
    fn rendering_is_deterministic() {
        let fonts = FontBook::builtin();
        let a = rasterize(&small_phone(), &SCREENS[2], &fonts).unwrap();
        let b = rasterize(&small_phone(), &SCREENS[2], &fonts).unwrap();
        assert_eq!(a.png_data, b.png_data);
        assert_eq!(a.sha256_hex(), b.sha256_hex());
    }
}
