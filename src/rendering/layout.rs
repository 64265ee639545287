/// Proportional geometry for captions and the device frame
///
/// Every length is a fraction of the image or frame size, truncated to whole
/// pixels, so the same code serves every target resolution.

use crate::catalog::DeviceTarget;

/// `v * f` truncated toward zero.
pub fn frac(v: i32, f: f64) -> i32 {
    (v as f64 * f) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Font sizes and vertical positions of the caption block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeScale {
    pub caption_size: u32,
    pub subtitle_size: u32,
    /// Top of the first caption line
    pub caption_top: i32,
    /// Distance between consecutive caption lines
    pub line_step: i32,
    /// Gap between the caption block and the subtitle
    pub subtitle_gap: i32,
}

impl TypeScale {
    pub fn for_device(device: &DeviceTarget) -> Self {
        let h = device.height as i32;
        let (caption, subtitle) = if device.is_tablet() {
            (0.05, 0.02)
        } else {
            (0.055, 0.022)
        };
        let caption_size = frac(h, caption);
        Self {
            caption_size: caption_size as u32,
            subtitle_size: frac(h, subtitle) as u32,
            caption_top: frac(h, 0.06),
            line_step: frac(caption_size, 1.25),
            subtitle_gap: frac(h, 0.02),
        }
    }

    pub fn line_top(&self, line: usize) -> i32 {
        self.caption_top + line as i32 * self.line_step
    }

    pub fn subtitle_top(&self, caption_lines: usize) -> i32 {
        self.line_top(caption_lines) + self.subtitle_gap
    }
}

/// Device bezel, screen and the content column inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Full image width; some content is centered on the image, not the screen
    pub canvas_width: i32,
    pub frame: Rect,
    pub frame_radius: i32,
    pub border: i32,
    pub screen: Rect,
    pub screen_radius: i32,
    pub status_bar_height: i32,
    /// Top of the content area, below the status bar
    pub content_top: i32,
    pub content_x: i32,
    pub content_width: i32,
}

impl FrameLayout {
    pub fn for_device(device: &DeviceTarget) -> Self {
        let (w, h) = (device.width as i32, device.height as i32);
        let (fw, fh) = if device.is_tablet() {
            (frac(w, 0.75), frac(h, 0.52))
        } else {
            (frac(w, 0.65), frac(h, 0.55))
        };
        let frame = Rect {
            x: (w - fw).div_euclid(2),
            y: h - fh - frac(h, 0.06),
            width: fw,
            height: fh,
        };
        let border = frac(fw, 0.03);
        let screen = Rect {
            x: frame.x + border,
            y: frame.y + border,
            width: fw - 2 * border,
            height: fh - 2 * border,
        };
        let status_bar_height = frac(screen.height, 0.04);
        Self {
            canvas_width: w,
            frame,
            frame_radius: frac(fw, 0.08),
            border,
            screen,
            screen_radius: frac(fw, 0.06),
            status_bar_height,
            content_top: screen.y + status_bar_height + frac(screen.height, 0.02),
            content_x: screen.x + frac(screen.width, 0.05),
            content_width: frac(screen.width, 0.9),
        }
    }

    /// Lowest y content may reach before it is skipped.
    pub fn content_limit(&self) -> i32 {
        self.screen.bottom() - self.border
    }

    /// Screen height fraction.
    pub fn sh(&self, f: f64) -> i32 {
        frac(self.screen.height, f)
    }

    /// Screen width fraction.
    pub fn sw(&self, f: f64) -> i32 {
        frac(self.screen.width, f)
    }

    /// Content width fraction.
    pub fn cw(&self, f: f64) -> i32 {
        frac(self.content_width, f)
    }
}
