//! Font resolution, measurement and drawing
//!
//! Captions prefer a system TrueType/OpenType face. When none of the candidate
//! files can be read or parsed, rendering silently degrades to the built-in
//! 10×20 bitmap font from `embedded-graphics`, integer-scaled toward the
//! requested size. Both faces share one measuring API so centering works the
//! same way regardless of which face was found.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use log::{debug, info};

#[cfg(feature = "truetype")]
use ab_glyph::{point, Font as _, FontVec, Glyph, PxScale, ScaleFont};

use crate::catalog::Color;
#[cfg(feature = "truetype")]
use crate::error::FontError;
use crate::rendering::canvas::{draw, to_rgb888, Canvas};

const BUILTIN: MonoFont<'static> = FONT_10X20;

/// Ordered font file candidates for each weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidates {
    pub bold: Vec<PathBuf>,
    pub regular: Vec<PathBuf>,
}

impl FontCandidates {
    /// No candidates: always resolves to the built-in font.
    pub fn none() -> Self {
        Self {
            bold: Vec::new(),
            regular: Vec::new(),
        }
    }
}

impl Default for FontCandidates {
    fn default() -> Self {
        let paths = |list: &[&str]| list.iter().map(PathBuf::from).collect();
        Self {
            bold: paths(&[
                "/System/Library/Fonts/SFNS.ttf",
                "/Library/Fonts/SF-Pro-Display-Bold.otf",
                "/System/Library/Fonts/Helvetica.ttc",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            ]),
            regular: paths(&[
                "/System/Library/Fonts/SFNS.ttf",
                "/Library/Fonts/SF-Pro-Display-Regular.otf",
                "/System/Library/Fonts/Helvetica.ttc",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            ]),
        }
    }
}

pub enum FontFace {
    #[cfg(feature = "truetype")]
    Outline(OutlineFace),
    Builtin,
}

impl FontFace {
    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin)
    }

    /// File the face was loaded from; `None` for the built-in font.
    pub fn source(&self) -> Option<&Path> {
        match self {
            #[cfg(feature = "truetype")]
            FontFace::Outline(face) => Some(face.source.as_path()),
            FontFace::Builtin => None,
        }
    }
}

/// Fonts resolved once per run and shared by every screenshot.
pub struct FontBook {
    pub bold: FontFace,
    pub regular: FontFace,
}

impl FontBook {
    pub fn resolve(candidates: &FontCandidates) -> Self {
        let book = Self {
            bold: load_font(&candidates.bold),
            regular: load_font(&candidates.regular),
        };
        if book.bold.is_builtin() || book.regular.is_builtin() {
            info!("no usable system font found; falling back to the built-in bitmap font");
        }
        book
    }

    pub fn builtin() -> Self {
        Self {
            bold: FontFace::Builtin,
            regular: FontFace::Builtin,
        }
    }
}

/// First candidate that loads, else the built-in font. Never fails.
pub fn load_font(candidates: &[PathBuf]) -> FontFace {
    #[cfg(feature = "truetype")]
    for path in candidates {
        match OutlineFace::open(path) {
            Ok(face) => {
                debug!("using font {}", path.display());
                return FontFace::Outline(face);
            }
            Err(reason) => debug!("skipping font {}: {}", path.display(), reason),
        }
    }
    #[cfg(not(feature = "truetype"))]
    debug!(
        "truetype support disabled; ignoring {} font candidates",
        candidates.len()
    );
    FontFace::Builtin
}

/// Ink extent of a line of text relative to the pen origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub width: i32,
}

/// A face at a pixel size.
#[derive(Clone, Copy)]
pub struct Font<'a> {
    face: &'a FontFace,
    size: u32,
}

impl<'a> Font<'a> {
    pub fn new(face: &'a FontFace, size: u32) -> Self {
        Self { face, size }
    }

    pub fn measure(&self, text: &str) -> TextBounds {
        match self.face {
            #[cfg(feature = "truetype")]
            FontFace::Outline(face) => face.measure(self.size, text),
            FontFace::Builtin => {
                let scale = builtin_scale(self.size);
                let metrics = builtin_style(Rgb888::WHITE).measure_string(
                    text,
                    Point::zero(),
                    Baseline::Top,
                );
                TextBounds {
                    left: 0,
                    width: (metrics.bounding_box.size.width * scale) as i32,
                }
            }
        }
    }

    /// Pen x at which `text` is horizontally centered in `width` pixels.
    pub fn centered_x(&self, width: u32, text: &str) -> i32 {
        let b = self.measure(text);
        (width as i32 - b.width).div_euclid(2) - b.left
    }

    /// Draw `text` with its pen at `x` and the top of its line box at `y`.
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Color) {
        match self.face {
            #[cfg(feature = "truetype")]
            FontFace::Outline(face) => face.draw(canvas, self.size, x, y, text, color),
            FontFace::Builtin => {
                let mut target = ScaledTarget {
                    canvas,
                    origin: Point::new(x, y),
                    scale: builtin_scale(self.size),
                };
                let text = Text::with_baseline(
                    text,
                    Point::zero(),
                    builtin_style(to_rgb888(color)),
                    Baseline::Top,
                );
                draw(&text, &mut target);
            }
        }
    }
}

fn builtin_style(color: Rgb888) -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(&BUILTIN, color)
}

fn builtin_scale(size: u32) -> u32 {
    (size / BUILTIN.character_size.height).max(1)
}

/// Blows each pixel up into a `scale`×`scale` block at `origin`.
struct ScaledTarget<'c> {
    canvas: &'c mut Canvas,
    origin: Point,
    scale: u32,
}

impl OriginDimensions for ScaledTarget<'_> {
    fn size(&self) -> Size {
        Size::new(
            self.canvas.width() / self.scale + 1,
            self.canvas.height() / self.scale + 1,
        )
    }
}

impl DrawTarget for ScaledTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let s = self.scale as i32;
        for Pixel(p, c) in pixels {
            self.canvas.block(
                self.origin.x + p.x * s,
                self.origin.y + p.y * s,
                self.scale,
                image::Rgb([c.r(), c.g(), c.b()]),
            );
        }
        Ok(())
    }
}

#[cfg(feature = "truetype")]
pub struct OutlineFace {
    font: FontVec,
    source: PathBuf,
}

#[cfg(feature = "truetype")]
impl OutlineFace {
    fn open(path: &Path) -> std::result::Result<Self, FontError> {
        let data = std::fs::read(path)?;
        // Index 0 also selects the first face of a .ttc collection
        let font = FontVec::try_from_vec_and_index(data, 0)?;
        Ok(Self {
            font,
            source: path.to_path_buf(),
        })
    }

    /// `size` is the em size in pixels.
    fn scale(&self, size: u32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size as f32 * self.font.height_unscaled() / units_per_em)
    }

    fn layout(&self, size: u32, text: &str) -> (Vec<Glyph>, f32) {
        let scale = self.scale(size);
        let scaled = self.font.as_scaled(scale);
        let mut glyphs = Vec::with_capacity(text.len());
        let mut caret = 0.0f32;
        let mut prev = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, scaled.ascent())));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        (glyphs, caret)
    }

    fn measure(&self, size: u32, text: &str) -> TextBounds {
        let (glyphs, advance) = self.layout(size, text);
        let mut extent: Option<(f32, f32)> = None;
        for glyph in glyphs {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                extent = Some(match extent {
                    None => (b.min.x, b.max.x),
                    Some((l, r)) => (l.min(b.min.x), r.max(b.max.x)),
                });
            }
        }
        match extent {
            Some((l, r)) => TextBounds {
                left: l as i32,
                width: (r - l) as i32,
            },
            // Whitespace only: no ink, fall back to the advance
            None => TextBounds {
                left: 0,
                width: advance.round() as i32,
            },
        }
    }

    fn draw(&self, canvas: &mut Canvas, size: u32, x: i32, y: i32, text: &str, color: Color) {
        let (glyphs, _) = self.layout(size, text);
        for glyph in glyphs {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                let (ox, oy) = (x + b.min.x as i32, y + b.min.y as i32);
                outlined.draw(|gx, gy, coverage| {
                    canvas.blend(ox + gx as i32, oy + gy as i32, color, coverage)
                });
            }
        }
    }
}
