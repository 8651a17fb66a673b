//! Font resolution with an explicit fallback path.
//!
//! Loading attempts an ordered list of system TrueType candidates; when none
//! resolve, the face degrades to an embedded 3x5 pixel glyph set scaled to the
//! requested size. Loading never fails — font availability affects visual
//! fidelity only.

use ab_glyph::{Font as _, FontVec, PxScale, ScaleFont as _};
use image::RgbImage;

use crate::render::surface::blend_pixel;
use crate::theme::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// A resolved text face: either a parsed TrueType font or the builtin glyphs.
#[derive(Debug)]
pub enum Face {
    TrueType(FontVec),
    Builtin,
}

/// Regular and bold faces resolved once per video production.
#[derive(Debug)]
pub struct FontBook {
    regular: Face,
    bold: Face,
}

const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];

impl FontBook {
    /// Resolve both faces, falling back to builtin glyphs per face.
    pub fn load() -> Self {
        Self {
            regular: load_face(REGULAR_CANDIDATES),
            bold: load_face(BOLD_CANDIDATES),
        }
    }

    /// Builtin-only book for deterministic rendering in tests.
    pub fn builtin() -> Self {
        Self {
            regular: Face::Builtin,
            bold: Face::Builtin,
        }
    }

    fn face(&self, weight: Weight) -> &Face {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }

    /// Pixel extent of `text` at `size`.
    pub fn measure(&self, text: &str, size: f32, weight: Weight) -> (u32, u32) {
        match self.face(weight) {
            Face::TrueType(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                let width: f32 = text
                    .chars()
                    .map(|ch| scaled.h_advance(font.glyph_id(ch)))
                    .sum();
                let height = scaled.ascent() - scaled.descent();
                (width.ceil().max(0.0) as u32, height.ceil().max(0.0) as u32)
            }
            Face::Builtin => builtin_measure(text, size),
        }
    }

    /// Draw `text` centered on `(cx, cy)` with coverage blending scaled by
    /// `opacity` in `[0, 1]`.
    pub fn draw(
        &self,
        img: &mut RgbImage,
        cx: i32,
        cy: i32,
        text: &str,
        size: f32,
        weight: Weight,
        color: Rgb,
        opacity: f64,
    ) {
        if text.is_empty() || opacity <= 0.0 {
            return;
        }
        match self.face(weight) {
            Face::TrueType(font) => draw_truetype(font, img, cx, cy, text, size, color, opacity),
            Face::Builtin => draw_builtin(img, cx, cy, text, size, color, opacity),
        }
    }
}

fn load_face(candidates: &[&str]) -> Face {
    for path in candidates {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => return Face::TrueType(font),
            Err(err) => tracing::debug!(%path, %err, "candidate font failed to parse"),
        }
    }
    tracing::debug!("no candidate font resolved, falling back to builtin glyphs");
    Face::Builtin
}

fn draw_truetype(
    font: &FontVec,
    img: &mut RgbImage,
    cx: i32,
    cy: i32,
    text: &str,
    size: f32,
    color: Rgb,
    opacity: f64,
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let width: f32 = text
        .chars()
        .map(|ch| scaled.h_advance(font.glyph_id(ch)))
        .sum();
    let height = scaled.ascent() - scaled.descent();
    let baseline = cy as f32 - height / 2.0 + scaled.ascent();

    let mut pen = cx as f32 - width / 2.0;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        let glyph = id.with_scale_and_position(scale, ab_glyph::point(pen, baseline));
        pen += scaled.h_advance(id);
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i32 + gx as i32;
            let y = bounds.min.y as i32 + gy as i32;
            blend_pixel(img, x, y, color, f64::from(coverage) * opacity);
        });
    }
}

fn builtin_px(size: f32) -> i32 {
    ((size / 8.0).round() as i32).max(1)
}

fn builtin_measure(text: &str, size: f32) -> (u32, u32) {
    let px = builtin_px(size);
    let n = text.chars().count() as i32;
    if n == 0 {
        return (0, 0);
    }
    (((n * 4 - 1) * px) as u32, (5 * px) as u32)
}

fn draw_builtin(
    img: &mut RgbImage,
    cx: i32,
    cy: i32,
    text: &str,
    size: f32,
    color: Rgb,
    opacity: f64,
) {
    let px = builtin_px(size);
    let (w, h) = builtin_measure(text, size);
    let mut cell_x = cx - w as i32 / 2;
    let top = cy - h as i32 / 2;

    for ch in text.chars() {
        let glyph = glyph_bits(ch.to_ascii_uppercase());
        for (row, pattern) in glyph.iter().enumerate() {
            for col in 0..3 {
                if (pattern >> (2 - col)) & 1 == 0 {
                    continue;
                }
                let x0 = cell_x + col * px;
                let y0 = top + row as i32 * px;
                for dy in 0..px {
                    for dx in 0..px {
                        blend_pixel(img, x0 + dx, y0 + dy, color, opacity);
                    }
                }
            }
        }
        cell_x += 4 * px;
    }
}

const fn glyph_bits(ch: char) -> [u8; 5] {
    match ch {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b111, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b111, 0b001, 0b001, 0b101, 0b111],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b011],
        'R' => [0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b111, 0b001, 0b010, 0b000, 0b010],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b111, 0b101, 0b010, 0b010, 0b111],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_never_fails() {
        // Whatever the host fonts look like, both faces resolve to something.
        let book = FontBook::load();
        let (w, h) = book.measure("VS", 56.0, Weight::Bold);
        assert!(w > 0);
        assert!(h > 0);
    }

    #[test]
    fn builtin_measure_scales_with_size() {
        let book = FontBook::builtin();
        let (w1, h1) = book.measure("TURN 1", 20.0, Weight::Regular);
        let (w2, h2) = book.measure("TURN 1", 40.0, Weight::Regular);
        assert!(w2 > w1);
        assert!(h2 > h1);
    }

    #[test]
    fn builtin_draw_marks_pixels() {
        let book = FontBook::builtin();
        let mut img = RgbImage::new(64, 64);
        book.draw(&mut img, 32, 32, "A", 16.0, Weight::Bold, Rgb(255, 255, 255), 1.0);
        assert!(img.pixels().any(|p| p.0 != [0, 0, 0]));
    }

    #[test]
    fn zero_opacity_draws_nothing() {
        let book = FontBook::builtin();
        let mut img = RgbImage::new(32, 32);
        book.draw(&mut img, 16, 16, "A", 16.0, Weight::Bold, Rgb(255, 255, 255), 0.0);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn empty_text_measures_zero() {
        let book = FontBook::builtin();
        assert_eq!(book.measure("", 20.0, Weight::Regular), (0, 0));
    }
}
