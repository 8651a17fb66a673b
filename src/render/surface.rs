//! A fixed-size RGB raster surface with the drawing operations the phase
//! renderers compose: gradient fill, rectangles, ellipses, glow outlines,
//! anchored text and aspect-preserving image paste.

use image::{RgbImage, imageops};

use crate::render::font::{FontBook, Weight};
use crate::theme::Rgb;

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(self) -> i32 {
        (self.x1 - self.x0).max(0)
    }

    pub fn height(self) -> i32 {
        (self.y1 - self.y0).max(0)
    }

    pub fn center(self) -> (i32, i32) {
        (self.x0 + self.width() / 2, self.y0 + self.height() / 2)
    }

    /// Grow the rect by `d` pixels on every side (negative shrinks).
    pub fn inflate(self, d: i32) -> Self {
        Self::new(self.x0 - d, self.y0 - d, self.x1 + d, self.y1 + d)
    }
}

pub struct Surface {
    img: RgbImage,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::new(width, height),
        }
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

    /// Vertical gradient: one interpolated color per row, identical across
    /// the row.
    pub fn gradient_fill(&mut self, top: Rgb, bottom: Rgb) {
        let h = self.img.height();
        for y in 0..h {
            let row = top.lerp(bottom, f64::from(y) / f64::from(h));
            let px = row.to_pixel();
            for x in 0..self.img.width() {
                self.img.put_pixel(x, y, px);
            }
        }
    }

    pub fn fill_rect(&mut self, r: Rect, color: Rgb) {
        let (w, h) = (self.img.width() as i32, self.img.height() as i32);
        let px = color.to_pixel();
        for y in r.y0.max(0)..r.y1.min(h) {
            for x in r.x0.max(0)..r.x1.min(w) {
                self.img.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    /// Outline `r` with a stroke of `width` pixels drawn inside its bounds.
    pub fn stroke_rect(&mut self, r: Rect, color: Rgb, width: u32) {
        let w = width as i32;
        if r.width() <= 2 * w || r.height() <= 2 * w {
            self.fill_rect(r, color);
            return;
        }
        self.fill_rect(Rect::new(r.x0, r.y0, r.x1, r.y0 + w), color);
        self.fill_rect(Rect::new(r.x0, r.y1 - w, r.x1, r.y1), color);
        self.fill_rect(Rect::new(r.x0, r.y0 + w, r.x0 + w, r.y1 - w), color);
        self.fill_rect(Rect::new(r.x1 - w, r.y0 + w, r.x1, r.y1 - w), color);
    }

    /// Concentric glow outlines at decreasing levels (`levels..=1`), each
    /// inflated by `spread * level` and tinted with [`Rgb::glow`].
    pub fn glow_rect(&mut self, r: Rect, base: Rgb, levels: u8, spread: i32, stroke: u32) {
        for level in (1..=levels).rev() {
            self.stroke_rect(r.inflate(spread * i32::from(level)), base.glow(level), stroke);
        }
    }

    pub fn fill_ellipse(&mut self, r: Rect, color: Rgb) {
        if r.width() <= 0 || r.height() <= 0 {
            return;
        }
        let (w, h) = (self.img.width() as i32, self.img.height() as i32);
        let cx = f64::from(r.x0 + r.x1) / 2.0;
        let cy = f64::from(r.y0 + r.y1) / 2.0;
        let rx = f64::from(r.width()) / 2.0;
        let ry = f64::from(r.height()) / 2.0;
        let px = color.to_pixel();

        for y in r.y0.max(0)..r.y1.min(h) {
            let ny = (f64::from(y) + 0.5 - cy) / ry;
            if ny.abs() > 1.0 {
                continue;
            }
            let half = rx * (1.0 - ny * ny).sqrt();
            let xa = ((cx - half).ceil() as i32).max(r.x0).max(0);
            let xb = ((cx + half).floor() as i32).min(r.x1 - 1).min(w - 1);
            for x in xa..=xb {
                self.img.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    pub fn stroke_ellipse(&mut self, r: Rect, color: Rgb, width: u32) {
        if r.width() <= 0 || r.height() <= 0 {
            return;
        }
        let stroke = width as f64;
        let cx = f64::from(r.x0 + r.x1) / 2.0;
        let cy = f64::from(r.y0 + r.y1) / 2.0;
        let rx = f64::from(r.width()) / 2.0;
        let ry = f64::from(r.height()) / 2.0;
        let (irx, iry) = ((rx - stroke).max(0.0), (ry - stroke).max(0.0));
        let (w, h) = (self.img.width() as i32, self.img.height() as i32);
        let px = color.to_pixel();

        for y in r.y0.max(0)..r.y1.min(h) {
            for x in r.x0.max(0)..r.x1.min(w) {
                let dx = f64::from(x) + 0.5 - cx;
                let dy = f64::from(y) + 0.5 - cy;
                let outer = (dx / rx).powi(2) + (dy / ry).powi(2);
                if outer > 1.0 {
                    continue;
                }
                let inner = if irx > 0.0 && iry > 0.0 {
                    (dx / irx).powi(2) + (dy / iry).powi(2)
                } else {
                    2.0
                };
                if inner >= 1.0 {
                    self.img.put_pixel(x as u32, y as u32, px);
                }
            }
        }
    }

    /// Scale `src` uniformly to fit inside `region` (aspect preserved,
    /// Lanczos3) and paste it centered. Returns the placed rect.
    pub fn paste_fit(&mut self, src: &RgbImage, region: Rect) -> Rect {
        let (sw, sh) = src.dimensions();
        if sw == 0 || sh == 0 || region.width() <= 0 || region.height() <= 0 {
            return Rect::new(region.x0, region.y0, region.x0, region.y0);
        }

        let scale = (f64::from(region.width()) / f64::from(sw))
            .min(f64::from(region.height()) / f64::from(sh));
        let new_w = ((f64::from(sw) * scale) as u32).max(1);
        let new_h = ((f64::from(sh) * scale) as u32).max(1);
        let resized = imageops::resize(src, new_w, new_h, imageops::FilterType::Lanczos3);

        let x0 = region.x0 + (region.width() - new_w as i32) / 2;
        let y0 = region.y0 + (region.height() - new_h as i32) / 2;
        let (w, h) = (self.img.width() as i32, self.img.height() as i32);
        for (sx, sy, px) in resized.enumerate_pixels() {
            let dx = x0 + sx as i32;
            let dy = y0 + sy as i32;
            if dx >= 0 && dy >= 0 && dx < w && dy < h {
                self.img.put_pixel(dx as u32, dy as u32, *px);
            }
        }
        Rect::new(x0, y0, x0 + new_w as i32, y0 + new_h as i32)
    }

    /// Center-center anchored text.
    pub fn draw_text(
        &mut self,
        book: &FontBook,
        cx: i32,
        cy: i32,
        text: &str,
        size: f32,
        weight: Weight,
        color: Rgb,
    ) {
        book.draw(&mut self.img, cx, cy, text, size, weight, color, 1.0);
    }

    /// Center-anchored text with an opacity multiplier (fade-ins).
    pub fn draw_text_faded(
        &mut self,
        book: &FontBook,
        cx: i32,
        cy: i32,
        text: &str,
        size: f32,
        weight: Weight,
        color: Rgb,
        opacity: f64,
    ) {
        book.draw(&mut self.img, cx, cy, text, size, weight, color, opacity);
    }
}

/// Alpha-blend one pixel of `color` onto `img`, clipping out-of-bounds writes.
pub(crate) fn blend_pixel(img: &mut RgbImage, x: i32, y: i32, color: Rgb, alpha: f64) {
    if alpha <= 0.0 {
        return;
    }
    let (w, h) = img.dimensions();
    if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
        return;
    }
    let a = alpha.min(1.0);
    let px = img.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in px.0.iter_mut().zip([color.0, color.1, color.2]) {
        *dst = (f64::from(*dst) * (1.0 - a) + f64::from(src) * a).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_interpolates_per_row() {
        let mut s = Surface::new(4, 10);
        let top = Rgb(0, 0, 0);
        let bottom = Rgb(100, 100, 100);
        s.gradient_fill(top, bottom);
        assert_eq!(s.image().get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(s.image().get_pixel(0, 5).0, [50, 50, 50]);
        // Every pixel in a row is identical.
        let row3 = s.image().get_pixel(0, 3).0;
        assert!((0..4).all(|x| s.image().get_pixel(x, 3).0 == row3));
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut s = Surface::new(8, 8);
        s.fill_rect(Rect::new(-5, -5, 100, 100), Rgb(9, 9, 9));
        assert!(s.image().pixels().all(|p| p.0 == [9, 9, 9]));
    }

    #[test]
    fn stroke_rect_leaves_interior() {
        let mut s = Surface::new(10, 10);
        s.stroke_rect(Rect::new(0, 0, 10, 10), Rgb(255, 0, 0), 2);
        assert_eq!(s.image().get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(s.image().get_pixel(5, 5).0, [0, 0, 0]);
    }

    #[test]
    fn ellipse_fill_covers_center_not_corners() {
        let mut s = Surface::new(20, 20);
        s.fill_ellipse(Rect::new(0, 0, 20, 20), Rgb(1, 2, 3));
        assert_eq!(s.image().get_pixel(10, 10).0, [1, 2, 3]);
        assert_eq!(s.image().get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(s.image().get_pixel(19, 19).0, [0, 0, 0]);
    }

    #[test]
    fn stroke_ellipse_is_hollow() {
        let mut s = Surface::new(40, 40);
        s.stroke_ellipse(Rect::new(0, 0, 40, 40), Rgb(7, 7, 7), 2);
        assert_eq!(s.image().get_pixel(20, 20).0, [0, 0, 0]);
        // Topmost point of the ring is painted.
        assert_eq!(s.image().get_pixel(20, 0).0, [7, 7, 7]);
    }

    #[test]
    fn paste_fit_preserves_aspect_and_centers() {
        let mut s = Surface::new(300, 300);
        let src = RgbImage::from_pixel(100, 50, image::Rgb([200, 0, 0]));
        let placed = s.paste_fit(&src, Rect::new(10, 10, 210, 210));
        // scale = min(200/100, 200/50) = 2 -> 200x100, centered vertically.
        assert_eq!(placed, Rect::new(10, 60, 210, 160));
        assert_eq!(s.image().get_pixel(100, 100).0, [200, 0, 0]);
        assert_eq!(s.image().get_pixel(100, 20).0, [0, 0, 0]);
    }

    #[test]
    fn glow_rect_paints_lifted_tones_outward() {
        let mut s = Surface::new(40, 40);
        let r = Rect::new(10, 10, 30, 30);
        s.glow_rect(r, Rgb(10, 10, 10), 3, 2, 1);
        // Outermost pass sits 6px out at glow level 3 -> channel 10 + 90.
        assert_eq!(s.image().get_pixel(4, 20).0, [100, 100, 100]);
        // Innermost pass sits 2px out at glow level 1.
        assert_eq!(s.image().get_pixel(8, 20).0, [40, 40, 40]);
    }
}
