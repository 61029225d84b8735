//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use std::collections::HashMap;

use fontdue::{Font, Metrics};

use super::layout::Rect;

/// Glyph cache key: (character, font_size as bits)
pub type GlyphCacheKey = (char, u32);
pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer can hold.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Constrain subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).min(self.height).max(self.min_y());
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.max_x());
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                self.buffer[row_start + x] = color;
            }
        }
    }

    /// Fill `rect` and draw a border of `thickness` pixels inside its edge
    pub fn draw_bordered_rect(&mut self, rect: Rect, thickness: f32, fill: u32, border: u32) {
        self.fill_rect(rect, border | 0xFF000000);
        self.fill_rect(rect.inset(thickness), fill);
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with a coverage value in `0.0..=1.0`
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }
        if alpha <= 0.0 {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }
}

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
}

impl<'a> TextPainter<'a> {
    pub fn new(font: &'a Font, glyph_cache: &'a mut GlyphCache) -> Self {
        Self { font, glyph_cache }
    }

    fn glyph(&mut self, ch: char, font_size: f32) -> &(Metrics, Vec<u8>) {
        let font = self.font;
        self.glyph_cache
            .entry((ch, font_size.to_bits()))
            .or_insert_with(|| font.rasterize(ch, font_size))
    }

    /// Distance from the top of a line box to its baseline
    pub fn ascent(&self, font_size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(font_size)
            .map_or(font_size * 0.8, |m| m.ascent)
    }

    /// Line height in pixels for a font size
    pub fn line_height(&self, font_size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(font_size)
            .map_or(font_size * 1.2, |m| m.new_line_size)
            .ceil()
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.glyph(ch, font_size).0.advance_width)
            .sum()
    }

    /// Draw text with its line box starting at (x, y)
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        color: u32,
    ) {
        let mut current_x = x;
        let baseline = y + self.ascent(font_size);

        for ch in text.chars() {
            let (metrics, bitmap) = self.glyph(ch, font_size);
            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let coverage = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if coverage == 0 {
                        continue;
                    }
                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px >= 0 && py >= 0 {
                        frame.blend_pixel(
                            px as usize,
                            py as usize,
                            color,
                            coverage as f32 / 255.0,
                        );
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 0.0), 0xFF000000);
        assert_eq!(blend_colors(0xFF000000, 0xFFFFFFFF, 1.0), 0xFFFFFFFF);
    }

    #[test]
    fn test_fill_rect_is_clipped_to_frame() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.fill_rect(Rect::new(2.0, 2.0, 10.0, 10.0), 0xFFFF0000);
        assert_eq!(frame.get_pixel(3, 3), 0xFFFF0000);
        assert_eq!(frame.get_pixel(1, 1), 0);
    }

    #[test]
    fn test_clip_limits_fill() {
        let mut buffer = vec![0u32; 8 * 8];
        let mut frame = Frame::new(&mut buffer, 8, 8);
        frame.set_clip(Rect::new(0.0, 0.0, 4.0, 4.0));
        frame.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), 0xFF00FF00);
        frame.clear_clip();
        assert_eq!(frame.get_pixel(3, 3), 0xFF00FF00);
        assert_eq!(frame.get_pixel(5, 5), 0);
    }

    #[test]
    fn test_bordered_rect() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.draw_bordered_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, 0xFFFFFFFF, 0xFF0000FF);
        assert_eq!(frame.get_pixel(0, 5), 0xFF0000FF);
        assert_eq!(frame.get_pixel(1, 5), 0xFF0000FF);
        assert_eq!(frame.get_pixel(5, 5), 0xFFFFFFFF);
    }

    #[test]
    fn test_short_buffer_shrinks_height() {
        let mut buffer = vec![0u32; 10 * 3];
        let frame = Frame::new(&mut buffer, 10, 10);
        assert_eq!(frame.height(), 3);
    }
}
