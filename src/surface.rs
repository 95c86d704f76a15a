use image::imageops::overlay;
use image::{Rgba, RgbaImage};

use crate::entity::Rect;

/// An RGBA pixel buffer. Used both as an element's image and as the screen
/// the elements are drawn onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Surface {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        Surface {
            pixels: RgbaImage::from_pixel(width, height, Rgba(color)),
        }
    }

    pub fn from_image(pixels: RgbaImage) -> Self {
        Surface { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// The surface's own rectangle with its top-left corner moved to (x, y).
    pub fn rect_at(&self, x: f32, y: f32) -> Rect {
        Rect::new(x, y, self.width(), self.height())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.pixels.get_pixel(x, y).0)
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: [u8; 4]) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba(color);
        }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Composites `src` over this surface with its top-left corner at (x, y).
    /// Whatever falls outside this surface is clipped.
    pub fn blit(&mut self, src: &Surface, x: i64, y: i64) {
        let (dst_w, dst_h) = (self.width() as i64, self.height() as i64);
        let (src_w, src_h) = (src.width() as i64, src.height() as i64);

        // Nothing visible; also keeps far-away offsets out of overlay's arithmetic
        if x >= dst_w
            || y >= dst_h
            || x.saturating_add(src_w) <= 0
            || y.saturating_add(src_h) <= 0
        {
            return;
        }

        overlay(&mut self.pixels, &src.pixels, x, y);
    }
}
