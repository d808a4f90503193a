use raylib::prelude::*;

use crate::constants::RENDER_WIDTH;
use crate::navigator::Surface;
use crate::slide::Slide;

/// The horizontal row of slides, one frame width each, shifted as a whole.
pub struct SlideStrip {
    slides: Vec<Slide>,
    offset: f32, // percent of the frame width
}

impl SlideStrip {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, offset: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Left edge of slide `index` in framebuffer pixels under the current translation.
    pub fn slide_left(&self, index: usize) -> f32 {
        (index as f32 * 100.0 + self.offset) / 100.0 * RENDER_WIDTH as f32
    }

    /// Whether any part of slide `index` lies inside the frame.
    pub fn is_visible(&self, index: usize) -> bool {
        let left = self.slide_left(index);
        let frame_w = RENDER_WIDTH as f32;
        left < frame_w && left + frame_w > 0.0
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for (i, slide) in self.slides.iter().enumerate() {
            if self.is_visible(i) {
                slide.draw(d, self.slide_left(i));
            }
        }
    }
}

impl Surface for SlideStrip {
    fn translate_x(&mut self, percent: f32) {
        self.offset = percent;
    }
}
