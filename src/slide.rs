use raylib::prelude::*;
use crate::constants::*;

const PALETTE: [Color; 6] = [
    Color::new(0x2e, 0x34, 0x40, 0xff),
    Color::new(0x5e, 0x81, 0xac, 0xff),
    Color::new(0xa3, 0xbe, 0x8c, 0xff),
    Color::new(0xd0, 0x87, 0x70, 0xff),
    Color::new(0xb4, 0x8e, 0xad, 0xff),
    Color::new(0xeb, 0xcb, 0x8b, 0xff),
];

pub enum Content {
    Image(Texture2D),
    Panel { label: String, color: Color },
}

/// One full-frame cell of the strip.
pub struct Slide {
    content: Content,
    scale: f32,
}

/// Scale that fits a `width` x `height` picture inside the frame, never enlarging it.
pub fn fit_scale(width: i32, height: i32) -> f32 {
    if width <= 0 || height <= 0 {
        return 1.0;
    }
    let max_w = RENDER_WIDTH as f32 * IMAGE_FIT;
    let max_h = RENDER_HEIGHT as f32 * IMAGE_FIT;
    (max_w / width as f32).min(max_h / height as f32).min(1.0)
}

impl Slide {
    pub fn from_texture(image: Texture2D) -> Self {
        let scale = fit_scale(image.width(), image.height());
        Self { content: Content::Image(image), scale }
    }

    /// Numbered color panel, used when no images are supplied.
    pub fn placeholder(index: usize, total: usize) -> Self {
        Self {
            content: Content::Panel {
                label: format!("{} / {}", index + 1, total),
                color: PALETTE[index % PALETTE.len()],
            },
            scale: 1.0,
        }
    }

    #[cfg(test)]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Draws the slide with its left edge at `left` (framebuffer pixels).
    pub fn draw(&self, d: &mut RaylibDrawHandle, left: f32) {
        let frame_w = RENDER_WIDTH as f32;
        let frame_h = RENDER_HEIGHT as f32;

        match &self.content {
            Content::Image(image) => {
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;
                let scaled_width = tex_width * self.scale;
                let scaled_height = tex_height * self.scale;

                d.draw_texture_pro(
                    image,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        left + (frame_w - scaled_width) * 0.5,
                        (frame_h - scaled_height) * 0.5,
                        scaled_width,
                        scaled_height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            Content::Panel { label, color } => {
                d.draw_rectangle_rec(Rectangle::new(left, 0.0, frame_w, frame_h), *color);
                let text_width = d.measure_text(label, LABEL_FONT_SIZE);
                d.draw_text(
                    label,
                    (left + (frame_w - text_width as f32) * 0.5) as i32,
                    (frame_h - LABEL_FONT_SIZE as f32) as i32 / 2,
                    LABEL_FONT_SIZE,
                    Color::WHITE,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_keep_their_size() {
        assert_eq!(fit_scale(800, 600), 1.0);
    }

    #[test]
    fn wide_images_fit_the_width() {
        let scale = fit_scale(3456, 1000);
        assert!((scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn tall_images_fit_the_height() {
        let scale = fit_scale(1000, 1944);
        assert!((scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn wide_but_too_tall_images_fit_both() {
        let scale = fit_scale(1800, 1800);
        assert!(1800.0 * scale <= RENDER_HEIGHT as f32 * IMAGE_FIT + 1e-3);
    }

    #[test]
    fn placeholders_are_numbered_from_one() {
        let slide = Slide::placeholder(11, 12);
        match slide.content() {
            Content::Panel { label, color } => {
                assert_eq!(label, "12 / 12");
                let expected = PALETTE[11 % PALETTE.len()];
                assert_eq!((color.r, color.g, color.b), (expected.r, expected.g, expected.b));
            }
            Content::Image(_) => panic!("expected a panel"),
        }
    }
}
