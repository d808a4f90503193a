use raylib::prelude::*;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

impl Control {
    fn key(self) -> KeyboardKey {
        match self {
            Control::Previous => KeyboardKey::KEY_LEFT,
            Control::Next => KeyboardKey::KEY_RIGHT,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Control::Previous => "<",
            Control::Next => ">",
        }
    }
}

/// On-screen button, in framebuffer coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub control: Control,
    rect: Rectangle,
}

impl Button {
    pub fn new(control: Control) -> Self {
        let x = match control {
            Control::Previous => BUTTON_MARGIN,
            Control::Next => RENDER_WIDTH as f32 - BUTTON_MARGIN - BUTTON_WIDTH,
        };
        let y = (RENDER_HEIGHT as f32 - BUTTON_HEIGHT) * 0.5;
        Self {
            control,
            rect: Rectangle::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    /// Previous on the left edge, next on the right edge.
    pub fn pair() -> [Button; 2] {
        [Button::new(Control::Previous), Button::new(Control::Next)]
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.rect.x
            && point.x < self.rect.x + self.rect.width
            && point.y >= self.rect.y
            && point.y < self.rect.y + self.rect.height
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle_rec(self.rect, Color::new(0, 0, 0, 0x80));
        let glyph = self.control.glyph();
        let text_width = d.measure_text(glyph, BUTTON_FONT_SIZE);
        d.draw_text(
            glyph,
            (self.rect.x + (self.rect.width - text_width as f32) * 0.5) as i32,
            (self.rect.y + (self.rect.height - BUTTON_FONT_SIZE as f32) * 0.5) as i32,
            BUTTON_FONT_SIZE,
            Color::WHITE,
        );
    }
}

/// Maps a window position into the framebuffer, which is stretched over the whole window.
pub fn to_framebuffer(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return point;
    }
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width,
        point.y * RENDER_HEIGHT as f32 / screen_height,
    )
}

/// Controls activated this frame, previous before next.
pub fn poll(rl: &RaylibHandle, buttons: &[Button]) -> Vec<Control> {
    let click = if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        Some(to_framebuffer(
            rl.get_mouse_position(),
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        ))
    } else {
        None
    };

    [Control::Previous, Control::Next]
        .into_iter()
        .filter(|&control| {
            let clicked = click.is_some_and(|point| {
                buttons.iter().any(|b| b.control == control && b.contains(point))
            });
            clicked || rl.is_key_pressed(control.key())
        })
        .collect()
}
