pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame when recording (seconds)

pub const DEFAULT_SLIDE_COUNT: usize = 12;    // Placeholder slides when no image directory is given
pub const DEFAULT_INTERVAL_MS: u64 = 10_000;  // Auto-advance period (milliseconds)

pub const IMAGE_FIT: f32 = 0.9;               // Largest share of the frame an image may cover

pub const BUTTON_WIDTH: f32 = 96.0;
pub const BUTTON_HEIGHT: f32 = 160.0;
pub const BUTTON_MARGIN: f32 = 32.0;          // Gap between a button and the frame edge
pub const BUTTON_FONT_SIZE: i32 = 96;
pub const LABEL_FONT_SIZE: i32 = 160;
