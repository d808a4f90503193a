use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::controls::Control;
use crate::timer::RepeatingTimer;

/// Something that can be shifted horizontally by a percentage of its own width.
pub trait Surface {
    fn translate_x(&mut self, percent: f32);
}

/// Translation (in percent of the container width) that brings `index` into view.
pub fn offset_for(index: usize) -> f32 {
    -(index as f32 * 100.0)
}

/// Owns the current slide index and keeps the surface in sync with it.
///
/// Going back stops at the first slide, going forward (manually or from the
/// timer) wraps around to it.
pub struct Navigator<S> {
    surface: S,
    index: usize,
    slide_count: usize,
}

impl<S: Surface> Navigator<S> {
    /// Starts on slide 0 and renders it.
    pub fn new(surface: S, config: &Config) -> Self {
        let mut navigator = Self {
            surface,
            index: 0,
            slide_count: config.slide_count(),
        };
        navigator.render();
        navigator
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn go_previous(&mut self) {
        self.index = self.index.saturating_sub(1);
        debug!(index = self.index, "previous");
        self.render();
    }

    pub fn go_next(&mut self) {
        self.index = self.following();
        debug!(index = self.index, "next");
        self.render();
    }

    pub fn auto_advance(&mut self) {
        self.index = self.following();
        debug!(index = self.index, "auto-advance");
        self.render();
    }

    fn following(&self) -> usize {
        (self.index + 1) % self.slide_count
    }

    fn render(&mut self) {
        self.surface.translate_x(offset_for(self.index));
    }
}

/// Applies one frame of input: activated controls in order, then every timer
/// period that completed during `dt`.
///
/// `remaining` counts the firings still allowed; when it reaches zero the timer
/// is cancelled and `true` is returned.
pub fn step<S: Surface>(
    navigator: &mut Navigator<S>,
    timer: &mut RepeatingTimer,
    controls: &[Control],
    dt: Duration,
    remaining: &mut Option<u64>,
) -> bool {
    for control in controls {
        match control {
            Control::Previous => navigator.go_previous(),
            Control::Next => navigator.go_next(),
        }
    }

    for _ in 0..timer.tick(dt) {
        if !timer.is_running() {
            break;
        }
        navigator.auto_advance();
        if let Some(left) = remaining.as_mut() {
            *left = left.saturating_sub(1);
            if *left == 0 {
                timer.cancel();
            }
        }
    }

    *remaining == Some(0)
}
