//! Per-frame callback and the state it can see

use super::input::{Keyboard, MessageRouter, Mouse};

/// Clear color used until a handler picks one
pub const DEFAULT_CLEAR_COLOR: [f64; 3] = [0.1, 0.1, 0.1];

/// Application logic run once per frame
///
/// The handler drains whatever input arrived since the previous frame and
/// decides what the frame should look like.
pub trait FrameHandler {
    /// Name of this handler for logging
    fn name(&self) -> &str;

    /// Called once per frame after pending window events were routed
    fn frame(&mut self, frame: &mut Frame<'_>);
}

/// View of the shell handed to [`FrameHandler::frame`]
pub struct Frame<'a> {
    input: &'a mut MessageRouter,
    elapsed: f32,
    delta: f32,
    clear_color: [f64; 3],
    title: Option<String>,
}

impl<'a> Frame<'a> {
    /// Builds a frame over the given input queues
    ///
    /// `elapsed` is seconds since startup, `delta` seconds since the previous frame.
    pub fn new(input: &'a mut MessageRouter, elapsed: f32, delta: f32) -> Self {
        Self {
            input,
            elapsed,
            delta,
            clear_color: DEFAULT_CLEAR_COLOR,
            title: None,
        }
    }

    pub fn keyboard(&self) -> &Keyboard {
        self.input.keyboard()
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        self.input.keyboard_mut()
    }

    pub fn mouse(&self) -> &Mouse {
        self.input.mouse()
    }

    pub fn mouse_mut(&mut self) -> &mut Mouse {
        self.input.mouse_mut()
    }

    /// Seconds since the application started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds since the previous frame
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn set_clear_color(&mut self, rgb: [f64; 3]) {
        self.clear_color = rgb;
    }

    pub fn clear_color(&self) -> [f64; 3] {
        self.clear_color
    }

    /// Requests a new window title, applied after the handler returns
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }
}
