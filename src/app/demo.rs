//! Demo frame handler: pulsing background, input echoed to the log and title

use tracing::info;

use super::frame::{Frame, FrameHandler};
use super::input::{KeyCode, KeyEvent, MouseEventKind};

/// Virtual key that toggles autorepeat (F2)
pub const AUTOREPEAT_TOGGLE_KEY: KeyCode = 0x71;

/// Characters remembered for the title line
const TYPED_LIMIT: usize = 32;

/// Handler driving the demo binary
#[derive(Debug, Default)]
pub struct DemoHandler {
    wheel: i32,
    typed: String,
}

impl DemoHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net wheel ticks seen so far (up is positive)
    pub fn wheel_position(&self) -> i32 {
        self.wheel
    }

    /// Most recent printable characters typed
    pub fn typed(&self) -> &str {
        &self.typed
    }

    fn push_char(&mut self, ch: u8) {
        match ch {
            // backspace
            0x08 => {
                self.typed.pop();
            }
            0x20..=0x7E => {
                if self.typed.len() == TYPED_LIMIT {
                    self.typed.remove(0);
                }
                self.typed.push(char::from(ch));
            }
            _ => {}
        }
    }
}

impl FrameHandler for DemoHandler {
    fn name(&self) -> &str {
        "demo"
    }

    fn frame(&mut self, frame: &mut Frame<'_>) {
        let c = f64::from(frame.elapsed().sin()) / 2.0 + 0.5;
        frame.set_clear_color([c, c, 1.0]);

        loop {
            let event = frame.keyboard_mut().poll_key_event();
            if !event.is_valid() {
                break;
            }
            if event == KeyEvent::Press(AUTOREPEAT_TOGGLE_KEY) {
                let enabled = !frame.keyboard().autorepeat_enabled();
                frame.keyboard_mut().set_autorepeat(enabled);
                info!(enabled, "Autorepeat toggled");
            } else {
                info!(?event, "Key");
            }
        }

        let mut typed_any = false;
        while let Some(ch) = frame.keyboard_mut().poll_char() {
            self.push_char(ch);
            typed_any = true;
        }
        if typed_any {
            frame.set_title(format!("Typed: {}", self.typed));
        }

        loop {
            let event = frame.mouse_mut().poll_event();
            if !event.is_valid() {
                break;
            }
            match event.kind() {
                MouseEventKind::Move => {
                    let (x, y) = event.position();
                    frame.set_title(format!("Mouse position: ({x}, {y})"));
                }
                MouseEventKind::Leave => frame.set_title("Gone!"),
                MouseEventKind::WheelUp => {
                    self.wheel += 1;
                    frame.set_title(format!("Wheel: {}", self.wheel));
                }
                MouseEventKind::WheelDown => {
                    self.wheel -= 1;
                    frame.set_title(format!("Wheel: {}", self.wheel));
                }
                kind => info!(
                    ?kind,
                    x = event.position_x(),
                    y = event.position_y(),
                    left = event.left_pressed(),
                    right = event.right_pressed(),
                    "Mouse"
                ),
            }
        }
    }
}
