//! Raw input collection from winit events

use tracing::trace;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};

use super::events::KeyCode;
use super::mouse::WHEEL_DELTA;
use super::raw::{Modifiers, MouseButton, RawInput};

/// Pixels per wheel line when the platform reports pixel deltas
pub const DEFAULT_LINE_HEIGHT_PX: f32 = 20.0;

/// Turns winit window events into [`RawInput`] notifications
///
/// winit reports modifiers, button state and cursor position as separate
/// events; the collector remembers them so every notification carries the
/// full context the router needs.
#[derive(Debug, Clone)]
pub struct InputCollector {
    keys: Modifiers,
    buttons: Modifiers,
    cursor: (i32, i32),
    line_height_px: f32,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self::with_line_height(DEFAULT_LINE_HEIGHT_PX)
    }

    /// Creates a collector converting pixel scroll using the given line height
    pub fn with_line_height(line_height_px: f32) -> Self {
        Self {
            keys: Modifiers::empty(),
            buttons: Modifiers::empty(),
            cursor: (0, 0),
            line_height_px: if line_height_px > 0.0 {
                line_height_px
            } else {
                DEFAULT_LINE_HEIGHT_PX
            },
        }
    }

    /// Modifier keys and drag buttons currently held
    pub fn modifiers(&self) -> Modifiers {
        self.keys | self.buttons
    }

    /// Last cursor position seen, in physical pixels
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Handle a winit window event, appending the resulting notifications
    pub fn handle_window_event(&mut self, event: &WindowEvent, out: &mut Vec<RawInput>) {
        match event {
            WindowEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } => {
                // winit fakes presses/releases around focus changes; the
                // router handles focus loss on its own
                if *is_synthetic {
                    trace!(key = ?event.physical_key, "Ignoring synthetic key event");
                    return;
                }

                let code = match event.physical_key {
                    PhysicalKey::Code(key) => virtual_key(key),
                    PhysicalKey::Unidentified(_) => None,
                };

                match (code, event.state) {
                    (Some(code), ElementState::Pressed) => out.push(RawInput::KeyDown {
                        code: u32::from(code),
                        repeat: event.repeat,
                        modifiers: self.modifiers(),
                    }),
                    (Some(code), ElementState::Released) => out.push(RawInput::KeyUp {
                        code: u32::from(code),
                        modifiers: self.modifiers(),
                    }),
                    (None, _) => trace!(key = ?event.physical_key, "Unmapped key"),
                }

                if event.state.is_pressed()
                    && let Some(text) = &event.text
                {
                    out.extend(text.chars().map(|ch| RawInput::Char { code: ch as u32 }));
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x.floor() as i32, position.y.floor() as i32);
                out.push(RawInput::PointerMoved {
                    x: self.cursor.0,
                    y: self.cursor.1,
                    modifiers: self.modifiers(),
                });
            }

            WindowEvent::CursorLeft { .. } => {
                out.push(RawInput::PointerExited {
                    modifiers: self.modifiers(),
                });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    _ => return,
                };
                let pressed = state.is_pressed();
                self.set_button(button, pressed);

                out.push(RawInput::Button {
                    button,
                    pressed,
                    x: self.cursor.0,
                    y: self.cursor.1,
                    modifiers: self.modifiers(),
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = wheel_units(*delta, self.line_height_px);
                if delta != 0 {
                    out.push(RawInput::Wheel {
                        x: self.cursor.0,
                        y: self.cursor.1,
                        delta,
                        modifiers: self.modifiers(),
                    });
                }
            }

            WindowEvent::ModifiersChanged(modifiers_state) => {
                let state = modifiers_state.state();
                let mut keys = Modifiers::empty();
                keys.set(Modifiers::SHIFT, state.shift_key());
                keys.set(Modifiers::CONTROL, state.control_key());
                keys.set(Modifiers::ALT, state.alt_key());
                keys.set(Modifiers::SUPER, state.super_key());
                self.keys = keys;
            }

            WindowEvent::Focused(false) => {
                // Button-up may never arrive once focus is gone
                self.buttons = Modifiers::empty();
                out.push(RawInput::FocusLost);
            }

            WindowEvent::Resized(size) => out.push(RawInput::Resized {
                width: size.width,
                height: size.height,
            }),

            _ => {}
        }
    }

    fn set_button(&mut self, button: MouseButton, pressed: bool) {
        let flag = match button {
            MouseButton::Left => Modifiers::LEFT_BUTTON,
            MouseButton::Right => Modifiers::RIGHT_BUTTON,
        };
        self.buttons.set(flag, pressed);
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a winit scroll delta into raw wheel units (120 per tick)
pub fn wheel_units(delta: MouseScrollDelta, line_height_px: f32) -> i32 {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => (lines * WHEEL_DELTA as f32).round() as i32,
        MouseScrollDelta::PixelDelta(pos) => {
            (pos.y * f64::from(WHEEL_DELTA) / f64::from(line_height_px)).round() as i32
        }
    }
}

/// Maps a physical key onto its virtual key code
pub fn virtual_key(key: WinitKey) -> Option<KeyCode> {
    use WinitKey as WK;

    let code = match key {
        WK::Backspace => 0x08,
        WK::Tab => 0x09,
        WK::Enter | WK::NumpadEnter => 0x0D,
        WK::ShiftLeft | WK::ShiftRight => 0x10,
        WK::ControlLeft | WK::ControlRight => 0x11,
        WK::AltLeft | WK::AltRight => 0x12,
        WK::Pause => 0x13,
        WK::CapsLock => 0x14,
        WK::Escape => 0x1B,
        WK::Space => 0x20,
        WK::PageUp => 0x21,
        WK::PageDown => 0x22,
        WK::End => 0x23,
        WK::Home => 0x24,
        WK::ArrowLeft => 0x25,
        WK::ArrowUp => 0x26,
        WK::ArrowRight => 0x27,
        WK::ArrowDown => 0x28,
        WK::Insert => 0x2D,
        WK::Delete => 0x2E,

        WK::Digit0 => 0x30,
        WK::Digit1 => 0x31,
        WK::Digit2 => 0x32,
        WK::Digit3 => 0x33,
        WK::Digit4 => 0x34,
        WK::Digit5 => 0x35,
        WK::Digit6 => 0x36,
        WK::Digit7 => 0x37,
        WK::Digit8 => 0x38,
        WK::Digit9 => 0x39,

        WK::KeyA => 0x41,
        WK::KeyB => 0x42,
        WK::KeyC => 0x43,
        WK::KeyD => 0x44,
        WK::KeyE => 0x45,
        WK::KeyF => 0x46,
        WK::KeyG => 0x47,
        WK::KeyH => 0x48,
        WK::KeyI => 0x49,
        WK::KeyJ => 0x4A,
        WK::KeyK => 0x4B,
        WK::KeyL => 0x4C,
        WK::KeyM => 0x4D,
        WK::KeyN => 0x4E,
        WK::KeyO => 0x4F,
        WK::KeyP => 0x50,
        WK::KeyQ => 0x51,
        WK::KeyR => 0x52,
        WK::KeyS => 0x53,
        WK::KeyT => 0x54,
        WK::KeyU => 0x55,
        WK::KeyV => 0x56,
        WK::KeyW => 0x57,
        WK::KeyX => 0x58,
        WK::KeyY => 0x59,
        WK::KeyZ => 0x5A,

        WK::Numpad0 => 0x60,
        WK::Numpad1 => 0x61,
        WK::Numpad2 => 0x62,
        WK::Numpad3 => 0x63,
        WK::Numpad4 => 0x64,
        WK::Numpad5 => 0x65,
        WK::Numpad6 => 0x66,
        WK::Numpad7 => 0x67,
        WK::Numpad8 => 0x68,
        WK::Numpad9 => 0x69,

        WK::F1 => 0x70,
        WK::F2 => 0x71,
        WK::F3 => 0x72,
        WK::F4 => 0x73,
        WK::F5 => 0x74,
        WK::F6 => 0x75,
        WK::F7 => 0x76,
        WK::F8 => 0x77,
        WK::F9 => 0x78,
        WK::F10 => 0x79,
        WK::F11 => 0x7A,
        WK::F12 => 0x7B,

        _ => return None,
    };

    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn letters_and_digits_match_ascii() {
        assert_eq!(virtual_key(WinitKey::KeyA), Some(b'A'));
        assert_eq!(virtual_key(WinitKey::KeyZ), Some(b'Z'));
        assert_eq!(virtual_key(WinitKey::Digit7), Some(b'7'));
    }

    #[test]
    fn both_shift_keys_share_a_code() {
        assert_eq!(virtual_key(WinitKey::ShiftLeft), Some(0x10));
        assert_eq!(virtual_key(WinitKey::ShiftRight), Some(0x10));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(virtual_key(WinitKey::MediaPlayPause), None);
    }

    #[test]
    fn one_line_is_one_tick() {
        assert_eq!(wheel_units(MouseScrollDelta::LineDelta(0.0, 1.0), 20.0), 120);
        assert_eq!(wheel_units(MouseScrollDelta::LineDelta(0.0, -0.5), 20.0), -60);
    }

    #[test]
    fn pixel_delta_scales_by_line_height() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 10.0));
        assert_eq!(wheel_units(delta, 20.0), 60);
    }

    #[test]
    fn button_tracking_feeds_modifiers() {
        let mut collector = InputCollector::new();
        collector.set_button(MouseButton::Left, true);
        assert!(collector.modifiers().is_dragging());

        collector.set_button(MouseButton::Left, false);
        assert!(collector.modifiers().is_empty());
    }

    #[test]
    fn non_positive_line_height_falls_back() {
        let collector = InputCollector::with_line_height(0.0);
        assert_eq!(collector.line_height_px, DEFAULT_LINE_HEIGHT_PX);
    }
}
