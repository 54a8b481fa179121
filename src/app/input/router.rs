//! Routes raw notifications into the keyboard and mouse queues

use tracing::{debug, trace};

use crate::app::config::InputConfig;
use super::events::{CharCode, KeyCode};
use super::keyboard::Keyboard;
use super::mouse::Mouse;
use super::raw::{Modifiers, MouseButton, RawInput};

/// Pointer capture change the windowing layer should apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureChange {
    /// Pointer entered the client area; keep receiving moves outside it
    Acquire,
    /// Pointer left with no button held
    Release,
}

/// Single entry point for raw input
///
/// Owns both queues and hands out their consumer side. Each notification is
/// handled exactly once, in the order it arrives.
#[derive(Debug, Clone)]
pub struct MessageRouter {
    keyboard: Keyboard,
    mouse: Mouse,
    client_width: i32,
    client_height: i32,
}

impl MessageRouter {
    /// Creates a router for a client area of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_queues(Keyboard::new(), Mouse::new(), width, height)
    }

    /// Creates a router using queue capacity and autorepeat from configuration
    pub fn from_config(config: &InputConfig, width: u32, height: u32) -> Self {
        let mut keyboard = Keyboard::with_capacity(config.queue_capacity);
        keyboard.set_autorepeat(config.autorepeat);
        Self::with_queues(
            keyboard,
            Mouse::with_capacity(config.queue_capacity),
            width,
            height,
        )
    }

    fn with_queues(keyboard: Keyboard, mouse: Mouse, width: u32, height: u32) -> Self {
        let mut router = Self {
            keyboard,
            mouse,
            client_width: 0,
            client_height: 0,
        };
        router.set_client_size(width, height);
        router
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    pub fn mouse_mut(&mut self) -> &mut Mouse {
        &mut self.mouse
    }

    /// Client area used for the inside/outside test
    pub fn client_size(&self) -> (i32, i32) {
        (self.client_width, self.client_height)
    }

    /// Empties the key, char and mouse queues
    pub fn flush_all(&mut self) {
        self.keyboard.flush_all();
        self.mouse.flush();
    }

    /// Handles one raw notification
    ///
    /// Returns the capture change the window should apply, if any.
    pub fn dispatch(&mut self, raw: RawInput) -> Option<CaptureChange> {
        trace!(?raw, "dispatch");

        match raw {
            RawInput::KeyDown { code, repeat, .. } => {
                if !repeat || self.keyboard.autorepeat_enabled() {
                    self.keyboard.on_key_pressed(mask_key(code));
                }
                None
            }
            RawInput::KeyUp { code, .. } => {
                self.keyboard.on_key_released(mask_key(code));
                None
            }
            RawInput::Char { code } => {
                self.keyboard.on_char(mask_char(code));
                None
            }
            RawInput::PointerMoved { x, y, modifiers } => self.pointer_moved(x, y, modifiers),
            RawInput::PointerExited { modifiers } => {
                if modifiers.is_dragging() {
                    None
                } else {
                    self.leave()
                }
            }
            RawInput::Button {
                button,
                pressed,
                x,
                y,
                modifiers,
            } => {
                match (button, pressed) {
                    (MouseButton::Left, true) => self.mouse.on_left_press(x, y),
                    (MouseButton::Left, false) => self.mouse.on_left_release(x, y),
                    (MouseButton::Right, true) => self.mouse.on_right_press(x, y),
                    (MouseButton::Right, false) => self.mouse.on_right_release(x, y),
                }
                // A drag that ends outside the client area leaves the window
                if !pressed && !modifiers.is_dragging() && !self.contains(x, y) {
                    self.leave()
                } else {
                    None
                }
            }
            RawInput::Wheel { x, y, delta, .. } => {
                self.mouse.on_wheel_delta(x, y, delta);
                None
            }
            RawInput::FocusLost => {
                debug!(
                    held = self.keyboard.held_key_count(),
                    "Focus lost, releasing held keys"
                );
                self.keyboard.reset_all_key_state();
                // Button-up may never arrive once focus is gone
                self.mouse.release_buttons();
                None
            }
            RawInput::Resized { width, height } => {
                self.set_client_size(width, height);
                None
            }
        }
    }

    fn pointer_moved(&mut self, x: i32, y: i32, modifiers: Modifiers) -> Option<CaptureChange> {
        if self.contains(x, y) {
            self.mouse.on_move(x, y);
            if !self.mouse.is_in_window() {
                self.mouse.on_mouse_enter();
                debug!(x, y, "Pointer entered client area");
                return Some(CaptureChange::Acquire);
            }
            None
        } else if modifiers.is_dragging() {
            self.mouse.on_move(x, y);
            None
        } else {
            self.leave()
        }
    }

    fn leave(&mut self) -> Option<CaptureChange> {
        if !self.mouse.is_in_window() {
            return None;
        }
        self.mouse.on_mouse_leave();
        debug!("Pointer left client area");
        Some(CaptureChange::Release)
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.client_width && y >= 0 && y < self.client_height
    }

    fn set_client_size(&mut self, width: u32, height: u32) {
        self.client_width = i32::try_from(width).unwrap_or(i32::MAX);
        self.client_height = i32::try_from(height).unwrap_or(i32::MAX);
    }
}

fn mask_key(code: u32) -> KeyCode {
    (code & 0xFF) as KeyCode
}

fn mask_char(code: u32) -> CharCode {
    (code & 0xFF) as CharCode
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input::events::{KeyEvent, MouseEventKind};

    fn router() -> MessageRouter {
        MessageRouter::new(800, 600)
    }

    fn moved(x: i32, y: i32) -> RawInput {
        RawInput::PointerMoved {
            x,
            y,
            modifiers: Modifiers::empty(),
        }
    }

    fn key_down(code: u32, repeat: bool) -> RawInput {
        RawInput::KeyDown {
            code,
            repeat,
            modifiers: Modifiers::empty(),
        }
    }

    fn drain_kinds(router: &mut MessageRouter) -> Vec<MouseEventKind> {
        let mut kinds = Vec::new();
        while !router.mouse().is_empty() {
            kinds.push(router.mouse_mut().poll_event().kind());
        }
        kinds
    }

    #[test]
    fn repeats_are_dropped_unless_autorepeat_is_on() {
        let mut router = router();
        router.dispatch(key_down(0x41, false));
        router.dispatch(key_down(0x41, true));
        router.dispatch(key_down(0x41, true));
        assert_eq!(router.keyboard().key_queue_len(), 1);

        router.keyboard_mut().set_autorepeat(true);
        router.dispatch(key_down(0x41, true));
        assert_eq!(router.keyboard().key_queue_len(), 2);
    }

    #[test]
    fn release_is_never_gated() {
        let mut router = router();
        router.dispatch(RawInput::KeyUp {
            code: 0x41,
            modifiers: Modifiers::empty(),
        });

        assert_eq!(router.keyboard_mut().poll_key_event(), KeyEvent::Release(0x41));
    }

    #[test]
    fn wide_codes_are_masked_into_byte_range() {
        let mut router = router();
        router.dispatch(key_down(0x1_41, false));
        router.dispatch(RawInput::Char { code: 0x2_61 });

        assert!(router.keyboard().is_key_down(0x41));
        assert_eq!(router.keyboard_mut().poll_char(), Some(0x61));
    }

    #[test]
    fn first_move_inside_enters_once() {
        let mut router = router();
        assert_eq!(router.dispatch(moved(10, 10)), Some(CaptureChange::Acquire));
        assert_eq!(router.dispatch(moved(11, 10)), None);

        assert_eq!(
            drain_kinds(&mut router),
            vec![
                MouseEventKind::Move,
                MouseEventKind::Enter,
                MouseEventKind::Move
            ]
        );
    }

    #[test]
    fn leaving_without_buttons_emits_single_leave() {
        let mut router = router();
        router.dispatch(moved(10, 10));
        router.mouse_mut().flush();

        assert_eq!(router.dispatch(moved(-5, 10)), Some(CaptureChange::Release));
        assert_eq!(router.dispatch(moved(-6, 10)), None);
        assert_eq!(router.dispatch(moved(900, 10)), None);

        assert_eq!(drain_kinds(&mut router), vec![MouseEventKind::Leave]);
        assert!(!router.mouse().is_in_window());
    }

    #[test]
    fn drag_outside_forwards_moves_without_leave() {
        let mut router = router();
        router.dispatch(moved(10, 10));
        router.dispatch(RawInput::Button {
            button: MouseButton::Left,
            pressed: true,
            x: 10,
            y: 10,
            modifiers: Modifiers::LEFT_BUTTON,
        });
        router.mouse_mut().flush();

        let capture = router.dispatch(RawInput::PointerMoved {
            x: 850,
            y: 10,
            modifiers: Modifiers::LEFT_BUTTON,
        });

        assert_eq!(capture, None);
        assert!(router.mouse().is_in_window());
        let event = router.mouse_mut().poll_event();
        assert_eq!(event.kind(), MouseEventKind::Move);
        assert_eq!(event.position(), (850, 10));
        assert!(event.left_pressed());
        assert!(router.mouse().is_empty());
    }

    #[test]
    fn exit_notification_leaves_once() {
        let mut router = router();
        router.dispatch(moved(10, 10));
        router.mouse_mut().flush();

        let exited = RawInput::PointerExited {
            modifiers: Modifiers::empty(),
        };
        assert_eq!(router.dispatch(exited), Some(CaptureChange::Release));
        assert_eq!(router.dispatch(exited), None);
        assert_eq!(drain_kinds(&mut router), vec![MouseEventKind::Leave]);
    }

    #[test]
    fn focus_loss_resets_keys_but_keeps_events() {
        let mut router = router();
        router.dispatch(key_down(0x41, false));
        router.dispatch(key_down(0x10, false));

        router.dispatch(RawInput::FocusLost);

        assert!(!router.keyboard().is_key_down(0x41));
        assert!(!router.keyboard().is_key_down(0x10));
        assert_eq!(router.keyboard().key_queue_len(), 2);
    }

    #[test]
    fn resize_moves_the_client_boundary() {
        let mut router = router();
        router.dispatch(moved(10, 10));
        router.dispatch(RawInput::Resized {
            width: 100,
            height: 100,
        });
        router.mouse_mut().flush();

        assert_eq!(router.client_size(), (100, 100));
        assert_eq!(router.dispatch(moved(150, 50)), Some(CaptureChange::Release));
    }

    #[test]
    fn boundary_pixels_are_exclusive_on_the_far_edge() {
        let mut router = router();
        router.dispatch(moved(799, 599));
        assert!(router.mouse().is_in_window());

        router.dispatch(moved(800, 599));
        assert!(!router.mouse().is_in_window());
    }

    #[test]
    fn config_sets_capacity_and_autorepeat() {
        let config = InputConfig {
            queue_capacity: 4,
            autorepeat: true,
            line_height_px: 20.0,
        };
        let router = MessageRouter::from_config(&config, 640, 480);

        assert_eq!(router.keyboard().capacity(), 4);
        assert_eq!(router.mouse().capacity(), 4);
        assert!(router.keyboard().autorepeat_enabled());
    }

    #[test]
    fn release_outside_after_drag_leaves() {
        let mut router = router();
        router.dispatch(moved(10, 10));
        router.dispatch(RawInput::Button {
            button: MouseButton::Left,
            pressed: true,
            x: 10,
            y: 10,
            modifiers: Modifiers::LEFT_BUTTON,
        });
        router.dispatch(RawInput::PointerMoved {
            x: 900,
            y: 10,
            modifiers: Modifiers::LEFT_BUTTON,
        });
        assert_eq!(
            router.dispatch(RawInput::PointerExited {
                modifiers: Modifiers::LEFT_BUTTON
            }),
            None
        );

        let release = router.dispatch(RawInput::Button {
            button: MouseButton::Left,
            pressed: false,
            x: 900,
            y: 10,
            modifiers: Modifiers::empty(),
        });
        assert_eq!(release, Some(CaptureChange::Release));
        assert!(!router.mouse().is_in_window());

        assert_eq!(router.dispatch(moved(20, 20)), Some(CaptureChange::Acquire));
        assert_eq!(
            drain_kinds(&mut router),
            [
                MouseEventKind::Move,
                MouseEventKind::Enter,
                MouseEventKind::LeftPress,
                MouseEventKind::Move,
                MouseEventKind::LeftRelease,
                MouseEventKind::Leave,
                MouseEventKind::Move,
                MouseEventKind::Enter,
            ]
        );
    }

    #[test]
    fn release_outside_with_other_button_held_keeps_tracking() {
        let mut router = router();
        router.dispatch(moved(10, 10));
        let release = router.dispatch(RawInput::Button {
            button: MouseButton::Left,
            pressed: false,
            x: -3,
            y: 10,
            modifiers: Modifiers::RIGHT_BUTTON,
        });

        assert_eq!(release, None);
        assert!(router.mouse().is_in_window());
    }

    #[test]
    fn focus_loss_clears_live_buttons_silently() {
        let mut router = router();
        router.dispatch(moved(10, 10));
        router.dispatch(RawInput::Button {
            button: MouseButton::Right,
            pressed: true,
            x: 10,
            y: 10,
            modifiers: Modifiers::RIGHT_BUTTON,
        });
        let queued = router.mouse().len();

        router.dispatch(RawInput::FocusLost);

        assert!(!router.mouse().right_pressed());
        assert!(!router.mouse().left_pressed());
        assert_eq!(router.mouse().len(), queued);
    }

    #[test]
    fn zero_sized_router_picks_up_first_resize() {
        let mut router = MessageRouter::new(0, 0);
        assert_eq!(router.dispatch(moved(0, 0)), None);

        router.dispatch(RawInput::Resized {
            width: 1280,
            height: 720,
        });

        assert_eq!(router.dispatch(moved(1000, 700)), Some(CaptureChange::Acquire));
    }
}
