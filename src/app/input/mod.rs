//! Input event bridge
//!
//! Turns the platform's raw notification stream into two bounded,
//! pollable queues: one for the keyboard, one for the mouse.
//!
//! # Architecture
//!
//! ```text
//! winit WindowEvent → InputCollector → RawInput
//!                                         ↓
//!                                   MessageRouter
//!                                  (gating, capture,
//!                                   focus loss)
//!                                   ↙          ↘
//!                            Keyboard          Mouse
//!                        (KeyState, keys,   (live state, wheel
//!                          chars queues)     carry, events queue)
//! ```
//!
//! Only the router can produce events; everything outside this module sees
//! the consumer side (poll, flush, live-state queries, autorepeat toggle).
//!
//! # Usage
//!
//! ```
//! use window_shell::app::input::{KeyEvent, MessageRouter, Modifiers, RawInput};
//!
//! let mut router = MessageRouter::new(800, 600);
//! router.dispatch(RawInput::KeyDown {
//!     code: 0x41,
//!     repeat: false,
//!     modifiers: Modifiers::empty(),
//! });
//!
//! assert!(router.keyboard().is_key_down(0x41));
//! assert_eq!(router.keyboard_mut().poll_key_event(), KeyEvent::Press(0x41));
//! ```

mod collector;
mod events;
mod keyboard;
mod mouse;
mod queue;
mod raw;
mod router;

// Re-export public API
pub use collector::{DEFAULT_LINE_HEIGHT_PX, InputCollector, virtual_key, wheel_units};
pub use events::{CharCode, KeyCode, KeyEvent, MouseEvent, MouseEventKind};
pub use keyboard::{KEY_COUNT, KeyState, Keyboard};
pub use mouse::{Mouse, WHEEL_DELTA};
pub use queue::{BoundedQueue, DEFAULT_CAPACITY};
pub use raw::{Modifiers, MouseButton, RawInput};
pub use router::{CaptureChange, MessageRouter};
