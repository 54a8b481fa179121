//! Platform-neutral raw input notifications

use bitflags::bitflags;

bitflags! {
    /// Modifier keys and mouse buttons held when a notification was produced
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const SUPER = 1 << 3;
        const LEFT_BUTTON = 1 << 4;
        const RIGHT_BUTTON = 1 << 5;
    }
}

impl Modifiers {
    /// Buttons whose hold turns an out-of-bounds move into a drag
    pub const DRAG_BUTTONS: Self = Self::LEFT_BUTTON.union(Self::RIGHT_BUTTON);

    pub fn is_dragging(self) -> bool {
        self.intersects(Self::DRAG_BUTTONS)
    }
}

/// Mouse button named by a raw button notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// One notification from the windowing layer, in arrival order
///
/// Codes are carried at platform width; the router masks them into the
/// 8-bit key and character domains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    KeyDown {
        code: u32,
        /// Set when the platform reports a held key repeating
        repeat: bool,
        modifiers: Modifiers,
    },
    KeyUp {
        code: u32,
        modifiers: Modifiers,
    },
    Char {
        code: u32,
    },
    PointerMoved {
        x: i32,
        y: i32,
        modifiers: Modifiers,
    },
    /// Pointer left the window without a final position
    PointerExited {
        modifiers: Modifiers,
    },
    Button {
        button: MouseButton,
        pressed: bool,
        x: i32,
        y: i32,
        modifiers: Modifiers,
    },
    Wheel {
        x: i32,
        y: i32,
        delta: i32,
        modifiers: Modifiers,
    },
    FocusLost,
    Resized {
        width: u32,
        height: u32,
    },
}
