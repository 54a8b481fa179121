//! Events delivered through the keyboard and mouse queues

/// Virtual key identifier; the key table is indexed by it
pub type KeyCode = u8;

/// Narrow character produced by text composition
pub type CharCode = u8;

/// Discrete keyboard transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEvent {
    Press(KeyCode),
    Release(KeyCode),
    /// Returned when the key queue is polled empty
    #[default]
    Invalid,
}

impl KeyEvent {
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    pub fn is_press(self) -> bool {
        matches!(self, Self::Press(_))
    }

    pub fn is_release(self) -> bool {
        matches!(self, Self::Release(_))
    }

    /// Key code carried by the event, `None` for `Invalid`
    pub fn code(self) -> Option<KeyCode> {
        match self {
            Self::Press(code) | Self::Release(code) => Some(code),
            Self::Invalid => None,
        }
    }
}

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseEventKind {
    Move,
    Enter,
    Leave,
    LeftPress,
    LeftRelease,
    RightPress,
    RightRelease,
    WheelUp,
    WheelDown,
    /// Returned when the mouse queue is polled empty
    #[default]
    Invalid,
}

/// Pointer event with the mouse state captured when it was queued
///
/// The snapshot is a plain copy: later changes to the live mouse state never
/// reach an event that is already queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseEvent {
    kind: MouseEventKind,
    x: i32,
    y: i32,
    left_pressed: bool,
    right_pressed: bool,
}

impl MouseEvent {
    pub(super) fn snapshot(
        kind: MouseEventKind,
        (x, y): (i32, i32),
        left_pressed: bool,
        right_pressed: bool,
    ) -> Self {
        Self {
            kind,
            x,
            y,
            left_pressed,
            right_pressed,
        }
    }

    /// The empty-queue sentinel
    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.kind != MouseEventKind::Invalid
    }

    pub fn kind(&self) -> MouseEventKind {
        self.kind
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn position_x(&self) -> i32 {
        self.x
    }

    pub fn position_y(&self) -> i32 {
        self.y
    }

    /// Left button state when the event was queued
    pub fn left_pressed(&self) -> bool {
        self.left_pressed
    }

    /// Right button state when the event was queued
    pub fn right_pressed(&self) -> bool {
        self.right_pressed
    }
}
