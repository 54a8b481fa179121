//! Keyboard queue and key state table

use super::events::{CharCode, KeyCode, KeyEvent};
use super::queue::{BoundedQueue, DEFAULT_CAPACITY};

/// Number of distinct key codes
pub const KEY_COUNT: usize = 256;

/// Up/down state of every key code
#[derive(Debug, Clone)]
pub struct KeyState {
    down: [bool; KEY_COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            down: [false; KEY_COUNT],
        }
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.down[usize::from(code)]
    }

    pub fn set(&mut self, code: KeyCode, down: bool) {
        self.down[usize::from(code)] = down;
    }

    /// Number of keys currently held
    pub fn held_count(&self) -> usize {
        self.down.iter().filter(|down| **down).count()
    }

    pub fn clear(&mut self) {
        self.down = [false; KEY_COUNT];
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffered key transitions and produced characters
///
/// The consumer side is public. The `on_*` producers are only reachable from
/// inside the input module, where the message router drives them.
#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: KeyState,
    key_buffer: BoundedQueue<KeyEvent>,
    char_buffer: BoundedQueue<CharCode>,
    autorepeat: bool,
}

impl Keyboard {
    /// Creates a keyboard with the default queue capacity and autorepeat off
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a keyboard whose key and char queues each hold `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: KeyState::new(),
            key_buffer: BoundedQueue::with_capacity(capacity),
            char_buffer: BoundedQueue::with_capacity(capacity),
            autorepeat: false,
        }
    }

    /// True if the last transition for `code` was a press
    pub fn is_key_down(&self, code: KeyCode) -> bool {
        self.keys.is_down(code)
    }

    /// Removes the oldest key event, or returns [`KeyEvent::Invalid`]
    pub fn poll_key_event(&mut self) -> KeyEvent {
        self.key_buffer.pop().unwrap_or_default()
    }

    pub fn is_key_queue_empty(&self) -> bool {
        self.key_buffer.is_empty()
    }

    /// Removes the oldest produced character
    pub fn poll_char(&mut self) -> Option<CharCode> {
        self.char_buffer.pop()
    }

    pub fn is_char_queue_empty(&self) -> bool {
        self.char_buffer.is_empty()
    }

    pub fn flush_keys(&mut self) {
        self.key_buffer.clear();
    }

    pub fn flush_chars(&mut self) {
        self.char_buffer.clear();
    }

    /// Empties both queues; key state is left alone
    pub fn flush_all(&mut self) {
        self.flush_keys();
        self.flush_chars();
    }

    /// Whether held keys keep producing `Press` events
    pub fn set_autorepeat(&mut self, enabled: bool) {
        self.autorepeat = enabled;
    }

    pub fn autorepeat_enabled(&self) -> bool {
        self.autorepeat
    }

    pub fn key_queue_len(&self) -> usize {
        self.key_buffer.len()
    }

    pub fn char_queue_len(&self) -> usize {
        self.char_buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.key_buffer.capacity()
    }

    /// Number of keys currently held down
    pub fn held_key_count(&self) -> usize {
        self.keys.held_count()
    }

    // Fed by the router

    pub(super) fn on_key_pressed(&mut self, code: KeyCode) {
        self.keys.set(code, true);
        self.key_buffer.push(KeyEvent::Press(code));
    }

    pub(super) fn on_key_released(&mut self, code: KeyCode) {
        self.keys.set(code, false);
        self.key_buffer.push(KeyEvent::Release(code));
    }

    pub(super) fn on_char(&mut self, ch: CharCode) {
        self.char_buffer.push(ch);
    }

    /// Releases every key without touching queued events
    pub(super) fn reset_all_key_state(&mut self) {
        self.keys.clear();
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_tracks_last_transition() {
        let mut keyboard = Keyboard::new();
        keyboard.on_key_pressed(0x41);
        keyboard.on_key_pressed(0x42);
        keyboard.on_key_released(0x41);

        assert!(!keyboard.is_key_down(0x41));
        assert!(keyboard.is_key_down(0x42));
        assert!(!keyboard.is_key_down(0x43));
    }

    #[test]
    fn events_come_out_in_arrival_order() {
        let mut keyboard = Keyboard::new();
        keyboard.on_key_pressed(0x20);
        keyboard.on_key_released(0x20);

        assert_eq!(keyboard.poll_key_event(), KeyEvent::Press(0x20));
        assert_eq!(keyboard.poll_key_event(), KeyEvent::Release(0x20));
        assert!(keyboard.is_key_queue_empty());
    }

    #[test]
    fn polling_empty_queue_returns_invalid_and_keeps_state() {
        let mut keyboard = Keyboard::new();
        keyboard.on_key_pressed(0x10);
        keyboard.flush_keys();

        let event = keyboard.poll_key_event();
        assert!(!event.is_valid());
        assert!(keyboard.is_key_down(0x10));
    }

    #[test]
    fn key_queue_drops_oldest_past_capacity() {
        let mut keyboard = Keyboard::new();
        for code in 0..20u8 {
            keyboard.on_key_pressed(code);
        }

        assert_eq!(keyboard.key_queue_len(), 16);
        assert_eq!(keyboard.poll_key_event(), KeyEvent::Press(4));
        // state table is not bounded by the queue
        assert!(keyboard.is_key_down(0));
    }

    #[test]
    fn chars_are_independent_of_key_events() {
        let mut keyboard = Keyboard::new();
        keyboard.on_char(b'h');
        keyboard.on_char(b'i');

        assert!(keyboard.is_key_queue_empty());
        assert_eq!(keyboard.poll_char(), Some(b'h'));
        assert_eq!(keyboard.poll_char(), Some(b'i'));
        assert_eq!(keyboard.poll_char(), None);
    }

    #[test]
    fn reset_clears_state_but_not_queue() {
        let mut keyboard = Keyboard::new();
        keyboard.on_key_pressed(0x41);
        keyboard.on_key_pressed(0x42);

        keyboard.reset_all_key_state();

        assert_eq!(keyboard.held_key_count(), 0);
        assert_eq!(keyboard.key_queue_len(), 2);
    }

    #[test]
    fn flush_all_leaves_key_state() {
        let mut keyboard = Keyboard::new();
        keyboard.on_key_pressed(0x41);
        keyboard.on_char(b'a');

        keyboard.flush_all();
        keyboard.flush_all();

        assert!(keyboard.is_key_queue_empty());
        assert!(keyboard.is_char_queue_empty());
        assert!(keyboard.is_key_down(0x41));
    }

    #[test]
    fn autorepeat_defaults_off() {
        let mut keyboard = Keyboard::new();
        assert!(!keyboard.autorepeat_enabled());
        keyboard.set_autorepeat(true);
        assert!(keyboard.autorepeat_enabled());
    }
}
