//! Mouse queue, live pointer state and wheel accumulation

use super::events::{MouseEvent, MouseEventKind};
use super::queue::{BoundedQueue, DEFAULT_CAPACITY};

/// Raw wheel delta that makes up one scroll tick
pub const WHEEL_DELTA: i32 = 120;

/// Live pointer state plus a queue of snapshotted pointer events
///
/// Consumers read live state and poll events. The `on_*` producers are only
/// reachable from inside the input module.
#[derive(Debug, Clone)]
pub struct Mouse {
    x: i32,
    y: i32,
    left_pressed: bool,
    right_pressed: bool,
    in_window: bool,
    wheel_carry: i32,
    buffer: BoundedQueue<MouseEvent>,
}

impl Mouse {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: 0,
            y: 0,
            left_pressed: false,
            right_pressed: false,
            in_window: false,
            wheel_carry: 0,
            buffer: BoundedQueue::with_capacity(capacity),
        }
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

    pub fn left_pressed(&self) -> bool {
        self.left_pressed
    }

    pub fn right_pressed(&self) -> bool {
        self.right_pressed
    }

    /// Whether the pointer is currently inside the client area
    pub fn is_in_window(&self) -> bool {
        self.in_window
    }

    /// Removes the oldest event, or returns an invalid one
    pub fn poll_event(&mut self) -> MouseEvent {
        self.buffer.pop().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn flush(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Sub-tick wheel delta not yet turned into an event
    pub fn wheel_carry(&self) -> i32 {
        self.wheel_carry
    }

    // Fed by the router

    pub(super) fn on_move(&mut self, x: i32, y: i32) {
        self.set_position(x, y);
        self.push(MouseEventKind::Move);
    }

    pub(super) fn on_mouse_enter(&mut self) {
        self.in_window = true;
        self.push(MouseEventKind::Enter);
    }

    pub(super) fn on_mouse_leave(&mut self) {
        self.in_window = false;
        self.push(MouseEventKind::Leave);
    }

    /// Clears both live buttons without queueing release events
    pub(super) fn release_buttons(&mut self) {
        self.left_pressed = false;
        self.right_pressed = false;
    }

    pub(super) fn on_left_press(&mut self, x: i32, y: i32) {
        self.set_position(x, y);
        self.left_pressed = true;
        self.push(MouseEventKind::LeftPress);
    }

    pub(super) fn on_left_release(&mut self, x: i32, y: i32) {
        self.set_position(x, y);
        self.left_pressed = false;
        self.push(MouseEventKind::LeftRelease);
    }

    pub(super) fn on_right_press(&mut self, x: i32, y: i32) {
        self.set_position(x, y);
        self.right_pressed = true;
        self.push(MouseEventKind::RightPress);
    }

    pub(super) fn on_right_release(&mut self, x: i32, y: i32) {
        self.set_position(x, y);
        self.right_pressed = false;
        self.push(MouseEventKind::RightRelease);
    }

    /// Folds a raw wheel delta into the carry and emits one event per full tick
    ///
    /// Opposite-direction deltas cancel inside the carry, so the number of
    /// ticks only depends on the running total.
    pub(super) fn on_wheel_delta(&mut self, x: i32, y: i32, delta: i32) {
        self.set_position(x, y);
        self.wheel_carry = self.wheel_carry.saturating_add(delta);

        while self.wheel_carry >= WHEEL_DELTA {
            self.wheel_carry -= WHEEL_DELTA;
            self.push(MouseEventKind::WheelUp);
        }
        while self.wheel_carry <= -WHEEL_DELTA {
            self.wheel_carry += WHEEL_DELTA;
            self.push(MouseEventKind::WheelDown);
        }
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn push(&mut self, kind: MouseEventKind) {
        self.buffer.push(MouseEvent::snapshot(
            kind,
            self.position(),
            self.left_pressed,
            self.right_pressed,
        ));
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_kinds(mouse: &mut Mouse) -> Vec<MouseEventKind> {
        let mut kinds = Vec::new();
        while !mouse.is_empty() {
            kinds.push(mouse.poll_event().kind());
        }
        kinds
    }

    #[test]
    fn fragmented_wheel_deltas_make_one_tick() {
        let mut mouse = Mouse::new();
        for delta in [50, 50, 50] {
            mouse.on_wheel_delta(0, 0, delta);
        }

        assert_eq!(drain_kinds(&mut mouse), vec![MouseEventKind::WheelUp]);
        assert_eq!(mouse.wheel_carry(), 30);
    }

    #[test]
    fn negative_wheel_delta_keeps_sign_of_carry() {
        let mut mouse = Mouse::new();
        mouse.on_wheel_delta(0, 0, -200);

        assert_eq!(drain_kinds(&mut mouse), vec![MouseEventKind::WheelDown]);
        assert_eq!(mouse.wheel_carry(), -80);
    }

    #[test]
    fn opposite_deltas_cancel_in_the_carry() {
        let mut mouse = Mouse::new();
        mouse.on_wheel_delta(0, 0, 130);
        mouse.on_wheel_delta(0, 0, -10);

        assert_eq!(drain_kinds(&mut mouse), vec![MouseEventKind::WheelUp]);
        assert_eq!(mouse.wheel_carry(), 0);
    }

    #[test]
    fn mixed_direction_sequence_never_emits_spurious_ticks() {
        let mut mouse = Mouse::new();
        for delta in [100, -90, 100, -90] {
            mouse.on_wheel_delta(0, 0, delta);
        }

        assert!(mouse.is_empty());
        assert_eq!(mouse.wheel_carry(), 20);
    }

    #[test]
    fn large_delta_emits_several_ticks() {
        let mut mouse = Mouse::new();
        mouse.on_wheel_delta(3, 4, 360);

        assert_eq!(mouse.len(), 3);
        assert_eq!(mouse.wheel_carry(), 0);
        assert_eq!(mouse.poll_event().position(), (3, 4));
    }

    #[test]
    fn queued_event_keeps_button_state_of_its_time() {
        let mut mouse = Mouse::new();
        mouse.on_left_press(10, 10);
        mouse.on_move(12, 14);
        mouse.on_left_release(12, 14);

        assert_eq!(mouse.poll_event().kind(), MouseEventKind::LeftPress);
        let moved = mouse.poll_event();
        assert_eq!(moved.kind(), MouseEventKind::Move);
        assert!(moved.left_pressed());
        assert!(!mouse.left_pressed());
        assert_eq!(moved.position(), (12, 14));
    }

    #[test]
    fn enter_and_leave_track_residency() {
        let mut mouse = Mouse::new();
        assert!(!mouse.is_in_window());

        mouse.on_mouse_enter();
        assert!(mouse.is_in_window());
        mouse.on_mouse_leave();
        assert!(!mouse.is_in_window());

        assert_eq!(
            drain_kinds(&mut mouse),
            vec![MouseEventKind::Enter, MouseEventKind::Leave]
        );
    }

    #[test]
    fn queue_keeps_latest_sixteen_moves() {
        let mut mouse = Mouse::new();
        for x in 0..40 {
            mouse.on_move(x, 0);
        }

        assert_eq!(mouse.len(), 16);
        assert_eq!(mouse.poll_event().position_x(), 24);
        assert_eq!(mouse.position_x(), 39);
    }

    #[test]
    fn flush_twice_leaves_empty_queue() {
        let mut mouse = Mouse::new();
        mouse.on_right_press(1, 1);
        mouse.flush();
        mouse.flush();

        assert!(mouse.is_empty());
        assert!(!mouse.poll_event().is_valid());
        assert!(mouse.right_pressed());
    }
}
