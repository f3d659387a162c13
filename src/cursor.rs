use crate::clock::Deadline;
use crate::geometry::{frame_factor, lerp};

pub const EXPAND_RESET_MS: f64 = 500.0;
pub const DEFAULT_SMOOTHING: f64 = 0.2;
pub const CURSOR_RADIUS: f64 = 10.0;
pub const INTERACTIVE_MARKER: &str = "cursor";
pub const INTERACTIVE_SELECTOR: &str = "[data-class='cursor']";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFollower {
    target: (f64, f64),
    position: (f64, f64),
    smoothing: f64,
    expanded: bool,
    expand_reset: Deadline,
    pointer_target: bool,
    torn_down: bool,
}

impl CursorFollower {
    pub fn new(smoothing: f64) -> Self {
        let smoothing = if smoothing.is_finite() && smoothing > 0.0 {
            smoothing.min(1.0)
        } else {
            DEFAULT_SMOOTHING
        };

        Self {
            target: (0.0, 0.0),
            position: (0.0, 0.0),
            smoothing,
            expanded: false,
            expand_reset: Deadline::default(),
            pointer_target: false,
            torn_down: false,
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.torn_down {
            return;
        }
        self.target = (x, y);
    }

    pub fn on_pointer_down(&mut self, now_ms: f64) {
        if self.torn_down {
            return;
        }
        self.expanded = true;
        self.expand_reset.arm(now_ms, EXPAND_RESET_MS);
    }

    pub fn on_pointer_up(&mut self) {
        self.expanded = false;
        self.expand_reset.clear();
    }

    pub fn on_hover_target(&mut self, marker: Option<&str>) {
        self.pointer_target = is_interactive_marker(marker);
    }

    pub fn on_frame(&mut self, now_ms: f64, delta_seconds: f64) {
        if self.expand_reset.expire(now_ms) {
            self.expanded = false;
        }

        let factor = frame_factor(self.smoothing, delta_seconds);
        self.position = (
            lerp(self.position.0, self.target.0, factor),
            lerp(self.position.1, self.target.1, factor),
        );
    }

    /// Clears the pending reset and stops accepting input. Safe to call more
    /// than once.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.expanded = false;
        self.expand_reset.clear();
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn indicator_origin(&self) -> (f64, f64) {
        (self.position.0 - CURSOR_RADIUS, self.position.1 - CURSOR_RADIUS)
    }

    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_pointer_target(&self) -> bool {
        self.pointer_target
    }

    pub fn has_pending_reset(&self) -> bool {
        self.expand_reset.is_armed()
    }

    pub fn indicator_class(&self) -> String {
        let mut class = String::from("custom-cursor");
        if self.expanded {
            class.push_str(" expand");
        }
        if self.pointer_target {
            class.push_str(" pointer");
        }
        class
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING)
    }
}

pub fn is_interactive_marker(marker: Option<&str>) -> bool {
    marker.is_some_and(|value| value.trim() == INTERACTIVE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::REFERENCE_FPS;

    const FRAME: f64 = 1.0 / REFERENCE_FPS;

    fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn move_does_not_jump_the_indicator() {
        let mut cursor = CursorFollower::new(0.2);
        cursor.on_pointer_move(300.0, 400.0);
        assert_eq!(cursor.position(), (0.0, 0.0));
        assert_eq!(cursor.target(), (300.0, 400.0));
    }

    #[test]
    fn error_shrinks_geometrically_per_frame() {
        let smoothing = 0.25;
        let mut cursor = CursorFollower::new(smoothing);
        cursor.on_pointer_move(100.0, -50.0);

        let mut previous_error = distance(cursor.position(), cursor.target());
        for frame in 0..20 {
            cursor.on_frame(frame as f64 * 16.0, FRAME);
            let error = distance(cursor.position(), cursor.target());
            let expected = previous_error * (1.0 - smoothing);
            assert!((error - expected).abs() < 1e-9, "frame {frame}: {error} vs {expected}");
            previous_error = error;
        }
    }

    #[test]
    fn converges_within_tolerance() {
        let mut cursor = CursorFollower::new(0.1);
        cursor.on_pointer_move(640.0, 360.0);
        for frame in 0..300 {
            cursor.on_frame(frame as f64 * 16.0, FRAME);
        }
        assert!(distance(cursor.position(), (640.0, 360.0)) < 0.01);
    }

    #[test]
    fn full_smoothing_snaps() {
        let mut cursor = CursorFollower::new(1.0);
        cursor.on_pointer_move(12.0, 34.0);
        cursor.on_frame(0.0, FRAME);
        assert_eq!(cursor.position(), (12.0, 34.0));
    }

    #[test]
    fn invalid_smoothing_falls_back_to_default() {
        let mut cursor = CursorFollower::new(0.0);
        cursor.on_pointer_move(10.0, 0.0);
        cursor.on_frame(0.0, FRAME);
        assert!((cursor.position().0 - 10.0 * DEFAULT_SMOOTHING).abs() < 1e-9);
    }

    #[test]
    fn press_without_release_auto_resets_after_timeout() {
        let mut cursor = CursorFollower::default();
        cursor.on_pointer_down(1_000.0);

        cursor.on_frame(1_000.0 + EXPAND_RESET_MS - 1.0, FRAME);
        assert!(cursor.is_expanded());

        cursor.on_frame(1_000.0 + EXPAND_RESET_MS, FRAME);
        assert!(!cursor.is_expanded());
        assert!(!cursor.has_pending_reset());
    }

    #[test]
    fn release_clears_flag_and_pending_reset() {
        let mut cursor = CursorFollower::default();
        cursor.on_pointer_down(0.0);
        cursor.on_pointer_up();
        assert!(!cursor.is_expanded());
        assert!(!cursor.has_pending_reset());
    }

    #[test]
    fn second_press_extends_the_window() {
        let mut cursor = CursorFollower::default();
        cursor.on_pointer_down(0.0);
        cursor.on_pointer_down(400.0);
        cursor.on_frame(600.0, FRAME);
        assert!(cursor.is_expanded());
        cursor.on_frame(900.0, FRAME);
        assert!(!cursor.is_expanded());
    }

    #[test]
    fn hover_marker_switches_pointer_style() {
        let mut cursor = CursorFollower::default();
        cursor.on_hover_target(Some("cursor"));
        assert!(cursor.is_pointer_target());
        cursor.on_hover_target(Some("card"));
        assert!(!cursor.is_pointer_target());
        cursor.on_hover_target(None);
        assert!(!cursor.is_pointer_target());
    }

    #[test]
    fn teardown_is_idempotent_and_drops_pending_reset() {
        let mut cursor = CursorFollower::default();
        cursor.on_pointer_down(0.0);
        cursor.teardown();
        cursor.teardown();
        assert!(!cursor.has_pending_reset());

        cursor.on_pointer_down(10.0);
        cursor.on_pointer_move(50.0, 50.0);
        assert!(!cursor.is_expanded());
        assert_eq!(cursor.target(), (0.0, 0.0));
    }

    #[test]
    fn indicator_is_centered_on_position() {
        let mut cursor = CursorFollower::new(1.0);
        cursor.on_pointer_move(100.0, 100.0);
        cursor.on_frame(0.0, FRAME);
        assert_eq!(cursor.indicator_origin(), (90.0, 90.0));
    }

    #[test]
    fn indicator_class_tracks_state() {
        let mut cursor = CursorFollower::default();
        assert_eq!(cursor.indicator_class(), "custom-cursor");
        cursor.on_pointer_down(0.0);
        cursor.on_hover_target(Some("cursor"));
        assert_eq!(cursor.indicator_class(), "custom-cursor expand pointer");
    }
}
