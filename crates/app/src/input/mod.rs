//! Input handling - turns per-frame window samples into engine events
//!
//! The window only reports the current mouse state each frame. The tracker
//! diffs consecutive samples into pointer down / drag / up events.

pub mod keyboard;

use glam::Vec2;
use painting::PointerEvent;

/// Mouse state sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseSample {
    /// Cursor position in buffer coordinates, None when outside the window
    pub position: Option<Vec2>,
    /// Whether the left button is held
    pub left_down: bool,
}

/// Tracks the left button across frames
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Button was held on the previous sample
    pressed: bool,
    /// Last position reported to the engine
    last_position: Option<Vec2>,
    /// The current press was claimed by the UI and must not reach the engine
    consumed: bool,
}

impl PointerTracker {
    /// Compare `sample` with the previous one and report what happened
    ///
    /// - press: `Down` at the cursor
    /// - held and moved: `Drag` to the new position
    /// - release: `Up` at the last known position
    ///
    /// Events of a consumed press are swallowed until the button is released.
    pub fn update(&mut self, sample: MouseSample) -> Option<PointerEvent> {
        let event = match (self.pressed, sample.left_down, sample.position) {
            (false, true, Some(position)) => {
                self.pressed = true;
                self.consumed = false;
                self.last_position = Some(position);
                Some(PointerEvent::down(position.x, position.y))
            }
            (true, true, Some(position)) if self.last_position != Some(position) => {
                self.last_position = Some(position);
                Some(PointerEvent::drag(position.x, position.y))
            }
            (true, false, _) => {
                self.pressed = false;
                let position = sample.position.or(self.last_position).unwrap_or(Vec2::ZERO);
                Some(PointerEvent::up(position.x, position.y))
            }
            _ => None,
        };

        if self.consumed {
            if !self.pressed {
                self.consumed = false;
            }
            return None;
        }
        event
    }

    /// Claim the current press for the UI
    pub fn consume(&mut self) {
        if self.pressed {
            self.consumed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use painting::PointerEventKind;

    fn sample(x: f32, y: f32, left_down: bool) -> MouseSample {
        MouseSample {
            position: Some(Vec2::new(x, y)),
            left_down,
        }
    }

    fn kind(event: Option<PointerEvent>) -> Option<PointerEventKind> {
        event.map(|e| e.kind)
    }

    #[test]
    fn test_press_drag_release() {
        let mut tracker = PointerTracker::default();

        assert_eq!(tracker.update(sample(1.0, 1.0, false)), None);
        assert_eq!(tracker.update(sample(2.0, 2.0, true)), Some(PointerEvent::down(2.0, 2.0)));
        assert_eq!(tracker.update(sample(5.0, 2.0, true)), Some(PointerEvent::drag(5.0, 2.0)));
        assert_eq!(tracker.update(sample(6.0, 3.0, false)), Some(PointerEvent::up(6.0, 3.0)));
        assert_eq!(tracker.update(sample(6.0, 3.0, false)), None);
    }

    #[test]
    fn test_no_drag_without_movement() {
        let mut tracker = PointerTracker::default();
        tracker.update(sample(2.0, 2.0, true));

        assert_eq!(tracker.update(sample(2.0, 2.0, true)), None);
    }

    #[test]
    fn test_release_outside_window_uses_last_position() {
        let mut tracker = PointerTracker::default();
        tracker.update(sample(4.0, 4.0, true));

        let event = tracker.update(MouseSample {
            position: None,
            left_down: false,
        });
        assert_eq!(event, Some(PointerEvent::up(4.0, 4.0)));
    }

    #[test]
    fn test_held_outside_window_is_silent() {
        let mut tracker = PointerTracker::default();
        tracker.update(sample(4.0, 4.0, true));

        let event = tracker.update(MouseSample {
            position: None,
            left_down: true,
        });
        assert_eq!(event, None);
        // Coming back in continues the drag
        assert_eq!(kind(tracker.update(sample(8.0, 4.0, true))), Some(PointerEventKind::Drag));
    }

    #[test]
    fn test_consumed_press_is_swallowed() {
        let mut tracker = PointerTracker::default();
        assert!(tracker.update(sample(2.0, 2.0, true)).is_some());
        tracker.consume();

        assert_eq!(tracker.update(sample(9.0, 9.0, true)), None);
        assert_eq!(tracker.update(sample(9.0, 9.0, false)), None);

        // The next press is delivered again
        assert_eq!(kind(tracker.update(sample(3.0, 3.0, true))), Some(PointerEventKind::Down));
    }
}
