//! Pointer gestures the simulation consumes.
//!
//! The host (canvas, window, test harness) pushes events in; the session
//! drains them once per frame. Coordinates are table/world units.

/// A single pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press began: starts an aim drag.
    Down { x: f32, y: f32 },
    /// Pointer moved while pressed: updates the aim.
    Move { x: f32, y: f32 },
    /// Press ended: releases the shot.
    Up { x: f32, y: f32 },
    /// Pointer left the surface. Treated as a release so the controller
    /// can never be stuck mid-aim.
    Leave,
}

/// A queue of pointer events, written by the host and drained each frame.
pub struct InputQueue {
    events: Vec<PointerEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new pointer event.
    pub fn push(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order, clearing the queue.
    pub fn drain(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &PointerEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(PointerEvent::Down { x: 10.0, y: 20.0 });
        q.push(PointerEvent::Move { x: 15.0, y: 25.0 });
        q.push(PointerEvent::Up { x: 15.0, y: 25.0 });
        assert_eq!(q.len(), 3);

        let events = q.drain();
        assert_eq!(events[0], PointerEvent::Down { x: 10.0, y: 20.0 });
        assert_eq!(events[2], PointerEvent::Up { x: 15.0, y: 25.0 });
        assert!(q.is_empty());
    }

    #[test]
    fn leave_carries_no_position() {
        let mut q = InputQueue::new();
        q.push(PointerEvent::Leave);
        assert_eq!(q.drain(), vec![PointerEvent::Leave]);
    }
}
