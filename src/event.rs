//! Notifications emitted by the interaction state machine.
//!
//! The editor never talks to UI chrome directly; it reports through an
//! [`EventSink`] injected at construction time. Hosts typically use the
//! events to update menu enablement and the window title.

use crate::shape::ShapeId;

/// Side-effect notifications from the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A new shape was finalized and added to the collection.
    ShapeCreated(ShapeId),
    /// The selection changed; carries the selected IDs in insertion order.
    SelectionChanged(Vec<ShapeId>),
    /// One or more shapes were translated or had vertices moved.
    ShapeMoved,
    /// One or more rotation shapes were rotated.
    ShapeRotated,
    /// Drawing started (`true`) or ended (`false`).
    DrawingStateChanged(bool),
}

/// Receiver for editor notifications.
pub trait EventSink {
    fn notify(&mut self, event: EditorEvent);
}

/// A sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: EditorEvent) {}
}

/// A sink that records events for polling hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<EditorEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[EditorEvent] {
        &self.events
    }

    /// Drain and return all recorded events.
    pub fn take(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check whether an equal event was recorded.
    pub fn contains(&self, event: &EditorEvent) -> bool {
        self.events.contains(event)
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: EditorEvent) {
        self.events.push(event);
    }
}
