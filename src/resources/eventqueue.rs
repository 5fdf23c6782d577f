//! FIFO queue for collision notifications.
//!
//! The queue is an ordinary ECS resource passed to whoever needs it, never a
//! global: two independent worlds in one process get two independent queues,
//! which is what makes the collision pass testable in isolation.
//!
//! The collision system pushes; delivery timing is the consumer's concern.
//! Listeners typically [`drain`](EventQueue::drain) after the frame's physics
//! pass and react then, which keeps reactions from mutating component storage
//! while detection is still iterating it.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::events::collision::CollisionEvent;

/// One named entry in the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedEvent {
    /// Wire name, one of the constants in [`crate::events::collision`].
    pub name: &'static str,
    /// Owned payload; valid regardless of what happens to the entities
    /// after detection.
    pub payload: CollisionEvent,
}

/// FIFO event queue resource.
///
/// Push order within one dispatch pass is preserved; identical worlds
/// produce identical queues.
#[derive(Resource, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<QueuedEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event; ownership of the payload transfers to the queue.
    pub fn push(&mut self, name: &'static str, payload: CollisionEvent) {
        self.events.push_back(QueuedEvent { name, payload });
    }

    /// Pop the oldest event, if any.
    pub fn pop(&mut self) -> Option<QueuedEvent> {
        self.events.pop_front()
    }

    /// Remove and return every queued event in push order.
    pub fn drain(&mut self) -> Vec<QueuedEvent> {
        self.events.drain(..).collect()
    }

    /// Iterate queued events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &QueuedEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
