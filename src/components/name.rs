use bevy_ecs::prelude::Component;

/// Human-readable identity of an entity, used as the `owner` field of
/// collision event payloads. Entities without one are identified by their
/// entity id when events are built.
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntityName(pub String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
