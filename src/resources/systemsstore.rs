//! Registry of session hook systems.
//!
//! Session transitions run setup/teardown systems looked up here by
//! [`SessionHook`] and executed via their [`bevy_ecs::system::SystemId`], so
//! the transition observer does not need the hooks' own parameters.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Well-known points in a session's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionHook {
    /// Spawn the renderables of a new viewing session.
    EnterViewing,
    /// Despawn everything the session owned.
    ExitViewing,
}

/// Map of session hooks to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    map: FxHashMap<SessionHook, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the system to run for `hook`, replacing any previous one.
    pub fn insert(&mut self, hook: SessionHook, id: SystemId) {
        self.map.insert(hook, id);
    }

    /// Retrieve the system ID for `hook`, if registered.
    pub fn get(&self, hook: SessionHook) -> Option<SystemId> {
        self.map.get(&hook).copied()
    }
}
