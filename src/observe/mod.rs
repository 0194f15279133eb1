//! Observer registry: subscribe/notify for published game states.
//!
//! Observers are plain callbacks keyed by [`ObserverId`]. The engine
//! notifies them after each completed cascade, never mid-cascade. Delivery
//! is in ascending id order so repeated runs notify identically.

use rustc_hash::FxHashMap;

use crate::state::GameState;

/// Unique identifier for a registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

type Callback = Box<dyn FnMut(&GameState)>;

/// Registry of state observers.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u32,
    observers: FxHashMap<ObserverId, Callback>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameState) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, Box::new(observer));
        id
    }

    /// Register an observer and immediately push the cached current state.
    pub fn subscribe_with_current(
        &mut self,
        observer: impl FnMut(&GameState) + 'static,
        current: &GameState,
    ) -> ObserverId {
        let id = self.subscribe(observer);
        if let Some(callback) = self.observers.get_mut(&id) {
            callback(current);
        }
        id
    }

    /// Remove an observer. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Push a state to every observer, in ascending id order.
    pub fn notify(&mut self, state: &GameState) {
        let mut ids: Vec<ObserverId> = self.observers.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            if let Some(callback) = self.observers.get_mut(&id) {
                callback(state);
            }
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
