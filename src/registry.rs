//! Per-reply-target processing state.
//!
//! Processing state lives in an explicit record owned by the embedder,
//! keyed by the target's node identity, instead of being encoded in the
//! document tree through ad hoc attribute markers.

use std::collections::HashMap;
use std::hash::Hash;

/// Processing state of one reply target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetState {
    /// No click in flight; a click may begin processing.
    #[default]
    Idle,

    /// A click is being processed; further clicks are ignored until
    /// [`TargetRegistry::finish`] re-arms the target.
    Processing,
}

/// Tracks the set of active reply targets and their processing state.
///
/// Keys are supplied by the embedder; `dom_query::NodeId` works for
/// snapshot-backed targets, any `Eq + Hash + Copy` token works for live
/// ones. Unknown keys read as [`TargetState::Idle`].
#[derive(Debug, Default)]
pub struct TargetRegistry<K: Eq + Hash + Copy> {
    states: HashMap<K, TargetState>,
}

impl<K: Eq + Hash + Copy> TargetRegistry<K> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Mark a target as processing.
    ///
    /// Returns `false` when the target is already processing, in which
    /// case the caller must ignore the click (one-shot idempotency).
    pub fn begin(&mut self, key: K) -> bool {
        match self.states.get(&key) {
            Some(TargetState::Processing) => false,
            _ => {
                self.states.insert(key, TargetState::Processing);
                true
            }
        }
    }

    /// Re-arm a target so a later click can retry.
    ///
    /// Called on every exit path of click handling, success or failure.
    pub fn finish(&mut self, key: K) {
        self.states.insert(key, TargetState::Idle);
    }

    /// Current state of a target; unknown targets are idle.
    #[must_use]
    pub fn state(&self, key: K) -> TargetState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    /// Number of targets the registry has seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the registry has seen no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
