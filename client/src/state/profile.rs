//! Profile store: single owner of the canonical profile record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections receive this handle via context and mutate the profile only
//! through [`ProfileStore::update`], which shallow-merges a typed partial
//! and re-derives the address bar state. On load the address wins over any
//! locally persisted copy; every later save rewrites the address, so the
//! two persistence paths converge after the first edit.

use leptos::prelude::*;

pub use profile::{Certificate, ProfileState, ProfileUpdate};

use crate::util::url_state;

/// Copyable handle around the canonical [`ProfileState`] signal.
///
/// Sections get reactive reads plus one merge-style update entry point,
/// never a mutable shared reference.
#[derive(Clone, Copy)]
pub struct ProfileStore {
    state: RwSignal<ProfileState>,
}

impl ProfileStore {
    /// Create a store seeded with the placeholder defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ProfileState::default()),
        }
    }

    /// Reactive read of the current profile.
    pub fn get(&self) -> ProfileState {
        self.state.get()
    }

    /// Non-reactive snapshot for edit drafts and event handlers.
    pub fn snapshot(&self) -> ProfileState {
        self.state.get_untracked()
    }

    /// Shallow-merge `update` into the profile, then rewrite the address.
    ///
    /// The address write replaces the current history entry, so repeated
    /// edits never grow the browser history. Always succeeds; a failed
    /// address write leaves the last-good URL in place.
    pub fn update(&self, update: ProfileUpdate) {
        self.state.update(|state| state.apply(update));
        url_state::write_to_address(&self.state.get_untracked());
    }

    /// Overwrite the whole profile without touching the address bar.
    ///
    /// Used when applying a locally persisted copy on a URL-less load.
    pub fn replace(&self, state: ProfileState) {
        self.state.set(state);
    }

    /// Seed the store from the current address, if it carries a profile.
    ///
    /// Returns `true` when the address held a valid encoding. Malformed
    /// parameters are treated as absent.
    pub fn seed_from_url(&self) -> bool {
        match url_state::read_from_address() {
            Some(state) => {
                self.state.set(state);
                true
            }
            None => false,
        }
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}
