//! Browser localStorage adapter for per-section persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every editable section persists its own sub-state under one fixed key
//! from [`keys`]. This is the second persistence path next to the address
//! bar: on load the URL wins, and local saves rewrite the URL afterward
//! through the profile store. Stored payloads carry no version field, so a
//! shape change invalidates the stored value (it parses to `None` and the
//! section falls back to defaults).

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Fixed storage keys, one per editable concern.
///
/// Keeping every key in this one registry is what rules out silent
/// collisions between sections.
pub mod keys {
    /// Hero profile fields (name, bio, image).
    pub const PROFILE: &str = "portfolio_profile";
    /// Education fields of the personal-details section.
    pub const EDUCATION: &str = "portfolio_education";
    /// Skill list.
    pub const SKILLS: &str = "portfolio_skills";
    /// Work-experience entries.
    pub const EXPERIENCE: &str = "portfolio_experience";
    /// Project registry with uploaded-file metadata.
    pub const PROJECTS: &str = "portfolio_projects";
    /// Certificate records.
    pub const CERTIFICATES: &str = "portfolio_certificates";
    /// Achievement entries.
    pub const ACHIEVEMENTS: &str = "portfolio_achievements";
    /// Uploaded resume document.
    pub const RESUME: &str = "portfolio_resume";

    /// Every key in the registry, for the collision check.
    pub const ALL: [&str; 8] = [
        PROFILE,
        EDUCATION,
        SKILLS,
        EXPERIENCE,
        PROJECTS,
        CERTIFICATES,
        ACHIEVEMENTS,
        RESUME,
    ];
}

/// Load a JSON value from `localStorage` for `key`.
///
/// Absent keys, disabled storage, and parse failures all yield `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
///
/// Failures (quota exceeded, disabled storage, serialization) are swallowed
/// and logged; the previously persisted value stays in place and nothing
/// propagates to the page.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("storage write for {key} failed; keeping previous value");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
