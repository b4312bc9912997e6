//! Application state modules shared via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile store owns the canonical shared record; the remaining
//! modules hold section-local state so each section can evolve its own
//! shape independently of the shared profile.

pub mod achievements;
pub mod certificates;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod resume;
pub mod ui;
