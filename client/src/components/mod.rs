//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per portfolio section. Components read the shared profile
//! through the [`crate::state::profile::ProfileStore`] context and mutate
//! it only through the store's merge-update entry point; section-local
//! state goes through the localStorage adapter instead.

pub mod achievements;
pub mod certificates;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero_section;
pub mod icon;
pub mod navigation;
pub mod personal_details;
pub mod projects;
pub mod resume;
pub mod skills;
