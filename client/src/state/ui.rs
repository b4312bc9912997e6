//! Page chrome state: navigation targets and the mobile menu.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the profile and section
//! data so the navigation bar can evolve independently of content.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Navigable page sections in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Personal,
    Skills,
    Experience,
    Projects,
    Certificates,
    Achievements,
    Resume,
    Contact,
}

impl Section {
    /// All sections in the order the navigation bar lists them.
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::Personal,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Certificates,
        Self::Achievements,
        Self::Resume,
        Self::Contact,
    ];

    /// Anchor id of the section element, used for smooth scrolling.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Personal => "personal",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Certificates => "certificates",
            Self::Achievements => "achievements",
            Self::Resume => "resume",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Personal => "Personal Details",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Certificates => "Certificates",
            Self::Achievements => "Achievements",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
        }
    }
}

/// UI state for the navigation chrome.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Whether the mobile hamburger menu is expanded.
    pub menu_open: bool,
}
