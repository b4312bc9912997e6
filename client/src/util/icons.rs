//! Closed icon registry resolved to inline SVG at render time.
//!
//! DESIGN
//! ======
//! State and storage only ever hold an [`IconKind`] tag; the renderable
//! SVG exists solely in the view. Persisting a renderable value would make
//! the payload non-serializable, so the tag enum is the only icon shape
//! allowed into state.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use serde::{Deserialize, Serialize};

/// Icon vocabulary available to sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Award,
    Briefcase,
    Calendar,
    Camera,
    Check,
    Close,
    Code,
    Document,
    Download,
    Edit,
    ExternalLink,
    Eye,
    GraduationCap,
    Image,
    Mail,
    MapPin,
    Menu,
    Phone,
    Send,
    Star,
    Target,
    Trash,
    Trophy,
    Upload,
    Zap,
}

impl IconKind {
    /// Every icon, for the registry tests.
    pub const ALL: [Self; 25] = [
        Self::Award,
        Self::Briefcase,
        Self::Calendar,
        Self::Camera,
        Self::Check,
        Self::Close,
        Self::Code,
        Self::Document,
        Self::Download,
        Self::Edit,
        Self::ExternalLink,
        Self::Eye,
        Self::GraduationCap,
        Self::Image,
        Self::Mail,
        Self::MapPin,
        Self::Menu,
        Self::Phone,
        Self::Send,
        Self::Star,
        Self::Target,
        Self::Trash,
        Self::Trophy,
        Self::Upload,
        Self::Zap,
    ];

    /// Stable tag, identical to the serde representation; doubles as a CSS
    /// hook on the rendered element.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Briefcase => "briefcase",
            Self::Calendar => "calendar",
            Self::Camera => "camera",
            Self::Check => "check",
            Self::Close => "close",
            Self::Code => "code",
            Self::Document => "document",
            Self::Download => "download",
            Self::Edit => "edit",
            Self::ExternalLink => "external-link",
            Self::Eye => "eye",
            Self::GraduationCap => "graduation-cap",
            Self::Image => "image",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Menu => "menu",
            Self::Phone => "phone",
            Self::Send => "send",
            Self::Star => "star",
            Self::Target => "target",
            Self::Trash => "trash",
            Self::Trophy => "trophy",
            Self::Upload => "upload",
            Self::Zap => "zap",
        }
    }

    /// Parse a stable tag back into its icon, for form controls.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// SVG path data for a 24x24 stroked outline.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Award => {
                "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM8.2 13.9 7 23l5-3 5 3-1.2-9.1"
            }
            Self::Briefcase => {
                "M4 7h16a1 1 0 0 1 1 1v12H3V8a1 1 0 0 1 1-1zM8 7V5a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"
            }
            Self::Calendar => {
                "M5 4h14a2 2 0 0 1 2 2v14H3V6a2 2 0 0 1 2-2zM16 2v4M8 2v4M3 10h18"
            }
            Self::Camera => {
                "M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h3l2-3h8l2 3h3a2 2 0 0 1 2 2zM12 17a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"
            }
            Self::Check => "M22 11.1V12a10 10 0 1 1-5.9-9.1M22 4 12 14l-3-3",
            Self::Close => "M18 6 6 18M6 6l12 12",
            Self::Code => "m16 18 6-6-6-6M8 6l-6 6 6 6",
            Self::Document => {
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 17H8"
            }
            Self::Download => {
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3"
            }
            Self::Edit => {
                "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7M18.5 2.5a2.1 2.1 0 0 1 3 3L12 15l-4 1 1-4z"
            }
            Self::ExternalLink => {
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14 21 3"
            }
            Self::Eye => {
                "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8zM12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
            }
            Self::GraduationCap => "M22 10 12 5 2 10l10 5 10-5zM6 12v5c3 3 9 3 12 0v-5",
            Self::Image => {
                "M19 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V5a2 2 0 0 0-2-2zM8.5 10a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3zM21 15l-5-5L5 21"
            }
            Self::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6"
            }
            Self::MapPin => {
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
            }
            Self::Menu => "M3 12h18M3 6h18M3 18h18",
            Self::Phone => {
                "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3 19.5 19.5 0 0 1-6-6 19.8 19.8 0 0 1-3-8.7A2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7 12.8 12.8 0 0 0 .7 2.8 2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4 12.8 12.8 0 0 0 2.8.7 2 2 0 0 1 1.8 2z"
            }
            Self::Send => "M22 2 11 13M22 2l-7 20-4-9-9-4z",
            Self::Star => {
                "m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1z"
            }
            Self::Target => {
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12zM12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z"
            }
            Self::Trash => {
                "M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M10 11v6M14 11v6"
            }
            Self::Trophy => {
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6M18 9h1.5a2.5 2.5 0 0 0 0-5H18M4 22h16M12 15a6 6 0 0 0 6-6V2H6v7a6 6 0 0 0 6 6zM12 15v3M8 22v-2a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"
            }
            Self::Upload => {
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M17 8l-5-5-5 5M12 3v12"
            }
            Self::Zap => "M13 2 3 14h9l-1 8 10-12h-9z",
        }
    }
}
