//! Achievements section state.
//!
//! The icon on each entry is stored as a closed [`IconKind`] tag and
//! resolved to a renderable element only at display time, which keeps the
//! persisted payload JSON-serializable.

#[cfg(test)]
#[path = "achievements_test.rs"]
mod achievements_test;

use serde::{Deserialize, Serialize};

use crate::util::icons::IconKind;

/// One achievement entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
    pub year: String,
}

/// Placeholder entries shown before the owner edits the section.
#[must_use]
pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            icon: IconKind::Trophy,
            title: "Best Developer Award".to_owned(),
            description: "Recognized as the top performing developer in 2023 for \
                          outstanding code quality and innovation."
                .to_owned(),
            year: "2023".to_owned(),
        },
        Achievement {
            icon: IconKind::Star,
            title: "Open Source Contributor".to_owned(),
            description: "Contributed to 15+ open source projects with over 1000 \
                          stars collectively."
                .to_owned(),
            year: "2022-2023".to_owned(),
        },
        Achievement {
            icon: IconKind::Target,
            title: "Project Lead Success".to_owned(),
            description: "Led a team of 5 developers to deliver a complex project 2 \
                          weeks ahead of schedule."
                .to_owned(),
            year: "2022".to_owned(),
        },
        Achievement {
            icon: IconKind::Zap,
            title: "Performance Optimization".to_owned(),
            description: "Improved application performance by 40% through code \
                          optimization and architectural improvements."
                .to_owned(),
            year: "2023".to_owned(),
        },
    ]
}
