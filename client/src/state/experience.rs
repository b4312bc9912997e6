//! Work-experience section state.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use serde::{Deserialize, Serialize};

/// One work-experience entry, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// Placeholder entries shown before the owner edits the section.
#[must_use]
pub fn default_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior Frontend Developer".to_owned(),
            company: "Tech Solutions Inc.".to_owned(),
            period: "2022 - Present".to_owned(),
            description: "Led development of responsive web applications. Collaborated \
                          with cross-functional teams to deliver high-quality software \
                          solutions."
                .to_owned(),
        },
        ExperienceEntry {
            title: "Full Stack Developer".to_owned(),
            company: "Digital Agency".to_owned(),
            period: "2021 - 2022".to_owned(),
            description: "Developed and maintained web applications. Implemented RESTful \
                          APIs and optimized database queries for improved performance."
                .to_owned(),
        },
        ExperienceEntry {
            title: "Junior Developer".to_owned(),
            company: "StartUp Co.".to_owned(),
            period: "2020 - 2021".to_owned(),
            description: "Built responsive websites and learned modern web development \
                          practices. Participated in code reviews and agile development \
                          processes."
                .to_owned(),
        },
    ]
}
