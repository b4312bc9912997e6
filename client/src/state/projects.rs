//! Projects section state: a local registry of projects and uploaded files.
//!
//! DESIGN
//! ======
//! Uploaded files are kept as metadata plus an ephemeral object URL. The
//! metadata persists to localStorage; the object URL dies with the page, so
//! it is deliberately excluded from serialization and download links only
//! reappear after a re-upload.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::{Deserialize, Serialize};

/// Metadata for one uploaded project file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    /// Stable identity key (UUID v4 string).
    pub id: String,
    /// Original file name.
    pub name: String,
    /// MIME type reported by the browser.
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
    /// Ephemeral object URL backing the download link. Not persisted.
    #[serde(skip)]
    pub url: Option<String>,
}

/// One project card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identity key (UUID v4 string).
    pub id: String,
    pub title: String,
    pub description: String,
    /// Technology chips in display order.
    pub technologies: Vec<String>,
    /// Uploaded files attached to this project.
    #[serde(default)]
    pub files: Vec<ProjectFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

/// Placeholder projects shown before the owner edits the section.
#[must_use]
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-shop".to_owned(),
            title: "E-commerce Platform".to_owned(),
            description: "A full-stack e-commerce solution with a typed API and a \
                          reactive storefront."
                .to_owned(),
            technologies: vec![
                "React".to_owned(),
                "Node.js".to_owned(),
                "MongoDB".to_owned(),
                "Stripe".to_owned(),
            ],
            files: Vec::new(),
            demo_url: Some("https://demo.example.com".to_owned()),
            github_url: Some("https://github.com/username/project".to_owned()),
        },
        Project {
            id: "project-tasks".to_owned(),
            title: "Task Management App".to_owned(),
            description: "A collaborative task management application with real-time \
                          updates."
                .to_owned(),
            technologies: vec![
                "React".to_owned(),
                "Socket.io".to_owned(),
                "Express".to_owned(),
                "PostgreSQL".to_owned(),
            ],
            files: Vec::new(),
            demo_url: Some("https://tasks.example.com".to_owned()),
            github_url: None,
        },
    ]
}

/// Attach an uploaded file to the matching project.
pub fn attach_file(projects: &mut [Project], project_id: &str, file: ProjectFile) {
    if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
        project.files.push(file);
    }
}

/// Remove a file from the matching project.
///
/// Returns the file's object URL (if it had one) so the caller can revoke
/// the underlying blob reference.
pub fn remove_file(projects: &mut [Project], project_id: &str, file_id: &str) -> Option<String> {
    let project = projects.iter_mut().find(|p| p.id == project_id)?;
    let index = project.files.iter().position(|f| f.id == file_id)?;
    project.files.remove(index).url
}

/// Human-readable file size, e.g. `"1.50 KB"`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let exp = ((bytes as f64).log2() / 10.0) as usize;
    let exp = exp.min(UNITS.len() - 1);
    if exp == 0 {
        return format!("{bytes} Bytes");
    }
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    format!("{value:.2} {}", UNITS[exp])
}
