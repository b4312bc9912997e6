use super::*;

fn sample_file(id: &str) -> ProjectFile {
    ProjectFile {
        id: id.to_owned(),
        name: format!("{id}.zip"),
        mime: "application/zip".to_owned(),
        size: 1536,
        url: Some(format!("blob:{id}")),
    }
}

// =============================================================
// File attach/remove
// =============================================================

#[test]
fn attach_file_appends_to_the_matching_project() {
    let mut projects = default_projects();
    attach_file(&mut projects, "project-shop", sample_file("f1"));

    assert_eq!(projects[0].files.len(), 1);
    assert!(projects[1].files.is_empty());
}

#[test]
fn attach_file_with_unknown_project_is_a_no_op() {
    let mut projects = default_projects();
    attach_file(&mut projects, "missing", sample_file("f1"));
    assert!(projects.iter().all(|p| p.files.is_empty()));
}

#[test]
fn remove_file_returns_the_object_url_for_revocation() {
    let mut projects = default_projects();
    attach_file(&mut projects, "project-shop", sample_file("f1"));

    let url = remove_file(&mut projects, "project-shop", "f1");

    assert_eq!(url.as_deref(), Some("blob:f1"));
    assert!(projects[0].files.is_empty());
}

#[test]
fn remove_file_with_unknown_ids_returns_none() {
    let mut projects = default_projects();
    attach_file(&mut projects, "project-shop", sample_file("f1"));

    assert!(remove_file(&mut projects, "project-shop", "f2").is_none());
    assert!(remove_file(&mut projects, "missing", "f1").is_none());
    assert_eq!(projects[0].files.len(), 1);
}

// =============================================================
// Persistence shape
// =============================================================

#[test]
fn object_urls_are_not_persisted() {
    let json = serde_json::to_string(&sample_file("f1")).expect("serialize");
    assert!(!json.contains("blob:"));

    let back: ProjectFile = serde_json::from_str(&json).expect("deserialize");
    assert!(back.url.is_none());
    assert_eq!(back.size, 1536);
}

#[test]
fn projects_round_trip_through_json_without_urls() {
    let mut projects = default_projects();
    attach_file(&mut projects, "project-tasks", sample_file("f1"));

    let json = serde_json::to_string(&projects).expect("serialize");
    let back: Vec<Project> = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back[1].files.len(), 1);
    assert!(back[1].files[0].url.is_none());
    assert_eq!(back[1].files[0].name, "f1.zip");
}

// =============================================================
// File size formatting
// =============================================================

#[test]
fn format_file_size_covers_unit_boundaries() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1.00 KB");
    assert_eq!(format_file_size(1536), "1.50 KB");
    assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
    assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5.00 GB");
}

#[test]
fn format_file_size_caps_at_the_largest_unit() {
    assert_eq!(format_file_size(1024u64.pow(4)), "1024.00 GB");
}
