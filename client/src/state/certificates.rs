//! Certificate grouping and identity helpers.
//!
//! Certificates live inside the shared profile record; this module only
//! holds the pure helpers the section needs to display and edit them.

#[cfg(test)]
#[path = "certificates_test.rs"]
mod certificates_test;

use profile::Certificate;

/// Group certificates by category.
///
/// Preserves first-seen category order and in-category insertion order, so
/// the rendered folders are stable across edits.
#[must_use]
pub fn group_by_category(certificates: &[Certificate]) -> Vec<(String, Vec<Certificate>)> {
    let mut groups: Vec<(String, Vec<Certificate>)> = Vec::new();
    for cert in certificates {
        match groups.iter_mut().find(|(category, _)| *category == cert.category) {
            Some((_, items)) => items.push(cert.clone()),
            None => groups.push((cert.category.clone(), vec![cert.clone()])),
        }
    }
    groups
}

/// Fresh identity key for a new certificate.
///
/// Ids are assigned once at creation and never reused after deletion.
#[must_use]
pub fn new_certificate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Remove the certificate with `id`.
///
/// Returns whether anything was removed; removing an unknown id is a no-op.
pub fn remove_certificate(certificates: &mut Vec<Certificate>, id: &str) -> bool {
    let before = certificates.len();
    certificates.retain(|cert| cert.id != id);
    certificates.len() != before
}
