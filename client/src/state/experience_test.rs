use super::*;

#[test]
fn default_experience_has_placeholder_entries() {
    let entries = default_experience();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, "Senior Frontend Developer");
}

#[test]
fn experience_entries_round_trip_through_json() {
    let entries = default_experience();
    let json = serde_json::to_string(&entries).expect("serialize");
    let back: Vec<ExperienceEntry> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, entries);
}
