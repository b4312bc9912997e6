use super::*;

#[test]
fn default_achievements_cover_four_entries() {
    let entries = default_achievements();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].icon, IconKind::Trophy);
}

#[test]
fn achievements_persist_icons_as_tags() {
    let json = serde_json::to_string(&default_achievements()).expect("serialize");
    assert!(json.contains("\"trophy\""));

    let back: Vec<Achievement> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, default_achievements());
}
