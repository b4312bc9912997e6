use super::*;

#[test]
fn tags_match_the_serde_representation() {
    for kind in IconKind::ALL {
        let serialized = serde_json::to_value(kind).expect("serialize");
        assert_eq!(serialized, serde_json::Value::String(kind.tag().to_owned()));
    }
}

#[test]
fn tags_round_trip_through_serde() {
    for kind in IconKind::ALL {
        let json = format!("\"{}\"", kind.tag());
        let back: IconKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, kind);
    }
}

#[test]
fn unknown_tags_are_rejected() {
    assert!(serde_json::from_str::<IconKind>("\"spinning-logo\"").is_err());
}

#[test]
fn tags_are_unique() {
    for (i, a) in IconKind::ALL.iter().enumerate() {
        for b in &IconKind::ALL[i + 1..] {
            assert_ne!(a.tag(), b.tag());
        }
    }
}

#[test]
fn from_tag_inverts_tag() {
    for kind in IconKind::ALL {
        assert_eq!(IconKind::from_tag(kind.tag()), Some(kind));
    }
    assert!(IconKind::from_tag("spinning-logo").is_none());
}

#[test]
fn every_icon_has_path_data() {
    for kind in IconKind::ALL {
        assert!(!kind.path().is_empty());
    }
}
