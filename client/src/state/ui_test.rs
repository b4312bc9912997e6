use super::*;

#[test]
fn sections_are_listed_in_display_order() {
    assert_eq!(Section::ALL.first(), Some(&Section::Home));
    assert_eq!(Section::ALL.last(), Some(&Section::Contact));
    assert_eq!(Section::ALL.len(), 9);
}

#[test]
fn section_anchors_are_unique() {
    for (i, a) in Section::ALL.iter().enumerate() {
        for b in &Section::ALL[i + 1..] {
            assert_ne!(a.anchor(), b.anchor());
        }
    }
}

#[test]
fn section_anchors_are_stable_fragment_ids() {
    for section in Section::ALL {
        let anchor = section.anchor();
        assert!(!anchor.is_empty());
        assert!(
            anchor
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'),
            "anchor {anchor} should be a plain fragment id"
        );
    }
}

#[test]
fn section_labels_are_non_empty() {
    for section in Section::ALL {
        assert!(!section.label().is_empty());
    }
}

#[test]
fn ui_state_default_has_menu_closed() {
    assert!(!UiState::default().menu_open);
}
