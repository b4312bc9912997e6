use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::*;

fn sample_profile() -> ProfileState {
    ProfileState {
        name: "Ada Lovelace".to_owned(),
        bio: "Engineer".to_owned(),
        profile_image: "/x.png".to_owned(),
        degree: String::new(),
        college: String::new(),
        batch: String::new(),
        school: String::new(),
        skills: vec!["C++".to_owned()],
        certificates: Vec::new(),
    }
}

fn sample_certificate(id: &str, category: &str) -> Certificate {
    Certificate {
        id: id.to_owned(),
        title: format!("Certificate {id}"),
        image: format!("/certificates/{id}.jpg"),
        category: category.to_owned(),
        issuer: None,
        date: None,
    }
}

// =============================================================
// Shallow merge
// =============================================================

#[test]
fn apply_overwrites_supplied_fields_and_preserves_the_rest() {
    let mut state = ProfileState {
        name: "A".to_owned(),
        bio: "B".to_owned(),
        ..ProfileState::default()
    };

    state.apply(ProfileUpdate {
        bio: Some("C".to_owned()),
        ..ProfileUpdate::default()
    });

    assert_eq!(state.name, "A");
    assert_eq!(state.bio, "C");
}

#[test]
fn apply_with_empty_update_is_a_no_op() {
    let mut state = sample_profile();
    state.apply(ProfileUpdate::default());
    assert_eq!(state, sample_profile());
}

#[test]
fn apply_replaces_sequences_wholesale() {
    let mut state = ProfileState {
        skills: vec!["C++".to_owned(), "Rust".to_owned()],
        certificates: vec![sample_certificate("c1", "Uni")],
        ..ProfileState::default()
    };

    state.apply(ProfileUpdate {
        skills: Some(vec!["Fortran".to_owned()]),
        certificates: Some(Vec::new()),
        ..ProfileUpdate::default()
    });

    assert_eq!(state.skills, vec!["Fortran".to_owned()]);
    assert!(state.certificates.is_empty());
}

#[test]
fn merged_returns_a_copy_without_touching_the_original() {
    let state = sample_profile();
    let next = state.merged(ProfileUpdate {
        name: Some("Grace Hopper".to_owned()),
        ..ProfileUpdate::default()
    });

    assert_eq!(state.name, "Ada Lovelace");
    assert_eq!(next.name, "Grace Hopper");
}

// =============================================================
// Codec round trip
// =============================================================

#[test]
fn encode_decode_round_trip_preserves_sample_profile() {
    let state = sample_profile();
    let decoded = decode_profile(&encode_profile(&state)).expect("decode should succeed");
    assert_eq!(decoded, state);
}

#[test]
fn encode_decode_round_trip_preserves_default_profile() {
    let state = ProfileState::default();
    let decoded = decode_profile(&encode_profile(&state)).expect("decode should succeed");
    assert_eq!(decoded, state);
}

#[test]
fn encode_decode_round_trip_preserves_certificates_with_optionals() {
    let state = ProfileState {
        certificates: vec![
            Certificate {
                issuer: Some("ACM".to_owned()),
                date: Some("1843".to_owned()),
                ..sample_certificate("c1", "Awards")
            },
            sample_certificate("c2", "Awards"),
        ],
        ..sample_profile()
    };
    let decoded = decode_profile(&encode_profile(&state)).expect("decode should succeed");
    assert_eq!(decoded, state);
}

#[test]
fn encode_outputs_base64_of_camel_case_json() {
    let encoded = encode_profile(&sample_profile());
    let bytes = STANDARD.decode(&encoded).expect("payload should be base64");
    let json = String::from_utf8(bytes).expect("payload should be utf-8");

    assert!(json.contains("\"profileImage\""));
    assert!(json.contains("\"Ada Lovelace\""));
    assert!(!json.contains("profile_image"));
}

#[test]
fn skills_order_survives_the_round_trip() {
    let state = ProfileState {
        skills: vec![
            "JavaScript".to_owned(),
            "TypeScript".to_owned(),
            "Rust".to_owned(),
        ],
        ..sample_profile()
    };
    let decoded = decode_profile(&encode_profile(&state)).expect("decode should succeed");
    assert_eq!(decoded.skills, state.skills);
}

#[test]
fn duplicate_skills_are_permitted_and_preserved() {
    let state = ProfileState {
        skills: vec!["C++".to_owned(), "C++".to_owned()],
        ..sample_profile()
    };
    let decoded = decode_profile(&encode_profile(&state)).expect("decode should succeed");
    assert_eq!(decoded.skills, state.skills);
}

// =============================================================
// Decode robustness
// =============================================================

#[test]
fn decode_rejects_empty_input() {
    let err = decode_profile("").expect_err("empty input should fail");
    assert!(matches!(err, DecodeError::Empty));
}

#[test]
fn decode_rejects_non_base64_input() {
    let err = decode_profile("not-base64!!").expect_err("input should fail");
    assert!(matches!(err, DecodeError::Base64(_)));
}

#[test]
fn decode_rejects_base64_of_non_json() {
    let encoded = STANDARD.encode("not json");
    let err = decode_profile(&encoded).expect_err("payload should fail");
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn decode_rejects_non_utf8_payload() {
    let encoded = STANDARD.encode([0xff, 0xfe, 0x80]);
    let err = decode_profile(&encoded).expect_err("payload should fail");
    assert!(matches!(err, DecodeError::Utf8(_)));
}

#[test]
fn decode_ignores_unknown_fields_and_defaults_missing_ones() {
    let json = r#"{"name":"Ada Lovelace","unknownField":42}"#;
    let decoded =
        decode_profile(&STANDARD.encode(json)).expect("tolerant decode should succeed");

    assert_eq!(decoded.name, "Ada Lovelace");
    // Missing fields fall back to the placeholder defaults.
    assert_eq!(decoded.profile_image, "/placeholder.svg");
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn default_profile_uses_placeholder_name() {
    assert_eq!(ProfileState::default().name, "John Doe");
}

#[test]
fn shared_link_scenario_reconstructs_name_and_skills() {
    let encoded = encode_profile(&sample_profile());
    let decoded = decode_profile(&encoded).expect("decode should succeed");

    assert_eq!(decoded.name, "Ada Lovelace");
    assert_eq!(decoded.skills, vec!["C++".to_owned()]);
}

#[test]
fn appending_a_skill_keeps_prior_order_and_appends_at_the_end() {
    let state = ProfileState::default();
    let mut skills = state.skills.clone();
    skills.push("Rust".to_owned());

    let next = state.merged(ProfileUpdate {
        skills: Some(skills),
        ..ProfileUpdate::default()
    });
    let decoded = decode_profile(&encode_profile(&next)).expect("decode should succeed");

    assert_eq!(decoded.skills.last().map(String::as_str), Some("Rust"));
    assert_eq!(
        &decoded.skills[..decoded.skills.len() - 1],
        &ProfileState::default().skills[..]
    );
}

#[test]
fn certificate_without_optionals_omits_them_from_json() {
    let json = serde_json::to_string(&sample_certificate("c1", "Uni")).expect("serialize");
    assert!(!json.contains("issuer"));
    assert!(!json.contains("date"));
}
