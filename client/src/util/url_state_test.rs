use profile::{ProfileState, decode_profile, encode_profile};

use super::*;

const BASE: &str = "https://example.com/portfolio?theme=warm#contact";

#[test]
fn profile_param_extracts_the_parameter_value() {
    let href = "https://example.com/?portfolio=abc123";
    assert_eq!(profile_param(href).as_deref(), Some("abc123"));
}

#[test]
fn profile_param_is_none_when_absent() {
    assert!(profile_param("https://example.com/?other=1").is_none());
    assert!(profile_param("https://example.com/").is_none());
}

#[test]
fn profile_param_rejects_unparseable_hrefs() {
    assert!(profile_param("not a url").is_none());
}

#[test]
fn href_with_profile_appends_the_parameter() {
    let next = href_with_profile("https://example.com/", "abc").expect("href");
    assert_eq!(profile_param(&next).as_deref(), Some("abc"));
}

#[test]
fn href_with_profile_replaces_an_existing_parameter() {
    let first = href_with_profile(BASE, "old").expect("href");
    let second = href_with_profile(&first, "new").expect("href");

    assert_eq!(profile_param(&second).as_deref(), Some("new"));
    // Exactly one portfolio parameter remains.
    assert_eq!(second.matches("portfolio=").count(), 1);
}

#[test]
fn href_with_profile_preserves_other_parameters_path_and_fragment() {
    let next = href_with_profile(BASE, "abc").expect("href");
    let parsed = url::Url::parse(&next).expect("parse");

    assert_eq!(parsed.path(), "/portfolio");
    assert_eq!(parsed.fragment(), Some("contact"));
    assert!(
        parsed
            .query_pairs()
            .any(|(k, v)| k == "theme" && v == "warm")
    );
}

#[test]
fn rewriting_with_the_same_payload_is_idempotent() {
    // The browser-side write replaces history state; the pure half of that
    // law is that rewriting the same payload yields the same address.
    let first = href_with_profile(BASE, "abc").expect("href");
    let second = href_with_profile(&first, "abc").expect("href");
    assert_eq!(first, second);
}

#[test]
fn base64_payloads_survive_query_percent_encoding() {
    // Standard base64 uses '+', '/', and '='; the query writer must encode
    // them so the reader gets the exact payload back.
    let payload = "ab+/c0==";
    let next = href_with_profile("https://example.com/", payload).expect("href");
    assert_eq!(profile_param(&next).as_deref(), Some(payload));
}

#[test]
fn full_address_round_trip_reconstructs_the_profile() {
    let state = ProfileState {
        name: "Ada Lovelace".to_owned(),
        skills: vec!["C++".to_owned()],
        ..ProfileState::default()
    };

    let next = href_with_profile(BASE, &encode_profile(&state)).expect("href");
    let param = profile_param(&next).expect("parameter should be present");
    let decoded = decode_profile(&param).expect("decode should succeed");

    assert_eq!(decoded, state);
}
