use super::*;

#[test]
fn storage_keys_are_unique() {
    for (i, a) in keys::ALL.iter().enumerate() {
        for b in &keys::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn storage_keys_share_the_portfolio_namespace() {
    for key in keys::ALL {
        assert!(
            key.starts_with("portfolio_"),
            "{key} should be namespaced"
        );
    }
}

#[test]
fn load_json_outside_the_browser_signals_absence() {
    // Native (non-hydrate) builds have no storage; the adapter degrades to
    // "no data" instead of failing.
    let value: Option<Vec<String>> = load_json(keys::EXPERIENCE);
    assert!(value.is_none());
}

#[test]
fn save_json_outside_the_browser_is_a_silent_no_op() {
    save_json(keys::EXPERIENCE, &vec!["entry".to_owned()]);
    let value: Option<Vec<String>> = load_json(keys::EXPERIENCE);
    assert!(value.is_none());
}
