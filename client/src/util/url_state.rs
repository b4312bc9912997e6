//! URL synchronizer: binds the profile store to the page address.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `portfolio` query parameter is the only externally-observable wire
//! format: base64 JSON produced by the `profile` crate codec. The page
//! reads it once on load and rewrites it after every store update with a
//! history-neutral replace, so a shared address reconstructs the page and
//! repeated edits never grow the browser history.
//!
//! Href manipulation is kept pure (plain strings in, plain strings out) so
//! the synchronizer core is testable without a browser.

#[cfg(test)]
#[path = "url_state_test.rs"]
mod url_state_test;

use profile::ProfileState;

/// Query parameter carrying the encoded profile.
pub const PARAM: &str = "portfolio";

/// Extract the raw `portfolio` parameter value from an href.
#[must_use]
pub fn profile_param(href: &str) -> Option<String> {
    let parsed = url::Url::parse(href).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Return `href` with its `portfolio` parameter replaced by `encoded`.
///
/// Every other query parameter, the path, and the fragment stay in place.
#[must_use]
pub fn href_with_profile(href: &str, encoded: &str) -> Option<String> {
    let mut parsed = url::Url::parse(href).ok()?;
    let retained: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| key != PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    {
        let mut pairs = parsed.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(PARAM, encoded);
    }
    Some(parsed.into())
}

/// Decode the profile carried by the current address, if any.
///
/// Absent and malformed parameters both degrade to `None`; decode failures
/// are logged and never escape this boundary as a partial state.
#[must_use]
pub fn read_from_address() -> Option<ProfileState> {
    #[cfg(feature = "hydrate")]
    {
        let href = web_sys::window()?.location().href().ok()?;
        let encoded = profile_param(&href)?;
        match profile::decode_profile(&encoded) {
            Ok(state) => Some(state),
            Err(err) => {
                log::warn!("ignoring malformed portfolio parameter: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Replace the `portfolio` parameter in the address bar with the encoding
/// of `state`.
///
/// Uses `history.replaceState`: no navigation, no new history entry. An
/// encode failure leaves the last-good address in place.
pub fn write_to_address(state: &ProfileState) {
    #[cfg(feature = "hydrate")]
    {
        let encoded = profile::encode_profile(state);
        if encoded.is_empty() {
            log::warn!("profile failed to encode; leaving address unchanged");
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(href) = window.location().href() else {
            return;
        };
        let Some(next) = href_with_profile(&href, &encoded) else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        if history
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&next))
            .is_err()
        {
            log::warn!("failed to replace address state");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}
