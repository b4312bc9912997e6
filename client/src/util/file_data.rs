//! File input boundary: uploaded files become data-URLs or object URLs.
//!
//! TRADE-OFFS
//! ==========
//! Data-URLs are durable (they serialize into JSON, storage, and the
//! address) but large; object URLs are cheap but die with the page. Hero,
//! certificate, and resume uploads use data-URLs; per-project files use
//! object URLs plus persisted metadata. Requires a browser environment;
//! nothing here exists on the SSR build.

/// Read `file` as a data-URL and hand the result to `on_done`.
///
/// The callback runs once, when the read completes, and performs a single
/// atomic state update; no partial state is observable in between. A failed
/// read drops the update and logs. In-flight reads have no cancellation
/// path: a callback firing after section teardown updates a still-live
/// signal and is harmless.
#[cfg(feature = "hydrate")]
pub fn read_as_data_url(file: &web_sys::File, on_done: impl Fn(String) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(reader) = web_sys::FileReader::new() else {
        log::warn!("file reader unavailable");
        return;
    };

    let reader_in_callback = reader.clone();
    let onload = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        match reader_in_callback.result() {
            Ok(value) => {
                if let Some(data_url) = value.as_string() {
                    on_done(data_url);
                } else {
                    log::warn!("file read produced a non-text result");
                }
            }
            Err(_) => log::warn!("file read failed"),
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    // The closure must outlive the async read; the reader drops it with the
    // page.
    onload.forget();

    if reader.read_as_data_url(file).is_err() {
        log::warn!("failed to start file read");
    }
}

/// Create an ephemeral object URL for `file`.
///
/// The URL is only valid for this page view; callers persist metadata, not
/// the URL, and pair it with [`revoke_object_url`] on removal.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn object_url_for(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Release the blob reference behind an object URL.
#[cfg(feature = "hydrate")]
pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

/// Files selected in an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn input_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
