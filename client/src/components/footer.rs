//! Page footer.

use leptos::prelude::*;

use crate::state::profile::ProfileStore;

/// Static footer with the owner's name.
#[component]
pub fn Footer() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    view! {
        <footer class="footer">
            <p class="footer__line">
                {move || store.get().name}
                " · Copy the address bar to share this page."
            </p>
        </footer>
    }
}
