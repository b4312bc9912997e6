//! Inline SVG renderer for the closed icon registry.

use leptos::prelude::*;

use crate::util::icons::IconKind;

/// Render an [`IconKind`] tag as a stroked outline SVG.
///
/// This is the only place a tag becomes a renderable element; state and
/// storage never hold anything but the tag.
#[component]
pub fn Icon(kind: IconKind, #[prop(default = "icon")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=kind.tag()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=kind.path()/>
        </svg>
    }
}
