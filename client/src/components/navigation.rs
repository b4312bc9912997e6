//! Fixed navigation bar with smooth scrolling to section anchors.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::ui::{Section, UiState};
use crate::util::icons::IconKind;

/// Smooth-scroll the viewport to a section's anchor element.
fn scroll_to(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.get_element_by_id(section.anchor()) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}

/// Fixed navigation bar: a desktop button row plus a mobile hamburger menu.
#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_nav = move |section: Section| {
        scroll_to(section);
        ui.update(|s| s.menu_open = false);
    };

    let on_toggle_menu = move |_| ui.update(|s| s.menu_open = !s.menu_open);

    view! {
        <nav class="nav">
            <div class="nav__desktop">
                <ul class="nav__list">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <button
                                        class="nav__link"
                                        on:click=move |_| on_nav(section)
                                    >
                                        {section.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="nav__mobile">
                <button class="nav__burger" on:click=on_toggle_menu>
                    <Show
                        when=move || ui.get().menu_open
                        fallback=|| view! { <Icon kind=IconKind::Menu/> }
                    >
                        <Icon kind=IconKind::Close/>
                    </Show>
                </button>

                <Show when=move || ui.get().menu_open>
                    <ul class="nav__menu">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <button
                                            class="nav__link nav__link--stacked"
                                            on:click=move |_| on_nav(section)
                                        >
                                            {section.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>
        </nav>
    }
}
