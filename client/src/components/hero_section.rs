//! Hero section: name, bio, and profile image with in-place editing.
//!
//! Saves write the hero's partial to localStorage and route the same
//! partial through the profile store, which rewrites the address bar.

use leptos::prelude::*;

use profile::ProfileUpdate;

use crate::components::icon::Icon;
use crate::state::profile::ProfileStore;
use crate::state::ui::Section;
use crate::util::icons::IconKind;
use crate::util::persistence::{self, keys};

/// Persist the hero-owned fields as a merge partial.
fn persist_hero(store: &ProfileStore) {
    let snapshot = store.snapshot();
    persistence::save_json(
        keys::PROFILE,
        &ProfileUpdate {
            name: Some(snapshot.name),
            bio: Some(snapshot.bio),
            profile_image: Some(snapshot.profile_image),
            ..ProfileUpdate::default()
        },
    );
}

/// Hero section with display and edit modes.
#[component]
pub fn HeroSection() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    let editing = RwSignal::new(false);
    let draft_name = RwSignal::new(String::new());
    let draft_bio = RwSignal::new(String::new());

    let on_edit = move |_| {
        let snapshot = store.snapshot();
        draft_name.set(snapshot.name);
        draft_bio.set(snapshot.bio);
        editing.set(true);
    };

    let on_save = move |_| {
        store.update(ProfileUpdate {
            name: Some(draft_name.get_untracked()),
            bio: Some(draft_bio.get_untracked()),
            ..ProfileUpdate::default()
        });
        persist_hero(&store);
        editing.set(false);
    };

    let on_cancel = move |_| editing.set(false);

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = crate::util::file_data::input_files(&input).into_iter().next() {
                crate::util::file_data::read_as_data_url(&file, move |data_url| {
                    store.update(ProfileUpdate {
                        profile_image: Some(data_url),
                        ..ProfileUpdate::default()
                    });
                    persist_hero(&store);
                });
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <section id=Section::Home.anchor() class="hero section">
            <div class="hero__portrait">
                <img class="hero__image" src=move || store.get().profile_image alt="Profile"/>
                <label class="hero__camera" title="Upload a profile photo">
                    <Icon kind=IconKind::Camera/>
                    <input
                        class="visually-hidden"
                        type="file"
                        accept="image/*"
                        on:change=on_image_change
                    />
                </label>
            </div>

            <div class="hero__card">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <div class="hero__display">
                                <h1 class="hero__name">
                                    {move || store.get().name}
                                    <button class="btn btn--ghost" title="Edit" on:click=on_edit>
                                        <Icon kind=IconKind::Edit/>
                                    </button>
                                </h1>
                                <p class="hero__bio">{move || store.get().bio}</p>
                            </div>
                        }
                    }
                >
                    <div class="hero__form">
                        <input
                            class="input input--title"
                            type="text"
                            placeholder="Your Name"
                            prop:value=move || draft_name.get()
                            on:input=move |ev| draft_name.set(event_target_value(&ev))
                        />
                        <textarea
                            class="input input--area"
                            rows="4"
                            placeholder="Write your bio here..."
                            prop:value=move || draft_bio.get()
                            on:input=move |ev| draft_bio.set(event_target_value(&ev))
                        ></textarea>
                        <div class="hero__actions">
                            <button class="btn btn--primary" on:click=on_save>"Save"</button>
                            <button class="btn" on:click=on_cancel>"Cancel"</button>
                        </div>
                    </div>
                </Show>
            </div>
        </section>
    }
}
