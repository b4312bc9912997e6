//! Certificates section: categorized records from the shared profile.
//!
//! Certificates live inside the profile record, so every edit is a
//! whole-sequence update through the store; the address bar always carries
//! the current collection.

use leptos::prelude::*;

use profile::{Certificate, ProfileUpdate};

use crate::components::icon::Icon;
use crate::state::certificates::{group_by_category, new_certificate_id, remove_certificate};
use crate::state::profile::ProfileStore;
use crate::state::ui::Section;
use crate::util::icons::IconKind;
use crate::util::persistence::{self, keys};

/// Route a whole-sequence certificates update through the store and the
/// local persistence path.
fn commit_certificates(store: &ProfileStore, certificates: Vec<Certificate>) {
    let update = ProfileUpdate {
        certificates: Some(certificates),
        ..ProfileUpdate::default()
    };
    persistence::save_json(keys::CERTIFICATES, &update);
    store.update(update);
}

/// Grouped certificate folders with an add form and per-card removal.
#[component]
pub fn Certificates() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    let adding = RwSignal::new(false);
    let draft_title = RwSignal::new(String::new());
    let draft_category = RwSignal::new(String::new());
    let draft_issuer = RwSignal::new(String::new());
    let draft_date = RwSignal::new(String::new());
    let draft_image = RwSignal::new(String::new());

    let on_open_form = move |_| {
        draft_title.set(String::new());
        draft_category.set(String::new());
        draft_issuer.set(String::new());
        draft_date.set(String::new());
        draft_image.set(String::new());
        adding.set(true);
    };

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
                    draft_image.set(data_url);
                });
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_add = move |_| {
        let title = draft_title.get_untracked().trim().to_owned();
        if title.is_empty() {
            return;
        }
        let category = match draft_category.get_untracked().trim() {
            "" => "General".to_owned(),
            category => category.to_owned(),
        };
        let issuer = match draft_issuer.get_untracked().trim() {
            "" => None,
            issuer => Some(issuer.to_owned()),
        };
        let date = match draft_date.get_untracked().trim() {
            "" => None,
            date => Some(date.to_owned()),
        };
        let image = match draft_image.get_untracked().as_str() {
            "" => "/placeholder.svg".to_owned(),
            image => image.to_owned(),
        };

        let mut certificates = store.snapshot().certificates;
        certificates.push(Certificate {
            id: new_certificate_id(),
            title,
            image,
            category,
            issuer,
            date,
        });
        commit_certificates(&store, certificates);
        adding.set(false);
    };

    let on_cancel = move |_| adding.set(false);

    let on_remove = move |id: String| {
        let mut certificates = store.snapshot().certificates;
        if remove_certificate(&mut certificates, &id) {
            commit_certificates(&store, certificates);
        }
    };

    view! {
        <section id=Section::Certificates.anchor() class="section">
            <h2 class="section__title">
                <Icon kind=IconKind::Award/>
                "Certificates"
            </h2>

            <div class="stack">
                {move || {
                    group_by_category(&store.get().certificates)
                        .into_iter()
                        .map(|(category, certs)| {
                            view! {
                                <div class="card">
                                    <h3 class="card__title">
                                        <Icon kind=IconKind::Award/>
                                        {category}
                                    </h3>
                                    <div class="cert-grid">
                                        {certs
                                            .into_iter()
                                            .map(|cert| {
                                                let remove_id = cert.id.clone();
                                                view! {
                                                    <div class="cert-card">
                                                        <img
                                                            class="cert-card__image"
                                                            src=cert.image.clone()
                                                            alt=cert.title.clone()
                                                        />
                                                        <h4 class="card__label">{cert.title.clone()}</h4>
                                                        {cert
                                                            .issuer
                                                            .clone()
                                                            .map(|issuer| {
                                                                view! {
                                                                    <p class="card__meta">"Issued by: " {issuer}</p>
                                                                }
                                                            })}
                                                        {cert
                                                            .date
                                                            .clone()
                                                            .map(|date| {
                                                                view! { <p class="card__meta">"Date: " {date}</p> }
                                                            })}
                                                        <div class="cert-card__actions">
                                                            <a
                                                                class="btn btn--ghost"
                                                                href=cert.image.clone()
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                                title="View certificate"
                                                            >
                                                                <Icon kind=IconKind::ExternalLink/>
                                                            </a>
                                                            <button
                                                                class="btn btn--ghost"
                                                                title="Remove"
                                                                on:click=move |_| on_remove(remove_id.clone())
                                                            >
                                                                <Icon kind=IconKind::Trash/>
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show
                when=move || adding.get()
                fallback=move || {
                    view! {
                        <button class="btn btn--primary" on:click=on_open_form>
                            "Add New Certificate"
                        </button>
                    }
                }
            >
                <div class="card form">
                    <div class="form__row">
                        <input
                            class="input"
                            type="text"
                            placeholder="Title"
                            prop:value=move || draft_title.get()
                            on:input=move |ev| draft_title.set(event_target_value(&ev))
                        />
                        <input
                            class="input"
                            type="text"
                            placeholder="Category"
                            prop:value=move || draft_category.get()
                            on:input=move |ev| draft_category.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__row">
                        <input
                            class="input"
                            type="text"
                            placeholder="Issuer (optional)"
                            prop:value=move || draft_issuer.get()
                            on:input=move |ev| draft_issuer.set(event_target_value(&ev))
                        />
                        <input
                            class="input"
                            type="text"
                            placeholder="Date (optional)"
                            prop:value=move || draft_date.get()
                            on:input=move |ev| draft_date.set(event_target_value(&ev))
                        />
                    </div>
                    <label class="file-shelf__upload">
                        <Icon kind=IconKind::Image/>
                        {move || {
                            if draft_image.get().is_empty() {
                                "Upload certificate image"
                            } else {
                                "Image attached"
                            }
                        }}
                        <input
                            class="visually-hidden"
                            type="file"
                            accept="image/*"
                            on:change=on_image_change
                        />
                    </label>
                    <div class="form__actions">
                        <button class="btn btn--primary" on:click=on_add>"Save"</button>
                        <button class="btn" on:click=on_cancel>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
