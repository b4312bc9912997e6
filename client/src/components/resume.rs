//! Resume section: view/download actions over an uploadable document.
//!
//! The upload is stored as a data-URL so the buttons keep working across
//! reloads; without an upload the actions point at the bundled placeholder.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::profile::ProfileStore;
use crate::state::resume::ResumeState;
use crate::state::ui::Section;
use crate::util::icons::IconKind;
use crate::util::persistence::{self, keys};

/// Resume card with upload, view, and download actions.
#[component]
pub fn Resume() -> impl IntoView {
    let store = expect_context::<ProfileStore>();
    let resume = RwSignal::new(ResumeState::default());

    Effect::new(move || {
        if let Some(saved) = persistence::load_json::<ResumeState>(keys::RESUME) {
            resume.set(saved);
        }
    });

    let on_upload = move |ev: leptos::ev::Event| {
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
                let file_name = file.name();
                crate::util::file_data::read_as_data_url(&file, move |data_url| {
                    let next = ResumeState {
                        file_name: Some(file_name.clone()),
                        data_url: Some(data_url),
                    };
                    persistence::save_json(keys::RESUME, &next);
                    resume.set(next);
                });
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let document_href = move || {
        resume
            .get()
            .data_url
            .unwrap_or_else(|| "/placeholder.svg".to_owned())
    };
    let download_name = move || resume.get().download_name(&store.get().name);

    view! {
        <section id=Section::Resume.anchor() class="section section--narrow">
            <h2 class="section__title">"Resume"</h2>

            <div class="card card--center">
                <Icon kind=IconKind::Document class="icon icon--display"/>
                <h3 class="card__title">"Download My Resume"</h3>
                <p class="card__value">
                    "A comprehensive overview of my experience, skills, and \
                     qualifications."
                </p>

                <div class="form__actions">
                    <a
                        class="btn"
                        href=document_href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <Icon kind=IconKind::Eye/>
                        "View Resume"
                    </a>
                    <a class="btn btn--primary" href=document_href download=download_name>
                        <Icon kind=IconKind::Download/>
                        "Download PDF"
                    </a>
                </div>

                <label class="file-shelf__upload">
                    <Icon kind=IconKind::Upload/>
                    {move || {
                        resume
                            .get()
                            .file_name
                            .map_or_else(
                                || "Upload a resume (PDF)".to_owned(),
                                |name| format!("Replace {name}"),
                            )
                    }}
                    <input
                        class="visually-hidden"
                        type="file"
                        accept="application/pdf"
                        on:change=on_upload
                    />
                </label>
            </div>
        </section>
    }
}
