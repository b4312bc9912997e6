//! Projects section: project cards with per-project file uploads.
//!
//! Uploads become object URLs plus metadata; only the metadata is
//! persisted, so download links reappear after a re-upload rather than
//! after a reload.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::projects::{
    Project, attach_file, default_projects, format_file_size, remove_file,
};
use crate::state::ui::Section;
use crate::util::icons::IconKind;
use crate::util::persistence::{self, keys};

/// Project cards with technology chips, external links, and a file shelf.
#[component]
pub fn Projects() -> impl IntoView {
    let projects = RwSignal::new(default_projects());

    Effect::new(move || {
        if let Some(saved) = persistence::load_json::<Vec<Project>>(keys::PROJECTS) {
            projects.set(saved);
        }
    });

    let on_upload = move |project_id: String, ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::state::projects::ProjectFile;
            use crate::util::file_data;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            for file in file_data::input_files(&input) {
                let record = ProjectFile {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: file.name(),
                    mime: file.type_(),
                    size: file.size() as u64,
                    url: file_data::object_url_for(&file),
                };
                projects.update(|projects| attach_file(projects, &project_id, record));
            }
            input.set_value("");
            persistence::save_json(keys::PROJECTS, &projects.get_untracked());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project_id, ev);
        }
    };

    let on_remove_file = move |project_id: String, file_id: String| {
        let mut revoked: Option<String> = None;
        projects.update(|projects| {
            revoked = remove_file(projects, &project_id, &file_id);
        });
        #[cfg(feature = "hydrate")]
        {
            if let Some(url) = revoked {
                crate::util::file_data::revoke_object_url(&url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = revoked;
        }
        persistence::save_json(keys::PROJECTS, &projects.get_untracked());
    };

    view! {
        <section id=Section::Projects.anchor() class="section">
            <h2 class="section__title">"Projects"</h2>

            <div class="project-grid">
                <For
                    each=move || projects.get()
                    key=|project| project.id.clone()
                    children=move |project: Project| {
                        let project_id = project.id.clone();
                        let upload_id = project.id.clone();
                        view! {
                            <article class="card">
                                <h3 class="card__title">{project.title.clone()}</h3>
                                <p class="card__value">{project.description.clone()}</p>

                                <ul class="chip-row">
                                    {project
                                        .technologies
                                        .iter()
                                        .map(|tech| view! { <li class="chip">{tech.clone()}</li> })
                                        .collect_view()}
                                </ul>

                                <div class="card__links">
                                    {project
                                        .demo_url
                                        .clone()
                                        .map(|href| {
                                            view! {
                                                <a class="btn" href=href target="_blank" rel="noopener noreferrer">
                                                    <Icon kind=IconKind::ExternalLink/>
                                                    "Demo"
                                                </a>
                                            }
                                        })}
                                    {project
                                        .github_url
                                        .clone()
                                        .map(|href| {
                                            view! {
                                                <a class="btn" href=href target="_blank" rel="noopener noreferrer">
                                                    <Icon kind=IconKind::ExternalLink/>
                                                    "GitHub"
                                                </a>
                                            }
                                        })}
                                </div>

                                <div class="file-shelf">
                                    <label class="file-shelf__upload">
                                        <Icon kind=IconKind::Upload/>
                                        "Upload files (code, docs, archives)"
                                        <input
                                            class="visually-hidden"
                                            type="file"
                                            multiple
                                            on:change=move |ev| on_upload(upload_id.clone(), ev)
                                        />
                                    </label>

                                    <ul class="file-shelf__list">
                                        {project
                                            .files
                                            .iter()
                                            .map(|file| {
                                                let remove_project = project_id.clone();
                                                let remove_file_id = file.id.clone();
                                                view! {
                                                    <li class="file-shelf__item">
                                                        <Icon kind=IconKind::Document/>
                                                        <div class="file-shelf__meta">
                                                            <span class="file-shelf__name">{file.name.clone()}</span>
                                                            <span class="file-shelf__size">
                                                                {format_file_size(file.size)}
                                                            </span>
                                                        </div>
                                                        {file
                                                            .url
                                                            .clone()
                                                            .map(|href| {
                                                                let download = file.name.clone();
                                                                view! {
                                                                    <a
                                                                        class="btn btn--ghost"
                                                                        href=href
                                                                        download=download
                                                                        title="Download"
                                                                    >
                                                                        <Icon kind=IconKind::Download/>
                                                                    </a>
                                                                }
                                                            })}
                                                        <button
                                                            class="btn btn--ghost"
                                                            title="Remove"
                                                            on:click=move |_| {
                                                                on_remove_file(
                                                                    remove_project.clone(),
                                                                    remove_file_id.clone(),
                                                                )
                                                            }
                                                        >
                                                            <Icon kind=IconKind::Trash/>
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </article>
                        }
                    }
                />
            </div>
        </section>
    }
}
