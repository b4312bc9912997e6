//! Experience section: section-local work history with in-place editing.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::experience::{ExperienceEntry, default_experience};
use crate::state::ui::Section;
use crate::util::icons::IconKind;
use crate::util::persistence::{self, keys};

/// Work-experience timeline, persisted under its own storage key.
#[component]
pub fn Experience() -> impl IntoView {
    let entries = RwSignal::new(default_experience());

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(Vec::<ExperienceEntry>::new());
    // Bumped on structural draft changes (add/remove) so the edit form
    // re-renders then, and only then; typing mutates the draft untracked
    // and keeps input focus.
    let draft_shape = RwSignal::new(0u32);

    // Hydrate from the persisted copy once on mount; effects never run on
    // the server.
    Effect::new(move || {
        if let Some(saved) = persistence::load_json::<Vec<ExperienceEntry>>(keys::EXPERIENCE) {
            entries.set(saved);
        }
    });

    let on_edit = move |_| {
        draft.set(entries.get_untracked());
        draft_shape.update(|v| *v += 1);
        editing.set(true);
    };

    let on_add_entry = move |_| {
        draft.update_untracked(|entries| {
            entries.push(ExperienceEntry {
                title: String::new(),
                company: String::new(),
                period: String::new(),
                description: String::new(),
            });
        });
        draft_shape.update(|v| *v += 1);
    };

    let on_remove_entry = move |index: usize| {
        draft.update_untracked(|entries| {
            if index < entries.len() {
                entries.remove(index);
            }
        });
        draft_shape.update(|v| *v += 1);
    };

    let on_save = move |_| {
        let next = draft.get_untracked();
        persistence::save_json(keys::EXPERIENCE, &next);
        entries.set(next);
        editing.set(false);
    };

    let on_cancel = move |_| editing.set(false);

    view! {
        <section id=Section::Experience.anchor() class="section">
            <h2 class="section__title">
                "Experience"
                <button class="btn btn--ghost" title="Edit" on:click=on_edit>
                    <Icon kind=IconKind::Edit/>
                </button>
            </h2>

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <div class="stack">
                            {move || {
                                entries
                                    .get()
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <article class="card card--row">
                                                <Icon kind=IconKind::Briefcase/>
                                                <div>
                                                    <h3 class="card__title">{entry.title}</h3>
                                                    <h4 class="card__subtitle">{entry.company}</h4>
                                                    <p class="card__meta">
                                                        <Icon kind=IconKind::Calendar/>
                                                        {entry.period}
                                                    </p>
                                                    <p class="card__value">{entry.description}</p>
                                                </div>
                                            </article>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    }
                }
            >
                <div class="stack">
                    {move || {
                        draft_shape.get();
                        draft
                            .get_untracked()
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <div class="card form">
                                        <div class="form__row">
                                            <input
                                                class="input"
                                                type="text"
                                                placeholder="Title"
                                                prop:value=entry.title.clone()
                                                on:input=move |ev| {
                                                    draft.update_untracked(|entries| {
                                                        entries[index].title = event_target_value(&ev);
                                                    });
                                                }
                                            />
                                            <input
                                                class="input"
                                                type="text"
                                                placeholder="Company"
                                                prop:value=entry.company.clone()
                                                on:input=move |ev| {
                                                    draft.update_untracked(|entries| {
                                                        entries[index].company = event_target_value(&ev);
                                                    });
                                                }
                                            />
                                        </div>
                                        <input
                                            class="input"
                                            type="text"
                                            placeholder="Period"
                                            prop:value=entry.period.clone()
                                            on:input=move |ev| {
                                                draft.update_untracked(|entries| {
                                                    entries[index].period = event_target_value(&ev);
                                                });
                                            }
                                        />
                                        <textarea
                                            class="input input--area"
                                            rows="3"
                                            placeholder="What did you build?"
                                            prop:value=entry.description.clone()
                                            on:input=move |ev| {
                                                draft.update_untracked(|entries| {
                                                    entries[index].description = event_target_value(&ev);
                                                });
                                            }
                                        ></textarea>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| on_remove_entry(index)
                                        >
                                            <Icon kind=IconKind::Trash/>
                                            "Remove entry"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                    <div class="form__actions">
                        <button class="btn" on:click=on_add_entry>"Add entry"</button>
                        <button class="btn btn--primary" on:click=on_save>"Save"</button>
                        <button class="btn" on:click=on_cancel>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
