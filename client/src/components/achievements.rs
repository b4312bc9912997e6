//! Achievements section: section-local entries with icon tags.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::achievements::{Achievement, default_achievements};
use crate::state::ui::Section;
use crate::util::icons::IconKind;
use crate::util::persistence::{self, keys};

/// Icons offered in the achievement editor.
const ICON_CHOICES: [IconKind; 6] = [
    IconKind::Trophy,
    IconKind::Star,
    IconKind::Target,
    IconKind::Zap,
    IconKind::Award,
    IconKind::Check,
];

/// Achievement cards, persisted under their own storage key.
#[component]
pub fn Achievements() -> impl IntoView {
    let entries = RwSignal::new(default_achievements());

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(Vec::<Achievement>::new());
    // Structural changes re-render the edit form; typing stays untracked.
    let draft_shape = RwSignal::new(0u32);

    Effect::new(move || {
        if let Some(saved) = persistence::load_json::<Vec<Achievement>>(keys::ACHIEVEMENTS) {
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
            entries.push(Achievement {
                icon: IconKind::Trophy,
                title: String::new(),
                description: String::new(),
                year: String::new(),
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
        persistence::save_json(keys::ACHIEVEMENTS, &next);
        entries.set(next);
        editing.set(false);
    };

    let on_cancel = move |_| editing.set(false);

    view! {
        <section id=Section::Achievements.anchor() class="section">
            <h2 class="section__title">
                "Achievements"
                <button class="btn btn--ghost" title="Edit" on:click=on_edit>
                    <Icon kind=IconKind::Edit/>
                </button>
            </h2>

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <div class="detail-grid">
                            {move || {
                                entries
                                    .get()
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <article class="card card--row">
                                                <Icon kind=entry.icon/>
                                                <div>
                                                    <div class="card__heading">
                                                        <h3 class="card__title">{entry.title}</h3>
                                                        <span class="card__meta">{entry.year}</span>
                                                    </div>
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
                                            <select
                                                class="input input--select"
                                                on:change=move |ev| {
                                                    if let Some(kind) =
                                                        IconKind::from_tag(&event_target_value(&ev))
                                                    {
                                                        draft.update_untracked(|entries| {
                                                            entries[index].icon = kind;
                                                        });
                                                    }
                                                }
                                            >
                                                {ICON_CHOICES
                                                    .into_iter()
                                                    .map(|kind| {
                                                        view! {
                                                            <option
                                                                value=kind.tag()
                                                                selected={kind == entry.icon}
                                                            >
                                                                {kind.tag()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
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
                                                placeholder="Year"
                                                prop:value=entry.year.clone()
                                                on:input=move |ev| {
                                                    draft.update_untracked(|entries| {
                                                        entries[index].year = event_target_value(&ev);
                                                    });
                                                }
                                            />
                                        </div>
                                        <textarea
                                            class="input input--area"
                                            rows="3"
                                            placeholder="What happened?"
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
