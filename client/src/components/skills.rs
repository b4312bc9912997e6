//! Skills section: the ordered skill list from the shared profile.
//!
//! Edits replace the whole sequence through the store, so the address bar
//! reflects the new list with prior order preserved and additions appended.

use leptos::prelude::*;

use profile::ProfileUpdate;

use crate::components::icon::Icon;
use crate::state::profile::ProfileStore;
use crate::state::ui::Section;
use crate::util::icons::IconKind;
use crate::util::persistence::{self, keys};

/// Skill chips with an edit mode for appending and removing entries.
#[component]
pub fn Skills() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(Vec::<String>::new());
    let new_skill = RwSignal::new(String::new());

    let on_edit = move |_| {
        draft.set(store.snapshot().skills);
        new_skill.set(String::new());
        editing.set(true);
    };

    let add_skill = move || {
        let skill = new_skill.get_untracked().trim().to_owned();
        if skill.is_empty() {
            return;
        }
        draft.update(|skills| skills.push(skill));
        new_skill.set(String::new());
    };

    let on_remove = move |index: usize| {
        draft.update(|skills| {
            if index < skills.len() {
                skills.remove(index);
            }
        });
    };

    let on_save = move |_| {
        let update = ProfileUpdate {
            skills: Some(draft.get_untracked()),
            ..ProfileUpdate::default()
        };
        persistence::save_json(keys::SKILLS, &update);
        store.update(update);
        editing.set(false);
    };

    let on_cancel = move |_| editing.set(false);

    view! {
        <section id=Section::Skills.anchor() class="section">
            <h2 class="section__title">
                <Icon kind=IconKind::Code/>
                "Skills"
                <button class="btn btn--ghost" title="Edit" on:click=on_edit>
                    <Icon kind=IconKind::Edit/>
                </button>
            </h2>

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <ul class="chip-row">
                            {move || {
                                store
                                    .get()
                                    .skills
                                    .into_iter()
                                    .map(|skill| view! { <li class="chip">{skill}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    }
                }
            >
                <div class="card form">
                    <ul class="chip-row">
                        {move || {
                            draft
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, skill)| {
                                    view! {
                                        <li class="chip chip--editable">
                                            {skill}
                                            <button
                                                class="chip__remove"
                                                title="Remove"
                                                on:click=move |_| on_remove(index)
                                            >
                                                <Icon kind=IconKind::Close/>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <div class="form__row">
                        <input
                            class="input"
                            type="text"
                            placeholder="Add a skill"
                            prop:value=move || new_skill.get()
                            on:input=move |ev| new_skill.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    add_skill();
                                }
                            }
                        />
                        <button class="btn" on:click=move |_| add_skill()>"Add"</button>
                    </div>
                    <div class="form__actions">
                        <button class="btn btn--primary" on:click=on_save>"Save"</button>
                        <button class="btn" on:click=on_cancel>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
