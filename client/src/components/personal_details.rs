//! Personal-details section: education fields with in-place editing.

use leptos::prelude::*;

use profile::ProfileUpdate;

use crate::components::icon::Icon;
use crate::state::profile::ProfileStore;
use crate::state::ui::Section;
use crate::util::icons::IconKind;
use crate::util::persistence::{self, keys};

/// Education fields displayed as labelled cards, editable as one form.
#[component]
pub fn PersonalDetails() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    let editing = RwSignal::new(false);
    let draft_degree = RwSignal::new(String::new());
    let draft_batch = RwSignal::new(String::new());
    let draft_college = RwSignal::new(String::new());
    let draft_school = RwSignal::new(String::new());

    let on_edit = move |_| {
        let snapshot = store.snapshot();
        draft_degree.set(snapshot.degree);
        draft_batch.set(snapshot.batch);
        draft_college.set(snapshot.college);
        draft_school.set(snapshot.school);
        editing.set(true);
    };

    let on_save = move |_| {
        let update = ProfileUpdate {
            degree: Some(draft_degree.get_untracked()),
            batch: Some(draft_batch.get_untracked()),
            college: Some(draft_college.get_untracked()),
            school: Some(draft_school.get_untracked()),
            ..ProfileUpdate::default()
        };
        persistence::save_json(keys::EDUCATION, &update);
        store.update(update);
        editing.set(false);
    };

    let on_cancel = move |_| editing.set(false);

    let detail_cards = move || {
        let snapshot = store.get();
        vec![
            (IconKind::GraduationCap, "Degree", snapshot.degree),
            (IconKind::Calendar, "Batch", snapshot.batch),
            (IconKind::MapPin, "College", snapshot.college),
            (IconKind::GraduationCap, "School", snapshot.school),
        ]
    };

    view! {
        <section id=Section::Personal.anchor() class="section">
            <h2 class="section__title">
                "Personal Details"
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
                                detail_cards()
                                    .into_iter()
                                    .map(|(icon, label, value)| {
                                        view! {
                                            <div class="card card--row">
                                                <Icon kind=icon/>
                                                <div>
                                                    <h3 class="card__label">{label}</h3>
                                                    <p class="card__value">{value}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    }
                }
            >
                <div class="card form">
                    <label class="form__field">
                        "Degree"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || draft_degree.get()
                            on:input=move |ev| draft_degree.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Batch"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || draft_batch.get()
                            on:input=move |ev| draft_batch.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "College"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || draft_college.get()
                            on:input=move |ev| draft_college.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "School"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || draft_school.get()
                            on:input=move |ev| draft_school.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form__actions">
                        <button class="btn btn--primary" on:click=on_save>"Save"</button>
                        <button class="btn" on:click=on_cancel>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
