//! Contact section: local validation and a simulated submission.
//!
//! Nothing is delivered anywhere; a valid submit flips the card into a
//! confirmation state and resets after a short delay.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::contact::{ContactErrors, ContactForm, SubmitStatus};
use crate::state::ui::Section;
use crate::util::icons::IconKind;

/// Contact info cards plus the message form.
#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(ContactErrors::default());
    let status = RwSignal::new(SubmitStatus::Editing);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let validated = form.get_untracked().validate();
        if !validated.is_empty() {
            errors.set(validated);
            return;
        }
        errors.set(ContactErrors::default());
        form.set(ContactForm::default());
        status.set(SubmitStatus::Sent);

        // Show the confirmation for a few seconds, then bring the form back.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
            status.set(SubmitStatus::Editing);
        });
    };

    let contact_info = [
        (IconKind::Mail, "Email", "john.doe@email.com"),
        (IconKind::Phone, "Phone", "+1 (555) 123-4567"),
        (IconKind::MapPin, "Location", "San Francisco, CA"),
    ];

    view! {
        <section id=Section::Contact.anchor() class="section">
            <h2 class="section__title">"Contact Me"</h2>

            <div class="contact-grid">
                <div>
                    <h3 class="card__title">"Get In Touch"</h3>
                    <p class="card__value">
                        "Always interested in new opportunities and collaborations. \
                         Whether you have a project in mind or just want to connect, \
                         feel free to reach out."
                    </p>
                    <div class="stack">
                        {contact_info
                            .into_iter()
                            .map(|(icon, label, value)| {
                                view! {
                                    <div class="card card--row">
                                        <Icon kind=icon/>
                                        <div>
                                            <h4 class="card__label">{label}</h4>
                                            <p class="card__value">{value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">"Send Message"</h3>

                    <Show
                        when=move || status.get() == SubmitStatus::Sent
                        fallback=move || {
                            view! {
                                <form class="form" on:submit=on_submit>
                                    <label class="form__field">
                                        "Name *"
                                        <input
                                            class="input"
                                            type="text"
                                            placeholder="Your full name"
                                            prop:value=move || form.get().name
                                            on:input=move |ev| {
                                                form.update(|f| f.name = event_target_value(&ev));
                                                errors.update(|e| e.name = None);
                                            }
                                        />
                                        <Show when=move || errors.get().name.is_some()>
                                            <p class="form__error">
                                                {move || errors.get().name.unwrap_or_default()}
                                            </p>
                                        </Show>
                                    </label>

                                    <label class="form__field">
                                        "Email *"
                                        <input
                                            class="input"
                                            type="email"
                                            placeholder="your.email@example.com"
                                            prop:value=move || form.get().email
                                            on:input=move |ev| {
                                                form.update(|f| f.email = event_target_value(&ev));
                                                errors.update(|e| e.email = None);
                                            }
                                        />
                                        <Show when=move || errors.get().email.is_some()>
                                            <p class="form__error">
                                                {move || errors.get().email.unwrap_or_default()}
                                            </p>
                                        </Show>
                                    </label>

                                    <label class="form__field">
                                        "Message *"
                                        <textarea
                                            class="input input--area"
                                            rows="5"
                                            placeholder="Tell me about your project or just say hello..."
                                            prop:value=move || form.get().message
                                            on:input=move |ev| {
                                                form.update(|f| f.message = event_target_value(&ev));
                                                errors.update(|e| e.message = None);
                                            }
                                        ></textarea>
                                        <Show when=move || errors.get().message.is_some()>
                                            <p class="form__error">
                                                {move || errors.get().message.unwrap_or_default()}
                                            </p>
                                        </Show>
                                    </label>

                                    <button class="btn btn--primary" type="submit">
                                        <Icon kind=IconKind::Send/>
                                        "Send Message"
                                    </button>
                                </form>
                            }
                        }
                    >
                        <div class="card--center">
                            <Icon kind=IconKind::Check class="icon icon--display"/>
                            <h4 class="card__title">"Message Sent!"</h4>
                            <p class="card__value">
                                "Thank you for reaching out. I'll get back to you soon."
                            </p>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
