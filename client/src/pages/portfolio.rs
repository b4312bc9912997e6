//! The single portfolio page: seeds the profile store, then renders every
//! section under the fixed navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Load-time precedence lives here: a `portfolio` query parameter wins and
//! overwrites the store wholesale; otherwise locally persisted partials are
//! merged over the defaults. Later edits inside sections always re-derive
//! and rewrite the address through the store.

use leptos::prelude::*;

use profile::ProfileUpdate;

use crate::components::achievements::Achievements;
use crate::components::certificates::Certificates;
use crate::components::contact::Contact;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::hero_section::HeroSection;
use crate::components::navigation::Navigation;
use crate::components::personal_details::PersonalDetails;
use crate::components::projects::Projects;
use crate::components::resume::Resume;
use crate::components::skills::Skills;
use crate::state::profile::ProfileStore;
use crate::util::persistence::{self, keys};

/// Apply locally persisted merge partials over the defaults.
///
/// Only used when the address carried no (valid) profile; the sections that
/// persist whole sub-states (experience, projects, achievements, resume)
/// hydrate themselves.
fn apply_persisted_partials(store: &ProfileStore) {
    let partials = [
        persistence::load_json::<ProfileUpdate>(keys::PROFILE),
        persistence::load_json::<ProfileUpdate>(keys::EDUCATION),
        persistence::load_json::<ProfileUpdate>(keys::SKILLS),
        persistence::load_json::<ProfileUpdate>(keys::CERTIFICATES),
    ];

    let mut state = store.snapshot();
    let mut changed = false;
    for update in partials.into_iter().flatten() {
        state.apply(update);
        changed = true;
    }
    if changed {
        store.replace(state);
    }
}

/// Portfolio page with all sections on one scrollable view.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let store = expect_context::<ProfileStore>();

    // Seed once on mount; effects never run during SSR. URL state wins over
    // the locally persisted copies.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        seeded.set(true);
        if !store.seed_from_url() {
            apply_persisted_partials(&store);
        }
    });

    view! {
        <div class="page">
            <Navigation/>
            <main>
                <HeroSection/>
                <PersonalDetails/>
                <Skills/>
                <Experience/>
                <Projects/>
                <Certificates/>
                <Achievements/>
                <Resume/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
