use leptos::prelude::*;
use leptos_meta::Title;

use super::{about::About, contact::Contact, hero::Hero, projects::Projects};

/// The whole site: four independent sections, top to bottom.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Contact />
    }
}
