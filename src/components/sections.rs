//! Static content sections: hero, about, and projects.

use leptos::prelude::*;

use crate::config::{PageSection, SiteConfig, project_card_id};
use crate::state::reveal::{RevealSet, reveal_class};
use crate::util::document::scroll_to_section;

use super::header::HEADER_ID;

#[component]
pub fn HeroSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let contact = PageSection::Contact.id();

    let on_contact = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        scroll_to_section(contact, HEADER_ID);
    };
    let contact_link = config.has_section(PageSection::Contact).then(|| {
        view! { <a href=format!("#{contact}") class="btn btn-primary" on:click=on_contact>"Contact Me"</a> }
    });

    view! {
        <section id=PageSection::Home.id() class="section hero">
            <div class="container">
                <h1 class="hero-title">{format!("Hi, I'm {}", config.owner)}</h1>
                <p class="hero-tagline">{config.tagline}</p>
                {contact_link}
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <section id=PageSection::About.id() class="section about">
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <p class="about-text">{config.about}</p>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let reveals = expect_context::<RwSignal<RevealSet>>();

    let cards = config
        .projects
        .into_iter()
        .enumerate()
        .map(|(index, project)| {
            let id = project_card_id(index);
            let card_id = id.clone();
            let class = move || reveal_class("project-card", reveals.with(|r| r.is_revealed(&id)));
            view! {
                <article id=card_id class=class>
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-summary">{project.summary}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id=PageSection::Projects.id() class="section projects">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="project-grid">{cards}</div>
            </div>
        </section>
    }
}
