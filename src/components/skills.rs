//! Skills section with animated progress bars.

use leptos::prelude::*;

use crate::config::{PageSection, SKILL_LIST_ID, SiteConfig};
use crate::state::reveal::{RevealSet, reveal_class};

/// Skill bars stay empty until `revealed` flips, then fill to their level.
#[component]
pub fn SkillsSection(revealed: RwSignal<bool>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let reveals = expect_context::<RwSignal<RevealSet>>();
    let list_class = move || reveal_class("skill-category", reveals.with(|r| r.is_revealed(SKILL_LIST_ID)));

    let bars = config
        .skills
        .into_iter()
        .map(|skill| {
            let width = skill.width_percent();
            let label = width.clone();
            let bar_width = move || if revealed.get() { width.clone() } else { "0%".to_owned() };
            view! {
                <div class="skill">
                    <div class="skill-header">
                        <span class="skill-name">{skill.name}</span>
                        <span class="skill-level">{label}</span>
                    </div>
                    <div class="skill-bar">
                        <div class="skill-progress" style:width=bar_width></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=PageSection::Skills.id() class="section skills">
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div id=SKILL_LIST_ID class=list_class>{bars}</div>
            </div>
        </section>
    }
}
