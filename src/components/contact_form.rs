//! Contact section with client-side validation.
//!
//! ARCHITECTURE
//! ============
//! Field text lives in a `ContactForm` signal. Submitting runs the full
//! validation pass and copies failing messages into a per-field error map;
//! typing into a field clears only that field's message. An accepted
//! submission resets the form and shows a success banner for a while.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::config::{PageSection, SiteConfig};
use crate::state::contact::{ContactForm, FieldName, submit};

type FieldErrors = HashMap<FieldName, &'static str>;

#[cfg(feature = "csr")]
fn hide_after(flag: RwSignal<bool>, millis: u32) {
    gloo_timers::callback::Timeout::new(millis, move || flag.set(false)).forget();
}

#[cfg(not(feature = "csr"))]
fn hide_after(_flag: RwSignal<bool>, millis: u32) {
    log::trace!("no timer outside the browser; banner hide after {millis}ms skipped");
}

/// One labelled input with its error slot.
#[component]
fn FormRow(
    field: FieldName,
    label: &'static str,
    form: RwSignal<ContactForm>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(&field).copied());
    let value = move || form.with(|f| f.value(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| *f.value_mut(field) = text);
        if errors.with_untracked(|e| e.contains_key(&field)) {
            errors.update(|e| {
                e.remove(&field);
            });
        }
    };

    let control = if multiline {
        let class = move || if error().is_some() { "form-textarea error" } else { "form-textarea" };
        view! {
            <textarea id=field.as_str() name=field.as_str() rows="5" class=class prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        let kind = if field == FieldName::Email { "email" } else { "text" };
        let class = move || if error().is_some() { "form-input error" } else { "form-input" };
        view! {
            <input id=field.as_str() name=field.as_str() type=kind class=class prop:value=value on:input=on_input/>
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.as_str() class="form-label">{label}</label>
            {control}
            <span class=move || if error().is_some() { "form-error show" } else { "form-error" }>
                {move || error().unwrap_or_default()}
            </span>
        </div>
    }
}

/// Contact section.
#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let success_ms = config.success_message_ms;

    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let success = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match submit(&form.get_untracked()) {
            Ok(_submission) => {
                errors.set(FieldErrors::new());
                form.set(ContactForm::default());
                success.set(true);
                hide_after(success, success_ms);
            }
            Err(report) => errors.set(report.errors().collect()),
        }
    };

    view! {
        <section id=PageSection::Contact.id() class="section contact">
            <div class="container">
                <h2 class="section-title">"Get in Touch"</h2>
                <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                    <FormRow field=FieldName::Name label="Name" form=form errors=errors/>
                    <FormRow field=FieldName::Email label="Email" form=form errors=errors/>
                    <FormRow field=FieldName::Subject label="Subject" form=form errors=errors/>
                    <FormRow field=FieldName::Message label="Message" form=form errors=errors multiline=true/>
                    <button type="submit" class="btn btn-primary">"Send Message"</button>
                    <p id="form-success" class=move || if success.get() { "form-success show" } else { "form-success" }>
                        {move || if success.get() { config.success_message.clone() } else { String::new() }}
                    </p>
                </form>
            </div>
        </section>
    }
}
