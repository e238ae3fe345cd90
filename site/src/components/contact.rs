//! Contact section: details, the required-field form and its acknowledgment.

use leptos::prelude::*;
use majorem::ContactField;

use super::{Icon, ICON_CHECK_CIRCLE, ICON_MAIL, ICON_PHONE, ICON_SEND};
use crate::state::use_page;

/// Contact details, the form and its acknowledgment modal.
#[component]
pub fn Contact() -> impl IntoView {
    let config = use_page().config;
    let mailto = config.mailto();

    view! {
        <section id="contact" class="section">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section-description">
                        "Ready to transform your data? Let's talk about your specific needs."
                    </p>
                </div>
                <div class="contact-grid">
                    <div class="reveal-left">
                        <h3 class="contact-heading">"Contact Information"</h3>
                        <div class="contact-details">
                            <div class="contact-item">
                                <Icon paths=ICON_MAIL size="24" class="icon-accent" />
                                <div>
                                    <p class="contact-label">"Email"</p>
                                    <a class="contact-value" href=mailto>{config.contact_email}</a>
                                </div>
                            </div>
                            <div class="contact-item">
                                <Icon paths=ICON_PHONE size="24" class="icon-accent" />
                                <div>
                                    <p class="contact-label">"Phone"</p>
                                    <p class="contact-value">{config.contact_phone}</p>
                                </div>
                            </div>
                            <div class="contact-callout">
                                <h4 class="contact-callout-title">"Schedule a Demo"</h4>
                                <p>
                                    "See our tools in action with a personalized demo tailored to your business needs."
                                </p>
                                <a href="#contact" class="contact-callout-link">
                                    "Book a Call"
                                    <Icon paths=ICON_SEND size="16" />
                                </a>
                            </div>
                        </div>
                    </div>
                    <div class="reveal-right">
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
        <AcknowledgmentModal />
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let contact = use_page().contact;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        contact.update(|c| {
            c.submit();
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            {ContactField::ALL
                .into_iter()
                .map(|field| view! { <FormField field=field /> })
                .collect::<Vec<_>>()}
            <button type="submit" class="btn btn-primary btn-block">"Send Message"</button>
        </form>
    }
}

/// Labelled, required input bound to one draft field.
#[component]
fn FormField(field: ContactField) -> impl IntoView {
    let contact = use_page().contact;
    let initial = contact.with_untracked(|c| c.draft().get(field).to_string());
    let current = move || contact.with(|c| c.draft().get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        contact.update(|c| c.update_field(field, event_target_value(&ev)))
    };

    let control = match field.input_type() {
        Some(kind) => view! {
            <input
                type=kind
                id=field.id()
                name=field.id()
                class="form-input"
                required=true
                value=initial
                prop:value=current
                on:input=on_input
            />
        }
        .into_any(),
        None => view! {
            <textarea
                id=field.id()
                name=field.id()
                class="form-input"
                rows="4"
                required=true
                prop:value=current
                on:input=on_input
            >
                {initial}
            </textarea>
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label for=field.id() class="form-label">{field.label()}</label>
            {control}
        </div>
    }
}

/// In-page replacement for a blocking `alert()` after a successful submit.
#[component]
fn AcknowledgmentModal() -> impl IntoView {
    let contact = use_page().contact;
    let message = move || {
        contact.with(|c| {
            c.acknowledgment()
                .map(|ack| ack.message())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || contact.with(|c| c.acknowledgment().is_some())>
            <div class="modal-backdrop" data-role="acknowledgment">
                <div class="modal modal-compact" role="alertdialog" aria-modal="true">
                    <div class="ack-icon">
                        <Icon paths=ICON_CHECK_CIRCLE size="40" class="icon-success" />
                    </div>
                    <h3 class="modal-title">"Message sent"</h3>
                    <p class="modal-intro">{message}</p>
                    <button
                        class="btn btn-primary btn-block"
                        on:click=move |_| contact.update(|c| c.dismiss_acknowledgment())
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
