//! Contact form handed off to the hosted form endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser performs a plain full-page POST to `CONTACT_FORM_ACTION`.
//! Required-field checks are the browser's own; nothing here intercepts the
//! submit event or looks at the response.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::content::{
    CONTACT_FIELDS, CONTACT_FORM_ACTION, CONTACT_FORM_METHOD, CONTACT_SUBMIT_LABEL, ContactField,
    FieldKind,
};

#[component]
pub fn ContactForm() -> impl IntoView {
    view! {
        <form class="contact-form" action=CONTACT_FORM_ACTION method=CONTACT_FORM_METHOD>
            {CONTACT_FIELDS.iter().map(field_view).collect_view()}
            <button type="submit" class="contact-form__submit">
                {CONTACT_SUBMIT_LABEL}
            </button>
        </form>
    }
}

fn field_view(field: &ContactField) -> AnyView {
    match field.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea
                class="contact-form__input"
                name=field.name
                placeholder=field.placeholder
                rows=rows.to_string()
                required=field.required
            ></textarea>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => view! {
            <input
                class="contact-form__input"
                type=field.kind.input_type()
                name=field.name
                placeholder=field.placeholder
                required=field.required
            />
        }
        .into_any(),
    }
}
