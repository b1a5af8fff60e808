//! Item Field Component
//!
//! Resolves a qualified field name to its label and renders the bound input.

use leptos::prelude::*;

use crate::field_label::FieldName;
use super::InputField;

#[component]
pub fn ItemField(
    name: FieldName,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let label = name.label();

    view! {
        <InputField
            id=name.qualified()
            value=value
            on_change=on_change
            text=label.label
            field_name=label.key
        />
    }
}
