//! Input Field Component
//!
//! Labeled single-line text input.

use leptos::prelude::*;

/// Text input with a label above it
///
/// Props:
/// - id: element id, also targeted by the label
/// - value: current value of the bound field
/// - on_change: called with the new value on every keystroke
/// - text: label text (no label is rendered when empty)
/// - field_name: canonical key, used as the input's `name`
#[component]
pub fn InputField(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    text: &'static str,
    field_name: &'static str,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="input-field">
            <Show when=move || !text.is_empty()>
                <label for=label_for.clone()>{text}</label>
            </Show>
            <input
                type="text"
                id=id
                name=field_name
                placeholder=text
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
