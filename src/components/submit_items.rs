//! Submit Items Component
//!
//! Order form view: item rows, submit button and the error listing.

use leptos::prelude::*;

use crate::form::OrderForm;
use crate::models::FormErrors;
use super::{FormErrorList, ItemListEditor};

/// Order form
///
/// Props:
/// - form: form state to edit
/// - form_has_errors: whether the error listing is shown
/// - errors: errors reported for the last submit
/// - on_submit: runs one submit cycle
#[component]
pub fn SubmitItems(
    form: RwSignal<OrderForm>,
    #[prop(into)] form_has_errors: Signal<bool>,
    #[prop(into)] errors: Signal<FormErrors>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] heading: String,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <h2 class="submit-items-heading">{heading}</h2>
        <form class="register-form" on:submit=submit>
            <ItemListEditor form=form />
            <div class="submit-row">
                <button type="submit" class="submit-btn">"Submit"</button>
            </div>
            <Show when=move || form_has_errors.get()>
                <div class="register-form__form-errors">
                    <FormErrorList errors=errors />
                </div>
            </Show>
        </form>
    }
}
