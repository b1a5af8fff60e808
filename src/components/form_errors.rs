//! Form Error List Component
//!
//! Aggregated, human readable listing of submit errors.

use leptos::prelude::*;

use crate::field_label::FieldName;
use crate::form::FORM_LEVEL_ERROR;
use crate::models::FormErrors;

/// Turn an error set into display lines, row errors first in row order
pub fn list_form_errors(errors: &FormErrors) -> Vec<String> {
    let mut lines: Vec<(usize, String)> = errors
        .iter()
        .map(|(field, message)| match FieldName::parse(field) {
            Some(name) if !name.label().is_blank() => (
                name.row,
                format!("Item #{} {}: {}", name.row + 1, name.label().label, message),
            ),
            Some(name) => (name.row, format!("Item #{}: {}", name.row + 1, message)),
            None if field == FORM_LEVEL_ERROR => (usize::MAX, message.to_string()),
            None => (usize::MAX, format!("{}: {}", field, message)),
        })
        .collect();
    lines.sort_by_key(|(row, _)| *row);
    lines.into_iter().map(|(_, line)| line).collect()
}

#[component]
pub fn FormErrorList(#[prop(into)] errors: Signal<FormErrors>) -> impl IntoView {
    view! {
        <ul class="form-errors">
            {move || errors.with(list_form_errors)
                .into_iter()
                .map(|line| view! { <li>{line}</li> })
                .collect_view()}
        </ul>
    }
}
