//! Item List Editor Component
//!
//! One editable row per order line, with add and remove controls.

use leptos::prelude::*;

use crate::field_label::{FieldKind, FieldName};
use crate::form::OrderForm;
use crate::item_list::{row_heading, EntryField};
use super::ItemField;

/// Editable list of order lines
///
/// Rows are keyed by index; values are read from the form signal so a
/// removal shifts content up without recreating the inputs.
#[component]
pub fn ItemListEditor(form: RwSignal<OrderForm>) -> impl IntoView {
    // First-entry guarantee
    form.update_untracked(|f| {
        if f.items.ensure_non_empty() {
            log::debug!("[ITEMS] Empty list, added a blank entry");
        }
    });

    let can_remove = move || form.with(|f| f.items.can_remove());

    let field_value = move |index: usize, field: EntryField| {
        Signal::derive(move || {
            form.with(|f| {
                f.items
                    .get(index)
                    .map(|e| match field {
                        EntryField::Item => e.item.clone(),
                        EntryField::Fallback => e.fallback.clone(),
                    })
                    .unwrap_or_default()
            })
        })
    };

    let field_setter = move |index: usize, field: EntryField| {
        Callback::new(move |value: String| {
            form.update(|f| {
                if let Err(e) = f.items.update(index, field, value) {
                    log::warn!("[ITEMS] Edit dropped: {}", e);
                }
            });
        })
    };

    let add_item = move |_: web_sys::MouseEvent| {
        form.update(|f| f.items.append());
    };

    let remove_item = move |index: usize| {
        form.update(|f| match f.items.remove(index) {
            Ok(_) => log::debug!("[ITEMS] Removed item #{}", index + 1),
            Err(e) => log::warn!("[ITEMS] Remove ignored: {}", e),
        });
    };

    view! {
        <div class="item-list">
            <For
                each=move || form.with(|f| f.items.row_indices())
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="item-row">
                            <h3 class="item-heading">{row_heading(index)}</h3>
                            <ItemField
                                name=FieldName::new(index, FieldKind::Item)
                                value=field_value(index, EntryField::Item)
                                on_change=field_setter(index, EntryField::Item)
                            />
                            <ItemField
                                name=FieldName::new(index, FieldKind::Fallback)
                                value=field_value(index, EntryField::Fallback)
                                on_change=field_setter(index, EntryField::Fallback)
                            />
                            <Show when=can_remove>
                                <button
                                    type="button"
                                    class="remove-item-btn"
                                    title="Remove Item"
                                    on:click=move |_| remove_item(index)
                                >
                                    "Remove Item"
                                </button>
                            </Show>
                            <button type="button" class="add-item-btn" on:click=add_item>
                                "Add More Items"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
