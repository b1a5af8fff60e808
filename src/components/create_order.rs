//! Create Order Component
//!
//! Connects the order form to the store and the validator.

use leptos::prelude::*;

use crate::context::use_order_form;
use crate::store::{form_errors_signal, form_has_errors_signal, use_orders_store, StoreActions};
use crate::validation::OrderValidator;
use super::SubmitItems;

#[component]
pub fn CreateOrder() -> impl IntoView {
    let ctx = use_order_form();
    let store = use_orders_store();
    let config = ctx.config.get_value();

    let on_submit = Callback::new(move |_: ()| {
        let actions = StoreActions(store);
        ctx.form.update(|f| {
            f.submit(&OrderValidator, &actions);
        });
    });

    if !config.keep_values_on_unmount {
        let form_name = config.form_name.clone();
        on_cleanup(move || {
            log::debug!("[{}] Unmounted, clearing entries", form_name);
            ctx.clear();
        });
    }

    view! {
        <SubmitItems
            form=ctx.form
            form_has_errors=form_has_errors_signal(store)
            errors=form_errors_signal(store)
            on_submit=on_submit
            heading=config.heading
        />
    }
}
