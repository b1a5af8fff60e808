//! Order Form App
//!
//! Root component: provides the store and form context, switches between
//! the order form and the order history.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CreateOrder, OrderHistory};
use crate::config::OrderFormConfig;
use crate::context::OrderFormContext;
use crate::store::{OrdersState, OrdersStateStoreFields};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Order,
    History,
}

#[component]
pub fn App(config: OrderFormConfig) -> impl IntoView {
    let store = Store::new(OrdersState::default());
    provide_context(store);
    // Form state lives here so switching pages keeps in-progress entries
    provide_context(OrderFormContext::new(config));

    let (page, set_page) = signal(Page::Order);
    let tab_class = move |p: Page| if page.get() == p { "page-tab active" } else { "page-tab" };

    view! {
        <div class="app-layout">
            <nav class="page-tabs">
                <button class=move || tab_class(Page::Order) on:click=move |_| set_page.set(Page::Order)>
                    "Order"
                </button>
                <button class=move || tab_class(Page::History) on:click=move |_| set_page.set(Page::History)>
                    {move || format!("History ({})", store.orders().with(|o| o.len()))}
                </button>
            </nav>

            <main class="main-content">
                {move || match page.get() {
                    Page::Order => view! { <CreateOrder /> }.into_any(),
                    Page::History => view! { <OrderHistory /> }.into_any(),
                }}
            </main>
        </div>
    }
}
