//! Order History Component
//!
//! Orders accepted in this session, newest first.

use leptos::prelude::*;

use crate::models::ItemEntry;
use crate::store::{use_orders_store, OrdersStateStoreFields};

fn describe(entry: &ItemEntry) -> String {
    if entry.fallback.trim().is_empty() {
        entry.item.clone()
    } else {
        format!("{} (or {})", entry.item, entry.fallback)
    }
}

#[component]
pub fn OrderHistory() -> impl IntoView {
    let store = use_orders_store();
    let orders = move || store.orders().get();

    view! {
        <div class="order-history">
            <Show
                when=move || !orders().is_empty()
                fallback=|| view! { <p class="order-history-empty">"No orders yet"</p> }
            >
                <ol class="order-history-list">
                    {move || orders()
                        .into_iter()
                        .enumerate()
                        .rev()
                        .map(|(n, order)| view! {
                            <li class="order-history-entry">
                                <span class="order-number">{format!("Order {}", n + 1)}</span>
                                <ul>
                                    {order.items.iter()
                                        .map(|entry| view! { <li>{describe(entry)}</li> })
                                        .collect_view()}
                                </ul>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </Show>
        </div>
    }
}
