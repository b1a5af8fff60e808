//! Order Form Context
//!
//! Form state provided via Leptos Context API so it outlives the form view.

use leptos::prelude::*;

use crate::config::OrderFormConfig;
use crate::form::OrderForm;

/// App-wide form signals provided via context
#[derive(Clone, Copy)]
pub struct OrderFormContext {
    /// Items and lifecycle phase of the order form
    pub form: RwSignal<OrderForm>,
    /// Loaded configuration
    pub config: StoredValue<OrderFormConfig>,
}

impl OrderFormContext {
    pub fn new(config: OrderFormConfig) -> Self {
        Self {
            form: RwSignal::new(OrderForm::new()),
            config: StoredValue::new(config),
        }
    }

    /// Drop in-progress entries
    pub fn clear(&self) {
        self.form.update(|f| f.items.reset());
    }
}

pub fn use_order_form() -> OrderFormContext {
    expect_context::<OrderFormContext>()
}
