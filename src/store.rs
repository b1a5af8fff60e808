//! Global Order State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::OrderActions;
use crate::models::{FormErrors, SubmissionRecord};

/// Global order state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct OrdersState {
    /// Errors reported by the last rejected submit
    pub form_errors: FormErrors,
    /// Set when the last submit was rejected
    pub submit_failed: bool,
    /// Orders accepted so far, oldest first
    pub orders: Vec<SubmissionRecord>,
}

impl OrdersState {
    pub fn apply_submit_failed(&mut self, errors: FormErrors) {
        self.form_errors = errors;
        self.submit_failed = true;
    }

    pub fn apply_submit_succeeded(&mut self, record: SubmissionRecord) {
        self.form_errors = FormErrors::new();
        self.submit_failed = false;
        self.orders.push(record);
    }
}

// ========================
// Selectors
// ========================

pub fn form_has_errors(state: &OrdersState) -> bool {
    state.submit_failed && !state.form_errors.is_empty()
}

pub fn get_form_errors(state: &OrdersState) -> FormErrors {
    state.form_errors.clone()
}

/// Type alias for the store
pub type OrdersStore = Store<OrdersState>;

/// Get the orders store from context
pub fn use_orders_store() -> OrdersStore {
    expect_context::<OrdersStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Reactive `form_has_errors`
pub fn form_has_errors_signal(store: OrdersStore) -> Signal<bool> {
    Signal::derive(move || store.with(form_has_errors))
}

/// Reactive `get_form_errors`
pub fn form_errors_signal(store: OrdersStore) -> Signal<FormErrors> {
    Signal::derive(move || store.with(get_form_errors))
}

pub fn store_form_submit_failed(store: &OrdersStore, errors: FormErrors) {
    store.update(|state| state.apply_submit_failed(errors));
}

pub fn store_form_submit_succeeded(store: &OrdersStore, record: SubmissionRecord) {
    store.update(|state| state.apply_submit_succeeded(record));
}

/// Dispatches form outcomes into the store
#[derive(Clone, Copy)]
pub struct StoreActions(pub OrdersStore);

impl OrderActions for StoreActions {
    fn form_submit_failed(&self, errors: FormErrors) {
        store_form_submit_failed(&self.0, errors);
    }

    fn form_submit_succeeded(&self, record: SubmissionRecord) {
        store_form_submit_succeeded(&self.0, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::OrderForm;
    use crate::item_list::{EntryField, ItemList};
    use crate::models::ItemEntry;
    use crate::validation::OrderValidator;

    fn errors() -> FormErrors {
        [("items[0]-item", "Please enter an item")].into_iter().collect()
    }

    #[test]
    fn test_failed_submit_populates_errors() {
        let mut state = OrdersState::default();
        assert!(!form_has_errors(&state));

        state.apply_submit_failed(errors());

        assert!(form_has_errors(&state));
        assert_eq!(get_form_errors(&state), errors());
        assert!(state.orders.is_empty());
    }

    #[test]
    fn test_successful_submit_clears_errors_and_records_order() {
        let mut state = OrdersState::default();
        state.apply_submit_failed(errors());

        let record = SubmissionRecord {
            items: vec![ItemEntry::new("Pizza", "Pasta")],
        };
        state.apply_submit_succeeded(record.clone());

        assert!(!form_has_errors(&state));
        assert!(get_form_errors(&state).is_empty());
        assert_eq!(state.orders, vec![record]);
    }

    #[test]
    fn test_failure_with_no_errors_is_not_displayed() {
        let mut state = OrdersState::default();
        state.apply_submit_failed(FormErrors::new());
        assert!(!form_has_errors(&state));
    }

    #[test]
    fn test_submit_through_store_actions() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(OrdersState::default());
            let actions = StoreActions(store);
            let has_errors = form_has_errors_signal(store);
            let errors = form_errors_signal(store);
            let mut form = OrderForm::new();

            form.submit(&OrderValidator, &actions);

            assert!(has_errors.get_untracked());
            assert!(errors.get_untracked().get("items[0]-item").is_some());
            assert!(store.orders().get_untracked().is_empty());

            form.items.update(0, EntryField::Item, "Pizza".to_string()).unwrap();
            form.items.update(0, EntryField::Fallback, "Pasta".to_string()).unwrap();
            form.submit(&OrderValidator, &actions);

            assert!(!has_errors.get_untracked());
            assert!(errors.get_untracked().is_empty());
            assert_eq!(
                store.orders().get_untracked(),
                vec![SubmissionRecord {
                    items: vec![ItemEntry::new("Pizza", "Pasta")],
                }]
            );
            assert_eq!(form.items, ItemList::with_blank_entry());
        });
    }
}
