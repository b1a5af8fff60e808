//! UI Components
//!
//! Reusable Leptos components.

mod input_field;
mod item_field;
mod item_list_editor;
mod form_errors;
mod submit_items;
mod create_order;
mod order_history;

pub use input_field::InputField;
pub use item_field::ItemField;
pub use item_list_editor::ItemListEditor;
pub use form_errors::FormErrorList;
pub use submit_items::SubmitItems;
pub use create_order::CreateOrder;
pub use order_history::OrderHistory;
