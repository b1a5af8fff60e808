//! Order Validation
//!
//! Default submit rules for the order form.

use crate::field_label::{FieldKind, FieldName};
use crate::form::Validator;
use crate::models::{FormErrors, SubmissionRecord};

/// Every line needs an item; the fallback is optional but must differ from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderValidator;

impl Validator for OrderValidator {
    fn validate(&self, record: &SubmissionRecord) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        for (index, entry) in record.items.iter().enumerate() {
            let item = entry.item.trim();
            let fallback = entry.fallback.trim();

            if item.is_empty() {
                errors.insert(
                    FieldName::new(index, FieldKind::Item).qualified(),
                    "Please enter an item",
                );
            } else if !fallback.is_empty() && fallback.eq_ignore_ascii_case(item) {
                errors.insert(
                    FieldName::new(index, FieldKind::Fallback).qualified(),
                    "Fallback must be different from the item",
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
