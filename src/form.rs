//! Order Form Controller
//!
//! Submit lifecycle of the order form: snapshot the list, run the validator,
//! report the outcome to the store and reset after a successful order.

use crate::item_list::ItemList;
use crate::models::{FormErrors, SubmissionRecord};

/// Key used for errors that do not belong to a single field
pub const FORM_LEVEL_ERROR: &str = "_form";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Validates a submission. Implemented by the app's validation rules.
pub trait Validator {
    fn validate(&self, record: &SubmissionRecord) -> Result<(), FormErrors>;
}

impl<F> Validator for F
where
    F: Fn(&SubmissionRecord) -> Result<(), FormErrors>,
{
    fn validate(&self, record: &SubmissionRecord) -> Result<(), FormErrors> {
        self(record)
    }
}

/// Store actions the form dispatches on submit outcomes
pub trait OrderActions {
    fn form_submit_failed(&self, errors: FormErrors);
    fn form_submit_succeeded(&self, record: SubmissionRecord);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmissionRecord),
    Rejected(FormErrors),
}

/// Form state: the editable list plus where the form is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub items: ItemList,
    phase: FormPhase,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            items: ItemList::with_blank_entry(),
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    fn transition(&mut self, next: FormPhase) {
        log::debug!("[FORM] {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Run one submit cycle. The form is back in `Editing` when this returns.
    pub fn submit<V, A>(&mut self, validator: &V, actions: &A) -> SubmitOutcome
    where
        V: Validator + ?Sized,
        A: OrderActions + ?Sized,
    {
        self.transition(FormPhase::Submitting);
        let record = self.items.snapshot();

        let outcome = match validator.validate(&record) {
            Ok(()) => {
                self.transition(FormPhase::Succeeded);
                log::info!("[FORM] Order accepted with {} item(s)", record.items.len());
                actions.form_submit_succeeded(record.clone());
                self.items.reset();
                SubmitOutcome::Accepted(record)
            }
            Err(mut errors) => {
                if errors.is_empty() {
                    errors.insert(FORM_LEVEL_ERROR, "Submission rejected");
                }
                self.transition(FormPhase::Failed);
                log::info!("[FORM] Order rejected with {} error(s)", errors.len());
                actions.form_submit_failed(errors.clone());
                SubmitOutcome::Rejected(errors)
            }
        };

        self.transition(FormPhase::Editing);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemEntry;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Dispatched {
        Failed(FormErrors),
        Succeeded(SubmissionRecord),
    }

    #[derive(Default)]
    struct RecordingActions {
        log: RefCell<Vec<Dispatched>>,
    }

    impl OrderActions for RecordingActions {
        fn form_submit_failed(&self, errors: FormErrors) {
            self.log.borrow_mut().push(Dispatched::Failed(errors));
        }

        fn form_submit_succeeded(&self, record: SubmissionRecord) {
            self.log.borrow_mut().push(Dispatched::Succeeded(record));
        }
    }

    fn accept(_: &SubmissionRecord) -> Result<(), FormErrors> {
        Ok(())
    }

    #[test]
    fn test_accepted_submit_dispatches_success_then_resets() {
        let mut form = OrderForm::new();
        form.items = ItemList::from_entries(vec![ItemEntry::new("Pizza", "Pasta")]);
        let actions = RecordingActions::default();

        let outcome = form.submit(&accept, &actions);

        let expected = SubmissionRecord {
            items: vec![ItemEntry::new("Pizza", "Pasta")],
        };
        assert_eq!(outcome, SubmitOutcome::Accepted(expected.clone()));
        assert_eq!(*actions.log.borrow(), vec![Dispatched::Succeeded(expected)]);
        assert_eq!(form.items, ItemList::with_blank_entry());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_rejected_submit_keeps_entries() {
        let mut form = OrderForm::new();
        form.items = ItemList::from_entries(vec![ItemEntry::new("", "Soup"), ItemEntry::new("Tea", "")]);
        let before = form.items.clone();
        let errors: FormErrors = [("items[0]-item", "Item #1 needs an item")].into_iter().collect();
        let rejecting = {
            let errors = errors.clone();
            move |_: &SubmissionRecord| -> Result<(), FormErrors> { Err(errors.clone()) }
        };
        let actions = RecordingActions::default();

        let outcome = form.submit(&rejecting, &actions);

        assert_eq!(outcome, SubmitOutcome::Rejected(errors.clone()));
        assert_eq!(*actions.log.borrow(), vec![Dispatched::Failed(errors)]);
        assert_eq!(form.items, before);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_empty_rejection_reports_form_level_error() {
        let mut form = OrderForm::new();
        let actions = RecordingActions::default();

        let reject_all = |_: &SubmissionRecord| -> Result<(), FormErrors> { Err(FormErrors::new()) };
        let outcome = form.submit(&reject_all, &actions);

        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.get(FORM_LEVEL_ERROR), Some("Submission rejected"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(actions.log.borrow().len(), 1);
    }

    #[test]
    fn test_validator_sees_current_entries() {
        let mut form = OrderForm::new();
        form.items.append();
        let seen = RefCell::new(None);
        let spy = |record: &SubmissionRecord| -> Result<(), FormErrors> {
            *seen.borrow_mut() = Some(record.items.len());
            Ok(())
        };

        form.submit(&spy, &RecordingActions::default());

        assert_eq!(*seen.borrow(), Some(2));
    }
}
