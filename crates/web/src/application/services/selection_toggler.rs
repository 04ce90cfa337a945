//! Selection Toggler - keeps the two ID document field groups in sync
//!
//! State is recomputed from the selectors on every call; the last applied
//! kind is remembered for diagnostics only.

use std::cell::Cell;

use kycform_domain::{IdDocumentKind, SubmissionPlan, UncheckedPolicy};

use crate::ports::outbound::{FieldGroupElements, FormElements};

/// Result of one recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A selector was checked and its plan applied
    Applied(IdDocumentKind),
    /// Nothing was checked; the selector was forced and its plan applied
    Defaulted(IdDocumentKind),
    /// Nothing was checked and the form was left untouched
    Unselected,
}

impl ToggleOutcome {
    pub fn kind(&self) -> Option<IdDocumentKind> {
        match self {
            ToggleOutcome::Applied(kind) | ToggleOutcome::Defaulted(kind) => Some(*kind),
            ToggleOutcome::Unselected => None,
        }
    }
}

#[derive(Debug)]
pub struct SelectionToggler {
    elements: FormElements,
    policy: UncheckedPolicy,
    current: Cell<Option<IdDocumentKind>>,
}

impl SelectionToggler {
    pub fn new(elements: FormElements, policy: UncheckedPolicy) -> Self {
        Self {
            elements,
            policy,
            current: Cell::new(None),
        }
    }

    pub fn policy(&self) -> UncheckedPolicy {
        self.policy
    }

    /// Kind applied by the most recent `toggle`/`apply`
    pub fn current_mode(&self) -> Option<IdDocumentKind> {
        self.current.get()
    }

    /// Which kind the selectors currently ask for.
    ///
    /// Aadhar takes precedence if markup lets both radios be checked.
    pub fn resolve_mode(&self) -> Option<IdDocumentKind> {
        IdDocumentKind::all()
            .iter()
            .copied()
            .find(|kind| self.elements.selector(*kind).is_checked())
    }

    /// Recompute the form state from the selectors
    pub fn toggle(&self) -> ToggleOutcome {
        if let Some(kind) = self.resolve_mode() {
            self.apply(kind);
            return ToggleOutcome::Applied(kind);
        }

        match self.policy {
            UncheckedPolicy::DefaultToAadhar => {
                let kind = IdDocumentKind::Aadhar;
                tracing::warn!(
                    "No ID document selector is checked; defaulting to {}",
                    kind.display_name()
                );
                self.elements.selector(kind).set_checked(true);
                self.elements.selector(kind.other()).set_checked(false);
                self.apply(kind);
                ToggleOutcome::Defaulted(kind)
            }
            UncheckedPolicy::Leave => {
                tracing::warn!("No ID document selector is checked; leaving form untouched");
                ToggleOutcome::Unselected
            }
        }
    }

    /// Write the plan for `kind` to both field groups
    pub fn apply(&self, kind: IdDocumentKind) {
        let plan = SubmissionPlan::for_kind(kind);
        for group_kind in IdDocumentKind::all() {
            apply_group(self.elements.group(*group_kind), &plan, *group_kind);
        }
        self.current.set(Some(kind));

        tracing::debug!(
            active = %kind,
            number_field = plan.number_field(),
            canonical = plan.canonical_file_field(),
            excluded = plan.excluded_file_field(),
            "Applied ID document selection"
        );
    }
}

fn apply_group(group: &FieldGroupElements, plan: &SubmissionPlan, kind: IdDocumentKind) {
    let state = plan.group_state(kind);
    group.container.set_visible(state.visible);
    group.number.set_required(state.required);
    group.photo.set_required(state.required);
    group.photo.set_disabled(state.file_disabled);
    group.photo.set_name(&state.file_name);
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use mockall::predicate::eq;

    use super::*;
    use crate::ports::outbound::{
        MockFieldContainerPort, MockFileInputPort, MockModeSelectorPort, MockTextInputPort,
    };

    fn selector(checked: bool) -> MockModeSelectorPort {
        let mut mock = MockModeSelectorPort::new();
        mock.expect_is_checked().return_const(checked);
        mock
    }

    fn expecting_group(visible: bool, disabled: bool, name: &'static str) -> FieldGroupElements {
        let mut container = MockFieldContainerPort::new();
        container
            .expect_set_visible()
            .with(eq(visible))
            .times(1)
            .return_const(());

        let mut number = MockTextInputPort::new();
        number
            .expect_set_required()
            .with(eq(visible))
            .times(1)
            .return_const(());

        let mut photo = MockFileInputPort::new();
        photo
            .expect_set_required()
            .with(eq(visible))
            .times(1)
            .return_const(());
        photo
            .expect_set_disabled()
            .with(eq(disabled))
            .times(1)
            .return_const(());
        photo
            .expect_set_name()
            .with(eq(name))
            .times(1)
            .return_const(());

        FieldGroupElements {
            container: Rc::new(container),
            number: Rc::new(number),
            photo: Rc::new(photo),
        }
    }

    fn untouched_group() -> FieldGroupElements {
        FieldGroupElements {
            container: Rc::new(MockFieldContainerPort::new()),
            number: Rc::new(MockTextInputPort::new()),
            photo: Rc::new(MockFileInputPort::new()),
        }
    }

    #[test]
    fn test_pan_checked_writes_pan_plan() {
        let elements = FormElements {
            aadhar_selector: Rc::new(selector(false)),
            pan_selector: Rc::new(selector(true)),
            aadhar: expecting_group(false, true, "id_photo_aadhar_disabled"),
            pan: expecting_group(true, false, "id_photo"),
        };
        let toggler = SelectionToggler::new(elements, UncheckedPolicy::DefaultToAadhar);

        assert_eq!(toggler.toggle(), ToggleOutcome::Applied(IdDocumentKind::Pan));
        assert_eq!(toggler.current_mode(), Some(IdDocumentKind::Pan));
    }

    #[test]
    fn test_both_checked_prefers_aadhar() {
        let elements = FormElements {
            aadhar_selector: Rc::new(selector(true)),
            pan_selector: Rc::new(selector(true)),
            aadhar: expecting_group(true, false, "id_photo"),
            pan: expecting_group(false, true, "id_photo_pan_disabled"),
        };
        let toggler = SelectionToggler::new(elements, UncheckedPolicy::Leave);

        assert_eq!(toggler.toggle(), ToggleOutcome::Applied(IdDocumentKind::Aadhar));
    }

    #[test]
    fn test_unchecked_with_leave_policy_touches_nothing() {
        let elements = FormElements {
            aadhar_selector: Rc::new(selector(false)),
            pan_selector: Rc::new(selector(false)),
            aadhar: untouched_group(),
            pan: untouched_group(),
        };
        let toggler = SelectionToggler::new(elements, UncheckedPolicy::Leave);

        assert_eq!(toggler.toggle(), ToggleOutcome::Unselected);
        assert_eq!(toggler.current_mode(), None);
    }

    #[test]
    fn test_unchecked_with_default_policy_checks_aadhar() {
        let mut aadhar_selector = selector(false);
        aadhar_selector
            .expect_set_checked()
            .with(eq(true))
            .times(1)
            .return_const(());
        let mut pan_selector = selector(false);
        pan_selector
            .expect_set_checked()
            .with(eq(false))
            .times(1)
            .return_const(());

        let elements = FormElements {
            aadhar_selector: Rc::new(aadhar_selector),
            pan_selector: Rc::new(pan_selector),
            aadhar: expecting_group(true, false, "id_photo"),
            pan: expecting_group(false, true, "id_photo_pan_disabled"),
        };
        let toggler = SelectionToggler::new(elements, UncheckedPolicy::DefaultToAadhar);

        let outcome = toggler.toggle();
        assert_eq!(outcome, ToggleOutcome::Defaulted(IdDocumentKind::Aadhar));
        assert_eq!(outcome.kind(), Some(IdDocumentKind::Aadhar));
    }
}
