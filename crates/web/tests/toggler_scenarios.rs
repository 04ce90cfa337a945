//! End-to-end toggling scenarios against in-memory form elements.
//!
//! Tests cover:
//! - Initial state for each pre-selected document
//! - User switching between documents, in any order
//! - The unchecked-selector policies
//! - Fail-fast binding when markup is missing or wrong
//! - Listener lifetime: rollback, detach on drop, replacing a binding

use kycform_domain::{DomainError, ElementRole, IdDocumentKind, SubmissionPlan, UncheckedPolicy};
use kycform_web::infrastructure::testing::{
    bind_in_memory, config_for, InMemoryElement, InMemoryForm,
};
use kycform_web::{bind_form, BindingSlot, ToggleError, ToggleOutcome};

fn setup() {
    kycform_web::logging::init(tracing::Level::DEBUG);
}

fn assert_matches_plan(form: &InMemoryForm, kind: IdDocumentKind) {
    let snapshot = form.snapshot();
    let plan = SubmissionPlan::for_kind(kind);
    for group in IdDocumentKind::all() {
        assert!(
            snapshot.group(*group).matches(&plan, *group),
            "{group} group does not match the {kind} plan: {snapshot:?}"
        );
    }
    assert_eq!(snapshot.active_kind(), Ok(kind));
}

/// Test: Aadhar pre-selected shows Aadhar and parks the PAN photo.
#[test]
fn test_initial_aadhar_selection() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));

    let binding = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap();

    assert_matches_plan(&form, IdDocumentKind::Aadhar);
    let snapshot = form.snapshot();
    assert_eq!(snapshot.aadhar.photo_name, "id_photo");
    assert_eq!(snapshot.pan.photo_name, "id_photo_pan_disabled");
    assert!(snapshot.pan.photo_disabled);
    assert_eq!(binding.toggler().current_mode(), Some(IdDocumentKind::Aadhar));
    assert_eq!(binding.listener_count(), 2);
}

/// Test: PAN pre-selected is the mirror image.
#[test]
fn test_initial_pan_selection() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Pan));

    let _binding = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap();

    assert_matches_plan(&form, IdDocumentKind::Pan);
    assert_eq!(form.snapshot().aadhar.photo_name, "id_photo_aadhar_disabled");
}

/// Test: Selecting PAN after Aadhar moves the canonical name across.
#[test]
fn test_user_selects_pan() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    let binding = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap();

    form.select(IdDocumentKind::Pan);

    assert_matches_plan(&form, IdDocumentKind::Pan);
    let snapshot = form.snapshot();
    assert!(!snapshot.aadhar.visible);
    assert!(!snapshot.aadhar.number_required);
    assert!(snapshot.aadhar.photo_disabled);
    assert_eq!(binding.toggler().current_mode(), Some(IdDocumentKind::Pan));
}

/// Test: A -> B -> A ends exactly where a fresh A selection does.
#[test]
fn test_round_trip_restores_initial_state() {
    setup();
    let fresh = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    let _fresh_binding = bind_in_memory(&fresh, UncheckedPolicy::DefaultToAadhar).unwrap();

    let toggled = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    let _binding = bind_in_memory(&toggled, UncheckedPolicy::DefaultToAadhar).unwrap();
    toggled.select(IdDocumentKind::Pan);
    toggled.select(IdDocumentKind::Aadhar);

    assert_eq!(toggled.snapshot(), fresh.snapshot());
}

/// Test: Any selection sequence ends in the state of its last selection.
#[test]
fn test_final_state_follows_last_selection() {
    setup();
    let sequences: &[&[IdDocumentKind]] = &[
        &[IdDocumentKind::Pan],
        &[IdDocumentKind::Pan, IdDocumentKind::Pan],
        &[IdDocumentKind::Aadhar, IdDocumentKind::Pan, IdDocumentKind::Aadhar],
        &[IdDocumentKind::Pan, IdDocumentKind::Aadhar, IdDocumentKind::Pan],
    ];

    for sequence in sequences {
        let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
        let _binding = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap();
        for kind in *sequence {
            form.select(*kind);
            // Invariant holds after every event, not just the last
            assert_eq!(form.snapshot().active_kind(), Ok(*kind));
        }
        if let Some(last) = sequence.last() {
            assert_matches_plan(&form, *last);
        }
    }
}

/// Test: Nothing checked defaults to Aadhar and checks its radio.
#[test]
fn test_unchecked_defaults_to_aadhar() {
    setup();
    let form = InMemoryForm::new(None);

    let binding = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap();

    assert_matches_plan(&form, IdDocumentKind::Aadhar);
    assert!(form.snapshot().aadhar_checked);
    assert!(!form.snapshot().pan_checked);
    assert_eq!(binding.toggler().toggle(), ToggleOutcome::Applied(IdDocumentKind::Aadhar));
}

/// Test: Nothing checked with the leave policy keeps the markup untouched.
#[test]
fn test_unchecked_leave_policy_is_a_no_op() {
    setup();
    let form = InMemoryForm::new(None);
    let before = form.snapshot();

    let binding = bind_in_memory(&form, UncheckedPolicy::Leave).unwrap();

    assert_eq!(form.snapshot(), before);
    assert_eq!(binding.toggler().toggle(), ToggleOutcome::Unselected);
    assert_eq!(binding.toggler().current_mode(), None);

    // A later user choice still takes effect
    form.select(IdDocumentKind::Pan);
    assert_matches_plan(&form, IdDocumentKind::Pan);
}

/// Test: Malformed markup with both radios checked resolves to Aadhar.
#[test]
fn test_both_checked_prefers_aadhar() {
    setup();
    let form = InMemoryForm::ungrouped(true, true);

    let binding = bind_in_memory(&form, UncheckedPolicy::Leave).unwrap();

    assert_eq!(binding.toggler().resolve_mode(), Some(IdDocumentKind::Aadhar));
    assert_matches_plan(&form, IdDocumentKind::Aadhar);
}

/// Test: A missing element aborts binding before any listener is attached.
#[test]
fn test_missing_element_fails_loudly() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    form.remove_element("id_photo_pan");
    let before = form.snapshot();

    let err = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap_err();

    assert_eq!(
        err,
        ToggleError::missing(ElementRole::PhotoInput(IdDocumentKind::Pan), "id_photo_pan")
    );
    assert_eq!(form.listener_count(), 0);
    assert_eq!(form.snapshot(), before);
}

/// Test: An element of the wrong kind is reported with the expected kind.
#[test]
fn test_wrong_element_type_fails_loudly() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    form.replace_element(
        "aadhar_fields",
        InMemoryElement::Text(std::rc::Rc::default()),
    );

    let err = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap_err();

    match err {
        ToggleError::WrongElementType { id, expected, .. } => {
            assert_eq!(id, "aadhar_fields");
            assert_eq!(expected, "container element");
        }
        other => panic!("Expected WrongElementType, got {other:?}"),
    }
    assert_eq!(form.listener_count(), 0);
}

/// Test: A listener refused on the second radio detaches the first one.
#[test]
fn test_listener_failure_rolls_back_earlier_listeners() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    form.refuse_listeners_on("pan");
    let before = form.snapshot();

    let err = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap_err();

    assert!(matches!(err, ToggleError::Listener(ref msg) if msg.contains("pan")));
    assert_eq!(form.listener_count(), 0);
    assert_eq!(form.snapshot(), before);

    // Nothing is left listening to a user selection
    form.select(IdDocumentKind::Pan);
    assert!(form.snapshot().active_kind().is_err());
}

/// Test: Dropping a binding detaches it from the form.
#[test]
fn test_dropping_binding_removes_listeners() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    let binding = bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar).unwrap();
    assert_eq!(form.listener_count(), 2);

    drop(binding);
    assert_eq!(form.listener_count(), 0);

    form.select(IdDocumentKind::Pan);
    let snapshot = form.snapshot();
    assert!(snapshot.pan_checked);
    assert!(!snapshot.pan.visible);
    assert!(snapshot.aadhar.visible);
}

/// Test: Rebinding swaps the old listeners for the new ones.
#[test]
fn test_rebind_replaces_previous_binding() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    let slot = BindingSlot::new();

    slot.rebind(|| bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar))
        .unwrap();
    slot.rebind(|| bind_in_memory(&form, UncheckedPolicy::Leave))
        .unwrap();

    assert_eq!(form.listener_count(), 2);
    form.select(IdDocumentKind::Pan);
    assert_eq!(slot.current_mode(), Some(IdDocumentKind::Pan));
    assert_matches_plan(&form, IdDocumentKind::Pan);
}

/// Test: A failed rebind leaves the working binding in place.
#[test]
fn test_failed_rebind_keeps_previous_binding() {
    setup();
    let form = InMemoryForm::new(Some(IdDocumentKind::Aadhar));
    let slot = BindingSlot::new();
    slot.rebind(|| bind_in_memory(&form, UncheckedPolicy::DefaultToAadhar))
        .unwrap();

    let mut bad_config = config_for(&form, UncheckedPolicy::DefaultToAadhar);
    bad_config.element_ids.pan.selector = "pan_radio".to_string();
    let err = slot
        .rebind(|| bind_form(&form, &form, &bad_config))
        .unwrap_err();

    assert_eq!(
        err,
        ToggleError::missing(ElementRole::Selector(IdDocumentKind::Pan), "pan_radio")
    );
    assert!(slot.is_bound());
    assert_eq!(form.listener_count(), 2);

    form.select(IdDocumentKind::Pan);
    assert_eq!(slot.current_mode(), Some(IdDocumentKind::Pan));
    assert_matches_plan(&form, IdDocumentKind::Pan);

    slot.clear();
    assert!(!slot.is_bound());
    assert_eq!(form.listener_count(), 0);
}

/// Test: Duplicate element ids are rejected before the form is touched.
#[test]
fn test_bind_rejects_duplicate_ids() {
    setup();
    let form = InMemoryForm::new(None);
    let before = form.snapshot();
    let mut config = config_for(&form, UncheckedPolicy::DefaultToAadhar);
    config.element_ids.pan.photo = config.element_ids.aadhar.photo.clone();

    let err = bind_form(&form, &form, &config).unwrap_err();

    assert!(matches!(err, ToggleError::Domain(DomainError::Validation(_))));
    assert_eq!(form.listener_count(), 0);
    assert_eq!(form.snapshot(), before);
}
