//! Resolves every configured element before anything is wired
//!
//! Lookup is all-or-nothing: the first missing or mistyped element aborts
//! with an error naming it, so a half-bound form never reaches the user.

use std::rc::Rc;

use kycform_domain::{ElementIds, ElementRole, IdDocumentKind};

use crate::error::ToggleError;
use crate::ports::outbound::{
    ElementLookupPort, FieldGroupElements, FormElements, ModeSelectorPort,
};

pub fn resolve_form_elements(
    lookup: &dyn ElementLookupPort,
    ids: &ElementIds,
) -> Result<FormElements, ToggleError> {
    ids.validate()?;

    let aadhar_selector = resolve_selector(lookup, ids, IdDocumentKind::Aadhar)?;
    let pan_selector = resolve_selector(lookup, ids, IdDocumentKind::Pan)?;
    let aadhar = resolve_group(lookup, ids, IdDocumentKind::Aadhar)?;
    let pan = resolve_group(lookup, ids, IdDocumentKind::Pan)?;

    tracing::debug!("Resolved all {} form elements", ids.all().len());

    Ok(FormElements {
        aadhar_selector,
        pan_selector,
        aadhar,
        pan,
    })
}

fn resolve_selector(
    lookup: &dyn ElementLookupPort,
    ids: &ElementIds,
    kind: IdDocumentKind,
) -> Result<Rc<dyn ModeSelectorPort>, ToggleError> {
    let role = ElementRole::Selector(kind);
    lookup.selector(role, ids.id_for(role)).inspect_err(log_failure)
}

fn resolve_group(
    lookup: &dyn ElementLookupPort,
    ids: &ElementIds,
    kind: IdDocumentKind,
) -> Result<FieldGroupElements, ToggleError> {
    let fields = ElementRole::Fields(kind);
    let number = ElementRole::NumberInput(kind);
    let photo = ElementRole::PhotoInput(kind);

    Ok(FieldGroupElements {
        container: lookup
            .container(fields, ids.id_for(fields))
            .inspect_err(log_failure)?,
        number: lookup
            .text_input(number, ids.id_for(number))
            .inspect_err(log_failure)?,
        photo: lookup
            .file_input(photo, ids.id_for(photo))
            .inspect_err(log_failure)?,
    })
}

fn log_failure(err: &ToggleError) {
    tracing::error!("Form element lookup failed: {}", err);
}
