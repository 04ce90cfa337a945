//! Test utilities: in-memory form elements bound through the same
//! `bind_form` path the browser adapter uses.
//!
//! Available to other crates through the `testing` feature.

mod in_memory_form;

use kycform_domain::UncheckedPolicy;

pub use in_memory_form::{
    FormSnapshot, GroupSnapshot, InMemoryContainer, InMemoryElement, InMemoryFileInput,
    InMemoryForm, InMemoryRadio, InMemoryTextInput,
};

use crate::application::services::{bind_form, FormBinding};
use crate::config::ToggleConfig;
use crate::error::ToggleError;

/// Configuration addressing the ids `form` was built with
pub fn config_for(form: &InMemoryForm, policy: UncheckedPolicy) -> ToggleConfig {
    ToggleConfig {
        element_ids: form.ids().clone(),
        unchecked_policy: policy,
        ..ToggleConfig::default()
    }
}

/// Bind the toggler to `form`; dropping the result detaches it
pub fn bind_in_memory(
    form: &InMemoryForm,
    policy: UncheckedPolicy,
) -> Result<FormBinding, ToggleError> {
    bind_form(form, form, &config_for(form, policy))
}
