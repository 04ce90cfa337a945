//! Browser side of the KYC registration form.
//!
//! Keeps the Aadhar and PAN field groups mutually exclusive: the selected
//! group is shown and required, the other is hidden, optional and has its
//! file input disabled and renamed so only one photo submits as `id_photo`.
//!
//! The logic lives behind ports (`ports::outbound`) so it runs unchanged
//! against the live DOM (`infrastructure::dom`, wasm32 only) and in-memory
//! elements (`infrastructure::testing`).

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ports;

#[cfg(target_arch = "wasm32")]
pub mod runner;

pub use application::services::{
    bind_form, resolve_form_elements, BindingSlot, FormBinding, SelectionToggler, ToggleOutcome,
};
pub use config::ToggleConfig;
pub use error::ToggleError;
