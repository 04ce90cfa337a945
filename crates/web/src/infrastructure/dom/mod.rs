//! DOM bindings
//!
//! Only compiled for the browser; native builds drive the toggler through
//! `infrastructure::testing` instead.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{DomContainer, DomFileInput, DomLookup, DomRadio, DomTextInput};
