//! Form element ports
//!
//! These traits abstract the handful of DOM attributes the toggler touches so
//! that:
//! 1. The toggling logic never calls into `web-sys` directly
//! 2. Browser bindings are isolated in `infrastructure::dom`
//! 3. The logic is testable with in-memory or mock elements

use std::fmt;
use std::rc::Rc;

use kycform_domain::{ElementRole, IdDocumentKind};

use crate::error::ToggleError;

/// A radio input choosing the active document kind
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ModeSelectorPort {
    fn is_checked(&self) -> bool;

    /// Check or uncheck the radio (used only for the default selection)
    fn set_checked(&self, checked: bool);
}

/// The element wrapping one field group
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait FieldContainerPort {
    /// Show (`display: block`) or hide (`display: none`) the group
    fn set_visible(&self, visible: bool);

    fn is_visible(&self) -> bool;
}

/// The document-number text input of a group
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait TextInputPort {
    fn set_required(&self, required: bool);

    fn is_required(&self) -> bool;
}

/// The document-photo file input of a group
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait FileInputPort {
    fn set_required(&self, required: bool);

    fn is_required(&self) -> bool;

    fn set_disabled(&self, disabled: bool);

    fn is_disabled(&self) -> bool;

    /// Set the form field name this input submits under
    fn set_name(&self, name: &str);

    fn name(&self) -> String;
}

/// Finds form elements by id and checks they are the right kind of element
///
/// Implemented over `web_sys::Document` in the browser and over an in-memory
/// element table in tests.
pub trait ElementLookupPort {
    fn selector(&self, role: ElementRole, id: &str)
        -> Result<Rc<dyn ModeSelectorPort>, ToggleError>;

    fn container(
        &self,
        role: ElementRole,
        id: &str,
    ) -> Result<Rc<dyn FieldContainerPort>, ToggleError>;

    fn text_input(&self, role: ElementRole, id: &str) -> Result<Rc<dyn TextInputPort>, ToggleError>;

    fn file_input(&self, role: ElementRole, id: &str) -> Result<Rc<dyn FileInputPort>, ToggleError>;
}

/// Registers `change` listeners on selector elements
pub trait ChangeListenerPort {
    /// Call `listener` on every change of the element `id`.
    ///
    /// The listener stays registered until the returned subscription drops.
    fn listen(
        &self,
        role: ElementRole,
        id: &str,
        listener: Rc<dyn Fn()>,
    ) -> Result<Subscription, ToggleError>;
}

/// A registered listener; dropping it removes the listener
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Handles for one document's field group
#[derive(Clone)]
pub struct FieldGroupElements {
    pub container: Rc<dyn FieldContainerPort>,
    pub number: Rc<dyn TextInputPort>,
    pub photo: Rc<dyn FileInputPort>,
}

/// Every handle the toggler needs, injected by the composition root
#[derive(Clone)]
pub struct FormElements {
    pub aadhar_selector: Rc<dyn ModeSelectorPort>,
    pub pan_selector: Rc<dyn ModeSelectorPort>,
    pub aadhar: FieldGroupElements,
    pub pan: FieldGroupElements,
}

impl FormElements {
    pub fn selector(&self, kind: IdDocumentKind) -> &Rc<dyn ModeSelectorPort> {
        match kind {
            IdDocumentKind::Aadhar => &self.aadhar_selector,
            IdDocumentKind::Pan => &self.pan_selector,
        }
    }

    pub fn group(&self, kind: IdDocumentKind) -> &FieldGroupElements {
        match kind {
            IdDocumentKind::Aadhar => &self.aadhar,
            IdDocumentKind::Pan => &self.pan,
        }
    }
}

impl fmt::Debug for FormElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormElements").finish_non_exhaustive()
    }
}
