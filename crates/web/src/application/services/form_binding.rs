//! Wiring the toggler to a form
//!
//! One composition path for every adapter: validate the configuration,
//! resolve all elements, subscribe to both selectors, then apply the initial
//! state. A failure at any step drops the subscriptions made so far.

use std::cell::RefCell;
use std::rc::Rc;

use kycform_domain::{ElementRole, IdDocumentKind};

use crate::application::services::{resolve_form_elements, SelectionToggler};
use crate::config::ToggleConfig;
use crate::error::ToggleError;
use crate::ports::outbound::{ChangeListenerPort, ElementLookupPort, Subscription};

/// A live toggler together with its listeners
#[derive(Debug)]
pub struct FormBinding {
    toggler: Rc<SelectionToggler>,
    subscriptions: Vec<Subscription>,
}

impl FormBinding {
    pub fn toggler(&self) -> &SelectionToggler {
        &self.toggler
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }
}

pub fn bind_form(
    lookup: &dyn ElementLookupPort,
    listeners: &dyn ChangeListenerPort,
    config: &ToggleConfig,
) -> Result<FormBinding, ToggleError> {
    config.validate()?;
    let elements = resolve_form_elements(lookup, &config.element_ids)?;
    let toggler = Rc::new(SelectionToggler::new(elements, config.unchecked_policy));

    let mut subscriptions = Vec::with_capacity(IdDocumentKind::all().len());
    for kind in IdDocumentKind::all() {
        let role = ElementRole::Selector(*kind);
        let listener_toggler = Rc::clone(&toggler);
        let subscription = listeners
            .listen(
                role,
                config.element_ids.id_for(role),
                Rc::new(move || {
                    listener_toggler.toggle();
                }),
            )
            .inspect_err(|e| tracing::error!("Failed to listen on {}: {}", role, e))?;
        subscriptions.push(subscription);
    }

    let outcome = toggler.toggle();
    tracing::info!(
        ?outcome,
        policy = ?toggler.policy(),
        "ID document toggler bound"
    );

    Ok(FormBinding {
        toggler,
        subscriptions,
    })
}

/// Holds at most one binding; a new binding replaces the old one only once
/// it has been established.
#[derive(Debug, Default)]
pub struct BindingSlot {
    binding: RefCell<Option<FormBinding>>,
}

impl BindingSlot {
    pub const fn new() -> Self {
        Self {
            binding: RefCell::new(None),
        }
    }

    /// Run `bind`; on success swap the result in and drop the previous
    /// binding, on failure keep the previous binding untouched.
    pub fn rebind(
        &self,
        bind: impl FnOnce() -> Result<FormBinding, ToggleError>,
    ) -> Result<(), ToggleError> {
        let binding = bind()?;
        let previous = self.binding.borrow_mut().replace(binding);
        drop(previous);
        Ok(())
    }

    /// Drop the binding and its listeners
    pub fn clear(&self) {
        let previous = self.binding.borrow_mut().take();
        drop(previous);
    }

    pub fn is_bound(&self) -> bool {
        self.binding.borrow().is_some()
    }

    pub fn current_mode(&self) -> Option<IdDocumentKind> {
        self.binding
            .borrow()
            .as_ref()
            .and_then(|binding| binding.toggler().current_mode())
    }
}
