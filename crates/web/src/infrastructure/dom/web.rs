//! Browser DOM adapter using web-sys
//!
//! Wraps the real form elements behind the outbound ports and registers the
//! `change` listeners that drive the toggler. Each listener lives in a
//! `Subscription`, so dropping the binding detaches it.

use std::rc::Rc;

use kycform_domain::ElementRole;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState, Element, Event, HtmlElement, HtmlInputElement};

use crate::error::ToggleError;
use crate::ports::outbound::{
    ChangeListenerPort, ElementLookupPort, FieldContainerPort, FileInputPort, ModeSelectorPort,
    Subscription, TextInputPort,
};

const CHANGE_EVENT: &str = "change";

/// Radio input choosing a document kind
pub struct DomRadio(HtmlInputElement);

impl ModeSelectorPort for DomRadio {
    fn is_checked(&self) -> bool {
        self.0.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.0.set_checked(checked);
    }
}

/// Field group wrapper shown/hidden through `style.display`
pub struct DomContainer(HtmlElement);

impl FieldContainerPort for DomContainer {
    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.0.style().set_property("display", display) {
            tracing::warn!("Failed to set display on #{}: {:?}", self.0.id(), e);
        }
    }

    fn is_visible(&self) -> bool {
        self.0
            .style()
            .get_property_value("display")
            .map(|display| display != "none")
            .unwrap_or(true)
    }
}

pub struct DomTextInput(HtmlInputElement);

impl TextInputPort for DomTextInput {
    fn set_required(&self, required: bool) {
        self.0.set_required(required);
    }

    fn is_required(&self) -> bool {
        self.0.required()
    }
}

pub struct DomFileInput(HtmlInputElement);

impl FileInputPort for DomFileInput {
    fn set_required(&self, required: bool) {
        self.0.set_required(required);
    }

    fn is_required(&self) -> bool {
        self.0.required()
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_name(&self, name: &str) {
        self.0.set_name(name);
    }

    fn name(&self) -> String {
        self.0.name()
    }
}

/// Element lookup over the live document
pub struct DomLookup {
    document: Document,
}

impl DomLookup {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self, ToggleError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or(ToggleError::NoDocument)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the parser is still building the document
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == DocumentReadyState::Loading
    }

    /// Run `f` once on `DOMContentLoaded`
    pub fn on_parsed(self, f: impl FnOnce(&DomLookup) + 'static) -> Result<(), ToggleError> {
        let document = self.document.clone();
        let callback = Closure::once_into_js(move || f(&self));
        document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .map_err(|e| ToggleError::Listener(format!("{e:?}")))
    }

    fn element(&self, role: ElementRole, id: &str) -> Result<Element, ToggleError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ToggleError::missing(role, id))
    }

    fn input(
        &self,
        role: ElementRole,
        id: &str,
        accepts: impl Fn(&str) -> bool,
    ) -> Result<HtmlInputElement, ToggleError> {
        let input = self
            .element(role, id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ToggleError::wrong_type(role, id))?;
        if accepts(&input.type_().to_ascii_lowercase()) {
            Ok(input)
        } else {
            Err(ToggleError::wrong_type(role, id))
        }
    }
}

impl ElementLookupPort for DomLookup {
    fn selector(
        &self,
        role: ElementRole,
        id: &str,
    ) -> Result<Rc<dyn ModeSelectorPort>, ToggleError> {
        let input = self.input(role, id, |kind| kind == "radio")?;
        Ok(Rc::new(DomRadio(input)))
    }

    fn container(
        &self,
        role: ElementRole,
        id: &str,
    ) -> Result<Rc<dyn FieldContainerPort>, ToggleError> {
        let element = self
            .element(role, id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ToggleError::wrong_type(role, id))?;
        Ok(Rc::new(DomContainer(element)))
    }

    fn text_input(&self, role: ElementRole, id: &str) -> Result<Rc<dyn TextInputPort>, ToggleError> {
        // Number fields may be typed text, number or tel
        let input = self.input(role, id, |kind| {
            !matches!(kind, "radio" | "checkbox" | "file" | "submit" | "button")
        })?;
        Ok(Rc::new(DomTextInput(input)))
    }

    fn file_input(&self, role: ElementRole, id: &str) -> Result<Rc<dyn FileInputPort>, ToggleError> {
        let input = self.input(role, id, |kind| kind == "file")?;
        Ok(Rc::new(DomFileInput(input)))
    }
}

impl ChangeListenerPort for DomLookup {
    fn listen(
        &self,
        role: ElementRole,
        id: &str,
        listener: Rc<dyn Fn()>,
    ) -> Result<Subscription, ToggleError> {
        let radio = self.input(role, id, |kind| kind == "radio")?;
        let on_change = Closure::<dyn FnMut(_)>::new(move |_event: Event| listener());
        radio
            .add_event_listener_with_callback(CHANGE_EVENT, on_change.as_ref().unchecked_ref())
            .map_err(|e| ToggleError::Listener(format!("{e:?}")))?;

        Ok(Subscription::new(move || {
            if let Err(e) = radio.remove_event_listener_with_callback(
                CHANGE_EVENT,
                on_change.as_ref().unchecked_ref(),
            ) {
                tracing::debug!("Failed to remove change listener from #{}: {:?}", radio.id(), e);
            }
        }))
    }
}
