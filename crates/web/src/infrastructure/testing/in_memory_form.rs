//! In-memory form elements
//!
//! Stand-ins for the DOM elements of the registration form. Radios linked into
//! one group behave like a native radio group: checking one unchecks its
//! peer. Change listeners fire only for user-driven `select` calls, and only
//! on the clicked radio, matching browsers, which do not dispatch `change`
//! for programmatic updates.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use kycform_domain::{ElementIds, ElementRole, IdDocumentKind, SubmissionPlan};

use crate::error::ToggleError;
use crate::ports::outbound::{
    ChangeListenerPort, ElementLookupPort, FieldContainerPort, FileInputPort, ModeSelectorPort,
    Subscription, TextInputPort,
};

#[derive(Debug, Default)]
pub struct InMemoryRadio {
    checked: Cell<bool>,
    peer: RefCell<Weak<InMemoryRadio>>,
}

impl InMemoryRadio {
    fn link(a: &Rc<Self>, b: &Rc<Self>) {
        *a.peer.borrow_mut() = Rc::downgrade(b);
        *b.peer.borrow_mut() = Rc::downgrade(a);
    }
}

impl ModeSelectorPort for InMemoryRadio {
    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
        if checked {
            if let Some(peer) = self.peer.borrow().upgrade() {
                peer.checked.set(false);
            }
        }
    }
}

#[derive(Debug)]
pub struct InMemoryContainer {
    visible: Cell<bool>,
}

impl Default for InMemoryContainer {
    fn default() -> Self {
        // Unstyled containers render visible
        Self {
            visible: Cell::new(true),
        }
    }
}

impl FieldContainerPort for InMemoryContainer {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTextInput {
    required: Cell<bool>,
}

impl TextInputPort for InMemoryTextInput {
    fn set_required(&self, required: bool) {
        self.required.set(required);
    }

    fn is_required(&self) -> bool {
        self.required.get()
    }
}

#[derive(Debug)]
pub struct InMemoryFileInput {
    required: Cell<bool>,
    disabled: Cell<bool>,
    name: RefCell<String>,
}

impl InMemoryFileInput {
    pub fn named(name: &str) -> Self {
        Self {
            required: Cell::new(false),
            disabled: Cell::new(false),
            name: RefCell::new(name.to_string()),
        }
    }
}

impl FileInputPort for InMemoryFileInput {
    fn set_required(&self, required: bool) {
        self.required.set(required);
    }

    fn is_required(&self) -> bool {
        self.required.get()
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn set_name(&self, name: &str) {
        *self.name.borrow_mut() = name.to_string();
    }

    fn name(&self) -> String {
        self.name.borrow().clone()
    }
}

/// An element registered under an id
#[derive(Debug, Clone)]
pub enum InMemoryElement {
    Radio(Rc<InMemoryRadio>),
    Container(Rc<InMemoryContainer>),
    Text(Rc<InMemoryTextInput>),
    File(Rc<InMemoryFileInput>),
}

/// Observed attributes of one field group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSnapshot {
    pub visible: bool,
    pub number_required: bool,
    pub photo_required: bool,
    pub photo_disabled: bool,
    pub photo_name: String,
}

impl GroupSnapshot {
    /// Whether the group carries exactly the attributes `plan` asks for
    pub fn matches(&self, plan: &SubmissionPlan, kind: IdDocumentKind) -> bool {
        let target = plan.group_state(kind);
        self.visible == target.visible
            && self.number_required == target.required
            && self.photo_required == target.required
            && self.photo_disabled == target.file_disabled
            && self.photo_name == target.file_name
    }

    fn is_active(&self) -> bool {
        self.visible && self.number_required && self.photo_required
    }

    fn submits_canonical(&self) -> bool {
        !self.photo_disabled && self.photo_name == kycform_domain::CANONICAL_FILE_FIELD
    }
}

/// Observed state of the whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub aadhar_checked: bool,
    pub pan_checked: bool,
    pub aadhar: GroupSnapshot,
    pub pan: GroupSnapshot,
}

impl FormSnapshot {
    pub fn group(&self, kind: IdDocumentKind) -> &GroupSnapshot {
        match kind {
            IdDocumentKind::Aadhar => &self.aadhar,
            IdDocumentKind::Pan => &self.pan,
        }
    }

    /// Check the one-active-group invariant, returning the active kind.
    ///
    /// Exactly one group must be visible and required, the other hidden and
    /// optional, and only the active file input may submit as `id_photo`.
    pub fn active_kind(&self) -> Result<IdDocumentKind, String> {
        let active: Vec<IdDocumentKind> = IdDocumentKind::all()
            .iter()
            .copied()
            .filter(|kind| self.group(*kind).is_active())
            .collect();
        let [kind] = active.as_slice() else {
            return Err(format!("expected one active group, found {active:?}"));
        };
        let inactive = self.group(kind.other());
        if inactive.visible || inactive.number_required || inactive.photo_required {
            return Err(format!("{} group is not fully inactive", kind.other()));
        }
        if !self.group(*kind).submits_canonical() || inactive.submits_canonical() {
            return Err("canonical file field is not unique to the active group".to_string());
        }
        Ok(*kind)
    }
}

struct RegisteredListener {
    token: u64,
    id: String,
    listener: Rc<dyn Fn()>,
}

type ListenerTable = Rc<RefCell<Vec<RegisteredListener>>>;

/// A complete in-memory registration form
pub struct InMemoryForm {
    elements: RefCell<HashMap<String, InMemoryElement>>,
    ids: ElementIds,
    aadhar_radio: Rc<InMemoryRadio>,
    pan_radio: Rc<InMemoryRadio>,
    containers: [Rc<InMemoryContainer>; 2],
    numbers: [Rc<InMemoryTextInput>; 2],
    photos: [Rc<InMemoryFileInput>; 2],
    listeners: ListenerTable,
    next_token: Cell<u64>,
    refused_listener_id: RefCell<Option<String>>,
}

impl InMemoryForm {
    /// Form with a native radio group and `initial` pre-checked
    pub fn new(initial: Option<IdDocumentKind>) -> Self {
        let form = Self::build(ElementIds::default());
        InMemoryRadio::link(&form.aadhar_radio, &form.pan_radio);
        if let Some(kind) = initial {
            form.radio(kind).set_checked(true);
        }
        form
    }

    /// Form whose radios are not grouped, so both may be checked at once
    pub fn ungrouped(aadhar_checked: bool, pan_checked: bool) -> Self {
        let form = Self::build(ElementIds::default());
        form.aadhar_radio.checked.set(aadhar_checked);
        form.pan_radio.checked.set(pan_checked);
        form
    }

    fn build(ids: ElementIds) -> Self {
        let aadhar_radio = Rc::new(InMemoryRadio::default());
        let pan_radio = Rc::new(InMemoryRadio::default());
        // Template markup names both photo inputs canonically until toggled
        let containers = [Rc::default(), Rc::default()];
        let numbers = [Rc::default(), Rc::default()];
        let photos = [
            Rc::new(InMemoryFileInput::named(kycform_domain::CANONICAL_FILE_FIELD)),
            Rc::new(InMemoryFileInput::named(kycform_domain::CANONICAL_FILE_FIELD)),
        ];

        let mut elements = HashMap::new();
        for kind in IdDocumentKind::all() {
            let group = ids.group(*kind);
            let i = Self::index(*kind);
            let radio = match kind {
                IdDocumentKind::Aadhar => Rc::clone(&aadhar_radio),
                IdDocumentKind::Pan => Rc::clone(&pan_radio),
            };
            elements.insert(group.selector.clone(), InMemoryElement::Radio(radio));
            elements.insert(
                group.fields.clone(),
                InMemoryElement::Container(Rc::clone(&containers[i])),
            );
            elements.insert(
                group.number.clone(),
                InMemoryElement::Text(Rc::clone(&numbers[i])),
            );
            elements.insert(
                group.photo.clone(),
                InMemoryElement::File(Rc::clone(&photos[i])),
            );
        }

        Self {
            elements: RefCell::new(elements),
            ids,
            aadhar_radio,
            pan_radio,
            containers,
            numbers,
            photos,
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_token: Cell::new(0),
            refused_listener_id: RefCell::new(None),
        }
    }

    fn index(kind: IdDocumentKind) -> usize {
        match kind {
            IdDocumentKind::Aadhar => 0,
            IdDocumentKind::Pan => 1,
        }
    }

    fn radio(&self, kind: IdDocumentKind) -> &Rc<InMemoryRadio> {
        match kind {
            IdDocumentKind::Aadhar => &self.aadhar_radio,
            IdDocumentKind::Pan => &self.pan_radio,
        }
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Drop an element from the page
    pub fn remove_element(&self, id: &str) -> Option<InMemoryElement> {
        self.elements.borrow_mut().remove(id)
    }

    /// Put a different element under an existing id
    pub fn replace_element(&self, id: &str, element: InMemoryElement) {
        self.elements.borrow_mut().insert(id.to_string(), element);
    }

    /// Make listener registration on `id` fail
    pub fn refuse_listeners_on(&self, id: &str) {
        *self.refused_listener_id.borrow_mut() = Some(id.to_string());
    }

    /// Number of registered change listeners across all elements
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Simulate the user clicking the radio for `kind`
    pub fn select(&self, kind: IdDocumentKind) {
        self.radio(kind).set_checked(true);
        let id = &self.ids.group(kind).selector;
        let listeners: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|registered| &registered.id == id)
            .map(|registered| Rc::clone(&registered.listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let group = |kind: IdDocumentKind| {
            let i = Self::index(kind);
            GroupSnapshot {
                visible: self.containers[i].is_visible(),
                number_required: self.numbers[i].is_required(),
                photo_required: self.photos[i].is_required(),
                photo_disabled: self.photos[i].is_disabled(),
                photo_name: self.photos[i].name(),
            }
        };
        FormSnapshot {
            aadhar_checked: self.aadhar_radio.is_checked(),
            pan_checked: self.pan_radio.is_checked(),
            aadhar: group(IdDocumentKind::Aadhar),
            pan: group(IdDocumentKind::Pan),
        }
    }

    fn element(&self, role: ElementRole, id: &str) -> Result<InMemoryElement, ToggleError> {
        self.elements
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| ToggleError::missing(role, id))
    }
}

impl ElementLookupPort for InMemoryForm {
    fn selector(
        &self,
        role: ElementRole,
        id: &str,
    ) -> Result<Rc<dyn ModeSelectorPort>, ToggleError> {
        match self.element(role, id)? {
            InMemoryElement::Radio(radio) => Ok(radio),
            _ => Err(ToggleError::wrong_type(role, id)),
        }
    }

    fn container(
        &self,
        role: ElementRole,
        id: &str,
    ) -> Result<Rc<dyn FieldContainerPort>, ToggleError> {
        match self.element(role, id)? {
            InMemoryElement::Container(container) => Ok(container),
            _ => Err(ToggleError::wrong_type(role, id)),
        }
    }

    fn text_input(&self, role: ElementRole, id: &str) -> Result<Rc<dyn TextInputPort>, ToggleError> {
        match self.element(role, id)? {
            InMemoryElement::Text(input) => Ok(input),
            _ => Err(ToggleError::wrong_type(role, id)),
        }
    }

    fn file_input(&self, role: ElementRole, id: &str) -> Result<Rc<dyn FileInputPort>, ToggleError> {
        match self.element(role, id)? {
            InMemoryElement::File(input) => Ok(input),
            _ => Err(ToggleError::wrong_type(role, id)),
        }
    }
}

impl ChangeListenerPort for InMemoryForm {
    fn listen(
        &self,
        role: ElementRole,
        id: &str,
        listener: Rc<dyn Fn()>,
    ) -> Result<Subscription, ToggleError> {
        if !matches!(self.element(role, id)?, InMemoryElement::Radio(_)) {
            return Err(ToggleError::wrong_type(role, id));
        }
        if self.refused_listener_id.borrow().as_deref() == Some(id) {
            return Err(ToggleError::Listener(format!("listener refused on #{id}")));
        }

        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.listeners.borrow_mut().push(RegisteredListener {
            token,
            id: id.to_string(),
            listener,
        });

        let listeners = Rc::clone(&self.listeners);
        Ok(Subscription::new(move || {
            listeners
                .borrow_mut()
                .retain(|registered| registered.token != token);
        }))
    }
}
