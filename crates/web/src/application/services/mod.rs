pub mod element_resolver;
pub mod form_binding;
pub mod selection_toggler;

pub use element_resolver::resolve_form_elements;
pub use form_binding::{bind_form, BindingSlot, FormBinding};
pub use selection_toggler::{SelectionToggler, ToggleOutcome};
