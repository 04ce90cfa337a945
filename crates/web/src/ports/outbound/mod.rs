pub mod form_port;

pub use form_port::{
    ChangeListenerPort, ElementLookupPort, FieldContainerPort, FieldGroupElements, FileInputPort,
    FormElements, ModeSelectorPort, Subscription, TextInputPort,
};

#[cfg(any(test, feature = "testing"))]
pub use form_port::{
    MockFieldContainerPort, MockFileInputPort, MockModeSelectorPort, MockTextInputPort,
};
