//! WebAssembly entry points
//!
//! With the `autostart` feature (on by default) the module binds the stock
//! template as soon as it is instantiated. Pages with different markup build
//! without it and call `initWithConfig` themselves.

use wasm_bindgen::prelude::*;

use crate::application::services::{bind_form, BindingSlot};
use crate::config::ToggleConfig;
use crate::error::ToggleError;
use crate::infrastructure::dom::DomLookup;

thread_local! {
    static BINDING: BindingSlot = const { BindingSlot::new() };
}

impl From<ToggleError> for JsValue {
    fn from(err: ToggleError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    boot(ToggleConfig::default())
}

/// Bind the toggler using a page-supplied configuration object.
///
/// Once the document is parsed, binding happens before this returns and
/// any failure is thrown; the previous binding is only replaced on success.
/// While the document is still loading, binding is deferred and failures
/// are logged.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        ToggleConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<ToggleConfig>(config)
            .map_err(|e| ToggleError::invalid_config(e.to_string()))?
    };
    boot(config)
}

/// Remove the change listeners and forget the binding
#[wasm_bindgen]
pub fn unbind() {
    BINDING.with(BindingSlot::clear);
}

/// Document kind currently applied (`"aadhar"` / `"pan"`), if any
#[wasm_bindgen(js_name = currentIdType)]
pub fn current_id_type() -> Option<String> {
    BINDING
        .with(BindingSlot::current_mode)
        .map(|kind| kind.as_str().to_string())
}

fn boot(config: ToggleConfig) -> Result<(), JsValue> {
    crate::logging::init(config.level()?);
    config.validate().inspect_err(|e| {
        tracing::error!("Rejected toggler configuration: {}", e);
    })?;

    let lookup = DomLookup::from_window()?;
    if lookup.is_loading() {
        lookup.on_parsed(move |lookup| {
            if let Err(e) = bind(lookup, &config) {
                tracing::error!("Failed to bind ID document toggler: {}", e);
            }
        })?;
        return Ok(());
    }

    bind(&lookup, &config).inspect_err(|e| {
        tracing::error!("Failed to bind ID document toggler: {}", e);
    })?;
    Ok(())
}

fn bind(lookup: &DomLookup, config: &ToggleConfig) -> Result<(), ToggleError> {
    BINDING.with(|slot| slot.rebind(|| bind_form(lookup, lookup, config)))
}
