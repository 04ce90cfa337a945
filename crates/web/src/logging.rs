//! Logging bootstrap
//!
//! The browser build logs to the developer console through `tracing-wasm`
//! and turns panics into console errors. Native builds (tests and tooling)
//! use `tracing-subscriber`, honouring `RUST_LOG` when it is set.

#[cfg(target_arch = "wasm32")]
use std::sync::Once;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(target_arch = "wasm32")]
static INIT: Once = Once::new();

/// Default directive when `RUST_LOG` is unset
pub fn default_filter(level: tracing::Level) -> String {
    format!("kycform_web={}", level.as_str().to_ascii_lowercase())
}

/// Install the global subscriber. Later calls are no-ops.
#[cfg(target_arch = "wasm32")]
pub fn init(level: tracing::Level) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}

/// Install the global subscriber. Later calls are no-ops.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: tracing::Level) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_this_crate() {
        assert_eq!(default_filter(tracing::Level::WARN), "kycform_web=warn");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(tracing::Level::DEBUG);
        init(tracing::Level::TRACE);
    }
}
