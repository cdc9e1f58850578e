pub mod pgerrors;
#[cfg(test)]
mod tests;

pub use crate::pgerrors::*;

use std::sync::Arc;

use tracing_subscriber::FmtSubscriber;
use tracing::{info_span, Level};

use crate::pgerrors::config::{Settings, load_config, DEFAULT_CONFIG_NAME};
use crate::pgerrors::sqlstate::{registry, ErrorType, LookupError, Module, Resolved};


pub fn init_tracing(max_level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        // all spans/events with a level higher than max_level will be written to stdout.
        .with_max_level(max_level)
        // completes the builder.
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::new(format!("setting default subscriber failed: {}", e)))
}

/// Load the configuration settings from pgerrors.yaml
/// See pgerrors::config::load_config for more info.
pub fn init_settings() -> Result<Settings> {
    load_config(DEFAULT_CONFIG_NAME)
}

/// Create the errors module named in conf and publish the process-wide registry into it.
/// This is the startup hook: it succeeds at most once per process, and any error
/// should be treated as fatal, the registry can't be used afterwards.
pub fn init_module(conf: &Settings) -> Result<Arc<Module>> {
    let _span = info_span!("startup").entered();
    let module = Arc::new(Module::new(conf.module_name.as_str()));
    registry().initialize(&module)?;
    Ok(module)
}

/// Lookup an error code and return its error type from the process-wide registry.
/// Fails with NotFound if the code has no type, NotReady if init_module hasn't succeeded.
pub fn lookup(code: &str) -> std::result::Result<Arc<ErrorType>, LookupError> {
    registry().lookup_str(code)
}

/// Lookup an error code or a class code ("22") in the process-wide registry.
pub fn lookup_any(code: &str) -> std::result::Result<Resolved, LookupError> {
    registry().lookup_any(code)
}
