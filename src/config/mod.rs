mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, UiConfig, DEFAULT_ENDPOINT_URL};
