//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the web server and its upstream order API.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob handed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Cookie signing key, at least 64 bytes.
    pub secret: String,
    /// Full URL of the order-query endpoint.
    pub orders_api_url: String,
}
