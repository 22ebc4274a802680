//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server and its database.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound on pooled SQLite connections; the r2d2 default when unset.
    #[serde(default)]
    pub database_pool_size: Option<u32>,
    /// Open connections with `PRAGMA query_only`.
    #[serde(default)]
    pub database_read_only: bool,
    /// Glob passed to Tera, e.g. `./templates/**/*`.
    pub templates_dir: String,
}
