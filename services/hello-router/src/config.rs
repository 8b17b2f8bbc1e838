use fixture_core::config::env_port_or;

/// Port used when `PORT` is unset or empty — the port the deploy harness
/// probes by convention.
pub const DEFAULT_PORT: &str = "8080";

/// Router fixture configuration loaded from environment variables.
#[derive(Debug)]
pub struct RouterConfig {
    /// TCP port for the HTTP server (default 8080). Env var: `PORT`.
    pub port: String,
}

impl RouterConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_port_or("PORT", DEFAULT_PORT),
        }
    }
}
