use fixture_core::config::env_port;

/// Minimal fixture configuration loaded from environment variables.
#[derive(Debug)]
pub struct MinimalConfig {
    /// TCP port for the HTTP server, straight from `PORT` with no fallback.
    /// Unset leaves the bind address without a port, so startup fails at
    /// bind — that failure is part of this fixture's contract.
    pub port: String,
}

impl MinimalConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_port("PORT"),
        }
    }
}
