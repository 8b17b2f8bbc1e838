//! Port resolution for the fixture servers.
//!
//! Each fixture reads its listen port from an environment variable once at
//! startup and holds it for the life of the process. Ports stay strings:
//! an invalid value surfaces as a bind error, not a parse fallback.

/// Read a port from `var`, falling back to `default` when the variable is
/// unset or empty.
pub fn env_port_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Read a port from `var` as-is, with no fallback. Unset resolves to an
/// empty string, which yields a bind address with no port.
pub fn env_port(var: &str) -> String {
    std::env::var(var).unwrap_or_default()
}

/// Bind address on all interfaces for `port`.
pub fn bind_addr(port: &str) -> String {
    format!("0.0.0.0:{port}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so parallel tests never touch
    // the same process environment entry.

    #[test]
    fn env_port_or_falls_back_when_unset() {
        assert_eq!(env_port_or("FIXTURE_TEST_PORT_UNSET", "8080"), "8080");
    }

    #[test]
    fn env_port_or_falls_back_when_empty() {
        unsafe { std::env::set_var("FIXTURE_TEST_PORT_EMPTY", "") };
        assert_eq!(env_port_or("FIXTURE_TEST_PORT_EMPTY", "8080"), "8080");
    }

    #[test]
    fn env_port_or_prefers_the_env_value() {
        unsafe { std::env::set_var("FIXTURE_TEST_PORT_SET", "9090") };
        assert_eq!(env_port_or("FIXTURE_TEST_PORT_SET", "8080"), "9090");
    }

    #[test]
    fn env_port_is_empty_when_unset() {
        assert_eq!(env_port("FIXTURE_TEST_PORT_MISSING"), "");
    }

    #[test]
    fn env_port_reads_the_env_value() {
        unsafe { std::env::set_var("FIXTURE_TEST_PORT_RAW", "9091") };
        assert_eq!(env_port("FIXTURE_TEST_PORT_RAW"), "9091");
    }

    #[test]
    fn bind_addr_joins_port_on_all_interfaces() {
        assert_eq!(bind_addr("8080"), "0.0.0.0:8080");
    }

    #[test]
    fn bind_addr_with_empty_port_has_no_port() {
        // This address is malformed and fails at bind time, which is the
        // contract for a fixture started without `PORT`.
        assert_eq!(bind_addr(""), "0.0.0.0:");
    }
}
