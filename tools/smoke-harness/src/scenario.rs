//! Fixed scenario table — the wire contract the deploy harness expects of
//! each fixture.

/// Which fixture binary a scenario drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Router,
    Minimal,
}

impl Variant {
    pub fn bin_name(self) -> &'static str {
        match self {
            Variant::Router => "hello-router",
            Variant::Minimal => "hello-minimal",
        }
    }
}

/// One GET request and its expected status and exact body.
pub struct Check {
    pub path: &'static str,
    pub status: u16,
    pub body: &'static str,
}

/// What a scenario expects of the spawned process.
pub enum Expectation {
    /// Server comes up on `port` and answers every check.
    Serves {
        port: &'static str,
        checks: &'static [Check],
    },
    /// Process exits before ever accepting connections.
    FailsToStart,
}

pub struct Scenario {
    pub id: &'static str,
    pub description: &'static str,
    pub variant: Variant,
    /// Value for the `PORT` env var; `None` leaves it unset.
    pub port_env: Option<&'static str>,
    pub expect: Expectation,
}

pub fn all_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "router/default-port",
            description: "router serves the greeting on 8080 when PORT is unset",
            variant: Variant::Router,
            port_env: None,
            expect: Expectation::Serves {
                port: "8080",
                checks: &[Check {
                    path: "/",
                    status: 200,
                    body: "Hello world!",
                }],
            },
        },
        Scenario {
            id: "router/env-port",
            description: "router honors PORT and 404s unknown paths",
            variant: Variant::Router,
            port_env: Some("9090"),
            expect: Expectation::Serves {
                port: "9090",
                checks: &[
                    Check {
                        path: "/",
                        status: 200,
                        body: "Hello world!",
                    },
                    Check {
                        path: "/missing",
                        status: 404,
                        body: "",
                    },
                ],
            },
        },
        Scenario {
            id: "minimal/env-port",
            description: "minimal serves the newline-terminated greeting on every path",
            variant: Variant::Minimal,
            port_env: Some("9091"),
            expect: Expectation::Serves {
                port: "9091",
                checks: &[
                    Check {
                        path: "/",
                        status: 200,
                        body: "Hello world!\n",
                    },
                    Check {
                        path: "/any/other/path",
                        status: 200,
                        body: "Hello world!\n",
                    },
                ],
            },
        },
        Scenario {
            id: "minimal/no-port",
            description: "minimal fails to start when PORT is unset",
            variant: Variant::Minimal,
            port_env: None,
            expect: Expectation::FailsToStart,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_ids_are_unique() {
        let scenarios = all_scenarios();
        let mut ids: Vec<_> = scenarios.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), scenarios.len());
    }

    #[test]
    fn serving_scenarios_probe_the_env_port_or_the_router_default() {
        for s in all_scenarios() {
            if let Expectation::Serves { port, .. } = s.expect {
                match s.port_env {
                    Some(env_port) => assert_eq!(port, env_port, "{}", s.id),
                    None => {
                        assert_eq!(s.variant, Variant::Router, "{}", s.id);
                        assert_eq!(port, "8080", "{}", s.id);
                    }
                }
            }
        }
    }

    #[test]
    fn startup_failure_scenarios_leave_port_unset() {
        for s in all_scenarios() {
            if matches!(s.expect, Expectation::FailsToStart) {
                assert!(s.port_env.is_none(), "{}", s.id);
            }
        }
    }
}
