//! HTTP check runner — sends one request and captures the response.

use reqwest::Client;

use crate::scenario::Check;

/// Result of running a single check.
pub struct CheckResult {
    pub path: &'static str,
    pub expected_status: u16,
    pub actual_status: Option<u16>,
    /// Set when the body didn't match exactly.
    pub body_mismatch: Option<String>,
    /// Set when the request could not be sent (e.g. connection refused).
    pub error: Option<String>,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.error.is_none()
            && self.actual_status == Some(self.expected_status)
            && self.body_mismatch.is_none()
    }

    /// Human-readable mismatch lines for the reporter.
    pub fn failures(&self) -> Vec<String> {
        if let Some(err) = &self.error {
            return vec![format!("GET {}: {err}", self.path)];
        }
        let mut out = Vec::new();
        if let Some(actual) = self.actual_status {
            if actual != self.expected_status {
                out.push(format!(
                    "GET {} → expected {}, got {}",
                    self.path, self.expected_status, actual
                ));
            }
        }
        if let Some(mismatch) = &self.body_mismatch {
            out.push(format!("GET {}: {mismatch}", self.path));
        }
        out
    }
}

pub struct Runner {
    client: Client,
    base_url: String,
}

impl Runner {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn check(&self, check: &Check) -> CheckResult {
        let url = format!("{}{}", self.base_url, check.path);

        match self.client.get(&url).send().await {
            Ok(resp) => {
                let actual_status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                let body_mismatch = if body != check.body {
                    Some(format!("body: expected {:?}, got {body:?}", check.body))
                } else {
                    None
                };
                CheckResult {
                    path: check.path,
                    expected_status: check.status,
                    actual_status: Some(actual_status),
                    body_mismatch,
                    error: None,
                }
            }
            Err(e) => CheckResult {
                path: check.path,
                expected_status: check.status,
                actual_status: None,
                body_mismatch: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_result() -> CheckResult {
        CheckResult {
            path: "/",
            expected_status: 200,
            actual_status: Some(200),
            body_mismatch: None,
            error: None,
        }
    }

    #[test]
    fn passes_when_status_matches_and_body_is_clean() {
        assert!(clean_result().passed());
        assert!(clean_result().failures().is_empty());
    }

    #[test]
    fn fails_on_status_mismatch() {
        let result = CheckResult {
            actual_status: Some(404),
            ..clean_result()
        };
        assert!(!result.passed());
        assert_eq!(result.failures(), vec!["GET / → expected 200, got 404"]);
    }

    #[test]
    fn fails_on_body_mismatch() {
        let result = CheckResult {
            body_mismatch: Some("body: expected \"a\", got \"b\"".to_owned()),
            ..clean_result()
        };
        assert!(!result.passed());
        assert_eq!(result.failures().len(), 1);
    }

    #[test]
    fn fails_on_transport_error() {
        let result = CheckResult {
            actual_status: None,
            error: Some("connection refused".to_owned()),
            ..clean_result()
        };
        assert!(!result.passed());
        assert_eq!(result.failures(), vec!["GET /: connection refused"]);
    }
}
