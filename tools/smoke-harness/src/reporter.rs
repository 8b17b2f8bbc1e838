//! Scenario result reporter — PASS/FAIL lines and a summary.

use crate::scenario::Scenario;

pub struct Reporter {
    passed: usize,
    failed: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, scenario: &Scenario, failures: &[String]) {
        if failures.is_empty() {
            self.passed += 1;
            println!("PASS  [{}] {}", scenario.id, scenario.description);
        } else {
            self.failed += 1;
            println!("FAIL  [{}] {}", scenario.id, scenario.description);
            for failure in failures {
                println!("        {failure}");
            }
        }
    }

    pub fn print_summary(&self) {
        println!();
        println!("────────────────────────────────────────────────────");
        println!("Results: {} passed, {} failed", self.passed, self.failed);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::all_scenarios;

    #[test]
    fn all_passed_until_a_failure_is_recorded() {
        let scenarios = all_scenarios();
        let mut reporter = Reporter::new();

        reporter.record(&scenarios[0], &[]);
        assert!(reporter.all_passed());

        reporter.record(&scenarios[1], &["GET / → expected 200, got 404".to_owned()]);
        assert!(!reporter.all_passed());
    }
}
