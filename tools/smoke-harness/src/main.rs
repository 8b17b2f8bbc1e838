//! Smoke harness — spawns the fixture servers and checks their wire
//! behavior end-to-end.
//!
//! # Usage
//!
//! ```bash
//! cargo build --workspace
//! cargo run -p smoke-harness -- --bin-dir target/debug
//! ```
//!
//! Exits 0 when every scenario passes, exits 1 when any fail.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

mod process;
mod reporter;
mod runner;
mod scenario;

use process::{Readiness, ServerProcess};
use reporter::Reporter;
use runner::Runner;
use scenario::{Expectation, Scenario, all_scenarios};

#[derive(Parser)]
#[command(about = "Run smoke checks against the fixture servers")]
struct Args {
    /// Directory containing the built hello-router and hello-minimal binaries
    #[arg(long, default_value = "target/debug")]
    bin_dir: PathBuf,

    /// Seconds to wait for a server to accept connections (or to exit)
    #[arg(long, default_value_t = 5)]
    ready_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let scenarios = all_scenarios();

    println!(
        "Running {} scenario(s) with binaries from {}",
        scenarios.len(),
        args.bin_dir.display()
    );
    println!();

    let mut reporter = Reporter::new();

    for scenario in &scenarios {
        let failures = run_scenario(&args, scenario).await;
        reporter.record(scenario, &failures);
    }

    reporter.print_summary();

    if reporter.all_passed() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

async fn run_scenario(args: &Args, scenario: &Scenario) -> Vec<String> {
    let bin = args.bin_dir.join(scenario.variant.bin_name());
    let timeout = Duration::from_secs(args.ready_timeout);

    let mut server = match ServerProcess::spawn(&bin, scenario.port_env) {
        Ok(server) => server,
        Err(e) => return vec![e.to_string()],
    };

    let failures = match &scenario.expect {
        Expectation::Serves { port, checks } => {
            let mut failures = Vec::new();
            match server.wait_ready(port, timeout).await {
                Ok(Readiness::Ready) => {
                    let runner = Runner::new(&format!("http://127.0.0.1:{port}"));
                    for check in *checks {
                        let result = runner.check(check).await;
                        if !result.passed() {
                            failures.extend(result.failures());
                        }
                    }
                }
                Ok(Readiness::Exited(code)) => {
                    failures.push(format!("server exited before listening (code {code:?})"));
                }
                Err(e) => failures.push(e.to_string()),
            }
            failures
        }
        Expectation::FailsToStart => match server.wait_exit(timeout).await {
            Ok(Some(Some(0))) => vec!["server exited 0; expected a startup failure".to_owned()],
            Ok(Some(_)) => Vec::new(),
            Ok(None) => vec!["server kept running; expected a startup failure".to_owned()],
            Err(e) => vec![e.to_string()],
        },
    };

    server.stop().await;
    failures
}
