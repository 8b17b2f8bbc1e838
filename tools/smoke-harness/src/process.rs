//! Child-process control for the fixture binaries:
//! spawn → wait for readiness (or exit) → (run checks) → stop.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::net::TcpStream;
use tokio::process::{Child, Command};

/// Outcome of waiting for a spawned fixture to come up.
pub enum Readiness {
    /// The port accepts TCP connections.
    Ready,
    /// The process exited first, with this exit code (if any).
    Exited(Option<i32>),
}

pub struct ServerProcess {
    child: Child,
}

impl ServerProcess {
    /// Spawn `bin` with `PORT` set to `port`, or removed from the child's
    /// environment when `port` is `None`.
    pub fn spawn(bin: &Path, port: Option<&str>) -> Result<Self> {
        let mut cmd = Command::new(bin);
        cmd.env_remove("PORT");
        if let Some(p) = port {
            cmd.env("PORT", p);
        }
        cmd.stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        let child = cmd
            .spawn()
            .with_context(|| format!("failed to spawn {}", bin.display()))?;
        Ok(Self { child })
    }

    /// Poll until `port` accepts TCP connections or the process exits.
    pub async fn wait_ready(&mut self, port: &str, timeout: Duration) -> Result<Readiness> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Some(status) = self.child.try_wait()? {
                return Ok(Readiness::Exited(status.code()));
            }
            if TcpStream::connect(format!("127.0.0.1:{port}")).await.is_ok() {
                return Ok(Readiness::Ready);
            }
            if tokio::time::Instant::now() >= deadline {
                anyhow::bail!("timed out waiting for port {port} to accept connections");
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }

    /// Wait for the process to exit on its own. Returns `None` when it is
    /// still running at the deadline.
    pub async fn wait_exit(&mut self, timeout: Duration) -> Result<Option<Option<i32>>> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Some(status) = self.child.try_wait()? {
                return Ok(Some(status.code()));
            }
            if tokio::time::Instant::now() >= deadline {
                return Ok(None);
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }

    pub async fn stop(mut self) {
        let _ = self.child.kill().await;
    }
}
