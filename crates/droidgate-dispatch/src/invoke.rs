//! External command invocation — bounded, timed, argument-vector only.

use std::ffi::OsStr;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::process::Command;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, warn};

use droidgate_core::{Error, Result};

use crate::ops::{OpDescriptor, OutputShape};

/// Captured result of a finished command.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external tools with a concurrency bound and a per-invocation
/// timeout.
///
/// Parameters are always passed as a discrete argument vector; nothing is
/// ever interpolated through a shell.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    permits: Arc<Semaphore>,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(max_in_flight: usize, timeout: Duration) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight)),
            timeout,
        }
    }

    /// Run an operation that takes no parameters.
    pub async fn run(&self, op: &OpDescriptor) -> Result<CommandOutput> {
        self.run_with(op, &[] as &[&str]).await
    }

    /// Run an operation with the given arguments and classify the outcome.
    ///
    /// Success means a zero exit status, an empty error stream, and, for
    /// output-bearing operations, non-empty stdout. Anything else surfaces
    /// as [`Error::Execution`] carrying the captured diagnostic.
    pub async fn run_with<S: AsRef<OsStr>>(
        &self,
        op: &OpDescriptor,
        args: &[S],
    ) -> Result<CommandOutput> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| Error::Internal("dispatcher is shut down".into()))?;

        debug!(op = op.name, program = op.program, "dispatching");

        let child = Command::new(op.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::Execution(format!("{}: {}", op.program, e)))?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(done) => done.map_err(|e| Error::Execution(format!("{}: {}", op.program, e)))?,
            Err(_) => {
                // Dropping the wait future reaps the child via kill_on_drop.
                warn!(op = op.name, timeout = ?self.timeout, "command timed out");
                return Err(Error::Execution(format!(
                    "{} timed out after {:?}",
                    op.program, self.timeout
                )));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let detail = if stderr.trim().is_empty() {
                format!("{} exited with {}", op.program, output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(Error::Execution(detail));
        }
        if !stderr.trim().is_empty() {
            return Err(Error::Execution(stderr.trim().to_string()));
        }
        if op.shape == OutputShape::JsonText && stdout.trim().is_empty() {
            return Err(Error::Execution(format!(
                "{} produced no output",
                op.program
            )));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
