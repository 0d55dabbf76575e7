//! Configuration and data directory management.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level Droidgate configuration.
#[derive(Debug, Clone)]
pub struct DroidgateConfig {
    /// HTTP server port.
    pub port: u16,
    /// Root data directory.
    pub data_dir: PathBuf,
    /// Credential file holding the hashed secret (`credential.json`).
    pub credential_path: PathBuf,
    /// Directory for transient capture artifacts (camera photos).
    pub capture_dir: PathBuf,
    /// Upper bound on a single external command invocation.
    pub dispatch_timeout: Duration,
    /// Maximum number of concurrently running external commands.
    pub max_in_flight: usize,
}

impl DroidgateConfig {
    /// Create configuration from environment and defaults. Creates the
    /// capture directory if needed.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let credential_path = std::env::var("DROIDGATE_CREDENTIAL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("credential.json"));

        let timeout_secs = std::env::var("DROIDGATE_DISPATCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let capture_dir = data_dir.join("captures");
        std::fs::create_dir_all(&capture_dir)?;

        Ok(Self {
            port,
            credential_path,
            capture_dir,
            dispatch_timeout: Duration::from_secs(timeout_secs),
            max_in_flight: 8,
            data_dir,
        })
    }
}
