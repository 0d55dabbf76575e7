//! Droidgate core — configuration, credential store, bearer token minting.

pub mod config;
pub mod credential;
pub mod error;
pub mod token;

pub use config::DroidgateConfig;
pub use credential::{Credential, CredentialStore};
pub use error::{Error, Result};
