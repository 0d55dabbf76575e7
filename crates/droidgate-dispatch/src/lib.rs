//! Droidgate dispatch — operation descriptors and bounded external command
//! invocation.

pub mod invoke;
pub mod ops;

pub use invoke::{CommandOutput, Dispatcher};
pub use ops::{OpDescriptor, OutputShape};
