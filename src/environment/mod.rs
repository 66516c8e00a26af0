//! Build environment description.
//!
//! A build runs in exactly one [`Mode`]. The mode arrives as a raw string
//! (the `--mode` flag or `DEVPACK_MODE`) and is validated into an
//! [`EnvironmentDescriptor`] before any filesystem probing happens.

pub mod mode;

pub use mode::{EnvironmentDescriptor, Mode};
