//! portfolio-kit - Deployment-readiness checker and resume builder for a static
//! portfolio site
//!
//! The library holds the readiness checks, the status artifact, the output
//! rendering shared by the `portfolio-deploy` binary, and the resume layout and
//! rendering pipeline used by `portfolio-resume`.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata,
    clippy::cast_precision_loss
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod checks;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;
pub mod resume;
