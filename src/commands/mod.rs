//! Command implementations

mod deploy;

pub use deploy::{DeployOptions, deploy};
