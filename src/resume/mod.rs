//! Resume document builder
//!
//! Fixed biographical content flows through three stages:
//!
//! - [`compose`] - content to an ordered list of styled blocks
//! - [`layout`] - blocks to word-wrapped, paginated text runs
//! - [`render`] - text runs to a file through a [`render::DocumentRenderer`]
//!
//! [`builder`] ties them together behind the availability probe.

pub mod builder;
pub mod compose;
pub mod content;
pub mod layout;
pub mod metrics;
pub mod render;

pub use builder::{BuildRequest, BuildState, build};
