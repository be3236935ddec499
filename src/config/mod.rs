//! The mutable build configuration probes operate on.
//!
//! - [`build_config`] - The [`BuildConfig`] record and its mutation helpers
//! - [`emit`] - Rendering a configuration as shell assignments or a summary
//!
//! A [`BuildConfig`] is owned by the build process and mutated in place by
//! every probe that succeeds. Mutations are additive except for the explicit
//! path snapshot/restore used by speculative library discovery.

pub mod build_config;
pub mod emit;

pub use build_config::{BuildConfig, PathSnapshot, PkgFlags};
