//! buildscout - Build-environment capability probing for native toolchains.
//!
//! buildscout runs a sequence of independent boolean probes against the host
//! system (compiler availability, library and header presence, pkg-config
//! metadata, package-manager install prefixes) and accumulates the results
//! in a mutable build configuration a build tool can consume.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The build configuration record and its emission formats
//! - [`context`] - Memoized host identity and package-manager cache
//! - [`error`] - Error types and result aliases
//! - [`lookup`] - Executable resolution on the search path
//! - [`probes`] - The capability probes themselves
//! - [`report`] - Check progress output
//! - [`toolchain`] - External toolchain seam (real and mock)
//!
//! # Example
//!
//! ```
//! use buildscout::{MockToolchain, Prober, Reporter};
//!
//! let toolchain = MockToolchain::new().with_header("tr1/unordered_map");
//! let mut prober = Prober::new(&toolchain).with_reporter(Reporter::silent());
//!
//! assert!(prober.find_unordered_map());
//! assert_eq!(prober.config().defines, vec!["HAS_TR1"]);
//! ```
//!
//! For probing with the real compiler, see [`toolchain::CxxToolchain`] and
//! the integration tests.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod lookup;
pub mod probes;
pub mod report;
pub mod toolchain;

pub use config::{BuildConfig, PkgFlags};
pub use context::ProbeContext;
pub use error::{Result, ScoutError};
pub use probes::Prober;
pub use report::{OutputMode, Reporter};
pub use toolchain::{CxxToolchain, MockToolchain, Toolchain};
