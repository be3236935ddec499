//! The seam between probes and the external toolchain.
//!
//! Every external process a probe depends on (compiler invocations and
//! pkg-config queries) sits behind the [`Toolchain`] trait, so probe logic
//! can be exercised without a compiler on the host.
//!
//! - [`cxx`] - Real implementation driving the configured C++ compiler
//! - [`mock`] - Scripted implementation for tests

pub mod cxx;
pub mod mock;

pub use cxx::CxxToolchain;
pub use mock::MockToolchain;

use crate::config::{BuildConfig, PkgFlags};

/// External checks a probe can run against the host toolchain.
///
/// Implementations read the configuration (compiler, flags, search paths)
/// but never mutate it; configuration mutation stays with the probes.
pub trait Toolchain {
    /// Whether a trivial program links against `-l<lib>` with the
    /// configuration's library search paths.
    fn check_lib(&self, config: &BuildConfig, lib: &str) -> bool;

    /// Whether `#include <header>` compiles with the configuration's header
    /// search paths and defines.
    fn check_header(&self, config: &BuildConfig, header: &str) -> bool;

    /// Whether the configuration's compiler can compile and link a trivial
    /// program.
    fn check_compiler(&self, config: &BuildConfig) -> bool;

    /// Best-effort version string for the configuration's compiler.
    fn compiler_version(&self, config: &BuildConfig) -> Option<String>;

    /// Query pkg-config for a package, returning its flags when registered.
    fn query_pkg(&self, name: &str) -> Option<PkgFlags>;
}
