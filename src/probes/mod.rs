//! Capability probes.
//!
//! Each probe is an independent boolean check against the host environment
//! that mutates the shared [`BuildConfig`] on success. All probes run to
//! completion synchronously, and nothing here is fatal: a failed probe
//! returns `false` and leaves the abort-or-continue decision to the caller.
//!
//! - [`pkg`] - pkg-config existence and flag queries
//! - [`library`] - library discovery with macOS package-manager fallback
//! - [`containers`] - unordered-map header detection
//! - [`compiler`] - working C++ compiler selection
//! - [`fuse`] - FUSE implementation discovery

pub mod compiler;
pub mod containers;
pub mod fuse;
pub mod library;
pub mod pkg;

pub use compiler::DEFAULT_COMPILERS;
pub use library::DEFAULT_MANAGERS;

use crate::config::BuildConfig;
use crate::context::ProbeContext;
use crate::report::Reporter;
use crate::toolchain::Toolchain;

/// Runs probes against a toolchain, accumulating results in a build
/// configuration.
pub struct Prober<'a> {
    toolchain: &'a dyn Toolchain,
    config: BuildConfig,
    ctx: ProbeContext,
    report: Reporter,
}

impl<'a> Prober<'a> {
    /// Create a prober with a fresh configuration and context.
    pub fn new(toolchain: &'a dyn Toolchain) -> Self {
        Self {
            toolchain,
            config: BuildConfig::new(),
            ctx: ProbeContext::new(),
            report: Reporter::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific capability context.
    pub fn with_context(mut self, ctx: ProbeContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Use a specific reporter.
    pub fn with_reporter(mut self, report: Reporter) -> Self {
        self.report = report;
        self
    }

    /// The accumulated configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// The capability context.
    pub fn ctx(&self) -> &ProbeContext {
        &self.ctx
    }

    /// Consume the prober, yielding the accumulated configuration.
    pub fn into_config(self) -> BuildConfig {
        self.config
    }

    /// Check that a library links with the current configuration.
    pub fn check_lib(&mut self, lib: &str) -> bool {
        self.report.begin(&format!("Checking for library {}", lib));
        let ok = self.toolchain.check_lib(&self.config, lib);
        self.report.finish(ok);
        ok
    }

    /// Check that a header compiles with the current configuration.
    pub fn check_header(&mut self, header: &str) -> bool {
        self.report.begin(&format!("Checking for header {}", header));
        let ok = self.toolchain.check_header(&self.config, header);
        self.report.finish(ok);
        ok
    }
}
