//! Capability context shared across probes.
//!
//! Two facts are expensive or pointless to re-derive during a probe run: the
//! host OS identity, and which package managers have already been confirmed
//! usable. The ported build logic kept both in module-level globals; here
//! they live in an explicit [`ProbeContext`] owned by the caller, preserving
//! the once-per-run computation without hidden global state.

use std::collections::HashSet;

/// Caller-owned capability context, lazily initialized.
///
/// The platform query is injectable so tests can pin the host identity and
/// count how often the underlying query actually runs.
pub struct ProbeContext {
    platform_query: Box<dyn Fn() -> bool>,
    host_is_macos: Option<bool>,
    confirmed_managers: HashSet<String>,
}

impl Default for ProbeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeContext {
    /// Create a context that asks the real host for its identity.
    pub fn new() -> Self {
        Self::with_platform_query(|| cfg!(target_os = "macos"))
    }

    /// Create a context with a custom platform query.
    ///
    /// This allows testing platform-dependent probe paths without running on
    /// that platform.
    pub fn with_platform_query<F>(query: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self {
            platform_query: Box::new(query),
            host_is_macos: None,
            confirmed_managers: HashSet::new(),
        }
    }

    /// Whether the host is macOS. The underlying query runs at most once per
    /// context; subsequent calls return the cached answer.
    pub fn is_macos(&mut self) -> bool {
        *self
            .host_is_macos
            .get_or_insert_with(|| (self.platform_query)())
    }

    /// Whether a package manager has already been confirmed usable.
    pub fn manager_confirmed(&self, manager: &str) -> bool {
        self.confirmed_managers.contains(manager)
    }

    /// Record a package manager as confirmed usable.
    pub fn confirm_manager(&mut self, manager: &str) {
        self.confirmed_managers.insert(manager.to_string());
    }

    /// Names of all confirmed package managers.
    pub fn confirmed_managers(&self) -> impl Iterator<Item = &str> {
        self.confirmed_managers.iter().map(String::as_str)
    }
}

impl std::fmt::Debug for ProbeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeContext")
            .field("host_is_macos", &self.host_is_macos)
            .field("confirmed_managers", &self.confirmed_managers)
            .finish()
    }
}
