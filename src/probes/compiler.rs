//! Working C++ compiler selection.

use std::env::VarError;

use super::Prober;

/// Compilers tried by default, in preference order.
pub const DEFAULT_COMPILERS: &[&str] = &["clang++", "g++"];

impl Prober<'_> {
    /// Select the first compiler that passes a compile+link smoke test.
    ///
    /// Candidates are tried in order: a `CXX` environment override first
    /// when present, then the preferred list, then whatever compiler the
    /// configuration currently holds. The winning candidate stays in the
    /// configuration; if every candidate fails, the configuration is left
    /// pointing at the last one tried and the probe reports failure.
    pub fn select_compiler(&mut self, preferred: &[&str]) -> bool {
        self.select_compiler_with_env(preferred, |key| std::env::var(key))
    }

    /// [`select_compiler`](Self::select_compiler) with a custom env lookup.
    ///
    /// This allows testing override priority without modifying actual
    /// environment variables.
    pub fn select_compiler_with_env<F>(&mut self, preferred: &[&str], env_fn: F) -> bool
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut candidates: Vec<String> = preferred.iter().map(|s| s.to_string()).collect();
        candidates.push(self.config.cxx.clone());
        if let Ok(cxx) = env_fn("CXX") {
            candidates.insert(0, cxx);
        }

        for cxx in candidates {
            self.report
                .begin(&format!("Checking if we can compile with {}", cxx));
            self.config.cxx = cxx;
            let ok = self.toolchain.check_compiler(&self.config);
            self.report.finish(ok);
            if ok {
                if let Some(version) = self.toolchain.compiler_version(&self.config) {
                    self.report
                        .detail(&format!("{} reports version {}", self.config.cxx, version));
                    tracing::debug!("selected {} {}", self.config.cxx, version);
                }
                return true;
            }
        }
        false
    }
}
