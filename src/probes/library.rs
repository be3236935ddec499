//! Library discovery with package-manager fallback.
//!
//! macOS package managers install under prefixes the default toolchain
//! search paths don't cover (`/opt/local` for MacPorts, `/sw` for Fink).
//! When a library isn't found on the default paths, each manager's prefix is
//! tried speculatively: the paths are added, the check reruns, and a failed
//! rerun rolls the paths back before the next candidate.

use std::path::PathBuf;

use crate::lookup;

use super::Prober;

/// Package managers tried for library fallback, in order.
pub const DEFAULT_MANAGERS: &[&str] = &["port", "fink"];

impl Prober<'_> {
    /// Locate a library and its header, falling back to macOS package
    /// manager prefixes.
    pub fn find_library(&mut self, lib: &str, header: &str) -> bool {
        self.find_library_with(lib, header, DEFAULT_MANAGERS, &lookup::parse_system_path())
    }

    /// [`find_library`](Self::find_library) with explicit candidate managers
    /// and search path.
    pub fn find_library_with(
        &mut self,
        lib: &str,
        header: &str,
        managers: &[&str],
        search_path: &[PathBuf],
    ) -> bool {
        if self.check_lib(lib) && self.check_header(header) {
            return true;
        }
        if !self.ctx.is_macos() {
            return false;
        }

        for manager in managers {
            if self.ctx.manager_confirmed(manager) {
                // Its paths are already committed; retrying adds nothing.
                continue;
            }
            let Some(prefix) = lookup::manager_prefix(manager, search_path) else {
                tracing::debug!("package manager '{}' not found", manager);
                continue;
            };

            let snapshot = self.config.path_snapshot();
            self.config.add_lib_path(prefix.join("lib"));
            self.config.add_include_path(prefix.join("include"));
            self.report
                .note(&format!("Trying package manager '{}'...", manager));

            if self.check_lib(lib) && self.check_header(header) {
                self.ctx.confirm_manager(manager);
                return true;
            }
            self.config.restore_paths(snapshot);
        }
        false
    }
}
