//! Scripted toolchain for tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::config::{BuildConfig, PkgFlags};

use super::Toolchain;

/// Where a scripted library or header is "installed".
#[derive(Debug, Clone)]
enum Availability {
    /// Found with the default toolchain search paths.
    Default,
    /// Found only when the given path is present in the configuration's
    /// search paths.
    Under(PathBuf),
}

/// Toolchain whose answers are scripted per name.
///
/// Records every check it receives, in order, so tests can assert which
/// checks ran and in what order. Entries scripted with `*_under` only
/// succeed once the configuration carries the matching search path, which
/// is how package-manager fallback scenarios are modeled.
#[derive(Debug, Default)]
pub struct MockToolchain {
    libs: HashMap<String, Availability>,
    headers: HashMap<String, Availability>,
    compilers: HashSet<String>,
    versions: HashMap<String, String>,
    pkgs: HashMap<String, PkgFlags>,
    calls: RefCell<Vec<String>>,
}

impl MockToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a library as linkable with default search paths.
    pub fn with_lib(mut self, lib: &str) -> Self {
        self.libs.insert(lib.to_string(), Availability::Default);
        self
    }

    /// Script a library as linkable only under a specific library path.
    pub fn with_lib_under(mut self, lib: &str, path: impl Into<PathBuf>) -> Self {
        self.libs
            .insert(lib.to_string(), Availability::Under(path.into()));
        self
    }

    /// Script a header as includable with default search paths.
    pub fn with_header(mut self, header: &str) -> Self {
        self.headers
            .insert(header.to_string(), Availability::Default);
        self
    }

    /// Script a header as includable only under a specific include path.
    pub fn with_header_under(mut self, header: &str, path: impl Into<PathBuf>) -> Self {
        self.headers
            .insert(header.to_string(), Availability::Under(path.into()));
        self
    }

    /// Script a compiler name as passing its smoke test.
    pub fn with_compiler(mut self, cxx: &str) -> Self {
        self.compilers.insert(cxx.to_string());
        self
    }

    /// Script a compiler's reported version.
    pub fn with_version(mut self, cxx: &str, version: &str) -> Self {
        self.versions.insert(cxx.to_string(), version.to_string());
        self
    }

    /// Script a pkg-config package and the flags it reports.
    pub fn with_pkg(mut self, name: &str, flags: PkgFlags) -> Self {
        self.pkgs.insert(name.to_string(), flags);
        self
    }

    /// Every check received so far, in order, as `kind:name` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, kind: &str, name: &str) {
        self.calls.borrow_mut().push(format!("{}:{}", kind, name));
    }
}

impl Toolchain for MockToolchain {
    fn check_lib(&self, config: &BuildConfig, lib: &str) -> bool {
        self.record("lib", lib);
        match self.libs.get(lib) {
            Some(Availability::Default) => true,
            Some(Availability::Under(path)) => config.lib_paths.contains(path),
            None => false,
        }
    }

    fn check_header(&self, config: &BuildConfig, header: &str) -> bool {
        self.record("header", header);
        match self.headers.get(header) {
            Some(Availability::Default) => true,
            Some(Availability::Under(path)) => config.include_paths.contains(path),
            None => false,
        }
    }

    fn check_compiler(&self, config: &BuildConfig) -> bool {
        self.record("compiler", &config.cxx);
        self.compilers.contains(&config.cxx)
    }

    fn compiler_version(&self, config: &BuildConfig) -> Option<String> {
        self.versions.get(&config.cxx).cloned()
    }

    fn query_pkg(&self, name: &str) -> Option<PkgFlags> {
        self.record("pkg", name);
        self.pkgs.get(name).cloned()
    }
}
