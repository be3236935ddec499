//! The build configuration record.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Compiler the configuration starts out with before any selection probe runs.
pub const DEFAULT_CXX: &str = "c++";

/// Mutable build configuration shared by all probes.
///
/// Holds ordered sequences of search paths, preprocessor definitions, and
/// compiler flags, plus the active C++ compiler. Successful probes append to
/// it; append helpers skip exact duplicates so repeated probes never stack
/// the same entry twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildConfig {
    /// Active C++ compiler executable.
    pub cxx: String,

    /// Header search paths, in the order they were discovered.
    pub include_paths: Vec<PathBuf>,

    /// Library search paths, in the order they were discovered.
    pub lib_paths: Vec<PathBuf>,

    /// Preprocessor definitions, as `NAME` or `NAME=VALUE`.
    pub defines: Vec<String>,

    /// Extra compiler flags, passed through verbatim.
    pub flags: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            cxx: DEFAULT_CXX.to_string(),
            include_paths: Vec::new(),
            lib_paths: Vec::new(),
            defines: Vec::new(),
            flags: Vec::new(),
        }
    }
}

/// Value snapshot of the two path sequences, for speculative probes.
///
/// Taken before a trial mutation and restored if the retest fails, so a
/// failed speculation leaves the sequences identical by value to their
/// pre-speculation state.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSnapshot {
    include_paths: Vec<PathBuf>,
    lib_paths: Vec<PathBuf>,
}

/// Flags reported by a pkg-config query, decoupled from the query backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PkgFlags {
    pub include_paths: Vec<PathBuf>,
    pub lib_paths: Vec<PathBuf>,
    pub defines: Vec<String>,
    /// Library names to link, without the `-l` prefix.
    pub libs: Vec<String>,
    /// macOS framework names.
    pub frameworks: Vec<String>,
}

impl BuildConfig {
    /// Create a configuration with the default compiler and empty sequences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration starting from a specific compiler.
    pub fn with_cxx(cxx: &str) -> Self {
        Self {
            cxx: cxx.to_string(),
            ..Self::default()
        }
    }

    /// Append a header search path unless it is already present.
    pub fn add_include_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.include_paths.contains(&path) {
            self.include_paths.push(path);
        }
    }

    /// Append a library search path unless it is already present.
    pub fn add_lib_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.lib_paths.contains(&path) {
            self.lib_paths.push(path);
        }
    }

    /// Append a preprocessor definition unless it is already present.
    pub fn add_define(&mut self, define: &str) {
        if !self.defines.iter().any(|d| d == define) {
            self.defines.push(define.to_string());
        }
    }

    /// Append a compiler flag unless it is already present.
    pub fn add_flag(&mut self, flag: &str) {
        if !self.flags.iter().any(|f| f == flag) {
            self.flags.push(flag.to_string());
        }
    }

    /// Merge flags reported by a pkg-config query.
    pub fn merge(&mut self, pkg: &PkgFlags) {
        for path in &pkg.include_paths {
            self.add_include_path(path.clone());
        }
        for path in &pkg.lib_paths {
            self.add_lib_path(path.clone());
        }
        for define in &pkg.defines {
            self.add_define(define);
        }
        for lib in &pkg.libs {
            self.add_flag(&format!("-l{}", lib));
        }
        for framework in &pkg.frameworks {
            self.add_flag(&format!("-framework {}", framework));
        }
    }

    /// Snapshot the two path sequences before a speculative mutation.
    pub fn path_snapshot(&self) -> PathSnapshot {
        PathSnapshot {
            include_paths: self.include_paths.clone(),
            lib_paths: self.lib_paths.clone(),
        }
    }

    /// Restore the path sequences from a snapshot, discarding the speculation.
    pub fn restore_paths(&mut self, snapshot: PathSnapshot) {
        self.include_paths = snapshot.include_paths;
        self.lib_paths = snapshot.lib_paths;
    }

    /// Arguments for a compile step: flags, `-D` defines, `-I` include paths.
    ///
    /// Flags may hold multi-token entries (e.g. `-framework X`), so each is
    /// split on whitespace.
    pub fn compile_args(&self) -> Vec<String> {
        let mut args: Vec<String> = self
            .flags
            .iter()
            .flat_map(|f| f.split_whitespace().map(String::from))
            .collect();
        for define in &self.defines {
            args.push(format!("-D{}", define));
        }
        for path in &self.include_paths {
            args.push(format!("-I{}", path.display()));
        }
        args
    }

    /// Arguments for a link step: `-L` library paths.
    pub fn link_args(&self) -> Vec<String> {
        self.lib_paths
            .iter()
            .map(|path| format!("-L{}", path.display()))
            .collect()
    }
}

impl PkgFlags {
    /// Convenience constructor for a package that only links a library.
    pub fn lib(name: &str) -> Self {
        Self {
            libs: vec![name.to_string()],
            ..Self::default()
        }
    }

    /// Add an include path, builder style.
    pub fn with_include_path(mut self, path: impl AsRef<Path>) -> Self {
        self.include_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Add a library path, builder style.
    pub fn with_lib_path(mut self, path: impl AsRef<Path>) -> Self {
        self.lib_paths.push(path.as_ref().to_path_buf());
        self
    }
}
