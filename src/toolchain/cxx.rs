//! Toolchain implementation driving the real C++ compiler and pkg-config.

use std::fs;
use std::process::{Command, Stdio};

use crate::config::{BuildConfig, PkgFlags};

use super::Toolchain;

/// Smallest program that exercises compile and link.
const SMOKE_SOURCE: &str = "int main() { return 0; }\n";

/// Runs checks by invoking the configured compiler on scratch sources.
///
/// Each check writes a one-line source file to a temp dir, invokes the
/// compiler synchronously with output discarded, and treats the exit status
/// as the sole result. Any failure to spawn the compiler counts as a failed
/// check.
#[derive(Debug, Default)]
pub struct CxxToolchain;

impl CxxToolchain {
    pub fn new() -> Self {
        Self
    }

    /// Compile (and optionally link) a scratch source with the
    /// configuration's flags plus `extra_args`.
    fn try_compile(
        &self,
        config: &BuildConfig,
        source: &str,
        extra_args: &[String],
        link: bool,
    ) -> bool {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => {
                tracing::debug!("could not create scratch dir: {}", err);
                return false;
            }
        };
        let src = dir.path().join("check.cc");
        if let Err(err) = fs::write(&src, source) {
            tracing::debug!("could not write scratch source: {}", err);
            return false;
        }

        let mut cmd = Command::new(&config.cxx);
        cmd.args(config.compile_args());
        let out = if link {
            cmd.args(config.link_args());
            dir.path().join("check.out")
        } else {
            cmd.arg("-c");
            dir.path().join("check.o")
        };
        cmd.arg(&src).arg("-o").arg(&out);
        // Library args go after the objects for single-pass linkers.
        cmd.args(extra_args);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match cmd.status() {
            Ok(status) => status.success(),
            Err(err) => {
                tracing::debug!("could not run {}: {}", config.cxx, err);
                false
            }
        }
    }
}

impl Toolchain for CxxToolchain {
    fn check_lib(&self, config: &BuildConfig, lib: &str) -> bool {
        self.try_compile(config, SMOKE_SOURCE, &[format!("-l{}", lib)], true)
    }

    fn check_header(&self, config: &BuildConfig, header: &str) -> bool {
        let source = format!("#include <{}>\nint main() {{ return 0; }}\n", header);
        self.try_compile(config, &source, &[], false)
    }

    fn check_compiler(&self, config: &BuildConfig) -> bool {
        self.try_compile(config, SMOKE_SOURCE, &[], true)
    }

    fn compiler_version(&self, config: &BuildConfig) -> Option<String> {
        let output = Command::new(&config.cxx)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        extract_version(&String::from_utf8_lossy(&output.stdout))
    }

    fn query_pkg(&self, name: &str) -> Option<PkgFlags> {
        let result = pkg_config::Config::new()
            .cargo_metadata(false)
            .env_metadata(false)
            .probe(name);
        match result {
            Ok(lib) => Some(pkg_flags_from(&lib)),
            Err(err) => {
                tracing::debug!("pkg-config query for '{}' failed: {}", name, err);
                None
            }
        }
    }
}

/// Map a pkg-config library report onto the configuration's flag sections.
fn pkg_flags_from(lib: &pkg_config::Library) -> PkgFlags {
    // pkg-config reports defines unordered; sort for stable flag sequences.
    let mut defines: Vec<String> = lib
        .defines
        .iter()
        .map(|(name, value)| match value {
            Some(value) => format!("{}={}", name, value),
            None => name.clone(),
        })
        .collect();
    defines.sort();

    PkgFlags {
        include_paths: lib.include_paths.clone(),
        lib_paths: lib.link_paths.clone(),
        defines,
        libs: lib.libs.clone(),
        frameworks: lib.frameworks.clone(),
    }
}

/// Extract a version number from `--version` output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_version_semver() {
        let output = "Apple clang version 15.0.0 (clang-1500.3.9.4)";
        assert_eq!(extract_version(output), Some("15.0.0".to_string()));
    }

    #[test]
    fn extract_version_two_part() {
        let output = "foo version 4.2 something";
        assert_eq!(extract_version(output), Some("4.2".to_string()));
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no digits here").is_none());
    }

    #[test]
    fn check_compiler_fails_for_missing_compiler() {
        let config = BuildConfig::with_cxx("this-compiler-does-not-exist-12345");
        let toolchain = CxxToolchain::new();
        assert!(!toolchain.check_compiler(&config));
    }

    #[test]
    fn check_lib_fails_for_missing_compiler() {
        let config = BuildConfig::with_cxx("this-compiler-does-not-exist-12345");
        let toolchain = CxxToolchain::new();
        assert!(!toolchain.check_lib(&config, "m"));
    }

    #[test]
    fn compiler_version_none_for_missing_compiler() {
        let config = BuildConfig::with_cxx("this-compiler-does-not-exist-12345");
        let toolchain = CxxToolchain::new();
        assert!(toolchain.compiler_version(&config).is_none());
    }

    #[test]
    fn query_pkg_none_for_unregistered_package() {
        let toolchain = CxxToolchain::new();
        assert!(toolchain
            .query_pkg("this-package-is-definitely-not-registered-12345")
            .is_none());
    }
}
