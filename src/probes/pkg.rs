//! pkg-config existence checks.

use super::Prober;

impl Prober<'_> {
    /// Check whether pkg-config knows about a package.
    ///
    /// On success the package's reported compiler and linker flags are
    /// merged into the configuration. Failure adds nothing.
    pub fn check_pkg(&mut self, package: &str) -> bool {
        self.report
            .begin(&format!("Checking if pkg-config can find {}", package));
        match self.toolchain.query_pkg(package) {
            Some(flags) => {
                self.config.merge(&flags);
                self.report.finish(true);
                true
            }
            None => {
                self.report.finish(false);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{BuildConfig, PkgFlags};
    use crate::probes::Prober;
    use crate::report::Reporter;
    use crate::toolchain::MockToolchain;

    #[test]
    fn registered_package_merges_flags() {
        let mock = MockToolchain::new().with_pkg(
            "fuse",
            PkgFlags::lib("fuse").with_include_path("/usr/include/fuse"),
        );
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(prober.check_pkg("fuse"));
        assert_eq!(prober.config().flags, vec!["-lfuse"]);
        assert_eq!(
            prober.config().include_paths,
            vec![std::path::PathBuf::from("/usr/include/fuse")]
        );
    }

    #[test]
    fn unregistered_package_leaves_config_unmutated() {
        let mock = MockToolchain::new();
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(!prober.check_pkg("fuse"));
        assert_eq!(prober.config(), &BuildConfig::new());
    }

    #[test]
    fn repeated_check_does_not_duplicate_flags() {
        let mock = MockToolchain::new().with_pkg("zlib", PkgFlags::lib("z"));
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(prober.check_pkg("zlib"));
        assert!(prober.check_pkg("zlib"));
        assert_eq!(prober.config().flags, vec!["-lz"]);
    }
}
