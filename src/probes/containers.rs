//! Unordered-map header detection.
//!
//! Old toolchains shipped the hash map under a pre-standardization `tr1/`
//! path or not at all; Boost carries a drop-in. The chosen variant is
//! communicated to the build through a preprocessor definition.

use super::Prober;

impl Prober<'_> {
    /// Locate a usable unordered-map header.
    ///
    /// Tries the standard header first, then the TR1 variant (define
    /// `HAS_TR1`), then Boost's (define `HAS_BOOST_TR1`). The first hit
    /// wins; at most one definition is ever added.
    pub fn find_unordered_map(&mut self) -> bool {
        if self.check_header("unordered_map") {
            return true;
        }
        if self.check_header("tr1/unordered_map") {
            self.config.add_define("HAS_TR1");
            return true;
        }
        if self.check_header("boost/unordered_map.hpp") {
            self.config.add_define("HAS_BOOST_TR1");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::probes::Prober;
    use crate::report::Reporter;
    use crate::toolchain::MockToolchain;

    #[test]
    fn standard_header_adds_no_define() {
        let mock = MockToolchain::new()
            .with_header("unordered_map")
            .with_header("tr1/unordered_map");
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(prober.find_unordered_map());
        assert!(prober.config().defines.is_empty());
        // Later variants are not tried once an earlier one succeeds.
        assert_eq!(mock.calls(), vec!["header:unordered_map"]);
    }

    #[test]
    fn tr1_variant_adds_tr1_define() {
        let mock = MockToolchain::new().with_header("tr1/unordered_map");
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(prober.find_unordered_map());
        assert_eq!(prober.config().defines, vec!["HAS_TR1"]);
    }

    #[test]
    fn boost_variant_adds_boost_define() {
        let mock = MockToolchain::new().with_header("boost/unordered_map.hpp");
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(prober.find_unordered_map());
        assert_eq!(prober.config().defines, vec!["HAS_BOOST_TR1"]);
    }

    #[test]
    fn variants_are_tried_in_priority_order() {
        let mock = MockToolchain::new().with_header("boost/unordered_map.hpp");
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(prober.find_unordered_map());
        assert_eq!(
            mock.calls(),
            vec![
                "header:unordered_map",
                "header:tr1/unordered_map",
                "header:boost/unordered_map.hpp",
            ]
        );
    }

    #[test]
    fn all_variants_missing_adds_nothing() {
        let mock = MockToolchain::new();
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(!prober.find_unordered_map());
        assert!(prober.config().defines.is_empty());
    }

    #[test]
    fn never_adds_more_than_one_define() {
        let mock = MockToolchain::new()
            .with_header("tr1/unordered_map")
            .with_header("boost/unordered_map.hpp");
        let mut prober = Prober::new(&mock).with_reporter(Reporter::silent());

        assert!(prober.find_unordered_map());
        assert!(prober.find_unordered_map());
        assert_eq!(prober.config().defines, vec!["HAS_TR1"]);
    }
}
