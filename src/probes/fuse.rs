//! FUSE implementation discovery.
//!
//! pkg-config metadata for the macOS FUSE ports is unreliable, so when the
//! generic query fails on macOS the libraries are probed directly:
//! `fuse_ino64` (64-bit inode build) first, then the community `osxfuse`
//! port with its non-standard header location.

use super::Prober;

/// Defines required to build against the 64-bit-inode macOS FUSE library.
const INO64_FLAGS: &[&str] = &[
    "-D_FILE_OFFSET_BITS=64",
    "-D__DARWIN_64_BIT_INO_T=1",
    "-D__FreeBSD__=10",
];

/// Header location used by osxfuse installs.
const OSXFUSE_INCLUDE_PATH: &str = "/usr/local/include/osxfuse";

impl Prober<'_> {
    /// Locate a FUSE implementation.
    ///
    /// Tries pkg-config first on every platform. On macOS, falls back to
    /// linking `fuse_ino64` (adding its compatibility defines) and then
    /// `osxfuse` (adding its header path).
    pub fn find_fuse(&mut self) -> bool {
        if self.check_pkg("fuse") {
            return true;
        }
        if !self.ctx.is_macos() {
            return false;
        }

        if self.check_lib("fuse_ino64") {
            for flag in INO64_FLAGS {
                self.config.add_flag(flag);
            }
            return true;
        }
        if self.check_lib("osxfuse") {
            self.config.add_include_path(OSXFUSE_INCLUDE_PATH);
            return true;
        }
        false
    }
}
