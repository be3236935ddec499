//! Human-readable check diagnostics.
//!
//! Probes narrate their progress as `Checking for X... yes` lines on
//! stdout. The lines are informational only; callers consume probe results
//! through return values, never by parsing this output.

use std::io::Write;
use std::str::FromStr;

use console::style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show check lines plus per-candidate detail.
    Verbose,
    /// Show check lines.
    #[default]
    Normal,
    /// Show only the final configuration output.
    Quiet,
    /// Show nothing.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode narrates individual checks.
    pub fn shows_checks(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows per-candidate detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Writes check progress lines, gated by an [`OutputMode`].
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    mode: OutputMode,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputMode::Normal)
    }
}

impl Reporter {
    /// Create a reporter with the given mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Create a reporter that writes nothing. Used by tests and embedders.
    pub fn silent() -> Self {
        Self::new(OutputMode::Silent)
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Announce a check in progress, without a trailing newline.
    pub fn begin(&self, what: &str) {
        if self.mode.shows_checks() {
            print!("{}... ", what);
            let _ = std::io::stdout().flush();
        }
    }

    /// Complete the check announced by [`begin`](Self::begin).
    pub fn finish(&self, ok: bool) {
        if self.mode.shows_checks() {
            if ok {
                println!("{}", style("yes").green());
            } else {
                println!("{}", style("no").red());
            }
        }
    }

    /// Write a standalone progress line.
    pub fn note(&self, msg: &str) {
        if self.mode.shows_checks() {
            println!("{}", msg);
        }
    }

    /// Write a per-candidate detail line (verbose mode only).
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", style(msg).dim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("invalid".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_shows_checks() {
        assert!(OutputMode::Verbose.shows_checks());
        assert!(OutputMode::Normal.shows_checks());
        assert!(!OutputMode::Quiet.shows_checks());
        assert!(!OutputMode::Silent.shows_checks());
    }

    #[test]
    fn output_mode_shows_detail() {
        assert!(OutputMode::Verbose.shows_detail());
        assert!(!OutputMode::Normal.shows_detail());
        assert!(!OutputMode::Quiet.shows_detail());
    }

    #[test]
    fn silent_reporter_mode() {
        assert_eq!(Reporter::silent().mode(), OutputMode::Silent);
    }

    #[test]
    fn default_reporter_is_normal() {
        assert_eq!(Reporter::default().mode(), OutputMode::Normal);
    }
}
