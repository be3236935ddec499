//! Rendering a build configuration for consumption by other tools.

use super::BuildConfig;

/// Quote a string for POSIX shell assignment.
///
/// Plain words pass through untouched; anything else is single-quoted with
/// embedded quotes escaped.
pub fn sh_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    let safe = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "./_-+=:@%,".contains(c));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

impl BuildConfig {
    /// Render the configuration as `eval`-able shell variable assignments.
    ///
    /// Defines and include paths land in `CPPFLAGS`, library paths in
    /// `LDFLAGS`, everything else in `CXXFLAGS`, matching the conventional
    /// split make-based builds expect.
    pub fn to_shell(&self) -> String {
        let cppflags: Vec<String> = self
            .defines
            .iter()
            .map(|d| format!("-D{}", d))
            .chain(self.include_paths.iter().map(|p| format!("-I{}", p.display())))
            .collect();
        let ldflags: Vec<String> = self
            .lib_paths
            .iter()
            .map(|p| format!("-L{}", p.display()))
            .collect();

        let mut out = String::new();
        out.push_str(&format!("CXX={}\n", sh_quote(&self.cxx)));
        out.push_str(&format!("CXXFLAGS={}\n", sh_quote(&self.flags.join(" "))));
        out.push_str(&format!("CPPFLAGS={}\n", sh_quote(&cppflags.join(" "))));
        out.push_str(&format!("LDFLAGS={}\n", sh_quote(&ldflags.join(" "))));
        out
    }

    /// Render a human-readable summary of the configuration.
    pub fn to_text(&self) -> String {
        fn join_or_none<I: Iterator<Item = String>>(items: I) -> String {
            let joined: Vec<String> = items.collect();
            if joined.is_empty() {
                "(none)".to_string()
            } else {
                joined.join(" ")
            }
        }

        let mut out = String::new();
        out.push_str(&format!("compiler:      {}\n", self.cxx));
        out.push_str(&format!(
            "include paths: {}\n",
            join_or_none(self.include_paths.iter().map(|p| p.display().to_string()))
        ));
        out.push_str(&format!(
            "library paths: {}\n",
            join_or_none(self.lib_paths.iter().map(|p| p.display().to_string()))
        ));
        out.push_str(&format!(
            "defines:       {}\n",
            join_or_none(self.defines.iter().cloned())
        ));
        out.push_str(&format!(
            "flags:         {}\n",
            join_or_none(self.flags.iter().cloned())
        ));
        out
    }
}
