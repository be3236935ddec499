//! The `probe` command: run requested probes, emit the configuration.

use crate::cli::args::{EmitFormat, ProbeArgs};
use crate::error::{Result, ScoutError};
use crate::lookup;
use crate::probes::{Prober, DEFAULT_COMPILERS};
use crate::report::Reporter;
use crate::toolchain::CxxToolchain;

/// The probe command implementation.
pub struct ProbeCommand {
    args: ProbeArgs,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(args: ProbeArgs) -> Self {
        Self { args }
    }
}

impl super::Command for ProbeCommand {
    fn execute(&self, report: &Reporter) -> Result<super::CommandResult> {
        let toolchain = CxxToolchain::new();
        let mut prober = Prober::new(&toolchain).with_reporter(*report);
        let mut missing: Vec<String> = Vec::new();

        // Compiler selection first, since every later check runs through
        // the selected compiler.
        if self.args.find_cxx || !self.args.compilers.is_empty() {
            let preferred: Vec<&str> = if self.args.compilers.is_empty() {
                DEFAULT_COMPILERS.to_vec()
            } else {
                self.args.compilers.iter().map(String::as_str).collect()
            };
            if !prober.select_compiler(&preferred) {
                missing.push("a working C++ compiler".to_string());
            }
        }

        for package in &self.args.pkgs {
            if !prober.check_pkg(package) {
                missing.push(format!("pkg-config package '{}'", package));
            }
        }

        let search_path = lookup::parse_system_path();
        for spec in &self.args.libs {
            let (lib, header) = parse_lib_spec(spec)?;
            let found = if self.args.managers.is_empty() {
                prober.find_library(lib, header)
            } else {
                let managers: Vec<&str> =
                    self.args.managers.iter().map(String::as_str).collect();
                prober.find_library_with(lib, header, &managers, &search_path)
            };
            if !found {
                missing.push(format!("library '{}'", lib));
            }
        }

        if self.args.unordered_map && !prober.find_unordered_map() {
            missing.push("an unordered_map header".to_string());
        }

        if self.args.fuse && !prober.find_fuse() {
            missing.push("a FUSE implementation".to_string());
        }

        let config = prober.into_config();
        match self.args.format {
            EmitFormat::Shell => print!("{}", config.to_shell()),
            EmitFormat::Json => {
                let json = serde_json::to_string_pretty(&config).map_err(|err| {
                    ScoutError::EmitError {
                        message: err.to_string(),
                    }
                })?;
                println!("{}", json);
            }
            EmitFormat::Text => print!("{}", config.to_text()),
        }

        if missing.is_empty() {
            Ok(super::CommandResult::success())
        } else {
            eprintln!("Missing: {}", missing.join(", "));
            Ok(super::CommandResult::failure(1))
        }
    }
}

/// Split a `LIB:HEADER` spec into its parts.
fn parse_lib_spec(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once(':') {
        Some((lib, header)) if !lib.is_empty() && !header.is_empty() => Ok((lib, header)),
        _ => Err(ScoutError::InvalidLibSpec {
            spec: spec.to_string(),
        }),
    }
}
