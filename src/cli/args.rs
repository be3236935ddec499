//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// buildscout - Build-environment capability probing.
#[derive(Debug, Parser)]
#[command(name = "buildscout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the host and emit the resulting build configuration (default)
    Probe(ProbeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Select a working C++ compiler before other checks
    #[arg(long)]
    pub find_cxx: bool,

    /// Compiler preference order (implies --find-cxx)
    #[arg(long, value_delimiter = ',', value_name = "CXX,...")]
    pub compilers: Vec<String>,

    /// pkg-config packages to check
    #[arg(long = "pkg", value_name = "NAME")]
    pub pkgs: Vec<String>,

    /// Libraries to locate, as LIB:HEADER
    #[arg(long = "lib", value_name = "LIB:HEADER")]
    pub libs: Vec<String>,

    /// Package managers to try when a library is missing on macOS
    #[arg(long, value_delimiter = ',', value_name = "NAME,...")]
    pub managers: Vec<String>,

    /// Probe for a usable unordered-map header
    #[arg(long)]
    pub unordered_map: bool,

    /// Probe for a FUSE implementation
    #[arg(long)]
    pub fuse: bool,

    /// Output format for the resulting configuration
    #[arg(long, value_enum, default_value_t = EmitFormat::Shell)]
    pub format: EmitFormat,
}

/// How the accumulated configuration is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EmitFormat {
    /// `eval`-able shell variable assignments
    #[default]
    Shell,
    /// JSON document
    Json,
    /// Human-readable summary
    Text,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
