//! Command-line interface for assfc.
//!
//! Turns arguments into the invocation settings layer. Paired switches such
//! as `--with-system` / `--without-system` are mutually exclusive, and giving
//! neither leaves the option unspecified so it falls back to the settings
//! file or the defaults.

use assfc_config::{Invocation, SettingsLayer, TriState};
use clap::Parser;
use std::path::PathBuf;

/// assfc - find the font files an ASS subtitle script needs
#[derive(Parser, Debug)]
#[command(name = "assfc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Additional font directory to include
    #[arg(long = "include", value_name = "DIRECTORY")]
    pub include: Vec<PathBuf>,

    /// Include system fonts
    #[arg(long, conflicts_with = "without_system")]
    pub with_system: bool,

    /// Exclude system fonts
    #[arg(long)]
    pub without_system: bool,

    /// Exclude comments
    #[arg(long, conflicts_with = "include_comments")]
    pub exclude_comments: bool,

    /// Include comments
    #[arg(long)]
    pub include_comments: bool,

    /// Exclude fonts without any glyphs used
    #[arg(long, conflicts_with = "include_unused_fonts")]
    pub exclude_unused_fonts: bool,

    /// Include fonts without any glyphs used
    #[arg(long)]
    pub include_unused_fonts: bool,

    /// Rebuild font cache
    #[arg(long)]
    pub rebuild_cache: bool,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Input script
    pub script: PathBuf,
}

impl Cli {
    /// Build the invocation layer from the parsed arguments.
    pub fn into_invocation(self) -> Invocation {
        let additional_font_dirs = (!self.include.is_empty()).then_some(self.include);
        Invocation {
            script: self.script,
            rebuild_cache: self.rebuild_cache,
            layer: SettingsLayer {
                font_dirs: None,
                include_system_fonts: TriState::from_switches(
                    self.with_system,
                    self.without_system,
                ),
                verbose: TriState::from_switches(self.verbose, false),
                exclude_unused_fonts: TriState::from_switches(
                    self.exclude_unused_fonts,
                    self.include_unused_fonts,
                ),
                exclude_comments: TriState::from_switches(
                    self.exclude_comments,
                    self.include_comments,
                ),
                log_file: self.log_file,
                additional_font_dirs,
                output_location: None,
            },
        }
    }
}

/// Parse the process arguments. Usage errors exit here with clap's status 2.
pub fn parse_invocation() -> Invocation {
    Cli::parse().into_invocation()
}
