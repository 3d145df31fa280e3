//! The script-to-font-files pipeline.
//!
//! Given resolved [`Settings`], the pipeline:
//! 1. makes the script path absolute
//! 2. asks the extractor which fonts the script needs
//! 3. discards the font-scan cache when a rebuild was requested
//! 4. opens a font lookup over the configured sources
//! 5. resolves the requirements and turns the result into an [`Outcome`]
//!
//! Nothing is retried; the first collaborator failure ends the run.

use crate::traits::{FontBackend, FontExtractor, FontLookup};
use crate::traits_impl::{AssExtractor, CachedFontBackend};
use anyhow::{Context, Result};
use assfc_config::{
    Defaults, Invocation, Settings, SettingsLayer, persisted_settings_path, resolve_settings,
};
use assfc_fonts::Resolution;
use assfc_script::FontDescriptor;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Exit status for a run where some required font was not found.
pub const EXIT_UNRESOLVED: u8 = 1;

/// Terminal result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every required font was found; these files are reported.
    Resolved(Vec<PathBuf>),
    /// The script needs no fonts.
    NothingRequired,
    /// At least one required font is missing; nothing is reported.
    Unresolved(BTreeSet<FontDescriptor>),
}

impl Outcome {
    /// Apply the decision rule to a lookup result.
    ///
    /// Any missing font makes the whole run unresolved, even if other fonts
    /// were found.
    pub fn from_resolution(resolution: Resolution) -> Self {
        if !resolution.not_found.is_empty() {
            Outcome::Unresolved(resolution.not_found)
        } else if !resolution.found.is_empty() {
            Outcome::Resolved(resolution.paths)
        } else {
            Outcome::NothingRequired
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Unresolved(_) => EXIT_UNRESOLVED,
            Outcome::Resolved(_) | Outcome::NothingRequired => 0,
        }
    }

    /// Write the reported font files, one per line.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if let Outcome::Resolved(paths) = self {
            for path in paths {
                writeln!(out, "{}", path.display())?;
            }
        }
        Ok(())
    }
}

/// Run the pipeline against the given collaborators.
///
/// A [`ScriptParseError`](assfc_script::ScriptParseError) from the extractor
/// is returned as-is inside the `anyhow::Error`, so callers can downcast it.
pub fn run<E, B>(settings: &Settings, extractor: &E, backend: &B) -> Result<Outcome>
where
    E: FontExtractor,
    B: FontBackend,
{
    let script = std::path::absolute(&settings.script)
        .with_context(|| format!("Failed to resolve script path {:?}", settings.script))?;
    log::info!("Collecting fonts for {:?}", script);

    let required = extractor.extract(
        &script,
        settings.exclude_unused_fonts,
        settings.exclude_comments,
    )?;
    log::info!("Script requires {} fonts", required.len());

    // The wipe must finish before the lookup reads the cache
    if settings.rebuild_cache {
        log::info!("Rebuilding font cache");
        backend.discard_cache()?;
    }

    let lookup = backend.open(&settings.font_dirs, settings.include_system_fonts)?;
    let resolution = lookup.resolve(&required);
    log::info!(
        "Found {} fonts in {} files, {} missing",
        resolution.found.len(),
        resolution.paths.len(),
        resolution.not_found.len()
    );

    let outcome = Outcome::from_resolution(resolution);
    if let Outcome::Unresolved(missing) = &outcome {
        for font in missing {
            log::warn!("Font not found: {}", font);
        }
    }
    Ok(outcome)
}

/// Read the settings file at `config_path`, resolve settings for
/// `invocation` and install the logger they ask for.
pub fn load_settings(invocation: &Invocation, config_path: &Path) -> Result<Settings> {
    let persisted = SettingsLayer::load_from(config_path)?;
    let settings = resolve_settings(&Defaults::default(), &persisted, invocation);

    crate::debug::init_log_bridge(settings.verbose, settings.log_file.as_deref());
    // Nothing above could log; the bridge did not exist yet
    log::info!("Loaded settings from {:?}", config_path);
    log::debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

/// Resolve settings for `invocation`, start logging, and run the pipeline
/// with the production collaborators.
pub fn run_invocation(invocation: &Invocation) -> Result<Outcome> {
    let settings = load_settings(invocation, &persisted_settings_path()?)?;
    run(&settings, &AssExtractor, &CachedFontBackend::default())
}
