//! Settings resolution.
//!
//! Merges settings from three sources into one [`Settings`] record:
//! 1. Invocation (command-line flags)
//! 2. Persisted settings (`config.json` next to the executable)
//! 3. Built-in [`Defaults`]

use crate::{Defaults, Invocation, Settings, SettingsLayer};

/// Resolve the final settings by merging sources in priority order.
///
/// Priority (highest to lowest):
/// 1. Concrete invocation values
/// 2. Concrete persisted values (an explicit `null` counts as unspecified)
/// 3. Defaults
///
/// `additional_font_dirs` and `output_location` do not fall back: they take
/// the invocation value as-is, even when the file defines them. A non-empty
/// `additional_font_dirs` is appended to the resolved `font_dirs`, duplicates
/// included.
///
/// # Arguments
/// * `defaults` - Built-in baseline
/// * `file` - Layer read from the persisted settings file
/// * `invocation` - Layer built from the command line
///
/// # Returns
/// A fully resolved record with every tri-state collapsed to a `bool`
pub fn resolve_settings(
    defaults: &Defaults,
    file: &SettingsLayer,
    invocation: &Invocation,
) -> Settings {
    let cli = &invocation.layer;

    // Helper to resolve a single value through the priority chain
    macro_rules! resolve {
        ($field:ident) => {
            cli.$field
                .clone()
                .or(file.$field.clone())
                .unwrap_or(defaults.$field.clone())
        };
    }

    let mut font_dirs = resolve!(font_dirs);
    if let Some(extra) = &cli.additional_font_dirs {
        font_dirs.extend(extra.iter().cloned());
    }

    Settings {
        font_dirs,
        include_system_fonts: resolve!(include_system_fonts),
        verbose: resolve!(verbose),
        exclude_unused_fonts: resolve!(exclude_unused_fonts),
        exclude_comments: resolve!(exclude_comments),
        log_file: cli
            .log_file
            .clone()
            .or_else(|| file.log_file.clone())
            .or_else(|| defaults.log_file.clone()),
        script: invocation.script.clone(),
        rebuild_cache: invocation.rebuild_cache,
        output_location: cli.output_location.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TriState;
    use std::path::PathBuf;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_resolve_with_no_overrides() {
        let defaults = Defaults::default();
        let resolved = resolve_settings(
            &defaults,
            &SettingsLayer::default(),
            &Invocation::new("show.ass"),
        );

        assert_eq!(resolved.font_dirs, defaults.font_dirs);
        assert_eq!(resolved.include_system_fonts, defaults.include_system_fonts);
        assert_eq!(resolved.verbose, defaults.verbose);
        assert_eq!(resolved.exclude_unused_fonts, defaults.exclude_unused_fonts);
        assert_eq!(resolved.exclude_comments, defaults.exclude_comments);
        assert_eq!(resolved.log_file, None);
        assert_eq!(resolved.script, PathBuf::from("show.ass"));
        assert!(!resolved.rebuild_cache);
        assert_eq!(resolved.output_location, None);
    }

    #[test]
    fn test_file_values_shadow_defaults() {
        let file = SettingsLayer {
            font_dirs: Some(paths(&["/srv/fonts"])),
            include_system_fonts: TriState::Off,
            exclude_comments: TriState::On,
            log_file: Some(PathBuf::from("/tmp/assfc.log")),
            ..Default::default()
        };
        let resolved =
            resolve_settings(&Defaults::default(), &file, &Invocation::new("show.ass"));

        assert_eq!(resolved.font_dirs, paths(&["/srv/fonts"]));
        assert!(!resolved.include_system_fonts);
        assert!(resolved.exclude_comments);
        assert_eq!(resolved.log_file, Some(PathBuf::from("/tmp/assfc.log")));
    }

    #[test]
    fn test_explicit_invocation_off_beats_file_on() {
        let file = SettingsLayer {
            exclude_unused_fonts: TriState::On,
            ..Default::default()
        };
        let mut invocation = Invocation::new("show.ass");
        invocation.layer.exclude_unused_fonts = TriState::Off;

        let resolved = resolve_settings(&Defaults::default(), &file, &invocation);
        assert!(!resolved.exclude_unused_fonts);
    }

    #[test]
    fn test_output_location_ignores_file_value() {
        let file = SettingsLayer {
            output_location: Some(PathBuf::from("/out")),
            additional_font_dirs: Some(paths(&["/from/file"])),
            ..Default::default()
        };
        let resolved =
            resolve_settings(&Defaults::default(), &file, &Invocation::new("show.ass"));

        assert_eq!(resolved.output_location, None);
        assert!(resolved.font_dirs.is_empty());
    }

    #[test]
    fn test_empty_additional_dirs_leave_base_untouched() {
        let file = SettingsLayer {
            font_dirs: Some(paths(&["/a"])),
            ..Default::default()
        };
        let mut invocation = Invocation::new("show.ass");
        invocation.layer.additional_font_dirs = Some(Vec::new());

        let resolved = resolve_settings(&Defaults::default(), &file, &invocation);
        assert_eq!(resolved.font_dirs, paths(&["/a"]));
    }
}
