//! Settings resolution for the assfc subtitle font collector.
//!
//! This crate owns everything that decides *how* a run is configured:
//!
//! - [`Defaults`] - the built-in baseline, constructed once at startup
//! - [`SettingsLayer`] - a partially specified layer (persisted file or invocation)
//! - [`TriState`] - booleans that can also be "not specified"
//! - [`resolve_settings`] - merges defaults, file and invocation into [`Settings`]
//! - [`persistence`] - reading `config.json` from next to the executable

pub mod defaults;
pub mod error;
pub mod persistence;
pub mod resolve;
pub mod settings;
mod tristate;

pub use defaults::Defaults;
pub use error::ConfigError;
pub use persistence::{CONFIG_FILE_NAME, persisted_settings_path};
pub use resolve::resolve_settings;
pub use settings::{Invocation, Settings, SettingsLayer};
pub use tristate::TriState;
