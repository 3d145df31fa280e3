// Library exports for testing and potential library use

pub mod cli;
pub mod debug;
pub mod pipeline;
pub mod traits;
pub mod traits_impl;

// Re-export workspace crates for convenience
pub use assfc_config as config;
pub use assfc_fonts as fonts;
pub use assfc_script as script;

pub use pipeline::{Outcome, run, run_invocation};
