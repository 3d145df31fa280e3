//! Shared integration test helpers for assfc.
//!
//! Provides substitute collaborators that return fixed data and record every
//! call into a shared log, so tests can check both the pipeline's result and
//! the order in which it talked to the extractor and the font backend.
//!
//! Include with `mod common;` at the top of a test file.

#![allow(dead_code)]

use assfc::config::Settings;
use assfc::fonts::Resolution;
use assfc::script::{FontDescriptor, ScriptParseError};
use assfc::traits::{FontBackend, FontExtractor, FontLookup};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Ordered record of collaborator calls.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn fonts(names: &[&str]) -> BTreeSet<FontDescriptor> {
    names.iter().map(|n| FontDescriptor::regular(*n)).collect()
}

/// Settings with every option at its built-in default.
pub fn settings(script: &str) -> Settings {
    Settings {
        font_dirs: Vec::new(),
        include_system_fonts: true,
        verbose: false,
        exclude_unused_fonts: false,
        exclude_comments: false,
        log_file: None,
        script: PathBuf::from(script),
        rebuild_cache: false,
        output_location: None,
    }
}

/// Returns a fixed font set, or a parse error when `fail` is set.
pub struct FakeExtractor {
    pub fonts: BTreeSet<FontDescriptor>,
    pub fail: bool,
    pub log: CallLog,
}

impl FakeExtractor {
    pub fn new(fonts: BTreeSet<FontDescriptor>, log: &CallLog) -> Self {
        Self {
            fonts,
            fail: false,
            log: Rc::clone(log),
        }
    }
}

impl FontExtractor for FakeExtractor {
    fn extract(
        &self,
        script: &Path,
        exclude_unused: bool,
        exclude_comments: bool,
    ) -> Result<BTreeSet<FontDescriptor>, ScriptParseError> {
        self.log.borrow_mut().push(format!(
            "extract {} unused={} comments={}",
            script.display(),
            exclude_unused,
            exclude_comments
        ));
        if self.fail {
            return Err(ScriptParseError::MissingSection("Events"));
        }
        Ok(self.fonts.clone())
    }
}

/// Hands out lookups that answer with a fixed resolution.
pub struct FakeBackend {
    pub resolution: Resolution,
    pub log: CallLog,
}

impl FakeBackend {
    pub fn new(resolution: Resolution, log: &CallLog) -> Self {
        Self {
            resolution,
            log: Rc::clone(log),
        }
    }
}

pub struct FakeLookup {
    resolution: Resolution,
    log: CallLog,
}

impl FontBackend for FakeBackend {
    type Lookup = FakeLookup;

    fn discard_cache(&self) -> anyhow::Result<()> {
        self.log.borrow_mut().push("discard".to_string());
        Ok(())
    }

    fn open(&self, font_dirs: &[PathBuf], include_system_fonts: bool) -> anyhow::Result<FakeLookup> {
        self.log.borrow_mut().push(format!(
            "open {:?} system={}",
            font_dirs, include_system_fonts
        ));
        Ok(FakeLookup {
            resolution: self.resolution.clone(),
            log: Rc::clone(&self.log),
        })
    }
}

impl FontLookup for FakeLookup {
    fn resolve(&self, requirements: &BTreeSet<FontDescriptor>) -> Resolution {
        self.log
            .borrow_mut()
            .push(format!("resolve {}", requirements.len()));
        self.resolution.clone()
    }
}
