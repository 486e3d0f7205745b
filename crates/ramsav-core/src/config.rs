//! Reader configuration
//!
//! Controls how the optional path hint is checked before a dump is
//! reconstructed.

use std::path::Path;

use strum::{Display, EnumString};

/// File name written by the RAM dump exploit
pub const DEFAULT_DUMP_NAME: &str = "ramsav.bin";
/// Fragment accepted by the looser `contains` rule
pub const DEFAULT_NAME_FRAGMENT: &str = "ramsav";

/// How a path hint must be named for the reader to accept it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FilenameRule {
    /// File name must equal the expected name
    #[default]
    Exact,
    /// File name must contain the name fragment
    Contains,
    /// Path hints are not checked
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub filename_rule: FilenameRule,
    pub expected_name: String,
    pub name_fragment: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            filename_rule: FilenameRule::default(),
            expected_name: DEFAULT_DUMP_NAME.to_string(),
            name_fragment: DEFAULT_NAME_FRAGMENT.to_string(),
        }
    }
}

impl ReaderConfig {
    /// Create a new configuration builder
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }

    /// Check a path hint against the filename rule
    pub fn accepts_path(&self, path: &Path) -> bool {
        if self.filename_rule == FilenameRule::Ignore {
            return true;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        match self.filename_rule {
            FilenameRule::Exact => name == self.expected_name,
            FilenameRule::Contains => name.contains(self.name_fragment.as_str()),
            FilenameRule::Ignore => true,
        }
    }
}

/// Builder for ReaderConfig
#[derive(Debug, Clone, Default)]
pub struct ReaderConfigBuilder {
    filename_rule: Option<FilenameRule>,
    expected_name: Option<String>,
    name_fragment: Option<String>,
}

impl ReaderConfigBuilder {
    pub fn filename_rule(mut self, rule: FilenameRule) -> Self {
        self.filename_rule = Some(rule);
        self
    }

    /// Set the file name required by the `exact` rule
    pub fn expected_name<S: Into<String>>(mut self, name: S) -> Self {
        self.expected_name = Some(name.into());
        self
    }

    /// Set the fragment required by the `contains` rule
    pub fn name_fragment<S: Into<String>>(mut self, fragment: S) -> Self {
        self.name_fragment = Some(fragment.into());
        self
    }

    pub fn build(self) -> ReaderConfig {
        let default = ReaderConfig::default();
        ReaderConfig {
            filename_rule: self.filename_rule.unwrap_or(default.filename_rule),
            expected_name: self.expected_name.unwrap_or(default.expected_name),
            name_fragment: self.name_fragment.unwrap_or(default.name_fragment),
        }
    }
}
