use crate::error::{Error, Result};
use std::env::{self, VarError};
use std::str::FromStr;

/// Maximum length of a Kubernetes object name.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 253;

/// Length of a ULID string.
pub const DEFAULT_ID_LENGTH: usize = 26;

/// Maximum length of the name suffix. The suffix usually holds a short SHA,
/// so it is cut much shorter than the prefix.
pub const DEFAULT_MAX_SUFFIX_LENGTH: usize = 7;

/// Length limits for the generated AnalysisRun name
/// (`prefix.id.suffix`).
///
/// Only constructed through [`NameLimits::new`], [`NameLimits::from_env`] or
/// `Default`, so every value leaves room for a non-empty prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameLimits {
    max_name_length: usize,
    id_length: usize,
    max_suffix_length: usize,
}

impl Default for NameLimits {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            id_length: DEFAULT_ID_LENGTH,
            max_suffix_length: DEFAULT_MAX_SUFFIX_LENGTH,
        }
    }
}

impl NameLimits {
    pub fn new(max_name_length: usize, id_length: usize, max_suffix_length: usize) -> Result<Self> {
        let limits = Self {
            max_name_length,
            id_length,
            max_suffix_length,
        };
        limits.validate()?;
        Ok(limits)
    }

    pub fn from_env() -> Result<Self> {
        Self::new(
            env_or("ANALYSIS_RUN_MAX_NAME_LENGTH", DEFAULT_MAX_NAME_LENGTH)?,
            env_or("ANALYSIS_RUN_ID_LENGTH", DEFAULT_ID_LENGTH)?,
            env_or("ANALYSIS_RUN_MAX_SUFFIX_LENGTH", DEFAULT_MAX_SUFFIX_LENGTH)?,
        )
    }

    /// Hard ceiling on the full resource name
    pub fn max_name_length(&self) -> usize {
        self.max_name_length
    }

    /// Exact length of the sortable identifier embedded in the name
    pub fn id_length(&self) -> usize {
        self.id_length
    }

    pub fn max_suffix_length(&self) -> usize {
        self.max_suffix_length
    }

    /// Maximum length of the name prefix, leaving room for the identifier,
    /// the suffix and both `.` separators.
    pub fn max_prefix_length(&self) -> usize {
        self.max_name_length
            .saturating_sub(1 + self.id_length)
            .saturating_sub(1 + self.max_suffix_length)
    }

    fn validate(&self) -> Result<()> {
        if self.id_length == 0 {
            return Err(Error::ConfigError(
                "identifier length must be greater than zero".to_string(),
            ));
        }
        if self.max_prefix_length() == 0 {
            return Err(Error::ConfigError(format!(
                "max name length {} leaves no room for a prefix (id {}, suffix {})",
                self.max_name_length, self.id_length, self.max_suffix_length
            )));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    parse_or(key, env::var(key), default)
}

fn parse_or<T: FromStr>(key: &str, value: std::result::Result<String, VarError>, default: T) -> Result<T> {
    match value {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::ConfigError(format!("{} is not a valid number: {:?}", key, raw))),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(raw)) => Err(Error::ConfigError(format!(
            "{} is not valid unicode: {:?}",
            key, raw
        ))),
    }
}
