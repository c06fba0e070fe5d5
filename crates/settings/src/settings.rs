// standard library
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// crate modules
use crate::error::Result;

// external crates
use serde::{Deserialize, Serialize};

/// How a branch state value should be interpreted
///
/// State data are written as plain text, so the type of each value is decided
/// by which name set the key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// Signed integer value
    Int,
    /// Floating point value
    Float,
    /// Left untouched as text
    Str,
}

/// Settings consumed by the readers
///
/// The defaults retain every variable, allow both `B1_` and `INF_` prefixed
/// variants to match an allow-list entry, and assume that no uncertainties are
/// present.
///
/// ```rust
/// # use stools_settings::{Settings, StateKind};
/// let settings = Settings::new()
///     .with_int_variables(["BOR"])
///     .with_float_variables(["TFU"]);
///
/// assert_eq!(settings.state_kind("BOR"), StateKind::Int);
/// assert_eq!(settings.state_kind("TFU"), StateKind::Float);
/// assert_eq!(settings.state_kind("CR"), StateKind::Str);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// State keys to convert to integers
    pub int_variables: HashSet<String>,
    /// State keys to convert to floats
    pub float_variables: HashSet<String>,
    /// Variables to retain, where empty means retain everything
    pub variables: HashSet<String>,
    /// Let `B1_<name>` match an allow-list entry for `<name>`
    pub include_b1: bool,
    /// Let `INF_<name>` match an allow-list entry for `<name>`
    pub include_inf: bool,
    /// Values are interleaved with their uncertainties
    pub uncertainties: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            int_variables: HashSet::new(),
            float_variables: HashSet::new(),
            variables: HashSet::new(),
            include_b1: true,
            include_inf: true,
            uncertainties: false,
        }
    }
}

impl Settings {
    /// Just calls Default::default()
    pub fn new() -> Self {
        Default::default()
    }

    /// Load settings from a JSON string
    ///
    /// ```rust
    /// # use stools_settings::Settings;
    /// let settings = Settings::from_json_str(r#"{"uncertainties": true}"#).unwrap();
    /// assert!(settings.uncertainties);
    /// assert!(settings.include_inf);
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load settings from a JSON file at `path`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Replace the variable allow-list
    pub fn with_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the set of integer typed state keys
    pub fn with_int_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.int_variables = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the set of float typed state keys
    pub fn with_float_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.float_variables = names.into_iter().map(Into::into).collect();
        self
    }

    /// Setter for matching `B1_` prefixed variables
    pub fn set_include_b1(&mut self, include: bool) {
        self.include_b1 = include;
    }

    /// Setter for matching `INF_` prefixed variables
    pub fn set_include_inf(&mut self, include: bool) {
        self.include_inf = include;
    }

    /// Setter for interleaved uncertainties
    pub fn set_uncertainties(&mut self, present: bool) {
        self.uncertainties = present;
    }

    pub fn is_int_variable(&self, key: &str) -> bool {
        self.int_variables.contains(key)
    }

    pub fn is_float_variable(&self, key: &str) -> bool {
        self.float_variables.contains(key)
    }

    /// Decide how the value for a state `key` is typed
    ///
    /// Integer membership is checked first, so a key in both sets is an
    /// integer.
    pub fn state_kind(&self, key: &str) -> StateKind {
        if self.is_int_variable(key) {
            StateKind::Int
        } else if self.is_float_variable(key) {
            StateKind::Float
        } else {
            StateKind::Str
        }
    }
}
