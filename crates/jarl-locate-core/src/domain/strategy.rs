//! Executable strategy selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which executable source the user prefers first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutableStrategy {
    /// Prefer the copy shipped with the extension, fall back to the search path.
    #[default]
    Bundled,
    /// Prefer the search path, fall back to the bundled copy.
    Environment,
    /// Only use `jarl.executablePath`.
    Path,
}

impl ExecutableStrategy {
    /// All recognized strategies, in declaration order.
    pub const ALL: [Self; 3] = [Self::Bundled, Self::Environment, Self::Path];

    /// The configuration literal for this strategy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::Environment => "environment",
            Self::Path => "path",
        }
    }

    /// Match a configuration literal exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|strategy| strategy.as_str() == name)
    }
}

impl fmt::Display for ExecutableStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strategy value as it arrived from configuration.
///
/// Parsing never fails: a literal outside the recognized set is kept as
/// `Unrecognized` so the resolver can reject it instead of defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StrategySetting {
    Known(ExecutableStrategy),
    Unrecognized(String),
}

impl StrategySetting {
    /// The recognized strategy, if any.
    pub const fn known(&self) -> Option<ExecutableStrategy> {
        match self {
            Self::Known(strategy) => Some(*strategy),
            Self::Unrecognized(_) => None,
        }
    }
}

impl Default for StrategySetting {
    fn default() -> Self {
        Self::Known(ExecutableStrategy::default())
    }
}

impl From<ExecutableStrategy> for StrategySetting {
    fn from(strategy: ExecutableStrategy) -> Self {
        Self::Known(strategy)
    }
}

impl From<&str> for StrategySetting {
    fn from(raw: &str) -> Self {
        ExecutableStrategy::from_name(raw)
            .map_or_else(|| Self::Unrecognized(raw.to_string()), Self::Known)
    }
}

impl From<String> for StrategySetting {
    fn from(raw: String) -> Self {
        match ExecutableStrategy::from_name(&raw) {
            Some(strategy) => Self::Known(strategy),
            None => Self::Unrecognized(raw),
        }
    }
}

impl From<StrategySetting> for String {
    fn from(setting: StrategySetting) -> Self {
        match setting {
            StrategySetting::Known(strategy) => strategy.as_str().to_string(),
            StrategySetting::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for StrategySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(strategy) => strategy.fmt(f),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
