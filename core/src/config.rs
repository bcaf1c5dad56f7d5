use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// What to do when a pop is requested on an empty stack.
///
/// Either way the stack stays empty and the caller sees nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPopPolicy {
    /// Drop the intent silently.
    #[default]
    Ignore,
    /// Drop the intent and emit a `warn!` line.
    Warn,
}

/// Session-level navigator settings.
///
/// ```toml
/// session_label = "checkout"
/// trace_navigation = true
/// empty_pop = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Label attached to every navigation log line.
    pub session_label: String,
    /// Install a `TracingObserver` on construction.
    pub trace_navigation: bool,
    pub empty_pop: EmptyPopPolicy,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            session_label: "waypoint".to_string(),
            trace_navigation: false,
            empty_pop: EmptyPopPolicy::Ignore,
        }
    }
}

impl NavigatorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn with_session_label(mut self, label: impl Into<String>) -> Self {
        self.session_label = label.into();
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.trace_navigation = enabled;
        self
    }

    pub fn with_empty_pop(mut self, policy: EmptyPopPolicy) -> Self {
        self.empty_pop = policy;
        self
    }
}
