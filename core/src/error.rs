use std::path::PathBuf;
use thiserror::Error;

/// A defect in how flows were wired together.
///
/// These never describe a runtime condition a user could cause; they mean
/// the registration pass itself is wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WiringError {
    #[error("coordinator for flow `{flow}` is already registered")]
    DuplicateRegistration { flow: String },
    #[error("coordinator for flow `{flow}` not registered")]
    Unregistered { flow: String },
    #[error("coordinator registered under `{expected}` belongs to flow `{found}`")]
    IdentityMismatch { expected: String, found: String },
    #[error("coordinator registered under `{flow}` is not the requested coordinator type")]
    HandleMismatch { flow: String },
    #[error("flow `{flow}` cannot be used as the navigation root")]
    NotRootCapable { flow: String },
}

impl WiringError {
    pub(crate) fn duplicate(flow: impl ToString) -> Self {
        WiringError::DuplicateRegistration {
            flow: flow.to_string(),
        }
    }

    pub(crate) fn unregistered(flow: impl ToString) -> Self {
        WiringError::Unregistered {
            flow: flow.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read navigator config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid navigator config: {0}")]
    Parse(#[from] toml::de::Error),
}
