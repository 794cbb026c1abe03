use std::path::PathBuf;

use thiserror::Error;

use crate::account::AccountError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to resolve configuration path: {0}")]
    PathResolution(String),

    #[error("invalid IDP account name '{0}'")]
    InvalidProfileName(String),

    #[error("value for '{key}' contains a line break or control character")]
    UnsupportedValue { key: &'static str },

    #[error("account validation failed")]
    Validation(#[source] AccountError),

    #[error("unable to load configuration file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse configuration file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },

    #[error("failed to save configuration file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IDP account '{0}' not found, run configure to set it up")]
    NotFound(String),
}
