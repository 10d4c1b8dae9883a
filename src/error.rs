//! Errors for the fallible configuration surfaces

use thiserror::Error;

/// Errors raised while configuring UI primitives
#[derive(Error, Debug)]
pub enum UiError {
    #[error("tab strip needs at least one tab")]
    EmptyTabs,

    #[error("duplicate tab key: {0}")]
    DuplicateTab(String),

    #[error("unknown tab key: {0}")]
    UnknownTab(String),

    #[error("invalid navigation config: {0}")]
    InvalidNavConfig(#[from] serde_json::Error),

    #[error("invalid navigation item: {0}")]
    InvalidNavItem(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
