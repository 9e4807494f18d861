// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types.

use thiserror::Error;

/// Failure raised by a [`SettingsStore`](crate::persistence::SettingsStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other backend failure (platform store unavailable, locked, ...).
    #[error("store backend error: {reason}")]
    Backend { reason: String },
}

/// Errors surfaced by the library.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported file extension: {extension:?}")]
    UnsupportedFormat { extension: Option<String> },
}

pub type Result<T> = std::result::Result<T, Error>;
