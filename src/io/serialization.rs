// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Edit document serialization and deserialization.
//!
//! This module handles exporting and importing the settings plus annotation
//! list in YAML and JSON formats, chosen by file extension.

use crate::error::{Error, Result};
use crate::models::document::EditDocument;
use std::path::Path;

/// On-disk document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.map(str::to_string),
            }),
        }
    }
}

/// Export a document to YAML format.
pub fn export_yaml(data: &EditDocument, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a document to JSON format.
pub fn export_json(data: &EditDocument, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a document from YAML format.
pub fn import_yaml(path: &Path) -> Result<EditDocument> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import a document from JSON format.
pub fn import_json(path: &Path) -> Result<EditDocument> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

/// Export in the format implied by the file extension.
pub fn export(data: &EditDocument, path: &Path) -> Result<()> {
    match Format::from_path(path)? {
        Format::Yaml => export_yaml(data, path),
        Format::Json => export_json(data, path),
    }?;
    log::info!(
        "Exported {} annotations to {}",
        data.annotations.len(),
        path.display()
    );
    Ok(())
}

/// Import in the format implied by the file extension.
pub fn import(path: &Path) -> Result<EditDocument> {
    let data = match Format::from_path(path)? {
        Format::Yaml => import_yaml(path),
        Format::Json => import_json(path),
    }?;
    log::info!(
        "Imported {} annotations from {}",
        data.annotations.len(),
        path.display()
    );
    Ok(data)
}
