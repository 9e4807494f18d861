// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Complete edit data for export and import.

use super::{annotation::Annotation, settings::Settings};
use serde::{Deserialize, Serialize};

/// Settings plus the ordered annotation list, as written to disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditDocument {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl EditDocument {
    pub fn new(settings: Settings, annotations: Vec<Annotation>) -> Self {
        Self {
            settings,
            annotations,
        }
    }
}
