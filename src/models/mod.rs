// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: settings, annotations and the exported document.

pub mod annotation;
pub mod document;
pub mod settings;
