// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! SHOTFRAME - screenshot beautifier edit state
//!
//! Holds the current edit of a screenshot (background, visual effects,
//! padding, shadow and annotations) and mutates it through an [`Editor`]
//! that separates live-preview updates from undoable commits.
//!
//! Rendering, platform storage and UI widgets are collaborators: the editor
//! reads and writes defaults through [`persistence::SettingsStore`] and
//! [`persistence::AssetResolver`], and reports changes to subscribers.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod persistence;
pub mod state;
pub mod util;

pub use config::EditorConfig;
pub use error::{Error, Result, StoreError};
pub use models::annotation::{Annotation, AnnotationId, Point, Shape, Stroke};
pub use models::document::EditDocument;
pub use models::settings::{
    BackgroundType, Padding, PaddingMode, PaddingPatch, Settings, SettingsPatch, Shadow,
    ShadowPatch, Side,
};
pub use state::{Changed, Editor, StateView, SubscriptionId};
