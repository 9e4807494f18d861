// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persisted defaults: the key-value store, asset identifiers, and the
//! load/save bridge between them and the editor.

pub mod assets;
pub mod bridge;
pub mod store;

pub use assets::{AssetResolver, FsAssetResolver, IdentityResolver};
pub use bridge::{
    load_defaults, load_defaults_in_background, save_defaults, save_effect_settings_as_defaults,
};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
