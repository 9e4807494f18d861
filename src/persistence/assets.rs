// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mapping between stored background identifiers and runtime locators.
//!
//! Stored identifiers come in three forms: `asset:<name>` for a bundled
//! image, `gradient-<n>` for a bundled gradient, or a literal `data:` URL.
//! Uploaded files are stored by path.

use std::path::{Path, PathBuf};

pub const ASSET_PREFIX: &str = "asset:";
pub const GRADIENT_PREFIX: &str = "gradient-";
pub const DATA_URL_PREFIX: &str = "data:";
pub const BUNDLED_PREFIX: &str = "bundled://";

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

pub trait AssetResolver {
    /// Locator usable for rendering, or `None` if `stored` can't be resolved.
    fn resolve(&self, stored: &str) -> Option<String>;
    /// Canonical storable identifier for a runtime locator.
    fn identify(&self, locator: &str) -> String;
}

impl<T: AssetResolver + ?Sized> AssetResolver for Box<T> {
    fn resolve(&self, stored: &str) -> Option<String> {
        (**self).resolve(stored)
    }

    fn identify(&self, locator: &str) -> String {
        (**self).identify(locator)
    }
}

/// Treats identifiers and locators as the same string.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl AssetResolver for IdentityResolver {
    fn resolve(&self, stored: &str) -> Option<String> {
        (!stored.is_empty()).then(|| stored.to_string())
    }

    fn identify(&self, locator: &str) -> String {
        locator.to_string()
    }
}

/// Resolves assets to image files under a directory, checking that each
/// file is a decodable image.
#[derive(Debug, Clone)]
pub struct FsAssetResolver {
    root: PathBuf,
}

impl FsAssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn gradient_dir(&self) -> PathBuf {
        self.root.join("gradients")
    }

    fn find_image(dir: &Path, stem: &str) -> Option<PathBuf> {
        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", stem, ext)))
            .find(|path| is_image(path))
    }
}

impl AssetResolver for FsAssetResolver {
    fn resolve(&self, stored: &str) -> Option<String> {
        let path = if stored.starts_with(DATA_URL_PREFIX) || stored.starts_with(BUNDLED_PREFIX) {
            return Some(stored.to_string());
        } else if let Some(name) = stored.strip_prefix(ASSET_PREFIX) {
            Self::find_image(&self.root, name)
        } else if stored.starts_with(GRADIENT_PREFIX) {
            Self::find_image(&self.gradient_dir(), stored)
        } else {
            let path = PathBuf::from(stored);
            is_image(&path).then_some(path)
        };

        match path {
            Some(path) => Some(path.to_string_lossy().into_owned()),
            None => {
                log::warn!("Unresolvable background asset: {}", truncate(stored));
                None
            }
        }
    }

    fn identify(&self, locator: &str) -> String {
        let path = Path::new(locator);
        let stem = path.file_stem().and_then(|s| s.to_str());
        match (path.parent(), stem) {
            (Some(parent), Some(stem)) if parent == self.gradient_dir() => stem.to_string(),
            (Some(parent), Some(stem)) if parent == self.root => format!("{}{}", ASSET_PREFIX, stem),
            _ => locator.to_string(),
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.is_file() && image::image_dimensions(path).is_ok()
}

/// Data URLs can be megabytes long; keep log lines short.
fn truncate(s: &str) -> &str {
    match s.char_indices().nth(64) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
