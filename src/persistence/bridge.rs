// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hydration of persisted defaults and saving settings back as defaults.
//!
//! Loading is split from applying: [`load_defaults`] only reads the store and
//! builds a [`SettingsPatch`], so it can run on a worker thread while the
//! editor stays usable. [`Editor::finish_initialize`] then overlays the
//! result without touching history.

use super::assets::{AssetResolver, GRADIENT_PREFIX};
use super::store::SettingsStore;
use crate::error::StoreError;
use crate::models::settings::{
    BackgroundType, Padding, PaddingPatch, Settings, SettingsPatch, Shadow, ShadowPatch,
};
use crate::state::Editor;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::mpsc::{channel, Receiver};

/// Store keys.
pub mod keys {
    pub const BACKGROUND_TYPE: &str = "defaultBackgroundType";
    pub const CUSTOM_COLOR: &str = "defaultCustomColor";
    pub const BACKGROUND_IMAGE: &str = "defaultBackgroundImage";
    /// Color stops of the gradient stored under [`BACKGROUND_IMAGE`].
    pub const GRADIENT_COLORS: &str = "defaultGradientColors";
    pub const BLUR_AMOUNT: &str = "defaultBlurAmount";
    pub const NOISE_AMOUNT: &str = "defaultNoiseAmount";
    pub const BORDER_RADIUS: &str = "defaultBorderRadius";
    pub const PADDING: &str = "defaultPadding";
    pub const SHADOW: &str = "defaultShadow";
}

/// Read every persisted default that is present.
///
/// Values that fail to decode are skipped with a warning. A store read
/// failure aborts the whole load. An unresolvable background image falls back
/// to `fallback_image`. A gradient is restored only together with its
/// stored color stops; an unresolvable gradient is skipped.
pub fn load_defaults(
    store: &dyn SettingsStore,
    resolver: &dyn AssetResolver,
    fallback_image: &str,
) -> Result<SettingsPatch, StoreError> {
    let mut patch = SettingsPatch {
        background_type: read::<BackgroundType>(store, keys::BACKGROUND_TYPE)?,
        custom_color: read::<String>(store, keys::CUSTOM_COLOR)?,
        blur_amount: read::<f32>(store, keys::BLUR_AMOUNT)?,
        noise_amount: read::<f32>(store, keys::NOISE_AMOUNT)?,
        border_radius: read::<f32>(store, keys::BORDER_RADIUS)?,
        padding: read::<Padding>(store, keys::PADDING)?.map(PaddingPatch::from),
        shadow: read::<Shadow>(store, keys::SHADOW)?.map(ShadowPatch::from),
        ..SettingsPatch::default()
    };

    if let Some(stored) = read::<String>(store, keys::BACKGROUND_IMAGE)? {
        if stored.starts_with(GRADIENT_PREFIX) {
            let colors = read::<[String; 2]>(store, keys::GRADIENT_COLORS)?;
            match (resolver.resolve(&stored), colors) {
                (Some(src), Some(colors)) => {
                    patch.gradient_id = Some(stored);
                    patch.gradient_src = Some(src);
                    patch.gradient_colors = Some(colors);
                }
                (None, _) => log::warn!("Stored gradient {} no longer resolves, ignoring", stored),
                (Some(_), None) => {
                    log::warn!("Stored gradient {} has no color stops, ignoring", stored)
                }
            }
        } else {
            let src = resolver.resolve(&stored).unwrap_or_else(|| {
                log::warn!("Stored background no longer resolves, using the bundled default");
                fallback_image.to_string()
            });
            patch.selected_image_src = Some(Some(src));
        }
    }

    Ok(patch)
}

/// Run [`load_defaults`] on a background thread.
pub fn load_defaults_in_background<S, R>(
    store: S,
    resolver: R,
    fallback_image: String,
) -> Receiver<Result<SettingsPatch, StoreError>>
where
    S: SettingsStore + Send + 'static,
    R: AssetResolver + Send + 'static,
{
    let (sender, receiver) = channel();
    std::thread::spawn(move || {
        let result = load_defaults(&store, &resolver, &fallback_image);
        let _ = sender.send(result);
    });
    receiver
}

/// Write blur, noise, border radius, padding and shadow as defaults.
pub fn save_effect_settings_as_defaults(
    settings: &Settings,
    store: &mut dyn SettingsStore,
) -> Result<(), StoreError> {
    write_effects(settings, store)?;
    store.save()?;
    log::info!("Saved effect settings as defaults");
    Ok(())
}

/// Write the background selection plus all effect settings as defaults.
pub fn save_defaults(
    settings: &Settings,
    store: &mut dyn SettingsStore,
    resolver: &dyn AssetResolver,
) -> Result<(), StoreError> {
    store.set(keys::BACKGROUND_TYPE, to_value(&settings.background_type)?)?;
    store.set(keys::CUSTOM_COLOR, Value::from(settings.custom_color.as_str()))?;

    let background = match settings.background_type {
        BackgroundType::Gradient => Some(settings.gradient_id.clone()),
        _ => settings
            .selected_image_src
            .as_deref()
            .map(|src| resolver.identify(src)),
    };
    if let Some(id) = background {
        store.set(keys::BACKGROUND_IMAGE, Value::from(id))?;
    }
    if settings.background_type == BackgroundType::Gradient {
        store.set(keys::GRADIENT_COLORS, to_value(&settings.gradient_colors)?)?;
    }

    write_effects(settings, store)?;
    store.save()?;
    log::info!("Saved defaults");
    Ok(())
}

impl Editor {
    /// Hydrate from persisted defaults once. Later calls do nothing.
    ///
    /// Never fails: a store error is logged and the editor keeps its
    /// built-in defaults.
    pub fn initialize(&mut self, store: &dyn SettingsStore, resolver: &dyn AssetResolver) {
        if self.is_initialized() {
            return;
        }
        let fallback = self.fallback_image().to_string();
        self.finish_initialize(load_defaults(store, resolver, &fallback));
    }

    /// Apply the outcome of a [`load_defaults`] run.
    pub fn finish_initialize(&mut self, loaded: Result<SettingsPatch, StoreError>) {
        if self.is_initialized() {
            return;
        }
        match loaded {
            Ok(patch) => {
                let count = patch_field_count(&patch);
                self.apply_defaults(patch);
                log::info!("Loaded {} persisted defaults", count);
            }
            Err(e) => {
                log::warn!("Failed to load persisted defaults, keeping built-ins: {}", e);
                self.mark_initialized();
            }
        }
    }

    pub fn save_defaults(
        &self,
        store: &mut dyn SettingsStore,
        resolver: &dyn AssetResolver,
    ) -> Result<(), StoreError> {
        save_defaults(self.settings(), store, resolver)
    }

    pub fn save_effect_settings_as_defaults(
        &self,
        store: &mut dyn SettingsStore,
    ) -> Result<(), StoreError> {
        save_effect_settings_as_defaults(self.settings(), store)
    }
}

fn write_effects(settings: &Settings, store: &mut dyn SettingsStore) -> Result<(), StoreError> {
    store.set(keys::BLUR_AMOUNT, Value::from(settings.blur_amount))?;
    store.set(keys::NOISE_AMOUNT, Value::from(settings.noise_amount))?;
    store.set(keys::BORDER_RADIUS, Value::from(settings.border_radius))?;
    store.set(keys::PADDING, to_value(&settings.padding)?)?;
    store.set(keys::SHADOW, to_value(&settings.shadow)?)?;
    Ok(())
}

fn read<T: DeserializeOwned>(store: &dyn SettingsStore, key: &str) -> Result<Option<T>, StoreError> {
    let Some(value) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            log::warn!("Ignoring undecodable stored value for {}: {}", key, e);
            Ok(None)
        }
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(value)?)
}

fn patch_field_count(patch: &SettingsPatch) -> usize {
    [
        patch.background_type.is_some(),
        patch.custom_color.is_some(),
        patch.selected_image_src.is_some() || patch.gradient_id.is_some(),
        patch.blur_amount.is_some(),
        patch.noise_amount.is_some(),
        patch.border_radius.is_some(),
        patch.padding.is_some(),
        patch.shadow.is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{PaddingMode, DEFAULT_BACKGROUND_IMAGE};
    use crate::persistence::assets::IdentityResolver;
    use crate::persistence::store::MemoryStore;
    use serde_json::json;

    /// Every operation fails.
    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Backend {
                reason: "unavailable".into(),
            })
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Backend {
                reason: "read-only".into(),
            })
        }

        fn save(&mut self) -> Result<(), StoreError> {
            Err(StoreError::Backend {
                reason: "read-only".into(),
            })
        }
    }

    /// Nothing resolves.
    struct NoAssets;

    impl AssetResolver for NoAssets {
        fn resolve(&self, _stored: &str) -> Option<String> {
            None
        }

        fn identify(&self, locator: &str) -> String {
            locator.to_string()
        }
    }

    #[test]
    fn test_initialize_overlays_present_keys_only() {
        let mut store = MemoryStore::new();
        store.set(keys::BACKGROUND_TYPE, json!("gray")).unwrap();
        store.set(keys::BLUR_AMOUNT, json!(33.0)).unwrap();
        store
            .set(
                keys::PADDING,
                json!({"mode": "individual", "uniform": 40, "top": 10, "right": 20, "bottom": 30, "left": 40}),
            )
            .unwrap();

        let mut editor = Editor::new();
        editor.initialize(&store, &IdentityResolver);

        let settings = editor.settings();
        assert!(editor.is_initialized());
        assert_eq!(settings.background_type, BackgroundType::Gray);
        assert_eq!(settings.blur_amount, 33.0);
        assert_eq!(settings.noise_amount, Settings::default().noise_amount);
        assert_eq!(settings.padding.mode, PaddingMode::Individual);
        assert_eq!(settings.padding.right, 20.0);
        assert_eq!(editor.history_len(), (0, 0));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set(keys::NOISE_AMOUNT, json!(5.0)).unwrap();
        let mut editor = Editor::new();
        editor.initialize(&store, &IdentityResolver);
        editor.commit_noise_amount(70.0);

        store.set(keys::NOISE_AMOUNT, json!(6.0)).unwrap();
        editor.initialize(&store, &IdentityResolver);
        assert_eq!(editor.settings().noise_amount, 70.0);
    }

    #[test]
    fn test_store_failure_is_not_fatal() {
        let mut editor = Editor::new();
        editor.initialize(&BrokenStore, &IdentityResolver);
        assert!(editor.is_initialized());
        assert_eq!(editor.settings(), &Settings::default());
    }

    #[test]
    fn test_undecodable_value_is_skipped() {
        let mut store = MemoryStore::new();
        store.set(keys::SHADOW, json!("not a shadow")).unwrap();
        store.set(keys::BORDER_RADIUS, json!(7.0)).unwrap();
        let patch = load_defaults(&store, &IdentityResolver, DEFAULT_BACKGROUND_IMAGE).unwrap();
        assert_eq!(patch.shadow, None);
        assert_eq!(patch.border_radius, Some(7.0));
    }

    #[test]
    fn test_unresolvable_image_falls_back() {
        let mut store = MemoryStore::new();
        store.set(keys::BACKGROUND_IMAGE, json!("asset:gone")).unwrap();
        let patch = load_defaults(&store, &NoAssets, "bundled://fallback.jpg").unwrap();
        assert_eq!(
            patch.selected_image_src,
            Some(Some("bundled://fallback.jpg".to_string()))
        );
    }

    #[test]
    fn test_stored_gradient_sets_gradient_fields() {
        let mut store = MemoryStore::new();
        store.set(keys::BACKGROUND_IMAGE, json!("gradient-4")).unwrap();
        store.set(keys::GRADIENT_COLORS, json!(["#ff9a9e", "#fad0c4"])).unwrap();
        let patch = load_defaults(&store, &IdentityResolver, DEFAULT_BACKGROUND_IMAGE).unwrap();
        assert_eq!(patch.gradient_id.as_deref(), Some("gradient-4"));
        assert_eq!(
            patch.gradient_colors,
            Some(["#ff9a9e".to_string(), "#fad0c4".to_string()])
        );
        assert_eq!(patch.selected_image_src, None);
    }

    #[test]
    fn test_gradient_without_colors_is_skipped() {
        let mut store = MemoryStore::new();
        store.set(keys::BACKGROUND_IMAGE, json!("gradient-4")).unwrap();
        let mut editor = Editor::new();
        editor.initialize(&store, &IdentityResolver);

        let settings = editor.settings();
        let defaults = Settings::default();
        assert_eq!(settings.gradient_id, defaults.gradient_id);
        assert_eq!(settings.gradient_src, defaults.gradient_src);
        assert_eq!(settings.gradient_colors, defaults.gradient_colors);
    }

    #[test]
    fn test_gradient_round_trips_with_its_colors() {
        let colors = ["#a18cd1".to_string(), "#fbc2eb".to_string()];
        let mut editor = Editor::new();
        editor.commit_gradient("gradient-7".to_string(), "gradient-7".to_string(), colors.clone());
        editor.commit_background_type(BackgroundType::Gradient);
        let mut store = MemoryStore::new();
        editor.save_defaults(&mut store, &IdentityResolver).unwrap();

        let mut fresh = Editor::new();
        fresh.initialize(&store, &IdentityResolver);
        let settings = fresh.settings();
        assert_eq!(settings.background_type, BackgroundType::Gradient);
        assert_eq!(settings.gradient_id, "gradient-7");
        assert_eq!(settings.gradient_colors, colors);
    }

    #[test]
    fn test_save_effects_round_trip() {
        let mut editor = Editor::new();
        editor.commit_blur_amount(44.0);
        editor.commit_padding_uniform(12.0);
        editor.commit_shadow_opacity(90.0);

        let mut store = MemoryStore::new();
        editor.save_effect_settings_as_defaults(&mut store).unwrap();
        assert_eq!(store.get(keys::BACKGROUND_TYPE).unwrap(), None);

        let mut fresh = Editor::new();
        fresh.initialize(&store, &IdentityResolver);
        assert_eq!(fresh.settings().blur_amount, 44.0);
        assert_eq!(fresh.settings().padding, Padding::uniform(12.0));
        assert_eq!(fresh.settings().shadow.opacity, 90.0);
    }

    #[test]
    fn test_save_defaults_stores_gradient_id() {
        let mut editor = Editor::new();
        editor.commit_background_type(BackgroundType::Gradient);
        let mut store = MemoryStore::new();
        editor.save_defaults(&mut store, &IdentityResolver).unwrap();
        assert_eq!(store.get(keys::BACKGROUND_TYPE).unwrap(), Some(json!("gradient")));
        assert_eq!(store.get(keys::BACKGROUND_IMAGE).unwrap(), Some(json!("gradient-1")));
        assert_eq!(
            store.get(keys::GRADIENT_COLORS).unwrap(),
            Some(json!(["#667eea", "#764ba2"]))
        );
    }

    #[test]
    fn test_cancelled_gesture_keeps_hydrated_defaults() {
        let mut store = MemoryStore::new();
        store.set(keys::NOISE_AMOUNT, json!(61.0)).unwrap();

        let mut editor = Editor::new();
        editor.set_blur_amount(5.0);
        editor.initialize(&store, &IdentityResolver);
        assert_eq!(editor.settings().noise_amount, 61.0);

        assert!(editor.cancel_gesture());
        assert_eq!(editor.settings().noise_amount, 61.0);
        assert_eq!(editor.settings().blur_amount, 0.0);
        assert_eq!(editor.history_len(), (0, 0));
    }

    #[test]
    fn test_save_failure_propagates() {
        let editor = Editor::new();
        assert!(editor.save_effect_settings_as_defaults(&mut BrokenStore).is_err());
        assert!(editor.save_defaults(&mut BrokenStore, &IdentityResolver).is_err());
    }

    #[test]
    fn test_background_load_delivers_over_channel() {
        let mut store = MemoryStore::new();
        store.set(keys::NOISE_AMOUNT, json!(61.0)).unwrap();
        let receiver =
            load_defaults_in_background(store, IdentityResolver, DEFAULT_BACKGROUND_IMAGE.to_string());

        let mut editor = Editor::new();
        editor.commit_border_radius(3.0);
        editor.finish_initialize(receiver.recv().unwrap());
        assert_eq!(editor.settings().noise_amount, 61.0);
        assert_eq!(editor.settings().border_radius, 3.0);
        assert_eq!(editor.history_len(), (1, 0));
    }
}
