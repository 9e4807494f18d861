// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Edit settings: background selection, visual effects, padding and shadow.
//!
//! `Settings` is a plain owned record (no shared references anywhere inside),
//! so `Clone` is always a full structural copy. Partial updates are described
//! by [`SettingsPatch`] and overlaid with [`Settings::merge`] (in place) or
//! [`Settings::apply`] (pure).

use serde::{Deserialize, Serialize};

/// Locator of the bundled background used when nothing else resolves.
pub const DEFAULT_BACKGROUND_IMAGE: &str = "bundled://backgrounds/default.jpg";

/// What is painted behind the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    Transparent,
    White,
    Black,
    Gray,
    Gradient,
    Custom,
    #[default]
    Image,
}

impl BackgroundType {
    pub const ALL: [BackgroundType; 7] = [
        BackgroundType::Transparent,
        BackgroundType::White,
        BackgroundType::Black,
        BackgroundType::Gray,
        BackgroundType::Gradient,
        BackgroundType::Custom,
        BackgroundType::Image,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BackgroundType::Transparent => "Transparent",
            BackgroundType::White => "White",
            BackgroundType::Black => "Black",
            BackgroundType::Gray => "Gray",
            BackgroundType::Gradient => "Gradient",
            BackgroundType::Custom => "Custom color",
            BackgroundType::Image => "Image",
        }
    }
}

/// Whether padding is one value for all sides or four independent ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingMode {
    #[default]
    Uniform,
    Individual,
}

/// One side of the padding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Padding around the screenshot, in pixels.
///
/// While `mode` is [`PaddingMode::Uniform`] the four sides always equal
/// `uniform`. In individual mode the sides may diverge and `uniform` is the
/// value remembered for the next switch back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    pub mode: PaddingMode,
    pub uniform: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(100.0)
    }
}

impl Padding {
    /// Uniform padding of `value` on every side.
    pub fn uniform(value: f32) -> Self {
        Self {
            mode: PaddingMode::Uniform,
            uniform: value,
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn side(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut f32 {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    /// Overlay a partial padding update.
    ///
    /// Touching a single side while uniform switches to individual mode;
    /// an explicit `mode: Uniform` in the same patch wins over side values.
    pub fn merge(&mut self, patch: PaddingPatch) {
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(uniform) = finite(patch.uniform) {
            self.uniform = uniform;
        }

        let sides = [
            (Side::Top, patch.top),
            (Side::Right, patch.right),
            (Side::Bottom, patch.bottom),
            (Side::Left, patch.left),
        ];
        if patch.mode != Some(PaddingMode::Uniform) {
            for (side, value) in sides {
                if let Some(value) = finite(value) {
                    self.mode = PaddingMode::Individual;
                    *self.side_mut(side) = value;
                }
            }
        }

        self.normalize();
    }

    /// Re-establish the uniform-mode invariant.
    pub fn normalize(&mut self) {
        if self.mode == PaddingMode::Uniform {
            for side in Side::ALL {
                *self.side_mut(side) = self.uniform;
            }
        }
    }
}

/// Drop shadow under the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// 0..=100
    pub blur: f32,
    /// -50..=50
    pub offset_x: f32,
    /// -50..=50
    pub offset_y: f32,
    /// 0..=100
    pub opacity: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            blur: 20.0,
            offset_x: 0.0,
            offset_y: 10.0,
            opacity: 30.0,
        }
    }
}

impl Shadow {
    pub fn merge(&mut self, patch: ShadowPatch) {
        if let Some(v) = finite(patch.blur) {
            self.blur = v;
        }
        if let Some(v) = finite(patch.offset_x) {
            self.offset_x = v;
        }
        if let Some(v) = finite(patch.offset_y) {
            self.offset_y = v;
        }
        if let Some(v) = finite(patch.opacity) {
            self.opacity = v;
        }
    }
}

/// The complete editable settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub background_type: BackgroundType,
    /// Used when `background_type` is `Custom`.
    pub custom_color: String,
    /// Used when `background_type` is `Image`.
    pub selected_image_src: Option<String>,
    pub gradient_id: String,
    pub gradient_src: String,
    pub gradient_colors: [String; 2],
    /// 0..=100
    pub blur_amount: f32,
    /// 0..=100
    pub noise_amount: f32,
    /// Pixels, >= 0
    pub border_radius: f32,
    pub padding: Padding,
    pub shadow: Shadow,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_type: BackgroundType::Image,
            custom_color: "#667eea".to_string(),
            selected_image_src: Some(DEFAULT_BACKGROUND_IMAGE.to_string()),
            gradient_id: "gradient-1".to_string(),
            gradient_src: "bundled://gradients/gradient-1.jpg".to_string(),
            gradient_colors: ["#667eea".to_string(), "#764ba2".to_string()],
            blur_amount: 0.0,
            noise_amount: 20.0,
            border_radius: 18.0,
            padding: Padding::default(),
            shadow: Shadow::default(),
        }
    }
}

impl Settings {
    /// Overlay `patch` onto this record in place.
    ///
    /// Only string-valued fields present in the patch are moved in, so
    /// numeric updates never allocate.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(background_type) = patch.background_type {
            self.background_type = background_type;
        }
        if let Some(color) = patch.custom_color {
            self.custom_color = color;
        }
        if let Some(src) = patch.selected_image_src {
            self.selected_image_src = src;
        }
        if let Some(id) = patch.gradient_id {
            self.gradient_id = id;
        }
        if let Some(src) = patch.gradient_src {
            self.gradient_src = src;
        }
        if let Some(colors) = patch.gradient_colors {
            self.gradient_colors = colors;
        }
        if let Some(v) = finite(patch.blur_amount) {
            self.blur_amount = v;
        }
        if let Some(v) = finite(patch.noise_amount) {
            self.noise_amount = v;
        }
        if let Some(v) = finite(patch.border_radius) {
            self.border_radius = v;
        }
        if let Some(padding) = patch.padding {
            self.padding.merge(padding);
        }
        if let Some(shadow) = patch.shadow {
            self.shadow.merge(shadow);
        }
    }

    /// Pure variant of [`merge`](Self::merge).
    pub fn apply(&self, patch: SettingsPatch) -> Settings {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

/// Partial update of [`Padding`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaddingPatch {
    pub mode: Option<PaddingMode>,
    pub uniform: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl PaddingPatch {
    pub fn side(side: Side, value: f32) -> Self {
        let mut patch = Self::default();
        match side {
            Side::Top => patch.top = Some(value),
            Side::Right => patch.right = Some(value),
            Side::Bottom => patch.bottom = Some(value),
            Side::Left => patch.left = Some(value),
        }
        patch
    }
}

impl From<Padding> for PaddingPatch {
    fn from(p: Padding) -> Self {
        Self {
            mode: Some(p.mode),
            uniform: Some(p.uniform),
            top: Some(p.top),
            right: Some(p.right),
            bottom: Some(p.bottom),
            left: Some(p.left),
        }
    }
}

/// Partial update of [`Shadow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowPatch {
    pub blur: Option<f32>,
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub opacity: Option<f32>,
}

impl From<Shadow> for ShadowPatch {
    fn from(s: Shadow) -> Self {
        Self {
            blur: Some(s.blur),
            offset_x: Some(s.offset_x),
            offset_y: Some(s.offset_y),
            opacity: Some(s.opacity),
        }
    }
}

/// Partial update of [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub background_type: Option<BackgroundType>,
    pub custom_color: Option<String>,
    /// `Some(None)` clears the selected image.
    pub selected_image_src: Option<Option<String>>,
    pub gradient_id: Option<String>,
    pub gradient_src: Option<String>,
    pub gradient_colors: Option<[String; 2]>,
    pub blur_amount: Option<f32>,
    pub noise_amount: Option<f32>,
    pub border_radius: Option<f32>,
    pub padding: Option<PaddingPatch>,
    pub shadow: Option<ShadowPatch>,
}

impl SettingsPatch {
    pub fn background_type(value: BackgroundType) -> Self {
        Self {
            background_type: Some(value),
            ..Self::default()
        }
    }

    pub fn custom_color(value: impl Into<String>) -> Self {
        Self {
            custom_color: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn selected_image(value: Option<String>) -> Self {
        Self {
            selected_image_src: Some(value),
            ..Self::default()
        }
    }

    /// Select a gradient background in one step.
    pub fn gradient(id: impl Into<String>, src: impl Into<String>, colors: [String; 2]) -> Self {
        Self {
            gradient_id: Some(id.into()),
            gradient_src: Some(src.into()),
            gradient_colors: Some(colors),
            ..Self::default()
        }
    }

    pub fn blur_amount(value: f32) -> Self {
        Self {
            blur_amount: Some(value),
            ..Self::default()
        }
    }

    pub fn noise_amount(value: f32) -> Self {
        Self {
            noise_amount: Some(value),
            ..Self::default()
        }
    }

    pub fn border_radius(value: f32) -> Self {
        Self {
            border_radius: Some(value),
            ..Self::default()
        }
    }

    pub fn padding(patch: impl Into<PaddingPatch>) -> Self {
        Self {
            padding: Some(patch.into()),
            ..Self::default()
        }
    }

    pub fn padding_mode(mode: PaddingMode) -> Self {
        Self::padding(PaddingPatch {
            mode: Some(mode),
            ..PaddingPatch::default()
        })
    }

    pub fn padding_uniform(value: f32) -> Self {
        Self::padding(PaddingPatch {
            uniform: Some(value),
            ..PaddingPatch::default()
        })
    }

    pub fn padding_side(side: Side, value: f32) -> Self {
        Self::padding(PaddingPatch::side(side, value))
    }

    pub fn shadow(patch: impl Into<ShadowPatch>) -> Self {
        Self {
            shadow: Some(patch.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn finite(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}
