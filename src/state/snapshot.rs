// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Independent copies of the editable state for undo/redo.
//!
//! Every type reachable from [`Settings`] and [`Annotation`] owns its data
//! (strings, vectors, plain numbers; no `Rc`, `Arc` or interior mutability),
//! so a derived `Clone` is a full structural copy. Capturing and restoring
//! therefore never leaves a snapshot sharing anything with live state.

use super::annotations::AnnotationList;
use crate::models::{
    annotation::Annotation,
    settings::{Settings, SettingsPatch},
};
use serde::{Deserialize, Serialize};

/// Settings and annotations at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    settings: Settings,
    annotations: Vec<Annotation>,
}

impl Snapshot {
    /// Deep copy of the given live state.
    pub fn capture(settings: &Settings, annotations: &AnnotationList) -> Self {
        Self {
            settings: settings.clone(),
            annotations: annotations.as_slice().to_vec(),
        }
    }

    /// Deep copy back out, leaving this snapshot untouched.
    pub fn restore(&self) -> (Settings, AnnotationList) {
        self.clone().into_parts()
    }

    /// Consume the snapshot. Used when it has just been popped off a stack
    /// and nothing else can reach it.
    pub fn into_parts(self) -> (Settings, AnnotationList) {
        (self.settings, AnnotationList::from_vec(self.annotations))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Overlay a settings patch onto the captured settings.
    pub fn merge_settings(&mut self, patch: SettingsPatch) {
        self.settings.merge(patch);
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{Point, Shape};
    use crate::models::settings::{PaddingPatch, SettingsPatch, Side};

    fn arrow() -> Annotation {
        Annotation::new(Shape::Arrow {
            from: Point::new(0.1, 0.1),
            to: Point::new(0.9, 0.9),
        })
    }

    #[test]
    fn test_capture_is_independent_of_live_list() {
        let settings = Settings::default();
        let mut live = AnnotationList::new();
        live.add(arrow());

        let snapshot = Snapshot::capture(&settings, &live);
        live.add(arrow());
        let first = live.iter().next().map(|a| a.id);
        if let Some(id) = first {
            live.remove(id);
        }

        assert_eq!(snapshot.annotations().len(), 1);
        assert_ne!(snapshot.annotations()[0].id, live.as_slice()[0].id);
    }

    #[test]
    fn test_capture_is_independent_of_nested_records() {
        let mut settings = Settings::default();
        let live = AnnotationList::new();
        let snapshot = Snapshot::capture(&settings, &live);

        settings.merge(SettingsPatch::padding(PaddingPatch::side(Side::Top, 1.0)));
        settings.shadow.blur = 99.0;

        assert_eq!(snapshot.settings(), &Settings::default());
    }

    #[test]
    fn test_restore_is_independent_of_snapshot() {
        let mut live = AnnotationList::new();
        live.add(arrow());
        let snapshot = Snapshot::capture(&Settings::default(), &live);

        let (mut settings, mut restored) = snapshot.restore();
        restored.add(arrow());
        restored.clear();
        settings.merge(SettingsPatch::noise_amount(80.0));

        assert_eq!(snapshot.annotations().len(), 1);
        assert_eq!(snapshot.settings().noise_amount, 20.0);
    }

    #[test]
    fn test_restore_matches_capture() {
        let mut live = AnnotationList::new();
        live.add(arrow());
        live.add(arrow());
        let settings = Settings::default().apply(SettingsPatch::blur_amount(12.0));

        let (restored_settings, restored) = Snapshot::capture(&settings, &live).restore();
        assert_eq!(restored_settings, settings);
        assert_eq!(restored, live);
    }
}
