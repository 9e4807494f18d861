// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The single entry point for mutating edit state.
//!
//! Every field can be changed two ways:
//!
//! - **transient** (`set_*`, [`Editor::transient`], `preview_*`): applied to
//!   live state and broadcast immediately, never recorded in history. Meant
//!   for pointer-move and slider-drag frames.
//! - **commit** (`commit_*`, [`Editor::commit`], annotation edits): records an
//!   undo step, applies the change, and invalidates redo.
//!
//! The undo step a commit records is the state as of the previous commit
//! point, not the live state, so a drag previewed through transient updates
//! and finished with one commit undoes in a single step back to where the
//! drag started.

use super::{
    annotations::AnnotationList,
    history::History,
    observers::{Changed, Observers, StateView, SubscriptionId},
    snapshot::Snapshot,
};
use crate::config::EditorConfig;
use crate::models::{
    annotation::{Annotation, AnnotationId},
    document::EditDocument,
    settings::{
        BackgroundType, PaddingMode, PaddingPatch, Settings, SettingsPatch, ShadowPatch, Side,
        DEFAULT_BACKGROUND_IMAGE,
    },
};

/// Owned edit state plus its history and observers.
#[derive(Debug)]
pub struct Editor {
    settings: Settings,
    annotations: AnnotationList,
    history: History,
    observers: Observers,
    /// State at the last commit point, captured lazily by the first
    /// transient update after it.
    pending_base: Option<Snapshot>,
    /// What `reset` returns to: defaults overlaid with hydrated values.
    baseline: Settings,
    fallback_image: String,
    initialized: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        let mut settings = Settings::default();
        settings.selected_image_src = Some(config.default_background_image.clone());
        Self {
            baseline: settings.clone(),
            settings,
            annotations: AnnotationList::new(),
            history: History::with_limit(config.history_limit),
            observers: Observers::new(),
            pending_base: None,
            fallback_image: config.default_background_image.clone(),
            initialized: false,
        }
    }

    // ----------------------------------------------------------------------
    // Read access

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn annotations(&self) -> &[Annotation] {
        self.annotations.as_slice()
    }

    pub fn annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.get(id)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// `(past, future)` stack depths.
    pub fn history_len(&self) -> (usize, usize) {
        (self.history.past_len(), self.history.future_len())
    }

    pub fn is_history_paused(&self) -> bool {
        self.history.is_paused()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn baseline(&self) -> &Settings {
        &self.baseline
    }

    /// Locator used when a stored background cannot be resolved.
    pub fn fallback_image(&self) -> &str {
        &self.fallback_image
    }

    /// Independent copy of the live state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.settings, &self.annotations)
    }

    pub fn document(&self) -> EditDocument {
        EditDocument::new(self.settings.clone(), self.annotations.as_slice().to_vec())
    }

    // ----------------------------------------------------------------------
    // Settings

    /// Apply a settings change without recording it.
    pub fn transient(&mut self, patch: SettingsPatch) {
        self.before_transient();
        self.settings.merge(patch);
        self.notify(Changed::SETTINGS);
    }

    /// Apply a settings change as one undo step.
    pub fn commit(&mut self, patch: SettingsPatch) {
        self.record_commit_point();
        self.settings.merge(patch);
        log::debug!("Committed settings change");
        self.notify(Changed::SETTINGS | Changed::HISTORY);
    }

    // ----------------------------------------------------------------------
    // Annotations

    /// Append an annotation on top of the z-order.
    pub fn add_annotation(&mut self, annotation: Annotation) -> AnnotationId {
        let id = annotation.id;
        self.record_commit_point();
        self.annotations.add(annotation);
        log::info!("Added annotation, total: {}", self.annotations.len());
        self.notify(Changed::ANNOTATIONS | Changed::HISTORY);
        id
    }

    /// Replace the annotation with the same id. No-op if absent.
    pub fn update_annotation(&mut self, annotation: Annotation) -> bool {
        if !self.annotations.contains(annotation.id) {
            return false;
        }
        self.record_commit_point();
        self.annotations.replace(annotation);
        self.notify(Changed::ANNOTATIONS | Changed::HISTORY);
        true
    }

    /// Replace the annotation with the same id without recording it.
    pub fn preview_annotation(&mut self, annotation: Annotation) -> bool {
        if !self.annotations.contains(annotation.id) {
            return false;
        }
        self.before_transient();
        self.annotations.replace(annotation);
        self.notify(Changed::ANNOTATIONS);
        true
    }

    /// Delete by id. No-op (and no history entry) if absent.
    pub fn remove_annotation(&mut self, id: AnnotationId) -> Option<Annotation> {
        if !self.annotations.contains(id) {
            return None;
        }
        self.record_commit_point();
        let removed = self.annotations.remove(id);
        log::info!("Deleted annotation, total: {}", self.annotations.len());
        self.notify(Changed::ANNOTATIONS | Changed::HISTORY);
        removed
    }

    /// Replace the whole annotation list as one undo step.
    pub fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.record_commit_point();
        self.annotations.replace_all(annotations);
        self.notify(Changed::ANNOTATIONS | Changed::HISTORY);
    }

    /// Replace the whole annotation list without recording it.
    pub fn preview_annotations(&mut self, annotations: Vec<Annotation>) {
        self.before_transient();
        self.annotations.replace_all(annotations);
        self.notify(Changed::ANNOTATIONS);
    }

    pub fn clear_annotations(&mut self) -> bool {
        if self.annotations.is_empty() {
            return false;
        }
        self.record_commit_point();
        self.annotations.clear();
        self.notify(Changed::ANNOTATIONS | Changed::HISTORY);
        true
    }

    pub fn bring_to_front(&mut self, id: AnnotationId) -> bool {
        if !self.annotations.contains(id) {
            return false;
        }
        self.record_commit_point();
        self.annotations.bring_to_front(id);
        self.notify(Changed::ANNOTATIONS | Changed::HISTORY);
        true
    }

    pub fn send_to_back(&mut self, id: AnnotationId) -> bool {
        if !self.annotations.contains(id) {
            return false;
        }
        self.record_commit_point();
        self.annotations.send_to_back(id);
        self.notify(Changed::ANNOTATIONS | Changed::HISTORY);
        true
    }

    /// Replace settings and annotations from an imported document as one
    /// undo step.
    pub fn load_document(&mut self, document: EditDocument) {
        self.record_commit_point();
        let EditDocument {
            mut settings,
            annotations,
        } = document;
        settings.padding.normalize();
        self.settings = settings;
        self.annotations.replace_all(annotations);
        log::info!(
            "Loaded document with {} annotations",
            self.annotations.len()
        );
        self.notify(Changed::all());
    }

    // ----------------------------------------------------------------------
    // History

    /// Return to the state before the last commit. No-op when nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.settings, &self.annotations) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone commit. No-op when nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.settings, &self.annotations) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    pub fn pause_history(&mut self) {
        log::debug!("History paused");
        self.history.pause();
    }

    pub fn resume_history(&mut self) {
        log::debug!("History resumed");
        self.history.resume();
    }

    /// Run several commits as a single undo step.
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.record_commit_point();
        let was_paused = self.history.is_paused();
        self.history.pause();
        let result = f(self);
        if !was_paused {
            self.history.resume();
        }
        self.notify(Changed::HISTORY);
        result
    }

    /// Mark the start of a continuous gesture. The next commit records the
    /// state as it is now, however many transient updates follow.
    pub fn begin_gesture(&mut self) {
        self.before_transient();
    }

    /// Throw away transient changes made since the last commit point.
    pub fn cancel_gesture(&mut self) -> bool {
        match self.pending_base.take() {
            Some(base) => {
                let (settings, annotations) = base.into_parts();
                self.settings = settings;
                self.annotations = annotations;
                self.notify(Changed::SETTINGS | Changed::ANNOTATIONS);
                true
            }
            None => false,
        }
    }

    /// Back to the session baseline with empty annotations and history.
    pub fn reset(&mut self) {
        self.settings = self.baseline.clone();
        self.annotations.clear();
        self.history.clear();
        self.pending_base = None;
        log::debug!("Editor reset");
        self.notify(Changed::all());
    }

    // ----------------------------------------------------------------------
    // Hydration

    /// Overlay persisted defaults onto live settings and the baseline.
    ///
    /// Never recorded in history. A pending commit point gets the same
    /// overlay, so cancelling an open gesture keeps the defaults. Marks the
    /// editor initialized.
    pub fn apply_defaults(&mut self, defaults: SettingsPatch) {
        let was_paused = self.history.is_paused();
        self.history.pause();
        self.baseline.merge(defaults.clone());
        if let Some(ref mut base) = self.pending_base {
            base.merge_settings(defaults.clone());
        }
        self.settings.merge(defaults);
        if !was_paused {
            self.history.resume();
        }
        self.initialized = true;
        self.notify(Changed::SETTINGS);
    }

    /// Mark initialization complete without changing anything.
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    // ----------------------------------------------------------------------
    // Observers

    /// Register for every notification. The callback runs once immediately
    /// with the current state.
    pub fn subscribe(&mut self, callback: impl FnMut(&StateView<'_>) + 'static) -> SubscriptionId {
        let id = self.observers.subscribe(callback);
        self.seed(id);
        id
    }

    /// Register for one derived settings field, e.g. `|s| s.padding`.
    pub fn subscribe_field<T, S, F>(&mut self, select: S, callback: F) -> SubscriptionId
    where
        T: PartialEq + 'static,
        S: Fn(&Settings) -> T + 'static,
        F: FnMut(&T) + 'static,
    {
        let id = self
            .observers
            .subscribe_derived(move |view| select(view.settings), callback);
        self.seed(id);
        id
    }

    /// Register for `(can_undo, can_redo)` changes.
    pub fn subscribe_undo_state(&mut self, callback: impl FnMut(&(bool, bool)) + 'static) -> SubscriptionId {
        let id = self
            .observers
            .subscribe_derived(|view| (view.can_undo, view.can_redo), callback);
        self.seed(id);
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ----------------------------------------------------------------------
    // Internals

    fn before_transient(&mut self) {
        if self.pending_base.is_none() {
            self.pending_base = Some(Snapshot::capture(&self.settings, &self.annotations));
        }
    }

    /// Record the last commit point (unless paused) and invalidate redo.
    fn record_commit_point(&mut self) {
        let base = self.pending_base.take();
        if !self.history.is_paused() {
            let snapshot =
                base.unwrap_or_else(|| Snapshot::capture(&self.settings, &self.annotations));
            self.history.push_snapshot(snapshot);
        }
        self.history.clear_future();
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let (settings, annotations) = snapshot.into_parts();
        self.settings = settings;
        self.annotations = annotations;
        self.pending_base = None;
        self.notify(Changed::all());
    }

    fn notify(&mut self, changed: Changed) {
        if self.observers.is_empty() {
            return;
        }
        let view = StateView {
            settings: &self.settings,
            annotations: self.annotations.as_slice(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            changed,
        };
        self.observers.notify(&view);
    }

    fn seed(&mut self, id: SubscriptionId) {
        let view = StateView {
            settings: &self.settings,
            annotations: self.annotations.as_slice(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            changed: Changed::all(),
        };
        self.observers.notify_one(id, &view);
    }
}

/// Generates a transient `set_*` and a recorded `commit_*` method per field.
macro_rules! field_paths {
    ($($(#[$doc:meta])* $set:ident / $commit:ident ($($arg:ident: $ty:ty),*) => $patch:expr;)*) => {
        impl Editor {
            $(
                $(#[$doc])*
                pub fn $set(&mut self, $($arg: $ty),*) {
                    self.transient($patch);
                }

                $(#[$doc])*
                pub fn $commit(&mut self, $($arg: $ty),*) {
                    self.commit($patch);
                }
            )*
        }
    };
}

field_paths! {
    set_background_type / commit_background_type(value: BackgroundType) =>
        SettingsPatch::background_type(value);
    set_custom_color / commit_custom_color(color: String) =>
        SettingsPatch::custom_color(color);
    /// `None` clears the image selection.
    set_selected_image / commit_selected_image(src: Option<String>) =>
        SettingsPatch::selected_image(src);
    set_gradient / commit_gradient(id: String, src: String, colors: [String; 2]) =>
        SettingsPatch::gradient(id, src, colors);
    set_blur_amount / commit_blur_amount(value: f32) =>
        SettingsPatch::blur_amount(value);
    set_noise_amount / commit_noise_amount(value: f32) =>
        SettingsPatch::noise_amount(value);
    set_border_radius / commit_border_radius(value: f32) =>
        SettingsPatch::border_radius(value);
    set_padding_mode / commit_padding_mode(mode: PaddingMode) =>
        SettingsPatch::padding_mode(mode);
    /// Moves all four sides while uniform; only remembered while individual.
    set_padding_uniform / commit_padding_uniform(value: f32) =>
        SettingsPatch::padding_uniform(value);
    /// Switches padding to individual mode if it was uniform.
    set_padding_side / commit_padding_side(side: Side, value: f32) =>
        SettingsPatch::padding_side(side, value);
    set_padding / commit_padding(patch: PaddingPatch) =>
        SettingsPatch::padding(patch);
    set_shadow / commit_shadow(patch: ShadowPatch) =>
        SettingsPatch::shadow(patch);
    set_shadow_blur / commit_shadow_blur(value: f32) =>
        SettingsPatch::shadow(ShadowPatch { blur: Some(value), ..ShadowPatch::default() });
    set_shadow_offset_x / commit_shadow_offset_x(value: f32) =>
        SettingsPatch::shadow(ShadowPatch { offset_x: Some(value), ..ShadowPatch::default() });
    set_shadow_offset_y / commit_shadow_offset_y(value: f32) =>
        SettingsPatch::shadow(ShadowPatch { offset_y: Some(value), ..ShadowPatch::default() });
    set_shadow_opacity / commit_shadow_opacity(value: f32) =>
        SettingsPatch::shadow(ShadowPatch { opacity: Some(value), ..ShadowPatch::default() });
}

impl Editor {
    /// Whether the live background is the bundled fallback image.
    pub fn uses_default_background(&self) -> bool {
        self.settings.background_type == BackgroundType::Image
            && self.settings.selected_image_src.as_deref().map_or(true, |src| {
                src == self.fallback_image || src == DEFAULT_BACKGROUND_IMAGE
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{Point, Shape};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rect() -> Annotation {
        Annotation::new(Shape::Rectangle {
            from: Point::new(0.2, 0.2),
            to: Point::new(0.4, 0.4),
        })
    }

    #[test]
    fn test_transient_never_touches_history() {
        let mut editor = Editor::new();
        editor.commit_blur_amount(5.0);
        editor.undo();
        assert_eq!(editor.history_len(), (0, 1));

        for i in 0..100 {
            editor.set_blur_amount(i as f32);
            editor.set_padding_side(Side::Left, i as f32);
        }
        assert_eq!(editor.history_len(), (0, 1));
        assert_eq!(editor.settings().blur_amount, 99.0);
    }

    #[test]
    fn test_commit_clears_future() {
        let mut editor = Editor::new();
        editor.commit_noise_amount(1.0);
        editor.commit_noise_amount(2.0);
        editor.undo();
        assert!(editor.can_redo());
        editor.commit_border_radius(4.0);
        assert!(!editor.can_redo());
    }

    #[test]
    fn test_drag_undoes_to_gesture_start() {
        let mut editor = Editor::new();
        for step in 1..=10 {
            editor.set_shadow_blur(step as f32 * 5.0);
        }
        editor.commit_shadow_blur(50.0);
        assert_eq!(editor.history_len(), (1, 0));
        editor.undo();
        assert_eq!(editor.settings().shadow.blur, 20.0);
    }

    #[test]
    fn test_cancel_gesture_reverts_preview() {
        let mut editor = Editor::new();
        let ann = rect();
        let id = editor.add_annotation(ann.clone());

        let mut moved = ann;
        moved.translate(0.1, 0.1);
        assert!(editor.preview_annotation(moved));
        assert!(editor.cancel_gesture());
        assert_eq!(editor.annotation(id).map(|a| &a.shape), Some(&rect_shape()));
        assert!(!editor.cancel_gesture());
    }

    fn rect_shape() -> Shape {
        Shape::Rectangle {
            from: Point::new(0.2, 0.2),
            to: Point::new(0.4, 0.4),
        }
    }

    #[test]
    fn test_absent_annotation_ops_do_not_record() {
        let mut editor = Editor::new();
        assert!(!editor.update_annotation(rect()));
        assert!(editor.remove_annotation(AnnotationId::new()).is_none());
        assert!(!editor.bring_to_front(AnnotationId::new()));
        assert!(!editor.clear_annotations());
        assert_eq!(editor.history_len(), (0, 0));
    }

    #[test]
    fn test_batch_is_one_undo_step() {
        let mut editor = Editor::new();
        editor.batch(|e| {
            e.commit_blur_amount(10.0);
            e.commit_noise_amount(10.0);
            e.add_annotation(rect());
        });
        assert_eq!(editor.history_len(), (1, 0));
        assert!(!editor.is_history_paused());

        editor.undo();
        assert_eq!(editor.settings(), &Settings::default());
        assert!(editor.annotations().is_empty());
    }

    #[test]
    fn test_paused_commit_still_clears_future() {
        let mut editor = Editor::new();
        editor.commit_blur_amount(1.0);
        editor.undo();
        editor.pause_history();
        editor.commit_blur_amount(2.0);
        editor.resume_history();
        assert_eq!(editor.history_len(), (0, 0));
    }

    #[test]
    fn test_reset_returns_to_baseline() {
        let mut editor = Editor::new();
        editor.apply_defaults(SettingsPatch::noise_amount(42.0));
        editor.commit_noise_amount(1.0);
        editor.add_annotation(rect());
        editor.reset();
        assert_eq!(editor.settings().noise_amount, 42.0);
        assert!(editor.annotations().is_empty());
        assert_eq!(editor.history_len(), (0, 0));
    }

    #[test]
    fn test_apply_defaults_never_records() {
        let mut editor = Editor::new();
        editor.apply_defaults(SettingsPatch::blur_amount(30.0));
        assert!(editor.is_initialized());
        assert_eq!(editor.history_len(), (0, 0));
        assert_eq!(editor.settings().blur_amount, 30.0);
    }

    #[test]
    fn test_subscribers_see_completed_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut editor = Editor::new();
        let sink = Rc::clone(&seen);
        editor.subscribe(move |view| {
            sink.borrow_mut()
                .push((view.settings.padding.top, view.settings.padding.uniform));
        });
        editor.commit_padding_uniform(60.0);
        assert_eq!(*seen.borrow(), vec![(100.0, 100.0), (60.0, 60.0)]);
    }

    #[test]
    fn test_undo_state_subscription() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut editor = Editor::new();
        let sink = Rc::clone(&seen);
        editor.subscribe_undo_state(move |state| sink.borrow_mut().push(*state));

        editor.set_blur_amount(3.0);
        editor.commit_blur_amount(4.0);
        editor.commit_blur_amount(5.0);
        editor.undo();
        assert_eq!(
            *seen.borrow(),
            vec![(false, false), (true, false), (true, true)]
        );
    }

    #[test]
    fn test_field_subscription_filters_unrelated_changes() {
        let hits = Rc::new(RefCell::new(0));
        let mut editor = Editor::new();
        let counter = Rc::clone(&hits);
        editor.subscribe_field(|s| s.shadow, move |_| *counter.borrow_mut() += 1);

        editor.commit_blur_amount(9.0);
        editor.add_annotation(rect());
        assert_eq!(*hits.borrow(), 1);
        editor.set_shadow_opacity(80.0);
        assert_eq!(*hits.borrow(), 2);
    }

    #[test]
    fn test_uses_default_background() {
        let mut editor = Editor::new();
        assert!(editor.uses_default_background());
        editor.commit_selected_image(Some("/tmp/beach.png".to_string()));
        assert!(!editor.uses_default_background());
        editor.undo();
        editor.commit_background_type(BackgroundType::White);
        assert!(!editor.uses_default_background());
    }

    #[test]
    fn test_load_document_is_undoable_and_normalized() {
        let mut editor = Editor::new();
        let existing = editor.add_annotation(rect());
        let before = editor.snapshot();

        let first = rect();
        let other = rect();
        let mut duplicate = first.clone();
        duplicate.translate(0.3, 0.3);
        let mut settings = Settings::default();
        settings.noise_amount = 80.0;
        settings.padding.mode = PaddingMode::Uniform;
        settings.padding.uniform = 60.0;
        settings.padding.top = 5.0;
        editor.load_document(EditDocument::new(
            settings,
            vec![first.clone(), other.clone(), duplicate.clone()],
        ));

        let ids: Vec<AnnotationId> = editor.annotations().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first.id, other.id]);
        assert_eq!(editor.annotation(first.id), Some(&duplicate));
        let padding = editor.settings().padding;
        for side in Side::ALL {
            assert_eq!(padding.side(side), 60.0);
        }
        assert_eq!(editor.settings().noise_amount, 80.0);
        assert_eq!(editor.history_len(), (2, 0));

        assert!(editor.undo());
        assert_eq!(editor.snapshot(), before);
        assert_eq!(editor.annotations()[0].id, existing);
    }

    #[test]
    fn test_batch_leaves_outer_pause_in_place() {
        let mut editor = Editor::new();
        editor.pause_history();
        editor.batch(|e| {
            e.commit_blur_amount(1.0);
            e.commit_noise_amount(2.0);
        });
        assert!(editor.is_history_paused());
        assert_eq!(editor.history_len(), (0, 0));
        assert_eq!(editor.settings().noise_amount, 2.0);

        editor.resume_history();
        assert!(!editor.is_history_paused());
    }

    #[test]
    fn test_gesture_before_first_preview_is_one_step() {
        let mut editor = Editor::new();
        editor.commit_border_radius(10.0);

        editor.begin_gesture();
        editor.set_shadow_blur(30.0);
        editor.set_shadow_blur(40.0);
        editor.commit_shadow_blur(45.0);
        assert_eq!(editor.history_len(), (2, 0));

        assert!(editor.undo());
        assert_eq!(editor.settings().shadow.blur, 20.0);
        assert_eq!(editor.settings().border_radius, 10.0);
        assert!(editor.undo());
        assert_eq!(editor.settings().border_radius, 18.0);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_bulk_and_reorder_annotation_paths() {
        let mut editor = Editor::new();
        let (a, b, c) = (rect(), rect(), rect());
        editor.set_annotations(vec![a.clone(), b.clone(), c.clone()]);
        assert_eq!(editor.history_len(), (1, 0));

        assert!(editor.send_to_back(c.id));
        let ids: Vec<AnnotationId> = editor.annotations().iter().map(|x| x.id).collect();
        assert_eq!(ids, vec![c.id, a.id, b.id]);
        assert_eq!(editor.history_len(), (2, 0));
        assert!(!editor.send_to_back(rect().id));
        assert_eq!(editor.history_len(), (2, 0));

        editor.preview_annotations(vec![b.clone()]);
        assert_eq!(editor.annotations().len(), 1);
        assert_eq!(editor.history_len(), (2, 0));

        assert!(editor.undo());
        let ids: Vec<AnnotationId> = editor.annotations().iter().map(|x| x.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn test_zero_history_limit_still_undoes() {
        let config = EditorConfig {
            history_limit: 0,
            ..EditorConfig::default()
        };
        let mut editor = Editor::with_config(&config);
        editor.commit_blur_amount(1.0);
        editor.commit_blur_amount(2.0);
        assert_eq!(editor.history_len(), (1, 0));

        assert!(editor.undo());
        assert_eq!(editor.settings().blur_amount, 1.0);
    }
}
