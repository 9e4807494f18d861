// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bounded linear undo/redo over full-state snapshots.

use super::{annotations::AnnotationList, snapshot::Snapshot};
use crate::models::settings::Settings;
use std::collections::VecDeque;

/// Default number of undo (and redo) steps kept.
pub const HISTORY_LIMIT: usize = 50;

/// History system for undo/redo functionality.
///
/// `past` is oldest-first; `future` keeps the most recently undone state at
/// its front. Both are capped at `max_size`, evicting the oldest entries.
#[derive(Debug, Clone)]
pub struct History {
    past: VecDeque<Snapshot>,
    future: VecDeque<Snapshot>,
    max_size: usize,
    paused: bool,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// A limit of zero is raised to one.
    pub fn with_limit(max_size: usize) -> Self {
        if max_size == 0 {
            log::warn!("History limit of 0 would disable undo, keeping 1 step");
        }
        let max_size = max_size.max(1);
        Self {
            past: VecDeque::with_capacity(max_size.min(HISTORY_LIMIT) + 1),
            future: VecDeque::new(),
            max_size,
            paused: false,
        }
    }

    /// Save the current state before a change. Inert while paused.
    ///
    /// Returns whether an entry was recorded.
    pub fn push(&mut self, settings: &Settings, annotations: &AnnotationList) -> bool {
        if self.paused {
            log::trace!("History push suppressed while paused");
            return false;
        }
        self.push_past(Snapshot::capture(settings, annotations));
        true
    }

    /// Like [`push`](Self::push) for a snapshot captured earlier.
    pub fn push_snapshot(&mut self, snapshot: Snapshot) -> bool {
        if self.paused {
            log::trace!("History push suppressed while paused");
            return false;
        }
        self.push_past(snapshot);
        true
    }

    /// Step back. The current state moves to the front of `future` and the
    /// returned snapshot is what live state must be restored from.
    pub fn undo(&mut self, settings: &Settings, annotations: &AnnotationList) -> Option<Snapshot> {
        let previous = self.past.pop_back()?;
        self.future.push_front(Snapshot::capture(settings, annotations));
        self.future.truncate(self.max_size);
        log::debug!(
            "Undo (past: {}, future: {})",
            self.past.len(),
            self.future.len()
        );
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, settings: &Settings, annotations: &AnnotationList) -> Option<Snapshot> {
        let next = self.future.pop_front()?;
        self.push_past(Snapshot::capture(settings, annotations));
        log::debug!(
            "Redo (past: {}, future: {})",
            self.past.len(),
            self.future.len()
        );
        Some(next)
    }

    /// Drop every redo step. Called on each new committed edit.
    pub fn clear_future(&mut self) {
        self.future.clear();
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Most recent undo target, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.past.back()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn push_past(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        while self.past.len() > self.max_size {
            self.past.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::SettingsPatch;

    fn with_noise(value: f32) -> Settings {
        Settings::default().apply(SettingsPatch::noise_amount(value))
    }

    #[test]
    fn test_push_undo_redo() {
        let annotations = AnnotationList::new();
        let mut history = History::new();
        assert!(!history.can_undo());

        history.push(&with_noise(1.0), &annotations);
        let restored = history.undo(&with_noise(2.0), &annotations).unwrap();
        assert_eq!(restored.settings().noise_amount, 1.0);
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let again = history.redo(&with_noise(1.0), &annotations).unwrap();
        assert_eq!(again.settings().noise_amount, 2.0);
        assert_eq!(history.past_len(), 1);
        assert_eq!(history.future_len(), 0);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let annotations = AnnotationList::new();
        let mut history = History::new();
        assert!(history.undo(&Settings::default(), &annotations).is_none());
        assert!(history.redo(&Settings::default(), &annotations).is_none());
        assert_eq!(history.future_len(), 0);
        assert_eq!(history.past_len(), 0);
    }

    #[test]
    fn test_past_evicts_oldest() {
        let annotations = AnnotationList::new();
        let mut history = History::new();
        for i in 0..60 {
            history.push(&with_noise(i as f32), &annotations);
        }
        assert_eq!(history.past_len(), HISTORY_LIMIT);
        assert_eq!(history.last().unwrap().settings().noise_amount, 59.0);

        let mut oldest = None;
        while let Some(s) = history.undo(&Settings::default(), &annotations) {
            oldest = Some(s.settings().noise_amount);
        }
        assert_eq!(oldest, Some(10.0));
    }

    #[test]
    fn test_future_drops_tail_on_overflow() {
        let annotations = AnnotationList::new();
        let mut history = History::with_limit(3);
        for i in 0..3 {
            history.push(&with_noise(i as f32), &annotations);
        }
        // Fill future beyond its cap by undoing and re-pushing past.
        history.undo(&with_noise(10.0), &annotations);
        history.undo(&with_noise(11.0), &annotations);
        history.undo(&with_noise(12.0), &annotations);
        assert_eq!(history.future_len(), 3);
        history.push(&with_noise(20.0), &annotations);
        history.undo(&with_noise(21.0), &annotations);
        assert_eq!(history.future_len(), 3);

        // Newest undone state sits at the head.
        let next = history.redo(&Settings::default(), &annotations).unwrap();
        assert_eq!(next.settings().noise_amount, 21.0);
    }

    #[test]
    fn test_zero_limit_keeps_one_step() {
        let annotations = AnnotationList::new();
        let mut history = History::with_limit(0);
        history.push(&with_noise(1.0), &annotations);
        history.push(&with_noise(2.0), &annotations);
        assert_eq!(history.past_len(), 1);

        let restored = history.undo(&with_noise(3.0), &annotations).unwrap();
        assert_eq!(restored.settings().noise_amount, 2.0);
        assert_eq!(history.future_len(), 1);
    }

    #[test]
    fn test_paused_push_is_inert() {
        let annotations = AnnotationList::new();
        let mut history = History::new();
        history.pause();
        assert!(!history.push(&Settings::default(), &annotations));
        assert_eq!(history.past_len(), 0);
        history.resume();
        assert!(history.push(&Settings::default(), &annotations));
        assert_eq!(history.past_len(), 1);
    }
}
