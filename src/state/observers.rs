// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Change notification for renderers and undo/redo buttons.
//!
//! Callbacks receive a [`StateView`] of shared borrows taken after a mutation
//! has fully completed. They cannot reach the editor mutably while running.

use crate::models::{annotation::Annotation, settings::Settings};
use std::fmt;

bitflags::bitflags! {
    /// Which parts of the state a notification concerns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Changed: u8 {
        const SETTINGS    = 0b0000_0001;
        const ANNOTATIONS = 0b0000_0010;
        /// Undo/redo availability may have changed.
        const HISTORY     = 0b0000_0100;
    }
}

/// Read-only view handed to observers.
#[derive(Debug, Clone, Copy)]
pub struct StateView<'a> {
    pub settings: &'a Settings,
    pub annotations: &'a [Annotation],
    pub can_undo: bool,
    pub can_redo: bool,
    pub changed: Changed,
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&StateView<'_>)>;

#[derive(Default)]
pub struct Observers {
    entries: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every notification.
    pub fn subscribe(&mut self, callback: impl FnMut(&StateView<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Register a callback on a value derived from the state. It fires on the
    /// first notification and afterwards only when the derived value changes.
    pub fn subscribe_derived<T, S, F>(&mut self, select: S, mut callback: F) -> SubscriptionId
    where
        T: PartialEq + 'static,
        S: Fn(&StateView<'_>) -> T + 'static,
        F: FnMut(&T) + 'static,
    {
        let mut last: Option<T> = None;
        self.subscribe(move |view| {
            let value = select(view);
            if last.as_ref() != Some(&value) {
                callback(&value);
                last = Some(value);
            }
        })
    }

    /// Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify(&mut self, view: &StateView<'_>) {
        for (_, callback) in &mut self.entries {
            callback(view);
        }
    }

    /// Deliver to a single subscriber, used to seed a new subscription.
    pub fn notify_one(&mut self, id: SubscriptionId, view: &StateView<'_>) {
        if let Some((_, callback)) = self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            callback(view);
        }
    }
}
