// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Live edit state, snapshots, undo/redo history and change notification.

pub mod annotations;
pub mod editor;
pub mod history;
pub mod observers;
pub mod snapshot;

pub use annotations::AnnotationList;
pub use editor::Editor;
pub use history::{History, HISTORY_LIMIT};
pub use observers::{Changed, StateView, SubscriptionId};
pub use snapshot::Snapshot;
