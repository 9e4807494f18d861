// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Shotframe desktop host.

pub mod annotations;
pub mod canvas;
pub mod effects;
pub mod toolbar;
