// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! SHOTFRAME - screenshot beautifier
//!
//! Desktop host for the edit-state engine: effect controls, annotation list
//! and a schematic preview, with undo/redo.

mod app;
mod ui;

use anyhow::Result;
use app::ShotframeApp;
use shotframe::EditorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::default_path()
        .map(|path| EditorConfig::load_or_default(&path))
        .unwrap_or_default();
    let app = ShotframeApp::new(config);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Shotframe"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Shotframe",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
