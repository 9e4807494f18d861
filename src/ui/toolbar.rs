// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar for adding annotations.
//!
//! New annotations are placed around the center of the screenshot and can
//! then be dragged into position on the canvas.

use shotframe::{Annotation, Point, Shape};

/// Display the toolbar. Returns an annotation when one of the buttons was
/// clicked.
pub fn show(ui: &mut egui::Ui, counter: &mut u32) -> Option<Annotation> {
    let mut created = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Add:");

        ui.separator();

        if ui.button("➡ Arrow").clicked() {
            created = Some(Shape::Arrow {
                from: Point::new(0.35, 0.35),
                to: Point::new(0.6, 0.6),
            });
        }
        if ui.button("▭ Rectangle").clicked() {
            created = Some(Shape::Rectangle {
                from: Point::new(0.4, 0.4),
                to: Point::new(0.6, 0.6),
            });
        }
        if ui.button("◯ Ellipse").clicked() {
            created = Some(Shape::Ellipse {
                from: Point::new(0.4, 0.4),
                to: Point::new(0.6, 0.6),
            });
        }
        if ui.button("T Text").clicked() {
            created = Some(Shape::Text {
                at: Point::new(0.45, 0.45),
                content: "Text".to_string(),
                size: 24.0,
            });
        }
        if ui.button("① Counter").clicked() {
            *counter += 1;
            created = Some(Shape::Counter {
                at: Point::new(0.5, 0.5),
                number: *counter,
            });
        }
        if ui.button("▒ Blur").clicked() {
            created = Some(Shape::Blur {
                from: Point::new(0.4, 0.45),
                to: Point::new(0.6, 0.55),
            });
        }

        ui.separator();

        ui.label(
            egui::RichText::new("Drag annotations to move them, Escape cancels a drag")
                .italics()
                .weak(),
        );
    });

    created.map(Annotation::new)
}
