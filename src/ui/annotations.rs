// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation list panel.
//!
//! Lists annotations top-most first, with controls to select, raise and
//! delete them.

use shotframe::{Annotation, AnnotationId, Shape};

/// Result of list interaction.
pub enum ListAction {
    None,
    Select(AnnotationId),
    BringToFront(AnnotationId),
    Delete(AnnotationId),
}

/// Display the annotation list.
pub fn show(ui: &mut egui::Ui, annotations: &[Annotation], selected: Option<AnnotationId>) -> ListAction {
    let mut action = ListAction::None;

    ui.heading("Annotations");
    ui.separator();

    if annotations.is_empty() {
        ui.label(egui::RichText::new("No annotations yet").weak());
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, annotation) in annotations.iter().enumerate().rev() {
            ui.horizontal(|ui| {
                let label = match &annotation.shape {
                    Shape::Text { content, .. } => format!("{}. text \"{}\"", index + 1, content),
                    Shape::Counter { number, .. } => format!("{}. counter {}", index + 1, number),
                    Shape::Line { .. } | Shape::Freehand { .. } => format!(
                        "{}. {} ({} points)",
                        index + 1,
                        annotation.shape.kind(),
                        annotation.vertex_count()
                    ),
                    shape => format!("{}. {}", index + 1, shape.kind()),
                };
                if ui
                    .selectable_label(selected == Some(annotation.id), label)
                    .clicked()
                {
                    action = ListAction::Select(annotation.id);
                }
                if ui
                    .small_button("⬆")
                    .on_hover_text("Bring to front")
                    .clicked()
                {
                    action = ListAction::BringToFront(annotation.id);
                }
                if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                    action = ListAction::Delete(annotation.id);
                }
            });
        }
    });

    action
}
