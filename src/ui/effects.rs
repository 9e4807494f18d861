// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background and effect controls.
//!
//! Sliders preview through the editor's transient setters while dragged and
//! commit once on release, so one drag is one undo step.

use super::canvas::parse_hex_color;
use shotframe::{BackgroundType, Editor, PaddingMode, Side};
use std::ops::RangeInclusive;

/// Display the effects panel.
pub fn show(ui: &mut egui::Ui, editor: &mut Editor, color_draft: &mut String) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Background");
        background(ui, editor, color_draft);

        ui.separator();
        ui.heading("Effects");
        let settings = editor.settings().clone();
        slider(
            ui,
            editor,
            "Blur",
            settings.blur_amount,
            0.0..=100.0,
            Editor::set_blur_amount,
            Editor::commit_blur_amount,
        );
        slider(
            ui,
            editor,
            "Noise",
            settings.noise_amount,
            0.0..=100.0,
            Editor::set_noise_amount,
            Editor::commit_noise_amount,
        );
        slider(
            ui,
            editor,
            "Corner radius",
            settings.border_radius,
            0.0..=100.0,
            Editor::set_border_radius,
            Editor::commit_border_radius,
        );

        ui.separator();
        ui.heading("Padding");
        padding(ui, editor);

        ui.separator();
        ui.heading("Shadow");
        let shadow = settings.shadow;
        slider(
            ui,
            editor,
            "Blur",
            shadow.blur,
            0.0..=100.0,
            Editor::set_shadow_blur,
            Editor::commit_shadow_blur,
        );
        slider(
            ui,
            editor,
            "Offset X",
            shadow.offset_x,
            -50.0..=50.0,
            Editor::set_shadow_offset_x,
            Editor::commit_shadow_offset_x,
        );
        slider(
            ui,
            editor,
            "Offset Y",
            shadow.offset_y,
            -50.0..=50.0,
            Editor::set_shadow_offset_y,
            Editor::commit_shadow_offset_y,
        );
        slider(
            ui,
            editor,
            "Opacity",
            shadow.opacity,
            0.0..=100.0,
            Editor::set_shadow_opacity,
            Editor::commit_shadow_opacity,
        );
    });
}

fn background(ui: &mut egui::Ui, editor: &mut Editor, color_draft: &mut String) {
    let current = editor.settings().background_type;
    egui::ComboBox::from_label("Type")
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for kind in BackgroundType::ALL {
                if ui.selectable_label(kind == current, kind.label()).clicked() && kind != current {
                    editor.commit_background_type(kind);
                }
            }
        });

    match current {
        BackgroundType::Custom => {
            ui.horizontal(|ui| {
                ui.label("Color");
                let response = ui.text_edit_singleline(color_draft);
                let valid = parse_hex_color(color_draft).is_some();
                if response.changed() && valid {
                    editor.set_custom_color(color_draft.clone());
                }
                if response.lost_focus() && valid {
                    editor.commit_custom_color(color_draft.clone());
                }
            });
        }
        BackgroundType::Gradient => {
            let settings = editor.settings();
            ui.label(format!(
                "{}: {} → {}",
                settings.gradient_id, settings.gradient_colors[0], settings.gradient_colors[1]
            ));
        }
        BackgroundType::Image => {
            let src = if editor.uses_default_background() {
                "Default background".to_string()
            } else {
                editor.settings().selected_image_src.clone().unwrap_or_default()
            };
            ui.label(egui::RichText::new(src).weak());
        }
        _ => {}
    }
}

fn padding(ui: &mut egui::Ui, editor: &mut Editor) {
    let padding = editor.settings().padding;
    ui.horizontal(|ui| {
        if ui.radio(padding.mode == PaddingMode::Uniform, "Uniform").clicked()
            && padding.mode != PaddingMode::Uniform
        {
            editor.commit_padding_mode(PaddingMode::Uniform);
        }
        if ui
            .radio(padding.mode == PaddingMode::Individual, "Individual")
            .clicked()
            && padding.mode != PaddingMode::Individual
        {
            editor.commit_padding_mode(PaddingMode::Individual);
        }
    });

    match padding.mode {
        PaddingMode::Uniform => slider(
            ui,
            editor,
            "All sides",
            padding.uniform,
            0.0..=400.0,
            Editor::set_padding_uniform,
            Editor::commit_padding_uniform,
        ),
        PaddingMode::Individual => {
            for side in Side::ALL {
                let label = match side {
                    Side::Top => "Top",
                    Side::Right => "Right",
                    Side::Bottom => "Bottom",
                    Side::Left => "Left",
                };
                slider(
                    ui,
                    editor,
                    label,
                    padding.side(side),
                    0.0..=400.0,
                    move |e, v| e.set_padding_side(side, v),
                    move |e, v| e.commit_padding_side(side, v),
                );
            }
        }
    }
}

/// A slider that previews while dragged and commits on release. Keyboard and
/// click edits commit immediately.
fn slider(
    ui: &mut egui::Ui,
    editor: &mut Editor,
    label: &str,
    value: f32,
    range: RangeInclusive<f32>,
    set: impl Fn(&mut Editor, f32),
    commit: impl Fn(&mut Editor, f32),
) {
    let mut value = value;
    let response = ui.add(egui::Slider::new(&mut value, range).text(label));
    if response.drag_stopped() {
        commit(editor, value);
    } else if response.changed() {
        if response.dragged() {
            set(editor, value);
        } else {
            commit(editor, value);
        }
    }
}
