// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Schematic preview of the framed screenshot.
//!
//! Paints the background, the padded and rounded screenshot area with its
//! shadow, and the annotations on top. Annotation coordinates are
//! normalized to the screenshot area.

use shotframe::{Annotation, AnnotationId, BackgroundType, Editor, Point, Settings, Shape};

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    Select(Option<AnnotationId>),
    StartDrag(AnnotationId),
    /// Normalized offset since the previous frame.
    DragBy(f64, f64),
    StopDrag,
}

/// Hit tolerance in normalized units.
const HIT_TOLERANCE: f64 = 0.02;

/// Display the canvas and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    editor: &Editor,
    selected: Option<AnnotationId>,
    dragging: bool,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    let settings = editor.settings();

    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let frame_rect = response.rect;

    painter.rect_filled(frame_rect, 0.0, background_color(settings));

    let shot_rect = screenshot_rect(frame_rect, settings);
    let rounding = settings.border_radius * scale(frame_rect);

    let shadow = &settings.shadow;
    if shadow.opacity > 0.0 {
        let offset = egui::vec2(shadow.offset_x, shadow.offset_y) * scale(frame_rect);
        let spread = shadow.blur * scale(frame_rect) * 0.5;
        let alpha = (shadow.opacity / 100.0 * 255.0).clamp(0.0, 255.0) as u8;
        painter.rect_filled(
            shot_rect.translate(offset).expand(spread),
            rounding + spread,
            egui::Color32::from_black_alpha(alpha),
        );
    }
    painter.rect_filled(shot_rect, rounding, egui::Color32::from_gray(235));

    for annotation in editor.annotations() {
        let highlighted = selected == Some(annotation.id);
        draw_annotation(&painter, annotation, shot_rect, highlighted);
    }

    let to_normalized = |pos: egui::Pos2| {
        Point::new(
            ((pos.x - shot_rect.min.x) / shot_rect.width()) as f64,
            ((pos.y - shot_rect.min.y) / shot_rect.height()) as f64,
        )
    };
    let hit = |pos: egui::Pos2| {
        let point = to_normalized(pos);
        editor
            .annotations()
            .iter()
            .rev()
            .find(|a| a.hit_test(point, HIT_TOLERANCE))
            .map(|a| a.id)
    };

    if response.drag_started() {
        if let Some(id) = response.interact_pointer_pos().and_then(hit) {
            action = CanvasAction::StartDrag(id);
        }
    } else if response.drag_stopped() {
        if dragging {
            action = CanvasAction::StopDrag;
        }
    } else if response.dragged() {
        if dragging {
            let delta = response.drag_delta();
            action = CanvasAction::DragBy(
                (delta.x / shot_rect.width()) as f64,
                (delta.y / shot_rect.height()) as f64,
            );
        }
    } else if response.clicked() {
        action = CanvasAction::Select(response.interact_pointer_pos().and_then(hit));
    }

    action
}

/// Parse a `#rrggbb` or `#rgb` color.
pub fn parse_hex_color(value: &str) -> Option<egui::Color32> {
    let hex = value.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(egui::Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let digit = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(egui::Color32::from_rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

fn background_color(settings: &Settings) -> egui::Color32 {
    match settings.background_type {
        BackgroundType::Transparent => egui::Color32::from_gray(60),
        BackgroundType::White => egui::Color32::WHITE,
        BackgroundType::Black => egui::Color32::BLACK,
        BackgroundType::Gray => egui::Color32::from_gray(128),
        BackgroundType::Custom => {
            parse_hex_color(&settings.custom_color).unwrap_or(egui::Color32::from_gray(128))
        }
        BackgroundType::Gradient => parse_hex_color(&settings.gradient_colors[0])
            .unwrap_or(egui::Color32::from_rgb(0x66, 0x7e, 0xea)),
        BackgroundType::Image => egui::Color32::from_rgb(0x3a, 0x4a, 0x5c),
    }
}

/// Preview pixels per output pixel, assuming a 1600px wide output.
fn scale(frame: egui::Rect) -> f32 {
    frame.width() / 1600.0
}

fn screenshot_rect(frame: egui::Rect, settings: &Settings) -> egui::Rect {
    let s = scale(frame);
    let padding = &settings.padding;
    let rect = egui::Rect::from_min_max(
        frame.min + egui::vec2(padding.left * s, padding.top * s),
        frame.max - egui::vec2(padding.right * s, padding.bottom * s),
    );
    if rect.width() < 1.0 || rect.height() < 1.0 {
        egui::Rect::from_center_size(frame.center(), egui::vec2(1.0, 1.0))
    } else {
        rect
    }
}

/// Draw an annotation on the canvas.
fn draw_annotation(
    painter: &egui::Painter,
    annotation: &Annotation,
    rect: egui::Rect,
    highlighted: bool,
) {
    let to_screen = |p: &Point| {
        egui::pos2(
            rect.min.x + p.x as f32 * rect.width(),
            rect.min.y + p.y as f32 * rect.height(),
        )
    };
    let color = parse_hex_color(&annotation.stroke.color).unwrap_or(egui::Color32::RED);
    let stroke = egui::Stroke::new(annotation.stroke.width, color);

    match &annotation.shape {
        Shape::Arrow { from, to } => {
            let origin = to_screen(from);
            painter.arrow(origin, to_screen(to) - origin, stroke);
        }
        Shape::Rectangle { from, to } => {
            painter.rect_stroke(egui::Rect::from_two_pos(to_screen(from), to_screen(to)), 0.0, stroke);
        }
        Shape::Ellipse { from, to } => {
            let bounds = egui::Rect::from_two_pos(to_screen(from), to_screen(to));
            let (center, radius) = (bounds.center(), bounds.size() / 2.0);
            let outline = (0..48)
                .map(|i| {
                    let angle = i as f32 / 48.0 * std::f32::consts::TAU;
                    center + egui::vec2(radius.x * angle.cos(), radius.y * angle.sin())
                })
                .collect();
            painter.add(egui::Shape::closed_line(outline, stroke));
        }
        Shape::Line { points } | Shape::Freehand { points } => {
            painter.add(egui::Shape::line(points.iter().map(to_screen).collect(), stroke));
        }
        Shape::Text { at, content, size } => {
            painter.text(
                to_screen(at),
                egui::Align2::LEFT_TOP,
                content,
                egui::FontId::proportional(*size),
                color,
            );
        }
        Shape::Counter { at, number } => {
            let center = to_screen(at);
            painter.circle_filled(center, 12.0, color);
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                number.to_string(),
                egui::FontId::proportional(14.0),
                egui::Color32::WHITE,
            );
        }
        Shape::Blur { from, to } => {
            let bounds = egui::Rect::from_two_pos(to_screen(from), to_screen(to));
            painter.rect_filled(bounds, 2.0, egui::Color32::from_white_alpha(160));
        }
    }

    if highlighted {
        let (min, max) = annotation.bounds();
        let bounds = egui::Rect::from_two_pos(to_screen(&min), to_screen(&max)).expand(4.0);
        painter.rect_stroke(bounds, 2.0, egui::Stroke::new(1.0, egui::Color32::LIGHT_BLUE));
    }
}
