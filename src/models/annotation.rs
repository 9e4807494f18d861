// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the drawable overlay objects placed on top of a
//! screenshot. Every annotation carries a unique [`AnnotationId`]; the editor
//! never looks further into the shape than that identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A 2D point with normalized coordinates (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Stable identity of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(Uuid);

impl AnnotationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnnotationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outline color and thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// CSS-style color string, e.g. `#ff3b30`.
    pub color: String,
    /// Pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: "#ff3b30".to_string(),
            width: 4.0,
        }
    }
}

/// Geometry of an annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Arrow { from: Point, to: Point },
    Rectangle { from: Point, to: Point },
    Ellipse { from: Point, to: Point },
    Line { points: Vec<Point> },
    Freehand { points: Vec<Point> },
    Text { at: Point, content: String, size: f32 },
    Counter { at: Point, number: u32 },
    /// Blurred (redacted) region.
    Blur { from: Point, to: Point },
}

impl Shape {
    /// Short human-readable kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Arrow { .. } => "arrow",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Line { .. } => "line",
            Shape::Freehand { .. } => "freehand",
            Shape::Text { .. } => "text",
            Shape::Counter { .. } => "counter",
            Shape::Blur { .. } => "blur",
        }
    }
}

/// An overlay object drawn on the screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    #[serde(default)]
    pub stroke: Stroke,
    pub shape: Shape,
}

impl Annotation {
    /// Create a new annotation with a fresh identity and the default stroke.
    pub fn new(shape: Shape) -> Self {
        Self {
            id: AnnotationId::new(),
            stroke: Stroke::default(),
            shape,
        }
    }

    /// Move every point of the shape by the given normalized offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match &mut self.shape {
            Shape::Arrow { from, to }
            | Shape::Rectangle { from, to }
            | Shape::Ellipse { from, to }
            | Shape::Blur { from, to } => {
                from.translate(dx, dy);
                to.translate(dx, dy);
            }
            Shape::Line { points } | Shape::Freehand { points } => {
                for point in points {
                    point.translate(dx, dy);
                }
            }
            Shape::Text { at, .. } | Shape::Counter { at, .. } => at.translate(dx, dy),
        }
    }

    /// Axis-aligned bounds as `(min, max)` in normalized coordinates.
    pub fn bounds(&self) -> (Point, Point) {
        let points: Vec<Point> = match &self.shape {
            Shape::Arrow { from, to }
            | Shape::Rectangle { from, to }
            | Shape::Ellipse { from, to }
            | Shape::Blur { from, to } => vec![*from, *to],
            Shape::Line { points } | Shape::Freehand { points } => points.clone(),
            Shape::Text { at, .. } | Shape::Counter { at, .. } => vec![*at],
        };
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        if points.is_empty() {
            return (Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        }
        (min, max)
    }

    /// Whether `point` lies within the bounds grown by `tolerance`.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let (min, max) = self.bounds();
        point.x >= min.x - tolerance
            && point.x <= max.x + tolerance
            && point.y >= min.y - tolerance
            && point.y <= max.y + tolerance
    }

    /// Number of control points in the shape.
    pub fn vertex_count(&self) -> usize {
        match &self.shape {
            Shape::Line { points } | Shape::Freehand { points } => points.len(),
            Shape::Text { .. } | Shape::Counter { .. } => 1,
            _ => 2,
        }
    }
}
