// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Coordinate transformations between pixel and normalized annotation
//! coordinates, and the initial padding policy for a newly opened image.

use crate::models::annotation::Point;

/// Fraction of the average image dimension used as initial padding.
const SMART_PADDING_RATIO: f64 = 0.1;
/// Upper bound for the initial padding, in pixels.
const SMART_PADDING_MAX: f64 = 200.0;

/// Convert pixel coordinates to normalized coordinates (0.0 to 1.0).
pub fn normalize_coordinates(pixel_x: f64, pixel_y: f64, width: u32, height: u32) -> Point {
    Point {
        x: pixel_x / width as f64,
        y: pixel_y / height as f64,
    }
}

/// Convert normalized coordinates to pixel coordinates.
pub fn denormalize_coordinates(point: &Point, width: u32, height: u32) -> (f64, f64) {
    (point.x * width as f64, point.y * height as f64)
}

/// Suggested uniform padding for an image of the given size.
pub fn smart_padding(width: u32, height: u32) -> f32 {
    let average = (width as f64 + height as f64) / 2.0;
    (average * SMART_PADDING_RATIO).min(SMART_PADDING_MAX).round() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_denormalize_roundtrip() {
        let width = 1920;
        let height = 1080;
        let pixel_x = 960.0;
        let pixel_y = 540.0;

        let normalized = normalize_coordinates(pixel_x, pixel_y, width, height);
        let (denorm_x, denorm_y) = denormalize_coordinates(&normalized, width, height);

        assert!((denorm_x - pixel_x).abs() < 0.0001);
        assert!((denorm_y - pixel_y).abs() < 0.0001);
    }

    #[test]
    fn test_smart_padding_scales_and_caps() {
        assert_eq!(smart_padding(800, 600), 70.0);
        assert_eq!(smart_padding(3840, 2160), 200.0);
        assert_eq!(smart_padding(0, 0), 0.0);
    }
}
