//! Circular progress ring geometry.
//!
//! Follows the stroke-dash model of an SVG progress circle: the visible arc
//! is `circumference - dash_offset`, starting at twelve o'clock and running
//! clockwise. Coordinates are canvas units where one unit is one braille dot
//! and y grows upwards.

use std::f64::consts::{FRAC_PI_2, PI};

/// Ring centred in a canvas of a given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: (f64, f64),
    pub radius: f64,
}

impl RingGeometry {
    /// Largest ring that fits a `width` x `height` canvas with a one-dot margin
    pub fn fit(width: f64, height: f64) -> Self {
        let radius = (width.min(height) / 2.0 - 1.0).max(1.0);
        Self {
            center: (width / 2.0, height / 2.0),
            radius,
        }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Length of the hidden part of the stroke for a progress percentage
    pub fn dash_offset(&self, percent: f64) -> f64 {
        let circumference = self.circumference();
        circumference - (percent.clamp(0.0, 100.0) / 100.0) * circumference
    }

    /// Points along the visible arc for `percent`
    pub fn arc_points(&self, percent: f64) -> Vec<(f64, f64)> {
        let visible = self.circumference() - self.dash_offset(percent);
        if visible <= 0.0 {
            return Vec::new();
        }

        // Two samples per dot of arc length
        let steps = (visible * 2.0).ceil().max(1.0) as usize;
        let sweep = visible / self.radius;
        let (cx, cy) = self.center;

        (0..=steps)
            .map(|i| {
                let angle = FRAC_PI_2 - sweep * (i as f64 / steps as f64);
                (cx + self.radius * angle.cos(), cy + self.radius * angle.sin())
            })
            .collect()
    }

    /// Points for the full background track
    pub fn track_points(&self) -> Vec<(f64, f64)> {
        self.arc_points(100.0)
    }
}
