//! Chart data shaping: chart kind selection and pie slice geometry.

use std::f64::consts::TAU;

use crate::palette::{Color, color_for};
use crate::selection::Scored;

/// How the kingdom contributions are charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
}

impl ChartKind {
    /// Label of the toggle button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar Chart",
            Self::Pie => "Pie Chart",
        }
    }
}

/// One bar or slice, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

/// Turn scored rows into chart data, coloring by position.
#[must_use]
pub fn chart_data<T: Scored>(rows: &[T]) -> Vec<ChartDatum> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| ChartDatum {
            label: row.label().to_string(),
            value: row.total_points(),
            color: color_for(index),
        })
        .collect()
}

/// Angular extent of one pie slice, in radians clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
    /// Share of the whole, `0.0..=1.0`.
    pub fraction: f64,
}

impl PieSlice {
    /// Legend/label text, e.g. `Aurora (42%)`.
    #[must_use]
    pub fn label(&self, name: &str) -> String {
        format!("{name} ({:.0}%)", self.fraction * 100.0)
    }

    /// Closed outline in screen coordinates (y grows downwards): the center
    /// followed by points along the arc, one per degree at most.
    #[must_use]
    pub fn outline(&self, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
        let sweep = self.end - self.start;
        if sweep <= 0.0 {
            return Vec::new();
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = ((sweep / (TAU / 360.0)).ceil() as usize).max(1);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for step in 0..=steps {
            #[allow(clippy::cast_precision_loss)]
            let angle = self.start + sweep * (step as f64) / (steps as f64);
            points.push(point_at(center, radius, angle));
        }
        points
    }

    /// Point on the bisector of the slice at `radius` from the center.
    #[must_use]
    pub fn anchor(&self, center: (f64, f64), radius: f64) -> (f64, f64) {
        point_at(center, radius, (self.start + self.end) / 2.0)
    }
}

fn point_at(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (
        center.0 + radius * angle.sin(),
        center.1 - radius * angle.cos(),
    )
}

/// Split a full circle proportionally to `values`.
///
/// Negative values count as zero. When everything is zero the slices are empty.
#[must_use]
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut cursor = 0.0;
    values
        .iter()
        .map(|value| {
            let fraction = if total > 0.0 {
                value.max(0.0) / total
            } else {
                0.0
            };
            let start = cursor;
            cursor += fraction * TAU;
            PieSlice {
                start,
                end: cursor,
                fraction,
            }
        })
        .collect()
}
