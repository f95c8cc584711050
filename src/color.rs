use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb};

use crate::data::model::MetricKind;

// ---------------------------------------------------------------------------
// Severity buckets
// ---------------------------------------------------------------------------

/// Number of steps in every ramp.
pub const LEVELS: usize = 5;

/// Width of one bucket on the 0–100 scale.
const BUCKET_WIDTH: u8 = 20;

/// Bucket index for a 0–100 score using half-open bins
/// `[0,20) [20,40) [40,60) [60,80) [80,100]`. Scores above 100 land in the top bucket.
pub fn severity_level(value: u8) -> usize {
    usize::from(value / BUCKET_WIDTH).min(LEVELS - 1)
}

// ---------------------------------------------------------------------------
// Ramps
// ---------------------------------------------------------------------------

/// Five colours from light to dark for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    pub metric: MetricKind,
    steps: [Srgb<u8>; LEVELS],
}

impl ColorRamp {
    pub fn for_metric(metric: MetricKind) -> Self {
        let steps = match metric {
            MetricKind::Negative => [
                Srgb::new(0xff, 0xcc, 0xcb),
                Srgb::new(0xff, 0x66, 0x66),
                Srgb::new(0xff, 0x00, 0x00),
                Srgb::new(0xcc, 0x00, 0x00),
                Srgb::new(0x8b, 0x00, 0x00),
            ],
            MetricKind::Positive => [
                Srgb::new(0xcc, 0xff, 0xcc),
                Srgb::new(0x66, 0xff, 0x66),
                Srgb::new(0x00, 0xff, 0x00),
                Srgb::new(0x00, 0xcc, 0x00),
                Srgb::new(0x00, 0x8b, 0x00),
            ],
        };
        Self { metric, steps }
    }

    pub fn color_at(&self, level: usize) -> Color32 {
        to_color32(self.steps[level.min(LEVELS - 1)])
    }

    /// Return the legend entries (score range → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        (0..LEVELS)
            .map(|level| {
                let lo = level as u8 * BUCKET_WIDTH;
                let hi = if level == LEVELS - 1 { 100 } else { lo + BUCKET_WIDTH - 1 };
                (format!("{lo}–{hi}%"), self.color_at(level))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Color mapping: score → bucket → Color32
// ---------------------------------------------------------------------------

/// A score's severity level within a specific metric's ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorBucket {
    pub metric: MetricKind,
    pub level: usize,
}

impl ColorBucket {
    pub fn color(self) -> Color32 {
        ColorRamp::for_metric(self.metric).color_at(self.level)
    }
}

/// Bucket a score on the given metric's ramp.
pub fn color_for(value: u8, metric: MetricKind) -> ColorBucket {
    ColorBucket {
        metric,
        level: severity_level(value),
    }
}

/// Text colour for a value label drawn on top of its bar.
pub fn label_color(value: u8) -> Color32 {
    if value > 50 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

/// A darker shade of `color`, used to outline selected rows.
pub fn outline_for(color: Color32) -> Color32 {
    let rgb: Srgb = Srgb::new(color.r(), color.g(), color.b()).into_format();
    let hsl: Hsl = rgb.into_color();
    let darker: Srgb = hsl.darken(0.35).into_color();
    to_color32(darker.into_format())
}

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}
