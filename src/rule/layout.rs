//! Fixed vertical layout of the rules (pixels, SVG y grows downwards).

pub const TITLE_Y: f64 = 60.0;
pub const SUBTITLE_Y: f64 = 90.0;

/// Scale titles sit this far above their baseline.
pub const SCALE_TITLE_GAP: f64 = 30.0;

/// Frame padding left and right of the rule.
pub const FRAME_PAD: f64 = 10.0;

// Logit rules.
pub const PROBABILITY_Y: f64 = 150.0;
pub const FIRST_SCALE_Y: f64 = 250.0;
pub const SCALE_SPACING: f64 = 100.0;
pub const NOTES_GAP: f64 = 80.0;
pub const NOTE_LINE_HEIGHT: f64 = 20.0;
pub const LEGEND_GAP: f64 = 120.0;
pub const LEGEND_STEP: f64 = 120.0;
pub const LOGIT_HEIGHT_BELOW_LAST: f64 = 250.0;

/// Baseline of the `index`-th statistic scale.
pub fn scale_y(index: usize) -> f64 {
    FIRST_SCALE_Y + SCALE_SPACING * index as f64
}

// Z rule.
pub const Z_RULE_HEIGHT: u32 = 600;
pub const Z_SCALE_Y: f64 = 200.0;
pub const Z_PROBABILITY_Y: f64 = 280.0;
pub const Z_MIN: f64 = 0.0;
pub const Z_MAX: f64 = 3.5;
pub const Z_KNEE: f64 = 2.0;
pub const Z_GRID_LINES: [f64; 3] = [1.0, 2.0, 3.0];
