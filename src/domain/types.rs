//! Shared domain types.
//!
//! These types are plain values: they are built once per run, handed to the
//! renderer, and optionally serialized for the tick export. Positions are kept
//! as `f64` pixels here; rounding to the drawing grid happens only in
//! `plot::svg`.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which slide rule to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Right-tail probability vs chi-square scales (one per df).
    Chi2,
    /// Probability vs Student's t scales (one per df).
    T,
    /// Standard normal z vs probability (positive half).
    Z,
}

impl RuleKind {
    pub fn display_name(self) -> &'static str {
        match self {
            RuleKind::Chi2 => "Chi-square",
            RuleKind::T => "T",
            RuleKind::Z => "Z",
        }
    }

    /// File name used when no output path is given.
    pub fn default_output(self) -> &'static str {
        match self {
            RuleKind::Chi2 => "chi2_slide_rule.svg",
            RuleKind::T => "t_slide_rule.svg",
            RuleKind::Z => "z_slide_rule.svg",
        }
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const PAPER: Rgb = Rgb(248, 248, 240);
    pub const FRAME: Rgb = Rgb(200, 200, 200);
    pub const SUBTITLE: Rgb = Rgb(100, 100, 100);
    pub const NOTE: Rgb = Rgb(80, 80, 80);
    pub const RULE: Rgb = Rgb(40, 40, 40);
    pub const GRID: Rgb = Rgb(230, 230, 230);
    pub const GUIDE: Rgb = Rgb(120, 120, 120);

    /// Palette for per-df scales: red, green, blue, purple.
    pub const SCALE_PALETTE: [Rgb; 4] = [
        Rgb(255, 0, 0),
        Rgb(0, 128, 0),
        Rgb(0, 0, 255),
        Rgb(128, 0, 128),
    ];

    pub fn palette(index: usize) -> Rgb {
        Self::SCALE_PALETTE[index % Self::SCALE_PALETTE.len()]
    }
}

/// Which side of the baseline tick marks grow towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    Up,
    Down,
}

impl TickDirection {
    /// Sign to apply to a y offset (SVG y grows downwards).
    pub fn sign(self) -> f64 {
        match self {
            TickDirection::Up => -1.0,
            TickDirection::Down => 1.0,
        }
    }
}

/// Visual weight class of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickTier {
    Fine,
    Minor,
    Medium,
    Major,
}

/// Text attached to a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub text: String,
    pub font_size: f64,
    /// Distance from the baseline to the text anchor, measured in the tick direction.
    pub offset: f64,
    /// Rotate the text by 90 degrees around its anchor.
    pub rotated: bool,
}

/// One tick descriptor on a scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Scale value (a probability or a statistic).
    pub value: f64,
    /// Probability associated with `value` (equal to `value` on probability scales).
    pub probability: f64,
    /// Horizontal pixel position.
    pub x: f64,
    /// Tick length in pixels.
    pub size: f64,
    pub stroke_width: f64,
    pub tier: TickTier,
    pub label: Option<TickLabel>,
}

/// What a scale measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleKind {
    Probability,
    Z,
    T { df: f64 },
    ChiSquare { df: f64 },
}

/// A horizontal scale: baseline plus ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub kind: ScaleKind,
    pub title: String,
    pub baseline_y: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub direction: TickDirection,
    /// Baseline and tick color.
    pub color: Rgb,
    pub label_color: Rgb,
    pub ticks: Vec<Tick>,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Free-standing text (titles, notes, legend entries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: Rgb,
    pub anchor: Anchor,
    pub bold: bool,
}

impl TextItem {
    pub fn centered(text: impl Into<String>, x: f64, y: f64, font_size: f64, color: Rgb) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            color,
            anchor: Anchor::Middle,
            bold: false,
        }
    }
}

/// Straight line segment that is not part of a scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgb,
    pub stroke_width: f64,
    /// Dash pattern `(on, off)` in pixels; `None` draws a solid line.
    pub dash: Option<(f64, f64)>,
}

/// Filled circle (legend markers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleItem {
    pub center: (f64, f64),
    pub radius: f64,
    pub color: Rgb,
}

/// Outline rectangle (frame around the rule).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectItem {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub stroke_width: f64,
}

/// Drawing surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub margin: f64,
}

impl Canvas {
    /// Usable width between the left and right margins.
    pub fn rule_width(&self) -> f64 {
        f64::from(self.width) - 2.0 * self.margin
    }

    pub fn center_x(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    pub fn left(&self) -> f64 {
        self.margin
    }

    pub fn right(&self) -> f64 {
        f64::from(self.width) - self.margin
    }
}

/// A complete, render-ready slide rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRule {
    pub kind: RuleKind,
    pub canvas: Canvas,
    pub background: Rgb,
    pub scales: Vec<Scale>,
    pub texts: Vec<TextItem>,
    pub lines: Vec<LineItem>,
    pub circles: Vec<CircleItem>,
    pub frames: Vec<RectItem>,
}

impl SlideRule {
    pub fn new(kind: RuleKind, canvas: Canvas) -> Self {
        Self {
            kind,
            canvas,
            background: Rgb::PAPER,
            scales: Vec::new(),
            texts: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn tick_count(&self) -> usize {
        self.scales.iter().map(|s| s.ticks.len()).sum()
    }
}

/// Visible probability window of a logit-warped rule.
///
/// `display_*` are the probabilities mapped to the rule ends; `clamp_*` keep the
/// logit finite for inputs at or beyond 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityWindow {
    pub display_min: f64,
    pub display_max: f64,
    pub clamp_min: f64,
    pub clamp_max: f64,
}

impl Default for ProbabilityWindow {
    fn default() -> Self {
        Self {
            display_min: 0.001,
            display_max: 0.999,
            clamp_min: 0.0005,
            clamp_max: 0.9995,
        }
    }
}

impl ProbabilityWindow {
    pub fn validate(&self) -> Result<(), AppError> {
        let in_unit = |p: f64| p.is_finite() && p > 0.0 && p < 1.0;
        if !(in_unit(self.display_min) && in_unit(self.display_max) && self.display_min < self.display_max) {
            return Err(AppError::input(format!(
                "Invalid display window: min={}, max={} (must satisfy 0 < min < max < 1).",
                self.display_min, self.display_max
            )));
        }
        if !(in_unit(self.clamp_min) && in_unit(self.clamp_max) && self.clamp_min < self.clamp_max) {
            return Err(AppError::input(format!(
                "Invalid logit clamp: min={}, max={} (must satisfy 0 < min < max < 1).",
                self.clamp_min, self.clamp_max
            )));
        }
        if self.clamp_min > self.display_min || self.display_max > self.clamp_max {
            return Err(AppError::input(format!(
                "Display window [{}, {}] must lie inside the logit clamp [{}, {}].",
                self.display_min, self.display_max, self.clamp_min, self.clamp_max
            )));
        }
        Ok(())
    }

    /// Inclusive membership test.
    pub fn contains(&self, p: f64) -> bool {
        p.is_finite() && p >= self.display_min && p <= self.display_max
    }
}

/// Parameters for building any rule.
///
/// `height: None` lets the layout size the canvas from the number of scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub width: u32,
    pub height: Option<u32>,
    pub margin: f64,
    pub window: ProbabilityWindow,
    pub dfs: Vec<f64>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            width: 1800,
            height: None,
            margin: 80.0,
            window: ProbabilityWindow::default(),
            dfs: vec![7.0, 14.0, 28.0, 35.0],
        }
    }
}

impl RuleConfig {
    /// Validate geometry and window. Degrees of freedom are checked separately
    /// because the Z rule ignores them.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.width == 0 || self.height == Some(0) {
            return Err(AppError::input("Canvas width and height must be > 0."));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0 && 2.0 * self.margin < f64::from(self.width)) {
            return Err(AppError::input(format!(
                "Invalid margin {} for width {}.",
                self.margin, self.width
            )));
        }
        self.window.validate()
    }

    pub fn validate_dfs(&self) -> Result<(), AppError> {
        if self.dfs.is_empty() {
            return Err(AppError::input("At least one degrees-of-freedom value is required."));
        }
        if let Some(df) = self.dfs.iter().find(|df| !(df.is_finite() && **df > 0.0)) {
            return Err(AppError::input(format!(
                "Invalid degrees of freedom {df} (must be finite and > 0)."
            )));
        }
        Ok(())
    }
}
