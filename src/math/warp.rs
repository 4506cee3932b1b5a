//! Axis warps: value -> horizontal pixel position.
//!
//! Two warps exist:
//!
//! - [`LogitWarp`] consumes a probability. Positions are linear in `logit(p)`,
//!   normalized so the display window fills the rule exactly.
//! - [`PiecewiseLogWarp`] consumes a statistic (z). Linear up to a knee, then
//!   log-compressed so the far tail still fits on the rule.
//!
//! Both are monotonic and invertible on the visible domain.

use crate::domain::{Canvas, ProbabilityWindow};
use crate::error::AppError;
use crate::math::logit::{inv_logit, logit};

/// What kind of value a warp maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpKey {
    Probability,
    Statistic,
}

/// Monotonic mapping from a scale value to an x pixel position.
pub trait Warp {
    fn key(&self) -> WarpKey;

    /// Pixel position of `value`.
    fn position(&self, value: f64) -> f64;

    /// Value at pixel position `x`.
    fn inverse(&self, x: f64) -> f64;
}

/// Logit warp normalized against a probability display window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogitWarp {
    origin: f64,
    span: f64,
    clamp_min: f64,
    clamp_max: f64,
    logit_lo: f64,
    logit_hi: f64,
}

impl LogitWarp {
    pub fn new(canvas: &Canvas, window: &ProbabilityWindow) -> Result<Self, AppError> {
        window.validate()?;
        let span = canvas.rule_width();
        if !(span.is_finite() && span > 0.0) {
            return Err(AppError::input("Rule width must be > 0."));
        }
        Ok(Self {
            origin: canvas.left(),
            span,
            clamp_min: window.clamp_min,
            clamp_max: window.clamp_max,
            logit_lo: logit(window.display_min),
            logit_hi: logit(window.display_max),
        })
    }

    /// Fraction of the rule width at which `p` lands, clamped to `[0, 1]`.
    pub fn normalized(&self, p: f64) -> f64 {
        let p = p.clamp(self.clamp_min, self.clamp_max);
        let n = (logit(p) - self.logit_lo) / (self.logit_hi - self.logit_lo);
        n.clamp(0.0, 1.0)
    }
}

impl Warp for LogitWarp {
    fn key(&self) -> WarpKey {
        WarpKey::Probability
    }

    fn position(&self, p: f64) -> f64 {
        self.origin + self.span * self.normalized(p)
    }

    fn inverse(&self, x: f64) -> f64 {
        let n = ((x - self.origin) / self.span).clamp(0.0, 1.0);
        inv_logit(self.logit_lo + n * (self.logit_hi - self.logit_lo))
    }
}

/// Linear below `knee`, log-compressed between `knee` and `z_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseLogWarp {
    origin: f64,
    span: f64,
    z_min: f64,
    z_max: f64,
    knee: f64,
}

impl PiecewiseLogWarp {
    pub fn new(canvas: &Canvas, z_min: f64, z_max: f64, knee: f64) -> Result<Self, AppError> {
        if !(z_min.is_finite() && z_max.is_finite() && knee.is_finite() && z_min < knee && knee < z_max) {
            return Err(AppError::input(format!(
                "Invalid z warp: min={z_min}, knee={knee}, max={z_max} (need min < knee < max)."
            )));
        }
        let span = canvas.rule_width();
        if !(span.is_finite() && span > 0.0) {
            return Err(AppError::input("Rule width must be > 0."));
        }
        Ok(Self {
            origin: canvas.left(),
            span,
            z_min,
            z_max,
            knee,
        })
    }

    fn knee_position(&self) -> f64 {
        self.origin + self.span * (self.knee - self.z_min) / (self.z_max - self.z_min)
    }

    fn tail_scale(&self) -> f64 {
        (1.0 + (self.z_max - self.knee)).ln()
    }
}

impl Warp for PiecewiseLogWarp {
    fn key(&self) -> WarpKey {
        WarpKey::Statistic
    }

    fn position(&self, z: f64) -> f64 {
        if z <= self.knee {
            return self.origin + self.span * (z - self.z_min) / (self.z_max - self.z_min);
        }
        let base = self.knee_position();
        let remaining = self.origin + self.span - base;
        base + remaining * (1.0 + (z - self.knee)).ln() / self.tail_scale()
    }

    fn inverse(&self, x: f64) -> f64 {
        let base = self.knee_position();
        if x <= base {
            return self.z_min + (x - self.origin) / self.span * (self.z_max - self.z_min);
        }
        let remaining = self.origin + self.span - base;
        let f = (x - base) / remaining;
        self.knee + (f * self.tail_scale()).exp() - 1.0
    }
}
