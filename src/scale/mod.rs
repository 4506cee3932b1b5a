//! Tick generation for every scale type.
//!
//! All generators share one abstraction, [`Placement`]: a distribution, the
//! tail its probabilities are read from, a warp, and an optional visible
//! probability window. A generator enumerates candidate values at fixed
//! resolutions, asks the placement where (and whether) each one lands, and
//! assigns size/stroke/label by a tier rule.
//!
//! Submodules:
//! - `probability`: probability scales (logit rules and the Z rule)
//! - `chi2`: chi-square scales (right tail) with range fallback
//! - `t`: Student's t scales
//! - `z`: standard normal z scale

use crate::dist::{Distribution, Tail};
use crate::domain::{ProbabilityWindow, Tick, TickLabel, TickTier};
use crate::math::{Warp, WarpKey};

pub mod chi2;
pub mod probability;
pub mod t;
pub mod z;

pub use chi2::*;
pub use probability::*;
pub use t::*;
pub use z::*;

/// A value resolved to its probability and x position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    pub value: f64,
    pub probability: f64,
    pub x: f64,
}

/// Distribution + tail + warp + window.
///
/// `dist` may be `None` for a pure probability scale on a probability-keyed
/// warp; statistic lookups then return `None`.
#[derive(Debug, Clone)]
pub struct Placement<W: Warp> {
    pub dist: Option<Distribution>,
    pub tail: Tail,
    pub warp: W,
    pub window: Option<ProbabilityWindow>,
}

impl<W: Warp> Placement<W> {
    pub fn new(dist: Distribution, tail: Tail, warp: W, window: Option<ProbabilityWindow>) -> Self {
        Self {
            dist: Some(dist),
            tail,
            warp,
            window,
        }
    }

    /// Placement for a probability scale that needs no distribution.
    pub fn probability_only(warp: W, window: ProbabilityWindow) -> Self {
        Self {
            dist: None,
            tail: Tail::Left,
            warp,
            window: Some(window),
        }
    }

    pub fn is_visible(&self, p: f64) -> bool {
        p.is_finite() && self.window.is_none_or(|w| w.contains(p))
    }

    /// Locate a statistic. `None` if it falls outside the window.
    pub fn locate(&self, stat: f64) -> Option<Located> {
        let dist = self.dist.as_ref()?;
        let probability = dist.probability(stat, self.tail);
        if !self.is_visible(probability) {
            return None;
        }
        let x = match self.warp.key() {
            WarpKey::Probability => self.warp.position(probability),
            WarpKey::Statistic => self.warp.position(stat),
        };
        x.is_finite().then_some(Located {
            value: stat,
            probability,
            x,
        })
    }

    /// Locate a probability. The located value is the probability itself.
    pub fn locate_probability(&self, p: f64) -> Option<Located> {
        if !self.is_visible(p) {
            return None;
        }
        let x = match self.warp.key() {
            WarpKey::Probability => self.warp.position(p),
            WarpKey::Statistic => {
                let stat = self.dist.as_ref()?.statistic(p, self.tail)?;
                self.warp.position(stat)
            }
        };
        x.is_finite().then_some(Located {
            value: p,
            probability: p,
            x,
        })
    }

    /// Unfiltered position of a probability on a probability-keyed warp.
    pub fn probability_position(&self, p: f64) -> Option<f64> {
        match self.warp.key() {
            WarpKey::Probability => Some(self.warp.position(p)),
            WarpKey::Statistic => {
                let stat = self.dist.as_ref()?.statistic(p, self.tail)?;
                Some(self.warp.position(stat))
            }
        }
    }
}

/// Size and stroke of one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStyle {
    pub size: f64,
    pub stroke_width: f64,
    pub tier: TickTier,
}

impl TickStyle {
    pub const fn new(size: f64, stroke_width: f64, tier: TickTier) -> Self {
        Self {
            size,
            stroke_width,
            tier,
        }
    }

    pub fn tick(self, at: Located, label: Option<TickLabel>) -> Tick {
        Tick {
            value: at.value,
            probability: at.probability,
            x: at.x,
            size: self.size,
            stroke_width: self.stroke_width,
            tier: self.tier,
            label,
        }
    }
}

pub(crate) fn label(text: String, font_size: f64, offset: f64) -> TickLabel {
    TickLabel {
        text,
        font_size,
        offset,
        rotated: false,
    }
}

pub(crate) fn sort_by_position(ticks: &mut [Tick]) {
    ticks.sort_by(|a, b| a.x.total_cmp(&b.x).then(b.tier.cmp(&a.tier)));
}
