//! Probability scales.
//!
//! Logit rules (chi-square, t) share one probability scale built from a fixed
//! list of conventional significance levels. The Z rule has its own, denser
//! scale over the upper half `[0.5, 0.999]`, keyed through `z = Φ⁻¹(p)`.

use std::collections::BTreeSet;

use crate::domain::{Tick, TickLabel, TickTier};
use crate::math::Warp;
use crate::scale::{Placement, TickStyle, label, sort_by_position};

/// Main probabilities of the logit rules.
pub const MAIN_PROBABILITIES: [f64; 19] = [
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 0.975,
    0.99, 0.995, 0.999,
];

const EXTREME: TickStyle = TickStyle::new(15.0, 2.0, TickTier::Major);
const DECILE_EDGE: TickStyle = TickStyle::new(12.0, 1.5, TickTier::Medium);
const CENTRAL: TickStyle = TickStyle::new(8.0, 1.0, TickTier::Medium);
const TAIL_MINOR: TickStyle = TickStyle::new(6.0, 0.7, TickTier::Minor);
const CENTRAL_MINOR: TickStyle = TickStyle::new(4.0, 0.5, TickTier::Fine);

fn is_extreme(p: f64) -> bool {
    p <= 0.05 || p >= 0.95
}

/// Style and label font size for a main probability.
fn main_style(p: f64) -> (TickStyle, f64) {
    if is_extreme(p) {
        (EXTREME, 10.0)
    } else if p == 0.1 || p == 0.9 {
        (DECILE_EDGE, 9.0)
    } else {
        (CENTRAL, 8.0)
    }
}

/// `0.025` style outside `[0.1, 0.9]`, `0.50` style inside.
pub fn format_main_probability(p: f64) -> String {
    if !(0.1..=0.9).contains(&p) {
        format!("{p:.3}")
    } else {
        format!("{p:.2}")
    }
}

/// Probability scale of the logit rules: labeled main ticks plus unlabeled minors.
pub fn logit_probability_ticks<W: Warp>(placement: &Placement<W>) -> Vec<Tick> {
    let mut ticks = Vec::new();

    for &p in &MAIN_PROBABILITIES {
        let Some(at) = placement.locate_probability(p) else {
            continue;
        };
        let (style, font_size) = main_style(p);
        let text = label(format_main_probability(p), font_size, style.size + 10.0);
        ticks.push(style.tick(at, Some(text)));
    }

    for pair in MAIN_PROBABILITIES.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        if !(placement.is_visible(p1) && placement.is_visible(p2)) {
            continue;
        }
        let (divisions, style) = if p1 < 0.1 || p2 > 0.9 {
            (5, TAIL_MINOR)
        } else {
            (4, CENTRAL_MINOR)
        };
        let step = (p2 - p1) / f64::from(divisions);
        for j in 1..divisions {
            let p = p1 + f64::from(j) * step;
            if let Some(at) = placement.locate_probability(p) {
                ticks.push(style.tick(at, None));
            }
        }
    }

    sort_by_position(&mut ticks);
    ticks
}

/// Z-rule probabilities in thousandths: (majors, all values).
fn z_rule_grid() -> (BTreeSet<u32>, BTreeSet<u32>) {
    let mut majors = BTreeSet::new();
    majors.extend((500..=900).step_by(20));
    majors.extend((910..=990).step_by(10));
    majors.extend(991..=999);

    // (start, end, step), end exclusive.
    const MINOR_INTERVALS: [(u32, u32, u32); 7] = [
        (500, 600, 10),
        (600, 700, 10),
        (700, 800, 10),
        (800, 900, 10),
        (900, 950, 5),
        (950, 990, 2),
        (990, 999, 1),
    ];

    let mut all = majors.clone();
    for (start, end, step) in MINOR_INTERVALS {
        all.extend((start + step..end).step_by(step as usize));
    }
    (majors, all)
}

/// `.52`, `.915`, `.9910`: more decimals as the tail gets thinner.
pub fn format_z_rule_probability(p: f64) -> String {
    let text = if p < 0.9 {
        format!("{p:.2}")
    } else if p < 0.99 {
        format!("{p:.3}")
    } else {
        format!("{p:.4}")
    };
    match text.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Minimum horizontal distance between consecutive rotated probability labels.
const Z_RULE_LABEL_SPACING: f64 = 15.0;

/// Probability scale of the Z rule (ticks point away from the z scale).
pub fn z_rule_probability_ticks<W: Warp>(placement: &Placement<W>) -> Vec<Tick> {
    const MAJOR: TickStyle = TickStyle::new(12.0, 1.5, TickTier::Major);
    const MINOR: TickStyle = TickStyle::new(8.0, 1.0, TickTier::Minor);

    let (majors, all) = z_rule_grid();
    let mut ticks = Vec::with_capacity(all.len());
    let mut last_label_x = f64::NEG_INFINITY;

    for milli in all {
        let p = f64::from(milli) / 1000.0;
        let Some(at) = placement.locate_probability(p) else {
            continue;
        };
        if !majors.contains(&milli) {
            ticks.push(MINOR.tick(at, None));
            continue;
        }
        let text = if (at.x - last_label_x).abs() > Z_RULE_LABEL_SPACING {
            last_label_x = at.x;
            Some(TickLabel {
                text: format_z_rule_probability(p),
                font_size: 10.0,
                offset: MAJOR.size + 30.0,
                rotated: true,
            })
        } else {
            None
        };
        ticks.push(MAJOR.tick(at, text));
    }

    ticks
}
