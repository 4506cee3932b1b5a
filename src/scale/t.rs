//! Student's t scales (left-tail probabilities).
//!
//! Candidates run every 0.1 over `[-5, 5]`. Inside `|t| <= 3` every tenth is
//! labeled; beyond that only half-integers are, since the scale is compressed
//! there. Unlabeled minors fill the gaps, denser in the tails.

use crate::domain::{Tick, TickTier};
use crate::math::Warp;
use crate::scale::{Located, Placement, TickStyle, label, sort_by_position};

const LABELED: TickStyle = TickStyle::new(12.0, 1.8, TickTier::Major);
const MINOR: TickStyle = TickStyle::new(8.0, 0.7, TickTier::Minor);

/// Candidate range in tenths.
const T_RANGE_TENTHS: std::ops::RangeInclusive<i32> = -50..=50;

/// |t| beyond which gaps get four minors instead of one.
const TAIL_THRESHOLD: f64 = 2.5;

/// Whether a candidate (in tenths) gets a label.
fn is_round(tenths: i32) -> bool {
    let a = tenths.abs();
    a <= 30 || a % 5 == 0
}

/// One decimal on the 0.1 grid, two otherwise.
pub fn format_t(t: f64) -> String {
    if t.abs() < 10.0 && (t - (t * 10.0).round() / 10.0).abs() >= 1e-5 {
        format!("{t:.2}")
    } else {
        format!("{t:.1}")
    }
}

/// All ticks of one t scale.
pub fn t_ticks<W: Warp>(placement: &Placement<W>) -> Vec<Tick> {
    let labeled: Vec<Located> = T_RANGE_TENTHS
        .filter(|k| is_round(*k))
        .filter_map(|k| placement.locate(f64::from(k) / 10.0))
        .collect();

    let mut ticks: Vec<Tick> = labeled
        .iter()
        .map(|at| {
            let text = label(format_t(at.value), 9.0, LABELED.size + 12.0);
            LABELED.tick(*at, Some(text))
        })
        .collect();

    for pair in labeled.windows(2) {
        let (t1, t2) = (pair[0].value, pair[1].value);
        let minors = if t1.abs() > TAIL_THRESHOLD || t2.abs() > TAIL_THRESHOLD {
            4
        } else {
            1
        };
        for j in 1..=minors {
            let frac = f64::from(j) / f64::from(minors + 1);
            if let Some(at) = placement.locate(t1 + frac * (t2 - t1)) {
                ticks.push(MINOR.tick(at, None));
            }
        }
    }

    sort_by_position(&mut ticks);
    ticks
}
