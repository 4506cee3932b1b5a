//! Chi-square scales (right-tail probabilities).
//!
//! Three layers of marks:
//! - majors at integers, labeled
//! - decimals every 0.1
//! - fine marks every 0.01 where the rule is stretched most (right-tail
//!   probability between 0.990 and 0.999)
//!
//! The visible chi-square range comes from the inverse CDF. If that fails or
//! returns something unusable, a heuristic range is substituted so the scale
//! still renders.

use tracing::warn;

use crate::dist::{Distribution, Tail};
use crate::domain::{ProbabilityWindow, Tick, TickTier};
use crate::math::Warp;
use crate::scale::{Placement, TickStyle, label, sort_by_position};

const MAJOR: TickStyle = TickStyle::new(15.0, 2.0, TickTier::Major);
const DECIMAL: TickStyle = TickStyle::new(5.0, 0.6, TickTier::Minor);
const FINE: TickStyle = TickStyle::new(3.0, 0.3, TickTier::Fine);

/// Right-tail probabilities bounding the fine-mark region.
pub const FINE_REGION: (f64, f64) = (0.990, 0.999);

/// Upper quantiles beyond this are replaced by `5 * df`.
const MAX_UPPER_BOUND: f64 = 1000.0;

/// Fine marks are skipped when the region is narrower than this on screen.
const FINE_REGION_MIN_WIDTH: f64 = 10.0;

/// Chi-square values visible on the rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chi2Range {
    pub min: f64,
    pub max: f64,
    /// True when at least one bound came from the heuristic fallback.
    pub fallback: bool,
}

/// Visible chi-square range for a probability window.
///
/// Bounds are `ppf(1 - display_max)` and `ppf(1 - display_min)`. A lower bound
/// that is missing or negative becomes 0.1; an upper bound that is missing or
/// above 1000 becomes `5 * df`. Ranges narrower than 1 are widened to 5.
pub fn chi2_range(dist: &Distribution, window: &ProbabilityWindow) -> Chi2Range {
    let df = dist.df().unwrap_or(1.0);
    let lower = dist.statistic(window.display_max, Tail::Right);
    let upper = dist.statistic(window.display_min, Tail::Right);
    resolve_range(df, lower, upper)
}

/// Apply the fallback policy to raw quantile bounds.
fn resolve_range(df: f64, lower: Option<f64>, upper: Option<f64>) -> Chi2Range {
    let lower = lower.filter(|v| *v >= 0.0);
    let upper = upper.filter(|v| *v <= MAX_UPPER_BOUND);

    let fallback = lower.is_none() || upper.is_none();
    if fallback {
        warn!(df, ?lower, ?upper, "chi-square range fell back to heuristic bounds");
    }

    let min = lower.unwrap_or(0.1);
    let mut max = upper.unwrap_or(df * 5.0);
    if max - min < 1.0 {
        max = min + 5.0;
    }
    Chi2Range { min, max, fallback }
}

/// All ticks of one chi-square scale.
pub fn chi2_ticks<W: Warp>(placement: &Placement<W>, range: Chi2Range) -> Vec<Tick> {
    let mut ticks = Vec::new();

    let start = first_whole(range);
    let end = range.max.floor() as i64;

    for k in start..=end {
        let value = k as f64;
        if let Some(at) = placement.locate(value) {
            let text = label(format!("{k}"), 10.0, MAJOR.size + 14.0);
            ticks.push(MAJOR.tick(at, Some(text)));
        }
    }

    let mut whole = start;
    while whole as f64 <= range.max {
        for tenth in 1..=9 {
            let value = (whole * 10 + tenth) as f64 / 10.0;
            if value > range.max {
                break;
            }
            if let Some(at) = placement.locate(value) {
                ticks.push(DECIMAL.tick(at, None));
            }
        }
        whole += 1;
    }

    ticks.extend(fine_tail_ticks(placement, range));

    sort_by_position(&mut ticks);
    ticks
}

/// Integer and decimal marks share the same integer start.
fn first_whole(range: Chi2Range) -> i64 {
    range.min.ceil().max(1.0) as i64
}

/// 0.01 marks inside [`FINE_REGION`], except where a major or decimal mark
/// already sits.
fn fine_tail_ticks<W: Warp>(placement: &Placement<W>, range: Chi2Range) -> Vec<Tick> {
    let (p_lo, p_hi) = FINE_REGION;
    let (Some(x_lo), Some(x_hi)) = (
        placement.probability_position(p_lo),
        placement.probability_position(p_hi),
    ) else {
        return Vec::new();
    };
    if (x_hi - x_lo).abs() <= FINE_REGION_MIN_WIDTH {
        return Vec::new();
    }

    let Some(dist) = placement.dist.as_ref() else {
        return Vec::new();
    };
    let (Some(a), Some(b)) = (dist.statistic(p_lo, Tail::Right), dist.statistic(p_hi, Tail::Right)) else {
        return Vec::new();
    };
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let first = (lo * 100.0).ceil() as i64;
    let last = (hi * 100.0).floor() as i64;
    let covered_from = first_whole(range) * 100;
    let covered_to = (range.max * 100.0).floor() as i64;
    let covered = |h: i64| h % 10 == 0 && (covered_from..=covered_to).contains(&h);
    (first..=last)
        .filter(|h| !covered(*h))
        .filter_map(|hundredth| {
            let at = placement.locate(hundredth as f64 / 100.0)?;
            (p_lo..=p_hi)
                .contains(&at.probability)
                .then(|| FINE.tick(at, None))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::fixtures::*;

    fn placement(df: f64) -> Placement<crate::math::LogitWarp> {
        Placement::new(
            Distribution::chi_square(df).unwrap(),
            Tail::Right,
            logit_warp(),
            Some(ProbabilityWindow::default()),
        )
    }

    #[test]
    fn range_df7_matches_quantiles() {
        let p = placement(7.0);
        let range = chi2_range(p.dist.as_ref().unwrap(), &ProbabilityWindow::default());
        assert!(!range.fallback);
        // chi2.ppf(0.001, 7) = 0.598, chi2.ppf(0.999, 7) = 24.322
        assert!((range.min - 0.598).abs() < 1e-2, "min={}", range.min);
        assert!((range.max - 24.322).abs() < 1e-2, "max={}", range.max);
    }

    #[test]
    fn minimum_major_tick_df7_is_first_integer_above_lower_quantile() {
        let p = placement(7.0);
        let dist = p.dist.as_ref().unwrap();
        let window = ProbabilityWindow::default();
        let range = chi2_range(dist, &window);
        let ticks = chi2_ticks(&p, range);

        let lower = dist.statistic(window.display_max, Tail::Right).unwrap();
        let expected = lower.ceil().max(1.0);

        let min_major = ticks
            .iter()
            .filter(|t| t.tier == TickTier::Major)
            .map(|t| t.value)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(min_major, expected);
        assert_eq!(min_major, 1.0);

        let max_major = ticks
            .iter()
            .filter(|t| t.tier == TickTier::Major)
            .map(|t| t.value)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max_major, 24.0);
    }

    #[test]
    fn every_tick_lies_inside_window() {
        let window = ProbabilityWindow::default();
        for df in [1.0, 7.0, 14.0, 35.0, 100.0] {
            let p = placement(df);
            let range = chi2_range(p.dist.as_ref().unwrap(), &window);
            let ticks = chi2_ticks(&p, range);
            assert!(!ticks.is_empty(), "df={df}");
            for t in &ticks {
                assert!(window.contains(t.probability), "df={df}, value={}", t.value);
                assert!(t.x >= 80.0 && t.x <= 1720.0);
            }
        }
    }

    #[test]
    fn majors_are_labeled_integers_and_decimals_are_not() {
        let p = placement(14.0);
        let range = chi2_range(p.dist.as_ref().unwrap(), &ProbabilityWindow::default());
        let ticks = chi2_ticks(&p, range);
        for t in &ticks {
            match t.tier {
                TickTier::Major => {
                    assert_eq!(t.value.fract(), 0.0);
                    assert_eq!(t.label.as_ref().unwrap().text, format!("{}", t.value as i64));
                }
                _ => assert!(t.label.is_none()),
            }
        }
        assert!(ticks.iter().any(|t| t.tier == TickTier::Minor));
    }

    #[test]
    fn fine_marks_sit_in_the_stretched_tail() {
        let p = placement(7.0);
        let range = chi2_range(p.dist.as_ref().unwrap(), &ProbabilityWindow::default());
        let ticks = chi2_ticks(&p, range);
        let fine: Vec<_> = ticks.iter().filter(|t| t.tier == TickTier::Fine).collect();
        // chi2 between ppf(0.001, 7) ~ 0.60 and ppf(0.01, 7) ~ 1.24.
        assert!(fine.len() > 50, "fine={}", fine.len());
        for t in fine {
            assert!(t.probability >= 0.990 && t.probability <= 0.999);
            assert_eq!(t.size, 3.0);
        }
    }

    #[test]
    fn fine_marks_skip_existing_marks() {
        let p = placement(7.0);
        let range = chi2_range(p.dist.as_ref().unwrap(), &ProbabilityWindow::default());
        let ticks = chi2_ticks(&p, range);

        let mut hundredths: Vec<i64> = ticks.iter().map(|t| (t.value * 100.0).round() as i64).collect();
        let total = hundredths.len();
        hundredths.sort_unstable();
        hundredths.dedup();
        assert_eq!(hundredths.len(), total);

        let at = |v: f64| ticks.iter().filter(|t| (t.value - v).abs() < 1e-9).count();
        assert_eq!(at(1.0), 1);
        assert_eq!(at(1.1), 1);
        // Below the first whole number there are no decimal marks to collide with.
        assert!(ticks.iter().any(|t| (t.value - 0.7).abs() < 1e-9 && t.tier == TickTier::Fine));
    }

    #[test]
    fn huge_df_falls_back_to_heuristic_upper_bound() {
        let df = 1000.0;
        let p = placement(df);
        let window = ProbabilityWindow::default();
        let range = chi2_range(p.dist.as_ref().unwrap(), &window);
        assert!(range.fallback);
        assert_eq!(range.max, 5.0 * df);
        assert!(range.min > 800.0 && range.min < 900.0, "min={}", range.min);

        let ticks = chi2_ticks(&p, range);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| window.contains(t.probability)));
        assert!(ticks.iter().all(|t| t.x >= 80.0 && t.x <= 1720.0));
    }

    #[test]
    fn missing_or_negative_lower_bound_becomes_tenth() {
        let range = resolve_range(7.0, None, Some(24.3));
        assert!(range.fallback);
        assert_eq!(range.min, 0.1);
        assert_eq!(range.max, 24.3);

        let range = resolve_range(7.0, Some(-0.5), Some(24.3));
        assert!(range.fallback);
        assert_eq!(range.min, 0.1);

        let range = resolve_range(4.0, Some(0.5), None);
        assert!(range.fallback);
        assert_eq!(range.max, 20.0);

        let range = resolve_range(7.0, Some(0.6), Some(24.3));
        assert!(!range.fallback);
    }

    #[test]
    fn narrow_range_is_widened() {
        let window = ProbabilityWindow {
            display_min: 0.49,
            display_max: 0.51,
            ..ProbabilityWindow::default()
        };
        let dist = Distribution::chi_square(1.0).unwrap();
        let range = chi2_range(&dist, &window);
        assert!((range.max - range.min - 5.0).abs() < 1e-12);
    }
}
