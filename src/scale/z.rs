//! Standard normal z scale (positive half).
//!
//! Values are enumerated in hundredths so tier membership is an integer test
//! rather than a float comparison.

use crate::domain::{Tick, TickTier};
use crate::math::Warp;
use crate::scale::{Placement, TickStyle, label};

/// Upper end of the z scale in hundredths (3.5).
pub const Z_MAX_HUNDREDTHS: u32 = 350;

/// Minimum horizontal distance between consecutive z labels.
const LABEL_SPACING: f64 = 30.0;

fn style(hundredths: u32) -> TickStyle {
    if hundredths % 100 == 0 {
        TickStyle::new(15.0, 2.0, TickTier::Major)
    } else if hundredths % 10 == 0 {
        TickStyle::new(10.0, 1.2, TickTier::Medium)
    } else if hundredths % 5 == 0 {
        TickStyle::new(6.0, 0.8, TickTier::Minor)
    } else {
        TickStyle::new(4.0, 0.5, TickTier::Fine)
    }
}

/// Label text, font size and extra offset beyond the tick end.
fn label_parts(hundredths: u32) -> (String, f64, f64) {
    let z = f64::from(hundredths) / 100.0;
    if hundredths % 100 == 0 {
        (format!("{}", hundredths / 100), 14.0, 25.0)
    } else if hundredths % 10 == 0 {
        (format!("{z:.1}"), 12.0, 20.0)
    } else {
        (format!("{z:.2}"), 10.0, 18.0)
    }
}

/// Every tenth (3.5 included) is a label candidate.
fn is_label_candidate(hundredths: u32) -> bool {
    hundredths % 10 == 0
}

/// All ticks of the z scale, `0.00..=3.50` in steps of 0.01.
pub fn z_ticks<W: Warp>(placement: &Placement<W>) -> Vec<Tick> {
    let mut ticks = Vec::with_capacity(Z_MAX_HUNDREDTHS as usize + 1);
    let mut last_label_x = f64::NEG_INFINITY;

    for hundredths in 0..=Z_MAX_HUNDREDTHS {
        let Some(at) = placement.locate(f64::from(hundredths) / 100.0) else {
            continue;
        };
        let style = style(hundredths);
        let text = if is_label_candidate(hundredths) && (at.x - last_label_x).abs() > LABEL_SPACING {
            last_label_x = at.x;
            let (text, font_size, gap) = label_parts(hundredths);
            Some(label(text, font_size, style.size + gap))
        } else {
            None
        };
        ticks.push(style.tick(at, text));
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::{Distribution, Tail};
    use crate::scale::fixtures::*;

    fn ticks() -> Vec<Tick> {
        let placement = Placement::new(Distribution::standard_normal().unwrap(), Tail::Left, z_warp(), None);
        z_ticks(&placement)
    }

    #[test]
    fn tiers_follow_hundredths() {
        let ticks = ticks();
        assert_eq!(ticks.len(), 351);

        let at = |z: f64| ticks.iter().find(|t| (t.value - z).abs() < 1e-9).unwrap();
        assert_eq!(at(2.0).size, 15.0);
        assert_eq!(at(2.3).size, 10.0);
        assert_eq!(at(2.35).size, 6.0);
        assert_eq!(at(2.37).size, 4.0);
        assert_eq!(at(3.5).tier, TickTier::Medium);
    }

    #[test]
    fn labels_cover_tenths_with_integer_formatting() {
        let ticks = ticks();
        let labels: Vec<&str> = ticks
            .iter()
            .filter_map(|t| t.label.as_ref().map(|l| l.text.as_str()))
            .collect();
        assert_eq!(labels.first(), Some(&"0"));
        assert!(labels.contains(&"1"));
        assert!(labels.contains(&"2.5"));
        assert_eq!(labels.last(), Some(&"3.5"));

        let one = ticks.iter().find(|t| t.value == 1.0).unwrap();
        let l = one.label.as_ref().unwrap();
        assert_eq!((l.font_size, l.offset), (14.0, 40.0));
    }

    #[test]
    fn probabilities_are_left_tail() {
        let ticks = ticks();
        let z196 = ticks.iter().find(|t| (t.value - 1.96).abs() < 1e-9).unwrap();
        assert!((z196.probability - 0.975).abs() < 1e-4);
        assert!(ticks.windows(2).all(|w| w[0].x < w[1].x));
    }
}
