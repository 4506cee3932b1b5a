//! Slide rule assembly.
//!
//! A builder turns a [`RuleConfig`] into a render-ready [`SlideRule`]:
//! scales with their ticks plus titles, notes, legend and frame. Nothing here
//! draws; `plot::svg` consumes the result.
//!
//! The chi-square and t rules share one logit layout (probability scale on
//! top, one statistic scale per degrees of freedom below). The Z rule has its
//! own two-scale layout on a piecewise warp.

use tracing::debug;

use crate::dist::{Distribution, Tail};
use crate::domain::{
    Anchor, Canvas, CircleItem, LineItem, RectItem, RuleConfig, RuleKind, Rgb, Scale, ScaleKind,
    SlideRule, TextItem, Tick, TickDirection,
};
use crate::error::AppError;
use crate::math::{LogitWarp, PiecewiseLogWarp, Warp};
use crate::scale::{
    Placement, chi2_range, chi2_ticks, logit_probability_ticks, t_ticks, z_rule_probability_ticks,
    z_ticks,
};

pub mod layout;

use layout::*;

/// Per-kind text and scale construction for the logit layout.
struct LogitRuleSpec {
    kind: RuleKind,
    title: &'static str,
    subtitle: &'static str,
    probability_title: &'static str,
    notes: [&'static str; 2],
    tail: Tail,
    end_marker: bool,
    scale_title: fn(f64) -> String,
    scale_kind: fn(f64) -> ScaleKind,
    distribution: fn(f64) -> Result<Distribution, AppError>,
    ticks: fn(&Placement<LogitWarp>, &RuleConfig) -> Vec<Tick>,
}

const CHI2_SPEC: LogitRuleSpec = LogitRuleSpec {
    kind: RuleKind::Chi2,
    title: "Enhanced Chi-Square Distribution Slide Rule",
    subtitle: "Right-Tail Probabilities with Warped Chi-Square Scales",
    probability_title: "Probability (P) - Right Tail",
    notes: [
        "How to use: Align right-tail probability on top scale with corresponding chi-square value on any chi-square scale",
        "Expanded extremes for higher precision in tail probabilities (important for hypothesis testing)",
    ],
    tail: Tail::Right,
    end_marker: true,
    scale_title: |df| format!("Chi-square distribution (df={df})"),
    scale_kind: |df| ScaleKind::ChiSquare { df },
    distribution: Distribution::chi_square,
    ticks: |placement, config| match placement.dist.as_ref() {
        Some(dist) => chi2_ticks(placement, chi2_range(dist, &config.window)),
        None => Vec::new(),
    },
};

const T_SPEC: LogitRuleSpec = LogitRuleSpec {
    kind: RuleKind::T,
    title: "Enhanced T-Distribution Slide Rule",
    subtitle: "Expanded Probability Scale with Warped T-Distribution Scales",
    probability_title: "Probability (P)",
    notes: [
        "How to use: Align probability on top scale with corresponding t-value on any t-distribution scale",
        "Expanded extremes for higher precision in tail probabilities",
    ],
    tail: Tail::Left,
    end_marker: false,
    scale_title: |df| format!("t-distribution (df={df})"),
    scale_kind: |df| ScaleKind::T { df },
    distribution: Distribution::student_t,
    ticks: |placement, _| t_ticks(placement),
};

/// Right-tail probability rule with one chi-square scale per df.
pub fn build_chi2_rule(config: &RuleConfig) -> Result<SlideRule, AppError> {
    build_logit_rule(config, &CHI2_SPEC)
}

/// Probability rule with one Student's t scale per df.
pub fn build_t_rule(config: &RuleConfig) -> Result<SlideRule, AppError> {
    build_logit_rule(config, &T_SPEC)
}

fn build_logit_rule(config: &RuleConfig, spec: &LogitRuleSpec) -> Result<SlideRule, AppError> {
    config.validate()?;
    config.validate_dfs()?;

    let last_y = scale_y(config.dfs.len() - 1);
    let canvas = Canvas {
        width: config.width,
        height: config.height.unwrap_or((last_y + LOGIT_HEIGHT_BELOW_LAST) as u32),
        margin: config.margin,
    };
    let warp = LogitWarp::new(&canvas, &config.window)?;
    let mut rule = SlideRule::new(spec.kind, canvas);
    let cx = canvas.center_x();

    let probability = Placement::probability_only(warp, config.window);
    rule.scales.push(Scale {
        kind: ScaleKind::Probability,
        title: spec.probability_title.to_string(),
        baseline_y: PROBABILITY_Y,
        x_start: canvas.left(),
        x_end: canvas.right(),
        direction: TickDirection::Up,
        color: Rgb::BLACK,
        label_color: Rgb::BLACK,
        ticks: logit_probability_ticks(&probability),
    });
    rule.texts.push(TextItem::centered(
        spec.probability_title,
        cx,
        PROBABILITY_Y - SCALE_TITLE_GAP,
        12.0,
        Rgb::BLACK,
    ));

    for (i, &df) in config.dfs.iter().enumerate() {
        let y = scale_y(i);
        let color = Rgb::palette(i);
        let placement = Placement::new((spec.distribution)(df)?, spec.tail, warp, Some(config.window));
        let ticks = (spec.ticks)(&placement, config);
        debug!(df, ticks = ticks.len(), "built {} scale", spec.kind.display_name());

        let title = (spec.scale_title)(df);
        rule.texts
            .push(TextItem::centered(title.clone(), cx, y - SCALE_TITLE_GAP, 12.0, color));
        rule.scales.push(Scale {
            kind: (spec.scale_kind)(df),
            title,
            baseline_y: y,
            x_start: canvas.left(),
            x_end: canvas.right(),
            direction: TickDirection::Down,
            color,
            label_color: color,
            ticks,
        });
    }

    push_header(&mut rule, spec.title, spec.subtitle);

    for (i, note) in spec.notes.iter().enumerate() {
        rule.texts.push(TextItem::centered(
            *note,
            cx,
            last_y + NOTES_GAP + NOTE_LINE_HEIGHT * i as f64,
            10.0,
            Rgb::NOTE,
        ));
    }

    let legend_y = last_y + LEGEND_GAP;
    for (i, &df) in config.dfs.iter().enumerate() {
        let x = canvas.left() + LEGEND_STEP * i as f64;
        let color = Rgb::palette(i);
        rule.circles.push(CircleItem {
            center: (x, legend_y),
            radius: 5.0,
            color,
        });
        rule.texts.push(TextItem {
            text: format!("df = {df}"),
            x: x + 15.0,
            y: legend_y + 5.0,
            font_size: 10.0,
            color,
            anchor: Anchor::Start,
            bold: false,
        });
    }

    rule.frames.push(RectItem {
        x: canvas.left() - FRAME_PAD,
        y: PROBABILITY_Y - 40.0,
        width: canvas.rule_width() + 2.0 * FRAME_PAD,
        height: last_y - PROBABILITY_Y + 180.0,
        color: Rgb::FRAME,
        stroke_width: 1.5,
    });

    if spec.end_marker {
        rule.lines.push(LineItem {
            from: (canvas.right(), PROBABILITY_Y),
            to: (canvas.right(), last_y + 100.0),
            color: Rgb::BLACK,
            stroke_width: 1.5,
            dash: None,
        });
        rule.texts.push(TextItem {
            text: "End".to_string(),
            x: canvas.right() - 15.0,
            y: last_y + LEGEND_GAP,
            font_size: 10.0,
            color: Rgb::BLACK,
            anchor: Anchor::End,
            bold: false,
        });
    }

    Ok(rule)
}

/// Z vs probability rule on the piecewise warp. Degrees of freedom are ignored.
pub fn build_z_rule(config: &RuleConfig) -> Result<SlideRule, AppError> {
    config.validate()?;

    let canvas = Canvas {
        width: config.width,
        height: config.height.unwrap_or(Z_RULE_HEIGHT),
        margin: config.margin,
    };
    let warp = PiecewiseLogWarp::new(&canvas, Z_MIN, Z_MAX, Z_KNEE)?;
    let normal = Distribution::standard_normal()?;
    let placement = Placement::new(normal, Tail::Left, warp, None);
    let mut rule = SlideRule::new(RuleKind::Z, canvas);
    let cx = canvas.center_x();

    rule.scales.push(Scale {
        kind: ScaleKind::Z,
        title: "Z-Score".to_string(),
        baseline_y: Z_SCALE_Y,
        x_start: canvas.left(),
        x_end: canvas.right(),
        direction: TickDirection::Up,
        color: Rgb::RULE,
        label_color: Rgb::BLACK,
        ticks: z_ticks(&placement),
    });
    rule.scales.push(Scale {
        kind: ScaleKind::Probability,
        title: "Probability".to_string(),
        baseline_y: Z_PROBABILITY_Y,
        x_start: canvas.left(),
        x_end: canvas.right(),
        direction: TickDirection::Down,
        color: Rgb::RULE,
        label_color: Rgb::BLACK,
        ticks: z_rule_probability_ticks(&placement),
    });
    debug!(ticks = rule.tick_count(), "built Z rule");

    rule.texts
        .push(TextItem::centered("Z-Score", cx, Z_SCALE_Y - SCALE_TITLE_GAP, 8.0, Rgb::BLACK));
    rule.texts
        .push(TextItem::centered("Probability", cx, Z_PROBABILITY_Y + 35.0, 8.0, Rgb::BLACK));

    for z in Z_GRID_LINES {
        let x = placement.warp.position(z);
        rule.lines.push(LineItem {
            from: (x, Z_SCALE_Y - 15.0),
            to: (x, Z_PROBABILITY_Y + 15.0),
            color: Rgb::GRID,
            stroke_width: 1.0,
            dash: Some((3.0, 3.0)),
        });
    }

    rule.frames.push(RectItem {
        x: canvas.left() - FRAME_PAD,
        y: Z_SCALE_Y - 25.0,
        width: canvas.rule_width() + 2.0 * FRAME_PAD,
        height: Z_PROBABILITY_Y - Z_SCALE_Y + 50.0,
        color: Rgb::FRAME,
        stroke_width: 1.5,
    });

    push_header(
        &mut rule,
        "High-Detail Statistical Slide Rule",
        "Z-Score to Probability Conversion (Normal Distribution)",
    );

    for x in [canvas.left(), canvas.right()] {
        rule.lines.push(LineItem {
            from: (x, Z_SCALE_Y - 8.0),
            to: (x, Z_PROBABILITY_Y + 8.0),
            color: Rgb::GUIDE,
            stroke_width: 1.5,
            dash: None,
        });
    }

    Ok(rule)
}

/// Build the rule for `kind`.
pub fn build_rule(kind: RuleKind, config: &RuleConfig) -> Result<SlideRule, AppError> {
    match kind {
        RuleKind::Chi2 => build_chi2_rule(config),
        RuleKind::T => build_t_rule(config),
        RuleKind::Z => build_z_rule(config),
    }
}

fn push_header(rule: &mut SlideRule, title: &str, subtitle: &str) {
    let cx = rule.canvas.center_x();
    rule.texts.push(TextItem {
        bold: true,
        ..TextItem::centered(title, cx, TITLE_Y, 18.0, Rgb::BLACK)
    });
    rule.texts
        .push(TextItem::centered(subtitle, cx, SUBTITLE_Y, 12.0, Rgb::SUBTITLE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProbabilityWindow, TickTier};

    #[test]
    fn chi2_rule_has_probability_scale_and_one_scale_per_df() {
        let rule = build_chi2_rule(&RuleConfig::default()).unwrap();
        assert_eq!(rule.kind, RuleKind::Chi2);
        assert_eq!(rule.scales.len(), 5);
        assert_eq!(rule.canvas.height, 800);
        assert_eq!(rule.scales[1].baseline_y, 250.0);
        assert_eq!(rule.scales[4].baseline_y, 550.0);
        assert_eq!(rule.scales[2].color, Rgb(0, 128, 0));
        assert!(matches!(rule.scales[1].kind, ScaleKind::ChiSquare { df } if df == 7.0));
        assert!(rule.texts.iter().any(|t| t.text == "Chi-square distribution (df=7)"));
        assert!(rule.texts.iter().any(|t| t.text == "df = 35"));
        assert!(rule.texts.iter().any(|t| t.text == "End"));
        assert_eq!(rule.circles.len(), 4);
    }

    #[test]
    fn logit_rule_ticks_stay_inside_window() {
        let config = RuleConfig::default();
        for rule in [build_chi2_rule(&config).unwrap(), build_t_rule(&config).unwrap()] {
            for scale in &rule.scales {
                assert!(!scale.ticks.is_empty());
                for tick in &scale.ticks {
                    assert!(config.window.contains(tick.probability));
                    assert!(tick.x >= 80.0 && tick.x <= 1720.0);
                }
            }
        }
    }

    #[test]
    fn height_grows_with_df_count() {
        let config = RuleConfig {
            dfs: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            ..RuleConfig::default()
        };
        let rule = build_t_rule(&config).unwrap();
        assert_eq!(rule.scales.len(), 7);
        assert_eq!(rule.canvas.height, 1000);
        // Palette cycles after four scales.
        assert_eq!(rule.scales[5].color, rule.scales[1].color);
    }

    #[test]
    fn explicit_height_wins() {
        let config = RuleConfig {
            height: Some(900),
            ..RuleConfig::default()
        };
        assert_eq!(build_chi2_rule(&config).unwrap().canvas.height, 900);
    }

    #[test]
    fn invalid_df_propagates() {
        let config = RuleConfig {
            dfs: vec![7.0, 0.0],
            ..RuleConfig::default()
        };
        let err = build_t_rule(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(build_chi2_rule(&RuleConfig { dfs: vec![], ..RuleConfig::default() }).is_err());
    }

    #[test]
    fn z_rule_layout() {
        let config = RuleConfig {
            dfs: vec![],
            ..RuleConfig::default()
        };
        let rule = build_z_rule(&config).unwrap();
        assert_eq!(rule.canvas.height, 600);
        assert_eq!(rule.scales.len(), 2);
        assert_eq!(rule.scales[0].direction, TickDirection::Up);
        assert_eq!(rule.scales[1].direction, TickDirection::Down);
        assert_eq!(rule.lines.iter().filter(|l| l.dash.is_some()).count(), 3);
        assert!(rule.scales[1].ticks.iter().any(|t| t.tier == TickTier::Major));
    }

    #[test]
    fn wide_window_needs_matching_clamp() {
        let mut config = RuleConfig {
            window: ProbabilityWindow {
                display_min: 0.0001,
                display_max: 0.9999,
                ..ProbabilityWindow::default()
            },
            ..RuleConfig::default()
        };
        assert_eq!(build_chi2_rule(&config).unwrap_err().exit_code(), 2);

        config.window.clamp_min = 0.00005;
        config.window.clamp_max = 0.99995;
        let rule = build_chi2_rule(&config).unwrap();
        for scale in &rule.scales[1..] {
            let majors: Vec<f64> = scale
                .ticks
                .iter()
                .filter(|t| t.tier == TickTier::Major)
                .map(|t| t.x)
                .collect();
            assert!(majors.windows(2).all(|w| w[1] - w[0] > 1.0), "{}", scale.title);
        }
    }

    #[test]
    fn window_changes_rule_span() {
        let config = RuleConfig {
            window: ProbabilityWindow {
                display_min: 0.01,
                display_max: 0.99,
                ..ProbabilityWindow::default()
            },
            ..RuleConfig::default()
        };
        let rule = build_chi2_rule(&config).unwrap();
        let probability = &rule.scales[0];
        let first = probability.ticks.first().unwrap();
        assert_eq!(first.value, 0.01);
        assert!((first.x - 80.0).abs() < 1e-9);
    }
}
