//! Terminal summary printed after a rule is written.
//!
//! Formatting lives here so the pipeline returns plain values and the wording
//! of the console output is localized.

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::{RuleKind, ScaleKind, SlideRule};

/// Degrees of freedom of the statistic scales, in drawing order.
pub fn scale_dfs(rule: &SlideRule) -> Vec<f64> {
    rule.scales
        .iter()
        .filter_map(|s| match s.kind {
            ScaleKind::T { df } | ScaleKind::ChiSquare { df } => Some(df),
            ScaleKind::Probability | ScaleKind::Z => None,
        })
        .collect()
}

/// Human readable run summary.
pub fn format_summary(rule: &SlideRule, output: &Path) -> String {
    let mut out = String::new();
    let path = output.display();

    match rule.kind {
        RuleKind::Chi2 => {
            let _ = writeln!(out, "Enhanced Chi-square distribution slide rule saved as {path}");
            let _ = writeln!(out, "Created with degrees of freedom: {}", format_dfs(&scale_dfs(rule)));
            let _ = writeln!(out, "Probability scale uses right-tail probabilities (1 - CDF)");
            let _ = writeln!(out, "Chi-square scales feature decimal marking down to 0.1 (0.01 in the extreme tail)");
        }
        RuleKind::T => {
            let _ = writeln!(out, "Enhanced T-distribution slide rule saved as {path}");
            let _ = writeln!(out, "Created with degrees of freedom: {}", format_dfs(&scale_dfs(rule)));
            let _ = writeln!(out, "Probability scale uses logit expansion for balanced extreme/center spacing");
            let _ = writeln!(out, "T-scales feature round-number labels and denser minor ticks in the tails");
        }
        RuleKind::Z => {
            let _ = writeln!(out, "High-detail slide rule saved as {path}");
            let _ = writeln!(out, "Z-scale is linear up to z = 2 and log-compressed above");
        }
    }
    let _ = write!(out, "{} scales, {} ticks", rule.scales.len(), rule.tick_count());
    out
}

/// `df1=7, df2=14, ...`
pub fn format_dfs(dfs: &[f64]) -> String {
    dfs.iter()
        .enumerate()
        .map(|(i, df)| format!("df{}={df}", i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RuleConfig;
    use crate::rule::{build_chi2_rule, build_z_rule};

    #[test]
    fn dfs_are_numbered_in_order() {
        assert_eq!(format_dfs(&[7.0, 14.0, 28.0, 35.0]), "df1=7, df2=14, df3=28, df4=35");
        assert_eq!(format_dfs(&[2.5]), "df1=2.5");
        assert_eq!(format_dfs(&[]), "");
    }

    #[test]
    fn chi2_summary_names_file_and_dfs() {
        let rule = build_chi2_rule(&RuleConfig::default()).unwrap();
        let text = format_summary(&rule, Path::new("out/chi2.svg"));
        assert!(text.starts_with("Enhanced Chi-square distribution slide rule saved as out/chi2.svg"));
        assert!(text.contains("df1=7, df2=14, df3=28, df4=35"));
        assert!(text.contains("right-tail"));
        assert!(text.ends_with(&format!("5 scales, {} ticks", rule.tick_count())));
    }

    #[test]
    fn z_summary_has_no_dfs() {
        let rule = build_z_rule(&RuleConfig::default()).unwrap();
        assert!(scale_dfs(&rule).is_empty());
        let text = format_summary(&rule, Path::new("z.svg"));
        assert!(text.starts_with("High-detail slide rule saved as z.svg"));
        assert!(!text.contains("df1"));
    }
}
