//! Build-then-render pipeline shared by the CLI and library callers.
//!
//! Each `generate_*` call validates the configuration, assembles the rule,
//! writes the SVG and returns the assembled rule so callers can inspect or
//! export its ticks.

use std::path::Path;

use tracing::info;

use crate::domain::{RuleConfig, RuleKind, SlideRule};
use crate::error::AppError;

/// Build and save the chi-square rule.
pub fn generate_chi2_slide_rule(config: &RuleConfig, output: &Path) -> Result<SlideRule, AppError> {
    generate_slide_rule(RuleKind::Chi2, config, output)
}

/// Build and save the t-distribution rule.
pub fn generate_t_slide_rule(config: &RuleConfig, output: &Path) -> Result<SlideRule, AppError> {
    generate_slide_rule(RuleKind::T, config, output)
}

/// Build and save the Z rule. `config.dfs` is ignored.
pub fn generate_z_slide_rule(config: &RuleConfig, output: &Path) -> Result<SlideRule, AppError> {
    generate_slide_rule(RuleKind::Z, config, output)
}

pub fn generate_slide_rule(kind: RuleKind, config: &RuleConfig, output: &Path) -> Result<SlideRule, AppError> {
    let rule = crate::rule::build_rule(kind, config)?;
    crate::plot::render_to_file(&rule, output)?;
    info!(
        kind = kind.display_name(),
        path = %output.display(),
        scales = rule.scales.len(),
        ticks = rule.tick_count(),
        "slide rule written"
    );
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_generator_writes_its_svg() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = RuleConfig::default();

        let cases: [(fn(&RuleConfig, &Path) -> Result<SlideRule, AppError>, RuleKind, &str); 3] = [
            (generate_chi2_slide_rule, RuleKind::Chi2, "Enhanced Chi-Square Distribution Slide Rule"),
            (generate_t_slide_rule, RuleKind::T, "Enhanced T-Distribution Slide Rule"),
            (generate_z_slide_rule, RuleKind::Z, "High-Detail Statistical Slide Rule"),
        ];
        for (generate, kind, title) in cases {
            let path = dir.path().join(kind.default_output());
            let rule = generate(&config, &path).unwrap();
            assert_eq!(rule.kind, kind);
            let svg = std::fs::read_to_string(&path).unwrap();
            assert!(svg.contains(title), "{title} missing from {}", path.display());
        }
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.svg");
        let config = RuleConfig {
            dfs: vec![0.0],
            ..RuleConfig::default()
        };
        let err = generate_t_slide_rule(&config, &path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_output_is_render_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("z.svg");
        let err = generate_z_slide_rule(&RuleConfig::default(), &path).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
