//! Export the tick table of a rule to JSON.
//!
//! One entry per scale with its kind, title and every tick (value, probability,
//! x position, tier, label). Useful for checking a printed rule against tables
//! or for driving another renderer.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::domain::{Canvas, RuleKind, Scale, SlideRule};
use crate::error::AppError;

/// Schema of the tick export file.
#[derive(Debug, Serialize)]
pub struct TickExport<'a> {
    pub tool: &'static str,
    pub kind: RuleKind,
    pub canvas: Canvas,
    pub scales: &'a [Scale],
}

impl<'a> TickExport<'a> {
    pub fn from_rule(rule: &'a SlideRule) -> Self {
        Self {
            tool: "statrule",
            kind: rule.kind,
            canvas: rule.canvas,
            scales: &rule.scales,
        }
    }
}

/// Write the tick table of `rule` to a JSON file.
pub fn write_ticks_json(path: &Path, rule: &SlideRule) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create tick export '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, &TickExport::from_rule(rule))
        .map_err(|e| AppError::new(2, format!("Failed to write tick export: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RuleConfig;
    use crate::rule::build_t_rule;

    #[test]
    fn export_lists_every_scale_and_tick() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ticks.json");
        let config = RuleConfig {
            dfs: vec![7.0, 28.0],
            ..RuleConfig::default()
        };
        let rule = build_t_rule(&config).unwrap();
        write_ticks_json(&path, &rule).unwrap();

        let json: serde_json::Value = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(json["tool"], "statrule");
        assert_eq!(json["kind"], "t");
        let scales = json["scales"].as_array().unwrap();
        assert_eq!(scales.len(), 3);
        assert_eq!(scales[0]["kind"]["kind"], "probability");
        assert_eq!(scales[2]["kind"]["df"], 28.0);

        let exported: usize = scales.iter().map(|s| s["ticks"].as_array().unwrap().len()).sum();
        assert_eq!(exported, rule.tick_count());
    }

    #[test]
    fn unwritable_path_is_input_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("ticks.json");
        let rule = build_t_rule(&RuleConfig::default()).unwrap();
        let err = write_ticks_json(&path, &rule).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
