//! Read/write rule configuration JSON files.
//!
//! The file is a serialized [`RuleConfig`]; every field is optional and falls
//! back to the built-in default, so `{"dfs": [5, 10]}` is a complete file.

use std::fs::File;
use std::path::Path;

use crate::domain::RuleConfig;
use crate::error::AppError;

/// Read a rule configuration file.
pub fn read_config_json(path: &Path) -> Result<RuleConfig, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open config JSON '{}': {e}", path.display())))?;
    let config: RuleConfig =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid config JSON: {e}")))?;
    Ok(config)
}

/// Write a rule configuration file (handy as a starting template).
pub fn write_config_json(path: &Path, config: &RuleConfig) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create config JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, config)
        .map_err(|e| AppError::new(2, format!("Failed to write config JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rule.json");
        std::fs::write(&path, r#"{ "dfs": [5, 10], "window": { "display_min": 0.01 } }"#).unwrap();

        let config = read_config_json(&path).unwrap();
        assert_eq!(config.dfs, vec![5.0, 10.0]);
        assert_eq!(config.width, 1800);
        assert_eq!(config.window.display_min, 0.01);
        assert_eq!(config.window.display_max, 0.999);
    }

    #[test]
    fn config_survives_write_then_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rule.json");
        let config = RuleConfig {
            width: 1200,
            height: Some(700),
            ..RuleConfig::default()
        };
        write_config_json(&path, &config).unwrap();
        assert_eq!(read_config_json(&path).unwrap(), config);
    }

    #[test]
    fn missing_or_malformed_file_is_input_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = read_config_json(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(missing.exit_code(), 2);

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let bad = read_config_json(&path).unwrap_err();
        assert_eq!(bad.exit_code(), 2);
        assert!(bad.message().contains("Invalid config JSON"));
    }
}
