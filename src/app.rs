//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs the stderr log subscriber
//! - merges the config file with command-line overrides
//! - builds and writes the requested rule
//! - prints the summary and writes optional exports

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, debug};

use crate::cli::{Cli, Command, DfRuleArgs, RuleArgs};
use crate::domain::{RuleConfig, RuleKind};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `statrule` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Chi2(args) => handle_rule(RuleKind::Chi2, rule_config_from_df_args(&args)?, &args.rule),
        Command::T(args) => handle_rule(RuleKind::T, rule_config_from_df_args(&args)?, &args.rule),
        Command::Z(args) => handle_rule(RuleKind::Z, rule_config_from_args(&args)?, &args),
    }
}

fn handle_rule(kind: RuleKind, config: RuleConfig, args: &RuleArgs) -> Result<(), AppError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(kind.default_output()));
    debug!(?config, "resolved rule configuration");

    let rule = pipeline::generate_slide_rule(kind, &config, &output)?;
    println!("{}", crate::report::format_summary(&rule, &output));

    if let Some(path) = &args.save_config {
        crate::io::config::write_config_json(path, &config)?;
        println!("Configuration written to {}", path.display());
    }
    if let Some(path) = &args.export_ticks {
        crate::io::export::write_ticks_json(path, &rule)?;
        println!("Tick table written to {}", path.display());
    }
    Ok(())
}

/// Defaults, then the config file, then explicit command-line options.
pub fn rule_config_from_args(args: &RuleArgs) -> Result<RuleConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => crate::io::config::read_config_json(path)?,
        None => RuleConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if args.height.is_some() {
        config.height = args.height;
    }
    if let Some(margin) = args.margin {
        config.margin = margin;
    }
    Ok(config)
}

pub fn rule_config_from_df_args(args: &DfRuleArgs) -> Result<RuleConfig, AppError> {
    let mut config = rule_config_from_args(&args.rule)?;
    if !args.dfs.is_empty() {
        config.dfs = args.dfs.clone();
    }
    if let Some(p) = args.p_min {
        config.window.display_min = p;
    }
    if let Some(p) = args.p_max {
        config.window.display_max = p;
    }
    Ok(config)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // A subscriber may already be installed when embedded (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
