//! Command-line parsing for the statistical slide rule generator.
//!
//! Argument parsing and command dispatch stay separate from the scale and
//! rendering code; `app` turns these structs into a [`RuleConfig`].
//!
//! [`RuleConfig`]: crate::domain::RuleConfig

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "statrule", version, about = "Statistical slide rule generator (SVG)")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Right-tail probability scale against chi-square scales.
    Chi2(DfRuleArgs),
    /// Probability scale against Student's t scales.
    T(DfRuleArgs),
    /// Standard normal z scale against cumulative probability.
    Z(RuleArgs),
}

/// Options shared by every rule.
#[derive(Debug, Args, Clone)]
pub struct RuleArgs {
    /// Output SVG path (defaults to `<kind>_slide_rule.svg`).
    #[arg(short = 'o', long, value_name = "SVG")]
    pub output: Option<PathBuf>,

    /// Rule configuration JSON; command-line options override its fields.
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Also write the tick table as JSON.
    #[arg(long = "export-ticks", value_name = "JSON")]
    pub export_ticks: Option<PathBuf>,

    /// Save the resolved configuration as JSON (reusable with `--config`).
    #[arg(long = "save-config", value_name = "JSON")]
    pub save_config: Option<PathBuf>,

    /// Canvas width (pixels).
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height (pixels). Sized from the number of scales when omitted.
    #[arg(long)]
    pub height: Option<u32>,

    /// Left/right margin (pixels).
    #[arg(long)]
    pub margin: Option<f64>,
}

/// Options for rules with one scale per degrees of freedom.
#[derive(Debug, Args, Clone)]
pub struct DfRuleArgs {
    /// Degrees of freedom, comma separated (default 7,14,28,35).
    #[arg(long = "df", value_delimiter = ',', num_args = 1..)]
    pub dfs: Vec<f64>,

    /// Lowest probability shown on the rule (not below the logit clamp, 0.0005 by default).
    #[arg(long)]
    pub p_min: Option<f64>,

    /// Highest probability shown on the rule (not above the logit clamp, 0.9995 by default).
    #[arg(long)]
    pub p_max: Option<f64>,

    #[command(flatten)]
    pub rule: RuleArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_dfs() {
        let cli = Cli::parse_from(["statrule", "chi2", "--df", "5,10,20", "-o", "x.svg"]);
        let Command::Chi2(args) = cli.command else {
            panic!("expected chi2");
        };
        assert_eq!(args.dfs, vec![5.0, 10.0, 20.0]);
        assert_eq!(args.rule.output, Some(PathBuf::from("x.svg")));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbosity_counts_and_defaults_are_empty() {
        let cli = Cli::parse_from(["statrule", "-vv", "t"]);
        assert_eq!(cli.verbose, 2);
        let Command::T(args) = cli.command else {
            panic!("expected t");
        };
        assert!(args.dfs.is_empty());
        assert!(args.rule.output.is_none());
        assert!(args.p_min.is_none());
    }

    #[test]
    fn save_config_is_shared_by_all_rules() {
        let cli = Cli::parse_from(["statrule", "z", "--save-config", "rule.json"]);
        let Command::Z(args) = cli.command else {
            panic!("expected z");
        };
        assert_eq!(args.save_config, Some(PathBuf::from("rule.json")));
    }

    #[test]
    fn z_takes_no_dfs() {
        assert!(Cli::try_parse_from(["statrule", "z", "--df", "3"]).is_err());
        assert!(Cli::try_parse_from(["statrule", "z", "--width", "1200"]).is_ok());
    }
}
