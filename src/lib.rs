//! `statrule` library crate.
//!
//! Builds statistical slide rules as SVG: a logit-warped probability scale
//! aligned with chi-square or Student's t scales (one per degrees of freedom),
//! and a standard normal z scale on a piecewise linear/log warp.
//!
//! The binary (`statrule`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - rules can be built and inspected without drawing (`rule::build_*`)
//! - rendering is swappable (`plot` only consumes a [`domain::SlideRule`])

pub mod app;
pub mod cli;
pub mod dist;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod rule;
pub mod scale;

pub use app::pipeline::{generate_chi2_slide_rule, generate_t_slide_rule, generate_z_slide_rule};
pub use domain::{ProbabilityWindow, RuleConfig, SlideRule};
pub use error::AppError;
pub use rule::{build_chi2_rule, build_rule, build_t_rule, build_z_rule};
