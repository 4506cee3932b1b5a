//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - run configuration (`RuleConfig`, `ProbabilityWindow`, `Canvas`)
//! - tick and scale descriptors (`Tick`, `TickLabel`, `Scale`)
//! - the render-ready `SlideRule` with its decorations

pub mod types;

pub use types::*;
