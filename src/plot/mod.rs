//! Rendering of assembled slide rules.

pub mod svg;

pub use svg::{render_to_file, render_to_string};
