//! Input/output helpers.
//!
//! - rule configuration JSON read/write (`config`)
//! - tick table JSON export (`export`)

pub mod config;
pub mod export;

pub use config::*;
pub use export::*;
