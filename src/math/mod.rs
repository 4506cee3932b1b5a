//! Mathematical utilities: logit transform and axis warps.

pub mod logit;
pub mod warp;

pub use logit::*;
pub use warp::*;
