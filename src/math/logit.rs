//! Logit and its inverse.
//!
//! `logit(p) = ln(p / (1 - p))` stretches probabilities near 0 and 1, which is
//! exactly where hypothesis-testing tables need resolution.

/// Log-odds of `p`. Infinite at 0 and 1, NaN outside `[0, 1]`.
pub fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// Inverse logit (logistic function).
///
/// Split on the sign of `x` so `exp` never overflows.
pub fn inv_logit(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
