//! Distributions behind the statistic scales.
//!
//! The numerical work (CDF and inverse CDF) is delegated to `statrs`; this
//! module only adds the pieces the slide rules need on top:
//!
//! - validated construction from a degrees-of-freedom value
//! - tail orientation (`Left`: `P(X <= x)`, `Right`: `P(X > x)`)
//! - an inverse CDF that refuses probabilities outside `(0, 1)` instead of
//!   panicking, and reports non-finite results as `None`

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

use crate::error::AppError;

/// Which tail a probability scale reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub enum Distribution {
    StandardNormal(Normal),
    StudentT { df: f64, inner: StudentsT },
    ChiSquare { df: f64, inner: ChiSquared },
}

fn check_df(df: f64) -> Result<(), AppError> {
    if df.is_finite() && df > 0.0 {
        Ok(())
    } else {
        Err(AppError::input(format!(
            "Invalid degrees of freedom {df} (must be finite and > 0)."
        )))
    }
}

impl Distribution {
    pub fn standard_normal() -> Result<Self, AppError> {
        let inner = Normal::new(0.0, 1.0)
            .map_err(|e| AppError::input(format!("Normal distribution error: {e}")))?;
        Ok(Distribution::StandardNormal(inner))
    }

    pub fn student_t(df: f64) -> Result<Self, AppError> {
        check_df(df)?;
        let inner = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| AppError::input(format!("t distribution error (df={df}): {e}")))?;
        Ok(Distribution::StudentT { df, inner })
    }

    pub fn chi_square(df: f64) -> Result<Self, AppError> {
        check_df(df)?;
        let inner = ChiSquared::new(df)
            .map_err(|e| AppError::input(format!("Chi-square distribution error (df={df}): {e}")))?;
        Ok(Distribution::ChiSquare { df, inner })
    }

    /// Degrees of freedom, if the distribution has any.
    pub fn df(&self) -> Option<f64> {
        match self {
            Distribution::StandardNormal(_) => None,
            Distribution::StudentT { df, .. } | Distribution::ChiSquare { df, .. } => Some(*df),
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Distribution::StandardNormal(d) => d.cdf(x),
            Distribution::StudentT { inner, .. } => inner.cdf(x),
            Distribution::ChiSquare { inner, .. } => inner.cdf(x),
        }
    }

    /// Quantile function. `None` when `p` is outside `(0, 1)` or the result is not finite.
    pub fn inverse_cdf(&self, p: f64) -> Option<f64> {
        if !(p.is_finite() && p > 0.0 && p < 1.0) {
            return None;
        }
        let x = match self {
            Distribution::StandardNormal(d) => d.inverse_cdf(p),
            Distribution::StudentT { inner, .. } => inner.inverse_cdf(p),
            Distribution::ChiSquare { inner, .. } => inner.inverse_cdf(p),
        };
        x.is_finite().then_some(x)
    }

    /// Probability of statistic `x` read from the given tail.
    pub fn probability(&self, x: f64, tail: Tail) -> f64 {
        match tail {
            Tail::Left => self.cdf(x),
            Tail::Right => 1.0 - self.cdf(x),
        }
    }

    /// Statistic whose `tail` probability equals `p`.
    pub fn statistic(&self, p: f64, tail: Tail) -> Option<f64> {
        match tail {
            Tail::Left => self.inverse_cdf(p),
            Tail::Right => self.inverse_cdf(1.0 - p),
        }
    }
}
