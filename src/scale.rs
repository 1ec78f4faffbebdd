//! Axis scale selection for magnitude charts
//!
//! Allocation quantities span zero to very large in one series, so a
//! plain log axis cannot plot the zeros and a linear axis collapses
//! the small buckets. The dashboard offers two modes: `linear` (raw
//! values) and `log`, a symmetric-log transform whose linear window
//! adapts to the smallest non-zero magnitude of the current dataset.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// User-facing scale selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    Linear,
    Log,
}

impl ScaleMode {
    /// Parse a mode string; anything unrecognized is `None`
    ///
    /// A selector mid-transition between UI states is "no scale
    /// selected yet", not an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "linear" => Some(ScaleMode::Linear),
            "log" => Some(ScaleMode::Log),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleMode::Linear => write!(f, "linear"),
            ScaleMode::Log => write!(f, "log"),
        }
    }
}

/// Resolved axis transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scale {
    /// Plot raw values; no transform
    Linear,
    /// Identity within `[-threshold, +threshold]`, logarithmic beyond
    SymLog { threshold: f64 },
}

impl Scale {
    /// Symmetric-log scale with the given linear threshold
    ///
    /// A zero, negative, or non-finite threshold (an all-zero dataset
    /// has no positive magnitude) is normalized to `1.0`.
    pub fn sym_log(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() && threshold > 0.0 {
            threshold
        } else {
            1.0
        };
        Scale::SymLog { threshold }
    }

    /// Apply the transform to a data value
    ///
    /// Strictly increasing and odd. The symmetric-log branch is the
    /// identity for `|x| <= threshold` and
    /// `sign(x) * t * (1 + ln(|x| / t))` beyond it, continuous and
    /// differentiable at the boundary.
    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            Scale::Linear => x,
            Scale::SymLog { threshold } => {
                if x.abs() <= threshold {
                    x
                } else {
                    x.signum() * threshold * (1.0 + (x.abs() / threshold).ln())
                }
            }
        }
    }

    /// Map a transformed value back to the data domain
    pub fn invert(&self, y: f64) -> f64 {
        match *self {
            Scale::Linear => y,
            Scale::SymLog { threshold } => {
                if y.abs() <= threshold {
                    y
                } else {
                    y.signum() * threshold * (y.abs() / threshold - 1.0).exp()
                }
            }
        }
    }

    /// Whether this scale leaves values untouched
    pub fn is_identity(&self) -> bool {
        matches!(self, Scale::Linear)
    }
}

/// Resolve a mode string and magnitude hint to the transform an axis
/// should apply
///
/// `min_positive_magnitude` is the smallest non-zero magnitude of the
/// current dataset; it becomes the symmetric-log linear window so
/// near-zero and very large values share one readable axis. An
/// unrecognized mode yields `None` rather than an error.
pub fn resolve_scale(mode: &str, min_positive_magnitude: f64) -> Option<Scale> {
    let scale = match ScaleMode::parse(mode)? {
        ScaleMode::Linear => Scale::Linear,
        ScaleMode::Log => Scale::sym_log(min_positive_magnitude),
    };
    debug!(mode, ?scale, "resolved axis scale");
    Some(scale)
}

/// Smallest non-zero finite magnitude of a series
///
/// `None` when the series has no usable magnitude (empty, all zero,
/// or all non-finite).
pub fn min_positive_magnitude<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .map(f64::abs)
        .filter(|m| m.is_finite() && *m > 0.0)
        .reduce(f64::min)
}
