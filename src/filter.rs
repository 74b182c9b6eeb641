// Reconstruction filter kernels for anti-aliasing
//
// A filter answers two questions:
// - how far from the pixel center should we sample? (support)
// - how much does a sample at offset (dx, dy) count? (weight)
// Offsets are in pixel units, measured from the pixel center.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Standard deviation of the gaussian kernel, in pixels
pub const GAUSSIAN_SIGMA: f64 = 0.5;

/// The available filter kernels
///
/// Serialized by lowercase name, so config files can say `"filter": "hat"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Constant weight - a plain average of the samples
    #[default]
    Box,
    /// Tent filter, separable in x and y
    Hat,
    /// Gaussian with sigma = 0.5 px
    Gaussian,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::Box, Filter::Hat, Filter::Gaussian];

    /// Weight of a sample at pixel offset (dx, dy); never negative
    ///
    /// The box filter doesn't check the support itself - the sampler only
    /// ever asks about offsets inside the support square. Likewise the
    /// gaussian is never cut off here; its tail beyond the sampler's grid is
    /// simply not sampled.
    pub fn weight(self, dx: f64, dy: f64) -> f64 {
        match self {
            Filter::Box => 1.0,
            Filter::Hat => {
                let wx = (1.0 - dx.abs()).max(0.0);
                let wy = (1.0 - dy.abs()).max(0.0);
                wx * wy
            }
            Filter::Gaussian => {
                let r2 = dx * dx + dy * dy;
                (-r2 / (2.0 * GAUSSIAN_SIGMA * GAUSSIAN_SIGMA)).exp()
            }
        }
    }

    /// Half-width of the square the sampler spreads samples over, in pixels
    pub fn support(self) -> f64 {
        match self {
            Filter::Box => 0.5,
            Filter::Hat => 1.0,
            Filter::Gaussian => 2.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Filter::Box => "box",
            Filter::Hat => "hat",
            Filter::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a filter from its name
///
/// **Rust Concept: FromStr**
/// Implementing `FromStr` enables `"hat".parse::<Filter>()`.
/// Case and surrounding whitespace are ignored.
impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "box" => Ok(Filter::Box),
            "hat" => Ok(Filter::Hat),
            "gaussian" => Ok(Filter::Gaussian),
            _ => Err(Error::Configuration(format!(
                "unknown filter: {:?} (expected box, hat or gaussian)",
                s
            ))),
        }
    }
}

/// Kernel weight looked up by filter name
pub fn kernel_weight(filter_name: &str, dx: f64, dy: f64) -> Result<f64> {
    Ok(filter_name.parse::<Filter>()?.weight(dx, dy))
}

/// Support radius looked up by filter name
pub fn filter_support(filter_name: &str) -> Result<f64> {
    Ok(filter_name.parse::<Filter>()?.support())
}
