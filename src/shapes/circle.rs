// Import serialization traits - these allow converting our Circle to/from JSON
use serde::{Deserialize, Serialize};

use super::Point;

/// A filled circle in world space
///
/// The `#[derive(...)]` macro automatically generates implementations for common traits:
/// - Clone: Allows creating copies with .clone()
/// - Debug: Allows printing with {:?} for debugging
/// - Serialize/Deserialize: Allows converting to/from JSON
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point of the circle
    pub center: Point,

    /// Radius in world units
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Inside iff the squared distance to the center is at most radius²
    ///
    /// Comparing squared values avoids a sqrt and keeps the test exact
    /// up to IEEE rounding. The boundary counts as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}
