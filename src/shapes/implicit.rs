use std::fmt;
use std::sync::Arc;

use super::Point;

/// Signature of the scalar field wrapped by `ImplicitFunction`
///
/// **Rust Concept: Trait objects behind Arc**
/// - `dyn Fn(Point) -> f64` is "any closure taking a point and returning a float"
/// - `Send + Sync` lets the field be shared across rayon worker threads
/// - `Arc` makes cloning the primitive cheap (the closure itself isn't copied)
pub type ScalarField = dyn Fn(Point) -> f64 + Send + Sync;

/// Region where a scalar field is non-positive: { p | f(p) <= 0 }
#[derive(Clone)]
pub struct ImplicitFunction {
    field: Arc<ScalarField>,
}

impl ImplicitFunction {
    pub fn new<F>(field: F) -> Self
    where
        F: Fn(Point) -> f64 + Send + Sync + 'static,
    {
        Self {
            field: Arc::new(field),
        }
    }

    /// Evaluate the wrapped field at `point`
    pub fn eval(&self, point: Point) -> f64 {
        (self.field)(point)
    }

    /// Inside iff f(point) <= 0. A NaN result compares false, so it's outside.
    pub fn contains(&self, point: Point) -> bool {
        self.eval(point) <= 0.0
    }
}

// Closures don't implement Debug, so we can't derive it
impl fmt::Debug for ImplicitFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplicitFunction").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_plane() {
        let below_diagonal = ImplicitFunction::new(|p: Point| p.y - p.x);
        assert!(below_diagonal.contains(Point::new(2.0, 1.0)));
        assert!(below_diagonal.contains(Point::new(1.0, 1.0))); // f == 0
        assert!(!below_diagonal.contains(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_captured_state() {
        let radius = 2.0;
        let disc = ImplicitFunction::new(move |p: Point| p.x * p.x + p.y * p.y - radius * radius);
        assert_eq!(disc.eval(Point::new(0.0, 0.0)), -4.0);
        assert!(disc.contains(Point::new(0.0, 2.0)));
        assert!(!disc.contains(Point::new(1.5, 1.5)));
    }

    #[test]
    fn test_nan_is_outside() {
        let broken = ImplicitFunction::new(|_| f64::NAN);
        assert!(!broken.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_clone_shares_field() {
        let f = ImplicitFunction::new(|p: Point| p.x);
        let g = f.clone();
        assert_eq!(f.eval(Point::new(3.0, 0.0)), g.eval(Point::new(3.0, 0.0)));
        assert!(format!("{:?}", g).starts_with("ImplicitFunction"));
    }
}
