// This file declares the shapes module and its submodules
//
// Each primitive lives in its own file; this module ties them together
// behind a single `Primitive` enum so the scene only needs one type.

use serde::{Deserialize, Serialize};

mod circle;
mod implicit;
mod triangle;

pub use circle::Circle;
pub use implicit::ImplicitFunction;
pub use triangle::Triangle;

/// A point in world space
///
/// `Copy` because it's just two floats - passing it by value is as cheap
/// as passing a reference.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point (no sqrt needed for containment)
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Lets scenes be written with tuple literals: `Point::from((0.8, 1.0))`
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A geometric test object that can say whether a point is inside it
///
/// This enum is closed: every primitive the rasterizer understands is listed
/// here, and `contains` matches over all of them. The compiler checks that
/// a new variant is handled everywhere.
#[derive(Clone, Debug)]
pub enum Primitive {
    Circle(Circle),
    Triangle(Triangle),
    Implicit(ImplicitFunction),
}

impl Primitive {
    /// Is `point` inside this primitive? (boundaries count as inside)
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Primitive::Circle(c) => c.contains(point),
            Primitive::Triangle(t) => t.contains(point),
            Primitive::Implicit(f) => f.contains(point),
        }
    }

    /// Short name of the variant, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Circle(_) => "circle",
            Primitive::Triangle(_) => "triangle",
            Primitive::Implicit(_) => "implicit_function",
        }
    }
}

impl From<Circle> for Primitive {
    fn from(c: Circle) -> Self {
        Primitive::Circle(c)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<ImplicitFunction> for Primitive {
    fn from(f: ImplicitFunction) -> Self {
        Primitive::Implicit(f)
    }
}
