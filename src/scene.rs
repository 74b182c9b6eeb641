// Colors and scenes: what the rasterizer samples
use std::ops::{AddAssign, Div, Mul};

use serde::{Deserialize, Serialize};

use crate::shapes::{Point, Primitive};

/// An RGB color with real-valued channels, conventionally in [0, 1]
///
/// Values outside [0, 1] are allowed - nothing here clamps. The image sink
/// decides what to do with them.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

// **Rust Concept: Operator overloading**
// Implementing these std::ops traits lets the filter code write
// `acc += color * w` and `acc / wsum` just like with plain numbers.

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, w: f64) -> Color {
        Color::new(self.r * w, self.g * w, self.b * w)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, w: f64) -> Color {
        Color::new(self.r / w, self.g / w, self.b / w)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Color) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

/// A background color plus an ordered list of colored primitives
///
/// Order matters: when primitives overlap, the one added FIRST wins.
/// (This is the opposite of painter's order - nothing gets drawn "on top",
/// we just ask each primitive in turn whether it owns the point.)
///
/// There are no `&mut self` methods. Once `SceneBuilder::build` hands out a
/// `Scene`, its primitive list can't change, so a render always sees the
/// same scene from the first pixel to the last.
#[derive(Clone, Debug)]
pub struct Scene {
    name: String,
    background: Color,
    items: Vec<(Primitive, Color)>,
}

impl Scene {
    /// Start building a scene (white background, no primitives)
    pub fn builder(name: impl Into<String>) -> SceneBuilder {
        SceneBuilder {
            name: name.into(),
            background: Color::WHITE,
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Iterate over (primitive, color) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(Primitive, Color)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Color of the scene at `point`
    ///
    /// Linear scan in insertion order: the first primitive containing the
    /// point decides the color, otherwise it's the background.
    pub fn shade(&self, point: Point) -> Color {
        self.items
            .iter()
            .find(|(primitive, _)| primitive.contains(point))
            .map(|&(_, color)| color)
            .unwrap_or(self.background)
    }
}

/// Free-function form of [`Scene::shade`]
pub fn shade(scene: &Scene, point: Point) -> Color {
    scene.shade(point)
}

/// Collects primitives and produces a read-only [`Scene`]
///
/// **Rust Concept: Consuming builders**
/// Every method takes `self` by value and returns it, so calls chain:
/// `Scene::builder("x").background(c).add(p, c).build()`.
/// `build()` consumes the builder, so it can't be reused to mutate the scene.
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    name: String,
    background: Color,
    items: Vec<(Primitive, Color)>,
}

impl SceneBuilder {
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Append a primitive; it loses to every primitive added before it
    pub fn add(mut self, primitive: impl Into<Primitive>, color: Color) -> Self {
        self.items.push((primitive.into(), color));
        self
    }

    pub fn build(self) -> Scene {
        Scene {
            name: self.name,
            background: self.background,
            items: self.items,
        }
    }
}
