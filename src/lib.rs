// Library root for the point-sampling rasterizer
//
// Modules, leaf-first:
// - shapes: primitives that answer "is this point inside?"
// - scene: colors and the ordered (primitive, color) list
// - filter: reconstruction kernels (box, hat, gaussian)
// - raster: turns a scene into an image buffer
// - scenes: ready-made demo scenes

pub mod error;
pub mod filter;
pub mod raster;
pub mod scene;
pub mod scenes;
pub mod shapes;

// Re-export commonly used types at the library root for convenience
// This allows users to write:
//   use point_raster::Scene;
// instead of:
//   use point_raster::scene::Scene;
pub use error::{Error, Result};
pub use filter::{filter_support, kernel_weight, Filter};
pub use raster::{
    render, render_parallel, render_with_progress, Image, RenderSettings, Resolution, Window,
};
pub use scene::{shade, Color, Scene, SceneBuilder};
pub use shapes::{Circle, ImplicitFunction, Point, Primitive, Triangle};
