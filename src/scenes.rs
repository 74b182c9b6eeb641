// Ready-made scenes
//
// Each function builds a fresh `Scene`. They are the scenes used to
// demonstrate the rasterizer: shared and separated triangle edges (cracks
// and double coverage show up there first) and a quartic implicit curve
// (thin features that alias badly at 1 spp).

use crate::error::{Error, Result};
use crate::scene::{Color, Scene};
use crate::shapes::{ImplicitFunction, Point, Triangle};

/// Color of the second triangle in the two-triangle scenes
pub const SKY_BLUE: Color = Color::new(0.0, 0.6, 1.0);

/// Pivot used by [`implicit_polynomial_rotated`]
pub const ROTATION_CENTER: Point = Point::new(0.15, 0.5);

/// Angle used by the `implicit_poly_rot` catalog entry, in degrees
pub const DEFAULT_ROTATION_DEG: f64 = 30.0;

/// Names accepted by [`by_name`]
pub const NAMES: [&str; 4] = [
    "two_triangles_shared",
    "two_triangles_disconnected",
    "implicit_poly",
    "implicit_poly_rot",
];

// Vertices shared by both triangle scenes
const P0: Point = Point::new(0.8, 1.0); // bottom left
const P1: Point = Point::new(2.0, 3.0); // top of the shared edge
const P2: Point = Point::new(2.8, 1.0); // bottom of the shared edge
const P3: Point = Point::new(4.2, 3.1); // top right

/// Two triangles sharing the edge P1-P2
///
/// The red one is added first, so pixels on the shared edge come out red.
pub fn two_triangles_shared() -> Scene {
    Scene::builder("Two Triangles")
        .background(Color::WHITE)
        .add(Triangle::new(P0, P1, P2), Color::RED)
        .add(Triangle::new(P1, P3, P2), SKY_BLUE)
        .build()
}

/// Same two triangles with the blue one moved 1.0 to the right
pub fn two_triangles_disconnected() -> Scene {
    let gap = 1.0;
    let shift = |p: Point| Point::new(p.x + gap, p.y);

    Scene::builder("Two Triangles Disconnected (Simple)")
        .background(Color::WHITE)
        .add(Triangle::new(P0, P1, P2), Color::RED)
        .add(Triangle::new(shift(P1), shift(P3), shift(P2)), SKY_BLUE)
        .build()
}

/// The quartic whose non-positive region is drawn by the implicit scenes
pub fn quartic(p: Point) -> f64 {
    let Point { x, y } = p;
    0.004 + 0.110 * x - 0.177 * y - 0.174 * x.powi(2) + 0.224 * x * y - 0.303 * y.powi(2)
        - 0.168 * x.powi(3)
        + 0.327 * x.powi(2) * y
        - 0.087 * x * y.powi(2)
        - 0.013 * y.powi(3)
        + 0.235 * x.powi(4)
        - 0.667 * x.powi(3) * y
        + 0.745 * x.powi(2) * y.powi(2)
        - 0.029 * x * y.powi(3)
        + 0.072 * y.powi(4)
}

/// Rotate `p` by `angle` radians counter-clockwise around `center`
pub fn rotate_point(p: Point, center: Point, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    let x = p.x - center.x;
    let y = p.y - center.y;
    Point::new(x * c - y * s + center.x, x * s + y * c + center.y)
}

/// Black region { f(x, y) <= 0 } of the [`quartic`] on white
pub fn implicit_polynomial() -> Scene {
    Scene::builder("Implicit Polynomial Region")
        .background(Color::WHITE)
        .add(ImplicitFunction::new(quartic), Color::BLACK)
        .build()
}

/// The [`quartic`] region rotated by `angle_deg` around [`ROTATION_CENTER`]
///
/// Rotating a region means evaluating the unrotated field at the query point
/// rotated the OTHER way.
pub fn implicit_polynomial_rotated(angle_deg: f64) -> Scene {
    let angle = angle_deg.to_radians();
    let rotated = move |p: Point| quartic(rotate_point(p, ROTATION_CENTER, -angle));

    Scene::builder(format!("Implicit Rotated ({:.1} deg)", angle_deg))
        .background(Color::WHITE)
        .add(ImplicitFunction::new(rotated), Color::BLACK)
        .build()
}

/// Look up a scene by name (see [`NAMES`])
pub fn by_name(name: &str) -> Result<Scene> {
    match name.trim() {
        "two_triangles_shared" => Ok(two_triangles_shared()),
        "two_triangles_disconnected" => Ok(two_triangles_disconnected()),
        "implicit_poly" => Ok(implicit_polynomial()),
        "implicit_poly_rot" => Ok(implicit_polynomial_rotated(DEFAULT_ROTATION_DEG)),
        other => Err(Error::Configuration(format!(
            "unknown scene: {:?} (expected one of {})",
            other,
            NAMES.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_edge_goes_to_first_triangle() {
        let scene = two_triangles_shared();
        assert_eq!(scene.len(), 2);

        // Midpoint of the shared edge P1-P2 is inside both triangles
        let mid = Point::new(2.4, 2.0);
        assert_eq!(scene.shade(mid), Color::RED);

        assert_eq!(scene.shade(Point::new(1.5, 1.5)), Color::RED);
        assert_eq!(scene.shade(Point::new(3.5, 2.5)), SKY_BLUE);
        assert_eq!(scene.shade(Point::new(0.5, 0.5)), Color::WHITE);
    }

    #[test]
    fn test_disconnected_has_a_gap() {
        let scene = two_triangles_disconnected();
        // Just right of the red triangle's edge, left of the shifted blue one
        assert_eq!(scene.shade(Point::new(2.8, 2.0)), Color::WHITE);
        assert_eq!(scene.shade(Point::new(4.5, 2.5)), SKY_BLUE);
    }

    #[test]
    fn test_quartic_values() {
        assert_eq!(quartic(Point::new(0.0, 0.0)), 0.004);
        // Origin is just outside the region, a bit above it is inside
        let scene = implicit_polynomial();
        assert_eq!(scene.shade(Point::new(0.0, 0.0)), Color::WHITE);
        assert_eq!(scene.shade(Point::new(0.0, 0.2)), Color::BLACK);
    }

    #[test]
    fn test_rotate_point() {
        let p = rotate_point(Point::new(1.0, 0.0), Point::new(0.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);

        // Rotating about the point itself does nothing
        let c = ROTATION_CENTER;
        assert_eq!(rotate_point(c, c, 1.0), c);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        for &(x, y) in &[(0.0, 0.0), (0.3, 0.7), (-0.5, 0.2), (1.0, 1.0), (0.15, -0.4)] {
            let p = Point::new(x, y);
            let r = rotate_point(p, ROTATION_CENTER, 0.0);
            assert!((quartic(r) - quartic(p)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rotation_moves_the_region() {
        // A point q inside the rotated region maps back to a point inside the
        // unrotated region
        let angle = DEFAULT_ROTATION_DEG.to_radians();
        let rotated = implicit_polynomial_rotated(DEFAULT_ROTATION_DEG);
        let plain = implicit_polynomial();
        for &(x, y) in &[(0.2, 0.3), (-0.3, -0.1), (0.6, 0.9)] {
            let q = Point::new(x, y);
            let back = rotate_point(q, ROTATION_CENTER, -angle);
            assert_eq!(rotated.shade(q), plain.shade(back));
        }
    }

    #[test]
    fn test_by_name() {
        for name in NAMES {
            assert!(by_name(name).is_ok(), "{}", name);
        }
        assert_eq!(by_name("implicit_poly_rot").unwrap().name(), "Implicit Rotated (30.0 deg)");
        assert_eq!(
            by_name("two_triangles_disconnected").unwrap().name(),
            "Two Triangles Disconnected (Simple)"
        );
        assert!(matches!(by_name("mickey_scene"), Err(Error::Configuration(_))));
    }
}
