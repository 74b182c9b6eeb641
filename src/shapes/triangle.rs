use serde::{Deserialize, Serialize};

use super::Point;

/// Below this |signed double-area| the triangle is treated as degenerate
pub const DEGENERATE_AREA_EPS: f64 = 1e-18;

/// Edge values within this distance of zero count as "on the edge"
pub const EDGE_EPS: f64 = 1e-12;

/// Axis-aligned bounding box, used to reject points cheaply
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Closed-interval test, so points on the box border are never rejected
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// A filled triangle in world space
///
/// The bounding box and the signed double-area are computed once in `new`
/// and reused by every `contains` call - the rasterizer calls `contains`
/// millions of times, so anything that only depends on the vertices is
/// worth caching.
///
/// Fields are private: changing a vertex would leave the cached values stale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    vertices: [Point; 3],
    bbox: BoundingBox,
    area2: f64,
}

/// Z component of the 2D cross product (b - a) x (p - a)
///
/// The sign tells which side of the directed edge a→b the point `p` is on;
/// zero means `p` lies on the line through a and b.
pub fn edge(a: Point, b: Point, p: Point) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

impl Triangle {
    pub fn new(v1: Point, v2: Point, v3: Point) -> Self {
        let bbox = BoundingBox {
            min_x: v1.x.min(v2.x).min(v3.x),
            max_x: v1.x.max(v2.x).max(v3.x),
            min_y: v1.y.min(v2.y).min(v3.y),
            max_y: v1.y.max(v2.y).max(v3.y),
        };

        Self {
            vertices: [v1, v2, v3],
            bbox,
            area2: edge(v1, v2, v3),
        }
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Twice the signed area; the sign depends on the winding order
    pub fn signed_area2(&self) -> f64 {
        self.area2
    }

    /// A (near) zero-area triangle contains nothing
    pub fn is_degenerate(&self) -> bool {
        self.area2.abs() < DEGENERATE_AREA_EPS
    }

    /// Edge-function containment test
    ///
    /// A point is inside when the three edge values don't disagree in sign.
    /// Checking for "mixed signs" instead of "all positive" makes the test
    /// work for both clockwise and counter-clockwise vertex order. Values
    /// within `EDGE_EPS` of zero are neutral, so points on an edge are inside.
    pub fn contains(&self, point: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }

        if !self.bbox.contains(point) {
            return false;
        }

        let [v1, v2, v3] = self.vertices;
        let e1 = edge(v1, v2, point);
        let e2 = edge(v2, v3, point);
        let e3 = edge(v3, v1, point);

        let has_neg = e1 < -EDGE_EPS || e2 < -EDGE_EPS || e3 < -EDGE_EPS;
        let has_pos = e1 > EDGE_EPS || e2 > EDGE_EPS || e3 > EDGE_EPS;

        !(has_neg && has_pos)
    }
}
