// SPDX-License-Identifier: MIT OR Apache-2.0
//! Orthogonal wire routing.
//!
//! Every wire is drawn as three axis-aligned segments: vertical out of the
//! source point down (or up) to the bend height, horizontal across to the
//! target column, then vertical into the target point. Paths are pure values
//! recomputed from the model on demand.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A three-segment orthogonal polyline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WirePath {
    /// Polyline vertices from source to target
    pub vertices: [Point; 4],
    /// Position of the bend handle (on the horizontal segment's line)
    pub handle: Point,
}

impl WirePath {
    /// Route from `from` to `to`, crossing horizontally at `bend.y`
    pub fn orthogonal(from: Point, to: Point, bend: Point) -> Self {
        Self {
            vertices: [
                from,
                Point::new(from.x, bend.y),
                Point::new(to.x, bend.y),
                to,
            ],
            handle: bend,
        }
    }

    /// Preview of a wire being drawn from `from` towards the live `pointer`.
    ///
    /// The horizontal segment sits halfway between the source and the pointer.
    pub fn preview(from: Point, pointer: Point) -> Self {
        Self::orthogonal(from, pointer, from.midpoint(pointer))
    }

    /// Source end of the path
    pub fn start(&self) -> Point {
        self.vertices[0]
    }

    /// Target end of the path
    pub fn end(&self) -> Point {
        self.vertices[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_axis_aligned(path: &WirePath) -> bool {
        path.vertices.windows(2).all(|w| w[0].x == w[1].x || w[0].y == w[1].y)
    }

    #[test]
    fn test_orthogonal_path() {
        let path = WirePath::orthogonal(
            Point::new(60.0, 80.0),
            Point::new(260.0, 0.0),
            Point::new(160.0, 40.0),
        );
        assert_eq!(
            path.vertices,
            [
                Point::new(60.0, 80.0),
                Point::new(60.0, 40.0),
                Point::new(260.0, 40.0),
                Point::new(260.0, 0.0),
            ]
        );
        assert!(is_axis_aligned(&path));
    }

    #[test]
    fn test_bend_x_only_moves_handle() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(100.0, 100.0);
        let a = WirePath::orthogonal(from, to, Point::new(10.0, 70.0));
        let b = WirePath::orthogonal(from, to, Point::new(90.0, 70.0));
        assert_eq!(a.vertices, b.vertices);
        assert_ne!(a.handle, b.handle);
    }

    #[test]
    fn test_preview_follows_pointer() {
        let path = WirePath::preview(Point::new(110.0, 130.0), Point::new(300.0, 330.0));
        assert_eq!(path.start(), Point::new(110.0, 130.0));
        assert_eq!(path.end(), Point::new(300.0, 330.0));
        assert_eq!(path.vertices[1], Point::new(110.0, 230.0));
        assert_eq!(path.vertices[2], Point::new(300.0, 230.0));
        assert!(is_axis_aligned(&path));
    }
}
