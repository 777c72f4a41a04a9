// SPDX-License-Identifier: MIT OR Apache-2.0
//! Canvas geometry primitives.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate (grows downwards)
    pub y: f32,
}

impl Point {
    /// Origin of the canvas
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a canvas or of a box on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Horizontal size
    pub width: f32,
    /// Vertical size
    pub height: f32,
}

impl Extent {
    /// Create a new extent
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether both sides are strictly positive and finite
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Top-left position that centers a box of size `inner` inside this extent
    pub fn centered(&self, inner: Extent) -> Point {
        Point::new(
            (self.width - inner.width) / 2.0,
            (self.height - inner.height) / 2.0,
        )
    }

    /// Clamp the top-left `position` of a box of size `inner` so the box stays inside this extent.
    ///
    /// When the box is larger than the extent along an axis, that coordinate pins to 0.
    pub fn clamp_box(&self, position: Point, inner: Extent) -> Point {
        Point::new(
            position.x.min(self.width - inner.width).max(0.0),
            position.y.min(self.height - inner.height).max(0.0),
        )
    }
}
