// SPDX-License-Identifier: MIT OR Apache-2.0
//! Component definitions for the circuit graph.

use crate::connection_point::{ConnectionPoint, Side};
use crate::geometry::{Extent, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub Uuid);

impl ComponentId {
    /// Create a new random component ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component-{}", self.0)
    }
}

/// A rectangular component placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique instance ID
    pub id: ComponentId,
    /// Top-left corner on the canvas
    pub position: Point,
    /// Box width, always positive
    pub width: f32,
    /// Box height, always positive
    pub height: f32,
    /// Display label
    pub label: String,
}

impl Component {
    /// Create a new component at the origin
    pub fn new(label: impl Into<String>, size: Extent) -> Self {
        Self {
            id: ComponentId::new(),
            position: Point::ZERO,
            width: size.width,
            height: size.height,
            label: label.into(),
        }
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Box size
    pub fn size(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Connection point on the given edge, derived from the current geometry
    pub fn connection_point(&self, side: Side) -> ConnectionPoint {
        ConnectionPoint::derive(self, side)
    }
}
