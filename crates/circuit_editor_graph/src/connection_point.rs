// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection points on component edges.
//!
//! A connection point is never stored on its own. It is identified by an
//! [`Anchor`] (component + edge) and its coordinate is derived from the
//! owning component's current geometry whenever it is needed.

use crate::component::{Component, ComponentId};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge of a component that carries a connection point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Midpoint of the top edge
    Top,
    /// Midpoint of the bottom edge
    Bottom,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
        }
    }
}

/// Identity of a connection point: which component, which edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    /// Owning component
    pub component_id: ComponentId,
    /// Edge on the component
    pub side: Side,
}

impl Anchor {
    /// Create a new anchor
    pub fn new(component_id: ComponentId, side: Side) -> Self {
        Self { component_id, side }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.component_id, self.side)
    }
}

/// Snapshot of a connection point with its derived canvas coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPoint {
    /// Owning component
    pub component_id: ComponentId,
    /// Edge on the component
    pub side: Side,
    /// Canvas coordinate at the time the snapshot was taken
    pub point: Point,
}

impl ConnectionPoint {
    /// Derive the connection point on `side` of `component`.
    ///
    /// `x` is the horizontal center of the box; `y` is the top edge or the
    /// bottom edge.
    pub fn derive(component: &Component, side: Side) -> Self {
        let y = match side {
            Side::Top => component.position.y,
            Side::Bottom => component.position.y + component.height,
        };
        Self {
            component_id: component.id,
            side,
            point: Point::new(component.position.x + component.width / 2.0, y),
        }
    }

    /// Identity of this point
    pub fn anchor(&self) -> Anchor {
        Anchor::new(self.component_id, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Extent;

    #[test]
    fn test_derive_top_and_bottom() {
        let component = Component::new("A", Extent::new(120.0, 80.0)).with_position(50.0, 50.0);

        let top = ConnectionPoint::derive(&component, Side::Top);
        assert_eq!(top.point, Point::new(110.0, 50.0));
        assert_eq!(top.component_id, component.id);

        let bottom = ConnectionPoint::derive(&component, Side::Bottom);
        assert_eq!(bottom.point, Point::new(110.0, 130.0));
        assert_eq!(bottom.anchor(), Anchor::new(component.id, Side::Bottom));
    }

    #[test]
    fn test_connection_points_order() {
        let component = Component::new("A", Extent::new(120.0, 80.0));

        let top = component.connection_point(Side::Top);
        let bottom = component.connection_point(Side::Bottom);
        assert_eq!(top.side, Side::Top);
        assert_eq!(bottom.side, Side::Bottom);
        assert_eq!(top.point.x, bottom.point.x);
        assert_eq!(bottom.point.y - top.point.y, 80.0);
    }

    #[test]
    fn test_anchor_display() {
        let component = Component::new("A", Extent::new(120.0, 80.0));
        let anchor = Anchor::new(component.id, Side::Top);
        assert_eq!(anchor.to_string(), format!("component-{}-top", component.id.0));
    }
}
