// SPDX-License-Identifier: MIT OR Apache-2.0
//! Wire (edge) definitions for the circuit graph.

use crate::component::ComponentId;
use crate::connection_point::{Anchor, ConnectionPoint};
use crate::geometry::Point;
use crate::routing::WirePath;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireId(pub Uuid);

impl WireId {
    /// Create a new random wire ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WireId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wire-{}", self.0)
    }
}

/// A wire between connection points on two different components.
///
/// Endpoints are stored by identity only; their coordinates come from
/// [`CircuitGraph::resolve_wire`](crate::graph::CircuitGraph::resolve_wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    /// Unique wire ID
    pub id: WireId,
    /// Source connection point
    pub from: Anchor,
    /// Target connection point
    pub to: Anchor,
    /// User-adjusted bend point, if any
    pub mid_point: Option<Point>,
}

impl Wire {
    /// Create a new wire with the default bend
    pub fn new(from: Anchor, to: Anchor) -> Self {
        Self {
            id: WireId::new(),
            from,
            to,
            mid_point: None,
        }
    }

    /// Check if this wire touches a specific component
    pub fn involves_component(&self, component_id: ComponentId) -> bool {
        self.from.component_id == component_id || self.to.component_id == component_id
    }
}

/// A wire with both endpoints resolved against the current component geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWire {
    /// Wire ID
    pub id: WireId,
    /// Source endpoint snapshot
    pub from: ConnectionPoint,
    /// Target endpoint snapshot
    pub to: ConnectionPoint,
    /// User-adjusted bend point, if any
    pub mid_point: Option<Point>,
}

impl ResolvedWire {
    /// Bend point actually used for routing: the stored midpoint, or halfway between the endpoints
    pub fn bend(&self) -> Point {
        self.mid_point
            .unwrap_or_else(|| self.from.point.midpoint(self.to.point))
    }

    /// Orthogonal path for rendering
    pub fn path(&self) -> WirePath {
        WirePath::orthogonal(self.from.point, self.to.point, self.bend())
    }
}
