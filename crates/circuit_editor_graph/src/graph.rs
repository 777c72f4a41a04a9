// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing components and wires.

use crate::component::{Component, ComponentId};
use crate::connection_point::{Anchor, ConnectionPoint};
use crate::geometry::Point;
use crate::routing::WirePath;
use crate::wire::{ResolvedWire, Wire, WireId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The component/wire graph of one circuit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitGraph {
    /// Components in insertion (render) order
    components: IndexMap<ComponentId, Component>,
    /// Wires in insertion (render) order
    wires: IndexMap<WireId, Wire>,
}

impl CircuitGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component to the graph
    pub fn add_component(&mut self, component: Component) -> ComponentId {
        let id = component.id;
        self.components.insert(id, component);
        id
    }

    /// Remove a component and every wire touching it.
    ///
    /// Returns the component together with the wires removed alongside it.
    pub fn remove_component(
        &mut self,
        component_id: ComponentId,
    ) -> Option<(Component, Vec<Wire>)> {
        let component = self.components.shift_remove(&component_id)?;

        let mut removed = Vec::new();
        self.wires.retain(|_, w| {
            if w.involves_component(component_id) {
                removed.push(w.clone());
                false
            } else {
                true
            }
        });

        Some((component, removed))
    }

    /// Get a component by ID
    pub fn component(&self, component_id: ComponentId) -> Option<&Component> {
        self.components.get(&component_id)
    }

    /// Check whether a component exists
    pub fn contains_component(&self, component_id: ComponentId) -> bool {
        self.components.contains_key(&component_id)
    }

    /// Get all components
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Get the number of components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Move a component.
    ///
    /// Wire endpoints are resolved from component geometry on every read, so
    /// wires touching the component follow it in the same step. Returns
    /// `false` if the component does not exist or did not move.
    pub fn move_component(&mut self, component_id: ComponentId, position: Point) -> bool {
        match self.components.get_mut(&component_id) {
            Some(component) if component.position != position => {
                component.position = position;
                true
            }
            _ => false,
        }
    }

    /// Current connection point for an anchor
    pub fn connection_point(&self, anchor: Anchor) -> Option<ConnectionPoint> {
        self.component(anchor.component_id)
            .map(|c| c.connection_point(anchor.side))
    }

    /// Add a wire between two connection points
    pub fn connect(&mut self, from: Anchor, to: Anchor) -> Result<WireId, ConnectionError> {
        // Validate components exist
        if !self.contains_component(from.component_id) {
            return Err(ConnectionError::ComponentNotFound(from.component_id));
        }
        if !self.contains_component(to.component_id) {
            return Err(ConnectionError::ComponentNotFound(to.component_id));
        }

        // Prevent self-loops
        if from.component_id == to.component_id {
            return Err(ConnectionError::SelfLoop);
        }

        let wire = Wire::new(from, to);
        let id = wire.id;
        self.wires.insert(id, wire);
        Ok(id)
    }

    /// Remove a wire
    pub fn disconnect(&mut self, wire_id: WireId) -> Option<Wire> {
        self.wires.shift_remove(&wire_id)
    }

    /// Set or clear the bend point of a wire.
    ///
    /// Returns `false` if the wire does not exist or already had that bend.
    pub fn set_wire_mid_point(&mut self, wire_id: WireId, mid_point: Option<Point>) -> bool {
        match self.wires.get_mut(&wire_id) {
            Some(wire) if wire.mid_point != mid_point => {
                wire.mid_point = mid_point;
                true
            }
            _ => false,
        }
    }

    /// Get a wire by ID
    pub fn wire(&self, wire_id: WireId) -> Option<&Wire> {
        self.wires.get(&wire_id)
    }

    /// Check whether a wire exists
    pub fn contains_wire(&self, wire_id: WireId) -> bool {
        self.wires.contains_key(&wire_id)
    }

    /// Get all wires
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.wires.values()
    }

    /// Get the number of wires
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Resolve a wire's endpoints against current component geometry
    pub fn resolve_wire(&self, wire: &Wire) -> Option<ResolvedWire> {
        Some(ResolvedWire {
            id: wire.id,
            from: self.connection_point(wire.from)?,
            to: self.connection_point(wire.to)?,
            mid_point: wire.mid_point,
        })
    }

    /// Resolve every wire, in render order
    pub fn resolved_wires(&self) -> impl Iterator<Item = ResolvedWire> + '_ {
        self.wires.values().filter_map(|w| self.resolve_wire(w))
    }

    /// Orthogonal path of a wire
    pub fn wire_path(&self, wire_id: WireId) -> Option<WirePath> {
        self.wire(wire_id)
            .and_then(|w| self.resolve_wire(w))
            .map(|w| w.path())
    }
}

/// Error when creating a wire
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// Component not found
    #[error("Component not found: {0}")]
    ComponentNotFound(ComponentId),

    /// Both ends on the same component
    #[error("Self-loop not allowed")]
    SelfLoop,
}
