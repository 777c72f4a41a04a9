// SPDX-License-Identifier: MIT OR Apache-2.0
//! Circuit graph store.
//!
//! [`CircuitStore`] owns the component/wire graph together with all
//! interaction state (selection, component drag, pending connection, bend
//! handle drag). The rendering surface drives it through the command methods
//! or through [`CircuitStore::handle_event`], and reads it back as whole
//! [`CircuitSnapshot`]s.
//!
//! Commands never fail. Unknown ids are ignored and a connection between two
//! points on the same component is dropped. Every command that changes what a
//! snapshot would show bumps the revision and notifies the registered change
//! callbacks exactly once; commands that change nothing stay silent.

use crate::component::{Component, ComponentId};
use crate::config::{ConfigError, EditorConfig};
use crate::connection_point::{Anchor, ConnectionPoint, Side};
use crate::geometry::{Extent, Point};
use crate::graph::CircuitGraph;
use crate::interaction::{CanvasEvent, DragSession, InteractionMode};
use crate::routing::WirePath;
use crate::wire::{ResolvedWire, WireId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback invoked with the new snapshot after every change
pub type ChangeCallback = Box<dyn FnMut(&CircuitSnapshot)>;

/// Everything the rendering surface needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSnapshot {
    /// Number of changes applied so far
    pub revision: u64,
    /// Components in render order
    pub components: Vec<Component>,
    /// Wires with endpoints resolved against current geometry
    pub wires: Vec<ResolvedWire>,
    /// Selected component
    pub selected_component: Option<ComponentId>,
    /// Component being dragged
    pub dragging_component: Option<ComponentId>,
    /// Source of the pending connection
    pub connecting_from: Option<ConnectionPoint>,
    /// Wire whose bend handle is being dragged
    pub dragging_mid_point: Option<WireId>,
    /// Preview path of the pending connection towards the pointer
    pub preview: Option<WirePath>,
}

/// The authoritative circuit model plus interaction state
pub struct CircuitStore {
    config: EditorConfig,
    graph: CircuitGraph,
    selected: Option<ComponentId>,
    mode: InteractionMode,
    /// Bend handle drag, independent of `mode`
    mid_point_drag: Option<WireId>,
    /// Canvas size last reported by the host
    viewport: Option<Extent>,
    /// Last known pointer position
    pointer: Option<Point>,
    revision: u64,
    listeners: Vec<ChangeCallback>,
}

impl CircuitStore {
    /// Create an empty store with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(EditorConfig::default())
    }

    /// Create an empty store with the given configuration.
    ///
    /// Fails if the configuration has a non-positive canvas or component size.
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EditorConfig) -> Self {
        Self {
            config,
            graph: CircuitGraph::new(),
            selected: None,
            mode: InteractionMode::Idle,
            mid_point_drag: None,
            viewport: None,
            pointer: None,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a callback invoked after every change
    pub fn on_change(&mut self, callback: ChangeCallback) {
        self.listeners.push(callback);
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// The editor configuration
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The component/wire graph
    pub fn graph(&self) -> &CircuitGraph {
        &self.graph
    }

    /// Current interaction mode
    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    /// Number of changes applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selected component ID
    pub fn selected_component(&self) -> Option<ComponentId> {
        self.selected
    }

    /// Selected component
    pub fn selected(&self) -> Option<&Component> {
        self.selected.and_then(|id| self.graph.component(id))
    }

    /// Component being dragged
    pub fn dragging_component(&self) -> Option<ComponentId> {
        self.mode.dragging_component()
    }

    /// Source of the pending connection, re-derived from current geometry
    pub fn connecting_from(&self) -> Option<ConnectionPoint> {
        self.mode
            .connecting_from()
            .map(|p| self.graph.connection_point(p.anchor()).unwrap_or(*p))
    }

    /// Wire whose bend handle is being dragged
    pub fn dragging_mid_point(&self) -> Option<WireId> {
        self.mid_point_drag
    }

    /// Canvas extent used for placement and drag clamping
    pub fn canvas_extent(&self) -> Extent {
        self.viewport.unwrap_or(self.config.default_canvas)
    }

    /// Number of components and wires
    pub fn counts(&self) -> (usize, usize) {
        (self.graph.component_count(), self.graph.wire_count())
    }

    /// Orthogonal path of a wire
    pub fn wire_path(&self, wire_id: WireId) -> Option<WirePath> {
        self.graph.wire_path(wire_id)
    }

    /// Preview path of the pending connection towards the last pointer position
    pub fn connection_preview(&self) -> Option<WirePath> {
        let from = self.connecting_from()?;
        let pointer = self.pointer?;
        Some(WirePath::preview(from.point, pointer))
    }

    /// Whole-model snapshot for rendering
    pub fn snapshot(&self) -> CircuitSnapshot {
        CircuitSnapshot {
            revision: self.revision,
            components: self.graph.components().cloned().collect(),
            wires: self.graph.resolved_wires().collect(),
            selected_component: self.selected,
            dragging_component: self.dragging_component(),
            connecting_from: self.connecting_from(),
            dragging_mid_point: self.mid_point_drag,
            preview: self.connection_preview(),
        }
    }

    // ---------------------------------------------------------------------
    // Graph mutation commands
    // ---------------------------------------------------------------------

    /// Add a component centered in the current canvas extent
    pub fn add_component(&mut self) -> ComponentId {
        self.add_component_in(self.canvas_extent())
    }

    /// Add a component centered in `canvas`.
    ///
    /// The label number is the component count plus one at call time, so a
    /// label can repeat after deletions.
    pub fn add_component_in(&mut self, canvas: Extent) -> ComponentId {
        let size = self.config.component_size;
        let label = self.config.component_label(self.graph.component_count() + 1);
        let position = canvas.centered(size);
        let component = Component::new(label, size).with_position(position.x, position.y);

        tracing::info!(
            "Added {} '{}' at ({}, {})",
            component.id,
            component.label,
            position.x,
            position.y
        );
        let id = self.graph.add_component(component);
        self.commit(true);
        id
    }

    /// Delete a component and every wire touching it
    pub fn delete_component(&mut self, component_id: ComponentId) {
        let changed = self.apply_delete_component(component_id);
        self.commit(changed);
    }

    /// Move a component; attached wires follow in the same step
    pub fn update_component_position(&mut self, component_id: ComponentId, position: Point) {
        let changed = self.graph.move_component(component_id, position);
        self.commit(changed);
    }

    /// Delete a wire
    pub fn delete_wire(&mut self, wire_id: WireId) {
        let changed = self.apply_delete_wire(wire_id);
        self.commit(changed);
    }

    /// Set the bend point of a wire
    pub fn update_wire_mid_point(&mut self, wire_id: WireId, point: Point) {
        let changed = self.graph.set_wire_mid_point(wire_id, Some(point));
        self.commit(changed);
    }

    /// Drop a user-adjusted bend so the wire bends halfway between its endpoints again
    pub fn reset_wire_mid_point(&mut self, wire_id: WireId) {
        let changed = self.graph.set_wire_mid_point(wire_id, None);
        self.commit(changed);
    }

    // ---------------------------------------------------------------------
    // Interaction commands
    // ---------------------------------------------------------------------

    /// Select a component, or clear the selection with `None`
    pub fn select_component(&mut self, component_id: Option<ComponentId>) {
        let changed = self.apply_select(component_id);
        self.commit(changed);
    }

    /// Start dragging a component, grabbing it by its top-left corner
    pub fn start_dragging(&mut self, component_id: ComponentId) {
        let Some(position) = self.graph.component(component_id).map(|c| c.position) else {
            return;
        };
        self.start_dragging_at(component_id, position);
    }

    /// Start dragging a component grabbed at `pointer`
    pub fn start_dragging_at(&mut self, component_id: ComponentId, pointer: Point) {
        let changed = self.apply_start_dragging(component_id, pointer);
        self.commit(changed);
    }

    /// Move the dragged component so the grab point follows `pointer`
    pub fn drag_to(&mut self, pointer: Point) {
        let changed = self.apply_drag_to(pointer);
        self.commit(changed);
    }

    /// Finish the component drag; the selection stays
    pub fn stop_dragging(&mut self) {
        let changed = self.apply_stop_dragging();
        self.commit(changed);
    }

    /// Start a connection from `point`
    pub fn start_connecting(&mut self, point: ConnectionPoint) {
        let changed = self.apply_start_connecting(point);
        self.commit(changed);
    }

    /// Complete the pending connection at `point`.
    ///
    /// A wire is created only when `point` is on a different component than
    /// the source. The pending connection ends either way.
    pub fn finish_connecting(&mut self, point: ConnectionPoint) {
        let changed = self.apply_finish_connecting(point);
        self.commit(changed);
    }

    /// Abandon the pending connection
    pub fn cancel_connecting(&mut self) {
        let changed = self.apply_cancel_connecting();
        self.commit(changed);
    }

    /// Start dragging the bend handle of a wire
    pub fn start_mid_point_drag(&mut self, wire_id: WireId) {
        let changed = self.apply_start_mid_point_drag(wire_id);
        self.commit(changed);
    }

    /// Stop dragging the bend handle
    pub fn stop_mid_point_drag(&mut self) {
        let changed = self.mid_point_drag.take().is_some();
        self.commit(changed);
    }

    /// Record the canvas size reported by the host
    pub fn set_viewport(&mut self, extent: Extent) {
        self.apply_viewport(extent);
    }

    /// Dispatch one input event from the rendering surface
    pub fn handle_event(&mut self, event: CanvasEvent) {
        let changed = match event {
            CanvasEvent::Resized(extent) => {
                self.apply_viewport(extent);
                false
            }
            CanvasEvent::ComponentPressed { component, pointer } => {
                self.pointer = Some(pointer);
                self.apply_start_dragging(component, pointer)
            }
            CanvasEvent::ConnectionPointClicked { component, side } => {
                self.apply_connection_point_click(component, side)
            }
            CanvasEvent::MidPointPressed { wire } => self.apply_start_mid_point_drag(wire),
            CanvasEvent::PointerMoved(pointer) => self.apply_pointer_moved(pointer),
            CanvasEvent::PointerReleased => {
                let stopped_drag = self.apply_stop_dragging();
                let stopped_handle = self.mid_point_drag.take().is_some();
                stopped_drag || stopped_handle
            }
            CanvasEvent::WireClicked { wire } => {
                if self.mid_point_drag == Some(wire) {
                    false
                } else {
                    self.apply_delete_wire(wire)
                }
            }
            CanvasEvent::BackgroundClicked => {
                let deselected = self.apply_select(None);
                let cancelled = self.apply_cancel_connecting();
                let stopped_drag = self.apply_stop_dragging();
                deselected || cancelled || stopped_drag
            }
        };
        self.commit(changed);
    }

    // ---------------------------------------------------------------------
    // State transitions
    // ---------------------------------------------------------------------

    fn commit(&mut self, changed: bool) {
        if !changed {
            return;
        }
        self.revision += 1;
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }

    fn apply_viewport(&mut self, extent: Extent) {
        if extent.is_positive() {
            self.viewport = Some(extent);
        } else {
            tracing::debug!("Ignoring unusable viewport {:?}", extent);
        }
    }

    fn apply_delete_component(&mut self, component_id: ComponentId) -> bool {
        let Some((component, wires)) = self.graph.remove_component(component_id) else {
            tracing::debug!("Delete of unknown {} ignored", component_id);
            return false;
        };
        tracing::info!(
            "Deleted {} '{}' and {} wire(s)",
            component.id,
            component.label,
            wires.len()
        );

        if self.selected == Some(component_id) {
            self.selected = None;
        }
        let drops_mode = match &self.mode {
            InteractionMode::Dragging(session) => session.component_id == component_id,
            InteractionMode::Connecting(from) => from.component_id == component_id,
            InteractionMode::Idle => false,
        };
        if drops_mode {
            self.mode = InteractionMode::Idle;
        }
        if let Some(wire_id) = self.mid_point_drag {
            if !self.graph.contains_wire(wire_id) {
                self.mid_point_drag = None;
            }
        }
        true
    }

    fn apply_delete_wire(&mut self, wire_id: WireId) -> bool {
        if self.graph.disconnect(wire_id).is_none() {
            tracing::debug!("Delete of unknown {} ignored", wire_id);
            return false;
        }
        tracing::info!("Deleted {}", wire_id);
        if self.mid_point_drag == Some(wire_id) {
            self.mid_point_drag = None;
        }
        true
    }

    fn apply_select(&mut self, component_id: Option<ComponentId>) -> bool {
        if let Some(id) = component_id {
            if !self.graph.contains_component(id) {
                tracing::debug!("Select of unknown {} ignored", id);
                return false;
            }
        }
        if self.selected == component_id {
            return false;
        }
        self.selected = component_id;
        true
    }

    fn apply_start_dragging(&mut self, component_id: ComponentId, pointer: Point) -> bool {
        let Some(component) = self.graph.component(component_id) else {
            tracing::debug!("Drag of unknown {} ignored", component_id);
            return false;
        };
        let session = DragSession {
            component_id,
            grab_offset: pointer - component.position,
        };
        if let InteractionMode::Connecting(from) = &self.mode {
            tracing::debug!("Drag start abandons pending connection from {}", from.anchor());
        }
        self.mode = InteractionMode::Dragging(session);
        self.selected = Some(component_id);
        true
    }

    fn apply_drag_to(&mut self, pointer: Point) -> bool {
        let InteractionMode::Dragging(session) = self.mode else {
            return false;
        };
        let Some(size) = self.graph.component(session.component_id).map(Component::size) else {
            return false;
        };
        let position = self.canvas_extent().clamp_box(session.target(pointer), size);
        self.graph.move_component(session.component_id, position)
    }

    fn apply_stop_dragging(&mut self) -> bool {
        if self.mode.dragging_component().is_none() {
            return false;
        }
        self.mode = InteractionMode::Idle;
        true
    }

    fn apply_start_connecting(&mut self, point: ConnectionPoint) -> bool {
        let Some(source) = self.graph.connection_point(point.anchor()) else {
            tracing::debug!("Connection from unknown {} ignored", point.component_id);
            return false;
        };
        if self.mode.connecting_from() == Some(&source) {
            return false;
        }
        tracing::debug!("Connecting from {}", source.anchor());
        self.mode = InteractionMode::Connecting(source);
        true
    }

    fn apply_finish_connecting(&mut self, point: ConnectionPoint) -> bool {
        let InteractionMode::Connecting(from) = self.mode else {
            return false;
        };
        self.mode = InteractionMode::Idle;

        match self.graph.connect(from.anchor(), point.anchor()) {
            Ok(wire_id) => {
                tracing::info!("Connected {} -> {} as {}", from.anchor(), point.anchor(), wire_id);
            }
            Err(e) => {
                tracing::debug!(
                    "Connection {} -> {} dropped: {}",
                    from.anchor(),
                    point.anchor(),
                    e
                );
            }
        }
        true
    }

    fn apply_cancel_connecting(&mut self) -> bool {
        if self.mode.connecting_from().is_none() {
            return false;
        }
        tracing::debug!("Connection cancelled");
        self.mode = InteractionMode::Idle;
        true
    }

    fn apply_connection_point_click(&mut self, component_id: ComponentId, side: Side) -> bool {
        let Some(point) = self.graph.connection_point(Anchor::new(component_id, side)) else {
            tracing::debug!("Click on connection point of unknown {} ignored", component_id);
            return false;
        };
        if self.mode.connecting_from().is_some() {
            self.apply_finish_connecting(point)
        } else {
            self.apply_start_connecting(point)
        }
    }

    fn apply_start_mid_point_drag(&mut self, wire_id: WireId) -> bool {
        if !self.graph.contains_wire(wire_id) || self.mid_point_drag == Some(wire_id) {
            return false;
        }
        self.mid_point_drag = Some(wire_id);
        true
    }

    fn apply_pointer_moved(&mut self, pointer: Point) -> bool {
        let pointer_changed = self.pointer != Some(pointer);
        self.pointer = Some(pointer);

        let moved_handle = match self.mid_point_drag {
            Some(wire_id) => self.graph.set_wire_mid_point(wire_id, Some(pointer)),
            None => false,
        };
        let moved_component = self.apply_drag_to(pointer);
        let moved_preview = pointer_changed && self.mode.connecting_from().is_some();

        moved_handle || moved_component || moved_preview
    }
}

impl Default for CircuitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CircuitStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircuitStore")
            .field("graph", &self.graph)
            .field("selected", &self.selected)
            .field("mode", &self.mode)
            .field("mid_point_drag", &self.mid_point_drag)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
