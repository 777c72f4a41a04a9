// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interaction state and input events.
//!
//! The host forwards raw pointer input as [`CanvasEvent`]s to
//! [`CircuitStore::handle_event`](crate::store::CircuitStore::handle_event),
//! which dispatches on the current [`InteractionMode`].

use crate::component::ComponentId;
use crate::connection_point::{ConnectionPoint, Side};
use crate::geometry::{Extent, Point};
use crate::wire::WireId;
use serde::{Deserialize, Serialize};

/// An in-progress component drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    /// Component being dragged
    pub component_id: ComponentId,
    /// Pointer position relative to the component's top-left corner at drag start
    pub grab_offset: Point,
}

impl DragSession {
    /// Top-left position the component should take for a pointer at `pointer`
    pub fn target(&self, pointer: Point) -> Point {
        pointer - self.grab_offset
    }
}

/// Graph editor interaction mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Nothing in progress
    #[default]
    Idle,
    /// Dragging a component
    Dragging(DragSession),
    /// Waiting for the second click of a connection
    Connecting(ConnectionPoint),
}

impl InteractionMode {
    /// Component being dragged, if any
    pub fn dragging_component(&self) -> Option<ComponentId> {
        match self {
            Self::Dragging(session) => Some(session.component_id),
            _ => None,
        }
    }

    /// Pending connection source, if any
    pub fn connecting_from(&self) -> Option<&ConnectionPoint> {
        match self {
            Self::Connecting(point) => Some(point),
            _ => None,
        }
    }

    /// Whether nothing is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Raw input forwarded by the rendering surface, already hit-tested
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// The canvas changed size
    Resized(Extent),
    /// Pointer pressed on a component body
    ComponentPressed {
        /// Component under the pointer
        component: ComponentId,
        /// Pointer position in canvas coordinates
        pointer: Point,
    },
    /// A connection point was clicked
    ConnectionPointClicked {
        /// Owning component
        component: ComponentId,
        /// Edge of the clicked point
        side: Side,
    },
    /// Pointer pressed on a wire's bend handle
    MidPointPressed {
        /// Wire owning the handle
        wire: WireId,
    },
    /// Pointer moved
    PointerMoved(Point),
    /// Pointer released
    PointerReleased,
    /// A wire body was clicked
    WireClicked {
        /// Clicked wire
        wire: WireId,
    },
    /// Empty canvas clicked
    BackgroundClicked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_target_applies_grab_offset() {
        let session = DragSession {
            component_id: ComponentId::new(),
            grab_offset: Point::new(30.0, 20.0),
        };
        assert_eq!(session.target(Point::new(130.0, 120.0)), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_mode_accessors() {
        let id = ComponentId::new();
        let dragging = InteractionMode::Dragging(DragSession {
            component_id: id,
            grab_offset: Point::ZERO,
        });
        assert_eq!(dragging.dragging_component(), Some(id));
        assert!(dragging.connecting_from().is_none());
        assert!(!dragging.is_idle());
        assert!(InteractionMode::default().is_idle());
    }
}
