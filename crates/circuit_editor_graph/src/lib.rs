// SPDX-License-Identifier: MIT OR Apache-2.0
//! Circuit graph store for the circuit diagram editor.
//!
//! This crate holds the model behind the editor canvas:
//! - Rectangular components with top/bottom connection points
//! - Orthogonal wires between points on different components
//! - Selection, component drag, and connection interaction state
//!
//! ## Architecture
//!
//! Layers, bottom-up:
//! - Geometry and routing: pure functions over points and extents
//! - [`CircuitGraph`]: owned components and wires; wires store endpoint
//!   anchors and resolve coordinates from the current component geometry
//! - [`CircuitStore`]: mutation and interaction commands, the
//!   [`CanvasEvent`] entry point, and change notification
//!
//! The rendering surface is external. It feeds events in and draws
//! [`CircuitSnapshot`]s.

pub mod geometry;
pub mod component;
pub mod connection_point;
pub mod wire;
pub mod routing;
pub mod graph;
pub mod interaction;
pub mod config;
pub mod store;

pub use component::{Component, ComponentId};
pub use config::{ConfigError, EditorConfig};
pub use connection_point::{Anchor, ConnectionPoint, Side};
pub use geometry::{Extent, Point};
pub use graph::{CircuitGraph, ConnectionError};
pub use interaction::{CanvasEvent, DragSession, InteractionMode};
pub use routing::WirePath;
pub use store::{ChangeCallback, CircuitSnapshot, CircuitStore};
pub use wire::{ResolvedWire, Wire, WireId};
