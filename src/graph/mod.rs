//! Core graph container implementation
//!
//! This module implements the mutable graph data model:
//! - Vertices with an arbitrary payload and insertion-ordered incident-edge lists
//! - Edges with two optional endpoint slots and first-fit assignment
//! - Arena storage with stable ids ([`GraphStore`]) and the endpoint
//!   consistency engine that keeps incident lists in step with slot writes
//! - Insertion-ordered graph membership ([`Graph`]), orthogonal to wiring
//! - Synchronous, registration-ordered change notification

pub mod edge;
pub mod event;
pub mod membership;
pub mod observe;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use event::ChangeEvent;
pub use membership::Graph;
pub use observe::{Observers, SubscriberId};
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, Slot, VertexId};
pub use vertex::Vertex;
