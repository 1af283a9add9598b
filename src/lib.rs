//! Incidence
//!
//! A generic, mutable, in-memory graph container. Typed vertices hold a
//! payload, edges connect up to two vertices, and an arena-backed store
//! keeps every vertex's incident-edge list consistent with the edges'
//! endpoint slots while notifying observers of each structural change,
//! synchronously, before the mutating call returns.
//!
//! Vertex↔edge references are cyclic, so entities live in a
//! [`GraphStore`] arena addressed by stable [`VertexId`]/[`EdgeId`]
//! handles. Graph membership is a separate, orthogonal concern carried by
//! [`Graph`]: an entity can be staged outside any graph, or shared by
//! several, and membership changes never rewire endpoints.
//!
//! No traversal or search algorithms, no persistence, no concurrency
//! control: the crate is the consistency engine and its notification
//! contract.
//!
//! # Example
//!
//! ```rust
//! use incidence::graph::{GraphStore, Slot};
//!
//! let mut store = GraphStore::new();
//!
//! let a = store.create_vertex();
//! let b = store.create_vertex();
//! store.set_payload(a, 1).unwrap();
//! store.set_payload(b, 2).unwrap();
//!
//! // First-fit endpoint assignment
//! let e = store.create_edge();
//! assert_eq!(store.add_endpoint(e, a).unwrap(), Slot::One);
//! assert_eq!(store.add_endpoint(e, b).unwrap(), Slot::Two);
//!
//! // Back-references follow automatically
//! assert_eq!(store.incident_edges(a).unwrap(), vec![e]);
//! assert!(store.has_endpoint(e, b).unwrap());
//!
//! // Reassigning an endpoint moves the back-reference with it
//! store.change_endpoint(e, a, b).unwrap();
//! assert!(store.incident_edges(a).unwrap().is_empty());
//! assert_eq!(store.incident_edges(b).unwrap(), vec![e, e]);
//! assert!(store.edge(e).unwrap().is_self_loop());
//! ```

pub mod graph;

pub use graph::{
    ChangeEvent, Edge, EdgeId, Graph, GraphError, GraphResult, GraphStore, Observers, Slot,
    SubscriberId, Vertex, VertexId,
};
