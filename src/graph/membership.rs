//! Graph membership collections
//!
//! A `Graph` records which vertices and edges are "in" it, nothing more.
//! Membership is fully orthogonal to endpoint wiring: an edge can belong to
//! a graph with both slots empty, a wired vertex/edge pair can belong to no
//! graph, and removal here never detaches anything in the store. Cascading
//! is deliberately left to the caller.

use super::event::ChangeEvent;
use super::observe::{Observers, SubscriberId};
use super::types::{EdgeId, VertexId};
use tracing::trace;

/// Insertion-ordered vertex and edge membership for one graph
///
/// The collections do not enforce uniqueness; adding the same id twice is a
/// caller error that is recorded as given, and removal drops the first
/// matching entry only.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
    observers: Observers,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            observers: Observers::new(),
        }
    }

    /// Append a vertex to this graph's membership
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.vertices.push(vertex);
        trace!("Added vertex {} to graph", vertex);
        self.observers
            .notify(&ChangeEvent::VerticesChanged { vertex, added: true });
    }

    /// Append an edge to this graph's membership
    pub fn add_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
        trace!("Added edge {} to graph", edge);
        self.observers
            .notify(&ChangeEvent::EdgesChanged { edge, added: true });
    }

    /// Remove the first matching vertex entry
    ///
    /// Returns `false` (and emits nothing) when the vertex is not a member.
    /// Edges referencing the vertex are untouched.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        match self.vertices.iter().position(|v| *v == vertex) {
            Some(pos) => {
                self.vertices.remove(pos);
                trace!("Removed vertex {} from graph", vertex);
                self.observers
                    .notify(&ChangeEvent::VerticesChanged { vertex, added: false });
                true
            }
            None => false,
        }
    }

    /// Remove the first matching edge entry
    ///
    /// Returns `false` (and emits nothing) when the edge is not a member.
    /// The edge's endpoints and the vertices' incident lists are untouched.
    pub fn remove_edge(&mut self, edge: EdgeId) -> bool {
        match self.edges.iter().position(|e| *e == edge) {
            Some(pos) => {
                self.edges.remove(pos);
                trace!("Removed edge {} from graph", edge);
                self.observers
                    .notify(&ChangeEvent::EdgesChanged { edge, added: false });
                true
            }
            None => false,
        }
    }

    /// Point-in-time snapshot of the member vertices, in insertion order
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.clone()
    }

    /// Point-in-time snapshot of the member edges, in insertion order
    pub fn edges(&self) -> Vec<EdgeId> {
        self.edges.clone()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Register an observer of this graph's collection changes
    pub fn subscribe(&mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> SubscriberId {
        self.observers.subscribe(callback)
    }

    /// Remove an observer; returns `false` if the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.observers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_membership_insertion_order() {
        let mut graph = Graph::new();
        let v1 = VertexId::new(1);
        let v2 = VertexId::new(2);
        let e1 = EdgeId::new(1);

        graph.add_vertex(v2);
        graph.add_vertex(v1);
        graph.add_edge(e1);

        assert_eq!(graph.vertices(), vec![v2, v1]);
        assert_eq!(graph.edges(), vec![e1]);
        assert!(graph.contains_vertex(v1));
        assert!(graph.contains_edge(e1));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_adds_are_kept() {
        let mut graph = Graph::new();
        let v = VertexId::new(1);

        graph.add_vertex(v);
        graph.add_vertex(v);
        assert_eq!(graph.vertices(), vec![v, v]);

        // Removal drops one entry at a time
        assert!(graph.remove_vertex(v));
        assert_eq!(graph.vertices(), vec![v]);
        assert!(graph.remove_vertex(v));
        assert!(!graph.remove_vertex(v));
    }

    #[test]
    fn test_remove_missing_member() {
        let mut graph = Graph::new();
        assert!(!graph.remove_vertex(VertexId::new(8)));
        assert!(!graph.remove_edge(EdgeId::new(8)));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_snapshots_are_detached() {
        let mut graph = Graph::new();
        let v = VertexId::new(1);
        graph.add_vertex(v);

        let snapshot = graph.vertices();
        graph.remove_vertex(v);

        assert_eq!(snapshot, vec![v]);
        assert!(graph.vertices().is_empty());
    }

    #[test]
    fn test_collection_events() {
        let mut graph = Graph::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        graph.subscribe(move |event| sink.borrow_mut().push(*event));

        let v = VertexId::new(1);
        let e = EdgeId::new(2);
        graph.add_vertex(v);
        graph.add_edge(e);
        graph.remove_edge(e);
        graph.remove_edge(e); // miss, no event

        assert_eq!(
            *seen.borrow(),
            vec![
                ChangeEvent::VerticesChanged { vertex: v, added: true },
                ChangeEvent::EdgesChanged { edge: e, added: true },
                ChangeEvent::EdgesChanged { edge: e, added: false },
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut graph = Graph::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = graph.subscribe(move |_| *sink.borrow_mut() += 1);

        graph.add_vertex(VertexId::new(1));
        assert!(graph.unsubscribe(id));
        graph.add_vertex(VertexId::new(2));

        assert_eq!(*count.borrow(), 1);
    }
}
