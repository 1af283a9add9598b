//! In-memory arena and endpoint consistency engine
//!
//! Vertices and edges reference each other cyclically (slots point at
//! vertices, incident lists point back at edges), so both live in arenas
//! addressed by stable ids. Every endpoint mutation funnels through
//! [`GraphStore::set_endpoint`], which keeps the affected incident lists in
//! step and notifies observers before returning.

use super::edge::Edge;
use super::event::ChangeEvent;
use super::observe::{Observers, SubscriberId};
use super::types::{EdgeId, Slot, VertexId};
use super::vertex::Vertex;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Edge {0} already has both endpoints assigned")]
    EdgeFull(EdgeId),

    #[error("Edge {edge} has no endpoint equal to vertex {vertex}")]
    EndpointNotFound { edge: EdgeId, vertex: VertexId },

    #[error("{slot} of edge {edge} is already empty")]
    EndpointEmpty { edge: EdgeId, slot: Slot },

    #[error("Vertex {0} is still referenced by an edge")]
    VertexInUse(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Arena of vertices and edges with consistent endpoint wiring
///
/// Ids index directly into the arenas; destroyed ids are recycled through
/// free lists. Graph membership is a separate concern (see
/// [`Graph`](super::membership::Graph)): entities here may belong to zero,
/// one, or several graphs, and endpoint wiring never depends on membership.
///
/// Invariant, restored after every mutation: an edge occupies a slot with
/// vertex V exactly when V's incident list holds one entry for that edge
/// per such slot.
#[derive(Debug)]
pub struct GraphStore<T> {
    /// Vertex arena; `None` marks a destroyed, recyclable id
    vertices: Vec<Option<Vertex<T>>>,

    /// Edge arena
    edges: Vec<Option<Edge>>,

    /// Destroyed vertex ids available for reuse
    free_vertex_ids: Vec<u64>,

    /// Destroyed edge ids available for reuse
    free_edge_ids: Vec<u64>,

    /// Observers of payload, incidence, and endpoint changes
    observers: Observers,

    next_vertex_id: u64,
    next_edge_id: u64,
}

impl<T> GraphStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        GraphStore {
            vertices: Vec::new(),
            edges: Vec::new(),
            free_vertex_ids: Vec::new(),
            free_edge_ids: Vec::new(),
            observers: Observers::new(),
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    // ---- lifecycle ----

    /// Create a vertex with no payload and no incident edges
    pub fn create_vertex(&mut self) -> VertexId {
        let raw = self.free_vertex_ids.pop().unwrap_or_else(|| {
            let id = self.next_vertex_id;
            self.next_vertex_id += 1;
            id
        });
        let id = VertexId::new(raw);
        let idx = raw as usize;

        if idx >= self.vertices.len() {
            self.vertices.resize_with(idx + 1, || None);
        }
        self.vertices[idx] = Some(Vertex::new());
        debug!("Created vertex {}", id);
        id
    }

    /// Create an edge with both endpoint slots empty
    pub fn create_edge(&mut self) -> EdgeId {
        let raw = self.free_edge_ids.pop().unwrap_or_else(|| {
            let id = self.next_edge_id;
            self.next_edge_id += 1;
            id
        });
        let id = EdgeId::new(raw);
        let idx = raw as usize;

        if idx >= self.edges.len() {
            self.edges.resize_with(idx + 1, || None);
        }
        self.edges[idx] = Some(Edge::new());
        debug!("Created edge {}", id);
        id
    }

    /// Destroy an edge, clearing its occupied slots first so every
    /// back-reference is dropped and notified
    pub fn destroy_edge(&mut self, edge: EdgeId) -> GraphResult<()> {
        for slot in Slot::ALL {
            if self.edge_ref(edge)?.endpoint(slot).is_some() {
                self.set_endpoint(edge, slot, None)?;
            }
        }
        self.edges[edge.as_u64() as usize] = None;
        self.free_edge_ids.push(edge.as_u64());
        debug!("Destroyed edge {}", edge);
        Ok(())
    }

    /// Destroy a vertex
    ///
    /// Fails with [`GraphError::VertexInUse`] while any edge still holds
    /// the vertex in a slot; detach those edges first.
    pub fn destroy_vertex(&mut self, vertex: VertexId) -> GraphResult<()> {
        if !self.vertex_ref(vertex)?.incident_edges().is_empty() {
            return Err(GraphError::VertexInUse(vertex));
        }
        self.vertices[vertex.as_u64() as usize] = None;
        self.free_vertex_ids.push(vertex.as_u64());
        debug!("Destroyed vertex {}", vertex);
        Ok(())
    }

    // ---- accessors ----

    /// Read access to a vertex
    pub fn vertex(&self, id: VertexId) -> GraphResult<&Vertex<T>> {
        self.vertex_ref(id)
    }

    /// Read access to an edge
    pub fn edge(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.edge_ref(id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex_ref(id).is_ok()
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge_ref(id).is_ok()
    }

    /// Number of live vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|slot| slot.is_some()).count()
    }

    // ---- payload ----

    /// Replace a vertex's payload; any value is accepted
    pub fn set_payload(&mut self, vertex: VertexId, value: T) -> GraphResult<()> {
        self.vertex_mut(vertex)?.set_payload(value);
        trace!("Payload set on vertex {}", vertex);
        self.observers.notify(&ChangeEvent::PayloadChanged { vertex });
        Ok(())
    }

    /// Current payload of a vertex, if one has been set
    pub fn payload(&self, vertex: VertexId) -> GraphResult<Option<&T>> {
        Ok(self.vertex_ref(vertex)?.payload())
    }

    // ---- incidence ----

    /// Point-in-time snapshot of a vertex's incident edges
    ///
    /// The returned list is owned; later mutations do not affect it. A
    /// self-loop appears twice.
    pub fn incident_edges(&self, vertex: VertexId) -> GraphResult<Vec<EdgeId>> {
        Ok(self.vertex_ref(vertex)?.incident_edges().to_vec())
    }

    // ---- endpoint engine ----

    /// Vertex occupying the given slot of an edge
    pub fn endpoint(&self, edge: EdgeId, slot: Slot) -> GraphResult<Option<VertexId>> {
        Ok(self.edge_ref(edge)?.endpoint(slot))
    }

    /// Whether either slot of the edge references the vertex
    ///
    /// Null-safe: empty slots never match.
    pub fn has_endpoint(&self, edge: EdgeId, vertex: VertexId) -> GraphResult<bool> {
        Ok(self.edge_ref(edge)?.has_endpoint(vertex))
    }

    /// Assign an endpoint slot, keeping incident lists consistent
    ///
    /// The primitive behind every endpoint operation. Ordering is strict
    /// remove-then-add within the one call: the displaced vertex (if any)
    /// loses its back-reference and is notified, then the slot is written
    /// and notified, then the incoming vertex (if any) gains its
    /// back-reference and is notified. Observers never see the edge
    /// registered with a vertex whose slot it no longer occupies.
    pub fn set_endpoint(
        &mut self,
        edge: EdgeId,
        slot: Slot,
        vertex: Option<VertexId>,
    ) -> GraphResult<()> {
        // Validate everything up front; a failure must leave no trace.
        let old = self.edge_ref(edge)?.endpoint(slot);
        if let Some(v) = vertex {
            self.vertex_ref(v)?;
        }

        if let Some(prev) = old {
            let dropped = self.vertex_mut(prev)?.unregister_incident(edge);
            // An occupied slot always has a matching back-reference
            debug_assert!(dropped);
            trace!("Unregistered edge {} from vertex {}", edge, prev);
            self.observers
                .notify(&ChangeEvent::IncidentEdgesChanged { vertex: prev, edge });
        }

        self.edge_mut(edge)?.set_slot(slot, vertex);
        debug!("Reassigned {} of edge {}: {:?} -> {:?}", slot, edge, old, vertex);
        self.observers.notify(&ChangeEvent::EndpointChanged {
            edge,
            slot,
            from: old,
            to: vertex,
        });

        if let Some(next) = vertex {
            self.vertex_mut(next)?.register_incident(edge);
            trace!("Registered edge {} on vertex {}", edge, next);
            self.observers
                .notify(&ChangeEvent::IncidentEdgesChanged { vertex: next, edge });
        }

        Ok(())
    }

    /// Attach a vertex to the first empty slot (first-fit)
    ///
    /// Fails with [`GraphError::EdgeFull`] when both slots are occupied,
    /// leaving the edge untouched. Attaching the same vertex twice builds a
    /// self-loop.
    pub fn add_endpoint(&mut self, edge: EdgeId, vertex: VertexId) -> GraphResult<Slot> {
        self.vertex_ref(vertex)?;
        let slot = self
            .edge_ref(edge)?
            .vacant_slot()
            .ok_or(GraphError::EdgeFull(edge))?;
        self.set_endpoint(edge, slot, Some(vertex))?;
        Ok(slot)
    }

    /// Reassign the first slot occupied by `from` to `to`
    ///
    /// Slot 1 is checked first; on a self-loop only slot 1 is changed.
    /// Fails with [`GraphError::EndpointNotFound`] when neither slot holds
    /// `from`, leaving all state untouched.
    pub fn change_endpoint(
        &mut self,
        edge: EdgeId,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<Slot> {
        self.vertex_ref(to)?;
        let slot = self
            .edge_ref(edge)?
            .slot_of(from)
            .ok_or(GraphError::EndpointNotFound { edge, vertex: from })?;
        self.set_endpoint(edge, slot, Some(to))?;
        Ok(slot)
    }

    /// Clear one endpoint slot, returning the vertex it held
    ///
    /// Fails with [`GraphError::EndpointEmpty`] when the slot was already
    /// empty.
    pub fn clear_endpoint(&mut self, edge: EdgeId, slot: Slot) -> GraphResult<VertexId> {
        let held = self
            .edge_ref(edge)?
            .endpoint(slot)
            .ok_or(GraphError::EndpointEmpty { edge, slot })?;
        self.set_endpoint(edge, slot, None)?;
        Ok(held)
    }

    /// Clear every slot occupied by the given vertex, returning how many
    ///
    /// Both slots for a self-loop, dropping both incidence entries. Fails
    /// with [`GraphError::EndpointNotFound`] when neither slot matches.
    pub fn remove_endpoints_of(&mut self, edge: EdgeId, vertex: VertexId) -> GraphResult<usize> {
        let slots = self.edge_ref(edge)?.slots_of(vertex);
        if slots.is_empty() {
            return Err(GraphError::EndpointNotFound { edge, vertex });
        }
        let cleared = slots.len();
        for slot in slots {
            self.set_endpoint(edge, slot, None)?;
        }
        Ok(cleared)
    }

    // ---- observation ----

    /// Register an observer of payload, incidence, and endpoint changes
    pub fn subscribe(&mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> SubscriberId {
        self.observers.subscribe(callback)
    }

    /// Remove an observer; returns `false` if the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ---- internals ----

    fn vertex_ref(&self, id: VertexId) -> GraphResult<&Vertex<T>> {
        self.vertices
            .get(id.as_u64() as usize)
            .and_then(|slot| slot.as_ref())
            .ok_or(GraphError::VertexNotFound(id))
    }

    fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex<T>> {
        self.vertices
            .get_mut(id.as_u64() as usize)
            .and_then(|slot| slot.as_mut())
            .ok_or(GraphError::VertexNotFound(id))
    }

    fn edge_ref(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.edges
            .get(id.as_u64() as usize)
            .and_then(|slot| slot.as_ref())
            .ok_or(GraphError::EdgeNotFound(id))
    }

    fn edge_mut(&mut self, id: EdgeId) -> GraphResult<&mut Edge> {
        self.edges
            .get_mut(id.as_u64() as usize)
            .and_then(|slot| slot.as_mut())
            .ok_or(GraphError::EdgeNotFound(id))
    }
}

impl<T> Default for GraphStore<T> {
    fn default() -> Self {
        GraphStore::new()
    }
}
