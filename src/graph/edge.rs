//! Edge implementation
//!
//! An edge carries two endpoint slots, each optionally referencing a
//! vertex. This module holds the pure slot logic only: first-fit vacancy,
//! first-match lookup, and the self-loop predicate. Keeping vertex
//! incident lists in step with slot writes is the store's job.

use super::types::{Slot, VertexId};
use serde::{Deserialize, Serialize};

/// An undirected edge with up to two endpoints
///
/// Created with both slots empty. An edge whose two slots reference the
/// same vertex is a self-loop. Endpoint lookups compare against occupied
/// slots only, so an empty slot never matches any query vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    endpoints: [Option<VertexId>; 2],
}

impl Edge {
    pub(crate) fn new() -> Self {
        Edge {
            endpoints: [None, None],
        }
    }

    /// Vertex occupying the given slot, if any
    pub fn endpoint(&self, slot: Slot) -> Option<VertexId> {
        self.endpoints[slot.index()]
    }

    /// Both slots in scan order
    pub fn endpoints(&self) -> [Option<VertexId>; 2] {
        self.endpoints
    }

    /// Raw slot write; back-reference maintenance happens in the store.
    pub(crate) fn set_slot(&mut self, slot: Slot, vertex: Option<VertexId>) {
        self.endpoints[slot.index()] = vertex;
    }

    /// First empty slot in scan order (the first-fit policy)
    pub fn vacant_slot(&self) -> Option<Slot> {
        Slot::ALL.into_iter().find(|s| self.endpoint(*s).is_none())
    }

    /// First slot occupied by the given vertex, slot 1 checked first
    ///
    /// On a self-loop this always reports `Slot::One`.
    pub fn slot_of(&self, vertex: VertexId) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|s| self.endpoint(*s) == Some(vertex))
    }

    /// Every slot occupied by the given vertex (both, for a self-loop)
    pub fn slots_of(&self, vertex: VertexId) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|s| self.endpoint(*s) == Some(vertex))
            .collect()
    }

    /// Whether either slot references the given vertex
    pub fn has_endpoint(&self, vertex: VertexId) -> bool {
        self.slot_of(vertex).is_some()
    }

    /// Whether both slots reference the same vertex
    pub fn is_self_loop(&self) -> bool {
        matches!(self.endpoints, [Some(a), Some(b)] if a == b)
    }

    /// Number of occupied slots (0, 1, or 2)
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.iter().filter(|e| e.is_some()).count()
    }

    /// Whether both slots are occupied
    pub fn is_full(&self) -> bool {
        self.endpoint_count() == 2
    }

    /// Whether neither slot is occupied
    pub fn is_detached(&self) -> bool {
        self.endpoint_count() == 0
    }
}
