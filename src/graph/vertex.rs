//! Vertex implementation
//!
//! A vertex holds an arbitrary payload and the insertion-ordered list of
//! edges currently incident to it. The incident list is maintained
//! exclusively by the store's endpoint machinery; a self-loop appears in it
//! twice, once per endpoint slot.

use super::types::EdgeId;
use serde::{Deserialize, Serialize};

/// A vertex in the graph
///
/// Created with no payload and no incident edges. The payload accepts any
/// value without validation. Incident entries are back-references only: a
/// vertex never owns its edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<T> {
    /// Attached payload; unset until first assignment
    payload: Option<T>,

    /// Edges currently touching this vertex, insertion-ordered,
    /// duplicates allowed (self-loops)
    incident: Vec<EdgeId>,
}

impl<T> Vertex<T> {
    pub(crate) fn new() -> Self {
        Vertex {
            payload: None,
            incident: Vec::new(),
        }
    }

    /// Current payload, if one has been set
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub(crate) fn set_payload(&mut self, value: T) {
        self.payload = Some(value);
    }

    /// Edges currently incident to this vertex, in registration order
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }

    /// How many incident entries reference the given edge (2 for a self-loop)
    pub fn incidence_count(&self, edge: EdgeId) -> usize {
        self.incident.iter().filter(|e| **e == edge).count()
    }

    /// Register a back-reference for one endpoint slot.
    ///
    /// Not idempotent: one call per slot occupied, so a self-loop
    /// registers twice.
    pub(crate) fn register_incident(&mut self, edge: EdgeId) {
        self.incident.push(edge);
    }

    /// Drop the back-reference for one endpoint slot.
    ///
    /// Removes the first matching entry only; returns `false` when the
    /// edge was not registered.
    pub(crate) fn unregister_incident(&mut self, edge: EdgeId) -> bool {
        match self.incident.iter().position(|e| *e == edge) {
            Some(pos) => {
                self.incident.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for Vertex<T> {
    fn default() -> Self {
        Vertex::new()
    }
}
