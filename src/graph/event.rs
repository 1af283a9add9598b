//! Change events for structural mutations
//!
//! Every mutating operation emits exactly one event per logical property it
//! changes, synchronously, in the call stack of the mutation.

use super::types::{EdgeId, Slot, VertexId};

/// A structural change to a vertex, edge, or graph collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A vertex's payload was replaced
    PayloadChanged { vertex: VertexId },

    /// An entry was added to or removed from a vertex's incident-edge list
    IncidentEdgesChanged { vertex: VertexId, edge: EdgeId },

    /// An endpoint slot of an edge was reassigned
    EndpointChanged {
        edge: EdgeId,
        slot: Slot,
        from: Option<VertexId>,
        to: Option<VertexId>,
    },

    /// A graph's vertex collection gained or lost a member
    VerticesChanged { vertex: VertexId, added: bool },

    /// A graph's edge collection gained or lost a member
    EdgesChanged { edge: EdgeId, added: bool },
}

impl ChangeEvent {
    /// Stable name of the logical property this event refers to
    pub fn property(&self) -> &'static str {
        match self {
            ChangeEvent::PayloadChanged { .. } => "payload",
            ChangeEvent::IncidentEdgesChanged { .. } => "incident-edges",
            ChangeEvent::EndpointChanged { .. } => "endpoint",
            ChangeEvent::VerticesChanged { .. } => "vertices",
            ChangeEvent::EdgesChanged { .. } => "edges",
        }
    }
}
