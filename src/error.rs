//! Error types for graph construction and rendering.
//!
//! The engine deliberately validates almost nothing: unknown call names and
//! implausible type selectors are accepted and only surface when the emitted
//! text reaches a C compiler. The errors here cover the one thing a typed
//! API must check, node handles used with a graph that never issued them.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while building or rendering an invocation graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("unknown node {0}; handles are only valid for the graph that created them")]
    UnknownNode(NodeId),

    #[error("node {0} is not a namespace")]
    NotANamespace(NodeId),
}
