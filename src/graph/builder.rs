//! Build invocations: a pending call accumulates arguments, then exactly one
//! return-type selection seals it into a node.

use crate::ctype::CType;
use crate::error::ComposeError;

use super::{Graph, NodeId, NodeKind};

/// A call captured against a namespace, waiting for its return type.
///
/// Produced by [`Graph::call`]; consumed by [`returns`](Self::returns) or
/// [`returns_type`](Self::returns_type). Arguments render in the order they
/// are appended, and that order is fixed once the call is sealed.
#[must_use = "a pending call emits nothing until a return type seals it"]
pub struct PendingCall<'g> {
    graph: &'g mut Graph,
    namespace: NodeId,
    call: String,
    args: Vec<NodeId>,
}

impl<'g> PendingCall<'g> {
    pub(crate) fn new(graph: &'g mut Graph, namespace: NodeId, call: String) -> Self {
        Self {
            graph,
            namespace,
            call,
            args: Vec::new(),
        }
    }

    /// Append one argument node
    pub fn arg(mut self, arg: NodeId) -> Self {
        self.args.push(arg);
        self
    }

    /// Append several argument nodes, preserving their order
    pub fn args(mut self, args: impl IntoIterator<Item = NodeId>) -> Self {
        self.args.extend(args);
        self
    }

    /// Seal the call with a selector in the trailing-marker convention:
    /// `cesk_set_t_` resolves to `cesk_set_t*`, `int` stays `int`.
    ///
    /// The selector is accepted uncritically; only the marker run is
    /// interpreted.
    pub fn returns(self, selector: &str) -> Result<NodeId, ComposeError> {
        let marker = self.graph.config().pointer_marker;
        let ty = CType::parse_selector(selector, marker);
        self.returns_type(ty)
    }

    /// Seal the call with an explicit type descriptor.
    pub fn returns_type(self, ty: CType) -> Result<NodeId, ComposeError> {
        let Self {
            graph,
            namespace,
            call,
            args,
        } = self;
        if !matches!(graph.node(namespace)?.kind, NodeKind::Namespace { .. }) {
            return Err(ComposeError::NotANamespace(namespace));
        }
        for &arg in &args {
            graph.node(arg)?;
        }
        tracing::trace!(call = %call, args = args.len(), ty = %ty, "seal invocation");
        Ok(graph.push(NodeKind::Invocation {
            namespace,
            call,
            args,
            ty,
        }))
    }
}
