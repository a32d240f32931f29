//! The invocation graph: an append-only arena of composition nodes.
//!
//! Nodes are created through [`Graph`] and addressed by copyable [`NodeId`]
//! handles; sharing a subexpression between two consumers is sharing its id.
//! The graph only ever grows; render-time bookkeeping lives in
//! [`RenderSession`](crate::render::RenderSession), so a long-lived graph can
//! be rendered any number of times.

mod builder;

pub use builder::PendingCall;

use std::fmt;

use crate::config::ComposeConfig;
use crate::ctype::CType;
use crate::error::ComposeError;
use crate::symbols::SymbolAllocator;

/// Handle to a node, valid only for the graph that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node record: the per-variant payload plus the symbol assigned at
/// construction.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) symbol: String,
}

#[derive(Debug)]
pub(crate) enum NodeKind {
    /// A raw, already-formed declaration line (include directive, macro).
    /// Contributes only to the declaration phase; it is not a value.
    Declaration { code: String },
    /// One external header. Owns the single include declaration shared by
    /// every invocation built through it.
    Namespace { include: NodeId },
    /// `type symbol = call(args);` against a namespace.
    Invocation {
        namespace: NodeId,
        call: String,
        args: Vec<NodeId>,
        ty: CType,
    },
}

/// Arena of composition nodes plus the symbol allocator they draw from.
///
/// A graph is built bottom-up: innermost calls first, each returning a
/// [`NodeId`] that outer calls consume as arguments. Call names are plain
/// strings and are accepted unchecked; the engine knows nothing about the
/// foreign header's real symbol table.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    allocator: SymbolAllocator,
    config: ComposeConfig,
}

impl Graph {
    /// Create an empty graph with the default configuration
    pub fn new() -> Self {
        Self::with_config(ComposeConfig::default())
    }

    /// Create an empty graph with an explicit configuration
    pub fn with_config(config: ComposeConfig) -> Self {
        Self {
            nodes: Vec::new(),
            allocator: SymbolAllocator::new(config.symbol_prefix.clone()),
            config,
        }
    }

    /// Wrap a raw declaration line (an include directive or a macro) as a
    /// leaf node. The line is emitted verbatim, once, in the declaration
    /// phase; the node has no computation and no reference.
    pub fn declaration(&mut self, code: impl Into<String>) -> NodeId {
        self.push(NodeKind::Declaration { code: code.into() })
    }

    /// Register an external header. Eagerly owns one `#include <name>`
    /// declaration node; every invocation built through this namespace
    /// shares that single include.
    pub fn namespace(&mut self, name: impl Into<String>) -> NodeId {
        let include = self.declaration(format!("#include <{}>", name.into()));
        self.push(NodeKind::Namespace { include })
    }

    /// Begin an invocation of `call` against `namespace`.
    ///
    /// Any call name is accepted; nothing checks that the header really
    /// declares it. The returned builder collects arguments and is sealed
    /// by a return-type selection.
    pub fn call(&mut self, namespace: NodeId, call: impl Into<String>) -> PendingCall<'_> {
        PendingCall::new(self, namespace, call.into())
    }

    /// The symbol a node's computed value goes by; empty for declaration
    /// nodes, which are not values. Callable any number of times without
    /// touching emission state.
    pub fn reference(&self, id: NodeId) -> Result<&str, ComposeError> {
        let node = self.node(id)?;
        Ok(match node.kind {
            NodeKind::Declaration { .. } => "",
            _ => &node.symbol,
        })
    }

    /// Number of nodes constructed so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn config(&self) -> &ComposeConfig {
        &self.config
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, ComposeError> {
        self.nodes.get(id.0).ok_or(ComposeError::UnknownNode(id))
    }

    pub(crate) fn push(&mut self, kind: NodeKind) -> NodeId {
        let symbol = self.allocator.allocate();
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { kind, symbol });
        id
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
