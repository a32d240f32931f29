//! Three-phase rendering: declarations, computation, reference.
//!
//! A [`RenderSession`] borrows a graph and tracks which node identities have
//! emitted per phase, so a node reachable from several parents contributes
//! exactly once no matter how the caller interleaves phase calls. Statement
//! order is first-demand order under a depth-first, argument-order walk from
//! whichever node renders first; a node shared by two branches appears at
//! the position dictated by whichever branch renders first. That order is
//! part of the engine's contract, not an implementation accident.

mod writer;

use std::collections::HashSet;

use crate::error::ComposeError;
use crate::graph::{Graph, NodeId, NodeKind};

use writer::CodeWriter;

/// The three artifacts produced for one root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Include/macro lines needed once, deduplicated by node identity
    pub declarations: String,
    /// Ordered statements that must run before the value is usable
    pub computation: String,
    /// Identifier naming the computed value inside an enclosing expression
    pub reference: String,
}

impl Rendered {
    /// Assemble declarations and computation into one embeddable block.
    /// The reference stays separate: it is a substring for the caller's own
    /// statement, not a line of output.
    pub fn assemble(&self) -> String {
        format!("{}\n{}", self.declarations, self.computation)
    }
}

/// Per-phase emission bookkeeping for one rendering pass over a graph.
///
/// Within a session, `declarations` and `computation` are once-only per node
/// identity: the second demand returns empty text. A fresh session renders
/// the same graph from scratch.
#[derive(Debug)]
pub struct RenderSession<'g> {
    graph: &'g Graph,
    declared: HashSet<NodeId>,
    computed: HashSet<NodeId>,
}

impl<'g> RenderSession<'g> {
    /// Start a session over `graph` with nothing emitted yet
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            declared: HashSet::new(),
            computed: HashSet::new(),
        }
    }

    /// Emit the declaration lines `id` depends on, once per session.
    ///
    /// An invocation contributes its namespace's include first, then each
    /// argument's declarations in argument order. A second demand on an
    /// already-covered node returns empty text.
    #[tracing::instrument(skip_all, fields(node = %id))]
    pub fn declarations(&mut self, id: NodeId) -> Result<String, ComposeError> {
        let mut out = CodeWriter::new();
        self.emit_declarations(id, &mut out)?;
        Ok(out.finish())
    }

    /// Emit the computation statements `id` depends on, once per session.
    ///
    /// Every argument's assignment lands strictly before the statement that
    /// consumes it; the consuming statement names arguments by their
    /// reference tokens, which is what lets one value feed many consumers
    /// while being computed exactly once, at the point of first demand.
    #[tracing::instrument(skip_all, fields(node = %id))]
    pub fn computation(&mut self, id: NodeId) -> Result<String, ComposeError> {
        let mut out = CodeWriter::new();
        self.emit_computation(id, &mut out)?;
        Ok(out.finish())
    }

    /// The symbol `id`'s value goes by; empty for declaration nodes.
    ///
    /// Never consults or mutates session state, so it may be called any
    /// number of times, before or after the other phases.
    pub fn reference(&self, id: NodeId) -> Result<&'g str, ComposeError> {
        self.graph.reference(id)
    }

    fn emit_declarations(&mut self, id: NodeId, out: &mut CodeWriter) -> Result<(), ComposeError> {
        if !self.declared.insert(id) {
            return Ok(());
        }
        let graph = self.graph;
        match &graph.node(id)?.kind {
            NodeKind::Declaration { code } => out.line(code),
            NodeKind::Namespace { include } => self.emit_declarations(*include, out)?,
            NodeKind::Invocation { namespace, args, .. } => {
                self.emit_declarations(*namespace, out)?;
                for &arg in args {
                    self.emit_declarations(arg, out)?;
                }
            }
        }
        Ok(())
    }

    fn emit_computation(&mut self, id: NodeId, out: &mut CodeWriter) -> Result<(), ComposeError> {
        if !self.computed.insert(id) {
            return Ok(());
        }
        let graph = self.graph;
        match &graph.node(id)?.kind {
            // Declarations and namespaces compute nothing; they only exist
            // in the declaration phase.
            NodeKind::Declaration { .. } | NodeKind::Namespace { .. } => {}
            NodeKind::Invocation { call, args, ty, .. } => {
                for &arg in args {
                    self.emit_computation(arg, out)?;
                }
                let mut references = Vec::with_capacity(args.len());
                for &arg in args {
                    references.push(graph.reference(arg)?);
                }
                let symbol = &graph.node(id)?.symbol;
                out.line(&format!("{ty} {symbol} = {call}({});", references.join(", ")));
            }
        }
        Ok(())
    }
}

impl Graph {
    /// Render `root`'s three artifacts with a fresh session: declarations,
    /// then computation, then the reference token.
    #[tracing::instrument(skip_all, fields(root = %root))]
    pub fn render(&self, root: NodeId) -> Result<Rendered, ComposeError> {
        let mut session = RenderSession::new(self);
        let declarations = session.declarations(root)?;
        let computation = session.computation(root)?;
        let reference = self.reference(root)?.to_string();
        tracing::debug!(
            decl_lines = declarations.lines().count(),
            statements = computation.lines().count(),
            "rendered invocation graph"
        );
        Ok(Rendered {
            declarations,
            computation,
            reference,
        })
    }
}
