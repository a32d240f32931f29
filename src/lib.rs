#![forbid(unsafe_code)]
//! Composition engine for C call expressions
//!
//! `cweave` builds C source text that calls into a foreign header's
//! functions. A caller composes an invocation graph bottom-up (innermost
//! calls first), then renders it into three separated artifacts:
//!
//! - **declarations**: include/macro lines needed once, deduplicated by
//!   node identity,
//! - **computation**: ordered `type name = call(args);` statements, each
//!   value computed exactly once at the point of first demand,
//! - **reference**: the identifier an enclosing expression uses to name a
//!   computed value.
//!
//! The engine performs no validation of call names or type selectors
//! against the real header; well-formedness of the emitted text is the
//! downstream C compiler's concern.
//!
//! ```
//! use cweave::Graph;
//!
//! # fn main() -> Result<(), cweave::ComposeError> {
//! let mut graph = Graph::new();
//! let test_h = graph.namespace("test.h");
//! let size = graph.call(test_h, "goo").returns("size_t")?;
//! let result = graph.call(test_h, "foo").arg(size).returns("int")?;
//!
//! let rendered = graph.render(result)?;
//! assert_eq!(rendered.declarations, "#include <test.h>");
//! assert_eq!(rendered.computation, "size_t var2 = goo();\nint var3 = foo(var2);");
//! assert_eq!(rendered.reference, "var3");
//! # Ok(())
//! # }
//! ```
//!
//! ## Panic Policy
//!
//! Production code returns `Result` and propagates with `?`; `.unwrap()`
//! and `.expect()` are confined to test code.

pub mod config;
pub mod ctype;
pub mod error;
pub mod graph;
pub mod render;
pub mod symbols;

pub use config::ComposeConfig;
pub use ctype::CType;
pub use error::ComposeError;
pub use graph::{Graph, NodeId, PendingCall};
pub use render::{RenderSession, Rendered};
pub use symbols::SymbolAllocator;
