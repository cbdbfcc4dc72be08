//! Canonical RDF term nodes in N-Triples form
//!
//! This crate provides the in-memory representation of RDF terms used by
//! N-Triples / N-Quads loaders, together with the escaping codec that maps
//! between bare values and their serialized tokens.
//!
//! # Key Design Principles
//!
//! 1. **One string per node** - Every node stores exactly its canonical
//!    N-Triples token (`<http://example.org/x>`, `_:b0`, `"v"@en`, `?x`).
//!    Bare values are recomputed on demand via `label()`.
//!
//! 2. **Identity is textual** - Equality, hashing and ordering are defined
//!    over the canonical token, so sorting, deduplication and indexing work
//!    uniformly across mixed term kinds.
//!
//! 3. **Permissive construction** - Constructors never fail. Odd input is
//!    reported to a caller-supplied [`DiagnosticSink`] instead.
//!
//! 4. **Lossless escaping** - `label()` is the exact inverse of construction:
//!    `IriNode::new(s).label() == Ok(s)` for every bare IRI `s`.
//!
//! # Example
//!
//! ```
//! use ntnode_core::{IriNode, Node};
//!
//! let node = IriNode::new("http://example.org/a b");
//! assert_eq!(node.text(), "<http://example.org/a\\u0020b>");
//! assert_eq!(node.label().unwrap(), "http://example.org/a b");
//!
//! let parsed = Node::from_ntriples("<http://example.org/a\\u0020b>").unwrap();
//! assert_eq!(parsed, Node::from(node));
//! ```

pub mod config;
pub mod error;
pub mod escape;
mod iri;
mod node;
mod sink;
mod term;

pub use config::{BracketedIriPolicy, NodeConfig};
pub use error::{NtError, Result};
pub use escape::{escape_iri, escape_iri_with, escape_literal, escape_literal_with, unescape, Charset};
pub use iri::IriNode;
pub use node::{Node, NodeKind};
pub use sink::{CollectingSink, Diagnostic, DiagnosticSink, NoopSink, Severity, TracingSink};
pub use term::{Annotation, BlankNode, LiteralNode, VariableNode};
