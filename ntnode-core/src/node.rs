//! The `Node` sum type over every term kind
//!
//! A [`Node`] is what triples, quads, indexes and sets hold. Every kind
//! carries its own canonical N-Triples string, and all cross-kind behavior is
//! defined on that string:
//!
//! - `text()` is the canonical string
//! - `Ord` is code-point lexicographic order of `text()`
//! - `Eq` requires the same kind and the same `text()`
//! - `Hash` hashes `text()` only
//!
//! The leading characters of the canonical forms (`<`, `_:`, `"`, `?`) are
//! disjoint, so for well-formed nodes ordering by text alone is already
//! consistent with equality. The kind tag only breaks ties between
//! contract-violating verbatim tokens.

use crate::error::{NtError, Result};
use crate::{BlankNode, IriNode, LiteralNode, VariableNode};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Kind of an RDF term
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    Iri,
    Blank,
    Literal,
    Variable,
}

/// An RDF term of any kind
///
/// # Example
///
/// ```
/// use ntnode_core::{IriNode, LiteralNode, Node};
///
/// let mut nodes = vec![
///     Node::from(LiteralNode::new("z")),
///     Node::from(IriNode::new("http://example.org/b")),
///     Node::from_ntriples("_:b0").unwrap(),
///     Node::from(IriNode::new("http://example.org/a")),
/// ];
/// nodes.sort();
///
/// let texts: Vec<_> = nodes.iter().map(Node::text).collect();
/// assert_eq!(
///     texts,
///     ["\"z\"", "<http://example.org/a>", "<http://example.org/b>", "_:b0"]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Node {
    /// IRI (`<...>`)
    Iri(IriNode),
    /// Blank node (`_:label`)
    Blank(BlankNode),
    /// Literal (`"..."`, with optional `@lang` or `^^<dt>`)
    Literal(LiteralNode),
    /// Variable (`?name`)
    Variable(VariableNode),
}

impl Node {
    /// Classify a single N-Triples term token by its leading character
    ///
    /// The token is stored verbatim in the matching kind. This does not parse
    /// whole statements; the caller has already split the line into terms.
    pub fn from_ntriples(token: impl AsRef<str>) -> Result<Self> {
        let token = token.as_ref();
        match token.chars().next() {
            None => Err(NtError::EmptyTerm),
            Some('<') => Ok(Node::Iri(IriNode::from_ntriples(token))),
            Some('"') => Ok(Node::Literal(LiteralNode::from_ntriples(token))),
            Some('?') | Some('$') => Ok(Node::Variable(VariableNode::from_ntriples(token))),
            Some('_') if token.starts_with("_:") => Ok(Node::Blank(BlankNode::from_ntriples(token))),
            Some(_) => Err(NtError::UnknownTerm(token.to_string())),
        }
    }

    /// Get the kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Iri(_) => NodeKind::Iri,
            Node::Blank(_) => NodeKind::Blank,
            Node::Literal(_) => NodeKind::Literal,
            Node::Variable(_) => NodeKind::Variable,
        }
    }

    /// Get the canonical N-Triples form
    pub fn text(&self) -> &str {
        match self {
            Node::Iri(n) => n.text(),
            Node::Blank(n) => n.text(),
            Node::Literal(n) => n.text(),
            Node::Variable(n) => n.text(),
        }
    }

    /// Get the bare value: unbracketed IRI, blank node label, unescaped
    /// lexical value or variable name
    ///
    /// Fails only when an IRI or literal holds a malformed escape.
    pub fn label(&self) -> Result<String> {
        match self {
            Node::Iri(n) => n.label(),
            Node::Blank(n) => Ok(n.label().to_string()),
            Node::Literal(n) => n.label(),
            Node::Variable(n) => Ok(n.label().to_string()),
        }
    }

    /// Check if this is an IRI node
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Check if this is a variable
    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable(_))
    }

    /// Try to get as IRI node
    pub fn as_iri(&self) -> Option<&IriNode> {
        match self {
            Node::Iri(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get as blank node
    pub fn as_blank(&self) -> Option<&BlankNode> {
        match self {
            Node::Blank(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get as literal
    pub fn as_literal(&self) -> Option<&LiteralNode> {
        match self {
            Node::Literal(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get as variable
    pub fn as_variable(&self) -> Option<&VariableNode> {
        match self {
            Node::Variable(n) => Some(n),
            _ => None,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.text() == other.text()
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text().hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text()
            .cmp(other.text())
            .then_with(|| self.kind().cmp(&other.kind()))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for Node {
    type Err = NtError;

    fn from_str(s: &str) -> Result<Self> {
        Node::from_ntriples(s)
    }
}

impl From<IriNode> for Node {
    fn from(n: IriNode) -> Self {
        Node::Iri(n)
    }
}

impl From<BlankNode> for Node {
    fn from(n: BlankNode) -> Self {
        Node::Blank(n)
    }
}

impl From<LiteralNode> for Node {
    fn from(n: LiteralNode) -> Self {
        Node::Literal(n)
    }
}

impl From<VariableNode> for Node {
    fn from(n: VariableNode) -> Self {
        Node::Variable(n)
    }
}
