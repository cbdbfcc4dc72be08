//! Non-IRI term kinds: blank node, literal, variable
//!
//! Like [`IriNode`], each kind is a single canonical N-Triples string:
//! - Blank node: `_:label`
//! - Literal: `"escaped lexical"`, optionally followed by `@lang` or `^^<datatype>`
//! - Variable: `?name`

use crate::config::NodeConfig;
use crate::error::Result;
use crate::escape::{escape_literal_with, unescape};
use crate::IriNode;
use ntnode_vocab::{rdf, xsd};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Blank node in N-Triples form (`_:label`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Create a blank node from a label
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(format!("_:{}", label.as_ref())))
    }

    /// Create a blank node from an N-Triples token (including `_:`), verbatim
    pub fn from_ntriples(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    /// Get the full N-Triples representation (`_:label`)
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Get the label (without `_:` prefix)
    pub fn label(&self) -> &str {
        self.0.strip_prefix("_:").unwrap_or(&self.0)
    }
}

/// Language tag or datatype following a literal's closing quote
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Annotation<'a> {
    /// Plain literal
    #[default]
    None,
    /// Language-tagged literal (`@en`)
    Language(&'a str),
    /// Typed literal (`^^<...>`)
    Datatype(&'a IriNode),
}

/// Literal in N-Triples form (`"value"`, `"value"@lang`, `"value"^^<dt>`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiteralNode(Arc<str>);

impl LiteralNode {
    /// Create a plain string literal
    pub fn new(value: impl AsRef<str>) -> Self {
        Self::new_with(value, Annotation::None, &NodeConfig::default())
    }

    /// Create a language-tagged literal
    pub fn with_language(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Self::new_with(
            value,
            Annotation::Language(lang.as_ref()),
            &NodeConfig::default(),
        )
    }

    /// Create a typed literal
    pub fn with_datatype(value: impl AsRef<str>, datatype: &IriNode) -> Self {
        Self::new_with(value, Annotation::Datatype(datatype), &NodeConfig::default())
    }

    /// Create a literal from a bare lexical value
    ///
    /// The value is escaped per `config.charset`; the annotation is appended
    /// as-is (datatypes are already in N-Triples form).
    pub fn new_with(value: impl AsRef<str>, annotation: Annotation<'_>, config: &NodeConfig) -> Self {
        let escaped = escape_literal_with(value.as_ref(), config.charset);
        let text = match annotation {
            Annotation::None => format!("\"{}\"", escaped),
            Annotation::Language(lang) => format!("\"{}\"@{}", escaped, lang),
            Annotation::Datatype(dt) => format!("\"{}\"^^{}", escaped, dt.text()),
        };
        Self(Arc::from(text))
    }

    /// Create a literal from an N-Triples token, verbatim
    pub fn from_ntriples(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    /// Get the literal in N-Triples notation
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Split into (escaped lexical form, annotation suffix)
    ///
    /// The closing quote is the last `"` in the text: quotes inside the
    /// lexical form are always escaped, and tags and datatype IRIs cannot
    /// contain a raw `"`.
    fn parts(&self) -> (&str, &str) {
        let body = self.0.strip_prefix('"').unwrap_or(&self.0);
        match body.rfind('"') {
            Some(end) => (&body[..end], &body[end + 1..]),
            None => (body, ""),
        }
    }

    /// Get the lexical value with escaping undone
    pub fn label(&self) -> Result<String> {
        Ok(unescape(self.parts().0)?.into_owned())
    }

    /// Language tag, if this is a language-tagged literal
    pub fn language(&self) -> Option<&str> {
        self.parts().1.strip_prefix('@')
    }

    /// Explicit datatype, if this is a typed literal
    pub fn datatype(&self) -> Option<IriNode> {
        self.parts().1.strip_prefix("^^").map(IriNode::from_ntriples)
    }

    /// Datatype under RDF 1.1 rules
    ///
    /// The explicit datatype if present; otherwise `rdf:langString` for
    /// tagged literals and `xsd:string` for plain ones.
    pub fn effective_datatype(&self) -> IriNode {
        if let Some(dt) = self.datatype() {
            dt
        } else if self.language().is_some() {
            IriNode::new(rdf::LANG_STRING)
        } else {
            IriNode::new(xsd::STRING)
        }
    }
}

/// Query variable (`?name`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableNode(Arc<str>);

impl VariableNode {
    /// Create a variable from its name (without `?`)
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(format!("?{}", name.as_ref())))
    }

    /// Create a variable from a token (including `?` or `$`), verbatim
    pub fn from_ntriples(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Get the name (without `?` or `$`)
    pub fn label(&self) -> &str {
        self.0.strip_prefix(['?', '$']).unwrap_or(&self.0)
    }
}

macro_rules! impl_text_traits {
    ($($ty:ty),*) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    )*};
}

impl_text_traits!(BlankNode, LiteralNode, VariableNode);
