//! IRI nodes
//!
//! An [`IriNode`] stores exactly one string: the IRI as it appears in
//! N-Triples, angle brackets included and forbidden characters escaped.
//! Equality, hashing and ordering all work on that string, so two nodes are
//! the same node iff they serialize identically.

use crate::config::{BracketedIriPolicy, NodeConfig};
use crate::error::Result;
use crate::escape::{escape_iri_with, unescape};
use crate::sink::{Diagnostic, DiagnosticSink, TracingSink};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Canonical form of the empty IRI
const EMPTY: &str = "<>";

/// An IRI term in N-Triples form (e.g. `<http://example.org/x>`)
///
/// # Invariants
///
/// - Built from a bare IRI, the text always starts with `<` and ends with `>`.
///   The one exception is [`BracketedIriPolicy::Legacy`], see [`IriNode::new_with`].
/// - Built with [`IriNode::from_ntriples`], the text is whatever the caller supplied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IriNode(Arc<str>);

impl IriNode {
    /// Create an IRI node from a bare IRI
    ///
    /// Assumes a valid IRI. Uses the default [`NodeConfig`] and reports
    /// diagnostics through `tracing`.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::new_with(raw, &NodeConfig::default(), &mut TracingSink)
    }

    /// Create an IRI node from a bare IRI, reporting to `sink`
    ///
    /// - An empty `raw` becomes `<>` and reports [`Diagnostic::EmptyIri`].
    /// - A `raw` without a leading `<` is escaped and wrapped in `<...>`.
    /// - A `raw` with a leading `<` reports [`Diagnostic::BracketedIri`] and is
    ///   handled per `config.bracketed_iri`. Under the default `Legacy`
    ///   policy the whole input is escaped, brackets included, and is **not**
    ///   re-wrapped, so the stored text starts with `\u003C`.
    pub fn new_with(
        raw: impl AsRef<str>,
        config: &NodeConfig,
        sink: &mut impl DiagnosticSink,
    ) -> Self {
        let raw = raw.as_ref();

        if raw.is_empty() {
            sink.report(Diagnostic::EmptyIri);
            return Self(Arc::from(EMPTY));
        }

        if !raw.starts_with('<') {
            return Self::wrap(&escape_iri_with(raw, config.charset));
        }

        sink.report(Diagnostic::BracketedIri {
            input: Arc::from(raw),
        });

        match config.bracketed_iri {
            BracketedIriPolicy::Legacy => Self(Arc::from(escape_iri_with(raw, config.charset))),
            BracketedIriPolicy::Unwrap => {
                let inner = &raw[1..];
                let inner = inner.strip_suffix('>').unwrap_or(inner);
                Self::wrap(&escape_iri_with(inner, config.charset))
            }
        }
    }

    /// Create an IRI node from an N-Triples IRI token (including `<>`)
    ///
    /// The token is stored verbatim: no validation, no escaping. The caller
    /// guarantees it is already a well-formed, escaped, bracketed IRI.
    pub fn from_ntriples(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    fn wrap(escaped: &str) -> Self {
        let mut text = String::with_capacity(escaped.len() + 2);
        text.push('<');
        text.push_str(escaped);
        text.push('>');
        Self(Arc::from(text))
    }

    /// Get the IRI in N-Triples notation (with `<>`)
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Get the bare IRI: brackets removed and escaping undone
    ///
    /// Returns an error if the stored text contains a malformed escape, which
    /// can only happen for nodes built with [`IriNode::from_ntriples`] or
    /// deserialized from untrusted data.
    pub fn label(&self) -> Result<String> {
        if self.0.eq_ignore_ascii_case(EMPTY) {
            return Ok(String::new());
        }
        let inner = self.0.strip_prefix('<').unwrap_or(&self.0);
        let inner = inner.strip_suffix('>').unwrap_or(inner);
        Ok(unescape(inner)?.into_owned())
    }

    /// Check if this is the empty IRI `<>`
    pub fn is_empty(&self) -> bool {
        &*self.0 == EMPTY
    }

    /// Check if the stored text is delimited by `<` and `>`
    pub fn is_bracketed(&self) -> bool {
        self.0.len() >= 2 && self.0.starts_with('<') && self.0.ends_with('>')
    }
}

impl std::fmt::Display for IriNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IriNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
