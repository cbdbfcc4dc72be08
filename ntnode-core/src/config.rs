//! Node construction settings

use crate::escape::Charset;

/// What to do when a bare-IRI constructor is handed a `<...>` token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BracketedIriPolicy {
    /// Escape the whole input, brackets included, and store it without
    /// re-wrapping.
    ///
    /// Kept for compatibility with data produced by earlier loaders. The
    /// brackets end up escaped, so the stored text does not start with `<`.
    #[default]
    Legacy,
    /// Strip one outer `<`/`>` pair, escape the interior and re-wrap it
    Unwrap,
}

/// Configuration for building nodes from bare values
///
/// # Example
///
/// ```
/// use ntnode_core::{BracketedIriPolicy, Charset, IriNode, NodeConfig, NoopSink};
///
/// let config = NodeConfig::new()
///     .with_charset(Charset::Ascii)
///     .with_bracketed_iri(BracketedIriPolicy::Unwrap);
///
/// let node = IriNode::new_with("http://example.org/ü", &config, &mut NoopSink);
/// assert_eq!(node.text(), "<http://example.org/\\u00FC>");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeConfig {
    /// Which characters may pass through escaping untouched
    pub charset: Charset,

    /// Handling of bracketed input on the bare-IRI path
    pub bracketed_iri: BracketedIriPolicy,
}

impl NodeConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the escaping charset
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Set the bracketed-input policy
    pub fn with_bracketed_iri(mut self, policy: BracketedIriPolicy) -> Self {
        self.bracketed_iri = policy;
        self
    }
}
