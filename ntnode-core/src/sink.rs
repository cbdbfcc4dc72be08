//! DiagnosticSink trait for reporting permissive-construction events
//!
//! Node construction never fails. When it has to paper over questionable
//! input (an empty IRI, or a "bare" IRI that already carries brackets) it
//! reports a [`Diagnostic`] to a sink supplied by the caller instead of
//! writing to a process-wide logger.
//!
//! # Design
//!
//! Constructors call `report()` on a sink. The sink can be:
//! - `TracingSink`: Forwards to `tracing` (the default used by `IriNode::new`)
//! - `CollectingSink`: Keeps every diagnostic for later inspection
//! - `NoopSink`: Drops everything

use std::fmt;
use std::sync::Arc;

/// How serious a diagnostic is
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Input was odd but the resulting node is well formed
    Notice,
    /// Input was probably misused; the resulting node may not be what the caller meant
    Warning,
}

/// A single event reported during node construction
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// Empty string passed as a bare IRI; the node became `<>`
    EmptyIri,
    /// Bracketed token passed where a bare IRI was expected
    BracketedIri {
        /// The input as supplied
        input: Arc<str>,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::EmptyIri => Severity::Notice,
            Diagnostic::BracketedIri { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptyIri => write!(f, "Empty string not allowed as IRI"),
            Diagnostic::BracketedIri { input } => write!(
                f,
                "Bare IRI expected, was supplied something with brackets <>: {}",
                input
            ),
        }
    }
}

/// Receiver for construction diagnostics
///
/// # Example
///
/// ```
/// use ntnode_core::{CollectingSink, Diagnostic, IriNode, NodeConfig};
///
/// let mut sink = CollectingSink::new();
/// let node = IriNode::new_with("", &NodeConfig::default(), &mut sink);
///
/// assert_eq!(node.text(), "<>");
/// assert_eq!(sink.diagnostics(), &[Diagnostic::EmptyIri]);
/// ```
pub trait DiagnosticSink {
    /// Called once per diagnostic, in the order they occur
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// A sink that forwards diagnostics to `tracing`
///
/// Notices go out at `DEBUG`, warnings at `WARN`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::EmptyIri => {
                tracing::debug!("Empty string not allowed as IRI, using <>");
            }
            Diagnostic::BracketedIri { input } => {
                tracing::warn!(
                    input = %input,
                    "Bare IRI expected, was supplied something with brackets <>"
                );
            }
        }
    }
}

/// A sink that keeps every diagnostic
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Create an empty collecting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check if any reported diagnostic is at least `severity`
    pub fn has_at_least(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity() >= severity)
    }

    /// Consume the sink, returning what it collected
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// A sink that discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
