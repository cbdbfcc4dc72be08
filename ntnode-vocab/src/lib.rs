//! RDF vocabulary constants
//!
//! Bare (unbracketed, unescaped) IRIs for the handful of RDF and XSD terms
//! that node construction needs to know about.
//!
//! # Organization
//!
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    ///
    /// Datatype of every language-tagged literal.
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    ///
    /// Datatype of a literal with neither a language tag nor an explicit datatype.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}
