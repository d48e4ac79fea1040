//! IRIs of the few vocabulary terms that literals depend on.
//!
//! # Example use
//! ```
//! use rdfstr_api::ns::{rdf, xsd};
//! use rdfstr_api::term::Term;
//!
//! let hello = Term::literal_lang("hello", "en", None);
//! assert_eq!(hello.as_literal().unwrap().datatype(), rdf::langString);
//! let plain = Term::literal_dt("hello", xsd::string);
//! assert_eq!(plain.as_literal().unwrap().datatype(), xsd::string);
//! ```

/// The standard `rdf:` namespace.
#[allow(non_upper_case_globals)]
pub mod rdf {
    /// The namespace IRI itself.
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// Datatype of [language-tagged strings](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
    pub const langString: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// Datatype of [directional language-tagged strings](https://www.w3.org/TR/rdf12-concepts/#dfn-dir-lang-string).
    pub const dirLangString: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#dirLangString";
}

/// The standard `xsd:` namespace.
#[allow(non_upper_case_globals)]
pub mod xsd {
    /// The namespace IRI itself.
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Datatype of plain literals.
    pub const string: &str = "http://www.w3.org/2001/XMLSchema#string";
}

/// Whether `iri` is one of the datatypes implied by the shape of a literal
/// (plain or language-tagged), and therefore never written explicitly.
pub fn is_implicit_datatype(iri: &str) -> bool {
    iri == xsd::string || iri == rdf::langString || iri == rdf::dirLangString
}
