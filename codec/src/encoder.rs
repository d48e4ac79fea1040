//! I encode terms into the string notation.
//!
//! Encoding never fails, and is the inverse of [decoding](crate::decoder),
//! except that language tags are lower-cased when decoded but written as is.
use std::fmt;

use rdfstr_api::term::{Quad, Term};

use crate::literal::write_literal;

/// Write the given term into the given write in the string notation.
pub fn write_term<W: fmt::Write>(w: &mut W, term: &Term) -> fmt::Result {
    match term {
        Term::NamedNode(iri) => w.write_str(iri),
        Term::BlankNode(label) => {
            w.write_str("_:")?;
            w.write_str(label)
        }
        Term::Literal(lit) => write_literal(w, lit),
        Term::Variable(name) => {
            w.write_char('?')?;
            w.write_str(name)
        }
        Term::DefaultGraph => Ok(()),
        Term::Quad(quad) => write_quoted(w, quad),
    }
}

/// Write the given quad into the given write as a quoted term,
/// omitting the graph name if it is the default graph.
pub fn write_quoted<W: fmt::Write>(w: &mut W, quad: &Quad) -> fmt::Result {
    w.write_str("<<")?;
    write_term(w, &quad.subject)?;
    w.write_char(' ')?;
    write_term(w, &quad.predicate)?;
    w.write_char(' ')?;
    write_term(w, &quad.object)?;
    if !quad.graph.is_default_graph() {
        w.write_char(' ')?;
        write_term(w, &quad.graph)?;
    }
    w.write_str(">>")
}

/// Convert a term to the string notation.
///
/// # Example
/// ```
/// use rdfstr_api::term::Term;
/// use rdfstr_codec::term_to_string;
///
/// let terms = [Term::named_node("http://example.org/a"), Term::blank_node("b1")];
/// let strings: Vec<String> = terms.iter().map(term_to_string).collect();
/// assert_eq!(strings, ["http://example.org/a", "_:b1"]);
/// ```
pub fn term_to_string(term: &Term) -> String {
    TermDisplay(term).to_string()
}

/// Convert a possibly absent term to the string notation.
///
/// An absent term gives `None`,
/// which must not be confused with the default graph, encoded as `Some("")`.
pub fn maybe_term_to_string(term: Option<&Term>) -> Option<String> {
    term.map(term_to_string)
}

/// Wraps a [`Term`] to display it in the string notation.
///
/// ```
/// use rdfstr_api::term::Term;
/// use rdfstr_codec::TermDisplay;
///
/// let t = Term::literal_lang("chat", "fr", None);
/// assert_eq!(format!("term {}", TermDisplay(&t)), "term \"chat\"@fr");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TermDisplay<'t, 'a>(pub &'t Term<'a>);

impl fmt::Display for TermDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_term(f, self.0)
    }
}
