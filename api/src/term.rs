//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in memory.
//!
//! I provide the [`Term`] enum,
//! and its auxiliary types [`Literal`], [`Quad`], [`BaseDirection`] and [`TermKind`].
//!
//! All text is stored as [`MownStr`],
//! so that a term can either borrow from the string it was decoded from,
//! or own its data (see [`Term::into_owned`]).
use mownstr::MownStr;

mod _literal;
pub use _literal::*;
mod _quad;
pub use _quad::*;

pub mod base_direction;
pub use base_direction::{BaseDirection, InvalidBaseDirection};

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// A SPARQL or Notation3 variable
    Variable,
    /// The [default graph](https://www.w3.org/TR/rdf11-concepts/#dfn-default-graph) of a dataset
    DefaultGraph,
    /// An RDF-star [quoted triple](https://www.w3.org/2021/12/rdf-star.html#dfn-quoted),
    /// possibly with a graph name
    Quad,
}

/// An RDF term, as a closed set of variants.
///
/// Two terms are equal if they have the same variant and the same content,
/// regardless of whether their text is borrowed or owned.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Term<'a> {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode(MownStr<'a>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes),
    /// identified by its local label (without `_:`)
    BlankNode(MownStr<'a>),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal(Literal<'a>),
    /// A variable, identified by its name (without `?`)
    Variable(MownStr<'a>),
    /// The default graph
    DefaultGraph,
    /// A quoted triple or quad
    Quad(Box<Quad<'a>>),
}

impl<'a> Term<'a> {
    /// Build a named node from its IRI.
    pub fn named_node<T: Into<MownStr<'a>>>(iri: T) -> Self {
        Term::NamedNode(iri.into())
    }

    /// Build a blank node from its label.
    pub fn blank_node<T: Into<MownStr<'a>>>(label: T) -> Self {
        Term::BlankNode(label.into())
    }

    /// Build a variable from its name.
    pub fn variable<T: Into<MownStr<'a>>>(name: T) -> Self {
        Term::Variable(name.into())
    }

    /// Build a literal with an explicit datatype IRI.
    pub fn literal_dt<T, U>(value: T, datatype: U) -> Self
    where
        T: Into<MownStr<'a>>,
        U: Into<MownStr<'a>>,
    {
        Term::Literal(Literal::new_dt(value, datatype))
    }

    /// Build a language-tagged literal, with an optional base direction.
    pub fn literal_lang<T, U>(value: T, language: U, direction: Option<BaseDirection>) -> Self
    where
        T: Into<MownStr<'a>>,
        U: Into<MownStr<'a>>,
    {
        Term::Literal(Literal::new_lang(value, language, direction))
    }

    /// Build a quoted quad.
    pub fn quad(subject: Self, predicate: Self, object: Self, graph: Self) -> Self {
        Term::Quad(Box::new(Quad::new(subject, predicate, object, graph)))
    }

    /// Build a quoted triple, i.e. a quoted quad in the default graph.
    pub fn triple(subject: Self, predicate: Self, object: Self) -> Self {
        Term::Quad(Box::new(Quad::triple(subject, predicate, object)))
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
            Term::Variable(_) => TermKind::Variable,
            Term::DefaultGraph => TermKind::DefaultGraph,
            Term::Quad(_) => TermKind::Quad,
        }
    }

    /// Whether this term is the default graph.
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    /// The IRI, blank node label or variable name of this term,
    /// or the lexical form if it is a literal.
    ///
    /// The default graph and quoted quads have no value.
    pub fn value(&self) -> Option<&str> {
        match self {
            Term::NamedNode(txt) | Term::BlankNode(txt) | Term::Variable(txt) => Some(&txt[..]),
            Term::Literal(lit) => Some(lit.value()),
            Term::DefaultGraph | Term::Quad(_) => None,
        }
    }

    /// If this term is a literal, return it.
    pub fn as_literal(&self) -> Option<&Literal<'a>> {
        if let Term::Literal(lit) = self {
            Some(lit)
        } else {
            None
        }
    }

    /// If this term is a quoted quad, return it.
    pub fn as_quad(&self) -> Option<&Quad<'a>> {
        if let Term::Quad(quad) = self {
            Some(&**quad)
        } else {
            None
        }
    }

    /// Copy every borrowed text of this term,
    /// so that it no longer depends on the data it was built from.
    pub fn into_owned(self) -> Term<'static> {
        match self {
            Term::NamedNode(iri) => Term::NamedNode(ensure_owned(iri)),
            Term::BlankNode(label) => Term::BlankNode(ensure_owned(label)),
            Term::Literal(lit) => Term::Literal(lit.into_owned()),
            Term::Variable(name) => Term::Variable(ensure_owned(name)),
            Term::DefaultGraph => Term::DefaultGraph,
            Term::Quad(quad) => Term::Quad(Box::new(quad.into_owned())),
        }
    }
}

impl<'a> From<Quad<'a>> for Term<'a> {
    fn from(quad: Quad<'a>) -> Self {
        Term::Quad(Box::new(quad))
    }
}

impl<'a> From<Literal<'a>> for Term<'a> {
    fn from(lit: Literal<'a>) -> Self {
        Term::Literal(lit)
    }
}

pub(crate) fn ensure_owned(m: MownStr) -> MownStr<'static> {
    MownStr::from(m.to_string())
}

#[cfg(test)]
mod test;
