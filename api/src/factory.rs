//! A [`TermFactory`] is the capability through which decoders build terms.
//!
//! Decoders only orchestrate the parsing of strings;
//! the actual construction of named nodes, blank nodes, literals, variables and quads
//! is delegated to a factory supplied by the caller,
//! so that any term implementation can be produced.
//!
//! [`SimpleFactory`] is the factory producing this crate's own [`Term`]s.

use mownstr::MownStr;

use crate::ns::xsd;
use crate::term::{BaseDirection, Literal, Quad, Term};

/// A factory for terms.
///
/// The lifetime `'a` is that of the text handed to the factory,
/// which implementors may borrow in the terms they produce.
///
/// Factories are only ever used through a shared reference:
/// decoders never mutate them.
pub trait TermFactory<'a> {
    /// The terms produced by this factory.
    type Term;
    /// The quads produced by this factory.
    type Quad;

    /// Get a new named node.
    fn named_node(&self, iri: MownStr<'a>) -> Self::Term;

    /// Get a new blank node.
    fn blank_node(&self, label: MownStr<'a>) -> Self::Term;

    /// Get a new typed literal.
    fn literal_datatype(&self, value: MownStr<'a>, datatype: MownStr<'a>) -> Self::Term;

    /// Get a new language-tagged literal, with an optional base direction.
    fn literal_language(
        &self,
        value: MownStr<'a>,
        language: MownStr<'a>,
        direction: Option<BaseDirection>,
    ) -> Self::Term;

    /// Get a new variable.
    ///
    /// Building variables is an optional capability:
    /// the default implementation returns `None`,
    /// meaning that this factory does not support variables.
    fn variable(&self, name: MownStr<'a>) -> Option<Self::Term> {
        let _ = name;
        None
    }

    /// Get the default graph.
    fn default_graph(&self) -> Self::Term;

    /// Get a new quad.
    fn quad(
        &self,
        subject: Self::Term,
        predicate: Self::Term,
        object: Self::Term,
        graph: Self::Term,
    ) -> Self::Quad;

    /// Turn a quad into a term, to be used in subject or object position of another quad.
    fn quoted(&self, quad: Self::Quad) -> Self::Term;

    /// Get a new plain literal, typed with `xsd:string`.
    fn literal_simple(&self, value: MownStr<'a>) -> Self::Term {
        self.literal_datatype(value, MownStr::from(xsd::string))
    }
}

impl<'a, F> TermFactory<'a> for &F
where
    F: TermFactory<'a> + ?Sized,
{
    type Term = F::Term;
    type Quad = F::Quad;

    fn named_node(&self, iri: MownStr<'a>) -> Self::Term {
        (**self).named_node(iri)
    }
    fn blank_node(&self, label: MownStr<'a>) -> Self::Term {
        (**self).blank_node(label)
    }
    fn literal_datatype(&self, value: MownStr<'a>, datatype: MownStr<'a>) -> Self::Term {
        (**self).literal_datatype(value, datatype)
    }
    fn literal_language(
        &self,
        value: MownStr<'a>,
        language: MownStr<'a>,
        direction: Option<BaseDirection>,
    ) -> Self::Term {
        (**self).literal_language(value, language, direction)
    }
    fn variable(&self, name: MownStr<'a>) -> Option<Self::Term> {
        (**self).variable(name)
    }
    fn default_graph(&self) -> Self::Term {
        (**self).default_graph()
    }
    fn quad(
        &self,
        subject: Self::Term,
        predicate: Self::Term,
        object: Self::Term,
        graph: Self::Term,
    ) -> Self::Quad {
        (**self).quad(subject, predicate, object, graph)
    }
    fn quoted(&self, quad: Self::Quad) -> Self::Term {
        (**self).quoted(quad)
    }
}

/// Simple [`TermFactory`] that directly builds [`Term`]s and [`Quad`]s,
/// borrowing the text it is given whenever possible.
///
/// No caching or other smart actions are performed.
/// Variables are supported.
///
/// # Example
///
/// ```
/// use rdfstr_api::factory::{SimpleFactory, TermFactory as _};
/// use rdfstr_api::term::Term;
///
/// let iri = String::from("http://example.org/test");
/// let t = SimpleFactory.named_node(iri.as_str().into());
/// assert_eq!(t, Term::named_node("http://example.org/test"));
/// assert!(SimpleFactory.variable("x".into()).is_some());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleFactory;

impl<'a> TermFactory<'a> for SimpleFactory {
    type Term = Term<'a>;
    type Quad = Quad<'a>;

    fn named_node(&self, iri: MownStr<'a>) -> Term<'a> {
        Term::NamedNode(iri)
    }

    fn blank_node(&self, label: MownStr<'a>) -> Term<'a> {
        Term::BlankNode(label)
    }

    fn literal_datatype(&self, value: MownStr<'a>, datatype: MownStr<'a>) -> Term<'a> {
        Term::Literal(Literal::new_dt(value, datatype))
    }

    fn literal_language(
        &self,
        value: MownStr<'a>,
        language: MownStr<'a>,
        direction: Option<BaseDirection>,
    ) -> Term<'a> {
        Term::Literal(Literal::new_lang(value, language, direction))
    }

    fn variable(&self, name: MownStr<'a>) -> Option<Term<'a>> {
        Some(Term::Variable(name))
    }

    fn default_graph(&self) -> Term<'a> {
        Term::DefaultGraph
    }

    fn quad(
        &self,
        subject: Term<'a>,
        predicate: Term<'a>,
        object: Term<'a>,
        graph: Term<'a>,
    ) -> Quad<'a> {
        Quad::new(subject, predicate, object, graph)
    }

    fn quoted(&self, quad: Quad<'a>) -> Term<'a> {
        Term::from(quad)
    }
}
