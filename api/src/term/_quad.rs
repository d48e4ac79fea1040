use super::*;

/// A subject-predicate-object-graph tuple.
///
/// A triple is a quad whose [`graph`](Quad::graph) is [`Term::DefaultGraph`].
/// Subject and object may themselves be [`Term::Quad`]s, to any depth.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Quad<'a> {
    /// The subject of this quad.
    pub subject: Term<'a>,
    /// The predicate of this quad.
    pub predicate: Term<'a>,
    /// The object of this quad.
    pub object: Term<'a>,
    /// The graph name of this quad.
    pub graph: Term<'a>,
}

impl<'a> Quad<'a> {
    /// Build a quad from its four components.
    pub fn new(subject: Term<'a>, predicate: Term<'a>, object: Term<'a>, graph: Term<'a>) -> Self {
        Quad {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// Build a quad in the default graph.
    pub fn triple(subject: Term<'a>, predicate: Term<'a>, object: Term<'a>) -> Self {
        Self::new(subject, predicate, object, Term::DefaultGraph)
    }

    /// Whether this quad belongs to the default graph.
    pub fn is_triple(&self) -> bool {
        self.graph.is_default_graph()
    }

    /// The components of this quad, in SPOG order.
    pub fn spog(&self) -> [&Term<'a>; 4] {
        [&self.subject, &self.predicate, &self.object, &self.graph]
    }

    /// Copy every borrowed text of this quad, including in nested quads.
    pub fn into_owned(self) -> Quad<'static> {
        Quad {
            subject: self.subject.into_owned(),
            predicate: self.predicate.into_owned(),
            object: self.object.into_owned(),
            graph: self.graph.into_owned(),
        }
    }
}
