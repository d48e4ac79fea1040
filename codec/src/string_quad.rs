//! I define [`StringQuad`], a quad whose components are in the string notation.
use rdfstr_api::factory::TermFactory;
use rdfstr_api::term::Quad;

use crate::decoder::StringTermParser;
use crate::encoder::term_to_string;
use crate::Result;

/// A quad whose four components are strings in the string notation.
///
/// An absent `graph` is equivalent to the default graph.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct StringQuad {
    /// The subject of this quad.
    pub subject: String,
    /// The predicate of this quad.
    pub predicate: String,
    /// The object of this quad.
    pub object: String,
    /// The graph name of this quad, if any.
    pub graph: Option<String>,
}

impl StringQuad {
    /// Build a string quad from its four components.
    pub fn new<S, P, O, G>(subject: S, predicate: P, object: O, graph: G) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        O: Into<String>,
        G: Into<String>,
    {
        StringQuad {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: Some(graph.into()),
        }
    }

    /// Build a string quad without graph name.
    pub fn triple<S, P, O>(subject: S, predicate: P, object: O) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        O: Into<String>,
    {
        StringQuad {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: None,
        }
    }

    /// The graph name of this quad, the empty string (default graph) if absent.
    pub fn graph(&self) -> &str {
        self.graph.as_deref().unwrap_or_default()
    }
}

/// Convert each component of `quad` to the string notation.
///
/// The graph is always present in the result, as `""` for the default graph.
pub fn quad_to_string_quad(quad: &Quad) -> StringQuad {
    StringQuad {
        subject: term_to_string(&quad.subject),
        predicate: term_to_string(&quad.predicate),
        object: term_to_string(&quad.object),
        graph: Some(term_to_string(&quad.graph)),
    }
}

/// Decode each component of `quad` with the same `factory`, and build a quad from them.
pub fn string_quad_to_quad<'a, F>(quad: &'a StringQuad, factory: &F) -> Result<F::Quad>
where
    F: TermFactory<'a> + ?Sized,
{
    StringTermParser::new(factory).parse_quad(quad)
}

impl<F> StringTermParser<F> {
    /// Decode each component of `quad`, and build a quad from them.
    pub fn parse_quad<'a>(&self, quad: &'a StringQuad) -> Result<F::Quad>
    where
        F: TermFactory<'a>,
    {
        let subject = self.parse_term(&quad.subject)?;
        let predicate = self.parse_term(&quad.predicate)?;
        let object = self.parse_term(&quad.object)?;
        let graph = self.parse_term(quad.graph())?;
        Ok(self.factory().quad(subject, predicate, object, graph))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfstr_api::factory::SimpleFactory;
    use rdfstr_api::term::Term;

    fn example_quad(graph: Term<'static>) -> Quad<'static> {
        Quad::new(
            Term::named_node("http://example.org"),
            Term::named_node("http://example.org/p"),
            Term::literal_dt("literal", "http://www.w3.org/2001/XMLSchema#string"),
            graph,
        )
    }

    #[test]
    fn triple_to_string_quad() {
        let sq = quad_to_string_quad(&example_quad(Term::DefaultGraph));
        assert_eq!(
            sq,
            StringQuad::new(
                "http://example.org",
                "http://example.org/p",
                r#""literal""#,
                ""
            )
        );
    }

    #[test]
    fn quad_to_string_quad_with_graph() {
        let sq = quad_to_string_quad(&example_quad(Term::named_node("http://example.org/graph")));
        assert_eq!(sq.graph, Some("http://example.org/graph".to_string()));
    }

    #[test]
    fn string_triple_to_quad() {
        let sq = StringQuad::triple("http://example.org", "http://example.org/p", r#""literal""#);
        assert_eq!(sq.graph(), "");
        let q = string_quad_to_quad(&sq, &SimpleFactory).unwrap();
        assert_eq!(q, example_quad(Term::DefaultGraph));
    }

    #[test]
    fn string_quad_to_quad_with_graph() {
        let sq = StringQuad::new(
            "http://example.org",
            "http://example.org/p",
            r#""literal""#,
            "http://example.org/graph",
        );
        let q = string_quad_to_quad(&sq, &SimpleFactory).unwrap();
        assert_eq!(q, example_quad(Term::named_node("http://example.org/graph")));
    }

    #[test]
    fn empty_graph_is_default_graph() {
        let sq1 = StringQuad::triple("ex:s", "ex:p", "ex:o");
        let sq2 = StringQuad::new("ex:s", "ex:p", "ex:o", "");
        assert_eq!(
            string_quad_to_quad(&sq1, &SimpleFactory).unwrap(),
            string_quad_to_quad(&sq2, &SimpleFactory).unwrap(),
        );
    }

    #[test]
    fn round_trip() {
        let q = Quad::new(
            Term::triple(
                Term::blank_node("b0"),
                Term::named_node("ex:p"),
                Term::literal_lang("x y", "en", None),
            ),
            Term::named_node("ex:p"),
            Term::variable("o"),
            Term::named_node("ex:g"),
        );
        let sq = quad_to_string_quad(&q);
        assert_eq!(string_quad_to_quad(&sq, &SimpleFactory).unwrap(), q);
    }

    #[test]
    fn error_in_graph() {
        let sq = StringQuad::new("ex:s", "ex:p", "ex:o", "<<a b>>");
        assert!(string_quad_to_quad(&sq, &SimpleFactory).is_err());
    }
}
