use super::*;
use crate::ns::{rdf, xsd};
use test_case::test_case;

#[test]
fn simple_literal_has_xsd_string() {
    let lit = Literal::new_simple("abc");
    assert_eq!(lit.value(), "abc");
    assert_eq!(lit.datatype(), xsd::string);
    assert_eq!(lit.language(), "");
    assert_eq!(lit.direction(), None);
    assert!(!lit.is_language_tagged());
}

#[test_case(None, rdf::langString; "without direction")]
#[test_case(Some(BaseDirection::Ltr), rdf::dirLangString; "left to right")]
#[test_case(Some(BaseDirection::Rtl), rdf::dirLangString; "right to left")]
fn language_tagged_datatype(dir: Option<BaseDirection>, expected: &str) {
    let lit = Literal::new_lang("abc", "en-us", dir);
    assert_eq!(lit.datatype(), expected);
    assert_eq!(lit.language(), "en-us");
    assert_eq!(lit.direction(), dir);
}

#[test]
fn empty_language_gives_plain_literal() {
    let lit = Literal::new_lang("abc", "", Some(BaseDirection::Ltr));
    assert_eq!(lit, Literal::new_simple("abc"));
}

#[test]
fn with_direction_on_plain_literal_gives_it_back() {
    let lit = Literal::new_dt("42", "http://www.w3.org/2001/XMLSchema#integer");
    assert_eq!(lit.clone().with_direction(BaseDirection::Rtl), Err(lit));
}

#[test]
fn kinds() {
    assert_eq!(Term::named_node("ex:a").kind(), TermKind::NamedNode);
    assert_eq!(Term::blank_node("b").kind(), TermKind::BlankNode);
    assert_eq!(Term::variable("v").kind(), TermKind::Variable);
    assert_eq!(Term::literal_dt("a", xsd::string).kind(), TermKind::Literal);
    assert_eq!(Term::DefaultGraph.kind(), TermKind::DefaultGraph);
    let t = Term::triple(
        Term::named_node("ex:s"),
        Term::named_node("ex:p"),
        Term::named_node("ex:o"),
    );
    assert_eq!(t.kind(), TermKind::Quad);
}

#[test]
fn values() {
    assert_eq!(Term::named_node("ex:a").value(), Some("ex:a"));
    assert_eq!(Term::blank_node("b1").value(), Some("b1"));
    assert_eq!(Term::variable("v1").value(), Some("v1"));
    assert_eq!(Term::literal_lang("chat", "fr", None).value(), Some("chat"));
    assert_eq!(Term::DefaultGraph.value(), None);
}

#[test]
fn triple_is_quad_in_default_graph() {
    let [s, p, o] = ["ex:s", "ex:p", "ex:o"].map(Term::named_node);
    let q = Quad::triple(s.clone(), p.clone(), o.clone());
    assert!(q.is_triple());
    assert_eq!(q, Quad::new(s, p, o, Term::DefaultGraph));
    assert!(!Quad::new(
        Term::named_node("ex:s"),
        Term::named_node("ex:p"),
        Term::named_node("ex:o"),
        Term::named_node("ex:g"),
    )
    .is_triple());
}

#[test]
fn into_owned_preserves_equality() {
    let txt = String::from("http://example.org/");
    let inner = Term::triple(
        Term::named_node(&txt[..]),
        Term::blank_node(&txt[7..]),
        Term::literal_lang(&txt[..4], "en", Some(BaseDirection::Rtl)),
    );
    let borrowed = Term::quad(
        inner,
        Term::variable(&txt[..4]),
        Term::literal_dt(&txt[..], &txt[..]),
        Term::named_node(&txt[..]),
    );
    let owned: Term<'static> = borrowed.into_owned();
    drop(txt);
    assert_eq!(owned.kind(), TermKind::Quad);
    let q = owned.as_quad().unwrap();
    assert_eq!(q.predicate, Term::variable("http"));
    assert_eq!(
        q.subject.as_quad().unwrap().object,
        Term::literal_lang("http", "en", Some(BaseDirection::Rtl))
    );
}

#[test]
fn spog_order() {
    let q = Quad::new(
        Term::named_node("ex:s"),
        Term::named_node("ex:p"),
        Term::named_node("ex:o"),
        Term::named_node("ex:g"),
    );
    let values: Vec<_> = q.spog().iter().map(|t| t.value().unwrap()).collect();
    assert_eq!(values, ["ex:s", "ex:p", "ex:o", "ex:g"]);
}
