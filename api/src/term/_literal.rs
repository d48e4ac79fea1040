use super::*;
use crate::ns::{rdf, xsd};

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
///
/// The constructors maintain the following invariant:
/// if [`language`](Literal::language) is not empty,
/// then [`datatype`](Literal::datatype) is `rdf:langString`,
/// or `rdf:dirLangString` if the literal also has a [`direction`](Literal::direction).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Literal<'a> {
    value: MownStr<'a>,
    datatype: MownStr<'a>,
    language: MownStr<'a>,
    direction: Option<BaseDirection>,
}

impl<'a> Literal<'a> {
    /// Build a literal with an explicit datatype.
    pub fn new_dt<T, U>(value: T, datatype: U) -> Self
    where
        T: Into<MownStr<'a>>,
        U: Into<MownStr<'a>>,
    {
        Literal {
            value: value.into(),
            datatype: datatype.into(),
            language: MownStr::from(""),
            direction: None,
        }
    }

    /// Build a plain literal, whose datatype is `xsd:string`.
    pub fn new_simple<T: Into<MownStr<'a>>>(value: T) -> Self {
        Self::new_dt(value, xsd::string)
    }

    /// Build a language-tagged literal, with an optional base direction.
    ///
    /// An empty `language` yields a plain literal,
    /// in which case `direction` is ignored.
    pub fn new_lang<T, U>(value: T, language: U, direction: Option<BaseDirection>) -> Self
    where
        T: Into<MownStr<'a>>,
        U: Into<MownStr<'a>>,
    {
        let language = language.into();
        if language.is_empty() {
            if let Some(dir) = direction {
                log::warn!("Ignoring base direction {dir} on a literal without language tag");
            }
            return Self::new_simple(value);
        }
        let datatype = if direction.is_some() {
            rdf::dirLangString
        } else {
            rdf::langString
        };
        Literal {
            value: value.into(),
            datatype: MownStr::from(datatype),
            language,
            direction,
        }
    }

    /// The lexical form of this literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype IRI of this literal.
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// The language tag of this literal, empty if it is not language-tagged.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The base direction of this literal, if any.
    pub fn direction(&self) -> Option<BaseDirection> {
        self.direction
    }

    /// Whether this literal has a language tag.
    pub fn is_language_tagged(&self) -> bool {
        !self.language.is_empty()
    }

    /// Add a base direction to a language-tagged literal that has none.
    ///
    /// Give `self` back unchanged if it is not language-tagged, or already has a direction.
    pub fn with_direction(self, direction: BaseDirection) -> Result<Self, Self> {
        if self.is_language_tagged() && self.direction.is_none() {
            Ok(Literal {
                datatype: MownStr::from(rdf::dirLangString),
                direction: Some(direction),
                ..self
            })
        } else {
            Err(self)
        }
    }

    /// Copy every borrowed text of this literal.
    pub fn into_owned(self) -> Literal<'static> {
        Literal {
            value: ensure_owned(self.value),
            datatype: ensure_owned(self.datatype),
            language: ensure_owned(self.language),
            direction: self.direction,
        }
    }
}
