//! I define the [`BaseDirection`] enum.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use super::Term;

/// A datatype capturing the notion of [base direction](https://www.w3.org/TR/rdf12-concepts/#section-text-direction)
/// defined by RDF 1.2.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub enum BaseDirection {
    /// Left-to-right
    Ltr,
    /// Right-to-left
    Rtl,
}

impl Display for BaseDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Ltr => "ltr",
                Self::Rtl => "rtl",
            }
        )
    }
}

impl FromStr for BaseDirection {
    type Err = InvalidBaseDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(InvalidBaseDirection(s.to_string())),
        }
    }
}

/// This error is raised when parsing a base direction other than `ltr` or `rtl`.
#[derive(Debug, Error)]
#[error("The given base direction '{0}' is neither 'ltr' nor 'rtl'")]
pub struct InvalidBaseDirection(pub String);

impl<'a> std::ops::Mul<BaseDirection> for Term<'a> {
    type Output = Term<'a>;

    fn mul(self, rhs: BaseDirection) -> Self::Output {
        let ret = match self {
            Term::Literal(lit) => lit
                .with_direction(rhs)
                .map(Term::Literal)
                .map_err(Term::Literal),
            other => Err(other),
        };
        ret.unwrap_or_else(|other| {
            log::warn!("Ignoring multiplication by base-dir for {other:?}");
            other
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::rdf;
    use test_case::test_case;

    #[test_case("ltr", BaseDirection::Ltr)]
    #[test_case("rtl", BaseDirection::Rtl)]
    fn parse_and_display(txt: &str, dir: BaseDirection) {
        assert_eq!(txt.parse::<BaseDirection>().unwrap(), dir);
        assert_eq!(dir.to_string(), txt);
    }

    #[test_case(""; "empty")]
    #[test_case("LTR"; "upper case")]
    #[test_case("bla"; "unknown")]
    fn invalid(txt: &str) {
        assert!(txt.parse::<BaseDirection>().is_err());
    }

    #[test]
    fn product() {
        let lit1 = Term::literal_lang("hello", "en", None) * BaseDirection::Ltr;
        let lit2 = Term::literal_lang("hello", "en", Some(BaseDirection::Ltr));
        assert_eq!(lit1, lit2);
        assert_eq!(lit1.as_literal().unwrap().datatype(), rdf::dirLangString);
    }

    #[test]
    fn product_noop_iri() {
        let lit1 = Term::named_node("x:a");
        let lit2 = lit1.clone() * BaseDirection::Ltr;
        assert_eq!(lit1, lit2);
    }

    #[test]
    fn product_noop_dir_lang_string() {
        let lit1 = Term::literal_lang("hello", "en", Some(BaseDirection::Ltr));
        let lit2 = lit1.clone() * BaseDirection::Rtl;
        assert_eq!(lit1, lit2);
    }
}
