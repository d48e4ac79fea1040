//! I implement the grammar of literals in the string notation:
//!
//! ```text
//! "value"                    plain literal (xsd:string)
//! "value"^^datatype          typed literal
//! "value"@language           language-tagged string
//! "value"@language--ltr      directional language-tagged string (also --rtl)
//! ```
//!
//! The value is never unescaped: it is everything between the first and the last `"`.
use std::fmt;

use lazy_static::lazy_static;
use mownstr::MownStr;
use rdfstr_api::ns::{is_implicit_datatype, rdf, xsd};
use rdfstr_api::term::{BaseDirection, Literal};
use regex::Regex;

use crate::{CodecError, Result};

lazy_static! {
    /// The quoted part of a literal; the value is captured.
    static ref LITERAL_VALUE: Regex = Regex::new(r#"(?s)^"(.*)""#).unwrap();
    /// A whole literal; captures the datatype after `^^`, or the `@` marker.
    static ref LITERAL_TYPE: Regex =
        Regex::new(r#"(?s)^".*"(?:\^\^([^"]+)|(@)[^@"]+)?$"#).unwrap();
    /// A whole literal; captures the language tag (including any direction).
    static ref LITERAL_LANGUAGE: Regex =
        Regex::new(r#"(?s)^".*"(?:@([^@"]+)|\^\^[^"]+)?$"#).unwrap();
}

/// Separates the language tag from the base direction.
const DIRECTION_MARKER: &str = "--";

/// Get the lexical value of a literal,
/// i.e. the raw content between its first and last `"`.
pub fn literal_value(literal: &str) -> Result<&str> {
    LITERAL_VALUE
        .captures(literal)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| CodecError::MalformedLiteral(literal.to_string()))
}

/// Get the datatype IRI of a literal.
///
/// This is the explicit datatype after `^^` if any,
/// `rdf:langString` if the literal has a language tag,
/// and `xsd:string` otherwise.
pub fn literal_type(literal: &str) -> Result<&str> {
    let caps = LITERAL_TYPE
        .captures(literal)
        .ok_or_else(|| CodecError::MalformedLiteral(literal.to_string()))?;
    Ok(match (caps.get(1), caps.get(2)) {
        (Some(datatype), _) => datatype.as_str(),
        (None, Some(_)) => rdf::langString,
        (None, None) => xsd::string,
    })
}

/// Get the language tag of a literal, lower-cased,
/// or an empty string if the literal has no language tag.
///
/// The base direction, if any, is not part of the returned tag,
/// which must not be empty (as in `"abc"@--ltr`).
pub fn literal_language(literal: &str) -> Result<MownStr<'_>> {
    let caps = LITERAL_LANGUAGE
        .captures(literal)
        .ok_or_else(|| CodecError::MalformedLiteral(literal.to_string()))?;
    let Some(tag) = caps.get(1) else {
        return Ok(MownStr::from(""));
    };
    let tag = tag.as_str();
    let tag = match tag.find(DIRECTION_MARKER) {
        Some(pos) => &tag[..pos],
        None => tag,
    };
    if tag.is_empty() {
        return Err(CodecError::MalformedLiteral(literal.to_string()));
    }
    if tag.chars().any(char::is_uppercase) {
        Ok(MownStr::from(tag.to_lowercase()))
    } else {
        Ok(MownStr::from(tag))
    }
}

/// Get the base direction of a literal, if any.
///
/// Only a `--` occurring after the last `"` of the literal is considered,
/// and what follows it must be `ltr` or `rtl`.
pub fn literal_direction(literal: &str) -> Result<Option<BaseDirection>> {
    let last_quote = literal
        .rfind('"')
        .ok_or_else(|| CodecError::MalformedLiteral(literal.to_string()))?;
    let suffix = &literal[last_quote + 1..];
    let Some(pos) = suffix.find(DIRECTION_MARKER) else {
        return Ok(None);
    };
    let direction = &suffix[pos + DIRECTION_MARKER.len()..];
    direction
        .parse()
        .map(Some)
        .map_err(|_| CodecError::InvalidDirection {
            literal: literal.to_string(),
            direction: direction.to_string(),
        })
}

/// Write the given literal into the given write in the string notation.
///
/// The datatype is omitted when it is implied by the shape of the literal
/// (`xsd:string`, `rdf:langString`, `rdf:dirLangString`),
/// and the direction always comes last.
pub fn write_literal<W: fmt::Write>(w: &mut W, literal: &Literal) -> fmt::Result {
    w.write_char('"')?;
    w.write_str(literal.value())?;
    w.write_char('"')?;
    if !is_implicit_datatype(literal.datatype()) {
        w.write_str("^^")?;
        w.write_str(literal.datatype())?;
    }
    if literal.is_language_tagged() {
        w.write_char('@')?;
        w.write_str(literal.language())?;
    }
    if let Some(direction) = literal.direction() {
        write!(w, "{DIRECTION_MARKER}{direction}")?;
    }
    Ok(())
}

/// Convert a literal to the string notation.
pub fn literal_to_string(literal: &Literal) -> String {
    LiteralDisplay(literal).to_string()
}

struct LiteralDisplay<'l, 'a>(&'l Literal<'a>);

impl fmt::Display for LiteralDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_literal(f, self.0)
    }
}
