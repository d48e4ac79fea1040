//! I decode strings into terms, through a [`TermFactory`].
//!
//! The kind of term is determined by the first character of the string:
//!
//! | string              | term                                  |
//! |---------------------|---------------------------------------|
//! | (empty)             | default graph                         |
//! | `_:label`           | blank node                            |
//! | `?name`             | variable                              |
//! | `"value"...`        | literal (see [`crate::literal`])      |
//! | `<<s p o>>`         | quoted triple                         |
//! | `<<s p o g>>`       | quoted quad                           |
//! | anything else       | named node, verbatim                  |
use mownstr::MownStr;
use rdfstr_api::factory::{SimpleFactory, TermFactory};
use rdfstr_api::term::Term;

use crate::literal::{literal_direction, literal_language, literal_type, literal_value};
use crate::tokenizer::{is_quoted, split_quoted};
use crate::{CodecError, Result};

/// The default value of [`DecoderConfig::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Decoder configuration.
#[derive(Clone, Debug)]
pub struct DecoderConfig {
    pub(crate) max_depth: usize,
}

impl DecoderConfig {
    /// Set the maximum nesting depth of quoted terms.
    ///
    /// A quoted term directly inside the decoded string has depth 1,
    /// a quoted term inside it has depth 2, and so on.
    pub fn set_max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.max_depth = max_depth;
        self
    }

    /// The maximum nesting depth of quoted terms.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decoder of the string notation, building terms with a given [`TermFactory`].
#[derive(Clone, Debug)]
pub struct StringTermParser<F> {
    config: DecoderConfig,
    factory: F,
}

impl<F> StringTermParser<F> {
    /// Build a new parser using `factory`, with the default config.
    #[inline]
    pub fn new(factory: F) -> Self {
        Self::new_with_config(factory, DecoderConfig::default())
    }

    /// Build a new parser using `factory`, with the given config.
    pub const fn new_with_config(factory: F, config: DecoderConfig) -> Self {
        Self { config, factory }
    }

    /// Borrow this parser's configuration.
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Borrow this parser's factory.
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Decode `value` into a term.
    pub fn parse_term<'a>(&self, value: &'a str) -> Result<F::Term>
    where
        F: TermFactory<'a>,
    {
        self.decode(value, 0)
    }

    fn decode<'a>(&self, value: &'a str, depth: usize) -> Result<F::Term>
    where
        F: TermFactory<'a>,
    {
        let f = &self.factory;
        let Some(first) = value.chars().next() else {
            return Ok(f.default_graph());
        };
        match first {
            '_' => Ok(f.blank_node(MownStr::from(value.get(2..).unwrap_or_default()))),
            '?' => f
                .variable(MownStr::from(&value[1..]))
                .ok_or_else(|| CodecError::UnsupportedCapability(value.to_string())),
            '"' => {
                let lex = MownStr::from(literal_value(value)?);
                let direction = literal_direction(value)?;
                let language = literal_language(value)?;
                let datatype = literal_type(value)?;
                if !language.is_empty() {
                    Ok(f.literal_language(lex, language, direction))
                } else if direction.is_some() {
                    // a direction requires a language tag
                    Err(CodecError::MalformedLiteral(value.to_string()))
                } else {
                    Ok(f.literal_datatype(lex, MownStr::from(datatype)))
                }
            }
            '<' if is_quoted(value) => self.decode_quoted(value, depth + 1),
            _ => Ok(f.named_node(MownStr::from(value))),
        }
    }

    fn decode_quoted<'a>(&self, value: &'a str, depth: usize) -> Result<F::Term>
    where
        F: TermFactory<'a>,
    {
        if depth > self.config.max_depth {
            return Err(CodecError::TooDeep {
                term: value.to_string(),
                max_depth: self.config.max_depth,
            });
        }
        log::trace!("decoding quoted term at depth {depth}: {value}");
        let inner = value[2..value.len() - 2].trim();
        let tokens = split_quoted(inner, value)?;
        let (s, p, o, g) = match tokens[..] {
            [s, p, o] => (s, p, o, None),
            [s, p, o, g] => (s, p, o, Some(g)),
            _ => {
                return Err(CodecError::ArityError {
                    term: value.to_string(),
                    count: tokens.len(),
                })
            }
        };
        let component = |token: &'a str| {
            self.decode(token, depth).map_err(|err| {
                log::debug!("failed to decode a component of {value}: {err}");
                err
            })
        };
        let f = &self.factory;
        let s = component(s)?;
        let p = component(p)?;
        let o = component(o)?;
        let g = match g {
            Some(g) => component(g)?,
            None => f.default_graph(),
        };
        Ok(f.quoted(f.quad(s, p, o, g)))
    }
}

impl Default for StringTermParser<SimpleFactory> {
    fn default() -> Self {
        Self::new(SimpleFactory)
    }
}

/// Decode `value` into a term built by `factory`, with the default config.
///
/// # Example
/// ```
/// use rdfstr_api::factory::SimpleFactory;
/// use rdfstr_api::term::Term;
/// use rdfstr_codec::string_to_term;
///
/// let t = string_to_term("<<ex:s ex:p \"o\"@en>>", &SimpleFactory)?;
/// assert_eq!(
///     t,
///     Term::triple(
///         Term::named_node("ex:s"),
///         Term::named_node("ex:p"),
///         Term::literal_lang("o", "en", None),
///     )
/// );
/// # Ok::<(), rdfstr_codec::CodecError>(())
/// ```
pub fn string_to_term<'a, F>(value: &'a str, factory: &F) -> Result<F::Term>
where
    F: TermFactory<'a> + ?Sized,
{
    StringTermParser::new(factory).parse_term(value)
}

/// Decode `value` into a [`Term`] borrowing from it, with the default config.
pub fn parse_term(value: &str) -> Result<Term<'_>> {
    string_to_term(value, &SimpleFactory)
}
