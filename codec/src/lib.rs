//! This crate is part of rdfstr,
//! a compact string notation for [RDF] terms and quads.
//!
//! It converts [`Term`](rdfstr_api::term::Term)s to strings
//! (for logging, hashing, or as keys in maps),
//! and strings back to terms of any implementation, through a
//! [`TermFactory`](rdfstr_api::factory::TermFactory).
//!
//! | term                       | string                       |
//! |----------------------------|------------------------------|
//! | named node                 | `http://example.org/`        |
//! | blank node                 | `_:b1`                       |
//! | variable                   | `?v1`                        |
//! | default graph              | (empty string)               |
//! | plain literal              | `"abc"`                      |
//! | typed literal              | `"3"^^http://example.org/dt` |
//! | language-tagged literal    | `"abc"@en-us`                |
//! | ... with base direction    | `"abc"@en-us--rtl`           |
//! | quoted triple              | `<<ex:s ex:p ex:o>>`         |
//! | quoted quad                | `<<ex:s ex:p ex:o ex:g>>`    |
//!
//! Quoted triples and quads can be nested to any depth.
//! When decoding, extra spaces between their components are ignored,
//! and components written as `<iri>` lose their angle brackets.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/

#![deny(missing_docs)]

mod _error;
pub use _error::*;

pub mod decoder;
pub mod encoder;
pub mod literal;
pub mod string_quad;
pub mod tokenizer;

pub use decoder::{parse_term, string_to_term, DecoderConfig, StringTermParser};
pub use encoder::{maybe_term_to_string, term_to_string, write_term, TermDisplay};
pub use literal::{literal_direction, literal_language, literal_type, literal_value};
pub use string_quad::{quad_to_string_quad, string_quad_to_quad, StringQuad};


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
