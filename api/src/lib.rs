//! This crate is part of rdfstr,
//! a compact string notation for [RDF] terms and quads.
//!
//! It defines the in-memory term model ([`term::Term`], [`term::Quad`]...)
//! and the [`factory::TermFactory`] trait,
//! through which decoders build terms of any implementation.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

pub mod factory;
pub mod ns;
pub mod term;
