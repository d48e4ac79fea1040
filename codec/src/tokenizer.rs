//! I split the content of a quoted term (`<< ... >>`) into its top-level components.
//!
//! Nested quoted terms and the values of literals are opaque to the split:
//! spaces inside them do not separate components.
use crate::{CodecError, Result, Tag};

/// Split `inner` into the 3 or 4 top-level components of a quoted term.
///
/// `inner` is the trimmed content between the outermost `<<` and `>>` of `term`;
/// `term` is only used to report errors.
///
/// Components are separated by runs of spaces,
/// except inside literal values (delimited by unescaped `"`)
/// and inside angle brackets.
/// Components of the form `<iri>` are returned without their brackets.
///
/// # Errors
///
/// * [`CodecError::UnbalancedTag`] if angle brackets are not balanced;
/// * [`CodecError::ArityError`] if there are not 3 or 4 components.
pub fn split_quoted<'a>(inner: &'a str, term: &str) -> Result<Vec<&'a str>> {
    let bytes = inner.as_bytes();
    let mut tokens = Vec::with_capacity(4);
    let mut depth = 0_usize;
    let mut in_literal = false;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' if !is_escaped(bytes, i) => in_literal = !in_literal,
            b'<' => depth += 1,
            b'>' => {
                if depth == 0 {
                    return Err(CodecError::UnbalancedTag {
                        term: term.to_string(),
                        unmatched: Tag::Closing,
                    });
                }
                depth -= 1;
            }
            b' ' if !in_literal && depth == 0 => {
                tokens.push(&inner[start..i]);
                while i + 1 < bytes.len() && bytes[i + 1] == b' ' {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if depth > 0 {
        return Err(CodecError::UnbalancedTag {
            term: term.to_string(),
            unmatched: Tag::Opening,
        });
    }
    tokens.push(&inner[start..]);
    log::trace!("split {term} into {tokens:?}");

    if !(3..=4).contains(&tokens.len()) {
        return Err(CodecError::ArityError {
            term: term.to_string(),
            count: tokens.len(),
        });
    }
    Ok(tokens.into_iter().map(unwrap_iri).collect())
}

/// Whether the byte at `pos` is preceded by an odd number of backslashes.
fn is_escaped(bytes: &[u8], pos: usize) -> bool {
    let backslashes = bytes[..pos]
        .iter()
        .rev()
        .take_while(|b| **b == b'\\')
        .count();
    backslashes % 2 == 1
}

/// Whether `txt` has the shape of a quoted term.
pub(crate) fn is_quoted(txt: &str) -> bool {
    txt.len() > 4 && txt.starts_with("<<") && txt.ends_with(">>")
}

/// Strip the outer characters of a token starting with `<`,
/// which is taken as an IRI written as `<iri>`.
/// Tokens containing a space, and quoted terms, are left untouched.
fn unwrap_iri(token: &str) -> &str {
    if !token.starts_with('<') || token.contains(' ') || is_quoted(token) {
        return token;
    }
    let rest = &token[1..];
    match rest.char_indices().last() {
        Some((last, _)) => &rest[..last],
        None => rest,
    }
}
