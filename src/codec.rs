// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compact text notation for coronas.
//!
//! A corona is written on one line as `center|e0|e1|e2|e3`, where each edge
//! is a comma separated list of `size^offset` tokens in sorted order:
//!
//! ```text
//! 2|1^0,2^1|3^0|1^0,4^1|4^0
//! ```
//!
//! Parsing only checks the shape of the text. The center may be zero or
//! negative and offsets may be negative; such values parse, and are then
//! rejected by [`Corona::validate`](crate::geometry::Corona::validate).
//!
//! Numbers are read leniently so that bad values reach the validator:
//! - a center is read from its leading integer, and is 0 if it has none;
//! - numbers too large for their field saturate to the field's bounds,
//!   which no allowed size or in-range offset can reach.

use crate::geometry::constants::NEDGES;
use crate::geometry::{Corona, Edge, Segment};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text that cannot be read as a corona.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of `|` separated fields.
    #[error("Expected center + 4 edges")]
    FieldCount(usize),

    /// A token does not have the form `size^offset`.
    #[error("Bad segment token: {0}")]
    BadToken(String),
}

/// Render a corona in compact notation.
pub fn to_compact(corona: &Corona) -> String {
    let mut parts = Vec::with_capacity(corona.edges.len() + 1);
    parts.push(corona.center.to_string());
    parts.extend(corona.edges.iter().map(Edge::to_string));
    parts.join("|")
}

/// Parse compact notation into a corona, without validating it.
///
/// All whitespace is ignored.
///
/// # Examples
///
/// ```
/// use corona_search::codec::{from_compact, ParseError};
///
/// let corona = from_compact("2|3^0|3^0|3^0|3^0").unwrap();
/// assert_eq!(corona.center, 2);
///
/// let err = from_compact("1|2^0|2^0|2^0").unwrap_err();
/// assert_eq!(err.to_string(), "Expected center + 4 edges");
/// ```
pub fn from_compact(text: &str) -> Result<Corona, ParseError> {
    let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let parts: Vec<&str> = text.split('|').collect();

    if parts.len() != NEDGES + 1 {
        return Err(ParseError::FieldCount(parts.len()));
    }

    let center = leading_integer(parts[0]).unwrap_or(0);

    let edges = parts[1..]
        .iter()
        .map(|field| field.split(',').map(parse_segment).collect::<Result<Edge, _>>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Corona { center, edges })
}

/// Parse one `size^offset` token: unsigned size, optionally negative offset.
fn parse_segment(token: &str) -> Result<Segment, ParseError> {
    let bad = || ParseError::BadToken(token.to_string());

    let (size, offset) = token.split_once('^').ok_or_else(bad)?;
    let digits = offset.strip_prefix('-').unwrap_or(offset);

    if !is_digits(size) || !is_digits(digits) {
        return Err(bad());
    }

    let size = size.parse().unwrap_or(u32::MAX);
    let offset = leading_integer(offset).ok_or_else(bad)?;
    Ok(Segment::new(size, offset))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// The optionally signed integer at the start of `s`, saturating on overflow.
///
/// `None` if `s` does not start with a digit or `-` and a digit.
fn leading_integer(s: &str) -> Option<i64> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let digits = &rest[..len];
    let value = match (negative, digits.parse::<i64>()) {
        (false, Ok(n)) => n,
        (true, Ok(n)) => -n,
        (false, Err(_)) => i64::MAX,
        (true, Err(_)) => i64::MIN,
    };
    Some(value)
}

impl fmt::Display for Corona {
    /// Compact notation, e.g. "2|3^0|3^0|3^0|3^0".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_compact(self))
    }
}

impl FromStr for Corona {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_compact(s)
    }
}

impl Corona {
    /// Render in compact notation.
    pub fn to_compact(&self) -> String {
        to_compact(self)
    }

    /// Parse compact notation. See [`from_compact`].
    pub fn from_compact(text: &str) -> Result<Self, ParseError> {
        from_compact(text)
    }
}
