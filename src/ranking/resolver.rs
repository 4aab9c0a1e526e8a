//! Range Query Resolver
//!
//! Parses the client-supplied range specification (a comma-separated list of
//! single ranks and/or inclusive `FROM-TO` ranges, e.g. `"1-3,5,7-9"`) and
//! maps every resolved position through the index.
//!
//! Positions beyond the current index size contribute nothing to the result.
//! Overlapping ranges are not deduplicated: requesting `"1,1-2"` yields the
//! rank-1 word twice. Both behaviors are intentional.

use super::index::RankedIndex;
use crate::error::{Result, WordRankError};

/// One parsed term of a range specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTerm {
    Single(usize),
    /// Inclusive span. A reversed span (`from > to`) expands to nothing.
    Span(usize, usize),
}

/// Resolves `spec` against the index.
///
/// The result follows the order positions were specified in, not rank order.
/// Any malformed term fails the whole call before a single position is
/// looked up.
pub fn resolve(index: &RankedIndex, spec: &str) -> Result<Vec<String>> {
    let terms = parse_spec(spec)?;

    let mut words = Vec::new();
    for term in terms {
        match term {
            RangeTerm::Single(position) => {
                if let Some(word) = index.rank_at(position) {
                    words.push(word);
                }
            }
            RangeTerm::Span(from, to) => {
                // Clamp to the current size so a wide-open span ("1-999999")
                // stops at the last tracked word instead of probing the gap.
                let upper = to.min(index.len());
                for position in from..=upper {
                    if let Some(word) = index.rank_at(position) {
                        words.push(word);
                    }
                }
            }
        }
    }
    Ok(words)
}

/// Parses a full specification into terms, rejecting it on the first
/// malformed one.
pub fn parse_spec(spec: &str) -> Result<Vec<RangeTerm>> {
    spec.split(',').map(parse_term).collect()
}

fn parse_term(term: &str) -> Result<RangeTerm> {
    match term.split_once('-') {
        None => Ok(RangeTerm::Single(parse_position(term)?)),
        Some((from, to)) => Ok(RangeTerm::Span(parse_position(from)?, parse_position(to)?)),
    }
}

/// A rank position is a positive integer; anything else (non-numeric, empty
/// from a missing bound, zero) makes the term malformed.
fn parse_position(raw: &str) -> Result<usize> {
    let position: usize = raw
        .parse()
        .map_err(|_| WordRankError::MalformedRange(raw.to_string()))?;
    if position == 0 {
        return Err(WordRankError::MalformedRange(raw.to_string()));
    }
    Ok(position)
}
