use std::fs::File;
use std::io::{BufRead, BufReader};

use log::{debug, warn};

use crate::error::InputError;

/// A named, non-negatively weighted member of the multiset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub weight: u64,
    pub name: String,
}

impl Element {
    pub fn new(weight: u64, name: &str) -> Self {
        Self {
            weight,
            name: name.to_string(),
        }
    }

    /// Returns `sum - weight` when the element fits into `sum`.
    #[inline(always)]
    pub fn remainder(&self, sum: usize) -> Option<usize> {
        usize::try_from(self.weight)
            .ok()
            .and_then(|w| sum.checked_sub(w))
    }
}

/// What to do with a pair whose weight does not parse, or a trailing weight without a name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop reading and keep the pairs parsed so far.
    #[default]
    Truncate,
    /// Report the offending pair as an error.
    Reject,
}

/// The element list in internal order: the last element read is index 0.
/// The DP tables address element `i` (1-based) as `get(i - 1)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSet {
    elements: Vec<Element>,
}

impl ElementSet {
    /// Builds the internal ordering from elements given in input order.
    pub fn from_input_order(mut elements: Vec<Element>) -> Self {
        elements.reverse();
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at internal index `idx` (0-based).
    pub fn get(&self, idx: usize) -> &Element {
        &self.elements[idx]
    }
}

/// Reads whitespace separated `<weight> <name>` pairs until end of stream.
/// Returns the elements in input order.
pub fn read_elements<R: BufRead>(
    mut reader: R,
    policy: MalformedPolicy,
) -> Result<Vec<Element>, InputError> {
    read_named(&mut reader, "<stdin>", policy)
}

/// Reads `<weight> <name>` pairs from a file.
pub fn read_elements_from_file(
    path: &str,
    policy: MalformedPolicy,
) -> Result<Vec<Element>, InputError> {
    let file = File::open(path).map_err(|e| InputError::Io {
        source_name: path.to_string(),
        source: e,
    })?;
    read_named(&mut BufReader::new(file), path, policy)
}

fn read_named<R: BufRead>(
    reader: &mut R,
    source_name: &str,
    policy: MalformedPolicy,
) -> Result<Vec<Element>, InputError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| InputError::Io {
            source_name: source_name.to_string(),
            source: e,
        })?;

    let mut elements = Vec::new();
    let mut tokens = bytes
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty());

    while let Some(token) = tokens.next() {
        let pair = elements.len() + 1;

        let weight = match std::str::from_utf8(token)
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
        {
            Some(w) => w,
            None => {
                let err = InputError::MalformedWeight {
                    pair,
                    token: String::from_utf8_lossy(token).into_owned(),
                };
                return truncate_or_reject(elements, err, policy);
            }
        };

        let Some(name) = tokens.next() else {
            let err = InputError::MissingName { pair, weight };
            return truncate_or_reject(elements, err, policy);
        };

        let Ok(name) = std::str::from_utf8(name) else {
            let err = InputError::InvalidName {
                pair,
                name: String::from_utf8_lossy(name).into_owned(),
            };
            return truncate_or_reject(elements, err, policy);
        };

        elements.push(Element::new(weight, name));
    }

    debug!("Read {} elements from {}", elements.len(), source_name);
    Ok(elements)
}

fn truncate_or_reject(
    elements: Vec<Element>,
    err: InputError,
    policy: MalformedPolicy,
) -> Result<Vec<Element>, InputError> {
    match policy {
        MalformedPolicy::Reject => Err(err),
        MalformedPolicy::Truncate => {
            warn!(
                "{}; ignoring it and everything after, keeping {} elements",
                err,
                elements.len()
            );
            Ok(elements)
        }
    }
}
