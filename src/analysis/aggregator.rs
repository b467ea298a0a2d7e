//! Signature normalization and occurrence counting

use std::collections::HashMap;

/// Strip every whitespace character from a raw payload
///
/// Wallet dumps wrap long signatures across lines, so payloads that differ
/// only in whitespace are the same signature.
pub fn normalize_signature(payload: &str) -> String {
    payload.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Occurrence count per normalized signature
///
/// Iteration follows the order in which each signature was first recorded,
/// which downstream ranking uses as its tie-break.
#[derive(Debug, Clone, Default)]
pub struct SignatureCounts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl SignatureCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of an already normalized signature
    pub fn record(&mut self, signature: String) {
        match self.index.get(&signature) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(signature.clone(), self.entries.len());
                self.entries.push((signature, 1));
            }
        }
    }

    pub fn get(&self, signature: &str) -> Option<u64> {
        self.index.get(signature).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct signatures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of payloads recorded
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(signature, count)| (signature.as_str(), *count))
    }
}

/// Normalize and count a sequence of raw payloads
pub fn count_signatures<I, S>(payloads: I) -> SignatureCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = SignatureCounts::new();
    for payload in payloads {
        counts.record(normalize_signature(payload.as_ref()));
    }
    counts
}
