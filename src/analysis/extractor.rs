//! Coinbase entry extraction from `list-notes` wallet dumps
//!
//! A coinbase note carries the marker `is-coinbase=%.y` somewhere before its
//! lock, and the lock lists the reward signature as `pks=<|...|>`. The
//! scanner finds a marker, then the next opening delimiter, then the first
//! closing delimiter after it, and yields the text in between. Scanning
//! resumes after the closing delimiter, so matches never overlap and any
//! marker inside a matched span is swallowed by it.

/// Literal that flags a note as a coinbase reward
pub const COINBASE_MARKER: &str = "is-coinbase=%.y";

/// Opens the signature block of a note lock
pub const SIGNATURE_OPEN: &str = "pks=<|";

/// Closes the signature block
pub const SIGNATURE_CLOSE: &str = "|>";

/// Iterator over raw signature payloads, in textual order
///
/// Malformed input never errors: a marker with no complete signature block
/// after it ends the scan.
#[derive(Debug, Clone)]
pub struct CoinbaseScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> CoinbaseScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn scan_next(&self) -> Option<(usize, usize, usize)> {
        let rest = &self.text[self.pos..];

        let marker = rest.find(COINBASE_MARKER)?;
        let after_marker = marker + COINBASE_MARKER.len();

        let open = after_marker + rest[after_marker..].find(SIGNATURE_OPEN)?;
        let payload_start = open + SIGNATURE_OPEN.len();

        let payload_end = payload_start + rest[payload_start..].find(SIGNATURE_CLOSE)?;
        let resume = payload_end + SIGNATURE_CLOSE.len();

        Some((
            self.pos + payload_start,
            self.pos + payload_end,
            self.pos + resume,
        ))
    }
}

impl<'a> Iterator for CoinbaseScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.scan_next() {
            Some((start, end, resume)) => {
                self.pos = resume;
                Some(&self.text[start..end])
            }
            None => {
                // Every later marker sees a suffix of the same text, so none
                // of them can complete either.
                self.pos = self.text.len();
                None
            }
        }
    }
}

impl std::iter::FusedIterator for CoinbaseScanner<'_> {}

/// Payloads extracted from one dump plus marker bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub payloads: Vec<&'a str>,
    pub markers_seen: usize,
}

impl Extraction<'_> {
    /// Markers that did not yield a payload (unterminated, or swallowed by
    /// an earlier match)
    pub fn discarded_markers(&self) -> usize {
        self.markers_seen.saturating_sub(self.payloads.len())
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

/// Extract every coinbase signature payload from raw wallet text
pub fn extract_coinbase_entries(raw: &str) -> Extraction<'_> {
    Extraction {
        payloads: CoinbaseScanner::new(raw).collect(),
        markers_seen: raw.matches(COINBASE_MARKER).count(),
    }
}
