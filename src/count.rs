//! Adjectivalness counting
//!
//! A word's adjectivalness is the share of its occurrences that are directly followed by a token
//! tagged as a singular common noun. Matching the word is case-insensitive; matching the tag is
//! exact, so `NN-TL` or `NNS` do not count as `NN`.
use crate::corpus::TaggedToken;
use crate::farm::{FarmMap, new_farm};

/// Brown tag for singular common nouns
pub const NOUN_TAG: &str = "NN";

/// What to do with a match on the very first token of the corpus
///
/// The successor check has always been guarded by `0 < i`, so a hit at position 0 is counted as
/// an occurrence but never as noun-followed. `Counted` lifts only that guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstToken {
    Ignored,
    Counted,
}

impl Default for FirstToken {
    fn default() -> Self { FirstToken::Ignored }
}

/// Which successors count as nouns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub noun_tag: String,
    pub first_token: FirstToken,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria { noun_tag: NOUN_TAG.to_string(), first_token: FirstToken::default() }
    }
}

impl Criteria {
    /// Is the occurrence at `idx` followed by a noun?
    ///
    /// The last token has no successor, so it never is.
    fn noun_follows(&self, tokens: &[TaggedToken], idx: usize) -> bool {
        if idx == 0 && self.first_token == FirstToken::Ignored {
            return false;
        }
        tokens.get(idx + 1).map_or(false, |next| next.tag == self.noun_tag)
    }
}

/// Counts for one candidate word
#[derive(Debug, Clone, PartialEq)]
pub struct WordStat {
    pub word: String,
    pub total_count: u64,
    pub noun_follow_count: u64,
    pub adjectivalness: f64,
}

impl WordStat {
    /// Derive the ratio; a word that never occurs scores 0
    pub fn new<W: Into<String>>(word: W, total_count: u64, noun_follow_count: u64) -> Self {
        assert!(noun_follow_count <= total_count,
            "{} noun-followed occurrences out of only {}", noun_follow_count, total_count);
        let adjectivalness = if total_count > 0 {
            noun_follow_count as f64 / total_count as f64
        } else {
            0.0
        };
        WordStat { word: word.into(), total_count, noun_follow_count, adjectivalness }
    }
}

/// Count a word with one pass over the whole corpus
pub fn scan(tokens: &[TaggedToken], word: &str, criteria: &Criteria) -> WordStat {
    let target = word.to_lowercase();
    let mut total = 0;
    let mut noun_follow = 0;
    for (idx, token) in tokens.iter().enumerate() {
        if token.word.to_lowercase() != target {
            continue;
        }
        total += 1;
        if criteria.noun_follows(tokens, idx) {
            noun_follow += 1;
        }
    }
    WordStat::new(word, total, noun_follow)
}

/// Where each (lowercased) word occurs in the corpus
///
/// Building it costs one pass; afterwards each lookup only touches the word's own occurrences,
/// which matters with thousands of candidates against a million tokens.
pub struct PositionIndex {
    positions: FarmMap<String, Vec<usize>>,
}

impl PositionIndex {
    pub fn build(tokens: &[TaggedToken]) -> Self {
        let mut positions: FarmMap<String, Vec<usize>> = new_farm();
        for (idx, token) in tokens.iter().enumerate() {
            positions.entry(token.word.to_lowercase())
                .or_insert_with(Vec::new)
                .push(idx);
        }
        debug!("Indexed {} distinct lowercase words", positions.len());
        PositionIndex { positions }
    }

    /// Number of distinct lowercase words
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Same result as `scan` over the tokens this index was built from
    pub fn count(&self, tokens: &[TaggedToken], word: &str, criteria: &Criteria) -> WordStat {
        let found = self.positions.get(&word.to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let noun_follow = found.iter()
            .filter(|&&idx| criteria.noun_follows(tokens, idx))
            .count();
        WordStat::new(word, found.len() as u64, noun_follow as u64)
    }
}
