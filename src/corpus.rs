//! In-memory tagged corpus
//!
//! The corpus is one flat sequence of (word, tag) pairs in document order. Sentence and document
//! boundaries are not kept; the counter only ever looks one token ahead.
use std::ops::Deref;

/// A word as it appears in the corpus together with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new<W: Into<String>, T: Into<String>>(word: W, tag: T) -> Self {
        TaggedToken { word: word.into(), tag: tag.into() }
    }
}

/// Read-only handle on a loaded corpus
///
/// Build it once at startup and pass it by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct TaggedCorpus {
    tokens: Vec<TaggedToken>,
}

impl TaggedCorpus {
    pub fn new(tokens: Vec<TaggedToken>) -> Self {
        TaggedCorpus { tokens }
    }

    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }
}

impl Deref for TaggedCorpus {
    type Target = [TaggedToken];

    fn deref(&self) -> &[TaggedToken] {
        &self.tokens
    }
}

impl From<Vec<(&str, &str)>> for TaggedCorpus {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        TaggedCorpus::new(pairs.into_iter().map(|(w, t)| TaggedToken::new(w, t)).collect())
    }
}
