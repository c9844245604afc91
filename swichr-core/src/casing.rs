//! Per-character casing templates
//!
//! A template is taken from a matched occurrence of the target word and cloned
//! positionally onto the substitute word.

use smallvec::SmallVec;

/// Casing of a single character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Casing {
    /// Lower-casing the character is a no-op
    Lower,
    /// Everything else, including digits and symbols
    Upper,
}

impl Casing {
    /// Classify a character.
    ///
    /// A character is `Lower` only if lower-casing it yields exactly itself.
    /// Characters without case (digits, symbols) therefore classify as `Upper`.
    pub fn classify(ch: char) -> Self {
        let mut lowered = ch.to_lowercase();
        if lowered.next() == Some(ch) && lowered.next().is_none() {
            Casing::Lower
        } else {
            Casing::Upper
        }
    }

    /// Push `ch` re-cased according to `self` onto `out`.
    ///
    /// Mappings that expand (`'ß'` upper-cases to `"SS"`) are written in full.
    pub fn apply_to(self, ch: char, out: &mut String) {
        match self {
            Casing::Lower => out.extend(ch.to_lowercase()),
            Casing::Upper => out.extend(ch.to_uppercase()),
        }
    }
}

/// Ordered casing tags, one per character of a matched word
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CasingTemplate {
    tags: SmallVec<[Casing; 16]>,
}

impl CasingTemplate {
    /// Build a template from a word, one tag per `char`
    pub fn from_word(word: &str) -> Self {
        Self {
            tags: word.chars().map(Casing::classify).collect(),
        }
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the template has no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags in order
    pub fn tags(&self) -> &[Casing] {
        &self.tags
    }

    /// Clone this template's casing onto `word`.
    ///
    /// The first `min(self.len(), word chars)` characters are re-cased per
    /// position; any characters of `word` beyond the template are copied
    /// verbatim. Surplus tags are ignored.
    pub fn apply(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        let mut chars = word.char_indices();
        let mut rest = word.len();

        for &casing in &self.tags {
            match chars.next() {
                Some((_, ch)) => casing.apply_to(ch, &mut out),
                None => break,
            }
        }
        if let Some((idx, _)) = chars.next() {
            rest = idx;
        }

        out.push_str(&word[rest..]);
        out
    }
}
