//! Punctuation stripping for token comparison

use std::borrow::Cow;

/// Characters stripped from a token before it is compared to the target word
pub const DEFAULT_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '"', '\'', '?', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=',
    '-', '_', '`', '~', '(', ')',
];

/// Immutable set of punctuation characters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PunctuationSet {
    chars: Cow<'static, [char]>,
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self {
            chars: Cow::Borrowed(DEFAULT_PUNCTUATION),
        }
    }
}

impl PunctuationSet {
    /// Build a custom set from the characters of `chars`
    pub fn from_chars(chars: &str) -> Self {
        let mut set: Vec<char> = chars.chars().collect();
        set.sort_unstable();
        set.dedup();
        Self {
            chars: Cow::Owned(set),
        }
    }

    /// Whether `ch` belongs to the set
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Characters in the set
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Remove every punctuation character from `token`, then collapse each run
    /// of two or more whitespace characters into a single space.
    ///
    /// Whitespace is Unicode `White_Space` ([`char::is_whitespace`]): U+0085
    /// counts, U+FEFF does not.
    pub fn strip(&self, token: &str) -> String {
        let mut out = String::with_capacity(token.len());
        let mut pending_ws: Option<char> = None;
        let mut ws_run = 0usize;

        for ch in token.chars().filter(|&c| !self.contains(c)) {
            if ch.is_whitespace() {
                if ws_run == 0 {
                    pending_ws = Some(ch);
                }
                ws_run += 1;
                continue;
            }
            flush_whitespace(&mut out, pending_ws.take(), ws_run);
            ws_run = 0;
            out.push(ch);
        }
        flush_whitespace(&mut out, pending_ws, ws_run);

        out
    }
}

fn flush_whitespace(out: &mut String, first: Option<char>, run: usize) {
    match (first, run) {
        (Some(ch), 1) => out.push(ch),
        (Some(_), _) => out.push(' '),
        (None, _) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_surrounding_punctuation() {
        let set = PunctuationSet::default();
        assert_eq!(set.strip("Cat,"), "Cat");
        assert_eq!(set.strip("(\"dog!\")"), "dog");
        assert_eq!(set.strip("..."), "");
    }

    #[test]
    fn test_strip_interior_punctuation() {
        let set = PunctuationSet::default();
        assert_eq!(set.strip("c.a.t"), "cat");
        assert_eq!(set.strip("don't"), "dont");
    }

    #[test]
    fn test_strip_keeps_unlisted_symbols() {
        let set = PunctuationSet::default();
        assert_eq!(set.strip("[cat]"), "[cat]");
        assert_eq!(set.strip("cat@home"), "cat@home");
        assert_eq!(set.strip("a+b<c>|d\\e"), "a+b<c>|d\\e");
    }

    #[test]
    fn test_strip_collapses_whitespace_runs() {
        let set = PunctuationSet::default();
        assert_eq!(set.strip("a\t\tb"), "a b");
        assert_eq!(set.strip("a\t.\tb"), "a b");
        assert_eq!(set.strip("a\tb"), "a\tb");
        assert_eq!(set.strip("\t\t"), " ");
    }

    #[test]
    fn test_whitespace_is_unicode_white_space() {
        let set = PunctuationSet::default();
        assert_eq!(set.strip("a\u{85}\u{85}b"), "a b");
        assert_eq!(set.strip("a\u{3000}\u{3000}b"), "a b");
        assert_eq!(set.strip("a\u{feff}\u{feff}b"), "a\u{feff}\u{feff}b");
    }

    #[test]
    fn test_default_set_is_complete() {
        let set = PunctuationSet::default();
        for ch in ".,/#\"'?!$%^&*;:{}=-_`~()".chars() {
            assert!(set.contains(ch), "missing {ch:?}");
        }
        assert_eq!(set.chars().len(), 24);
    }

    #[test]
    fn test_custom_set() {
        let set = PunctuationSet::from_chars("[]..");
        assert_eq!(set.chars(), &['.', '[', ']']);
        assert_eq!(set.strip("[cat]."), "cat");
        assert_eq!(set.strip("cat,"), "cat,");
    }
}
