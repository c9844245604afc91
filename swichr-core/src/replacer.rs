//! Case-aware word replacement
//!
//! Lines are split on single spaces. Each token is compared to the target word
//! with punctuation removed and case ignored; on a match the substitute word
//! takes on the casing of the matched core and is written back into the
//! token's punctuation shell.

use crate::casing::CasingTemplate;
use crate::punctuation::PunctuationSet;
use std::borrow::Cow;

/// Result of replacing within one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacedLine {
    /// The transformed line
    pub text: String,
    /// Number of tokens that were replaced
    pub replacements: usize,
}

/// Reusable replacer for a fixed target/substitute pair
#[derive(Debug, Clone)]
pub struct Replacer {
    target: String,
    target_lower: String,
    substitute: String,
    punctuation: PunctuationSet,
}

impl Replacer {
    /// Create a replacer using the default punctuation set
    pub fn new(target: &str, substitute: &str) -> Self {
        Self::with_punctuation(target, substitute, PunctuationSet::default())
    }

    /// Create a replacer with a custom punctuation set
    pub fn with_punctuation(target: &str, substitute: &str, punctuation: PunctuationSet) -> Self {
        Self {
            target: target.to_string(),
            target_lower: target.to_lowercase(),
            substitute: substitute.to_string(),
            punctuation,
        }
    }

    /// The target word as given
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The substitute word as given
    pub fn substitute(&self) -> &str {
        &self.substitute
    }

    /// The punctuation set in use
    pub fn punctuation(&self) -> &PunctuationSet {
        &self.punctuation
    }

    /// Replace every matching token in `line`
    pub fn replace_line(&self, line: &str) -> ReplacedLine {
        let mut text = String::with_capacity(line.len());
        let mut replacements = 0;

        for (i, token) in line.split(' ').enumerate() {
            if i > 0 {
                text.push(' ');
            }
            let replaced = self.replace_token(token);
            if let Cow::Owned(_) = replaced {
                replacements += 1;
            }
            text.push_str(&replaced);
        }

        ReplacedLine { text, replacements }
    }

    /// Replace a single token, borrowing it back unchanged when it does not match
    pub fn replace_token<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let core = self.punctuation.strip(token);

        // Stripping interior punctuation ("c.a.t") can yield a core that is not
        // contiguous in the token; such tokens never match.
        if !token.contains(core.as_str()) || core.to_lowercase() != self.target_lower {
            return Cow::Borrowed(token);
        }

        let recased = CasingTemplate::from_word(&core).apply(&self.substitute);
        Cow::Owned(token.replacen(core.as_str(), &recased, 1))
    }
}

/// Replace `target` with `substitute` throughout `line`, preserving the casing
/// and punctuation of each occurrence.
pub fn replace(line: &str, target: &str, substitute: &str) -> String {
    Replacer::new(target, substitute).replace_line(line).text
}
