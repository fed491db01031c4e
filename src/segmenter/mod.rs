// WHY: Single engine type over configurable rule sets; language profiles are
// data passed at construction, not subtypes

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod abbreviations;
pub mod assembly;
pub mod lines;
pub mod normalization;
pub mod punctuation;
pub mod quotes;

/// Bit flags accepted by [`SentenceSegmenter::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitFlags(u32);

impl SplitFlags {
    /// No post-processing; sentences keep their original whitespace.
    pub const NONE: SplitFlags = SplitFlags(0);
    /// Trim leading and trailing whitespace from every returned sentence.
    pub const TRIM: SplitFlags = SplitFlags(0x1);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: SplitFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for SplitFlags {
    type Output = SplitFlags;

    fn bitor(self, rhs: SplitFlags) -> SplitFlags {
        SplitFlags(self.0 | rhs.0)
    }
}

/// Configuration for sentence boundary detection rules.
///
/// Different language profiles are different instances of this struct; the
/// defaults cover Germanic-structured, Latin-alphabet languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationRules {
    /// Characters that can terminate a sentence
    pub terminals: Vec<char>,
    /// Terminal characters that also appear inside abbreviations, so their
    /// presence alone does not guarantee a boundary
    pub abbreviators: Vec<char>,
}

impl Default for SegmentationRules {
    fn default() -> Self {
        Self {
            terminals: vec!['.', '!', '?'],
            abbreviators: vec!['.'],
        }
    }
}

/// Rule-based sentence boundary detector.
///
/// Owns only the two configured character sets and is otherwise stateless:
/// `split` and `count` are pure functions of (rules, input) and the same
/// instance may be shared across threads without synchronization.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    rules: SegmentationRules,
    // terminals minus abbreviators; these always end a sentence
    definite_terminals: Vec<char>,
}

impl SentenceSegmenter {
    /// Create a segmenter with custom rules.
    ///
    /// Fails when the terminal set is empty or an abbreviator is not a
    /// member of the terminal set; both are caller configuration errors,
    /// not runtime conditions.
    pub fn new(rules: SegmentationRules) -> Result<Self> {
        if rules.terminals.is_empty() {
            bail!("terminal character set must not be empty");
        }
        if let Some(stray) = rules
            .abbreviators
            .iter()
            .find(|c| !rules.terminals.contains(c))
        {
            bail!("abbreviator {stray:?} is not in the terminal set");
        }

        let definite_terminals = rules
            .terminals
            .iter()
            .copied()
            .filter(|c| !rules.abbreviators.contains(c))
            .collect();

        Ok(Self {
            rules,
            definite_terminals,
        })
    }

    /// Create a segmenter with the default Germanic-language rules.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(SegmentationRules::default())
    }

    pub fn rules(&self) -> &SegmentationRules {
        &self.rules
    }

    /// Terminal characters that are not abbreviators.
    pub fn definite_terminals(&self) -> &[char] {
        &self.definite_terminals
    }

    /// Split `text` into sentences.
    ///
    /// Without [`SplitFlags::TRIM`] the returned sentences concatenate back
    /// to the quote-normalized input; with it, each sentence is additionally
    /// stripped of leading and trailing whitespace.
    pub fn split(&self, text: &str, flags: SplitFlags) -> Vec<String> {
        let text = normalization::clean_unicode(text);

        let mut sentences = Vec::new();
        let mut line_count = 0usize;
        for line in lines::linebreak_split(&text) {
            // Blank lines contribute no sentences
            if line.trim().is_empty() {
                continue;
            }
            line_count += 1;
            sentences.extend(self.split_line(&line));
        }

        debug!(
            chars = text.chars().count(),
            lines = line_count,
            sentences = sentences.len(),
            "segmented text"
        );

        if flags.contains(SplitFlags::TRIM) {
            sentences.iter().map(|s| s.trim().to_string()).collect()
        } else {
            sentences
        }
    }

    /// Split a single non-blank line through the merge passes.
    fn split_line(&self, line: &str) -> Vec<String> {
        let fragments = punctuation::punctuation_split(line, &self.rules.terminals);
        let fragments = punctuation::parentheses_merge(fragments);
        let fragments =
            punctuation::punctuation_merge(fragments, &self.rules.terminals, &self.definite_terminals);
        let fragments = abbreviations::abbreviation_merge(fragments);
        let fragments = quotes::close_quotes_merge(fragments);
        assembly::sentence_merge(fragments, &self.definite_terminals)
    }

    /// Convenience wrapper for `split(text, SplitFlags::TRIM)`.
    pub fn split_trimmed(&self, text: &str) -> Vec<String> {
        self.split(text, SplitFlags::TRIM)
    }

    /// Number of sentences detected in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.split(text, SplitFlags::NONE).len()
    }
}
