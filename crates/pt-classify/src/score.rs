//! The scoring engine — keyword matching over a lowercased corpus.
//!
//! Scoring is a single pass over the static tables:
//!
//! 1. Every keyword of every theme is tested against the corpus. A substring
//!    hit scores 1; a hit that also sits on word boundaries scores 2 instead
//!    (whole-word supersedes substring, it does not stack).
//! 2. Every pattern rule whose keyword appears in the corpus adds a flat +3
//!    to its target theme.
//! 3. Two special cases add bonuses for real-time analytics and for
//!    IoT/streaming topics.
//!
//! The score table keeps entries in the order they were first scored, and
//! [`ScoreTable::best`] keeps the earliest entry on ties, so selection is
//! deterministic for any input.

use crate::tables::{
    ANALYTICS_TRIGGERS, KEYWORD_CATALOG, PATTERN_RULES, REALTIME_TRIGGERS, STREAMING_TRIGGERS,
};

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

/// Build the scoring corpus: topic and content concatenated and lowercased.
///
/// Content defaults to empty; the two halves are weighted identically once
/// joined.
#[must_use]
pub fn build_corpus(topic: &str, content: Option<&str>) -> String {
    format!("{topic} {}", content.unwrap_or_default()).to_lowercase()
}

/// Word characters for boundary detection: letters, digits, underscore.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whether `keyword` occurs in `corpus` on word boundaries.
///
/// A boundary exists where the neighboring character (if any) is not a word
/// character. Keywords all start and end with word characters, so checking
/// the two neighbors of each occurrence is equivalent to a `\b...\b` match.
fn whole_word_match(corpus: &str, keyword: &str) -> bool {
    let mut start = 0;
    while let Some(idx) = corpus[start..].find(keyword) {
        let at = start + idx;
        let end = at + keyword.len();
        let before_ok = corpus[..at].chars().next_back().is_none_or(|c| !is_word_char(c));
        let after_ok = corpus[end..].chars().next().is_none_or(|c| !is_word_char(c));
        if before_ok && after_ok {
            return true;
        }
        // Keywords are ASCII, so byte `at + 1` is a char boundary.
        start = at + 1;
    }
    false
}

/// Whether any of `needles` occurs in `corpus` as a substring.
fn contains_any(corpus: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| corpus.contains(n))
}

// ---------------------------------------------------------------------------
// Score table
// ---------------------------------------------------------------------------

/// Request-scoped accumulator mapping theme names to scores.
///
/// Built fresh per classification call and discarded after the winner is
/// picked. Entries stay in first-scored order, which is what makes the
/// tie-break deterministic.
#[derive(Debug, Default)]
pub struct ScoreTable {
    entries: Vec<(&'static str, u32)>,
}

impl ScoreTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add `points` to `theme`, creating the entry if absent.
    pub fn add(&mut self, theme: &'static str, points: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == theme) {
            entry.1 += points;
        } else {
            self.entries.push((theme, points));
        }
    }

    /// The accumulated score for `theme` (0 when unscored).
    #[must_use]
    pub fn get(&self, theme: &str) -> u32 {
        self.entries
            .iter()
            .find(|(name, _)| *name == theme)
            .map_or(0, |(_, score)| *score)
    }

    /// Whether no theme has scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The theme with the strictly highest score.
    ///
    /// On ties the earliest-scored entry wins. Returns `None` for an empty
    /// table.
    #[must_use]
    pub fn best(&self) -> Option<&'static str> {
        let mut winner: Option<(&'static str, u32)> = None;
        for &(theme, score) in &self.entries {
            match winner {
                Some((_, top)) if score <= top => {}
                _ => winner = Some((theme, score)),
            }
        }
        winner.map(|(theme, _)| theme)
    }
}

// ---------------------------------------------------------------------------
// Scoring passes
// ---------------------------------------------------------------------------

/// Score every theme against a prepared corpus.
///
/// Runs the keyword pass, the pattern-rule pass, and the special-case
/// bonuses, in that order. Themes with no hits get no entry at all.
#[must_use]
pub fn score(corpus: &str) -> ScoreTable {
    let mut table = ScoreTable::new();

    // Keyword pass, in catalog (tie-break) order.
    for &(theme, keywords) in KEYWORD_CATALOG {
        let mut total = 0;
        for &keyword in keywords {
            if corpus.contains(keyword) {
                total += if whole_word_match(corpus, keyword) { 2 } else { 1 };
            }
        }
        if total > 0 {
            table.add(theme, total);
        }
    }

    // Pattern-rule pass: flat +3 per matched pattern.
    for &(pattern, target) in PATTERN_RULES {
        if corpus.contains(pattern) {
            table.add(target, 3);
        }
    }

    // Real-time analytics: the canonical dark-dashboard case.
    if contains_any(corpus, REALTIME_TRIGGERS) && contains_any(corpus, ANALYTICS_TRIGGERS) {
        table.add("cyborg", 5);
    }

    // IoT and streaming pull toward the industrial and dark looks.
    if contains_any(corpus, STREAMING_TRIGGERS) {
        table.add("metal", 3);
        table.add("cyborg", 2);
    }

    table
}

/// The best-scoring theme for a corpus, or `None` when nothing scored.
#[must_use]
pub fn best_match(corpus: &str) -> Option<&'static str> {
    score(corpus).best()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // -- Corpus ------------------------------------------------------------

    #[test]
    fn corpus_lowercases_and_joins() {
        assert_eq!(build_corpus("Real-Time API", Some("Kafka")), "real-time api kafka");
        assert_eq!(build_corpus("Topic", None), "topic ");
    }

    // -- Whole-word matching -----------------------------------------------

    #[test]
    fn whole_word_requires_boundaries() {
        assert!(whole_word_match("our new api design", "api"));
        assert!(!whole_word_match("rapid prototyping", "api"));
    }

    #[test]
    fn whole_word_found_past_embedded_hit() {
        // First occurrence is embedded, a later one stands alone.
        assert!(whole_word_match("rapid api calls", "api"));
    }

    #[test]
    fn whole_word_at_string_edges() {
        assert!(whole_word_match("api", "api"));
        assert!(whole_word_match("api gateway", "api"));
        assert!(whole_word_match("the api", "api"));
    }

    #[test]
    fn hyphenated_keyword_matches_whole() {
        assert!(whole_word_match("a real-time feed", "real-time"));
    }

    #[test]
    fn underscore_is_a_word_char() {
        assert!(!whole_word_match("api_gateway", "api"));
    }

    // -- ScoreTable --------------------------------------------------------

    #[test]
    fn add_accumulates() {
        let mut t = ScoreTable::new();
        t.add("cyborg", 2);
        t.add("cyborg", 5);
        assert_eq!(t.get("cyborg"), 7);
    }

    #[test]
    fn best_of_empty_is_none() {
        assert_eq!(ScoreTable::new().best(), None);
    }

    #[test]
    fn ties_keep_the_earliest_entry() {
        let mut t = ScoreTable::new();
        t.add("aws-orange", 3);
        t.add("bluegray", 3);
        assert_eq!(t.best(), Some("aws-orange"));
    }

    #[test]
    fn strictly_higher_score_wins_regardless_of_order() {
        let mut t = ScoreTable::new();
        t.add("aws-orange", 3);
        t.add("bluegray", 4);
        assert_eq!(t.best(), Some("bluegray"));
    }

    // -- Scoring passes ----------------------------------------------------

    #[test]
    fn whole_word_outscores_substring() {
        // "data" appears embedded in "database" (substring, 1 point) while
        // "database" itself is a whole word (2 points): 3 total.
        let table = score("database design");
        assert_eq!(table.get("carbon-gray"), 3 + 3); // +3 from the "database" pattern rule
    }

    #[test]
    fn pattern_rule_adds_flat_bonus() {
        let table = score("exploring microservices for our app");
        // "microservice" is an embedded substring (1) + pattern "microservices" (+3).
        assert_eq!(table.get("bluegray"), 4);
        // "app" is a whole-word hit for materia only.
        assert_eq!(table.get("materia"), 2);
    }

    #[test]
    fn pattern_rule_creates_missing_entry() {
        let table = score("serverless");
        assert_eq!(table.get("aws-orange"), 3);
    }

    #[test]
    fn realtime_analytics_bonus() {
        // "analytics" scores 2 in both corpora; "realtime" matches no
        // keyword, so the delta is exactly the +5 special case.
        let with = score("realtime analytics");
        let without = score("analytics");
        assert_eq!(with.get("cyborg") - without.get("cyborg"), 5);
    }

    #[test]
    fn streaming_bonus_applies_to_both_themes() {
        let table = score("kafka pipelines");
        assert_eq!(table.get("metal"), 3);
        assert_eq!(table.get("cyborg"), 2);
    }

    #[test]
    fn unmatched_corpus_scores_nothing() {
        assert!(score("zzz qqq").is_empty());
        assert_eq!(best_match("zzz qqq"), None);
    }
}
