//! Style-biased selection — the bypass path for explicit style hints.
//!
//! When the caller supplies a style hint containing "dark", "light", or
//! "colorful"/"vibrant", keyword scoring is skipped entirely. Each style
//! carries a small ordered decision list of (substring, theme) pairs that is
//! evaluated first-match-wins against the corpus, with a per-style default
//! when nothing matches.
//!
//! These lists are deliberately separate from the scoring tables in
//! [`crate::tables`] — merging them would break the bypass semantics.

/// A recognized style hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreference {
    /// Dark backgrounds ("dark").
    Dark,
    /// Light backgrounds ("light").
    Light,
    /// Saturated palettes ("colorful" or "vibrant").
    Colorful,
}

/// Decision list for dark hints. `"database"` is shadowed by `"data"` but
/// kept so the list reads as the documented pairs.
const DARK_RULES: &[(&str, &str)] = &[
    ("security", "hacker"),
    ("cyber", "hacker"),
    ("real-time", "cyborg"),
    ("analytics", "cyborg"),
    ("data", "carbon-gray"),
    ("database", "carbon-gray"),
    ("finance", "reddress-darkblue"),
    ("trading", "reddress-darkblue"),
];

const LIGHT_RULES: &[(&str, &str)] = &[
    ("documentation", "lightgray"),
    ("docs", "lightgray"),
    ("enterprise", "silver"),
    ("corporate", "silver"),
    ("science", "spacelab"),
    ("research", "spacelab"),
];

const COLORFUL_RULES: &[(&str, &str)] = &[
    ("web", "cerulean"),
    ("frontend", "cerulean"),
    ("startup", "vibrant"),
    ("innovation", "vibrant"),
    ("minimal", "minty"),
    ("simple", "minty"),
];

impl StylePreference {
    /// Parse a free-text style hint.
    ///
    /// Case-insensitive substring tests, checked dark → light → colorful;
    /// returns `None` for hints that name no recognized style (the caller
    /// then falls through to general scoring).
    #[must_use]
    pub fn parse(hint: &str) -> Option<Self> {
        let hint = hint.to_lowercase();
        if hint.contains("dark") {
            Some(Self::Dark)
        } else if hint.contains("light") {
            Some(Self::Light)
        } else if hint.contains("colorful") || hint.contains("vibrant") {
            Some(Self::Colorful)
        } else {
            None
        }
    }

    /// The decision list for this style.
    const fn rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Dark => DARK_RULES,
            Self::Light => LIGHT_RULES,
            Self::Colorful => COLORFUL_RULES,
        }
    }

    /// The theme used when no rule matches the corpus.
    #[must_use]
    pub const fn default_theme(self) -> &'static str {
        match self {
            Self::Dark => "cyborg",
            Self::Light => "silver",
            Self::Colorful => "vibrant",
        }
    }

    /// Select a theme for a prepared (lowercased) corpus.
    ///
    /// First rule whose substring occurs in the corpus wins; otherwise the
    /// style default.
    #[must_use]
    pub fn select(self, corpus: &str) -> &'static str {
        self.rules()
            .iter()
            .find(|(needle, _)| corpus.contains(needle))
            .map_or(self.default_theme(), |&(_, theme)| theme)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
