//! Theme selection — the public classifier entry point.
//!
//! Ties the pieces together: corpus construction, the style-hint bypass,
//! keyword scoring, the no-score fallback chain, and the rationale string
//! that accompanies every selection.
//!
//! The contract is total: any combination of inputs — empty topic, absent
//! content, garbage style hint — resolves to a theme name and a non-empty
//! description. Nothing here can panic on caller input.

use crate::score;
use crate::style::StylePreference;
use crate::tables::{DEFAULT_THEME, FALLBACK_CHAIN};

/// A classification result: the chosen theme and why it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The selected theme name.
    pub theme: &'static str,
    /// One line explaining why this theme suits the input.
    pub description: String,
}

/// Select the best theme for a topic.
///
/// `content` is optional extra context, weighted identically to the topic.
/// `style` is an optional hint; when it names a recognized style ("dark",
/// "light", "colorful"/"vibrant") the keyword scoring is bypassed entirely
/// in favor of that style's decision list. Unrecognized hints are ignored.
///
/// Always returns a cataloged theme name and a non-empty description.
#[must_use]
pub fn select_theme(topic: &str, content: Option<&str>, style: Option<&str>) -> Selection {
    let corpus = score::build_corpus(topic, content);

    let theme = match style.and_then(StylePreference::parse) {
        Some(pref) => pref.select(&corpus),
        None => score::best_match(&corpus).unwrap_or_else(|| fallback(&corpus)),
    };

    Selection {
        theme,
        description: rationale(theme),
    }
}

/// Resolve a corpus that scored nothing.
///
/// Walks the category fallback chain in order, first substring hit wins;
/// otherwise the fixed default.
fn fallback(corpus: &str) -> &'static str {
    FALLBACK_CHAIN
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| corpus.contains(n)))
        .map_or(DEFAULT_THEME, |&(_, theme)| theme)
}

/// Why a theme was selected.
///
/// Themes the classifier commonly lands on have a tailored line; everything
/// else gets the generic template so the description is never empty.
#[must_use]
pub fn rationale(theme: &str) -> String {
    let fixed = match theme {
        "cyborg" => "Dark futuristic theme perfect for real-time systems and analytics",
        "metal" => "Industrial theme ideal for IoT and hardware systems",
        "bluegray" => "Professional theme for microservices and containerized apps",
        "carbon-gray" => "Modern dark theme for data-intensive applications",
        "cloudscape-design" => "AWS-inspired theme for cloud architectures",
        "blueprint" => "Technical blueprint style for architectural diagrams",
        "cerulean" => "Bright blue theme for web and API designs",
        "aws-orange" => "Official AWS theme for cloud services",
        "hacker" => "Matrix-style theme for security systems",
        "spacelab" => "Clean scientific theme for research and ML/AI",
        _ => return format!("Theme {theme} selected for optimal visualization"),
    };
    fixed.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
