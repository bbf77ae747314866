//! The static classification tables.
//!
//! Everything the classifier knows is in this file: which trigger words pull
//! toward which theme, which architectural patterns override them, and where
//! unmatched input falls. The tables are ordered — scoring iterates them
//! top to bottom, and on a score tie the earliest entry wins — so entry
//! order here is part of the observable contract.
//!
//! Keywords are lowercase because the corpus is lowercased before matching.
//! Note the sun theme is keyed as `"sunlust"` here while the supported-name
//! catalog spells it `"Sunlust"`; both literals are preserved as-is because
//! downstream consumers match on the exact strings.

/// Per-theme trigger keywords, in tie-break order.
///
/// A keyword found as a corpus substring scores 1 for its theme, or 2 when
/// it also matches at word boundaries. Keywords are not unique across
/// themes (`"cloud"`, `"game"`, `"space"` each appear twice).
pub const KEYWORD_CATALOG: &[(&str, &[&str])] = &[
    // Technical / professional
    ("aws-orange", &["aws", "cloud", "amazon", "s3", "ec2", "lambda"]),
    ("cloudscape-design", &["cloud", "infrastructure", "iaas", "paas", "saas"]),
    ("blueprint", &["architecture", "blueprint", "technical", "engineering", "design"]),
    // Dark / modern, for real-time and data systems
    ("cyborg", &["real-time", "streaming", "analytics", "dashboard", "monitoring"]),
    ("hacker", &["security", "hack", "penetration", "vulnerability", "cyber"]),
    ("black-knight", &["gaming", "game", "medieval", "fantasy"]),
    ("carbon-gray", &["data", "database", "storage", "warehouse"]),
    // Light / clean
    ("lightgray", &["documentation", "docs", "guide", "tutorial"]),
    ("silver", &["enterprise", "corporate", "business", "professional"]),
    ("spacelab", &["science", "research", "lab", "experiment", "space"]),
    // Colorful / vibrant
    ("vibrant", &["startup", "innovation", "creative", "new"]),
    ("cerulean", &["web", "frontend", "ui", "ux", "react", "angular", "vue"]),
    ("minty", &["fresh", "clean", "minimal", "simple"]),
    ("sunlust", &["warm", "friendly", "social", "community"]),
    ("sandstone", &["stable", "solid", "foundation", "core", "base"]),
    // Specialized
    ("mars", &["space", "nasa", "rocket", "astronomy", "exploration"]),
    ("superhero", &["hero", "super", "comic", "marvel", "power"]),
    ("toy", &["fun", "play", "game", "child", "education"]),
    ("amiga", &["retro", "vintage", "old", "classic", "legacy"]),
    ("crt-amber", &["terminal", "console", "cli", "command", "shell"]),
    // Material / modern
    ("materia", &["material", "google", "android", "mobile", "app"]),
    ("metal", &["industrial", "hardware", "embedded", "iot", "device"]),
    ("sketchy", &["draft", "prototype", "mockup", "wireframe", "sketch"]),
    // Professional variations
    ("united", &["team", "collaboration", "together", "unified"]),
    ("bluegray", &["kubernetes", "k8s", "docker", "container", "microservice"]),
    ("reddress-darkblue", &["finance", "fintech", "banking", "trading"]),
    ("reddress-lightblue", &["healthcare", "medical", "health", "hospital"]),
    // Special
    ("mimeograph", &["document", "report", "paper", "print"]),
    ("mono", &["simple", "basic", "minimalist", "clean"]),
    ("plain", &["default", "standard", "normal"]),
    ("none", &["raw", "unstyled", "basic"]),
];

/// Architectural-pattern overrides: a pattern keyword found anywhere in the
/// corpus adds a flat +3 to its target theme.
pub const PATTERN_RULES: &[(&str, &str)] = &[
    ("microservices", "bluegray"),
    ("monolithic", "sandstone"),
    ("serverless", "aws-orange"),
    ("event-driven", "cyborg"),
    ("api", "cerulean"),
    ("database", "carbon-gray"),
    ("ml", "spacelab"),
    ("ai", "spacelab"),
    ("blockchain", "hacker"),
    ("iot", "metal"),
];

/// Triggers for the real-time analytics special case (`cyborg` +5).
///
/// Fires when the corpus contains any of the first list AND any of the
/// second.
pub const REALTIME_TRIGGERS: &[&str] = &["real-time", "realtime"];
/// Second half of the real-time analytics special case.
pub const ANALYTICS_TRIGGERS: &[&str] = &["analytics", "dashboard"];

/// Triggers for the IoT/streaming special case (`metal` +3, `cyborg` +2).
pub const STREAMING_TRIGGERS: &[&str] = &["iot", "kafka", "flink", "streaming"];

/// Last-resort fallbacks for corpora that scored nothing, tried in order.
///
/// The first group with any substring hit decides the theme; nothing hits,
/// [`DEFAULT_THEME`] is used.
pub const FALLBACK_CHAIN: &[(&[&str], &str)] = &[
    (&["api", "rest", "graphql", "endpoint"], "cerulean"),
    (&["data", "database", "sql", "storage"], "carbon-gray"),
    (&["cloud", "aws", "azure", "gcp"], "cloudscape-design"),
    (&["docker", "kubernetes", "container"], "bluegray"),
];

/// The theme for input nothing else claimed — a good general technical look.
pub const DEFAULT_THEME: &str = "blueprint";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_catalog_has_no_duplicate_themes() {
        let mut seen = Vec::new();
        for (theme, _) in KEYWORD_CATALOG {
            assert!(!seen.contains(theme), "duplicate catalog entry '{theme}'");
            seen.push(*theme);
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for (theme, keywords) in KEYWORD_CATALOG {
            for kw in *keywords {
                assert_eq!(
                    *kw,
                    kw.to_lowercase(),
                    "keyword '{kw}' of '{theme}' is not lowercase"
                );
            }
        }
    }

    #[test]
    fn pattern_targets_are_scorable_themes() {
        // Every pattern rule points at a theme the keyword catalog knows,
        // so a pattern bonus never invents a name the rest of the pipeline
        // has no rationale for.
        for (pattern, target) in PATTERN_RULES {
            assert!(
                KEYWORD_CATALOG.iter().any(|(theme, _)| theme == target),
                "pattern '{pattern}' targets unknown theme '{target}'"
            );
        }
    }

    #[test]
    fn fallback_targets_are_scorable_themes() {
        for (_, target) in FALLBACK_CHAIN {
            assert!(KEYWORD_CATALOG.iter().any(|(theme, _)| theme == target));
        }
        assert!(KEYWORD_CATALOG.iter().any(|(theme, _)| *theme == DEFAULT_THEME));
    }
}
