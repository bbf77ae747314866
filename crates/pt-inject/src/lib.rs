//! # pt-inject — `!theme` directive handling for PlantUML source
//!
//! Injects a theme directive immediately after the first `@startuml`, or
//! swaps out whichever directive is already there. Theme names are validated
//! against the catalog; anything unknown degrades to the catalog fallback
//! (`plain`) so the emitted source always renders.
//!
//! Source that contains no `@startuml` is returned unchanged — this crate
//! makes no attempt to understand PlantUML beyond locating the opening tag.

use std::sync::LazyLock;

use regex::Regex;

use pt_catalog::{is_supported, FALLBACK_THEME};

/// Matches an existing theme directive, including any trailing newline.
///
/// Theme names may be hyphenated (`carbon-gray`), so the name class is
/// `[\w-]` rather than `\w`.
static THEME_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!theme\s+[\w-]+\s*\n?").expect("theme directive regex"));

/// Inject a `!theme` directive into PlantUML source.
///
/// No-op when the source already carries a `!theme` directive. Unsupported
/// theme names are replaced with [`FALLBACK_THEME`]. The directive lands on
/// its own line after the first `@startuml`.
#[must_use]
pub fn inject_theme(puml: &str, theme: &str) -> String {
    if puml.contains("!theme") {
        return puml.to_string();
    }

    let theme = if is_supported(theme) { theme } else { FALLBACK_THEME };

    puml.replacen("@startuml", &format!("@startuml\n!theme {theme}"), 1)
}

/// Replace any existing theme directive with a new one.
///
/// Strips every `!theme` directive first, then injects as [`inject_theme`]
/// does (including the fallback for unsupported names).
#[must_use]
pub fn replace_theme(puml: &str, theme: &str) -> String {
    let stripped = THEME_DIRECTIVE.replace_all(puml, "");
    inject_theme(&stripped, theme)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "@startuml\nAlice -> Bob: Hello\n@enduml\n";

    // -- inject_theme ------------------------------------------------------

    #[test]
    fn injects_after_startuml() {
        let themed = inject_theme(SAMPLE, "cyborg");
        assert_eq!(themed, "@startuml\n!theme cyborg\nAlice -> Bob: Hello\n@enduml\n");
    }

    #[test]
    fn existing_directive_is_left_alone() {
        let already = "@startuml\n!theme hacker\nA -> B\n@enduml\n";
        assert_eq!(inject_theme(already, "cyborg"), already);
    }

    #[test]
    fn unsupported_theme_degrades_to_plain() {
        let themed = inject_theme(SAMPLE, "neon-dreams");
        assert!(themed.contains("!theme plain"));
    }

    #[test]
    fn sunlust_casing_is_accepted() {
        let themed = inject_theme(SAMPLE, "Sunlust");
        assert!(themed.contains("!theme Sunlust"));
        // The lowercase spelling is not in the catalog and degrades.
        let themed = inject_theme(SAMPLE, "sunlust");
        assert!(themed.contains("!theme plain"));
    }

    #[test]
    fn source_without_startuml_is_unchanged() {
        let fragment = "Alice -> Bob: Hello\n";
        assert_eq!(inject_theme(fragment, "cyborg"), fragment);
    }

    #[test]
    fn only_first_startuml_gets_the_directive() {
        let two = "@startuml\nA -> B\n@enduml\n@startuml\nC -> D\n@enduml\n";
        let themed = inject_theme(two, "minty");
        assert_eq!(themed.matches("!theme").count(), 1);
        assert!(themed.starts_with("@startuml\n!theme minty\n"));
    }

    // -- replace_theme -----------------------------------------------------

    #[test]
    fn replaces_existing_directive() {
        let already = "@startuml\n!theme hacker\nA -> B\n@enduml\n";
        let themed = replace_theme(already, "cyborg");
        assert_eq!(themed, "@startuml\n!theme cyborg\nA -> B\n@enduml\n");
    }

    #[test]
    fn strips_hyphenated_names_cleanly() {
        let already = "@startuml\n!theme carbon-gray\nA -> B\n@enduml\n";
        let themed = replace_theme(already, "minty");
        assert!(!themed.contains("gray"));
        assert!(themed.contains("!theme minty"));
    }

    #[test]
    fn replace_on_unthemed_source_injects() {
        let themed = replace_theme(SAMPLE, "minty");
        assert!(themed.contains("!theme minty"));
    }
}
