//! Characteristic descriptions — what each theme looks like.
//!
//! One fixed string per cataloged theme, used by the CLI listing and by
//! anything that wants to explain a theme to a human. Unknown names get a
//! generic description rather than an error.

use crate::names::SUPPORTED_THEMES;

/// The description returned for names outside the catalog.
pub const GENERIC_DESCRIPTION: &str = "Standard PlantUML theme";

/// A short description of the theme's visual characteristics.
///
/// Returns [`GENERIC_DESCRIPTION`] for unknown names.
#[must_use]
pub fn description(name: &str) -> &'static str {
    match name {
        "amiga" => "Retro Amiga computer inspired theme with classic colors",
        "aws-orange" => "AWS cloud services orange and dark theme",
        "black-knight" => "Dark medieval theme with gold accents",
        "bluegray" => "Professional blue-gray color scheme",
        "blueprint" => "Technical blueprint style with grid background",
        "carbon-gray" => "Carbon design system inspired gray theme",
        "cerulean" => "Bright cerulean blue theme",
        "cloudscape-design" => "AWS Cloudscape design system theme",
        "crt-amber" => "Classic CRT amber monitor theme",
        "cyborg" => "Dark cyberpunk-inspired theme",
        "hacker" => "Matrix-style green on black hacker theme",
        "lightgray" => "Light gray minimalist theme",
        "mars" => "Mars red planet inspired theme",
        "materia" => "Material design inspired theme",
        "metal" => "Metallic silver and gray theme",
        "mimeograph" => "Vintage mimeograph purple theme",
        "minty" => "Fresh mint green theme",
        "mono" => "Monochrome black and white theme",
        "none" => "No theme (PlantUML defaults)",
        "plain" => "Plain default PlantUML theme",
        "reddress-darkblue" => "Red dress with dark blue accents",
        "reddress-lightblue" => "Red dress with light blue accents",
        "sandstone" => "Warm sandstone brown theme",
        "silver" => "Elegant silver theme",
        "sketchy" => "Hand-drawn sketchy style theme",
        "spacelab" => "Clean space laboratory theme",
        "Sunlust" => "Warm sunset colors theme",
        "superhero" => "Comic book superhero theme",
        "toy" => "Playful toy-like colorful theme",
        "united" => "United colors theme",
        "vibrant" => "High contrast vibrant colors",
        _ => GENERIC_DESCRIPTION,
    }
}

/// Render the full catalog as an aligned name/description listing.
#[must_use]
pub fn list_themes_formatted() -> String {
    let mut out = String::from("Available PlantUML Themes:\n");
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");
    for name in SUPPORTED_THEMES {
        out.push_str(&format!("  {name:<24} - {}\n", description(name)));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_cataloged_theme_is_described() {
        for name in SUPPORTED_THEMES {
            let desc = description(name);
            assert!(!desc.is_empty(), "'{name}' has an empty description");
            assert_ne!(
                desc, GENERIC_DESCRIPTION,
                "'{name}' fell through to the generic description"
            );
        }
    }

    #[test]
    fn unknown_name_gets_generic_description() {
        assert_eq!(description("neon-dreams"), GENERIC_DESCRIPTION);
    }

    #[test]
    fn listing_mentions_every_theme() {
        let listing = list_themes_formatted();
        for name in SUPPORTED_THEMES {
            assert!(listing.contains(name), "listing is missing '{name}'");
        }
    }
}
