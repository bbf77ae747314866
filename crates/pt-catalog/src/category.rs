//! Style taxonomy — coarse grouping of themes by overall look.
//!
//! Every cataloged theme belongs to exactly one category; names outside the
//! catalog fall into [`Category::Standard`].

/// The coarse visual style of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Dark backgrounds, light text.
    Dark,
    /// Light backgrounds, dark text.
    Light,
    /// Saturated, high-energy palettes.
    Colorful,
    /// Vintage computing looks.
    Retro,
    /// Engineering and cloud-vendor styles.
    Technical,
    /// Hand-drawn and material looks.
    Artistic,
    /// Single-hue palettes.
    Monochrome,
    /// Themes that fit no other bucket.
    Special,
    /// Default bucket for unknown names.
    Standard,
}

impl Category {
    /// Human-readable name of this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Colorful => "colorful",
            Self::Retro => "retro",
            Self::Technical => "technical",
            Self::Artistic => "artistic",
            Self::Monochrome => "monochrome",
            Self::Special => "special",
            Self::Standard => "standard",
        }
    }

    /// All categories a cataloged theme can belong to.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Dark,
            Self::Light,
            Self::Colorful,
            Self::Retro,
            Self::Technical,
            Self::Artistic,
            Self::Monochrome,
            Self::Special,
            Self::Standard,
        ]
    }
}

/// The category a theme name belongs to.
///
/// Unknown names map to [`Category::Standard`].
#[must_use]
pub fn category_of(name: &str) -> Category {
    match name {
        "black-knight" | "carbon-gray" | "cyborg" | "hacker" | "reddress-darkblue"
        | "superhero" => Category::Dark,
        "lightgray" | "plain" | "sandstone" | "silver" | "spacelab" | "united" => Category::Light,
        "cerulean" | "mars" | "minty" | "Sunlust" | "toy" | "vibrant" => Category::Colorful,
        "amiga" | "crt-amber" | "mimeograph" => Category::Retro,
        "blueprint" | "aws-orange" | "cloudscape-design" => Category::Technical,
        "sketchy" | "materia" => Category::Artistic,
        "mono" | "metal" => Category::Monochrome,
        "none" | "bluegray" | "reddress-lightblue" => Category::Special,
        _ => Category::Standard,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::SUPPORTED_THEMES;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_cataloged_theme_is_categorized() {
        for name in SUPPORTED_THEMES {
            assert_ne!(
                category_of(name),
                Category::Standard,
                "'{name}' fell through to the standard category"
            );
        }
    }

    #[test]
    fn unknown_name_is_standard() {
        assert_eq!(category_of("neon-dreams"), Category::Standard);
    }

    #[test]
    fn category_names_are_unique() {
        let mut seen = Vec::new();
        for cat in Category::all() {
            assert!(!seen.contains(&cat.name()), "duplicate '{}'", cat.name());
            seen.push(cat.name());
        }
    }

    #[test]
    fn spot_checks() {
        assert_eq!(category_of("cyborg"), Category::Dark);
        assert_eq!(category_of("silver"), Category::Light);
        assert_eq!(category_of("Sunlust"), Category::Colorful);
        assert_eq!(category_of("blueprint"), Category::Technical);
    }
}
