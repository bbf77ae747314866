//! The supported theme names — literal, case-sensitive identifiers.
//!
//! These strings are embedded verbatim into PlantUML source as
//! `!theme <name>` directives, so they must match what the rendering
//! server expects exactly. Do not normalize case: `"Sunlust"` really is
//! spelled with a capital S upstream.

/// Every theme name the rendering servers accept, in gallery order.
pub const SUPPORTED_THEMES: &[&str] = &[
    "amiga",
    "aws-orange",
    "black-knight",
    "bluegray",
    "blueprint",
    "carbon-gray",
    "cerulean",
    "cloudscape-design",
    "crt-amber",
    "cyborg",
    "hacker",
    "lightgray",
    "mars",
    "materia",
    "metal",
    "mimeograph",
    "minty",
    "mono",
    "none",
    "plain",
    "reddress-darkblue",
    "reddress-lightblue",
    "sandstone",
    "silver",
    "sketchy",
    "spacelab",
    "Sunlust",
    "superhero",
    "toy",
    "united",
    "vibrant",
];

/// The name substituted for anything not in [`SUPPORTED_THEMES`] when a
/// valid directive must be produced anyway.
pub const FALLBACK_THEME: &str = "plain";

/// Whether `name` is a supported theme (exact, case-sensitive match).
#[must_use]
pub fn is_supported(name: &str) -> bool {
    SUPPORTED_THEMES.contains(&name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
