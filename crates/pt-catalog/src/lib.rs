//! # pt-catalog — the PlantUML theme catalog
//!
//! The fixed set of 31 official PlantUML themes (from the puml-themes
//! gallery), plus everything that is one-to-one with a theme name:
//!
//! - `names`:    the supported-name list, validation, fallback name
//! - `describe`: characteristic descriptions and the formatted listing
//! - `category`: the style taxonomy (dark/light/colorful/retro/...)
//!
//! All data is compiled-in `'static` constants — there is no configuration,
//! no I/O, and no mutation after startup, so everything here is freely
//! callable from any thread.
//!
//! One name in the catalog is capitalized (`"Sunlust"`) while the rest are
//! lowercase. That spelling is what the rendering servers accept, so it is
//! preserved verbatim rather than normalized.

pub mod category;
pub mod describe;
pub mod names;

pub use category::{category_of, Category};
pub use describe::{description, list_themes_formatted};
pub use names::{is_supported, FALLBACK_THEME, SUPPORTED_THEMES};
