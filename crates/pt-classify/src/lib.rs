//! # pt-classify — topic-to-theme classification
//!
//! Maps a free-text topic (plus optional extra content and an optional style
//! hint) to one theme name from the fixed catalog, with a one-line rationale.
//! Used to pick a visual style for generated architecture diagrams.
//!
//! # Selection flow
//!
//! ```text
//! topic + content
//!     │ lowercase, concatenate
//!     ▼
//! corpus ──── style hint? ──► style.rs: fixed decision list, first match wins
//!     │
//!     ▼
//! score.rs:  keyword scoring (whole-word > substring)
//!            + pattern-rule bonuses + special-case bonuses
//!     │
//!     ▼
//! select.rs: highest score wins (ties → earliest entry),
//!            no score → fallback chain → "blueprint"
//! ```
//!
//! The classifier is total: every input, including the empty string, resolves
//! to a theme name and a non-empty description. There is no I/O and no shared
//! mutable state — all tables are `'static` constants — so calls are pure and
//! thread-safe by construction.

pub mod score;
pub mod select;
pub mod style;
pub mod tables;

pub use select::{select_theme, Selection};
pub use style::StylePreference;
