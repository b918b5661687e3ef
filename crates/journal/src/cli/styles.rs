//! Semantic styles for terminal output.
//!
//! Renderers ask for a style by what the text *is* (an id, a timestamp, a
//! favorite marker), never by color. `console` drops the escapes when stdout
//! is not a terminal or `NO_COLOR` is set.

use console::Style;

/// Short ids shown in listings.
pub fn id() -> Style {
    Style::new().color256(136)
}

pub fn title() -> Style {
    Style::new().bold()
}

/// Metadata such as dates, tags and counts.
pub fn muted() -> Style {
    Style::new().color256(244)
}

pub fn favorite() -> Style {
    Style::new().color256(178).bold()
}

pub fn deleted() -> Style {
    Style::new().color256(124)
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn warning() -> Style {
    Style::new().yellow().bold()
}

pub fn tag() -> Style {
    Style::new().cyan()
}
