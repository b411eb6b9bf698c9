//! Timeline page generation
//!
//! Every invocation renders two pages: the default view with retired
//! versions hidden and an EOL-inclusive view. Each page links to the other.

pub mod html;

use crate::core::error::TimelineError;
use crate::core::timeline::{Row, ViewMode};

pub use html::{js_date, js_row, js_string, HtmlTimeline};

/// File name of the default view
pub const INDEX_PAGE: &str = "index.html";
/// File name of the EOL-inclusive view
pub const EOL_PAGE: &str = "eol.html";

/// Link in the page footer that switches to the other view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterLink {
    /// Target file
    pub href: String,
    /// Link text
    pub label: String,
}

/// Everything that differs between the two views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    /// Which versions the page shows
    pub mode: ViewMode,
    /// Output file name
    pub file_name: &'static str,
    /// Page title and header text
    pub title: String,
    /// Link to the other view
    pub toggle: FooterLink,
}

impl PageSpec {
    /// Page layout for `mode`, using `base_title` for the default view
    #[must_use]
    pub fn for_mode(mode: ViewMode, base_title: &str) -> Self {
        match mode {
            ViewMode::CurrentOnly => Self {
                mode,
                file_name: INDEX_PAGE,
                title: base_title.to_string(),
                toggle: FooterLink {
                    href: EOL_PAGE.to_string(),
                    label: "Show EOL releases".to_string(),
                },
            },
            ViewMode::IncludingEol => Self {
                mode,
                file_name: EOL_PAGE,
                title: format!("{base_title} including EOL releases"),
                toggle: FooterLink {
                    href: INDEX_PAGE.to_string(),
                    label: "Hide EOL releases".to_string(),
                },
            },
        }
    }
}

/// Data needed to render one page
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// View layout
    pub spec: &'a PageSpec,
    /// Rows to draw, in order
    pub rows: &'a [Row],
    /// URL of the charting library loader script
    pub chart_loader: &'a str,
}

/// Trait for page generators
pub trait PageGenerator {
    /// Render the page as a string
    ///
    /// # Errors
    /// Returns an error if the template fails to render
    fn render(&self, ctx: &PageContext) -> Result<String, TimelineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_link_to_each_other() {
        let index = PageSpec::for_mode(ViewMode::CurrentOnly, "Python release timeline");
        let eol = PageSpec::for_mode(ViewMode::IncludingEol, "Python release timeline");

        assert_eq!(index.file_name, "index.html");
        assert_eq!(index.title, "Python release timeline");
        assert_eq!(index.toggle.href, eol.file_name);
        assert_eq!(index.toggle.label, "Show EOL releases");

        assert_eq!(eol.file_name, "eol.html");
        assert_eq!(eol.title, "Python release timeline including EOL releases");
        assert_eq!(eol.toggle.href, index.file_name);
        assert_eq!(eol.toggle.label, "Hide EOL releases");
    }
}
