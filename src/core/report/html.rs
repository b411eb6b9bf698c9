//! HTML timeline page
//!
//! Rows are embedded as literal arrays for the Google Charts timeline:
//! `[ 'version', 'phase', new Date(Y, M, D), new Date(Y, M, D) ]`, with
//! zero-based months as JavaScript's `Date` constructor expects.

use crate::core::error::TimelineError;
use crate::core::report::{PageContext, PageGenerator};
use crate::core::timeline::Row;
use askama::Template;
use chrono::{Datelike, NaiveDate};

#[derive(Template)]
#[template(path = "timeline.html")]
struct TimelineTemplate<'a> {
    title: &'a str,
    chart_loader: &'a str,
    toggle_href: &'a str,
    toggle_label: &'a str,
    rows: Vec<String>,
}

/// HTML page generator backed by the `timeline.html` template
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTimeline;

impl HtmlTimeline {
    /// Create a new HTML generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PageGenerator for HtmlTimeline {
    fn render(&self, ctx: &PageContext) -> Result<String, TimelineError> {
        let template = TimelineTemplate {
            title: &ctx.spec.title,
            chart_loader: ctx.chart_loader,
            toggle_href: &ctx.spec.toggle.href,
            toggle_label: &ctx.spec.toggle.label,
            rows: ctx.rows.iter().map(js_row).collect(),
        };
        template.render().map_err(|source| TimelineError::Render {
            page: ctx.spec.file_name.to_string(),
            source,
        })
    }
}

/// `Y, M, D` arguments for `new Date(...)`, month zero-based
#[must_use]
pub fn js_date(date: NaiveDate) -> String {
    format!("{}, {}, {}", date.year(), date.month0(), date.day())
}

/// Single-quoted JavaScript string literal
#[must_use]
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            // keep `</script>` from ever appearing inside the script block
            '<' => out.push_str("\\x3c"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// One row as a JavaScript array literal
#[must_use]
pub fn js_row(row: &Row) -> String {
    format!(
        "[ {}, {}, new Date({}), new Date({}) ]",
        js_string(&row.version),
        js_string(row.phase.label()),
        js_date(row.start),
        js_date(row.end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::PageSpec;
    use crate::core::timeline::{Phase, ViewMode};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_js_date_zero_based_month() {
        assert_eq!(js_date(d(2023, 10, 2)), "2023, 9, 2");
        assert_eq!(js_date(d(2024, 1, 31)), "2024, 0, 31");
    }

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("3.12"), "'3.12'");
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("a\\b"), "'a\\\\b'");
        assert_eq!(js_string("</script>"), "'\\x3c/script>'");
    }

    #[test]
    fn test_js_row_layout() {
        let row = Row {
            version: "3.12".to_string(),
            phase: Phase::Alpha,
            start: d(2022, 10, 25),
            end: d(2023, 5, 22),
        };
        assert_eq!(
            js_row(&row),
            "[ '3.12', 'α', new Date(2022, 9, 25), new Date(2023, 4, 22) ]"
        );
    }

    #[test]
    fn test_render_page() {
        let spec = PageSpec::for_mode(ViewMode::CurrentOnly, "Python release timeline");
        let rows = vec![
            Row {
                version: "3.12".to_string(),
                phase: Phase::Rc,
                start: d(2023, 8, 6),
                end: d(2023, 10, 2),
            },
            Row {
                version: "3.12".to_string(),
                phase: Phase::Stable,
                start: d(2023, 10, 2),
                end: d(2028, 10, 31),
            },
        ];
        let ctx = PageContext {
            spec: &spec,
            rows: &rows,
            chart_loader: "https://www.gstatic.com/charts/loader.js",
        };
        let html = HtmlTimeline::new().render(&ctx).unwrap();

        assert!(html.contains("<title>Python release timeline</title>"));
        assert!(html.contains("<header>Python release timeline</header>"));
        assert!(html.contains("src=\"https://www.gstatic.com/charts/loader.js\""));
        assert!(html.contains(
            "        dataTable.addRows([\n          [ '3.12', 'rc', new Date(2023, 7, 6), new Date(2023, 9, 2) ],\n          [ '3.12', 'stable', new Date(2023, 9, 2), new Date(2028, 9, 31) ],\n        ]);"
        ));
        assert!(html.contains("<a href=\"eol.html\">Show EOL releases</a>"));
        assert!(html.contains(
            "<footer>\n        <p>Created by <a href=\"https://mgorny.pl\">Michał Górny</a>"
        ));
    }

    #[test]
    fn test_render_empty_rows() {
        let spec = PageSpec::for_mode(ViewMode::IncludingEol, "Releases");
        let ctx = PageContext {
            spec: &spec,
            rows: &[],
            chart_loader: "loader.js",
        };
        let html = HtmlTimeline::new().render(&ctx).unwrap();
        assert!(html.contains("dataTable.addRows([\n        ]);"));
        assert!(html.contains("<title>Releases including EOL releases</title>"));
    }
}
