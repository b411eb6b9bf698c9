//! Site generation: catalog file → two timeline pages on disk

use crate::core::error::TimelineError;
use crate::core::loader::load_catalog;
use crate::core::models::Catalog;
use crate::core::report::{HtmlTimeline, PageContext, PageGenerator, PageSpec};
use crate::core::timeline::{TimelineBuilder, ViewMode};
use chrono::NaiveDate;
use logger::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Default chart loader script
pub const DEFAULT_CHART_LOADER: &str = "https://www.gstatic.com/charts/loader.js";
/// Default page title
pub const DEFAULT_TITLE: &str = "Python release timeline";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Directory receiving `index.html` and `eol.html`
    pub out_dir: PathBuf,
    /// Invocation date; versions with `eol <= today` are hidden in the default view
    pub today: NaiveDate,
    /// Base page title
    pub title: String,
    /// Charting library loader URL
    pub chart_loader: String,
}

impl SiteOptions {
    /// Options with the default title and loader
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            out_dir: out_dir.into(),
            today,
            title: DEFAULT_TITLE.to_string(),
            chart_loader: DEFAULT_CHART_LOADER.to_string(),
        }
    }
}

/// A fully rendered page waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Layout the page was rendered with
    pub spec: PageSpec,
    /// Number of rows drawn
    pub row_count: usize,
    /// Complete HTML document
    pub content: String,
}

/// Build and render both views in memory.
///
/// # Errors
/// Returns the first build or render failure; nothing is written.
pub fn render_site(
    catalog: &Catalog,
    options: &SiteOptions,
) -> Result<Vec<RenderedPage>, TimelineError> {
    let builder = TimelineBuilder::new(catalog, options.today);
    let generator = HtmlTimeline::new();

    ViewMode::ALL
        .into_iter()
        .map(|mode| {
            let spec = PageSpec::for_mode(mode, &options.title);
            let rows = builder.build(mode)?;
            let content = generator.render(&PageContext {
                spec: &spec,
                rows: &rows,
                chart_loader: &options.chart_loader,
            })?;
            debug!("Rendered {} ({} rows)", spec.file_name, rows.len());
            Ok::<_, TimelineError>(RenderedPage {
                spec,
                row_count: rows.len(),
                content,
            })
        })
        .collect()
}

/// Write rendered pages into `out_dir`, creating it if needed.
///
/// # Errors
/// Returns an error if the directory cannot be created or a file cannot be written.
pub fn write_site(pages: &[RenderedPage], out_dir: &Path) -> Result<Vec<PathBuf>, TimelineError> {
    fs::create_dir_all(out_dir).map_err(|source| TimelineError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    pages
        .iter()
        .map(|page| {
            let path = out_dir.join(page.spec.file_name);
            fs::write(&path, &page.content).map_err(|source| TimelineError::Write {
                path: path.clone(),
                source,
            })?;
            info!("Wrote {} ({} rows)", path.display(), page.row_count);
            Ok::<_, TimelineError>(path)
        })
        .collect()
}

/// Load `input`, render both views, then write them.
///
/// Both pages are rendered before anything touches the output directory.
///
/// # Errors
/// Returns an error if loading, building, rendering or writing fails.
pub fn generate_site(input: &Path, options: &SiteOptions) -> Result<Vec<PathBuf>, TimelineError> {
    let catalog = load_catalog(input)?;
    let pages = render_site(&catalog, options)?;
    write_site(&pages, &options.out_dir)
}
