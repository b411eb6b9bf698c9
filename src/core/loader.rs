//! TOML parser for release catalogs
//!
//! The input is a table of sources, each holding one table per version:
//!
//! ```toml
//! [upstream."3.12"]
//! dev = 2022-05-08
//! alpha1 = 2022-10-25
//! beta1 = 2023-05-22
//! rc1 = 2023-08-06
//! final = 2023-10-02
//! ```
//!
//! Every upstream record is validated while loading and all problems are
//! reported together.

use crate::core::error::{CatalogProblem, TimelineError};
use crate::core::models::{Catalog, Milestone, VersionId, VersionRecord, UPSTREAM_SOURCE};
use chrono::NaiveDate;
use logger::{debug, info};
use std::fs;
use std::path::Path;
use toml::{Table, Value};

/// Read and validate a catalog file
///
/// # Errors
/// Returns an error if the file cannot be read, is not TOML, or fails
/// validation.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, TimelineError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TimelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog_str(&content, &path.display().to_string())?;
    info!(
        "Catalog loaded from {}: {} version(s), {} with upstream milestones",
        path.display(),
        catalog.version_count(),
        catalog.upstream_count()
    );
    Ok(catalog)
}

/// Parse and validate catalog text
///
/// `origin` names the text in parse errors (usually the file path).
///
/// # Errors
/// Returns [`TimelineError::Parse`] for malformed TOML and
/// [`TimelineError::InvalidCatalog`] listing every schema problem.
pub fn parse_catalog_str(text: &str, origin: &str) -> Result<Catalog, TimelineError> {
    let data: Table = toml::from_str(text).map_err(|source| TimelineError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    let mut catalog = Catalog::new();
    let mut problems = Vec::new();

    for (source, entries) in &data {
        let Value::Table(entries) = entries else {
            problems.push(CatalogProblem::SourceNotTable {
                source: source.clone(),
            });
            continue;
        };

        for (key, entry) in entries {
            let Ok(version) = key.parse::<VersionId>() else {
                problems.push(CatalogProblem::InvalidVersion {
                    source: source.clone(),
                    version: key.clone(),
                });
                continue;
            };

            if source != UPSTREAM_SOURCE {
                catalog.add_version(source, version);
                continue;
            }

            let Value::Table(milestones) = entry else {
                problems.push(CatalogProblem::RecordNotTable {
                    version: key.clone(),
                });
                continue;
            };

            match parse_record(key, milestones) {
                Ok(record) => catalog.insert_upstream(version, record),
                Err(mut found) => problems.append(&mut found),
            }
        }
    }

    if problems.is_empty() {
        Ok(catalog)
    } else {
        Err(TimelineError::InvalidCatalog { problems })
    }
}

/// Validate one upstream version table, collecting every problem in it
fn parse_record(version: &str, table: &Table) -> Result<VersionRecord, Vec<CatalogProblem>> {
    let mut dates: [Option<NaiveDate>; Milestone::ALL.len()] = [None; Milestone::ALL.len()];
    let mut problems = Vec::new();
    let mut malformed = Vec::new();

    for (key, value) in table {
        let Some(milestone) = Milestone::from_key(key) else {
            debug!("version {version}: ignoring unknown milestone '{key}'");
            continue;
        };
        if let Some(date) = as_date(value) {
            dates[milestone as usize] = Some(date);
        } else {
            malformed.push(milestone);
            problems.push(CatalogProblem::NotADate {
                version: version.to_string(),
                milestone: key.clone(),
                value: value.to_string(),
            });
        }
    }

    let missing: Vec<&'static str> = Milestone::ALL
        .into_iter()
        .filter(|m| m.is_required() && dates[*m as usize].is_none() && !malformed.contains(m))
        .map(Milestone::key)
        .collect();
    if !missing.is_empty() {
        problems.push(CatalogProblem::MissingMilestones {
            version: version.to_string(),
            missing,
        });
    }

    let has = |m: Milestone| dates[m as usize].is_some() || malformed.contains(&m);
    if has(Milestone::Eol) && !has(Milestone::LastBugfix) {
        problems.push(CatalogProblem::EolWithoutLastBugfix {
            version: version.to_string(),
        });
    }

    let date = |m: Milestone| dates[m as usize];
    match (
        date(Milestone::Alpha1),
        date(Milestone::Beta1),
        date(Milestone::Rc1),
        date(Milestone::Final),
    ) {
        (Some(alpha1), Some(beta1), Some(rc1), Some(final_release)) if problems.is_empty() => {
            Ok(VersionRecord {
                dev: date(Milestone::Dev),
                alpha1,
                beta1,
                rc1,
                final_release,
                last_bugfix: date(Milestone::LastBugfix),
                eol: date(Milestone::Eol),
            })
        }
        _ => Err(problems),
    }
}

/// Accept only TOML local dates (no time of day, no offset)
fn as_date(value: &Value) -> Option<NaiveDate> {
    let Value::Datetime(datetime) = value else {
        return None;
    };
    if datetime.time.is_some() || datetime.offset.is_some() {
        return None;
    }
    let date = datetime.date?;
    NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )
}
