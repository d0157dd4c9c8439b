//! Table location: find the header line and collect everything below it.
//!
//! The table is assumed to span the full page width and to start right
//! below the first fragment containing the header keyword. Every fragment
//! overlapping the rectangle `(0, 0, xmax, header.y0)` with its bottom edge
//! strictly below the header becomes a candidate cell.

use crate::config::ExtractionConfig;
use crate::document::{Document, Fragment, PageFragments};
use crate::error::Pdf2TableError;
use crate::pipeline::rows::RowAssembler;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Fragments below the header, sorted top to bottom then left to right.
///
/// The ordering is fixed at construction so the row assembler can consume
/// the set with a forward-only cursor. Fragments with a non-finite
/// coordinate are dropped, and `-0.0` is stored as `0.0`, so the sort order
/// and the assembler's `==` grouping agree on every kept baseline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    fragments: Vec<Fragment>,
}

impl CandidateSet {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        let mut fragments: Vec<Fragment> = fragments
            .into_iter()
            .filter(|f| {
                let keep = f.has_finite_bounds();
                if !keep {
                    debug!("Dropping fragment {:?} with non-finite bounds", f.text);
                }
                keep
            })
            .map(|mut f| {
                // IEEE: -0.0 + 0.0 == +0.0
                f.x0 += 0.0;
                f.y0 += 0.0;
                f
            })
            .collect();
        fragments.sort_by(descending_y_then_x);
        Self { fragments }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Consume the set as a lazy sequence of raw rows.
    pub fn into_rows(self) -> RowAssembler {
        RowAssembler::new(self)
    }
}

fn descending_y_then_x(a: &Fragment, b: &Fragment) -> Ordering {
    b.y0.total_cmp(&a.y0).then_with(|| a.x0.total_cmp(&b.x0))
}

/// Result of locating the table on a page.
#[derive(Debug, Clone)]
pub struct LocatedTable {
    /// 1-indexed page the table was found on.
    pub page: usize,
    /// Right edge of the table region (page width).
    pub xmax: f32,
    /// Bottom edge of the header line; candidates lie strictly below it.
    pub ymax: f32,
    pub candidates: CandidateSet,
}

/// Locate the table in `document` according to `config`.
///
/// With `config.page` set only that page is searched. Otherwise the first
/// page containing the header keyword hosts the table.
pub fn locate_table(
    document: &Document,
    config: &ExtractionConfig,
) -> Result<LocatedTable, Pdf2TableError> {
    let total = document.page_count();
    if total == 0 {
        return Err(Pdf2TableError::EmptyDocument);
    }

    if let Some(page_num) = config.page {
        let page = page_num
            .checked_sub(1)
            .and_then(|idx| document.page(idx))
            .ok_or(Pdf2TableError::PageOutOfRange {
                page: page_num,
                total,
            })?;
        return locate(page, page_num, &config.header);
    }

    let idx = document
        .pages
        .iter()
        .position(|p| find_header(p, &config.header).is_some())
        .ok_or_else(|| Pdf2TableError::HeaderNotFound {
            header: config.header.clone(),
            searched_pages: total,
        })?;
    locate(&document.pages[idx], idx + 1, &config.header)
}

/// Locate the table on a single page.
pub fn locate(
    page: &PageFragments,
    page_num: usize,
    header: &str,
) -> Result<LocatedTable, Pdf2TableError> {
    let xmax = page.width;
    let header_fragment =
        find_header(page, header).ok_or_else(|| Pdf2TableError::HeaderNotFound {
            header: header.to_string(),
            searched_pages: 1,
        })?;
    let ymax = header_fragment.y0;

    if !header_fragment.has_finite_bounds() {
        return Err(malformed(page_num, header_fragment));
    }

    let mut selected = Vec::new();
    for fragment in &page.fragments {
        if outside_region(fragment, xmax, ymax) {
            continue;
        }
        if !fragment.has_finite_bounds() {
            return Err(malformed(page_num, fragment));
        }
        if fragment.overlaps(0.0, 0.0, xmax, ymax) && fragment.y0 < ymax {
            selected.push(fragment.clone());
        }
    }

    info!(
        "Header '{}' found on page {} at y={:.2}; {} candidate fragments below",
        header,
        page_num,
        ymax,
        selected.len()
    );

    Ok(LocatedTable {
        page: page_num,
        xmax,
        ymax,
        candidates: CandidateSet::new(selected),
    })
}

fn find_header<'a>(page: &'a PageFragments, header: &str) -> Option<&'a Fragment> {
    let found = page.fragments.iter().find(|f| f.text.contains(header));
    if let Some(f) = found {
        debug!("Header match: {:?} at ({}, {})", f.text, f.x0, f.y0);
    }
    found
}

/// True when a finite coordinate alone already excludes `f` from the table
/// region, whatever its other coordinates hold.
fn outside_region(f: &Fragment, xmax: f32, ymax: f32) -> bool {
    (f.y0.is_finite() && f.y0 >= ymax)
        || (f.x0.is_finite() && f.x0 > xmax)
        || (f.x1.is_finite() && f.x1 < 0.0)
        || (f.y1.is_finite() && f.y1 < 0.0)
}

fn malformed(page: usize, f: &Fragment) -> Pdf2TableError {
    Pdf2TableError::MalformedCoordinates {
        page,
        text: f.text.clone(),
        x0: f.x0,
        y0: f.y0,
        x1: f.x1,
        y1: f.y1,
    }
}
