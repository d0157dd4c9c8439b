//! Positioned text fragments, the only view of a PDF the extractor needs.
//!
//! Coordinates are PDF user space: origin at the bottom-left of the page,
//! so a larger `y` is higher on the page and `y0 < y1`.
//!
//! ```text
//! -------------------- y1
//! |     fragment     |
//! -------------------- y0
//! x0                x1
//! ```

use serde::{Deserialize, Serialize};

/// One positioned run of text with its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Fragment {
    pub fn new(text: impl Into<String>, x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            text: text.into(),
            x0,
            y0,
            x1,
            y1,
        }
    }

    /// True if all four coordinates are finite numbers.
    pub fn has_finite_bounds(&self) -> bool {
        [self.x0, self.y0, self.x1, self.y1]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Inclusive bounding-box overlap test against `(x0, y0, x1, y1)`.
    pub fn overlaps(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> bool {
        self.x0 <= x1 && self.x1 >= x0 && self.y0 <= y1 && self.y1 >= y0
    }
}

/// All fragments of one page plus the page extents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageFragments {
    /// Page width in points; the table's `xmax`.
    pub width: f32,
    pub height: f32,
    /// Fragments in the order the decoder produced them.
    pub fragments: Vec<Fragment>,
}

impl PageFragments {
    pub fn new(width: f32, height: f32, fragments: Vec<Fragment>) -> Self {
        Self {
            width,
            height,
            fragments,
        }
    }
}

/// A loaded document: one [`PageFragments`] per page, in page order.
///
/// Built by [`crate::pipeline::source`] from a real PDF, or directly with
/// [`Document::from_pages`] when fragments come from another decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<PageFragments>,
}

impl Document {
    pub fn from_pages(pages: Vec<PageFragments>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page by 0-based index.
    pub fn page(&self, index: usize) -> Option<&PageFragments> {
        self.pages.get(index)
    }
}
