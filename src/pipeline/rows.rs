//! Row assembly: turn the candidate set into raw rows, top to bottom.
//!
//! Fragments sharing one exact `y0` form a row; their left-to-right order
//! (ascending `x0`) is the column order, so no explicit column boundaries
//! are needed. This holds for simple single-line rows and breaks for rows
//! whose cells are vertically staggered.

use crate::pipeline::locate::CandidateSet;
use serde::Serialize;

/// Trimmed cell texts of one visual line, ordered left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawRow {
    /// Shared `y0` of every fragment in the row.
    pub y: f32,
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Lazy, finite, non-restartable sequence of [`RawRow`]s.
///
/// Holds the candidate set (pre-sorted by descending `y0`, then ascending
/// `x0`) and a cursor. Each step takes the run of fragments at the cursor
/// that share its `y0` and advances past them, so every emitted row lies
/// strictly below the previous one.
#[derive(Debug, Clone)]
pub struct RowAssembler {
    candidates: CandidateSet,
    cursor: usize,
}

impl RowAssembler {
    pub fn new(candidates: CandidateSet) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// Number of fragments not yet consumed.
    pub fn remaining(&self) -> usize {
        self.candidates.len() - self.cursor
    }
}

impl Iterator for RowAssembler {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        let rest = &self.candidates.fragments()[self.cursor..];
        let y = rest.first()?.y0;
        // At least one fragment per step keeps the sequence finite.
        let run = rest.iter().take_while(|f| f.y0 == y).count().max(1);

        let cells = rest[..run]
            .iter()
            .map(|f| f.text.trim().to_string())
            .collect();
        self.cursor += run;

        Some(RawRow { y, cells })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl std::iter::FusedIterator for RowAssembler {}
