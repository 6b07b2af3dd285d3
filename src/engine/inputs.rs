//! Input enumeration
//!
//! Generates every boolean input combination for a level. Row `i` sets
//! input `j` to bit `j` of `i`, so input 0 alternates fastest:
//!
//! ```text
//! i=0: 0 0     i=1: 1 0     i=2: 0 1     i=3: 1 1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeightlabError};

/// Largest supported input arity (65 536 rows)
pub const MAX_ARITY: usize = 16;

/// One assignment of 0/1 to every input, in input order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRow(Vec<u8>);

impl InputRow {
    /// Row number `index` of the truth table over `arity` inputs
    pub fn from_index(index: usize, arity: usize) -> Self {
        Self((0..arity).map(|j| ((index >> j) & 1) as u8).collect())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Iterator over all rows of a truth table
#[derive(Debug, Clone)]
pub struct InputRows {
    arity: usize,
    next: usize,
    end: usize,
}

impl Iterator for InputRows {
    type Item = InputRow;

    fn next(&mut self) -> Option<InputRow> {
        if self.next >= self.end {
            return None;
        }
        let row = InputRow::from_index(self.next, self.arity);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for InputRows {}

/// All `2^arity` input rows in truth-table order.
///
/// Arity 0 yields the single empty row.
pub fn enumerate_inputs(arity: usize) -> Result<InputRows> {
    if arity > MAX_ARITY {
        return Err(WeightlabError::InvalidRequest {
            reason: format!("input arity {} exceeds maximum {}", arity, MAX_ARITY),
        });
    }

    Ok(InputRows {
        arity,
        next: 0,
        end: 1 << arity,
    })
}
