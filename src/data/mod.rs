// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Replication-aware data store: canonical layout, normalisation, realisation
// extraction and surrogate generation.

pub mod dataset;
pub mod dim_order;
pub mod mute;
pub mod normalise;
pub mod realisations;
pub mod surrogates;

use std::fmt;

pub use dataset::Dataset;
pub use dim_order::{Dim, DimOrder};
pub use surrogates::PermRange;

/// A variable: one process tapped at one absolute sample index.
///
/// The same type describes the current value, i.e. the reference point relative
/// to which the number of available realisations is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarIndex {
    pub process: usize,
    pub sample: usize,
}

impl VarIndex {
    pub const fn new(process: usize, sample: usize) -> Self {
        Self { process, sample }
    }
}

impl From<(usize, usize)> for VarIndex {
    fn from((process, sample): (usize, usize)) -> Self {
        Self { process, sample }
    }
}

impl fmt::Display for VarIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.process, self.sample)
    }
}

/// Convert a list of `(process, sample)` tuples into variable indices.
pub fn var_list(indices: &[(usize, usize)]) -> Vec<VarIndex> {
    indices.iter().copied().map(VarIndex::from).collect()
}
