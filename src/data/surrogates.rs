// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::{Dataset, VarIndex};
use crate::error::{config, DataError, Result};

/// Range over which samples are permuted within a replication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermRange {
    /// Permute over all samples of a replication.
    #[default]
    Max,
    /// Permute within consecutive blocks of this many samples.
    Block(usize),
}

impl PermRange {
    /// Resolve to a concrete block length for `n_per_repl` realisations per
    /// replication.
    pub fn resolve(self, n_per_repl: usize) -> Result<usize> {
        match self {
            PermRange::Max => Ok(n_per_repl),
            PermRange::Block(n) if n <= 1 => Err(config(format!(
                "permutation range has to be larger than 1 otherwise there is nothing to \
                 permute, got {n}"
            ))),
            PermRange::Block(n) if n > n_per_repl => Err(config(format!(
                "not enough realisations per replication ({n_per_repl}) to allow for the \
                 requested permutation range ({n})"
            ))),
            PermRange::Block(n) => Ok(n),
        }
    }
}

impl FromStr for PermRange {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "max" {
            return Ok(PermRange::Max);
        }
        s.parse::<usize>()
            .map(PermRange::Block)
            .map_err(|_| config(format!("unknown value for perm_range: \"{s}\"")))
    }
}

impl fmt::Display for PermRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermRange::Max => write!(f, "max"),
            PermRange::Block(n) => write!(f, "{n}"),
        }
    }
}

/// Draw a permutation of `0..n` that only moves elements within consecutive
/// blocks of length `block`.
///
/// If `n` is not a multiple of `block`, the trailing `n % block` positions form a
/// shorter last block. Every block is shuffled independently. With `block >= n`
/// this is a plain uniform permutation of `0..n`.
pub fn block_permutation<R: Rng + ?Sized>(n: usize, block: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    if block >= n {
        perm.shuffle(rng);
    } else {
        for chunk in perm.chunks_mut(block.max(1)) {
            chunk.shuffle(rng);
        }
    }
    perm
}

impl Dataset {
    /// Return realisations with permuted samples; replications stay intact.
    ///
    /// Creates surrogate data by permuting realisations over time within each
    /// replication, either over the whole replication or within blocks of
    /// `perm_range` samples:
    ///
    /// ```text
    /// original:           repl. 0 0 0 0  1 1 1 1  2 2 2 2
    ///                     sample 0 1 2 3  0 1 2 3  0 1 2 3
    /// PermRange::Max:     sample 3 0 2 1  3 0 2 1  3 0 2 1
    /// PermRange::Block(2): sample 1 0 2 3  1 0 2 3  1 0 2 3
    /// ```
    ///
    /// One base permutation is drawn per call and applied to every replication.
    /// Returns the permuted realisations and, for every row, the position within its
    /// replication the row's values were taken from. The replication index of every
    /// row is unchanged.
    ///
    /// This is the fall-back scheme when there are too few replications to build a
    /// sufficient number of replication permutations.
    pub fn permute_samples<R: Rng + ?Sized>(
        &self,
        current_value: VarIndex,
        variables: &[VarIndex],
        perm_range: PermRange,
        rng: &mut R,
    ) -> Result<(Array2<f64>, Array1<usize>)> {
        let (realisations, _) = self.get_realisations(current_value, variables)?;
        let n_per_repl = self.n_realisations_samples(Some(current_value))?;
        let block = perm_range.resolve(n_per_repl)?;

        let perm = block_permutation(n_per_repl, block, rng);
        debug!(n_per_repl, block, ?perm, "permuting samples within replications");

        // Rows are grouped by replication, each owning n_per_repl contiguous rows
        let mut realisations_perm = Array2::<f64>::zeros(realisations.raw_dim());
        let mut perm_idx = Array1::<usize>::zeros(realisations.nrows());
        for replication in 0..self.n_replications()? {
            let offset = replication * n_per_repl;
            for (i, &p) in perm.iter().enumerate() {
                realisations_perm
                    .row_mut(offset + i)
                    .assign(&realisations.row(offset + p));
                perm_idx[offset + i] = p;
            }
        }
        Ok((realisations_perm, perm_idx))
    }
}
