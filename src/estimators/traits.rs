// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView2};

use crate::error::{DataError, Result};

/// Capability interface for information-theoretic estimators.
///
/// Implementations consume realisation matrices (rows = realisations, columns =
/// variable dimensions) as produced by
/// [`Dataset::get_realisations`](crate::data::Dataset::get_realisations) and its
/// surrogate variants. The number and meaning of the inputs depends on the
/// measure, e.g. two for mutual information and three for conditional mutual
/// information.
pub trait Estimator {
    /// Name under which the estimator was selected.
    fn name(&self) -> &str;

    /// Whether the estimator can process several chunks of data in one call.
    ///
    /// Parallel estimators receive all chunks stacked along the rows together with
    /// the chunk count; sequential ones are called once per chunk.
    fn is_parallel(&self) -> bool;

    /// Estimate the measure, returning one value per chunk.
    ///
    /// All inputs share the same number of rows, which is a multiple of `n_chunks`.
    fn estimate(&self, variables: &[ArrayView2<'_, f64>], n_chunks: usize) -> Result<Array1<f64>>;

    /// Whether [`Estimator::local_values`] is available.
    fn supports_local(&self) -> bool {
        false
    }

    /// Per-realisation contributions whose mean is the estimate.
    fn local_values(&self, _variables: &[ArrayView2<'_, f64>]) -> Result<Array1<f64>> {
        Err(DataError::Estimation(format!(
            "estimator \"{}\" does not support local values",
            self.name()
        )))
    }
}
