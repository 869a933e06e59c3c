// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{concatenate, s, Array1, Array2, ArrayView2, Axis};
use tracing::debug;

use super::traits::Estimator;
use crate::error::{DataError, Result};

/// Realisations of one estimator input, identified by name.
#[derive(Debug, Clone, Copy)]
pub struct NamedVariable<'a> {
    pub name: &'a str,
    pub values: ArrayView2<'a, f64>,
}

impl<'a> NamedVariable<'a> {
    pub fn new(name: &'a str, values: ArrayView2<'a, f64>) -> Self {
        Self { name, values }
    }
}

/// Estimate a measure for several data sets ("chunks") at once.
///
/// Each non-reused input holds the realisations of all chunks stacked along the
/// rows. Inputs named in `re_use` hold a single chunk that is shared by every
/// chunk, which saves memory when e.g. the same conditioning set is tested
/// against many surrogates.
///
/// The chunk size is taken from the input named `chunk_var`, which must not be
/// re-used and whose row count must be divisible by `n_chunks`. All other
/// non-reused inputs must have the same number of rows.
///
/// Parallel estimators get the re-used inputs tiled `n_chunks` times and are
/// called once; sequential estimators are called once per chunk. The result holds
/// one value per chunk, in input order.
pub fn estimate_mult(
    estimator: &dyn Estimator,
    n_chunks: usize,
    variables: &[NamedVariable<'_>],
    re_use: &[&str],
    chunk_var: &str,
) -> Result<Array1<f64>> {
    if n_chunks == 0 {
        return Err(DataError::Estimation("n_chunks must be at least 1".into()));
    }
    if let Some(missing) = re_use.iter().find(|k| !variables.iter().any(|v| v.name == **k)) {
        return Err(DataError::Estimation(format!(
            "re-used variable \"{missing}\" is not among the estimator inputs"
        )));
    }
    if re_use.contains(&chunk_var) {
        return Err(DataError::Estimation(format!(
            "chunk size variable \"{chunk_var}\" can not be re-used"
        )));
    }
    let n_rows = variables
        .iter()
        .find(|v| v.name == chunk_var)
        .map(|v| v.values.nrows())
        .ok_or_else(|| {
            DataError::Estimation(format!(
                "chunk size variable \"{chunk_var}\" is not among the estimator inputs"
            ))
        })?;
    if n_rows % n_chunks != 0 {
        return Err(DataError::Estimation(format!(
            "{n_rows} realisations can not be split into {n_chunks} chunks of equal size"
        )));
    }
    let chunk_size = n_rows / n_chunks;
    let is_reused = |v: &NamedVariable<'_>| re_use.contains(&v.name);
    if let Some(v) = variables
        .iter()
        .find(|v| !is_reused(*v) && v.values.nrows() != n_rows)
    {
        return Err(DataError::Estimation(format!(
            "variable \"{}\" has {} realisations, expected {n_rows}",
            v.name,
            v.values.nrows()
        )));
    }

    debug!(
        estimator = estimator.name(),
        parallel = estimator.is_parallel(),
        n_chunks,
        chunk_size,
        "estimating multiple chunks"
    );

    let res = if estimator.is_parallel() {
        let tiled: Vec<Option<Array2<f64>>> = variables
            .iter()
            .map(|v| {
                if is_reused(v) {
                    tile_rows(v.values, n_chunks).map(Some)
                } else {
                    Ok(None)
                }
            })
            .collect::<Result<_>>()?;
        let views: Vec<ArrayView2<'_, f64>> = variables
            .iter()
            .zip(tiled.iter())
            .map(|(v, t)| t.as_ref().map_or(v.values.view(), |a| a.view()))
            .collect();
        estimator.estimate(&views, n_chunks)?
    } else {
        let mut res = Array1::<f64>::zeros(n_chunks);
        for c in 0..n_chunks {
            let rows = c * chunk_size..(c + 1) * chunk_size;
            let chunk: Vec<ArrayView2<'_, f64>> = variables
                .iter()
                .map(|v| {
                    if is_reused(v) {
                        v.values
                    } else {
                        v.values.slice_move(s![rows.clone(), ..])
                    }
                })
                .collect();
            let value = estimator.estimate(&chunk, 1)?;
            res[c] = single_value(&value, estimator.name())?;
        }
        res
    };

    if res.len() != n_chunks {
        return Err(DataError::Estimation(format!(
            "estimator \"{}\" returned {} values for {n_chunks} chunks",
            estimator.name(),
            res.len()
        )));
    }
    Ok(res)
}

fn tile_rows(values: ArrayView2<'_, f64>, n: usize) -> Result<Array2<f64>> {
    let copies = vec![values; n];
    concatenate(Axis(0), &copies)
        .map_err(|e| DataError::Estimation(format!("could not tile re-used realisations: {e}")))
}

fn single_value(values: &Array1<f64>, name: &str) -> Result<f64> {
    match values.as_slice() {
        Some(&[v]) => Ok(v),
        _ => Err(DataError::Estimation(format!(
            "estimator \"{name}\" returned {} values for a single chunk",
            values.len()
        ))),
    }
}
