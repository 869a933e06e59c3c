// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array3, ArrayView2, Axis};

use crate::error::{DataError, Result};

/// Z-standardise data separately for each process.
///
/// All samples and replications of a process are pooled; the result has mean 0
/// and unit sample variance (one delta degree of freedom) per process. No
/// statistics are shared across processes.
pub fn standardise_per_process(data: &Array3<f64>) -> Result<Array3<f64>> {
    let mut out = data.clone();
    for (process, mut block) in out.axis_iter_mut(Axis(0)).enumerate() {
        let (mean, sd) = mean_and_sd(data.index_axis(Axis(0), process), process)?;
        block.mapv_inplace(|v| (v - mean) / sd);
    }
    Ok(out)
}

fn mean_and_sd(values: ArrayView2<'_, f64>, process: usize) -> Result<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return Err(DataError::Normalisation {
            process,
            reason: format!("need at least two realisations, got {n}"),
        });
    }
    let n_f = n as f64;
    let mean = values.sum() / n_f;
    let ss: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
    let sd = (ss / (n_f - 1.0)).sqrt();
    if !(sd.is_finite() && sd > 0.0) {
        return Err(DataError::Normalisation {
            process,
            reason: format!("standard deviation is {sd}"),
        });
    }
    Ok((mean, sd))
}
