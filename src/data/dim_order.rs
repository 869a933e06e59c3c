// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use ndarray::{Array3, ArrayViewD, Axis, Ix3};

use crate::error::{config, DataError, Result};

/// One axis of the canonical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Process,
    Sample,
    Replication,
}

impl Dim {
    /// Canonical order, also used as the fallback order for missing axes.
    pub const CANONICAL: [Dim; 3] = [Dim::Process, Dim::Sample, Dim::Replication];

    pub fn symbol(self) -> char {
        match self {
            Dim::Process => 'p',
            Dim::Sample => 's',
            Dim::Replication => 'r',
        }
    }
}

impl TryFrom<char> for Dim {
    type Error = DataError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'p' => Ok(Dim::Process),
            's' => Ok(Dim::Sample),
            'r' => Ok(Dim::Replication),
            other => Err(config(format!(
                "unknown dimension '{other}' in dim_order, use 'p', 's' and 'r' for \
                 processes, samples and replications"
            ))),
        }
    }
}

/// Order of the axes of a raw data array, e.g. `"spr"` for samples x processes x
/// replications.
///
/// Holds between one and three distinct [`Dim`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimOrder(Vec<Dim>);

impl DimOrder {
    pub fn dims(&self) -> &[Dim] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, dim: Dim) -> Option<usize> {
        self.0.iter().position(|&d| d == dim)
    }

    /// Dimensions not mentioned in this order, in canonical fallback order.
    pub fn missing(&self) -> Vec<Dim> {
        Dim::CANONICAL
            .into_iter()
            .filter(|d| !self.0.contains(d))
            .collect()
    }

    fn push(&mut self, dim: Dim) {
        self.0.push(dim);
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

impl FromStr for DimOrder {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        let n = s.chars().count();
        if n > 3 {
            return Err(config(format!(
                "dim_order can not have more than three entries, got \"{s}\" ({n})"
            )));
        }
        let mut dims: Vec<Dim> = Vec::with_capacity(3);
        for c in s.chars() {
            let dim = Dim::try_from(c)?;
            if dims.contains(&dim) {
                return Err(config(format!(
                    "dimension '{c}' appears more than once in dim_order \"{s}\""
                )));
            }
            dims.push(dim);
        }
        Ok(Self(dims))
    }
}

impl fmt::Display for DimOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d.symbol())?;
        }
        Ok(())
    }
}

/// Bring raw data of rank 1 to 3 into the layout processes x samples x replications.
///
/// Axes missing from `dim_order` are appended as trailing singleton axes (in the
/// order p, s, r) before reordering. The process axis is then swapped to position
/// 0 and the sample axis to position 1; the replication axis ends up last.
pub fn reorder_to_canonical(data: ArrayViewD<'_, f64>, dim_order: &str) -> Result<Array3<f64>> {
    let mut order: DimOrder = dim_order.parse()?;
    if order.is_empty() {
        return Err(config("dim_order must name at least one dimension"));
    }
    if order.len() != data.ndim() {
        return Err(config(format!(
            "data array dimension ({}) and length of dim_order ({}) are not equal",
            data.ndim(),
            order.len()
        )));
    }

    let mut data = data;
    for dim in order.missing() {
        let last = data.ndim();
        data = data.insert_axis(Axis(last));
        order.push(dim);
    }

    // Each array swap is mirrored in `order` so it keeps describing the axes.
    if let Some(ind_p) = order.position(Dim::Process).filter(|&i| i != 0) {
        data.swap_axes(0, ind_p);
        order.swap(0, ind_p);
    }
    if let Some(ind_s) = order.position(Dim::Sample).filter(|&i| i != 1) {
        data.swap_axes(1, ind_s);
        order.swap(1, ind_s);
    }
    debug_assert_eq!(order.dims(), &Dim::CANONICAL[..]);

    let data = data
        .into_dimensionality::<Ix3>()
        .map_err(|e| config(format!("could not reshape data to three axes: {e}")))?;
    Ok(data.as_standard_layout().into_owned())
}
