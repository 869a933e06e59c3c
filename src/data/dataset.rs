// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array3, ArrayBase, ArrayView3, Dimension};
use rand::Rng;
use tracing::info;

use super::dim_order::reorder_to_canonical;
use super::mute::generate_mute_array;
use super::normalise::standardise_per_process;
use super::VarIndex;
use crate::error::{DataError, Result};

/// Store for realisations of processes observed over time and replications.
///
/// Raw arrays of rank 1 to 3 are brought into the layout
/// processes x samples x replications when they are set. The order of axes in the
/// raw array is given as a string of `'p'`, `'s'` and `'r'`, e.g. `"spr"` for
/// samples x processes x replications.
///
/// The stored array can be read at any time but only replaced wholesale through
/// [`Dataset::set_data`]. An unset dataset is a distinct state: every read
/// returns [`DataError::NoData`].
///
/// ```rust
/// use infodata::data::{Dataset, VarIndex};
/// use ndarray::Array;
///
/// let raw = Array::range(0.0, 24.0, 1.0).into_shape_with_order((2, 4, 3)).unwrap();
/// let data = Dataset::from_array(&raw, "psr", false).unwrap();
/// assert_eq!(data.n_samples().unwrap(), 4);
/// assert_eq!(data.n_realisations(Some(VarIndex::new(0, 1))).unwrap(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    normalise: bool,
    data: Option<Array3<f64>>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Dataset {
    /// Create an empty dataset. If `normalise` is true, data is z-standardised per
    /// process whenever it is set.
    pub fn new(normalise: bool) -> Self {
        Self {
            normalise,
            data: None,
        }
    }

    /// Create a dataset and set its data in one step.
    pub fn from_array<S, D>(data: &ArrayBase<S, D>, dim_order: &str, normalise: bool) -> Result<Self>
    where
        S: ndarray::Data<Elem = f64>,
        D: Dimension,
    {
        let mut ds = Self::new(normalise);
        ds.set_data(data, dim_order)?;
        Ok(ds)
    }

    /// Builder-style switch for normalisation.
    ///
    /// Fails once data is set, since the stored array was prepared under the
    /// previous setting.
    pub fn with_normalise(mut self, normalise: bool) -> Result<Self> {
        if self.is_set() {
            return Err(DataError::InvalidConfiguration(
                "normalisation can not be changed after data is set".into(),
            ));
        }
        self.normalise = normalise;
        Ok(self)
    }

    pub fn normalise(&self) -> bool {
        self.normalise
    }

    pub fn is_set(&self) -> bool {
        self.data.is_some()
    }

    /// Overwrite the data held by this dataset.
    ///
    /// The raw array is reordered to processes x samples x replications, normalised
    /// if requested, and then swapped in. If any step fails the previous data is
    /// left untouched.
    pub fn set_data<S, D>(&mut self, data: &ArrayBase<S, D>, dim_order: &str) -> Result<()>
    where
        S: ndarray::Data<Elem = f64>,
        D: Dimension,
    {
        let ordered = reorder_to_canonical(data.view().into_dyn(), dim_order)?;
        let ordered = if self.normalise {
            standardise_per_process(&ordered)?
        } else {
            ordered
        };

        let (n_processes, n_samples, n_replications) = ordered.dim();
        if self.data.is_some() {
            info!("overwriting existing data");
        }
        info!(
            n_processes,
            n_samples, n_replications, "adding data with properties"
        );
        self.data = Some(ordered);
        Ok(())
    }

    /// Replace the data with a simulated five-process network, see
    /// [`generate_mute_array`].
    pub fn generate_mute_data<R: Rng + ?Sized>(
        &mut self,
        n_samples: usize,
        n_replications: usize,
        rng: &mut R,
    ) -> Result<()> {
        let x = generate_mute_array(n_samples, n_replications, rng);
        self.set_data(&x, "psr")
    }

    /// Realisations as processes x samples x replications.
    pub fn data(&self) -> Result<ArrayView3<'_, f64>> {
        self.array().map(|a| a.view())
    }

    pub(crate) fn array(&self) -> Result<&Array3<f64>> {
        self.data.as_ref().ok_or(DataError::NoData)
    }

    pub fn n_processes(&self) -> Result<usize> {
        Ok(self.array()?.dim().0)
    }

    pub fn n_samples(&self) -> Result<usize> {
        Ok(self.array()?.dim().1)
    }

    pub fn n_replications(&self) -> Result<usize> {
        Ok(self.array()?.dim().2)
    }

    /// Number of realisations over samples and replications.
    ///
    /// See [`Dataset::n_realisations_samples`] for the role of `current_value`.
    pub fn n_realisations(&self, current_value: Option<VarIndex>) -> Result<usize> {
        Ok(self.n_realisations_samples(current_value)? * self.n_realisations_repl()?)
    }

    /// Number of realisations over samples.
    ///
    /// With an embedding of length k the current value sits at sample k, so the
    /// first k samples are lost to the embedding and realisations are counted from
    /// there. Without a current value all samples are counted.
    pub fn n_realisations_samples(&self, current_value: Option<VarIndex>) -> Result<usize> {
        let n_samples = self.n_samples()?;
        match current_value {
            None => Ok(n_samples),
            Some(cv) if cv.sample <= n_samples => Ok(n_samples - cv.sample),
            Some(cv) => Err(DataError::IndexOutOfBounds {
                index: cv,
                n_processes: self.n_processes()?,
                n_samples,
            }),
        }
    }

    /// Number of realisations over replications.
    pub fn n_realisations_repl(&self) -> Result<usize> {
        self.n_replications()
    }
}
