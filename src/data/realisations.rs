// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{s, Array1, Array2};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::{Dataset, VarIndex};
use crate::error::{DataError, Result};

impl Dataset {
    /// Return all realisations of a list of variables.
    ///
    /// Each variable contributes one column. Rows run over replications first and
    /// samples second: all `n_samples - current_value.sample` realisations of
    /// replication 0 in temporal order, then those of replication 1, and so on.
    ///
    /// Returns the realisations, shape `(n_realisations, variables.len())`, and the
    /// replication each row came from.
    pub fn get_realisations(
        &self,
        current_value: VarIndex,
        variables: &[VarIndex],
    ) -> Result<(Array2<f64>, Array1<usize>)> {
        let order: Vec<usize> = (0..self.n_replications()?).collect();
        self.realisations_in_order(current_value, variables, &order)
    }

    /// Return realisations with permuted replications; time order stays intact.
    ///
    /// Creates surrogate data by permuting whole replication blocks:
    ///
    /// ```text
    /// original:  repl. 0 0 0 0  1 1 1 1  2 2 2 2  3 3 3 3
    ///            sample 0 1 2 3  0 1 2 3  0 1 2 3  0 1 2 3
    /// permuted:  repl. 2 2 2 2  0 0 0 0  3 3 3 3  1 1 1 1
    ///            sample 0 1 2 3  0 1 2 3  0 1 2 3  0 1 2 3
    /// ```
    ///
    /// A fresh permutation is drawn from `rng` on every call.
    pub fn permute_replications<R: Rng + ?Sized>(
        &self,
        current_value: VarIndex,
        variables: &[VarIndex],
        rng: &mut R,
    ) -> Result<(Array2<f64>, Array1<usize>)> {
        let mut order: Vec<usize> = (0..self.n_replications()?).collect();
        order.shuffle(rng);
        debug!(?order, "permuted replication order");
        self.realisations_in_order(current_value, variables, &order)
    }

    /// Gather realisations, visiting replications in `replication_order`.
    pub(crate) fn realisations_in_order(
        &self,
        current_value: VarIndex,
        variables: &[VarIndex],
        replication_order: &[usize],
    ) -> Result<(Array2<f64>, Array1<usize>)> {
        self.check_variables(current_value, variables)?;
        let data = self.array()?;
        let n_real_time = self.n_realisations_samples(Some(current_value))?;
        let n_rows = n_real_time * replication_order.len();

        let mut realisations = Array2::<f64>::zeros((n_rows, variables.len()));
        for (i, var) in variables.iter().enumerate() {
            let mut column = realisations.column_mut(i);
            for (block, &replication) in replication_order.iter().enumerate() {
                let r = block * n_real_time;
                column.slice_mut(s![r..r + n_real_time]).assign(&data.slice(s![
                    var.process,
                    var.sample..var.sample + n_real_time,
                    replication
                ]));
            }
            if column.iter().any(|v| v.is_nan()) {
                return Err(DataError::DataConsistency(format!(
                    "there are NaNs in the retrieved realisations of variable {var}"
                )));
            }
        }

        let replication_index: Array1<usize> = replication_order
            .iter()
            .flat_map(|&r| std::iter::repeat(r).take(n_real_time))
            .collect();
        debug_assert_eq!(replication_index.len(), realisations.nrows());

        debug!(
            rows = n_rows,
            columns = variables.len(),
            %current_value,
            "retrieved realisations"
        );
        Ok((realisations, replication_index))
    }

    /// Validate a variable list against the current value and the data bounds.
    fn check_variables(&self, current_value: VarIndex, variables: &[VarIndex]) -> Result<()> {
        if variables.is_empty() {
            return Err(DataError::TypeConstraint(
                "the variable list must contain at least one (process, sample) index".into(),
            ));
        }
        let n_processes = self.n_processes()?;
        let n_samples = self.n_samples()?;
        let out_of_bounds = |index: VarIndex| DataError::IndexOutOfBounds {
            index,
            n_processes,
            n_samples,
        };

        if current_value.process >= n_processes || current_value.sample > n_samples {
            return Err(out_of_bounds(current_value));
        }
        for &var in variables {
            if var.sample > current_value.sample {
                return Err(DataError::VariableAfterCurrentValue {
                    variable: var,
                    current_value,
                });
            }
            if var.process >= n_processes {
                return Err(out_of_bounds(var));
            }
        }
        Ok(())
    }
}
