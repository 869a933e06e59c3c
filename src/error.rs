// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

use crate::data::VarIndex;

pub type Result<T> = std::result::Result<T, DataError>;

/// Failures raised by the data store, the extractor and the estimator seam.
///
/// Every variant carries enough context to diagnose the problem without
/// re-running. None of them are retried internally, and a failed call never
/// touches the array stored in a [`Dataset`](crate::data::Dataset).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    /// Malformed dimension order, rank mismatch or invalid permutation range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(
        "variable {variable} lies after the current value {current_value}; all indices \
         for which data is retrieved must not be later than the current value"
    )]
    VariableAfterCurrentValue {
        variable: VarIndex,
        current_value: VarIndex,
    },

    #[error(
        "index {index} is out of bounds for a data set with {n_processes} processes and \
         {n_samples} samples"
    )]
    IndexOutOfBounds {
        index: VarIndex,
        n_processes: usize,
        n_samples: usize,
    },

    /// The variable list does not have the required shape (e.g. it is empty).
    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    /// Extraction produced undefined values; this points at a malformed input array.
    #[error("data consistency error: {0}")]
    DataConsistency(String),

    #[error("no data has been set, call set_data first")]
    NoData,

    #[error("process {process} can not be standardised: {reason}")]
    Normalisation { process: usize, reason: String },

    #[error("the requested estimator \"{0}\" was not found")]
    UnknownEstimator(String),

    #[error("estimation failed: {0}")]
    Estimation(String),
}

impl DataError {
    /// True for the out-of-range family (variable after current value, index out of bounds).
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            DataError::VariableAfterCurrentValue { .. } | DataError::IndexOutOfBounds { .. }
        )
    }
}

pub(crate) fn config(msg: impl Into<String>) -> DataError {
    DataError::InvalidConfiguration(msg.into())
}
