// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infodata
//!
//! Replication-aware data handling for information-theoretic network inference
//! (mutual information, transfer entropy) over multivariate time series recorded
//! in repeated trials.
//!
//! ## Quick Start
//!
//! ```rust
//! use infodata::data::{var_list, Dataset, PermRange, VarIndex};
//! use ndarray::Array;
//! use rand::SeedableRng;
//!
//! // 2 processes x 4 samples x 3 replications
//! let raw = Array::range(0.0, 24.0, 1.0).into_shape_with_order((2, 4, 3)).unwrap();
//! let data = Dataset::from_array(&raw, "psr", false).unwrap();
//!
//! let current_value = VarIndex::new(1, 3);
//! let vars = var_list(&[(1, 0), (1, 1), (1, 2)]);
//! let (real, repl_idx) = data.get_realisations(current_value, &vars).unwrap();
//! assert_eq!(real.dim(), (3, 3));
//! assert_eq!(repl_idx.to_vec(), vec![0, 1, 2]);
//!
//! // Surrogates for significance testing
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let (_shuffled, _order) = data.permute_replications(current_value, &vars, &mut rng).unwrap();
//! let (_permuted, _pos) = data
//!     .permute_samples(VarIndex::new(0, 1), &vars[..1], PermRange::Max, &mut rng)
//!     .unwrap();
//! ```
//!
//! ## Layout
//!
//! Data is stored as processes x samples x replications. A *variable* is a process
//! observed at a fixed sample index ([`data::VarIndex`]); the *current value* is
//! the reference sample relative to which the number of available realisations is
//! counted. Extracting a list of variables yields a realisation matrix with one
//! column per variable and rows ordered replication-major, time-minor.
//!
//! ## Surrogate Data
//!
//! - [`data::Dataset::permute_replications`]: shuffles which replication supplies
//!   each block of rows; the temporal order within replications is kept.
//! - [`data::Dataset::permute_samples`]: permutes the temporal order within every
//!   replication, optionally restricted to blocks ([`data::PermRange`]).
//!
//! All randomness comes from a caller-provided [`rand::Rng`], so seeded runs
//! replay exactly.
//!
//! ## Estimators
//!
//! Estimators are external to this crate. They plug in through the
//! [`estimators::Estimator`] trait, are selected by name from an
//! [`estimators::EstimatorRegistry`] and can be run over many surrogate chunks with
//! [`estimators::estimate_mult`].
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (data installation at `info`, extraction and
//! permutation details at `debug`) and leaves installing a subscriber to the
//! application.

pub mod data;
pub mod error;
pub mod estimators;

pub use data::{Dataset, PermRange, VarIndex};
pub use error::{DataError, Result};
