// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Seam between the data store and external estimators: the capability trait,
// selection by name and multi-chunk estimation.

pub mod chunking;
pub mod registry;
pub mod traits;

pub use chunking::{estimate_mult, NamedVariable};
pub use registry::EstimatorRegistry;
pub use traits::Estimator;
