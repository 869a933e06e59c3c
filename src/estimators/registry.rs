// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::traits::Estimator;
use crate::error::{DataError, Result};

type Constructor = Box<dyn Fn() -> Box<dyn Estimator> + Send + Sync>;

/// Name-keyed set of estimator constructors.
///
/// An analysis picks its estimator once, by name, when it is set up and then
/// calls it through the [`Estimator`] trait.
#[derive(Default)]
pub struct EstimatorRegistry {
    constructors: BTreeMap<String, Constructor>,
}

impl EstimatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor; an existing entry with the same name is replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Estimator> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Box::new(constructor));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Build the estimator registered under `name`.
    pub fn build(&self, name: &str) -> Result<Box<dyn Estimator>> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| DataError::UnknownEstimator(name.to_string()))?;
        debug!(estimator = name, "building estimator");
        Ok(constructor())
    }
}

impl fmt::Debug for EstimatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.constructors.keys()).finish()
    }
}
