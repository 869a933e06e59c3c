// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::array;

use infodata::estimators::{Estimator, EstimatorRegistry};
use infodata::DataError;

use crate::test_helpers::{MeanEstimator, SumEstimator};

fn registry() -> EstimatorRegistry {
    let mut reg = EstimatorRegistry::new();
    reg.register("mean", || Box::new(MeanEstimator { parallel: false }))
        .register("mean_parallel", || Box::new(MeanEstimator { parallel: true }))
        .register("sum", || Box::new(SumEstimator));
    reg
}

#[test]
fn estimators_are_selected_by_name() {
    let reg = registry();
    assert_eq!(reg.names().collect::<Vec<_>>(), vec!["mean", "mean_parallel", "sum"]);
    assert!(reg.contains("sum"));

    let est = reg.build("mean_parallel").unwrap();
    assert_eq!(est.name(), "mean_parallel");
    assert!(est.is_parallel());

    let x = array![[1.0], [3.0]];
    let value = est.estimate(&[x.view()], 1).unwrap();
    assert_abs_diff_eq!(value[0], 2.0, epsilon = 1e-12);
}

#[test]
fn unknown_names_fail() {
    let err = registry().build("opencl_kraskov").err().unwrap();
    assert_eq!(err, DataError::UnknownEstimator("opencl_kraskov".into()));
    assert!(err.to_string().contains("opencl_kraskov"));
}

#[test]
fn local_values_are_optional() {
    let reg = registry();
    let x = array![[1.0, 2.0], [3.0, 4.0]];
    let y = array![[10.0], [20.0]];

    let sum = reg.build("sum").unwrap();
    assert!(sum.supports_local());
    let locals = sum.local_values(&[x.view(), y.view()]).unwrap();
    assert_eq!(locals.to_vec(), vec![13.0, 27.0]);
    assert_abs_diff_eq!(
        sum.estimate(&[x.view(), y.view()], 1).unwrap()[0],
        locals.sum(),
        epsilon = 1e-12
    );

    let mean = reg.build("mean").unwrap();
    assert!(!mean.supports_local());
    assert!(matches!(
        mean.local_values(&[x.view()]),
        Err(DataError::Estimation(_))
    ));
}
