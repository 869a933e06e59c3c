// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{Array3, Axis};

use infodata::data::{Dataset, VarIndex};
use infodata::DataError;

use crate::test_helpers::{generate_gaussian_data, sequential_data};

#[test]
fn unset_dataset_reports_no_data() {
    let ds = Dataset::new(false);
    assert!(!ds.is_set());
    assert_eq!(ds.data().unwrap_err(), DataError::NoData);
    assert_eq!(ds.n_processes().unwrap_err(), DataError::NoData);
    assert_eq!(ds.n_realisations(None).unwrap_err(), DataError::NoData);
    assert!(ds.get_realisations(VarIndex::new(0, 0), &[VarIndex::new(0, 0)]).is_err());

    // Normalisation is on unless switched off
    assert!(Dataset::default().normalise());
    assert!(!Dataset::default().with_normalise(false).unwrap().normalise());
}

#[test]
fn normalisation_is_fixed_once_data_is_set() {
    let raw = generate_gaussian_data((2, 50, 3), 5.0, 2.0, 11);
    let ds = Dataset::from_array(&raw, "psr", true).unwrap();
    let stored = ds.data().unwrap().to_owned();

    let err = ds.clone().with_normalise(false).unwrap_err();
    assert!(matches!(err, DataError::InvalidConfiguration(_)));
    assert!(ds.normalise());
    assert_eq!(ds.data().unwrap(), stored.view());
}

#[test]
fn realisation_counts() {
    let ds = Dataset::from_array(&sequential_data(3, 20, 5), "psr", false).unwrap();
    assert_eq!(ds.n_realisations_samples(None).unwrap(), 20);
    assert_eq!(ds.n_realisations_repl().unwrap(), 5);
    assert_eq!(ds.n_realisations(None).unwrap(), 100);

    let cv = VarIndex::new(1, 4);
    assert_eq!(ds.n_realisations_samples(Some(cv)).unwrap(), 16);
    assert_eq!(ds.n_realisations(Some(cv)).unwrap(), 80);

    // Current value at the very end leaves nothing; beyond it is out of range
    assert_eq!(ds.n_realisations_samples(Some(VarIndex::new(0, 20))).unwrap(), 0);
    let err = ds.n_realisations_samples(Some(VarIndex::new(0, 21))).unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn normalisation_standardises_each_process() {
    let mut raw = generate_gaussian_data((3, 200, 4), 5.0, 3.0, 42);
    // Very different scales per process
    raw.index_axis_mut(Axis(0), 1).mapv_inplace(|v| 1000.0 * v - 40.0);

    let ds = Dataset::from_array(&raw, "psr", true).unwrap();
    let data = ds.data().unwrap();
    for p in 0..3 {
        let block = data.index_axis(Axis(0), p);
        let n = block.len() as f64;
        let mean = block.sum() / n;
        let var = block.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(var, 1.0, epsilon = 1e-10);
    }
}

#[test]
fn normalisation_does_not_leak_across_processes() {
    let a = generate_gaussian_data((2, 50, 3), 0.0, 1.0, 7);
    let mut b = a.clone();
    b.index_axis_mut(Axis(0), 1).mapv_inplace(|v| v * 50.0 + 3.0);
    b[[1, 0, 0]] = 1e6;

    let da = Dataset::from_array(&a, "psr", true).unwrap();
    let db = Dataset::from_array(&b, "psr", true).unwrap();
    assert_eq!(
        da.data().unwrap().index_axis(Axis(0), 0),
        db.data().unwrap().index_axis(Axis(0), 0)
    );
}

#[test]
fn disabled_normalisation_is_bit_identical() {
    let raw = generate_gaussian_data((2, 30, 2), 4.0, 2.0, 1);
    // stored as samples x processes x replications
    let spr = raw.clone().permuted_axes([1, 0, 2]);
    let ds = Dataset::from_array(&spr, "spr", false).unwrap();
    let data = ds.data().unwrap();
    for (stored, original) in data.iter().zip(raw.iter()) {
        assert_eq!(stored.to_bits(), original.to_bits());
    }
}

#[test]
fn set_data_replaces_atomically() {
    let mut ds = Dataset::new(false);
    ds.set_data(&sequential_data(2, 10, 3), "psr").unwrap();
    assert_eq!(ds.n_samples().unwrap(), 10);

    // A wholesale replacement updates array and counts together
    ds.set_data(&sequential_data(4, 6, 2), "psr").unwrap();
    assert_eq!(ds.n_processes().unwrap(), 4);
    assert_eq!(ds.n_samples().unwrap(), 6);
    assert_eq!(ds.n_replications().unwrap(), 2);
    assert_eq!(ds.data().unwrap(), sequential_data(4, 6, 2).view());

    // A failing set leaves the stored data untouched
    let err = ds.set_data(&sequential_data(1, 2, 3), "ps").unwrap_err();
    assert!(matches!(err, DataError::InvalidConfiguration(_)));
    assert_eq!(ds.data().unwrap(), sequential_data(4, 6, 2).view());

    let mut normed = Dataset::new(true);
    normed.set_data(&sequential_data(2, 10, 3), "psr").unwrap();
    let before = normed.data().unwrap().to_owned();
    let err = normed
        .set_data(&Array3::<f64>::from_elem((2, 5, 2), 1.0), "psr")
        .unwrap_err();
    assert!(matches!(err, DataError::Normalisation { process: 0, .. }));
    assert_eq!(normed.data().unwrap(), before.view());
}
