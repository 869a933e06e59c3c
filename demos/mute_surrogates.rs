// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infodata::data::{Dataset, PermRange, VarIndex};
use infodata::estimators::{estimate_mult, Estimator, EstimatorRegistry, NamedVariable};
use infodata::Result;
use ndarray::{concatenate, Array1, Array2, ArrayView2, Axis};

/// Absolute Pearson correlation between the first columns of two inputs; a
/// stand-in for a real dependence measure.
struct AbsCorrelation;

impl Estimator for AbsCorrelation {
    fn name(&self) -> &str {
        "abs_correlation"
    }

    fn is_parallel(&self) -> bool {
        false
    }

    fn estimate(&self, variables: &[ArrayView2<'_, f64>], _n_chunks: usize) -> Result<Array1<f64>> {
        let (x, y) = (variables[0].column(0), variables[1].column(0));
        let n = x.len() as f64;
        let (mx, my) = (x.sum() / n, y.sum() / n);
        let mut sxy = 0.0;
        let mut sxx = 0.0;
        let mut syy = 0.0;
        for (a, b) in x.iter().zip(y.iter()) {
            sxy += (a - mx) * (b - my);
            sxx += (a - mx).powi(2);
            syy += (b - my).powi(2);
        }
        Ok(Array1::from(vec![(sxy / (sxx * syy).sqrt()).abs()]))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = rand::thread_rng();
    let mut data = Dataset::new(true);
    data.generate_mute_data(1000, 10, &mut rng)?;

    let mut registry = EstimatorRegistry::new();
    registry.register("abs_correlation", || Box::new(AbsCorrelation));
    let estimator = registry.build("abs_correlation")?;

    // Process 0 drives process 2 with a lag of three samples
    let current_value = VarIndex::new(2, 3);
    let (target, _) = data.get_realisations(current_value, &[current_value])?;
    let (source, _) = data.get_realisations(current_value, &[VarIndex::new(0, 0)])?;
    let observed = estimator.estimate(&[source.view(), target.view()], 1)?[0];

    let n_perm = 200;
    let surrogates: Vec<Array2<f64>> = (0..n_perm)
        .map(|_| {
            data.permute_samples(current_value, &[VarIndex::new(0, 0)], PermRange::Max, &mut rng)
                .map(|(s, _)| s)
        })
        .collect::<Result<_>>()?;
    let views: Vec<ArrayView2<'_, f64>> = surrogates.iter().map(|s| s.view()).collect();
    let stacked = concatenate(Axis(0), &views).expect("surrogates share one shape");

    let null = estimate_mult(
        &*estimator,
        n_perm,
        &[
            NamedVariable::new("source", stacked.view()),
            NamedVariable::new("target", target.view()),
        ],
        &["target"],
        "source",
    )?;
    let p_value = null.iter().filter(|&&v| v >= observed).count() as f64 / n_perm as f64;

    println!("Observed |corr(x0[n-3], x2[n])|: {observed:.4}");
    println!("Null distribution mean:          {:.4}", null.mean().unwrap_or(f64::NAN));
    println!("Permutation p-value:             {p_value:.4}");
    Ok(())
}
