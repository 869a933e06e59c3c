// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array3;
use rand::Rng;
use rand_distr::StandardNormal;

/// Number of processes in the simulated network.
pub const MUTE_PROCESSES: usize = 5;

// Samples simulated and dropped before recording so every lag has a history.
const WARM_UP: usize = 3;

/// Simulate the five-process network from the MuTE toolbox paper
/// (Montalto et al., PLOS ONE, 2014, eq. 14).
///
/// Autoregressive processes of order two or less with the couplings
///
/// ```text
/// 0 -> 1, lag 2 (quadratic)
/// 0 -> 2, lag 3
/// 0 -> 3, lag 2 (quadratic)
/// 3 -> 4, lag 1
/// 4 -> 3, lag 1
/// ```
///
/// and unit Gaussian innovations. Returns processes x samples x replications.
pub fn generate_mute_array<R: Rng + ?Sized>(
    n_samples: usize,
    n_replications: usize,
    rng: &mut R,
) -> Array3<f64> {
    let mut noise = || -> f64 { rng.sample(StandardNormal) };
    let term_1 = 0.95 * std::f64::consts::SQRT_2;
    let term_2 = 0.25 * std::f64::consts::SQRT_2;
    let term_3 = -0.25 * std::f64::consts::SQRT_2;

    let n_total = n_samples + WARM_UP;
    let mut x = Array3::<f64>::zeros((MUTE_PROCESSES, n_total, n_replications));
    for p in 0..MUTE_PROCESSES {
        for n in 0..WARM_UP {
            for r in 0..n_replications {
                x[[p, n, r]] = noise();
            }
        }
    }

    for r in 0..n_replications {
        for n in WARM_UP..n_total {
            x[[0, n, r]] = term_1 * x[[0, n - 1, r]] - 0.9025 * x[[0, n - 2, r]] + noise();
            x[[1, n, r]] = 0.5 * x[[0, n - 2, r]].powi(2) + noise();
            x[[2, n, r]] = -0.4 * x[[0, n - 3, r]] + noise();
            x[[3, n, r]] = -0.5 * x[[0, n - 2, r]].powi(2)
                + term_2 * x[[3, n - 1, r]]
                + term_2 * x[[4, n - 1, r]]
                + noise();
            x[[4, n, r]] = term_3 * x[[3, n - 1, r]] + term_2 * x[[4, n - 1, r]] + noise();
        }
    }

    x.slice_move(ndarray::s![.., WARM_UP.., ..])
}
