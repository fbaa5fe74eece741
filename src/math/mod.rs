// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics: small least-squares fits, Kepler's equation and
//! index searching.


/// Fit a straight line through the supplied points with ordinary least
/// squares. Returns `(slope, intercept)`, or `None` if there are fewer than two
/// points or all of the abscissae are the same.
pub(crate) fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let x_mean = xs.iter().sum::<f64>() / n as f64;
    let y_mean = ys.iter().sum::<f64>() / n as f64;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        sxx += (x - x_mean).powi(2);
        sxy += (x - x_mean) * (y - y_mean);
    }
    if sxx.abs() < f64::EPSILON * n as f64 * x_mean.abs().max(1.0) {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, y_mean - slope * x_mean))
}

/// Fit a polynomial with `N` coefficients (i.e. degree `N - 1`) through the
/// points with weighted least squares. The returned coefficients are in
/// ascending order of power, suitable for [`polyval`].
pub(crate) fn weighted_polyfit<const N: usize>(
    xs: &[f64],
    ys: &[f64],
    weights: &[f64],
) -> Option<[f64; N]> {
    if xs.len() < N || xs.len() != ys.len() || xs.len() != weights.len() {
        return None;
    }

    // Normal equations: (A^T W A) p = A^T W y
    let mut ata = [[0.0; N]; N];
    let mut aty = [0.0; N];
    for ((&x, &y), &w) in xs.iter().zip(ys).zip(weights) {
        let mut powers = [1.0; N];
        for i in 1..N {
            powers[i] = powers[i - 1] * x;
        }
        for i in 0..N {
            aty[i] += w * powers[i] * y;
            for j in 0..N {
                ata[i][j] += w * powers[i] * powers[j];
            }
        }
    }

    solve(ata, aty)
}

/// Evaluate a polynomial with coefficients in ascending order of power.
pub(crate) fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Solve the square linear system `a x = b` with Gaussian elimination and
/// partial pivoting. `None` is returned for singular systems.
pub(crate) fn solve<const N: usize>(mut a: [[f64; N]; N], mut b: [f64; N]) -> Option<[f64; N]> {
    for col in 0..N {
        let pivot = (col..N).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < 1e-300 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..N {
            let factor = a[row][col] / a[col][col];
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0; N];
    for row in (0..N).rev() {
        let sum: f64 = (row + 1..N).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - sum) / a[row][row];
    }
    Some(x)
}

/// The index of the element of `values` closest to `target`. `None` if
/// `values` is empty.
pub(crate) fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(i, _)| i)
}

/// Solve Kepler's equation `M = E - e sin E` for the eccentric anomaly `E`
/// \[radians\] with Newton's method.
pub(crate) fn solve_kepler(mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    use std::f64::consts::{PI, TAU};

    // Keep M within [-pi, pi] so the starting guesses below converge.
    let m = (mean_anomaly_rad + PI).rem_euclid(TAU) - PI;
    let mut e_anom = if eccentricity < 0.8 { m } else { PI.copysign(m) };
    for _ in 0..50 {
        let delta = (e_anom - eccentricity * e_anom.sin() - m)
            / (1.0 - eccentricity * e_anom.cos());
        e_anom -= delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    e_anom
}

/// Wrap an angle into the range (-180, 180] \[degrees\].
pub(crate) fn wrap_degrees(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
