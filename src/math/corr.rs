//! Pairwise Pearson correlation.
//!
//! The matrix is small (one row per numeric column), so we compute the upper
//! triangle directly and mirror it. The diagonal is pinned to exactly 1.0
//! rather than recomputed, which keeps it clean even under floating-point
//! noise. A zero-variance column yields NaN against every other column.

use nalgebra::DMatrix;

/// A labeled, symmetric correlation matrix.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub matrix: DMatrix<f64>,
}

/// Pearson correlation coefficient of two equal-length series.
///
/// Returns NaN when either series has zero variance (or fewer than two
/// observations).
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }

    let nf = n as f64;
    let mean_x = xs.iter().sum::<f64>() / nf;
    let mean_y = ys.iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}

/// Build the pairwise correlation matrix over the given labeled series.
pub fn correlation_matrix(series: &[(&str, Vec<f64>)]) -> CorrelationMatrix {
    let k = series.len();
    let mut matrix = DMatrix::from_element(k, k, 1.0);

    for i in 0..k {
        for j in (i + 1)..k {
            let r = pearson(&series[i].1, &series[j].1);
            matrix[(i, j)] = r;
            matrix[(j, i)] = r;
        }
    }

    CorrelationMatrix {
        labels: series.iter().map(|(name, _)| name.to_string()).collect(),
        matrix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfectly_linear_series_correlate_to_one() {
        let xs = vec![1.0, 2.0, 3.0, 4.0];
        let ys = vec![2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);

        let neg: Vec<f64> = ys.iter().map(|y| -y).collect();
        assert!((pearson(&xs, &neg) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_yields_nan() {
        let xs = vec![5.0, 5.0, 5.0];
        let ys = vec![1.0, 2.0, 3.0];
        assert!(pearson(&xs, &ys).is_nan());
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let m = correlation_matrix(&[
            ("quantity", vec![1.0, 2.0, 3.0, 1.0]),
            ("price", vec![10.0, 5.0, 2.0, 9.0]),
            ("revenue", vec![10.0, 10.0, 6.0, 9.0]),
        ]);

        assert_eq!(m.labels, vec!["quantity", "price", "revenue"]);
        for i in 0..3 {
            assert!((m.matrix[(i, i)] - 1.0).abs() < 1e-15);
            for j in 0..3 {
                assert!((m.matrix[(i, j)] - m.matrix[(j, i)]).abs() < 1e-15);
            }
        }
    }
}
