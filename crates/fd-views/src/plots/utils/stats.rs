//! Statistical utilities for plots

use std::cmp::Ordering;
use indexmap::IndexMap;

/// Number of rows holding one distinct value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Count distinct non-null values, in first-encounter order
pub fn value_counts<I, S>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = Option<S>>,
    S: Into<String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value.into()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect()
}

/// Most frequent first; equal counts keep encounter order
pub fn sort_by_count(counts: &mut [ValueCount]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Ascending scale order: numbers by value, then any non-numeric text
pub fn sort_by_scale(counts: &mut [ValueCount]) {
    counts.sort_by(|a, b| compare_scale_values(&a.value, &b.value));
}

fn compare_scale_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Pearson correlation over the rows where both values are present.
///
/// `None` when fewer than two such rows exist or either side is constant.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        None
    } else {
        Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
    }
}

/// Pairwise correlation matrix; the diagonal is exactly 1.0 when defined
pub fn correlation_matrix(columns: &[Vec<Option<f64>>]) -> Vec<Vec<Option<f64>>> {
    let n = columns.len();
    let mut matrix = vec![vec![None; n]; n];

    for i in 0..n {
        for j in i..n {
            let value = pearson(&columns[i], &columns[j]);
            let value = if i == j { value.map(|_| 1.0) } else { value };
            matrix[i][j] = value;
            matrix[j][i] = value;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(counts: &[ValueCount]) -> Vec<(&str, usize)> {
        counts.iter().map(|c| (c.value.as_str(), c.count)).collect()
    }

    #[test]
    fn test_counts_skip_nulls() {
        let counts = value_counts(vec![Some("A"), None, Some("B"), Some("A")]);
        assert_eq!(pairs(&counts), vec![("A", 2), ("B", 1)]);
    }

    #[test]
    fn test_sort_by_count_is_stable() {
        let mut counts = value_counts(["x", "y", "z", "z", "y"].map(Some));
        sort_by_count(&mut counts);
        assert_eq!(pairs(&counts), vec![("y", 2), ("z", 2), ("x", 1)]);
    }

    #[test]
    fn test_sort_by_scale_is_numeric() {
        let mut counts = value_counts(["10", "2", "9", "unsure", "2"].map(Some));
        sort_by_scale(&mut counts);
        assert_eq!(pairs(&counts), vec![("2", 2), ("9", 1), ("10", 1), ("unsure", 1)]);
    }

    #[test]
    fn test_pearson_uses_pairwise_complete_rows() {
        let x = vec![Some(1.0), Some(2.0), None, Some(3.0)];
        let y = vec![Some(2.0), Some(4.0), Some(100.0), Some(6.0)];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_negative_and_undefined() {
        let x = vec![Some(1.0), Some(2.0), Some(3.0)];
        let y = vec![Some(3.0), Some(2.0), Some(1.0)];
        assert!((pearson(&x, &y).unwrap() + 1.0).abs() < 1e-12);

        let constant = vec![Some(4.0), Some(4.0), Some(4.0)];
        assert_eq!(pearson(&x, &constant), None);
        assert_eq!(pearson(&[Some(1.0)], &[Some(2.0)]), None);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let columns = vec![
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)],
            vec![Some(2.0), Some(1.0), Some(4.0), Some(3.0)],
            vec![Some(5.0), Some(5.0), Some(5.0), Some(5.0)],
        ];
        let matrix = correlation_matrix(&columns);

        assert_eq!(matrix[0][0], Some(1.0));
        assert_eq!(matrix[0][1], matrix[1][0]);
        assert_eq!(matrix[2][2], None);
        assert_eq!(matrix[0][2], None);
        assert!(correlation_matrix(&[]).is_empty());
    }
}
