/// Summary statistics of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub mean: f64,
    pub median: f64,
    pub p25: f64,
    pub p75: f64,
}

/// Compute mean, median, 25th and 75th percentile. Needs at least two values.
pub fn compute_metrics<T>(values: &[T]) -> Option<Metrics>
where
    T: Copy + Ord + Into<i128>,
{
    if values.len() < 2 {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let as_f64 = |v: T| Into::<i128>::into(v) as f64;
    let mean = values.iter().map(|v| as_f64(*v)).sum::<f64>() / n as f64;
    Some(Metrics {
        mean,
        median: as_f64(sorted[n / 2]),
        p25: as_f64(sorted[n / 4]),
        p75: as_f64(sorted[3 * n / 4]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_two_values() {
        assert_eq!(compute_metrics::<u64>(&[]), None);
        assert_eq!(compute_metrics(&[5u64]), None);
    }

    #[test]
    fn quartiles_by_index() {
        let m = compute_metrics(&[40u64, 10, 30, 20]).unwrap();
        assert_eq!(m.mean, 25.0);
        assert_eq!(m.median, 30.0);
        assert_eq!(m.p25, 20.0);
        assert_eq!(m.p75, 40.0);
    }

    #[test]
    fn negative_values() {
        let m = compute_metrics(&[-4i64, 2, -1, 7]).unwrap();
        assert_eq!(m.mean, 1.0);
        assert_eq!(m.p25, -1.0);
        assert_eq!(m.median, 2.0);
    }
}
