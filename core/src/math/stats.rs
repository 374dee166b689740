pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mut sum = 0.0;
        for value in values {
            sum += value;
        }
        sum / values.len() as f64
    }
}

/// Arithmetic mean of `values`, or `0.0` for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    StatsHelper::mean(values)
}
