use argminmax::ArgMinMax;

/// Smallest and largest value of a non-empty slice.
///
/// Callers guarantee `values` is non-empty (an empty series never reaches here).
#[inline]
pub(crate) fn min_max(values: &[f64]) -> (f64, f64) {
    debug_assert!(!values.is_empty());
    let (min_index, max_index) = values.argminmax();
    (values[min_index], values[max_index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_extremes_anywhere_in_the_slice() {
        assert_eq!(min_max(&[3.0, 1.0, 4.0, 1.5]), (1.0, 4.0));
        assert_eq!(min_max(&[7.0]), (7.0, 7.0));
    }
}
