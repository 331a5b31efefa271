//! Utility functions for decoding model outputs.

/// Returns the index and value of the maximum element.
///
/// On exact ties the first (lowest index) element wins, and `NaN` values are never selected.
/// Returns [`None`] if there is no element that can be compared.
#[inline]
#[must_use]
pub fn argmax<'a>(values: impl IntoIterator<Item = &'a f32>) -> Option<(usize, f32)> {
    let mut max: Option<(usize, f32)> = None;

    for (i, &value) in values.into_iter().enumerate() {
        if value.is_nan() {
            continue;
        }

        match max {
            Some((_, max_value)) if value <= max_value => {}
            _ => max = Some((i, value)),
        }
    }

    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_finds_maximum() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), Some((1, 0.9)));
        assert_eq!(argmax(&[-3.0, -1.0, -2.0]), Some((1, -1.0)));
    }

    #[test]
    fn argmax_prefers_first_on_ties() {
        assert_eq!(argmax(&[0.2, 0.7, 0.7, 0.1]), Some((1, 0.7)));
        assert_eq!(argmax(&[0.5, 0.5]), Some((0, 0.5)));
    }

    #[test]
    fn argmax_skips_nan() {
        assert_eq!(argmax(&[f32::NAN, 0.4, f32::NAN]), Some((1, 0.4)));
        assert_eq!(argmax(&[f32::NAN, f32::NAN]), None);
        assert_eq!(argmax(&[]), None);
    }
}
