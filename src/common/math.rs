pub fn lerp(t: f64, v1: f64, v2: f64) -> f64 {
    (1.0 - t) * v1 + t * v2
}

pub fn gamma_correct(value: f64) -> f64 {
    if value <= 0.0031308 {
        return 12.92 * value;
    }

    1.055 * value.powf(1.0 / 2.4) - 0.055
}

/// Binary search for the last index in `0..size - 1` whose predicate holds,
/// clamped so that `index + 1` is always valid.
pub fn find_interval<T: Fn(usize) -> bool>(size: usize, pred: T) -> usize {
    let mut first = 0;
    let mut len = size;

    while len > 0 {
        let half = len >> 1;
        let middle = first + half;
        if pred(middle) {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    first.saturating_sub(1).min(size.saturating_sub(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 2.0, 4.0), 2.0);
        assert_eq!(lerp(1.0, 2.0, 4.0), 4.0);
        assert_eq!(lerp(0.5, 2.0, 4.0), 3.0);
        assert_eq!(lerp(2.0, 2.0, 4.0), 6.0);
    }

    #[test]
    fn test_find_interval() {
        let lambda = [400.0, 450.0, 500.0, 550.0];
        assert_eq!(find_interval(lambda.len(), |i| lambda[i] <= 300.0), 0);
        assert_eq!(find_interval(lambda.len(), |i| lambda[i] <= 400.0), 0);
        assert_eq!(find_interval(lambda.len(), |i| lambda[i] <= 475.0), 1);
        assert_eq!(find_interval(lambda.len(), |i| lambda[i] <= 500.0), 2);
        assert_eq!(find_interval(lambda.len(), |i| lambda[i] <= 900.0), 2);
    }

    #[test]
    fn test_gamma_correct() {
        assert_eq!(gamma_correct(0.0), 0.0);
        approx::assert_relative_eq!(gamma_correct(0.002), 0.02584, epsilon = 1e-12);
        approx::assert_relative_eq!(gamma_correct(0.5), 0.735356983, epsilon = 1e-6);
        approx::assert_relative_eq!(gamma_correct(1.0), 1.0, epsilon = 1e-12);
    }
}
