/// Rounds to two decimal places, half away from zero. Values too large to
/// scale by 100 already have no fractional digits and are returned as is.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / 100.0;
    // normalise -0.0 so serialized output never shows "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(55.424), 55.42);
        assert_eq!(round2(-2.345_000_1), -2.35);
        assert_eq!(round2(66.880_000_000_01), 66.88);
    }

    #[test]
    fn huge_values_pass_through() {
        assert_eq!(round2(5.3e307), 5.3e307);
        assert_eq!(round2(-f64::MAX), -f64::MAX);
    }

    #[test]
    fn negative_zero_is_normalised() {
        assert!(round2(-0.001).is_sign_positive());
    }
}
