mod tests {
    use core::f64::consts::TAU;

    use myrtio_ring_composer::math::{Rotation, scale, wrap};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, 5), 0);
        assert_eq!(wrap(4, 5), 4);
        assert_eq!(wrap(12, 5), 2);
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(-10, 5), 0);
        assert_eq!(wrap(-11, 5), 4);
        assert_eq!(wrap(isize::MAX, 1), 0);
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(0, 12, 3), 0);
        assert_eq!(scale(11, 12, 3), 2);
        assert_eq!(scale(3, 4, 12), 9);
    }

    #[test]
    fn test_rotation_identity() {
        assert_eq!(Rotation::from_angle(0.0, 12), Rotation::IDENTITY);
        assert_eq!(Rotation::from_angle(f64::NAN, 12), Rotation::IDENTITY);
        assert_eq!(Rotation::from_angle(f64::INFINITY, 12), Rotation::IDENTITY);
    }

    #[test]
    fn test_rotation_positive() {
        let arc = TAU / 8.0;
        let rotation = Rotation::from_angle(1.25 * arc, 8);
        assert_eq!(rotation.shift, 1);
        assert_close(rotation.weight, 0.25);
    }

    #[test]
    fn test_rotation_negative_uses_floor() {
        let arc = TAU / 12.0;
        let rotation = Rotation::from_angle(-0.5 * arc, 12);
        assert_eq!(rotation.shift, 11);
        assert_close(rotation.weight, 0.5);

        let rotation = Rotation::from_angle(-2.75 * arc, 12);
        assert_eq!(rotation.shift, 9);
        assert_close(rotation.weight, 0.25);
    }

    #[test]
    fn test_rotation_tiny_negative() {
        let rotation = Rotation::from_angle(-1e-300, 6);
        assert_eq!(rotation.shift, 0);
        assert!(rotation.weight < 1.0);
    }

    #[test]
    fn test_rotation_wraps_many_turns() {
        let arc = TAU / 4.0;
        let rotation = Rotation::from_angle(1000.0 * TAU + 2.5 * arc, 4);
        assert_eq!(rotation.shift, 2);
        assert_close(rotation.weight, 0.5);

        let rotation = Rotation::from_angle(-1000.0 * TAU + 2.5 * arc, 4);
        assert_eq!(rotation.shift, 2);
        assert_close(rotation.weight, 0.5);
    }
}
