//! Bounded - macro for creating range-constrained numeric types
//!
//! Scroll fractions and sensor tilts all live in a fixed range. Construction
//! from live input always clamps; `new` is for constants and panics on a bad
//! literal at compile time.

/// Creates a bounded f64 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f64!(Progress, 0.0, 1.0);
/// let p = Progress::clamped(1.7);  // Progress(1.0)
/// ```
macro_rules! bounded_f64 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;

            #[track_caller]
            pub const fn new(value: f64) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            /// NaN collapses to the lower bound.
            pub fn clamped(value: f64) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f64 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::clamped(0.0)
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = f64;
            fn mul(self, rhs: f64) -> Self::Output {
                self.0 * rhs
            }
        }
    };
}

pub(crate) use bounded_f64;

#[cfg(test)]
mod tests {
    bounded_f64!(TestNorm, 0.0, 1.0);
    bounded_f64!(TestTilt, -5.0, 5.0);

    const HALF: TestNorm = TestNorm::new(0.5);

    #[test]
    fn bounded_const_valid() {
        assert_eq!(HALF.value(), 0.5);
    }

    #[test]
    fn bounded_clamps_both_ends() {
        assert_eq!(TestNorm::clamped(3.2).value(), TestNorm::MAX);
        assert_eq!(TestNorm::clamped(-0.1).value(), TestNorm::MIN);
        assert_eq!(TestTilt::clamped(-12.0).value(), -5.0);
    }

    #[test]
    fn bounded_nan_is_min() {
        assert_eq!(TestNorm::clamped(f64::NAN).value(), TestNorm::MIN);
    }

    #[test]
    fn bounded_default_is_zero_when_in_range() {
        assert_eq!(TestTilt::default().value(), 0.0);
        assert_eq!(TestNorm::default().value(), 0.0);
    }

    #[test]
    fn bounded_scales_into_plain_number() {
        assert_eq!(TestNorm::clamped(0.25) * 360.0, 90.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn bounded_rejects_invalid() {
        let _ = TestNorm::new(1.5);
    }
}
