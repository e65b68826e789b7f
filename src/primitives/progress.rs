//! Progress - fraction of a scroll span that has been travelled

use super::bounded::bounded_f64;

bounded_f64!(Progress, 0.0, 1.0);

impl Progress {
    pub const START: Self = Self::new(0.0);
    pub const END: Self = Self::new(1.0);

    /// `travelled / span`, clamped. A span that is not positive (the section
    /// is no taller than the viewport) is a step: END once anything has been
    /// travelled, START otherwise.
    pub fn through(travelled: f64, span: f64) -> Self {
        if span <= 0.0 {
            return if travelled > 0.0 { Self::END } else { Self::START };
        }
        Self::clamped(travelled / span)
    }
}
