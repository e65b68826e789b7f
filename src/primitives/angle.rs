//! Degrees - unwrapped rotation angle with CSS transform output

use std::ops::{Add, Neg, Sub};

/// Angle in degrees, unwrapped. Only `normalized` folds it into one turn.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(f64);

impl Degrees {
    pub const ZERO: Self = Self(0.0);
    pub const FULL_TURN: f64 = 360.0;

    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Normalized into [0, 360)
    pub fn normalized(&self) -> f64 {
        let d = ((self.0 % Self::FULL_TURN) + Self::FULL_TURN) % Self::FULL_TURN;
        // -1e-14 % 360 + 360 rounds back up to exactly 360
        if d >= Self::FULL_TURN { 0.0 } else { d }
    }

    pub fn rotate_x_css(&self) -> String {
        format!("rotateX({}deg)", self.0)
    }

    pub fn rotate_y_css(&self) -> String {
        format!("rotateY({}deg)", self.0)
    }
}

impl Add for Degrees {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
