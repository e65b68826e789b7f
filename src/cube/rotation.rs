//! Rotation inputs: scroll through the hero, pointer position, phone tilt

use crate::config::Tuning;
use crate::primitives::{Degrees, Progress, Viewport};

/// Latest rotation contributions. Copied out of a `Cell` by each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub scroll_y: Degrees,
    /// Always zero; the scroll tilt was switched off
    pub scroll_x: Degrees,
    pub pointer_y: Degrees,
    pub pointer_x: Degrees,
}

/// Final cube orientation handed to CSS
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub y: Degrees,
    pub x: Degrees,
}

impl Orientation {
    pub fn to_css(&self) -> String {
        format!("{} {}", self.x.rotate_x_css(), self.y.rotate_y_css())
    }
}

impl RotationState {
    /// Yaw adds, pitch is inverted so moving the pointer up tips the cube back.
    pub fn compose(&self) -> Orientation {
        Orientation {
            y: self.scroll_y + self.pointer_y,
            x: -self.scroll_x - self.pointer_x,
        }
    }

    /// Record scroll inside the hero. Past the hero (`scroll_y > hero_height`)
    /// the rotation is frozen and `false` is returned.
    pub fn apply_scroll(&mut self, scroll_y: f64, hero_height: f64, viewport: Viewport) -> bool {
        if scroll_y > hero_height {
            return false;
        }
        let progress = Progress::through(scroll_y, hero_height - viewport.height);
        self.scroll_y = Degrees::new(progress * Degrees::FULL_TURN);
        self.scroll_x = Degrees::ZERO;
        true
    }

    pub fn apply_pointer(&mut self, client_x: f64, client_y: f64, viewport: Viewport, tuning: &Tuning) {
        let (fx, fy) = viewport.center_offset(client_x, client_y);
        self.pointer_y = Degrees::new(fx * tuning.pointer_yaw);
        self.pointer_x = Degrees::new(fy * tuning.pointer_pitch);
    }

    /// Phone tilt stands in for the pointer. Readings missing either axis
    /// are ignored and `false` is returned.
    pub fn apply_orientation(&mut self, gamma: Option<f64>, beta: Option<f64>, tuning: &Tuning) -> bool {
        let (Some(gamma), Some(beta)) = (gamma, beta) else {
            return false;
        };
        let tilt = (beta - tuning.beta_neutral).clamp(-tuning.beta_limit, tuning.beta_limit);
        self.pointer_y = Degrees::new(gamma.clamp(-tuning.gamma_limit, tuning.gamma_limit));
        self.pointer_x = Degrees::new(-tilt);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(1000.0, 800.0);

    #[test]
    fn compose_adds_yaw_and_negates_pitch() {
        let state = RotationState {
            scroll_y: Degrees::new(100.0),
            scroll_x: Degrees::ZERO,
            pointer_y: Degrees::new(-10.0),
            pointer_x: Degrees::new(4.0),
        };
        let o = state.compose();
        assert_eq!(o.y.value(), 90.0);
        assert_eq!(o.x.value(), -4.0);
    }

    #[test]
    fn orientation_css() {
        let o = Orientation { y: Degrees::new(90.0), x: Degrees::new(-2.0) };
        assert_eq!(o.to_css(), "rotateX(-2deg) rotateY(90deg)");
    }

    #[test]
    fn scroll_maps_hero_to_full_turn() {
        // hero 4000, window 800: span 3200
        let mut state = RotationState::default();
        assert!(state.apply_scroll(0.0, 4000.0, VIEW));
        assert_eq!(state.scroll_y, Degrees::ZERO);
        assert!(state.apply_scroll(1600.0, 4000.0, VIEW));
        assert_eq!(state.scroll_y.value(), 180.0);
        assert!(state.apply_scroll(3200.0, 4000.0, VIEW));
        assert_eq!(state.scroll_y.value(), 360.0);
    }

    #[test]
    fn scroll_rotation_never_exceeds_full_turn() {
        let mut state = RotationState::default();
        assert!(state.apply_scroll(3900.0, 4000.0, VIEW));
        assert_eq!(state.scroll_y.value(), 360.0);
    }

    #[test]
    fn scroll_past_hero_freezes_rotation() {
        let mut state = RotationState::default();
        state.apply_scroll(1600.0, 4000.0, VIEW);
        assert!(!state.apply_scroll(4001.0, 4000.0, VIEW));
        assert_eq!(state.scroll_y.value(), 180.0);
    }

    #[test]
    fn pointer_maps_center_offset() {
        let t = Tuning::default();
        let mut state = RotationState::default();
        state.apply_pointer(1000.0, 0.0, VIEW, &t);
        assert_eq!(state.pointer_y.value(), 20.0);
        assert_eq!(state.pointer_x.value(), -5.0);
        state.apply_pointer(500.0, 400.0, VIEW, &t);
        assert_eq!(state.compose(), Orientation::default());
    }

    #[test]
    fn orientation_clamps_and_inverts_beta() {
        let t = Tuning::default();
        let mut state = RotationState::default();
        assert!(state.apply_orientation(Some(35.0), Some(60.0), &t));
        assert_eq!(state.pointer_y.value(), 20.0);
        assert_eq!(state.pointer_x.value(), -5.0);
        assert!(state.apply_orientation(Some(-8.0), Some(43.0), &t));
        assert_eq!(state.pointer_y.value(), -8.0);
        assert_eq!(state.pointer_x.value(), 2.0);
    }

    #[test]
    fn orientation_without_readings_is_ignored() {
        let t = Tuning::default();
        let mut state = RotationState::default();
        state.apply_orientation(Some(5.0), Some(45.0), &t);
        assert!(!state.apply_orientation(None, Some(50.0), &t));
        assert!(!state.apply_orientation(Some(5.0), None, &t));
        assert_eq!(state.pointer_y.value(), 5.0);
    }
}
