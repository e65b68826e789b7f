//! Which side of the hero cube faces the viewer

use crate::primitives::Degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Left,
    Back,
    Right,
    Top,
}

/// One of the four background videos, each paired with a side face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceVideo {
    Hero,
    Sideral,
    Meta,
    Luih,
}

impl FaceVideo {
    pub const ALL: [Self; 4] = [Self::Hero, Self::Sideral, Self::Meta, Self::Luih];
}

impl Face {
    /// Classify the combined cube rotation.
    ///
    /// Tilting back past `top_pitch` shows the top regardless of yaw. Otherwise
    /// the yaw, folded into [0, 360), picks one of four 90° sectors; each
    /// sector is half-open so 45, 135, 225 and 315 belong to the sector above.
    pub fn classify(total_y: Degrees, total_x: Degrees, top_pitch: f64) -> Self {
        if total_x.value() <= top_pitch {
            return Self::Top;
        }
        let angle = total_y.normalized();
        if (45.0..135.0).contains(&angle) {
            Self::Left
        } else if (135.0..225.0).contains(&angle) {
            Self::Back
        } else if (225.0..315.0).contains(&angle) {
            Self::Right
        } else {
            Self::Front
        }
    }

    pub fn video(&self) -> Option<FaceVideo> {
        match self {
            Self::Front => Some(FaceVideo::Hero),
            Self::Left => Some(FaceVideo::Sideral),
            Self::Back => Some(FaceVideo::Meta),
            Self::Right => Some(FaceVideo::Luih),
            Self::Top => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Left => "left",
            Self::Back => "back",
            Self::Right => "right",
            Self::Top => "top",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: f64 = -20.0;

    fn classify(y: f64, x: f64) -> Face {
        Face::classify(Degrees::new(y), Degrees::new(x), TOP)
    }

    #[test]
    fn cardinal_angles() {
        assert_eq!(classify(0.0, 0.0), Face::Front);
        assert_eq!(classify(90.0, 0.0), Face::Left);
        assert_eq!(classify(180.0, 0.0), Face::Back);
        assert_eq!(classify(270.0, 0.0), Face::Right);
    }

    #[test]
    fn boundaries_go_to_upper_sector() {
        assert_eq!(classify(45.0, 0.0), Face::Left);
        assert_eq!(classify(135.0, 0.0), Face::Back);
        assert_eq!(classify(225.0, 0.0), Face::Right);
        assert_eq!(classify(315.0, 0.0), Face::Front);
        assert_eq!(classify(44.999, 0.0), Face::Front);
        assert_eq!(classify(314.999, 0.0), Face::Right);
    }

    #[test]
    fn unwrapped_angles_fold_first() {
        assert_eq!(classify(450.0, 0.0), Face::Left);
        assert_eq!(classify(-90.0, 0.0), Face::Right);
        assert_eq!(classify(-20.0, 0.0), Face::Front);
        assert_eq!(classify(380.0, 0.0), Face::Front);
    }

    #[test]
    fn every_degree_has_exactly_one_side() {
        for d in 0..360 {
            let face = classify(d as f64, 0.0);
            assert_ne!(face, Face::Top, "{d}");
            let expected = match d {
                45..=134 => Face::Left,
                135..=224 => Face::Back,
                225..=314 => Face::Right,
                _ => Face::Front,
            };
            assert_eq!(face, expected, "{d}");
        }
    }

    #[test]
    fn tilt_back_shows_top_at_any_yaw() {
        assert_eq!(classify(90.0, -25.0), Face::Top);
        assert_eq!(classify(200.0, -20.0), Face::Top);
        assert_eq!(classify(0.0, -19.99), Face::Front);
    }

    #[test]
    fn videos_pair_with_side_faces() {
        assert_eq!(Face::Left.video(), Some(FaceVideo::Sideral));
        assert_eq!(Face::Top.video(), None);
    }
}
