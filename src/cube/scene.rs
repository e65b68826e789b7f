//! Desired look of the hero for one rotation, and the difference between two

use super::face::{Face, FaceVideo};
use super::rotation::{Orientation, RotationState};
use crate::config::SiteConfig;

/// What sits behind the cube in the sticky container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// No image, transparent color: the active video shows through
    Clear,
    Image(&'static str),
}

impl Backdrop {
    pub fn image_css(&self) -> String {
        match self {
            Self::Clear => "none".to_string(),
            Self::Image(url) => format!("url('{url}')"),
        }
    }

    /// Empty string resets to the stylesheet color.
    pub fn color_css(&self) -> &'static str {
        match self {
            Self::Clear => "transparent",
            Self::Image(_) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub face: Face,
    pub orientation: Orientation,
    pub backdrop: Backdrop,
    /// At most one video plays; `None` for the top face and the final front
    pub playing: Option<FaceVideo>,
    pub logo: &'static str,
}

impl Scene {
    pub fn derive(state: &RotationState, config: &SiteConfig) -> Self {
        let tuning = &config.tuning;
        let assets = &config.assets;
        let orientation = state.compose();
        let face = Face::classify(orientation.y, orientation.x, tuning.top_pitch);
        let past_swap = state.scroll_y.value() > tuning.swap_angle;

        let (backdrop, playing) = match face {
            Face::Top => (Backdrop::Image(assets.top_backdrop), None),
            Face::Front if past_swap => (Backdrop::Image(assets.front_final_backdrop), None),
            side => (Backdrop::Clear, side.video()),
        };

        Self {
            face,
            orientation,
            backdrop,
            playing,
            logo: if past_swap { assets.logo_final } else { assets.logo },
        }
    }

    /// Scene for a page missing any face video: nothing plays and the front
    /// keeps a clear backdrop instead of its final artwork. Top is unchanged.
    pub fn without_videos(self) -> Self {
        let backdrop = match self.face {
            Face::Top => self.backdrop,
            _ => Backdrop::Clear,
        };
        Self { backdrop, playing: None, ..self }
    }

    /// Mutations needed to move the page from `prev` to `self`. With no
    /// previous scene everything is applied.
    pub fn changes(&self, prev: Option<&Scene>) -> SceneDelta {
        let stop = FaceVideo::ALL
            .into_iter()
            .filter(|v| Some(*v) != self.playing)
            .filter(|v| prev.is_none_or(|p| p.playing == Some(*v)))
            .collect();

        SceneDelta {
            transform: prev.is_none_or(|p| p.orientation != self.orientation).then(|| self.orientation.to_css()),
            backdrop: prev.is_none_or(|p| p.backdrop != self.backdrop).then_some(self.backdrop),
            logo: prev.is_none_or(|p| p.logo != self.logo).then_some(self.logo),
            stop,
            play: self.playing,
        }
    }
}

/// The floating contact button shows once the hero is scrolled past.
pub fn fab_visible(scroll_y: f64, hero_height: f64) -> bool {
    scroll_y > hero_height
}

/// Page mutations for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneDelta {
    pub transform: Option<String>,
    pub backdrop: Option<Backdrop>,
    pub logo: Option<&'static str>,
    /// Deactivate and pause
    pub stop: Vec<FaceVideo>,
    /// Activate, and start if paused. Repeated every frame so a blocked
    /// autoplay gets another try.
    pub play: Option<FaceVideo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Degrees;

    fn scene(scroll_y: f64, pointer_y: f64, pointer_x: f64) -> Scene {
        let state = RotationState {
            scroll_y: Degrees::new(scroll_y),
            scroll_x: Degrees::ZERO,
            pointer_y: Degrees::new(pointer_y),
            pointer_x: Degrees::new(pointer_x),
        };
        Scene::derive(&state, &SiteConfig::default())
    }

    #[test]
    fn page_top_plays_front_video() {
        let s = scene(0.0, 0.0, 0.0);
        assert_eq!(s.face, Face::Front);
        assert_eq!(s.playing, Some(FaceVideo::Hero));
        assert_eq!(s.backdrop, Backdrop::Clear);
        assert_eq!(s.logo, "assets/logo_final.jpg");
    }

    #[test]
    fn front_after_swap_shows_final_backdrop() {
        let s = scene(340.0, 0.0, 0.0);
        assert_eq!(s.face, Face::Front);
        assert_eq!(s.playing, None);
        assert_eq!(s.backdrop, Backdrop::Image("assets/nuevosiglo_bg.png"));
        assert_eq!(s.logo, "assets/cube_final.jpg");
    }

    #[test]
    fn swap_is_keyed_on_scroll_not_total_yaw() {
        // pointer drags the total back under 180 but scroll is past it
        let s = scene(200.0, -20.0, 0.0);
        assert_eq!(s.face, Face::Back);
        assert_eq!(s.logo, "assets/cube_final.jpg");

        // total yaw near 360 from the pointer alone keeps the video
        let s = scene(0.0, -20.0, 0.0);
        assert_eq!(s.face, Face::Front);
        assert_eq!(s.playing, Some(FaceVideo::Hero));
    }

    #[test]
    fn scroll_at_two_hundred_faces_back() {
        let s = scene(200.0, 0.0, 0.0);
        assert_eq!(s.face, Face::Back);
        assert_eq!(s.playing, Some(FaceVideo::Meta));
        assert_eq!(s.backdrop, Backdrop::Clear);
    }

    #[test]
    fn left_face_plays_sideral() {
        let s = scene(90.0, 0.0, 0.0);
        assert_eq!(s.face, Face::Left);
        assert_eq!(s.playing, Some(FaceVideo::Sideral));
    }

    #[test]
    fn pitch_past_limit_shows_top() {
        // total x = -pointer_x = -25
        for yaw in [0.0, 90.0, 200.0, 300.0] {
            let s = scene(yaw, 0.0, 25.0);
            assert_eq!(s.face, Face::Top);
            assert_eq!(s.playing, None);
            assert_eq!(s.backdrop, Backdrop::Image("assets/hero_bg_nuevosiglo.png"));
        }
    }

    #[test]
    fn first_frame_applies_everything() {
        let s = scene(0.0, 0.0, 0.0);
        let delta = s.changes(None);
        assert_eq!(delta.transform.as_deref(), Some("rotateX(-0deg) rotateY(0deg)"));
        assert_eq!(delta.backdrop, Some(Backdrop::Clear));
        assert_eq!(delta.logo, Some("assets/logo_final.jpg"));
        assert_eq!(delta.stop, vec![FaceVideo::Sideral, FaceVideo::Meta, FaceVideo::Luih]);
        assert_eq!(delta.play, Some(FaceVideo::Hero));
    }

    #[test]
    fn same_scene_only_retries_play() {
        let s = scene(10.0, 3.0, 1.0);
        let delta = s.changes(Some(&s));
        assert_eq!(delta, SceneDelta { play: Some(FaceVideo::Hero), ..SceneDelta::default() });
    }

    #[test]
    fn face_change_stops_previous_video() {
        let front = scene(10.0, 0.0, 0.0);
        let left = scene(100.0, 0.0, 0.0);
        let delta = left.changes(Some(&front));
        assert_eq!(delta.stop, vec![FaceVideo::Hero]);
        assert_eq!(delta.play, Some(FaceVideo::Sideral));
        assert_eq!(delta.backdrop, None);
        assert!(delta.transform.is_some());
    }

    #[test]
    fn entering_top_stops_active_video() {
        let back = scene(180.0, 0.0, 0.0);
        let top = scene(180.0, 0.0, 30.0);
        let delta = top.changes(Some(&back));
        assert_eq!(delta.stop, vec![FaceVideo::Meta]);
        assert_eq!(delta.play, None);
        assert_eq!(delta.backdrop, Some(Backdrop::Image("assets/hero_bg_nuevosiglo.png")));
    }

    #[test]
    fn backdrop_css() {
        assert_eq!(Backdrop::Clear.image_css(), "none");
        assert_eq!(Backdrop::Clear.color_css(), "transparent");
        assert_eq!(Backdrop::Image("a.png").image_css(), "url('a.png')");
        assert_eq!(Backdrop::Image("a.png").color_css(), "");
    }

    #[test]
    fn missing_videos_keep_front_clear() {
        let s = scene(340.0, 0.0, 0.0).without_videos();
        assert_eq!(s.face, Face::Front);
        assert_eq!(s.backdrop, Backdrop::Clear);
        assert_eq!(s.playing, None);
        // logo swap does not depend on the videos
        assert_eq!(s.logo, "assets/cube_final.jpg");
    }

    #[test]
    fn missing_videos_still_show_top() {
        let s = scene(90.0, 0.0, 30.0).without_videos();
        assert_eq!(s.backdrop, Backdrop::Image("assets/hero_bg_nuevosiglo.png"));

        let s = scene(90.0, 0.0, 0.0).without_videos();
        assert_eq!(s.face, Face::Left);
        assert_eq!(s.playing, None);
    }

    #[test]
    fn fab_shows_only_past_hero() {
        assert!(!fab_visible(0.0, 4000.0));
        assert!(!fab_visible(4000.0, 4000.0));
        assert!(fab_visible(4000.5, 4000.0));
    }
}
