//! Page wiring: which elements the drivers look for, which assets they swap
//! in, and the numbers that shape the choreography.

/// Selectors and ids the drivers query. Must match `page.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selectors {
    pub reveal: &'static str,
    pub split_titles: &'static str,
    pub split_descriptions: &'static str,
    pub services_section_id: &'static str,
    pub track: &'static str,
    pub service_item: &'static str,
    pub hero_section: &'static str,
    pub cube_id: &'static str,
    pub sticky_container: &'static str,
    pub front_logo: &'static str,
    pub fab_id: &'static str,
    pub hero_video_id: &'static str,
    pub sideral_video_id: &'static str,
    pub meta_video_id: &'static str,
    pub luih_video_id: &'static str,
}

/// Marker classes toggled for the stylesheet
#[derive(Debug, Clone, PartialEq)]
pub struct Classes {
    pub reveal_pending: &'static str,
    pub revealed: &'static str,
    pub split_container: &'static str,
    pub split_word: &'static str,
    pub item_active: &'static str,
    pub video_active: &'static str,
    pub fab_visible: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assets {
    pub top_backdrop: &'static str,
    pub front_final_backdrop: &'static str,
    pub logo: &'static str,
    pub logo_final: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Fraction of an element's area that must be visible to reveal it
    pub reveal_threshold: f64,
    /// Viewport width (px) below which the layout is "mobile"
    pub mobile_breakpoint: f64,
    /// Service item activates once its left edge is inside this share of the width
    pub desktop_activation: f64,
    /// Mobile: once its top edge is inside this share of the height
    pub mobile_activation: f64,
    pub pointer_yaw: f64,
    pub pointer_pitch: f64,
    pub gamma_limit: f64,
    /// Phone tilt (beta) treated as level
    pub beta_neutral: f64,
    pub beta_limit: f64,
    /// Total X rotation at or below which the top face shows
    pub top_pitch: f64,
    /// Scroll rotation past which the front face shows its final artwork
    pub swap_angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub assets: Assets,
    pub tuning: Tuning,
}

impl SiteConfig {
    pub const PAGE: Self = Self {
        selectors: Selectors {
            reveal: ".project-item, .price-card, .hero-section h1",
            split_titles: ".service-title",
            split_descriptions: ".service-desc p",
            services_section_id: "servicios",
            track: ".horizontal-track",
            service_item: ".service-item",
            hero_section: ".hero-section",
            cube_id: "heroCube",
            sticky_container: ".sticky-container",
            front_logo: ".cube-face.front .cube-logo",
            fab_id: "floatWhatsapp",
            hero_video_id: "hero-video",
            sideral_video_id: "sideral-video",
            meta_video_id: "meta-video",
            luih_video_id: "luih-video",
        },
        classes: Classes {
            reveal_pending: "reveal-pending",
            revealed: "in-view",
            split_container: "split-text-container",
            split_word: "split-word",
            item_active: "active",
            video_active: "video-active",
            fab_visible: "visible",
        },
        assets: Assets {
            top_backdrop: "assets/hero_bg_nuevosiglo.png",
            front_final_backdrop: "assets/nuevosiglo_bg.png",
            logo: "assets/logo_final.jpg",
            logo_final: "assets/cube_final.jpg",
        },
        tuning: Tuning {
            reveal_threshold: 0.1,
            mobile_breakpoint: 768.0,
            desktop_activation: 0.75,
            mobile_activation: 0.85,
            pointer_yaw: 20.0,
            pointer_pitch: 5.0,
            gamma_limit: 20.0,
            beta_neutral: 45.0,
            beta_limit: 5.0,
            top_pitch: -20.0,
            swap_angle: 180.0,
        },
    };
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::PAGE
    }
}

impl Default for Tuning {
    fn default() -> Self {
        SiteConfig::PAGE.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_limits_match_pointer_range() {
        let t = Tuning::default();
        assert_eq!(t.gamma_limit, t.pointer_yaw);
        assert_eq!(t.beta_limit, t.pointer_pitch);
    }

    #[test]
    fn activation_fractions_are_shares() {
        let t = Tuning::default();
        for f in [t.reveal_threshold, t.desktop_activation, t.mobile_activation] {
            assert!(f > 0.0 && f <= 1.0);
        }
    }
}
