//! Wires scroll, pointer and tilt events to the cube and its backdrop.
//!
//! Input handlers only record into `RotationState` and ask for a frame.
//! The frame callback derives one `Scene` from the latest state and applies
//! the delta against the last scene it rendered, so a burst of events costs
//! one render.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DeviceOrientationEvent, Document, Element, HtmlElement, HtmlImageElement, HtmlVideoElement,
    MouseEvent, Window,
};

use super::face::FaceVideo;
use super::rotation::RotationState;
use super::scene::{Scene, SceneDelta, fab_visible};
use crate::config::SiteConfig;
use crate::dom;
use crate::error::{Result, describe_js};

struct Videos {
    hero: HtmlVideoElement,
    sideral: HtmlVideoElement,
    meta: HtmlVideoElement,
    luih: HtmlVideoElement,
}

impl Videos {
    fn find(document: &Document, config: &SiteConfig) -> Result<Self> {
        let s = &config.selectors;
        Ok(Self {
            hero: dom::by_id(document, s.hero_video_id)?,
            sideral: dom::by_id(document, s.sideral_video_id)?,
            meta: dom::by_id(document, s.meta_video_id)?,
            luih: dom::by_id(document, s.luih_video_id)?,
        })
    }

    fn get(&self, video: FaceVideo) -> &HtmlVideoElement {
        match video {
            FaceVideo::Hero => &self.hero,
            FaceVideo::Sideral => &self.sideral,
            FaceVideo::Meta => &self.meta,
            FaceVideo::Luih => &self.luih,
        }
    }
}

struct Cube {
    window: Window,
    cube: HtmlElement,
    hero: HtmlElement,
    sticky: Option<HtmlElement>,
    logo: Option<HtmlImageElement>,
    videos: Option<Videos>,
    fab: Option<Element>,
    config: SiteConfig,

    state: Cell<RotationState>,
    rendered: RefCell<Option<Scene>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl Cube {
    fn update(&self, f: impl FnOnce(&mut RotationState) -> bool) -> bool {
        let mut state = self.state.get();
        let changed = f(&mut state);
        self.state.set(state);
        changed
    }

    /// At most one frame is pending; later requests ride on it.
    fn schedule(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let cube = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            cube.frame.borrow_mut().take();
            cube.render();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render(&self) {
        let mut scene = Scene::derive(&self.state.get(), &self.config);
        if self.videos.is_none() {
            scene = scene.without_videos();
        }
        let delta = scene.changes(self.rendered.borrow().as_ref());
        if self.rendered.borrow().as_ref().is_none_or(|prev| prev.face != scene.face) {
            debug!(face = scene.face.name(), "cube face changed");
        }
        self.apply(delta);
        *self.rendered.borrow_mut() = Some(scene);
    }

    fn apply(&self, delta: SceneDelta) {
        if let Some(transform) = delta.transform {
            dom::set_style(&self.cube, "transform", &transform);
        }
        if let (Some(backdrop), Some(sticky)) = (delta.backdrop, &self.sticky) {
            dom::set_style(sticky, "background-image", &backdrop.image_css());
            dom::set_style(sticky, "background-color", backdrop.color_css());
        }
        if let (Some(src), Some(logo)) = (delta.logo, &self.logo) {
            logo.set_src(src);
        }

        let Some(videos) = &self.videos else {
            return;
        };
        let active = self.config.classes.video_active;
        for video in delta.stop {
            let el = videos.get(video);
            dom::remove_class(el, active);
            let _ = el.pause();
        }
        if let Some(video) = delta.play {
            let el = videos.get(video);
            dom::add_class(el, active);
            if el.paused() {
                play_muted(el);
            }
        }
    }

    fn on_scroll(self: &Rc<Self>) {
        let scroll_y = dom::scroll_y(&self.window);
        let hero_height = self.hero.offset_height() as f64;
        let viewport = dom::viewport(&self.window);

        if self.update(|s| s.apply_scroll(scroll_y, hero_height, viewport)) {
            self.schedule();
        }
        if let Some(fab) = &self.fab {
            dom::toggle_class(fab, self.config.classes.fab_visible, fab_visible(scroll_y, hero_height));
        }
    }

    fn on_pointer(self: &Rc<Self>, event: &MouseEvent) {
        let viewport = dom::viewport(&self.window);
        let (x, y) = (event.client_x() as f64, event.client_y() as f64);
        self.update(|s| {
            s.apply_pointer(x, y, viewport, &self.config.tuning);
            true
        });
        self.schedule();
    }

    fn on_orientation(self: &Rc<Self>, event: &DeviceOrientationEvent) {
        if self.update(|s| s.apply_orientation(event.gamma(), event.beta(), &self.config.tuning)) {
            self.schedule();
        }
    }
}

/// Autoplay needs the video muted. A rejected play is logged and left paused;
/// the next frame that wants this video tries again.
fn play_muted(video: &HtmlVideoElement) {
    video.set_muted(true);
    let id = video.id();
    match video.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                warn!(video = %id, error = %describe_js(&err), "autoplay prevented");
            }
        }),
        Err(err) => warn!(video = %id, error = %describe_js(&err), "autoplay prevented"),
    }
}

/// Keeps the listeners (and through them the cube state) alive.
pub struct CubeController {
    _listeners: Vec<EventListener>,
}

impl CubeController {
    pub fn install(window: &Window, document: &Document, config: &SiteConfig) -> Result<Self> {
        let s = &config.selectors;
        let cube_el = dom::by_id::<HtmlElement>(document, s.cube_id)?;
        let hero = dom::query::<HtmlElement>(document, s.hero_section)?;

        let videos = Videos::find(document, config)
            .inspect_err(|err| debug!(%err, "face videos incomplete, backdrop only"))
            .ok();

        let cube = Rc::new(Cube {
            window: window.clone(),
            cube: cube_el,
            hero,
            sticky: dom::query(document, s.sticky_container).ok(),
            logo: dom::query(document, s.front_logo).ok(),
            videos,
            fab: dom::by_id(document, s.fab_id).ok(),
            config: config.clone(),
            state: Cell::new(RotationState::default()),
            rendered: RefCell::new(None),
            frame: RefCell::new(None),
        });

        let mut listeners = Vec::new();

        let c = Rc::clone(&cube);
        listeners.push(EventListener::new(window, "scroll", move |_| c.on_scroll()));

        let c = Rc::clone(&cube);
        listeners.push(EventListener::new(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                c.on_pointer(event);
            }
        }));

        if supports_orientation(window) {
            let c = Rc::clone(&cube);
            listeners.push(EventListener::new(window, "deviceorientation", move |event| {
                if let Some(event) = event.dyn_ref::<DeviceOrientationEvent>() {
                    c.on_orientation(event);
                }
            }));
        }

        cube.render();
        Ok(Self { _listeners: listeners })
    }
}

fn supports_orientation(window: &Window) -> bool {
    js_sys::Reflect::has(window, &"DeviceOrientationEvent".into()).unwrap_or(false)
}
