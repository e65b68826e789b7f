//! Rotating hero cube and the backdrop/video layer behind it
//!
//! `rotation` and `face` are pure: inputs in, angles and a face out.
//! `scene` turns that into the page state to show, `controller` owns the
//! DOM handles and applies it once per animation frame.

mod controller;
pub mod face;
pub mod rotation;
pub mod scene;

pub use controller::CubeController;
