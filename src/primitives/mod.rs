//! Geometry primitives shared by the scroll and cube drivers
//!
//! Everything here is plain arithmetic over numbers read from the DOM, so it
//! is tested without a browser.

#[macro_use]
pub mod bounded;
pub mod angle;
pub mod progress;
pub mod viewport;

pub use angle::Degrees;
pub use progress::Progress;
pub use viewport::{Rect, Viewport};
