//! Viewport and element geometry in CSS pixels

/// Size of the browser's layout viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Below the breakpoint the services strip stacks vertically.
    pub fn is_mobile(&self, breakpoint: f64) -> bool {
        self.width < breakpoint
    }

    /// Pointer offset from the viewport center, -1.0 at the left/top edge
    /// and 1.0 at the right/bottom edge. Not clamped.
    pub fn center_offset(&self, x: f64, y: f64) -> (f64, f64) {
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let fx = if cx > 0.0 { (x - cx) / cx } else { 0.0 };
        let fy = if cy > 0.0 { (y - cy) / cy } else { 0.0 };
        (fx, fy)
    }
}

/// Bounding rectangle relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    }

    /// Left edge has entered the first `fraction` of the viewport width and
    /// the right edge is not yet past the left border.
    pub fn entered_horizontally(&self, viewport: Viewport, fraction: f64) -> bool {
        self.left < viewport.width * fraction && self.right > 0.0
    }

    /// Vertical counterpart of `entered_horizontally`.
    pub fn entered_vertically(&self, viewport: Viewport, fraction: f64) -> bool {
        self.top < viewport.height * fraction && self.bottom > 0.0
    }
}
