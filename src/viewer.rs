//! Pan and zoom model for the full-screen panorama viewer.
//!
//! The viewer is either closed or open. While open, pointer drags move the
//! image by the raw pointer movement and wheel or button input changes the
//! zoom in fixed steps. Closing always discards the pan, zoom and VR mode so
//! the next session starts from the canonical view.

/// Smallest zoom factor the viewer allows.
pub const ZOOM_MIN: f32 = 0.5;

/// Largest zoom factor the viewer allows.
pub const ZOOM_MAX: f32 = 2.0;

/// Zoom factor of a freshly opened viewer.
pub const ZOOM_DEFAULT: f32 = 1.0;

/// Zoom change applied per wheel event or button press.
pub const ZOOM_STEP: f32 = 0.1;

/// Translation applied to the panorama, in screen points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pan {
    pub x: f32,
    pub y: f32,
}

impl Pan {
    pub const ZERO: Pan = Pan { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Direction of a zoom button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    fn sign(self) -> f32 {
        match self {
            ZoomDirection::In => 1.0,
            ZoomDirection::Out => -1.0,
        }
    }
}

/// Transform the overlay applies to the panorama: translate, then scale
/// around the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub translate: Pan,
    pub scale: f32,
}

/// Open/closed lifecycle plus the transient pan, zoom and VR mode of a
/// panorama session.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    is_open: bool,
    pan: Pan,
    zoom: f32,
    vr_mode: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            is_open: false,
            pan: Pan::ZERO,
            zoom: ZOOM_DEFAULT,
            vr_mode: false,
        }
    }
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn pan(&self) -> Pan {
        self.pan
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Whether the cosmetic VR mode highlight is on.
    pub fn is_vr_mode(&self) -> bool {
        self.vr_mode
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            translate: self.pan,
            scale: self.zoom,
        }
    }

    /// Shows the viewer. Opening an already open viewer keeps its state.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hides the viewer and resets pan, zoom and VR mode.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Feeds one pointer movement. Only moves the panorama while the primary
    /// button is held.
    pub fn pointer_moved(&mut self, primary_held: bool, movement_x: f32, movement_y: f32) {
        if primary_held {
            self.drag(movement_x, movement_y);
        }
    }

    /// Adds the movement to the pan offset. The offset is not bounded, so the
    /// panorama can be dragged entirely off screen.
    pub fn drag(&mut self, movement_x: f32, movement_y: f32) {
        if !self.is_open {
            return;
        }
        self.pan.x += movement_x;
        self.pan.y += movement_y;
    }

    /// Applies one wheel event. A negative `delta_y` (wheel away from the
    /// user) zooms in, a positive one zooms out and zero is ignored.
    pub fn wheel_zoom(&mut self, delta_y: f32) {
        let sign = if delta_y < 0.0 {
            1.0
        } else if delta_y > 0.0 {
            -1.0
        } else {
            return;
        };
        self.step_zoom(sign);
    }

    /// Applies one press of the on-screen zoom buttons.
    pub fn zoom_button(&mut self, direction: ZoomDirection) {
        self.step_zoom(direction.sign());
    }

    /// Flips the VR mode highlight. Has no effect on pan or zoom.
    pub fn toggle_vr_mode(&mut self) {
        if self.is_open {
            self.vr_mode = !self.vr_mode;
        }
    }

    fn step_zoom(&mut self, sign: f32) {
        if !self.is_open {
            return;
        }
        self.zoom = (self.zoom + ZOOM_STEP * sign).clamp(ZOOM_MIN, ZOOM_MAX);
    }
}
