//! Decorated cursor: hover role tracking and the spring that makes the cursor
//! glyph trail the pointer.

/// What kind of element the pointer is over. Selects the cursor glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverRole {
    #[default]
    Default,
    Text,
    Button,
}

/// Collects hover reports from every interactive element during a frame and
/// resolves them to a single role.
///
/// Call [`HoverTracker::begin_frame`] before laying out widgets, report each
/// widget through [`HoverTracker::observe`], then [`HoverTracker::end_frame`].
/// The last hovered element wins; nothing hovered resolves to
/// [`HoverRole::Default`].
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    pending: Option<HoverRole>,
}

impl HoverTracker {
    pub fn begin_frame(&mut self) {
        self.pending = None;
    }

    pub fn observe(&mut self, hovered: bool, role: HoverRole) {
        if hovered {
            self.pending = Some(role);
        }
    }

    pub fn end_frame(&mut self) -> HoverRole {
        self.pending.take().unwrap_or_default()
    }
}

/// Damped spring parameters (unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 500.0,
            damping: 28.0,
        }
    }
}

/// Longest frame time simulated in one [`CursorFollower::step`] call.
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

const SUBSTEP_DT: f32 = 1.0 / 240.0;

/// Distance and speed below which the follower counts as settled.
const REST_EPSILON: f32 = 0.05;

/// Point that chases the pointer position with spring physics.
#[derive(Debug, Clone)]
pub struct CursorFollower {
    position: [f32; 2],
    velocity: [f32; 2],
    target: Option<[f32; 2]>,
    spring: Spring,
}

impl CursorFollower {
    pub fn new(spring: Spring) -> Self {
        Self {
            position: [0.0; 2],
            velocity: [0.0; 2],
            target: None,
            spring,
        }
    }

    pub fn position(&self) -> [f32; 2] {
        self.position
    }

    pub fn velocity(&self) -> [f32; 2] {
        self.velocity
    }

    /// Advances the spring toward `target` by `dt` seconds.
    ///
    /// The first target jumps the follower there directly so it does not fly
    /// in from the window origin.
    pub fn step(&mut self, target: [f32; 2], dt: f32) {
        if self.target.is_none() {
            self.position = target;
            self.velocity = [0.0; 2];
        }
        self.target = Some(target);

        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_DT);
            for axis in 0..2 {
                let displacement = target[axis] - self.position[axis];
                let accel = self.spring.stiffness * displacement
                    - self.spring.damping * self.velocity[axis];
                self.velocity[axis] += accel * h;
                self.position[axis] += self.velocity[axis] * h;
            }
            remaining -= h;
        }
    }

    /// Whether the follower has caught up with its target.
    pub fn is_settled(&self) -> bool {
        let Some(target) = self.target else {
            return true;
        };
        (0..2).all(|axis| {
            (target[axis] - self.position[axis]).abs() < REST_EPSILON
                && self.velocity[axis].abs() < REST_EPSILON
        })
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(Spring::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_defaults_when_nothing_hovered() {
        let mut tracker = HoverTracker::default();
        tracker.begin_frame();
        tracker.observe(false, HoverRole::Button);
        assert_eq!(tracker.end_frame(), HoverRole::Default);
    }

    #[test]
    fn tracker_last_hovered_element_wins() {
        let mut tracker = HoverTracker::default();
        tracker.begin_frame();
        tracker.observe(true, HoverRole::Text);
        tracker.observe(false, HoverRole::Default);
        tracker.observe(true, HoverRole::Button);
        assert_eq!(tracker.end_frame(), HoverRole::Button);
    }

    #[test]
    fn tracker_forgets_previous_frame() {
        let mut tracker = HoverTracker::default();
        tracker.begin_frame();
        tracker.observe(true, HoverRole::Text);
        tracker.end_frame();

        tracker.begin_frame();
        assert_eq!(tracker.end_frame(), HoverRole::Default);
    }

    #[test]
    fn follower_snaps_to_first_target() {
        let mut follower = CursorFollower::default();
        follower.step([120.0, 80.0], 1.0 / 60.0);
        assert_eq!(follower.position(), [120.0, 80.0]);
        assert!(follower.is_settled());
    }

    #[test]
    fn follower_converges_on_moved_target() {
        let mut follower = CursorFollower::default();
        follower.step([0.0, 0.0], 1.0 / 60.0);

        follower.step([300.0, -200.0], 1.0 / 60.0);
        assert!(!follower.is_settled());

        for _ in 0..180 {
            follower.step([300.0, -200.0], 1.0 / 60.0);
        }
        let [x, y] = follower.position();
        assert!((x - 300.0).abs() < 0.05, "x = {x}");
        assert!((y + 200.0).abs() < 0.05, "y = {y}");
        assert!(follower.is_settled());
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut follower = CursorFollower::default();
        follower.step([0.0, 0.0], 0.0);
        follower.step([100.0, 0.0], 10.0);
        let [x, _] = follower.position();
        assert!(x.is_finite());
        assert!(x < 100.0);
    }
}
