//! Entrance animation descriptor and its one-shot state machine.
//!
//! Everything here is plain data driven by an injected clock (seconds), so
//! whatever runs the animation only has to call `enter` once and then `tick`
//! until the phase settles.

use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-6;

/// The animated properties of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub opacity: f64,
    /// Vertical offset in pixels, positive is down.
    pub y: f64,
}

impl VisualState {
    pub const fn new(opacity: f64, y: f64) -> Self {
        Self { opacity, y }
    }

    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    /// Inline CSS for this state.
    pub fn to_style(self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity, self.y
        )
    }
}

/// Timing curves, named the way motion libraries name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// CSS cubic-bezier control points `(x1, y1, x2, y2)`.
    pub const fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Maps linear progress in `[0, 1]` onto the curve.
    pub fn apply(self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        if self == Easing::Linear {
            return progress;
        }
        let (x1, y1, x2, y2) = self.control_points();
        let t = solve_curve_x(x1, x2, progress);
        bezier(y1, y2, t)
    }
}

fn bezier(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

// Newton first, bisection when the slope flattens out.
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    let mut t = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, t) - x;
        if err.abs() < EPSILON {
            return t;
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < EPSILON {
            break;
        }
        t -= err / slope;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..64 {
        let value = bezier(x1, x2, t);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}

/// When and how fast the entrance plays, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub delay: f64,
    pub duration: f64,
    #[serde(default)]
    pub easing: Easing,
}

impl Transition {
    pub fn total(&self) -> f64 {
        self.delay + self.duration
    }
}

/// Initial state, resting state and the timing between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    pub initial: VisualState,
    pub target: VisualState,
    pub transition: Transition,
}

impl Entrance {
    /// Fade in while sliding up 40px, shared by every hero variant.
    pub const fn hero() -> Self {
        Self {
            initial: VisualState::new(0.0, 40.0),
            target: VisualState::new(1.0, 0.0),
            transition: Transition {
                delay: 0.3,
                duration: 0.8,
                easing: Easing::EaseInOut,
            },
        }
    }

    /// State `elapsed` seconds after the entrance was triggered.
    pub fn sample(&self, elapsed: f64) -> VisualState {
        let transition = &self.transition;
        if elapsed <= transition.delay {
            return self.initial;
        }
        if elapsed + EPSILON >= transition.total() || transition.duration <= 0.0 {
            return self.target;
        }
        let progress = (elapsed - transition.delay) / transition.duration;
        self.initial
            .lerp(self.target, transition.easing.apply(progress))
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::hero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Not yet scrolled into view.
    PreVisible,
    Entering { started_at: f64 },
    /// Terminal.
    Visible,
}

/// One entrance playing out. Never returns to `PreVisible`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceState {
    entrance: Entrance,
    phase: Phase,
    current: VisualState,
}

impl EntranceState {
    pub fn new(entrance: Entrance) -> Self {
        Self {
            entrance,
            phase: Phase::PreVisible,
            current: entrance.initial,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visual(&self) -> VisualState {
        self.current
    }

    /// Starts the entrance. Returns false if it already started.
    pub fn enter(&mut self, now: f64) -> bool {
        if self.phase != Phase::PreVisible {
            return false;
        }
        self.phase = Phase::Entering { started_at: now };
        true
    }

    /// Swaps the descriptor while nothing has played yet. Returns false once
    /// the entrance has started.
    pub fn retarget(&mut self, entrance: Entrance) -> bool {
        if self.phase != Phase::PreVisible {
            return false;
        }
        self.entrance = entrance;
        self.current = entrance.initial;
        true
    }

    /// Jumps straight to the resting state, used when there is no clock to
    /// animate with.
    pub fn settle(&mut self) {
        self.phase = Phase::Visible;
        self.current = self.entrance.target;
    }

    pub fn tick(&mut self, now: f64) -> VisualState {
        if let Phase::Entering { started_at } = self.phase {
            let elapsed = now - started_at;
            if elapsed + EPSILON >= self.entrance.transition.total() {
                self.settle();
            } else {
                self.current = self.entrance.sample(elapsed);
            }
        }
        self.current
    }
}
