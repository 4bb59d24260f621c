use crate::Point;

/// A scalar that chases a moving target geometrically each step.
///
/// Every [`step`](Self::step) moves `current` by `(target - current) * smoothing`. For
/// smoothing in `(0, 1]` this converges without overshooting; the lag between `current`
/// and `target` is what produces the trailing-cursor effect.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothedAxis {
    pub target: f32,
    pub current: f32,
    smoothing: f32,
}

impl SmoothedAxis {
    /// Creates an axis at rest at 0. `smoothing` is clamped into `(0, 1]`.
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            smoothing: clamp_smoothing(smoothing),
        }
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Overwrites the target without touching `current`.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Moves both `target` and `current` (no easing toward the new position).
    pub fn jump_to(&mut self, value: f32) {
        self.target = value;
        self.current = value;
    }

    /// Advances one frame and returns the new `current`.
    pub fn step(&mut self) -> f32 {
        self.current += (self.target - self.current) * self.smoothing;
        self.current
    }

    /// Whether `current` is within `epsilon` of `target`.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.current).abs() <= epsilon
    }
}

/// Two [`SmoothedAxis`] values sharing one smoothing factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothedPoint {
    pub x: SmoothedAxis,
    pub y: SmoothedAxis,
}

impl SmoothedPoint {
    pub fn new(smoothing: f32) -> Self {
        Self {
            x: SmoothedAxis::new(smoothing),
            y: SmoothedAxis::new(smoothing),
        }
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn jump_to(&mut self, value: Point) {
        self.x.jump_to(value.x);
        self.y.jump_to(value.y);
    }

    pub fn step(&mut self) -> Point {
        Point {
            x: self.x.step(),
            y: self.y.step(),
        }
    }

    pub fn current(&self) -> Point {
        Point {
            x: self.x.current,
            y: self.y.current,
        }
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.x.is_settled(epsilon) && self.y.is_settled(epsilon)
    }

    /// Snapshot of the raw target vs. the lagging current position.
    pub fn state(&self) -> crate::PointerState {
        crate::PointerState {
            target: Point {
                x: self.x.target,
                y: self.y.target,
            },
            current: self.current(),
        }
    }
}

fn clamp_smoothing(smoothing: f32) -> f32 {
    if smoothing.is_nan() {
        fxwarn!("SmoothedAxis: NaN smoothing, falling back to 1.0");
        debug_assert!(!smoothing.is_nan(), "SmoothedAxis: NaN smoothing");
        return 1.0;
    }
    smoothing.clamp(f32::EPSILON, 1.0)
}
