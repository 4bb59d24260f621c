use alloc::vec::Vec;

use crate::smoothing::SmoothedPoint;
use crate::{ElementId, ElementRect, Point, ScrollMetrics};

/// Smoothing factor for the primary cursor dot.
pub const CURSOR_SMOOTHING: f32 = 0.2;
/// Smoothing factor for the trailing follower ring.
pub const FOLLOWER_SMOOTHING: f32 = 0.1;
/// Fraction of the scroll offset applied as hero translation.
pub const PARALLAX_SPEED: f32 = 0.5;
/// Scroll distance over which the hero fades to transparent.
pub const FADE_DISTANCE: f32 = 800.0;
/// Damping applied to the pointer offset for magnetic buttons.
pub const MAGNETIC_STRENGTH: f32 = 0.2;
/// Fixed upward lift for magnetic buttons, in pixels.
pub const MAGNETIC_LIFT: f32 = 3.0;

/// One follower's position for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowerFrame {
    pub element: ElementId,
    pub position: Point,
}

#[derive(Clone, Debug)]
struct Follower {
    element: ElementId,
    point: SmoothedPoint,
}

/// The per-frame animation loop's state: every registered follower chases the latest
/// raw pointer position at its own smoothing factor.
///
/// This type never blocks and has no terminal state; the host calls
/// [`tick`](Self::tick) from its frame loop for as long as the page lives. With no
/// followers registered (the elements were absent), `tick` is a no-op rather than an
/// error.
///
/// Scroll-linked transforms (parallax, fade, progress, magnetic offsets) are *not*
/// smoothed across ticks; they are the pure functions below, recomputed from raw input.
#[derive(Clone, Debug, Default)]
pub struct ContinuousAnimator {
    followers: Vec<Follower>,
    pointer: Option<Point>,
}

impl ContinuousAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pointer follower. Duplicate registrations are ignored.
    pub fn add_follower(&mut self, element: ElementId, smoothing: f32) {
        if self.followers.iter().any(|f| f.element == element) {
            fxwarn!(element, "ContinuousAnimator: duplicate follower");
            return;
        }
        let mut point = SmoothedPoint::new(smoothing);
        if let Some(p) = self.pointer {
            point.set_target(p);
        }
        self.followers.push(Follower { element, point });
    }

    pub fn remove_follower(&mut self, element: ElementId) {
        self.followers.retain(|f| f.element != element);
    }

    pub fn follower_len(&self) -> usize {
        self.followers.len()
    }

    /// The latest raw pointer position, if any move event has been seen.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Records a raw pointer move. O(followers); only targets change, so the smoothing
    /// lag is preserved.
    pub fn set_pointer(&mut self, position: Point) {
        self.pointer = Some(position);
        for f in &mut self.followers {
            f.point.set_target(position);
        }
    }

    /// The smoothed position of one follower.
    pub fn current_of(&self, element: ElementId) -> Option<Point> {
        self.followers
            .iter()
            .find(|f| f.element == element)
            .map(|f| f.point.current())
    }

    /// Advances every follower one frame and emits its new position.
    pub fn tick(&mut self, mut emit: impl FnMut(FollowerFrame)) {
        for f in &mut self.followers {
            let position = f.point.step();
            emit(FollowerFrame {
                element: f.element,
                position,
            });
        }
    }
}

/// Vertical hero translation for a scroll offset.
pub fn parallax_shift(scroll_offset: f32, speed: f32) -> f32 {
    scroll_offset * speed
}

/// Hero opacity for a scroll offset: 1 at the top, 0 once `fade_distance` is scrolled.
pub fn fade_opacity(scroll_offset: f32, fade_distance: f32) -> f32 {
    if fade_distance <= f32::EPSILON {
        return 1.0;
    }
    (1.0 - scroll_offset / fade_distance).clamp(0.0, 1.0)
}

/// Scrolled fraction of the document in `[0, 1]`.
///
/// A degenerate scrollable range (content no taller than the viewport) yields 0 rather
/// than NaN or infinity.
pub fn scroll_fraction(metrics: ScrollMetrics) -> f32 {
    let range = metrics.scrollable_range();
    if range <= f32::EPSILON {
        return 0.0;
    }
    (metrics.offset / range).clamp(0.0, 1.0)
}

/// [`scroll_fraction`] as a percentage in `[0, 100]`.
pub fn scroll_percent(metrics: ScrollMetrics) -> f32 {
    scroll_fraction(metrics) * 100.0
}

/// Damped translation for a magnetic button under the pointer.
///
/// The offset is the pointer's distance from the element's center scaled by `strength`,
/// with a fixed `lift` subtracted from the vertical component. On pointer leave the
/// host resets the transform to identity; there is no state to clear here.
pub fn magnetic_offset(pointer: Point, rect: ElementRect, strength: f32, lift: f32) -> Point {
    let center = rect.center();
    Point {
        x: (pointer.x - center.x) * strength,
        y: (pointer.y - center.y) * strength - lift,
    }
}
