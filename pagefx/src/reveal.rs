use alloc::string::String;
use alloc::vec::Vec;

use crate::counter::CounterTween;
use crate::ElementId;

/// Per-index delay step for staggered card groups, in milliseconds.
pub const STAGGER_STEP_MS: u64 = 100;

/// Per-index intro delay. Hero load-in and card stagger share this arithmetic.
pub fn stagger_delay(index: usize) -> u64 {
    index as u64 * STAGGER_STEP_MS
}

/// Margin applied to the viewport when testing intersection, in pixels.
///
/// A negative bottom margin shrinks the viewport from below, so elements trigger
/// *before* they are fully in view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootMargin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl RootMargin {
    pub fn bottom(px: f32) -> Self {
        Self {
            bottom: px,
            ..Self::default()
        }
    }
}

/// Visibility-subscription parameters for one element group.
///
/// The engine does not test intersections itself; these are handed to the host so it can
/// parameterize its visibility signal per group (see [`RevealController::for_each_pending`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserveOptions {
    pub threshold: f32,
    pub root_margin: RootMargin,
}

impl ObserveOptions {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            root_margin: RootMargin::default(),
        }
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    /// Generic reveal: threshold 0.1, pre-trigger 100px before full view.
    pub fn reveal() -> Self {
        Self::new(0.1).with_root_margin(RootMargin::bottom(-100.0))
    }

    /// Stat counters: wait until half the element is visible.
    pub fn counter() -> Self {
        Self::new(0.5)
    }

    /// Staggered cards.
    pub fn stagger() -> Self {
        Self::new(0.2)
    }

    /// Lazy image fade-in: any visibility at all.
    pub fn fade_in() -> Self {
        Self::new(0.0)
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self::reveal()
    }
}

/// The one-shot effect a group applies on first visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealKind {
    /// Toggle the reveal class.
    Visible,
    /// Count up to the displayed number, then pin the original text.
    Counter,
    /// Slide in after a per-index transition delay.
    Stagger,
    /// Fade a lazily loaded image in.
    FadeIn,
}

/// Effects the host applies in response to reveal-system activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    /// Add the reveal class (e.g. `visible`).
    MarkVisible { element: ElementId },
    /// Pre-set the hidden/offset state with a transition delay. Emitted at observe
    /// time, before any visibility notification.
    PrepareStagger { element: ElementId, delay_ms: u64 },
    /// Transition a staggered element to its resting state.
    StaggerIn { element: ElementId },
    /// Fade the element in.
    FadeIn { element: ElementId },
    /// Replace the element's text (counter frames and final pin).
    SetText { element: ElementId, text: String },
    /// The element needs no further visibility notifications; the host should drop its
    /// subscription. The engine ignores late deliveries either way.
    Unobserve { element: ElementId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TargetState {
    Pending,
    Triggered,
}

#[derive(Clone, Debug)]
struct RevealTarget {
    element: ElementId,
    kind: RevealKind,
    options: ObserveOptions,
    state: TargetState,
    stagger_delay_ms: u64,
}

/// One-shot viewport reveals over independently registered element groups.
///
/// Each observed element moves `pending → triggered` exactly once, on its first
/// qualifying visibility notification; the transition is guarded here, so duplicate or
/// re-entrant deliveries are ignored even if the host's subscription primitive fails to
/// deduplicate after [`RevealEffect::Unobserve`].
#[derive(Clone, Debug, Default)]
pub struct RevealController {
    targets: Vec<RevealTarget>,
    counters: Vec<CounterTween>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a group of elements with a shared kind and subscription parameters.
    ///
    /// Stagger groups emit a [`RevealEffect::PrepareStagger`] per element immediately,
    /// with delays in registration (= document) order. Elements already observed are
    /// skipped.
    pub fn observe(
        &mut self,
        elements: impl IntoIterator<Item = ElementId>,
        kind: RevealKind,
        options: ObserveOptions,
        mut emit: impl FnMut(RevealEffect),
    ) {
        let mut index = 0usize;
        for element in elements {
            if self.targets.iter().any(|t| t.element == element) {
                fxwarn!(element, "RevealController: element already observed");
                index += 1;
                continue;
            }
            let stagger_delay_ms = stagger_delay(index);
            if kind == RevealKind::Stagger {
                emit(RevealEffect::PrepareStagger {
                    element,
                    delay_ms: stagger_delay_ms,
                });
            }
            self.targets.push(RevealTarget {
                element,
                kind,
                options,
                state: TargetState::Pending,
                stagger_delay_ms,
            });
            index += 1;
        }
        fxdebug!(total = self.targets.len(), "RevealController::observe");
    }

    pub fn observed_len(&self) -> usize {
        self.targets.len()
    }

    pub fn pending_len(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| t.state == TargetState::Pending)
            .count()
    }

    pub fn is_triggered(&self, element: ElementId) -> bool {
        self.targets
            .iter()
            .any(|t| t.element == element && t.state == TargetState::Triggered)
    }

    /// The transition delay assigned to a staggered element at registration.
    pub fn stagger_delay_ms(&self, element: ElementId) -> Option<u64> {
        self.targets
            .iter()
            .find(|t| t.element == element && t.kind == RevealKind::Stagger)
            .map(|t| t.stagger_delay_ms)
    }

    /// Subscription parameters for one observed element.
    pub fn options_for(&self, element: ElementId) -> Option<ObserveOptions> {
        self.targets
            .iter()
            .find(|t| t.element == element)
            .map(|t| t.options)
    }

    /// Iterates the still-pending elements with their subscription parameters, so a
    /// host can (re)build its visibility subscriptions.
    pub fn for_each_pending(&self, mut f: impl FnMut(ElementId, ObserveOptions)) {
        for t in &self.targets {
            if t.state == TargetState::Pending {
                f(t.element, t.options);
            }
        }
    }

    /// Feeds one visibility notification from the host.
    ///
    /// Non-intersecting deliveries and deliveries for unknown or already-triggered
    /// elements are no-ops. `read_text` is consulted only for counter elements, at
    /// trigger time; text with no parseable integer skips the tween and leaves the
    /// element untouched (the `Unobserve` effect is still emitted).
    pub fn notify_intersection(
        &mut self,
        element: ElementId,
        is_intersecting: bool,
        now_ms: u64,
        read_text: impl FnOnce(ElementId) -> Option<String>,
        mut emit: impl FnMut(RevealEffect),
    ) {
        if !is_intersecting {
            return;
        }
        let Some(target) = self.targets.iter_mut().find(|t| t.element == element) else {
            return;
        };
        if target.state == TargetState::Triggered {
            fxtrace!(element, "RevealController: late delivery ignored");
            return;
        }
        target.state = TargetState::Triggered;

        match target.kind {
            RevealKind::Visible => emit(RevealEffect::MarkVisible { element }),
            RevealKind::Stagger => emit(RevealEffect::StaggerIn { element }),
            RevealKind::FadeIn => emit(RevealEffect::FadeIn { element }),
            RevealKind::Counter => {
                if let Some(tween) =
                    read_text(element).and_then(|text| CounterTween::parse(element, &text, now_ms))
                {
                    self.counters.push(tween);
                }
            }
        }
        emit(RevealEffect::Unobserve { element });
    }

    /// Whether any counter tween is still running.
    pub fn has_active_counters(&self) -> bool {
        !self.counters.is_empty()
    }

    /// Advances active counter tweens, emitting text frames as steps elapse. Completed
    /// tweens are dropped after their final (original-text) frame.
    pub fn tick(&mut self, now_ms: u64, mut emit: impl FnMut(RevealEffect)) {
        for tween in &mut self.counters {
            if let Some(text) = tween.advance(now_ms) {
                emit(RevealEffect::SetText {
                    element: tween.element(),
                    text,
                });
            }
        }
        self.counters.retain(|t| !t.is_done());
    }
}
