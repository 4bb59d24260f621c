use alloc::string::String;

use pagefx::{
    fade_opacity, magnetic_offset, parallax_shift, scroll_fraction, ContinuousAnimator,
    Debouncer, ElementId, ElementRect, FollowerFrame, Gallery, GalleryItem, Key, Lightbox,
    ObserveOptions, Point, RevealController, RevealEffect, RevealKind, ScrollMetrics,
    CURSOR_SMOOTHING, FADE_DISTANCE, FOLLOWER_SMOOTHING, MAGNETIC_LIFT, MAGNETIC_STRENGTH,
    PARALLAX_SPEED,
};

use crate::{ClickTarget, Easing, ScrollTween};

/// Scroll offset past which the nav bar condenses.
pub const NAV_SCROLL_THRESHOLD: f32 = 100.0;
/// Debounce window for progress-bar recomputation, in milliseconds.
pub const PROGRESS_DEBOUNCE_MS: u64 = 10;
/// Fixed header allowance subtracted from anchor scroll targets, in pixels.
pub const ANCHOR_HEADER_OFFSET: f32 = 80.0;
/// Duration of the anchor-navigation scroll tween, in milliseconds.
pub const ANCHOR_SCROLL_DURATION_MS: u64 = 400;

/// Everything the host applies to the page in response to controller activity.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEffect {
    /// Position a pointer follower (`left`/`top` in px).
    Follower(FollowerFrame),
    /// Toggle hover styling on the follower ring.
    Hover { element: ElementId, active: bool },
    /// Translate and fade the hero for the current scroll offset.
    Parallax {
        element: ElementId,
        shift: f32,
        opacity: f32,
    },
    /// Toggle the nav bar's condensed state.
    NavScrolled { element: ElementId, scrolled: bool },
    /// Expand or collapse the mobile nav menu (and its hamburger animation).
    NavMenu { element: ElementId, open: bool },
    /// Scale the scroll progress bar; `fraction` is in `[0, 1]`, origin left.
    Progress { element: ElementId, fraction: f32 },
    /// Translate a magnetic button toward the pointer.
    Magnetic { element: ElementId, offset: Point },
    /// Reset a magnetic button's transform to the identity.
    MagneticReset { element: ElementId },
    /// A reveal-system effect (class toggles, counter text, unobserve).
    Reveal(RevealEffect),
    /// Suppress or restore background scrolling.
    ScrollLock(bool),
    /// Re-project the lightbox content from the gallery.
    LightboxSync { index: usize, item: GalleryItem },
    /// Set the document scroll position (one frame of the anchor tween).
    ScrollTo { offset: f32 },
}

/// Element handles for the page's fixed cast. Every slot is optional: a page missing an
/// element simply never receives the corresponding effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub cursor: Option<ElementId>,
    pub follower: Option<ElementId>,
    pub hero: Option<ElementId>,
    pub nav: Option<ElementId>,
    pub nav_menu: Option<ElementId>,
    pub progress_bar: Option<ElementId>,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(mut self, element: ElementId) -> Self {
        self.cursor = Some(element);
        self
    }

    pub fn with_follower(mut self, element: ElementId) -> Self {
        self.follower = Some(element);
        self
    }

    pub fn with_hero(mut self, element: ElementId) -> Self {
        self.hero = Some(element);
        self
    }

    pub fn with_nav(mut self, element: ElementId) -> Self {
        self.nav = Some(element);
        self
    }

    pub fn with_nav_menu(mut self, element: ElementId) -> Self {
        self.nav_menu = Some(element);
        self
    }

    pub fn with_progress_bar(mut self, element: ElementId) -> Self {
        self.progress_bar = Some(element);
        self
    }
}

/// A framework-neutral controller composing the `pagefx` pieces the way the original
/// page wires them together.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_pointer_move` / `on_scroll` / `on_key_down` / `on_click` when events occur
/// - `notify_intersection` when a visibility subscription fires
/// - `tick(now_ms)` each frame, for followers, counters, and pending debounced work
///
/// Effects come back through the `emit` callback on each entry point; the host applies
/// them to the real elements. Note the deliberate asymmetry inherited from the page:
/// parallax/fade recompute on every raw scroll event, while the progress bar is
/// debounced at [`PROGRESS_DEBOUNCE_MS`].
#[derive(Clone, Debug)]
pub struct PageController {
    options: PageOptions,
    animator: ContinuousAnimator,
    reveal: RevealController,
    lightbox: Lightbox,
    progress: Debouncer<ScrollMetrics>,
    scroll_tween: Option<ScrollTween>,
    last_scroll: Option<ScrollMetrics>,
    nav_scrolled: bool,
    nav_menu_open: bool,
    scroll_locked: bool,
}

impl PageController {
    pub fn new(gallery: Gallery, options: PageOptions) -> Self {
        let mut animator = ContinuousAnimator::new();
        if let Some(cursor) = options.cursor {
            animator.add_follower(cursor, CURSOR_SMOOTHING);
        }
        if let Some(follower) = options.follower {
            animator.add_follower(follower, FOLLOWER_SMOOTHING);
        }
        Self {
            options,
            animator,
            reveal: RevealController::new(),
            lightbox: Lightbox::new(gallery),
            progress: Debouncer::new(PROGRESS_DEBOUNCE_MS),
            scroll_tween: None,
            last_scroll: None,
            nav_scrolled: false,
            nav_menu_open: false,
            scroll_locked: false,
        }
    }

    pub fn options(&self) -> PageOptions {
        self.options
    }

    pub fn animator(&self) -> &ContinuousAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut ContinuousAnimator {
        &mut self.animator
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Registers a reveal group; see [`RevealController::observe`].
    pub fn observe(
        &mut self,
        elements: impl IntoIterator<Item = ElementId>,
        kind: RevealKind,
        options: ObserveOptions,
        mut emit: impl FnMut(PageEffect),
    ) {
        self.reveal
            .observe(elements, kind, options, |e| emit(PageEffect::Reveal(e)));
    }

    /// Feeds a visibility notification; see [`RevealController::notify_intersection`].
    pub fn notify_intersection(
        &mut self,
        element: ElementId,
        is_intersecting: bool,
        now_ms: u64,
        read_text: impl FnOnce(ElementId) -> Option<String>,
        mut emit: impl FnMut(PageEffect),
    ) {
        self.reveal
            .notify_intersection(element, is_intersecting, now_ms, read_text, |e| {
                emit(PageEffect::Reveal(e))
            });
    }

    /// Records a raw pointer move; follower positions update on the next `tick`.
    pub fn on_pointer_move(&mut self, position: Point) {
        self.animator.set_pointer(position);
    }

    /// Pointer entered/left an interactive element; styles the follower ring.
    pub fn on_hover_change(&mut self, active: bool, mut emit: impl FnMut(PageEffect)) {
        if let Some(element) = self.options.follower {
            emit(PageEffect::Hover { element, active });
        }
    }

    /// Pointer moved over a magnetic button.
    pub fn on_magnetic_move(
        &mut self,
        element: ElementId,
        pointer: Point,
        rect: ElementRect,
        mut emit: impl FnMut(PageEffect),
    ) {
        let offset = magnetic_offset(pointer, rect, MAGNETIC_STRENGTH, MAGNETIC_LIFT);
        emit(PageEffect::Magnetic { element, offset });
    }

    /// Pointer left a magnetic button; the transform resets to the identity.
    pub fn on_magnetic_leave(&mut self, element: ElementId, mut emit: impl FnMut(PageEffect)) {
        emit(PageEffect::MagneticReset { element });
    }

    /// Feeds a raw scroll event.
    ///
    /// Nav state and hero parallax/fade are recomputed immediately; the progress bar is
    /// deferred through the debouncer and delivered by a later `tick`.
    pub fn on_scroll(
        &mut self,
        metrics: ScrollMetrics,
        now_ms: u64,
        mut emit: impl FnMut(PageEffect),
    ) {
        self.last_scroll = Some(metrics);

        if let Some(nav) = self.options.nav {
            let scrolled = metrics.offset > NAV_SCROLL_THRESHOLD;
            if scrolled != self.nav_scrolled {
                self.nav_scrolled = scrolled;
                emit(PageEffect::NavScrolled {
                    element: nav,
                    scrolled,
                });
            }
        }

        if let Some(hero) = self.options.hero {
            emit(PageEffect::Parallax {
                element: hero,
                shift: parallax_shift(metrics.offset, PARALLAX_SPEED),
                opacity: fade_opacity(metrics.offset, FADE_DISTANCE),
            });
        }

        if self.options.progress_bar.is_some() {
            self.progress.call(metrics, now_ms);
        }
    }

    /// The mobile nav toggle was clicked; flips the menu's expanded state. Returns the
    /// new state. A no-op (returning `false`) when no menu element was configured.
    pub fn on_nav_toggle(&mut self, mut emit: impl FnMut(PageEffect)) -> bool {
        let Some(element) = self.options.nav_menu else {
            return false;
        };
        self.nav_menu_open = !self.nav_menu_open;
        emit(PageEffect::NavMenu {
            element,
            open: self.nav_menu_open,
        });
        self.nav_menu_open
    }

    /// A nav link was activated; an expanded mobile menu collapses. The anchor scroll
    /// itself goes through [`on_anchor_click`](Self::on_anchor_click).
    pub fn on_nav_link_click(&mut self, mut emit: impl FnMut(PageEffect)) {
        if !self.nav_menu_open {
            return;
        }
        self.nav_menu_open = false;
        if let Some(element) = self.options.nav_menu {
            emit(PageEffect::NavMenu {
                element,
                open: false,
            });
        }
    }

    pub fn is_nav_menu_open(&self) -> bool {
        self.nav_menu_open
    }

    /// An in-page anchor was activated; starts a smooth-scroll tween toward the target
    /// with the fixed header allowance applied. `tick` emits the per-frame
    /// [`PageEffect::ScrollTo`] offsets. Returns the (clamped) target offset.
    ///
    /// An in-flight tween is retargeted from its current position rather than
    /// restarted.
    pub fn on_anchor_click(&mut self, target_top: f32, now_ms: u64) -> f32 {
        let mut to = (target_top - ANCHOR_HEADER_OFFSET).max(0.0);
        if let Some(metrics) = self.last_scroll {
            to = to.min(metrics.scrollable_range());
        }
        // A second click mid-flight restarts from the tween's current position.
        let from = match self.scroll_tween {
            Some(tween) => tween.sample(now_ms),
            None => self.last_scroll.map(|m| m.offset).unwrap_or(0.0),
        };
        self.scroll_tween = Some(ScrollTween::new(
            from,
            to,
            now_ms,
            ANCHOR_SCROLL_DURATION_MS,
            Easing::SmoothStep,
        ));
        to
    }

    /// Whether an anchor scroll tween is in flight.
    pub fn is_scroll_animating(&self) -> bool {
        self.scroll_tween.is_some()
    }

    /// Drops an in-flight anchor tween. Hosts call this when the user takes over
    /// scrolling (wheel/drag); feedback from applying `ScrollTo` must not.
    pub fn cancel_scroll_tween(&mut self) {
        self.scroll_tween = None;
    }

    /// Feeds a key-down. Returns `true` when the lightbox consumed it.
    pub fn on_key_down(&mut self, key: Key, mut emit: impl FnMut(PageEffect)) -> bool {
        let consumed = self.lightbox.handle_key(key);
        if consumed {
            self.sync_lightbox(&mut emit);
        }
        consumed
    }

    /// Routes a resolved click to the lightbox state machine.
    pub fn on_click(&mut self, target: ClickTarget, mut emit: impl FnMut(PageEffect)) {
        let changed = match target {
            ClickTarget::GalleryTrigger(index) => self.lightbox.open(index),
            ClickTarget::LightboxClose | ClickTarget::Backdrop => self.lightbox.close(),
            ClickTarget::LightboxPrev => self.lightbox.prev().is_some(),
            ClickTarget::LightboxNext => self.lightbox.next().is_some(),
            ClickTarget::LightboxContent => false,
        };
        if changed {
            self.sync_lightbox(&mut emit);
        }
    }

    /// Advances one frame: follower positions, counter frames, the anchor scroll
    /// tween, and any debounced progress update whose window has elapsed.
    pub fn tick(&mut self, now_ms: u64, mut emit: impl FnMut(PageEffect)) {
        self.animator.tick(|f| emit(PageEffect::Follower(f)));
        self.reveal.tick(now_ms, |e| emit(PageEffect::Reveal(e)));

        if let Some(tween) = self.scroll_tween {
            let offset = if tween.is_done(now_ms) {
                self.scroll_tween = None;
                tween.to()
            } else {
                tween.sample(now_ms)
            };
            emit(PageEffect::ScrollTo { offset });
        }

        if let Some(metrics) = self.progress.poll(now_ms) {
            if let Some(element) = self.options.progress_bar {
                emit(PageEffect::Progress {
                    element,
                    fraction: scroll_fraction(metrics),
                });
            }
        }
    }

    fn sync_lightbox(&mut self, emit: &mut impl FnMut(PageEffect)) {
        let locked = self.lightbox.scroll_locked();
        if locked != self.scroll_locked {
            self.scroll_locked = locked;
            emit(PageEffect::ScrollLock(locked));
        }
        if self.lightbox.is_open() {
            if let Some(item) = self.lightbox.current_item() {
                emit(PageEffect::LightboxSync {
                    index: self.lightbox.current_index(),
                    item: item.clone(),
                });
            }
        }
    }
}
