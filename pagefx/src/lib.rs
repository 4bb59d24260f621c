//! A headless interaction engine for animated pages.
//!
//! For page-level wiring (input mapping, a composed controller), see the
//! `pagefx-adapter` crate.
//!
//! This crate focuses on the stateful machinery behind a scripted marketing/portfolio
//! page: exponentially smoothed pointer followers, scroll-linked transforms (parallax,
//! fade, progress), one-shot viewport reveals with counter tweens and stagger delays, a
//! circular lightbox gallery, and trailing-edge debouncing.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - element handles and their geometry
//! - a recurring frame tick and the current time in milliseconds
//! - viewport-intersection notifications per observed element
//! - raw pointer/keyboard/scroll input
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod counter;
mod debounce;
mod lightbox;
mod reveal;
mod smoothing;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use animator::{
    ContinuousAnimator, FollowerFrame, fade_opacity, magnetic_offset, parallax_shift,
    scroll_fraction, scroll_percent, CURSOR_SMOOTHING, FADE_DISTANCE, FOLLOWER_SMOOTHING,
    MAGNETIC_LIFT, MAGNETIC_STRENGTH, PARALLAX_SPEED,
};
pub use counter::{CounterTween, COUNTER_DURATION_MS, COUNTER_STEPS};
pub use debounce::Debouncer;
pub use lightbox::{Gallery, Lightbox, OnChangeCallback};
pub use reveal::{
    stagger_delay, ObserveOptions, RevealController, RevealEffect, RevealKind, RootMargin,
    STAGGER_STEP_MS,
};
pub use smoothing::{SmoothedAxis, SmoothedPoint};
pub use state::{LightboxSnapshot, PointerState};
pub use types::{ElementId, ElementRect, GalleryItem, Key, Point, ScrollMetrics};
