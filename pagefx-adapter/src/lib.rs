//! Adapter utilities for the `pagefx` crate.
//!
//! The `pagefx` crate is UI-agnostic and focuses on the core state machines. This crate
//! provides small, framework-neutral helpers for wiring a real page to them:
//!
//! - A composed [`PageController`] that owns the animator, reveal system, lightbox, and
//!   the debounced scroll consumers, and emits a flat effect stream
//! - Thin input mapping (key names, click routing) kept outside the state machines
//!
//! This crate is intentionally framework-agnostic (no DOM/winit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod input;
mod tween;


pub use controller::{
    PageController, PageEffect, PageOptions, ANCHOR_HEADER_OFFSET, ANCHOR_SCROLL_DURATION_MS,
    NAV_SCROLL_THRESHOLD, PROGRESS_DEBOUNCE_MS,
};
pub use input::{key_from_name, ClickTarget};
pub use tween::{Easing, ScrollTween};
