/// A lightweight, serializable snapshot of the lightbox state machine.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Snapshots
/// are in-memory conveniences for hosts (debug overlays, hot reload); nothing in the
/// engine persists across page loads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightboxSnapshot {
    pub is_open: bool,
    pub current_index: usize,
}

/// A snapshot of one smoothed axis pair (raw target vs. lagging current).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerState {
    pub target: crate::Point,
    pub current: crate::Point,
}
