use pagefx::Key;

/// Parses a host keyboard event's key name into an engine [`Key`].
///
/// Unrecognized names map to `None`; the engine only ever reacts to these three.
pub fn key_from_name(name: &str) -> Option<Key> {
    match name {
        "Escape" => Some(Key::Escape),
        "ArrowLeft" => Some(Key::ArrowLeft),
        "ArrowRight" => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Where a pointer click landed, after host-side hit testing.
///
/// The host resolves the raw event target to one of these before handing the click to
/// [`crate::PageController::on_click`]; the state machines never see raw events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickTarget {
    /// The clickable image of gallery item `i`.
    GalleryTrigger(usize),
    /// The lightbox close control.
    LightboxClose,
    /// The lightbox previous-image control.
    LightboxPrev,
    /// The lightbox next-image control.
    LightboxNext,
    /// The dimming backdrop itself, not anything inside it.
    Backdrop,
    /// Content inside the open lightbox that is not a control; clicks here must not
    /// close it.
    LightboxContent,
}
