use alloc::string::String;

/// An opaque handle for a host element.
///
/// The engine never dereferences handles; it only uses them to key its own state and to
/// address the effects it emits. Hosts typically assign these at element-discovery time.
pub type ElementId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An element's box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }
}

/// Document scroll geometry as reported by the host on each scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Current scroll offset from the top of the document.
    pub offset: f32,
    /// Total scrollable content size.
    pub content_size: f32,
    /// Viewport size in the scroll axis.
    pub viewport_size: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, content_size: f32, viewport_size: f32) -> Self {
        Self {
            offset,
            content_size,
            viewport_size,
        }
    }

    /// The scrollable range (`content - viewport`), never negative.
    pub fn scrollable_range(&self) -> f32 {
        (self.content_size - self.viewport_size).max(0.0)
    }
}

/// The keys the engine reacts to while the lightbox is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// One gallery entry, captured once at startup from its trigger element.
///
/// Ordering in a [`crate::Gallery`] is document order; the index into that ordering is the
/// lightbox navigation index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryItem {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub category: String,
}
