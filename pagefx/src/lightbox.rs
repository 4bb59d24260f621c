use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::state::LightboxSnapshot;
use crate::{GalleryItem, Key};

/// A callback fired after every lightbox state change (open/close/navigate).
pub type OnChangeCallback = Arc<dyn Fn(&Lightbox) + Send + Sync>;

/// The immutable gallery dataset, assembled once at startup in document order.
///
/// The position of an item in this sequence is the index the lightbox navigates by.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    /// Appends an item during startup assembly.
    pub fn push(&mut self, item: GalleryItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, GalleryItem> {
        self.items.iter()
    }
}

impl FromIterator<GalleryItem> for Gallery {
    fn from_iter<I: IntoIterator<Item = GalleryItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// The lightbox state machine: `Closed ⇄ Open(index)`.
///
/// Navigation is circular over the gallery, and every input path is guarded by the open
/// state: `close`/`next`/`prev`/`handle_key` while closed are no-ops, and `open` on an
/// out-of-bounds index (including any index of an empty gallery) is rejected. Index
/// arithmetic is therefore never evaluated against a zero-length sequence.
///
/// [`current_item`](Self::current_item) is the single source of truth for displayed
/// content; hosts re-project it after every `on_change` notification.
#[derive(Clone)]
pub struct Lightbox {
    gallery: Gallery,
    is_open: bool,
    current_index: usize,
    on_change: Option<OnChangeCallback>,
}

impl Lightbox {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            is_open: false,
            current_index: 0,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, on_change: impl Fn(&Lightbox) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Lightbox) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn len(&self) -> usize {
        self.gallery.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gallery.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The item the host should display. Follows `current_index` even after a close, so
    /// a re-open without navigation shows the same entry.
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.gallery.get(self.current_index)
    }

    /// Whether background scroll should be suppressed. Mirrors the open state.
    pub fn scroll_locked(&self) -> bool {
        self.is_open
    }

    /// Opens at `index`. Rejected (returning `false`) when out of bounds; an already
    /// open lightbox re-targets to the new index.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.gallery.len() {
            fxwarn!(index, len = self.gallery.len(), "Lightbox: open out of bounds");
            return false;
        }
        fxdebug!(index, "Lightbox::open");
        self.current_index = index;
        self.is_open = true;
        self.notify();
        true
    }

    /// Closes the lightbox. A no-op (returning `false`) when already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        fxdebug!("Lightbox::close");
        self.is_open = false;
        self.notify();
        true
    }

    /// Advances circularly. Returns the new index, or `None` while closed.
    pub fn next(&mut self) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        self.current_index = (self.current_index + 1) % self.gallery.len();
        self.notify();
        Some(self.current_index)
    }

    /// Steps back circularly (index 0 wraps to the last item). Returns the new index,
    /// or `None` while closed.
    pub fn prev(&mut self) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        let len = self.gallery.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.notify();
        Some(self.current_index)
    }

    /// Feeds a key-down. Keys are consumed (returning `true`) only while open.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            Key::Escape => {
                self.close();
            }
            Key::ArrowLeft => {
                self.prev();
            }
            Key::ArrowRight => {
                self.next();
            }
        }
        true
    }

    pub fn snapshot(&self) -> LightboxSnapshot {
        LightboxSnapshot {
            is_open: self.is_open,
            current_index: self.current_index,
        }
    }

    /// Restores a previously captured snapshot, clamping the index to the gallery and
    /// refusing to restore an open state over an empty gallery.
    pub fn restore(&mut self, snapshot: LightboxSnapshot) {
        self.current_index = snapshot
            .current_index
            .min(self.gallery.len().saturating_sub(1));
        self.is_open = snapshot.is_open && !self.gallery.is_empty();
        self.notify();
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }
}

impl core::fmt::Debug for Lightbox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Lightbox")
            .field("len", &self.gallery.len())
            .field("is_open", &self.is_open)
            .field("current_index", &self.current_index)
            .finish_non_exhaustive()
    }
}
