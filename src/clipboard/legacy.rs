//! Select-and-copy fallback over a scratch document.

use parking_lot::Mutex;

use super::{ClipboardError, LegacyCopy};

/// Minimal document surface needed for the off-screen copy trick.
pub trait ScratchDocument {
    type Holder;

    /// Insert an off-screen, read-only text holder containing `text`.
    fn insert_holder(&mut self, text: &str) -> Self::Holder;

    /// Select the holder's whole content.
    fn select(&mut self, holder: &Self::Holder);

    /// Run the synchronous copy command on the current selection.
    fn exec_copy(&mut self) -> Result<(), String>;

    fn remove_holder(&mut self, holder: Self::Holder);
}

/// [`LegacyCopy`] through a [`ScratchDocument`]. The holder is removed on
/// every path, including a failed copy.
pub struct OffscreenCopy<D> {
    document: Mutex<D>,
}

impl<D: ScratchDocument> OffscreenCopy<D> {
    pub fn new(document: D) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }

    pub fn into_inner(self) -> D {
        self.document.into_inner()
    }
}

impl<D: ScratchDocument> LegacyCopy for OffscreenCopy<D> {
    fn copy_sync(&self, text: &str) -> Result<(), ClipboardError> {
        let mut doc = self.document.lock();
        let holder = doc.insert_holder(text);
        doc.select(&holder);
        let result = doc.exec_copy();
        doc.remove_holder(holder);
        result.map_err(ClipboardError::Legacy)
    }
}
