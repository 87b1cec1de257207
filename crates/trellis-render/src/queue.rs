use parking_lot::Mutex;

use trellis_core::ContextId;

/// Contexts whose state changed since the last drain.
///
/// State setters may run off the render thread (event handlers fired by the
/// transport), so the queue is shared by `Arc` and locks internally. Only
/// plain ids cross threads; the contexts themselves stay on the render
/// thread.
#[derive(Default)]
pub struct RenderQueue {
    dirty: Mutex<Vec<ContextId>>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` as needing a re-render. Idempotent between drains.
    pub fn mark(&self, id: ContextId) {
        let mut dirty = self.dirty.lock();
        if !dirty.contains(&id) {
            dirty.push(id);
        }
    }

    /// Returns the dirty ids in mark order and clears the queue.
    pub fn drain(&self) -> Vec<ContextId> {
        std::mem::take(&mut *self.dirty.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.dirty.lock().is_empty()
    }
}
