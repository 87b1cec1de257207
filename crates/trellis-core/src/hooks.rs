//! # State hooks
//!
//! Slot-backed primitives over the context protocol. Slots are addressed by
//! call order within one render of a context, so hooks must run
//! unconditionally and in a stable order; the context enforces both.
//!
//! Calling a hook with no active render context is a programming error in
//! the component (hooks only make sense inside a render callback) and
//! panics.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::context::{RenderContext, WeakContext, current_context};

fn active_context(hook: &str) -> RenderContext {
    match current_context() {
        Ok(context) => context,
        Err(_) => panic!("{hook} called with no active render context"),
    }
}

/// State slot. Returns the current value and a setter; calling the setter
/// between renders stores the new value and reports the change, so the
/// surrounding scheduler can queue a re-render.
pub fn use_state<T: Clone + 'static>(init: impl FnOnce() -> T) -> (T, SetState<T>) {
    let context = active_context("use_state");
    let cell = context.slot(|| RefCell::new(init()));
    let value = cell.borrow().clone();
    let setter = SetState {
        cell: Rc::downgrade(&cell),
        context: context.downgrade(),
    };
    (value, setter)
}

/// Mutable cell that survives re-renders without signaling changes.
pub fn use_ref<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    active_context("use_ref").slot(|| RefCell::new(init()))
}

/// Recomputes `compute` only when `deps` differ from the previous render.
pub fn use_memo<D, T>(deps: D, compute: impl FnOnce() -> T) -> T
where
    D: PartialEq + 'static,
    T: Clone + 'static,
{
    let slot = active_context("use_memo").slot(|| RefCell::new(None::<(D, T)>));
    {
        let cached = slot.borrow();
        if let Some((prev, value)) = &*cached
            && *prev == deps
        {
            return value.clone();
        }
    }
    let value = compute();
    *slot.borrow_mut() = Some((deps, value.clone()));
    value
}

/// Setter handle returned by [`use_state`]. Cheap to clone, and safe to call
/// after the owning subtree is gone: it degrades to a no-op.
pub struct SetState<T> {
    cell: Weak<RefCell<T>>,
    context: WeakContext,
}

impl<T: 'static> SetState<T> {
    pub fn set(&self, value: T) {
        match (self.cell.upgrade(), self.context.upgrade()) {
            (Some(cell), Some(context)) => {
                *cell.borrow_mut() = value;
                context.notify_change();
            }
            _ => log::debug!("set_state after context teardown; ignoring"),
        }
    }
}

impl<T> Clone for SetState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            context: self.context.clone(),
        }
    }
}
