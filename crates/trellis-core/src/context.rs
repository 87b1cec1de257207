//! # Render contexts
//!
//! Every element instance renders inside a [`RenderContext`]: it carries the
//! hook slots for that instance and the child contexts created by previous
//! renders, so state survives while the element values themselves are
//! rebuilt from scratch each pass.
//!
//! The context a render runs under is ambient. User render callbacks take no
//! arguments, so hooks discover "their" context through a thread-local slot
//! instead of explicit plumbing:
//!
//! - [`current_context`] reads the slot, failing with [`NoActiveContext`]
//!   when nothing is rendering (the normal state at the root of a pass).
//! - [`set_current_context`] replaces the slot unconditionally; whoever
//!   swaps a context in is responsible for swapping the old one back.
//!
//! Activation is stack disciplined. [`RenderContext::enter`] returns a
//! [`ContextGuard`]; the context stays active until the guard drops, and the
//! guard drops on unwind too, so a panicking render callback can never leave
//! a context activated. Entering a context that is already active is a bug
//! in the caller and panics immediately.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

use crate::error::NoActiveContext;

thread_local! {
    static CURRENT_CONTEXT: RefCell<Option<RenderContext>> = const { RefCell::new(None) };
}

/// Stable identity of a [`RenderContext`], unique for the lifetime of the
/// process. Re-renders of the same element instance see the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(u64);

impl ContextId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ContextId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx#{}", self.0)
    }
}

/// Fired with the owning context's id when hook state is written outside a
/// render. Children share their parent's callback.
pub type OnChange = Rc<dyn Fn(ContextId)>;

/// Returns the context active on this thread.
///
/// Absence is an expected condition, not a failure: the hook layer and the
/// element protocol both branch on it to tell top-level renders from nested
/// ones.
pub fn current_context() -> Result<RenderContext, NoActiveContext> {
    CURRENT_CONTEXT.with(|slot| slot.borrow().clone().ok_or(NoActiveContext))
}

/// Replaces the active context on this thread; `None` clears it.
///
/// No validation happens here. The caller owns restoring the previous value,
/// normally through the guards in the element render protocol.
pub fn set_current_context(context: Option<RenderContext>) {
    CURRENT_CONTEXT.with(|slot| *slot.borrow_mut() = context);
}

/// Render-time environment of one element instance.
///
/// Cloning is cheap and shares the same underlying state; contexts are
/// single-threaded by design (one render lane per thread, see the
/// thread-local current-context slot).
pub struct RenderContext {
    inner: Rc<ContextInner>,
}

struct ContextInner {
    id: ContextId,
    rendering: Cell<bool>,
    cursor: Cell<usize>,
    /// Number of hook slots a completed render of this context uses.
    /// Fixed by the first full render; later renders must match.
    hook_count: Cell<Option<usize>>,
    slots: RefCell<SmallVec<[Box<dyn Any>; 8]>>,
    children: RefCell<HashMap<String, RenderContext>>,
    on_change: OnChange,
}

impl RenderContext {
    /// Standalone context with no change listener.
    pub fn new() -> Self {
        Self::with_callback(Rc::new(|_| {}))
    }

    /// Context whose state changes are reported to `on_change`.
    pub fn with_on_change(on_change: impl Fn(ContextId) + 'static) -> Self {
        Self::with_callback(Rc::new(on_change))
    }

    fn with_callback(on_change: OnChange) -> Self {
        Self {
            inner: Rc::new(ContextInner {
                id: ContextId::next(),
                rendering: Cell::new(false),
                cursor: Cell::new(0),
                hook_count: Cell::new(None),
                slots: RefCell::new(SmallVec::new()),
                children: RefCell::new(HashMap::new()),
                on_change,
            }),
        }
    }

    pub fn id(&self) -> ContextId {
        self.inner.id
    }

    /// Whether a render of this context is in progress.
    pub fn is_active(&self) -> bool {
        self.inner.rendering.get()
    }

    /// Activates this context for one render. The returned guard deactivates
    /// it when dropped, on normal return and on unwind alike.
    ///
    /// Panics if the context is already active: overlapping activation means
    /// the enter/exit stack discipline was broken somewhere and continuing
    /// would misattribute hook state.
    pub fn enter(&self) -> ContextGuard {
        let inner = &self.inner;
        assert!(
            !inner.rendering.get(),
            "{} entered while already active; renders of one context must not overlap",
            inner.id
        );
        inner.rendering.set(true);
        inner.cursor.set(0);
        ContextGuard {
            context: self.clone(),
        }
    }

    /// Returns the value in the next hook slot, initializing it on the first
    /// render of this context.
    ///
    /// Slots are addressed by call order, so hooks must run unconditionally
    /// and in a stable order. Panics when called while the context is not
    /// active, or when the slot holds a different type than a prior render
    /// stored (hook order drifted).
    pub fn slot<T: 'static>(&self, init: impl FnOnce() -> T) -> Rc<T> {
        let inner = &self.inner;
        assert!(
            inner.rendering.get(),
            "hook slot of {} accessed outside an active render",
            inner.id
        );
        let cursor = inner.cursor.get();
        inner.cursor.set(cursor + 1);

        let mut slots = inner.slots.borrow_mut();
        if cursor >= slots.len() {
            let rc: Rc<T> = Rc::new(init());
            slots.push(Box::new(rc.clone()));
            return rc;
        }

        match slots[cursor].downcast_ref::<Rc<T>>() {
            Some(rc) => rc.clone(),
            None => panic!(
                "hook slot {cursor} of {} changed type between renders; \
                 hooks must run in a stable order",
                inner.id
            ),
        }
    }

    /// Resolves the child context for `key`, creating and registering a new
    /// one the first time the key is seen. The same key yields the same
    /// context across re-renders of this parent, which is what keeps a
    /// child's hook state alive while its element value is rebuilt.
    pub fn child_context(&self, key: impl Into<String>) -> RenderContext {
        let key = key.into();
        let mut children = self.inner.children.borrow_mut();
        children
            .entry(key)
            .or_insert_with(|| {
                let child = RenderContext::with_callback(self.inner.on_change.clone());
                log::debug!("{} created child {}", self.inner.id, child.inner.id);
                child
            })
            .clone()
    }

    /// Reports a state change on this context to the change listener.
    pub fn notify_change(&self) {
        (self.inner.on_change)(self.inner.id);
    }

    /// Weak handle for callbacks that may outlive the context.
    pub fn downgrade(&self) -> WeakContext {
        WeakContext {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RenderContext {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RenderContext({})", self.inner.id)
    }
}

/// Weak counterpart of [`RenderContext`], held by state setters so an event
/// handler firing after its subtree was torn down degrades to a no-op.
#[derive(Clone)]
pub struct WeakContext {
    inner: Weak<ContextInner>,
}

impl WeakContext {
    pub fn upgrade(&self) -> Option<RenderContext> {
        self.inner.upgrade().map(|inner| RenderContext { inner })
    }
}

/// Keeps a [`RenderContext`] active; dropping it ends the render.
pub struct ContextGuard {
    context: RenderContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let inner = &self.context.inner;
        inner.rendering.set(false);

        // A panicking callback already has a failure in flight; checking the
        // slot count here would only shadow it. The count also stays unfixed
        // after a failed first render.
        if std::thread::panicking() {
            return;
        }
        let used = inner.cursor.get();
        match inner.hook_count.get() {
            None => inner.hook_count.set(Some(used)),
            Some(expected) if expected != used => panic!(
                "{} used {used} hook slots where earlier renders used {expected}; \
                 hooks must not run conditionally",
                inner.id
            ),
            Some(_) => {}
        }
    }
}
