//! # Elements, render contexts, and hooks
//!
//! Trellis builds UI trees from plain functions. A function describing a
//! piece of UI is wrapped in a [`FunctionElement`]; rendering it produces a
//! props mapping for an export layer to ship to a remote display, and a
//! [`RenderContext`] keeps per-instance state alive across repeated renders
//! of the same spot in the tree.
//!
//! ## Rendering
//!
//! ```rust
//! use trellis_core::prelude::*;
//!
//! let greeting = component("greeting", || {
//!     vec![HostElement::new("label").prop("text", "hello").into()]
//! });
//!
//! let context = RenderContext::new();
//! let props = greeting.render(&context);
//! assert!(matches!(&props["children"], PropValue::List(children) if children.len() == 1));
//! ```
//!
//! While the callback runs, `context` is the active context on this thread;
//! before and after, the previous occupant of the slot is in place. The
//! restore happens on every exit path, so a panicking callback never leaks
//! its context into unrelated renders.
//!
//! ## Hooks
//!
//! Inside a render callback the active context is ambient, which is what
//! lets hooks attach state without threading a context parameter through
//! user code:
//!
//! ```rust
//! use trellis_core::prelude::*;
//!
//! let counter = component("counter", || {
//!     let (count, set_count) = use_state(|| 0);
//!     let _ = set_count; // handed to event handlers by the export layer
//!     vec![
//!         HostElement::new("label")
//!             .prop("text", format!("count = {count}"))
//!             .into(),
//!     ]
//! });
//!
//! let context = RenderContext::new();
//! counter.render(&context);
//! assert!(current_context().is_err());
//! ```
//!
//! - `use_state` / `use_ref` / `use_memo` are order-based: the Nth hook call
//!   in a render always addresses the Nth slot of the active context, so
//!   hooks must not run conditionally.
//! - Child elements get their own contexts through
//!   [`RenderContext::child_context`], keyed by position, which is how a
//!   child keeps state while its parent is re-rendered around it.
//!
//! Rendering here is deliberately dumb: no caching, no diffing. The
//! renderer sitting on top decides when to re-render and what happens to
//! the props.

pub mod boundary;
pub mod context;
pub mod element;
pub mod error;
pub mod hooks;
pub mod prelude;
pub mod props;

pub use boundary::*;
pub use context::*;
pub use element::*;
pub use error::*;
pub use hooks::*;
pub use props::*;
