//! # Elements
//!
//! An [`Element`] is an immutable description of a piece of UI: a name plus
//! enough data to produce [`Props`] when rendered. Element values are cheap
//! and rebuilt on every pass; the durable state lives in the
//! [`RenderContext`] they are rendered against.
//!
//! [`FunctionElement`] is the user-facing form: it wraps a zero-argument
//! callback returning child elements and runs it under the context swap
//! protocol, so hooks called inside the callback find the right context
//! without any plumbing.

use std::fmt;
use std::rc::Rc;

use crate::context::{RenderContext, current_context, set_current_context};
use crate::props::{PropValue, Props, children_props};

/// A renderable node in the element tree.
///
/// Rendering never mutates the element and is never cached here: calling
/// [`Element::render`] twice runs user code twice. Memoization belongs to
/// the hook layer. Only render when actually producing output for export.
pub trait Element: fmt::Debug {
    /// Identity of the element, typically the qualified component name.
    fn name(&self) -> &str;

    /// Produces this element's props against `context`, which the caller
    /// has prepared for this element (fresh, or resolved through
    /// [`RenderContext::child_context`]).
    fn render(&self, context: &RenderContext) -> Props;
}

/// Shared handle to any element.
pub type AnyElement = Rc<dyn Element>;

/// Builds a function-backed element and hands it back as [`AnyElement`].
pub fn component(
    name: impl Into<String>,
    render: impl Fn() -> Vec<AnyElement> + 'static,
) -> AnyElement {
    Rc::new(FunctionElement::new(name, render))
}

/// Element backed by a user render callback.
pub struct FunctionElement {
    name: String,
    render: Rc<dyn Fn() -> Vec<AnyElement>>,
}

impl FunctionElement {
    pub fn new(name: impl Into<String>, render: impl Fn() -> Vec<AnyElement> + 'static) -> Self {
        Self {
            name: name.into(),
            render: Rc::new(render),
        }
    }
}

impl Element for FunctionElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, context: &RenderContext) -> Props {
        // An empty slot is the normal case for the root of a render pass.
        let previous = current_context().ok();
        log::debug!(
            "render {}: swapping {:?} -> {}",
            self.name,
            previous,
            context.id()
        );
        set_current_context(Some(context.clone()));
        let _restore = RestoreContext { previous };

        let children = {
            let _active = context.enter();
            (self.render)()
        };

        children_props(children)
    }
}

impl Clone for FunctionElement {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            render: self.render.clone(),
        }
    }
}

impl fmt::Debug for FunctionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionElement")
            .field("name", &self.name)
            .field("render", &"<callback>")
            .finish()
    }
}

impl From<FunctionElement> for AnyElement {
    fn from(element: FunctionElement) -> Self {
        Rc::new(element)
    }
}

/// Puts the previously active context back when dropped, so the swap is
/// undone on every exit path, including unwinds out of the user callback.
struct RestoreContext {
    previous: Option<RenderContext>,
}

impl Drop for RestoreContext {
    fn drop(&mut self) {
        log::trace!("restoring {:?}", self.previous);
        set_current_context(self.previous.take());
    }
}

/// Leaf element carrying literal props, the form a component catalog lowers
/// to. Rendering returns the props as given.
#[derive(Clone, Debug)]
pub struct HostElement {
    name: String,
    props: Props,
}

impl HostElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: Props::new(),
        }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn children(mut self, children: Vec<AnyElement>) -> Self {
        self.props
            .insert("children".to_string(), children.into());
        self
    }
}

impl Element for HostElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, _context: &RenderContext) -> Props {
        self.props.clone()
    }
}

impl From<HostElement> for AnyElement {
    fn from(element: HostElement) -> Self {
        Rc::new(element)
    }
}
