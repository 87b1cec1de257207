//! # Rendering element trees
//!
//! The renderer turns an element tree into a [`RenderedNode`] tree: it
//! renders each element against its context, then walks the resulting props
//! and expands every nested element with a child context resolved by
//! position. The output contains no element references, only data, so it is
//! ready for whatever export layer ships trees to the client.
//!
//! The renderer owns the root [`RenderContext`] and keeps it across calls;
//! that persistence is what makes hook state survive successive renders.
//! Re-render policy stays with the caller: state setters mark their context
//! in the [`RenderQueue`], and the caller decides when to render again.

pub mod node;
pub mod queue;
pub mod tests;

pub use node::{RenderedNode, RenderedValue};
pub use queue::RenderQueue;

use std::collections::BTreeMap;
use std::sync::Arc;

use trellis_core::{Element, PropValue, RenderContext};

/// Drives renders of an element tree against a persistent context tree.
pub struct Renderer {
    root: RenderContext,
    queue: Arc<RenderQueue>,
}

impl Renderer {
    pub fn new() -> Self {
        let queue = Arc::new(RenderQueue::new());
        let root = RenderContext::with_on_change({
            let queue = Arc::clone(&queue);
            move |id| queue.mark(id)
        });
        Renderer { root, queue }
    }

    /// Queue fed by every context in this renderer's tree.
    pub fn queue(&self) -> &Arc<RenderQueue> {
        &self.queue
    }

    pub fn root_context(&self) -> &RenderContext {
        &self.root
    }

    /// Renders the whole tree depth-first and returns its data form.
    pub fn render(&self, element: &dyn Element) -> RenderedNode {
        render_node(element, &self.root)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_node(element: &dyn Element, context: &RenderContext) -> RenderedNode {
    log::debug!("expanding {} under {:?}", element.name(), context);
    let props = element.render(context);
    let props = props
        .into_iter()
        .map(|(key, value)| {
            let rendered = render_value(value, context, &key);
            (key, rendered)
        })
        .collect();
    RenderedNode {
        name: element.name().to_string(),
        props,
    }
}

/// Child keys are position paths: the prop name for an element sitting
/// directly in a prop, `"<prop>.<index>"` for one inside a list. Stable as
/// long as the tree keeps its shape between renders.
fn render_value(value: PropValue, context: &RenderContext, key: &str) -> RenderedValue {
    match value {
        PropValue::Null => RenderedValue::Null,
        PropValue::Bool(value) => RenderedValue::Bool(value),
        PropValue::Int(value) => RenderedValue::Int(value),
        PropValue::Float(value) => RenderedValue::Float(value),
        PropValue::Str(value) => RenderedValue::Str(value),
        PropValue::List(items) => RenderedValue::List(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| render_value(item, context, &format!("{key}.{index}")))
                .collect(),
        ),
        PropValue::Map(entries) => RenderedValue::Map(
            entries
                .into_iter()
                .map(|(name, entry)| {
                    let rendered = render_value(entry, context, &format!("{key}.{name}"));
                    (name, rendered)
                })
                .collect::<BTreeMap<_, _>>(),
        ),
        PropValue::Element(child) => {
            let child_context = context.child_context(key);
            RenderedValue::Node(render_node(child.as_ref(), &child_context))
        }
    }
}
