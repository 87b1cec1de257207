pub use crate::boundary::{ErrorInfo, error_boundary};
pub use crate::context::{
    ContextGuard, ContextId, OnChange, RenderContext, WeakContext, current_context,
    set_current_context,
};
pub use crate::element::{AnyElement, Element, FunctionElement, HostElement, component};
pub use crate::error::NoActiveContext;
pub use crate::hooks::{SetState, use_memo, use_ref, use_state};
pub use crate::props::{PropValue, Props, children_props};
