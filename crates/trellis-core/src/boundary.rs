use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::element::{AnyElement, FunctionElement};

/// What a fallback learns about the failure it replaces.
pub struct ErrorInfo {
    pub message: String,
    pub component: String,
}

/// Wraps `content` so a panic while producing children renders `fallback`
/// instead of aborting the whole export.
///
/// The swap guards have already restored the current-context slot by the
/// time the panic reaches this frame, so the fallback renders under a clean
/// context.
pub fn error_boundary(
    name: impl Into<String>,
    fallback: impl Fn(ErrorInfo) -> Vec<AnyElement> + 'static,
    content: impl Fn() -> Vec<AnyElement> + 'static,
) -> FunctionElement {
    let name = name.into();
    let component = name.clone();
    FunctionElement::new(name, move || {
        match catch_unwind(AssertUnwindSafe(|| content())) {
            Ok(children) => children,
            Err(err) => {
                let message = if let Some(s) = err.downcast_ref::<String>() {
                    s.clone()
                } else if let Some(s) = err.downcast_ref::<&str>() {
                    (*s).to_string()
                } else {
                    "unknown panic".to_string()
                };
                log::warn!("{component}: child render panicked: {message}");
                fallback(ErrorInfo {
                    message,
                    component: component.clone(),
                })
            }
        }
    })
}
