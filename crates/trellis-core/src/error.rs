use thiserror::Error;

/// No render context is active on the current thread.
///
/// This is a recoverable condition rather than a bug: the slot is empty at
/// the root of every render pass, and callers branch on this to distinguish
/// a top-level render from a nested one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no render context is active on this thread")]
pub struct NoActiveContext;
