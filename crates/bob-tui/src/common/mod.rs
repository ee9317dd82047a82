//! Shared building blocks for the page and its overlays.

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text::{truncate_start_with_ellipsis, truncate_with_ellipsis};
