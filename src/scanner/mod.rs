mod ignore;
mod walker;

pub use ignore::{GlobPattern, IgnoreTracker};
pub use walker::{VisitedSet, Walker};
