//! Nested settings of a tree list and their scoped builders.
//!
//! Each builder borrows exactly one slice of the widget's settings and is
//! dropped as soon as the configuring closure returns.

mod column;
mod editable;
mod events;
mod filterable;
mod sortable;
mod toolbar;

pub use column::*;
pub use editable::*;
pub use events::*;
pub use filterable::*;
pub use sortable::*;
pub use toolbar::*;
