//! Node type catalog served to the pipeline editor.

pub mod types;

pub use types::{NodeType, NODE_TYPES};
