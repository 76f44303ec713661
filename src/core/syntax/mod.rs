//! Flattened view of the swc AST consumed by the extraction engine.
//!
//! - `node`: the closed set of node kinds the engine distinguishes
//! - `walker`: depth-first walker reporting nodes one at a time

pub mod node;
pub mod walker;

pub use node::{Attribute, AttributeValue, Node, ObjectShape, TemplatedElement};
pub use walker::walk_module;
