//! The concrete syntax tree node shared by every harrow crate.
//!
//! A [`Node`] is immutable and reference-counted: once built it never
//! changes, and cloning it is a refcount bump, not a copy. That's what lets
//! an incremental reparse hand a caller back the exact same subtree object
//! it returned last time (see `harrow-driver::breakdown_stack`).

mod node;

pub use node::Node;
