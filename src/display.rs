//! Display tree module for toaster
//!
//! A small retained element tree that toasts are built in. It offers the
//! handful of document operations the notifier needs: creating elements,
//! appending children, id lookup, class lists, text content and removal.

mod display_tree;
mod markup;

pub use display_tree::{DisplayTree, NodeId};
