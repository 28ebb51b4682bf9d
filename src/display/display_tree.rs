//! Retained element tree
//!
//! Nodes live in an arena keyed by `NodeId`. Removing a node frees it and
//! its whole subtree; every operation on a freed id is a no-op, so stale
//! handles held by scheduled tasks are always safe to use.

use std::collections::HashMap;

/// Handle to an element in a `DisplayTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) tag: String,
    pub(super) id: Option<String>,
    pub(super) classes: Vec<String>,
    pub(super) text: Option<String>,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Element tree rooted at a `body` element
#[derive(Debug)]
pub struct DisplayTree {
    pub(super) nodes: HashMap<NodeId, Node>,
    body: NodeId,
    next_id: u64,
}

impl Default for DisplayTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayTree {
    pub fn new() -> Self {
        let body = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(body, Node::new("body"));
        Self {
            nodes,
            body,
            next_id: 1,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element. It joins the tree once appended.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(tag));
        id
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.tag.as_str())
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) -> bool {
        match self.nodes.get_mut(&node) {
            Some(n) => {
                n.id = Some(id.to_string());
                true
            }
            None => false,
        }
    }

    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|n| n.id.as_deref())
    }

    /// Find a connected element by id, first match in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|node| self.element_id(*node) == Some(id))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first. Refuses to create cycles or to move the body.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child
            || child == self.body
            || !self.contains(parent)
            || !self.contains(child)
            || self.is_ancestor(child, parent)
        {
            return false;
        }

        self.detach(child);
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(&child) {
            c.parent = Some(parent);
        }
        true
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// True when the node is reachable from the body
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.body {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Add a class; returns true only if the class was newly added
    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.nodes.get_mut(&node) {
            Some(n) if !n.classes.iter().any(|c| c == class) => {
                n.classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove a class; returns true only if the class was present
    pub fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.nodes.get_mut(&node) {
            Some(n) => {
                let before = n.classes.len();
                n.classes.retain(|c| c != class);
                n.classes.len() != before
            }
            None => false,
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        self.nodes
            .get(&node)
            .map(|n| n.classes.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) -> bool {
        match self.nodes.get_mut(&node) {
            Some(n) => {
                n.text = Some(text.to_string());
                true
            }
            None => false,
        }
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|n| n.text.as_deref())
    }

    /// Remove a node and its subtree from the tree.
    ///
    /// Returns false if the node is already gone. The body cannot be removed.
    pub fn remove(&mut self, node: NodeId) -> bool {
        if node == self.body || !self.contains(node) {
            return false;
        }

        self.detach(node);
        let mut pending = vec![node];
        while let Some(n) = pending.pop() {
            if let Some(removed) = self.nodes.remove(&n) {
                pending.extend(removed.children);
            }
        }
        true
    }

    /// Connected elements carrying `class`, in document order
    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    /// Nearest ancestor-or-self carrying `class`
    pub fn find_ancestor_with_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if !self.contains(n) {
                return None;
            }
            if self.has_class(n, class) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// Descendants of `node` (excluding itself) in document order
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// Number of live nodes, body included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.retain(|c| *c != node);
        }
        if let Some(n) = self.nodes.get_mut(&node) {
            n.parent = None;
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }
}

#[cfg(test)]
#[path = "display_tree_tests.rs"]
mod display_tree_tests;
