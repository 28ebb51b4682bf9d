//! Markup dump of the connected tree
//!
//! Used by the headless CLI mode and by tests to inspect what is on screen.

use std::fmt::Write;

use super::display_tree::{DisplayTree, NodeId};

const INDENT: &str = "  ";

impl DisplayTree {
    /// Render the tree below (and including) the body as indented markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_node(&mut out, self.body(), 0);
        out
    }

    fn write_node(&self, out: &mut String, node: NodeId, depth: usize) {
        let Some(n) = self.nodes.get(&node) else {
            return;
        };
        let pad = INDENT.repeat(depth);

        let mut open = format!("<{}", n.tag);
        if let Some(id) = &n.id {
            let _ = write!(open, " id=\"{}\"", id);
        }
        if !n.classes.is_empty() {
            let _ = write!(open, " class=\"{}\"", n.classes.join(" "));
        }
        open.push('>');

        let text = n.text.as_deref().unwrap_or("");
        if n.children.is_empty() {
            let _ = writeln!(out, "{pad}{open}{text}</{}>", n.tag);
            return;
        }

        let _ = writeln!(out, "{pad}{open}");
        if !text.is_empty() {
            let _ = writeln!(out, "{pad}{INDENT}{text}");
        }
        for child in &n.children {
            self.write_node(out, *child, depth + 1);
        }
        let _ = writeln!(out, "{pad}</{}>", n.tag);
    }
}
