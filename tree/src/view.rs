//! Expand/collapse state over a series tree
//!
//! `TreeView` plays the part of a desktop tree widget: it remembers which
//! game nodes are open, lists the rows currently visible, and renders them
//! as an indented box-drawing tree.

use colored::Colorize;
use series_engine::{Node, NodeId, Sequence, SeriesTree, Team};

use crate::label::{node_label, Names};

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Colour final rows by winner and open rows green
    pub color: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style { color: true }
    }
}

/// A visible line of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub id: NodeId,
    pub depth: usize,
    pub expanded: bool,
    pub terminal: bool,
}

pub struct TreeView<'a> {
    tree: &'a SeriesTree,
    /// expanded[id]; only game nodes are ever set
    expanded: Vec<bool>,
}

impl<'a> TreeView<'a> {
    /// Everything collapsed except the root
    pub fn new(tree: &'a SeriesTree) -> Self {
        let mut view = TreeView {
            tree,
            expanded: vec![false; tree.len()],
        };
        view.expand(0);
        view
    }

    pub fn tree(&self) -> &'a SeriesTree {
        self.tree
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.get(id as usize).copied().unwrap_or(false)
    }

    /// Open a game node; final nodes and unknown IDs are ignored
    pub fn expand(&mut self, id: NodeId) {
        if let Some(Node::Game { .. }) = self.tree.get(id) {
            self.expanded[id as usize] = true;
        }
    }

    pub fn collapse(&mut self, id: NodeId) {
        if let Some(slot) = self.expanded.get_mut(id as usize) {
            *slot = false;
        }
    }

    pub fn toggle(&mut self, id: NodeId) {
        if self.is_expanded(id) {
            self.collapse(id);
        } else {
            self.expand(id);
        }
    }

    pub fn expand_all(&mut self) {
        let tree = self.tree;
        for node in tree.nodes() {
            self.expanded[node.id() as usize] = !node.is_terminal();
        }
    }

    /// Collapse every node; the root stays open so the first game is visible
    pub fn collapse_all(&mut self) {
        self.expanded.iter_mut().for_each(|e| *e = false);
        self.expand(0);
    }

    /// Expand the row at each index `0..n`, recomputing rows after each step
    pub fn expand_rows(&mut self, n: usize) {
        for index in 0..n {
            match self.rows().get(index) {
                Some(row) => self.expand(row.id),
                None => break,
            }
        }
    }

    /// Open every game node above `depth` (depth 0 is the root)
    pub fn expand_to_depth(&mut self, depth: usize) {
        let tree = self.tree;
        for node in tree.nodes() {
            if node.depth() < depth {
                self.expand(node.id());
            }
        }
    }

    /// Open every ancestor of the node reached by `sequence`, making it visible.
    ///
    /// Returns the node's ID, or None if the path runs past a decided series.
    pub fn focus(&mut self, sequence: &Sequence) -> Option<NodeId> {
        let target = self.tree.find(sequence)?.id();
        let mut current = self.tree.get(target)?.parent();
        while let Some(id) = current {
            self.expand(id);
            current = self.tree.get(id).and_then(Node::parent);
        }
        Some(target)
    }

    /// Visible rows in display order
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut stack = vec![0];
        while let Some(id) = stack.pop() {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            let expanded = self.is_expanded(id);
            rows.push(Row {
                id,
                depth: node.depth(),
                expanded,
                terminal: node.is_terminal(),
            });
            if expanded {
                stack.extend(node.children().iter().rev());
            }
        }
        rows
    }

    pub fn render(&self, names: &Names, style: &Style) -> String {
        self.render_from(0, names, style)
    }

    /// Render the visible part of the subtree rooted at `id`
    pub fn render_from(&self, id: NodeId, names: &Names, style: &Style) -> String {
        let mut out = String::new();
        if let Some(node) = self.tree.get(id) {
            out.push_str(&self.line(node, names, style));
            out.push('\n');
            self.render_children(node, "", names, style, &mut out);
        }
        out
    }

    fn render_children(
        &self,
        node: &Node,
        prefix: &str,
        names: &Names,
        style: &Style,
        out: &mut String,
    ) {
        if !self.is_expanded(node.id()) {
            return;
        }
        let children = node.children();
        for (i, &child_id) in children.iter().enumerate() {
            let Some(child) = self.tree.get(child_id) else {
                continue;
            };
            let last = i + 1 == children.len();
            out.push_str(prefix);
            out.push_str(if last { "└── " } else { "├── " });
            out.push_str(&self.line(child, names, style));
            out.push('\n');
            let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
            self.render_children(child, &next, names, style, out);
        }
    }

    /// One row as an indented line, for pickers that list rows individually
    pub fn row_text(&self, row: &Row, names: &Names, style: &Style) -> String {
        match self.tree.get(row.id) {
            Some(node) => format!("{}{}", "  ".repeat(row.depth), self.line(node, names, style)),
            None => String::new(),
        }
    }

    fn line(&self, node: &Node, names: &Names, style: &Style) -> String {
        let label = node_label(self.tree, node, names);
        match node.outcome() {
            Some(outcome) if style.color => match outcome.winner {
                Team::A => label.blue().bold().to_string(),
                Team::B => label.red().bold().to_string(),
            },
            Some(_) => label,
            None => {
                let marker = if self.is_expanded(node.id()) { "[-]" } else { "[+]" };
                if style.color {
                    format!("{} {}", marker.green(), label)
                } else {
                    format!("{} {}", marker, label)
                }
            }
        }
    }
}
