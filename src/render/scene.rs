use egui::{Pos2, Rect, Vec2};

use crate::model::TaskId;

/// What a node on the surface represents.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Gridline,
    RowStrip { index: usize },
    LabelPanel,
    /// Row-height container holding a task's label and box.
    TaskStrip { id: TaskId },
    TaskLabel { id: TaskId, text: String },
    TaskBox { id: TaskId },
}

/// A drawable rectangle. `rect` is relative to the parent node, or to the
/// surface origin for top-level nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub rect: Rect,
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(kind: NodeKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            children: Vec::new(),
        }
    }

    /// The task this node belongs to, if it is part of a task subtree.
    pub fn task_id(&self) -> Option<&TaskId> {
        match &self.kind {
            NodeKind::TaskStrip { id }
            | NodeKind::TaskLabel { id, .. }
            | NodeKind::TaskBox { id } => Some(id),
            _ => None,
        }
    }
}

/// Result of hit-testing a point on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    Row { index: usize },
    Task { id: TaskId },
    None,
}

/// The drawing surface: a fixed-size canvas and its nodes in paint order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    size: Vec2,
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Drop every node and resize the surface.
    pub fn reset(&mut self, size: Vec2) {
        self.size = size;
        self.nodes.clear();
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Remove all top-level subtrees belonging to `id`.
    pub fn remove_task(&mut self, id: &TaskId) {
        self.nodes.retain(|node| node.task_id() != Some(id));
    }

    /// Number of top-level subtrees drawn for `id`.
    #[cfg(test)]
    pub fn task_subtrees(&self, id: &TaskId) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.task_id() == Some(id))
            .count()
    }

    /// Find what lies under `pos`, topmost node first.
    ///
    /// Task strips are transparent to clicks: only a task's label and box
    /// belong to the task, the rest of the strip falls through to the row.
    pub fn hit_test(&self, pos: Pos2) -> Hit {
        if !Rect::from_min_size(Pos2::ZERO, self.size).contains(pos) {
            return Hit::None;
        }
        hit_nodes(&self.nodes, pos, Vec2::ZERO)
    }
}

fn hit_nodes(nodes: &[Node], pos: Pos2, offset: Vec2) -> Hit {
    for node in nodes.iter().rev() {
        let rect = node.rect.translate(offset);
        if !rect.contains(pos) {
            continue;
        }
        let inner = hit_nodes(&node.children, pos, rect.min.to_vec2());
        if inner != Hit::None {
            return inner;
        }
        match &node.kind {
            NodeKind::RowStrip { index } => return Hit::Row { index: *index },
            NodeKind::TaskLabel { id, .. } | NodeKind::TaskBox { id } => {
                return Hit::Task { id: id.clone() }
            }
            _ => {}
        }
    }
    Hit::None
}
