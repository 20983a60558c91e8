//! Stage tree of transient visual nodes
//!
//! The stage is the retained tree that composite effects and pages mutate.
//! Every node is exclusively owned by whichever component created it; the
//! tree itself only tracks structure and per-node visual attributes.
//!
//! Operations on missing nodes are silent no-ops: this layer is cosmetic,
//! and a vanished target degrades to "no visual", never to an error.

use crate::color::Color;
use crate::geometry::{Point, Size, Vec2};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Key for a node in the stage tree
    pub struct NodeId;
}

/// What a stage node represents visually
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    /// Generic grouping container
    #[default]
    Container,
    /// Page content section
    Section,
    /// Transient circular particle
    Particle,
    /// Transient polygon shape
    Shape,
    /// Cursor trail dot
    TrailDot,
    /// Smoke transition veil puff
    Veil,
    /// Static text content
    Text,
}

/// A single node in the stage tree
#[derive(Clone, Debug)]
pub struct StageNode {
    pub kind: NodeKind,
    pub position: Point,
    pub size: Size,
    pub opacity: f32,
    pub scale: Vec2,
    pub rotation: f32,
    pub color: Color,
    /// Text content, for `NodeKind::Text` nodes
    pub text: Option<String>,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 8]>,
}

impl StageNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            position: Point::ZERO,
            size: Size::ZERO,
            opacity: 1.0,
            scale: Vec2::ONE,
            rotation: 0.0,
            color: Color::TRANSPARENT,
            text: None,
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// The retained tree of visual nodes
pub struct Stage {
    nodes: SlotMap<NodeId, StageNode>,
    root: NodeId,
}

impl Stage {
    /// Create an empty stage with a root container
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(StageNode::new(NodeKind::Container));
        Self { nodes, root }
    }

    /// The root container node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached node
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.insert(StageNode::new(kind))
    }

    /// Create a node as the last child of `parent`
    ///
    /// Falls back to a detached node if the parent is missing.
    pub fn create_in(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.create(kind);
        self.attach(parent, id);
        id
    }

    /// Attach an existing node as the last child of `parent`
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.nodes.contains_key(child) {
            return;
        }
        self.detach(child);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(child);
        } else {
            tracing::debug!(?parent, ?child, "attach target missing, leaving node detached");
            return;
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent);
        }
    }

    /// Detach a node from its parent without removing it
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|c| *c != id);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = None;
        }
    }

    /// Remove a node and its entire subtree
    ///
    /// Removing a missing node, or the root, is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root {
            tracing::warn!("ignoring attempt to remove the stage root");
            return;
        }
        if !self.nodes.contains_key(id) {
            return;
        }
        self.detach(id);

        let mut pending: SmallVec<[NodeId; 16]> = SmallVec::new();
        pending.push(id);
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(next) {
                pending.extend(node.children);
            }
        }
    }

    /// Remove all children of a node, keeping the node itself
    pub fn clear_children(&mut self, id: NodeId) {
        let children: SmallVec<[NodeId; 16]> = match self.nodes.get(id) {
            Some(node) => node.children.iter().copied().collect(),
            None => return,
        };
        for child in children {
            self.remove(child);
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&StageNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut StageNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Direct child ids of a node (empty for missing nodes)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|n| n.children()).unwrap_or(&[])
    }

    /// Direct child count of a node
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Total node count, including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists, so an "empty" stage holds exactly one node.
        self.nodes.len() <= 1
    }

    /// Count nodes of a given kind anywhere in the stage
    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.values().filter(|n| n.kind == kind).count()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_in_links_parent_and_child() {
        let mut stage = Stage::new();
        let parent = stage.create_in(stage.root(), NodeKind::Section);
        let child = stage.create_in(parent, NodeKind::Particle);

        assert_eq!(stage.children(parent), &[child]);
        assert_eq!(stage.get(child).and_then(|n| n.parent()), Some(parent));
    }

    #[test]
    fn test_remove_is_recursive() {
        let mut stage = Stage::new();
        let section = stage.create_in(stage.root(), NodeKind::Section);
        let a = stage.create_in(section, NodeKind::Particle);
        let b = stage.create_in(a, NodeKind::Particle);

        stage.remove(section);
        assert!(!stage.contains(section));
        assert!(!stage.contains(a));
        assert!(!stage.contains(b));
        assert_eq!(stage.len(), 1); // root only
    }

    #[test]
    fn test_remove_detaches_from_parent() {
        let mut stage = Stage::new();
        let a = stage.create_in(stage.root(), NodeKind::Particle);
        let b = stage.create_in(stage.root(), NodeKind::Particle);

        stage.remove(a);
        assert_eq!(stage.children(stage.root()), &[b]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut stage = Stage::new();
        let a = stage.create_in(stage.root(), NodeKind::Particle);
        stage.remove(a);
        // Second removal of the same id must not disturb anything.
        stage.remove(a);
        assert_eq!(stage.len(), 1);
    }

    #[test]
    fn test_root_cannot_be_removed() {
        let mut stage = Stage::new();
        let root = stage.root();
        stage.remove(root);
        assert!(stage.contains(root));
    }

    #[test]
    fn test_clear_children_keeps_container() {
        let mut stage = Stage::new();
        let section = stage.create_in(stage.root(), NodeKind::Section);
        for _ in 0..4 {
            stage.create_in(section, NodeKind::Particle);
        }

        stage.clear_children(section);
        assert!(stage.contains(section));
        assert_eq!(stage.child_count(section), 0);
        assert_eq!(stage.count_kind(NodeKind::Particle), 0);
    }

    #[test]
    fn test_attach_to_missing_parent_leaves_detached() {
        let mut stage = Stage::new();
        let ghost = stage.create(NodeKind::Container);
        stage.remove(ghost);

        let orphan = stage.create_in(ghost, NodeKind::Particle);
        assert!(stage.contains(orphan));
        assert_eq!(stage.get(orphan).and_then(|n| n.parent()), None);
    }
}
